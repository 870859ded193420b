use crate::domain::model::{OutputRecord, RawRecord};
use crate::utils::error::Result;
use csv::ReaderBuilder;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";
const INDENT: &[u8] = b"    ";

/// Parses a headed delimited-text buffer into raw records, in row order.
///
/// Columns are matched by header name, so column order is free and extra
/// columns are ignored. A missing column or a non-integer `age` is an error.
pub fn parse_records(data: &[u8], delimiter: u8) -> Result<Vec<RawRecord>> {
    let data = data.strip_prefix(UTF8_BOM).unwrap_or(data);

    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .delimiter(delimiter)
        .from_reader(data);

    let mut records = Vec::new();
    for row in reader.deserialize::<RawRecord>() {
        records.push(row?);
    }
    Ok(records)
}

/// Renders records as a JSON array with 4-space indentation and no trailing newline.
pub fn render_document(records: &[OutputRecord]) -> Result<Vec<u8>> {
    let mut buffer = Vec::new();
    let mut serializer =
        serde_json::Serializer::with_formatter(&mut buffer, PrettyFormatter::with_indent(INDENT));
    records.serialize(&mut serializer)?;
    Ok(buffer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::AgeCategory;
    use crate::utils::error::EtlError;

    #[test]
    fn test_parse_basic_csv() {
        let data = b"name,email,age,city\nAna,a@x.com,30,Lviv\nBo,b@x.com,7,Kyiv\n";
        let records = parse_records(data, b',').unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(
            records[0],
            RawRecord {
                name: "Ana".to_string(),
                email: "a@x.com".to_string(),
                age: 30,
                city: "Lviv".to_string(),
            }
        );
        assert_eq!(records[1].age, 7);
    }

    #[test]
    fn test_parse_reordered_and_extra_columns() {
        let data = b"city,age,id,email,name\nLviv,30,9,a@x.com,Ana\n";
        let records = parse_records(data, b',').unwrap();
        assert_eq!(records[0].name, "Ana");
        assert_eq!(records[0].city, "Lviv");
        assert_eq!(records[0].age, 30);
    }

    #[test]
    fn test_parse_quoted_fields_and_bom() {
        let data = "\u{feff}name,email,age,city\n\"Doe, Jane\",j@x.com,-4,\"New\nYork\"\n";
        let records = parse_records(data.as_bytes(), b',').unwrap();
        assert_eq!(records[0].name, "Doe, Jane");
        assert_eq!(records[0].age, -4);
        assert_eq!(records[0].city, "New\nYork");
    }

    #[test]
    fn test_parse_custom_delimiter() {
        let data = b"name;email;age;city\nAna;a@x.com;65;Lviv\n";
        let records = parse_records(data, b';').unwrap();
        assert_eq!(records[0].age, 65);
    }

    #[test]
    fn test_parse_header_only_and_empty() {
        assert!(parse_records(b"name,email,age,city\n", b',').unwrap().is_empty());
        assert!(parse_records(b"", b',').unwrap().is_empty());
    }

    #[test]
    fn test_parse_rejects_non_numeric_age() {
        let data = b"name,email,age,city\nAna,a@x.com,thirty,Lviv\n";
        let err = parse_records(data, b',').unwrap_err();
        assert!(matches!(err, EtlError::CsvError(_)));
    }

    #[test]
    fn test_parse_rejects_missing_column() {
        let data = b"name,email,city\nAna,a@x.com,Lviv\n";
        assert!(parse_records(data, b',').is_err());
    }

    #[test]
    fn test_render_document_layout() {
        let records = vec![
            OutputRecord {
                name: "Ana".to_string(),
                email: "a@x.com".to_string(),
                age_category: Some(AgeCategory::Adult),
                city: "Lviv".to_string(),
            },
            OutputRecord {
                name: "Old".to_string(),
                email: "o@x.com".to_string(),
                age_category: None,
                city: "Kyiv".to_string(),
            },
        ];

        let rendered = String::from_utf8(render_document(&records).unwrap()).unwrap();

        let expected = r#"[
    {
        "name": "Ana",
        "email": "a@x.com",
        "ageCategory": "adult",
        "city": "Lviv"
    },
    {
        "name": "Old",
        "email": "o@x.com",
        "ageCategory": null,
        "city": "Kyiv"
    }
]"#;
        assert_eq!(rendered, expected);
    }

    #[test]
    fn test_render_empty_document() {
        assert_eq!(render_document(&[]).unwrap(), b"[]");
    }
}
