use crate::utils::error::{EtlError, Result};
use std::path::Path;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.trim().is_empty() {
        return Err(EtlError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(EtlError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

/// Input and output must not name the same file, the write would clobber the source.
pub fn validate_distinct_paths(input: &str, output: &str) -> Result<()> {
    if Path::new(input) == Path::new(output) {
        return Err(EtlError::InvalidConfigValueError {
            field: "output".to_string(),
            value: output.to_string(),
            reason: "Output path must differ from the input path".to_string(),
        });
    }
    Ok(())
}

pub fn validate_delimiter(field_name: &str, delimiter: char) -> Result<u8> {
    let reason = if !delimiter.is_ascii() {
        Some("Delimiter must be a single ASCII character")
    } else if matches!(delimiter, '"' | '\n' | '\r') {
        Some("Delimiter cannot be a quote or line break")
    } else {
        None
    };

    match reason {
        Some(reason) => Err(EtlError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: delimiter.escape_default().to_string(),
            reason: reason.to_string(),
        }),
        None => Ok(delimiter as u8),
    }
}

pub fn validate_non_empty(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(EtlError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_path() {
        assert!(validate_path("input", "rawData.csv").is_ok());
        assert!(validate_path("input", "").is_err());
        assert!(validate_path("input", "   ").is_err());
        assert!(validate_path("input", "raw\0.csv").is_err());
    }

    #[test]
    fn test_validate_distinct_paths() {
        assert!(validate_distinct_paths("rawData.csv", "processedData.json").is_ok());
        assert!(validate_distinct_paths("data.csv", "data.csv").is_err());
    }

    #[test]
    fn test_validate_delimiter() {
        assert_eq!(validate_delimiter("delimiter", ',').unwrap(), b',');
        assert_eq!(validate_delimiter("delimiter", ';').unwrap(), b';');
        assert_eq!(validate_delimiter("delimiter", '\t').unwrap(), b'\t');
        assert!(validate_delimiter("delimiter", '"').is_err());
        assert!(validate_delimiter("delimiter", '\n').is_err());
        assert!(validate_delimiter("delimiter", 'é').is_err());
    }

    #[test]
    fn test_validate_non_empty() {
        assert!(validate_non_empty("pipeline.name", "people").is_ok());
        assert!(validate_non_empty("pipeline.name", " \t").is_err());
    }
}
