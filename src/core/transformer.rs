use crate::domain::brackets::Classifier;
use crate::domain::model::{OutOfRangePolicy, OutputRecord, RawRecord, TransformResult, TransformSummary};
use crate::utils::error::{EtlError, Result};

/// Enriches raw rows with their age category. Pure and synchronous.
#[derive(Debug, Clone, Default)]
pub struct Transformer {
    classifier: Classifier,
    policy: OutOfRangePolicy,
}

impl Transformer {
    pub fn new(classifier: Classifier, policy: OutOfRangePolicy) -> Self {
        Self { classifier, policy }
    }

    pub fn with_policy(policy: OutOfRangePolicy) -> Self {
        Self::new(Classifier::default(), policy)
    }

    pub fn policy(&self) -> OutOfRangePolicy {
        self.policy
    }

    /// Output has the same length and order as `records`.
    pub fn transform(&self, records: Vec<RawRecord>) -> Result<TransformResult> {
        let mut summary = TransformSummary::default();
        let mut output = Vec::with_capacity(records.len());

        for (index, record) in records.into_iter().enumerate() {
            let category = self.classifier.classify(record.age);

            if category.is_none() {
                // 資料列編號不含標題列
                let row = index + 1;
                match self.policy {
                    OutOfRangePolicy::Null => {
                        tracing::debug!(
                            "Row {} ('{}'): age {} outside every bracket, emitting null category",
                            row,
                            record.name,
                            record.age
                        );
                    }
                    OutOfRangePolicy::Reject => {
                        return Err(EtlError::InvalidAge {
                            row,
                            name: record.name,
                            age: record.age,
                        });
                    }
                }
            }

            summary.record(category);
            output.push(OutputRecord {
                name: record.name,
                email: record.email,
                age_category: category,
                city: record.city,
            });
        }

        Ok(TransformResult {
            records: output,
            summary,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::AgeCategory;

    fn raw(name: &str, age: i64) -> RawRecord {
        RawRecord {
            name: name.to_string(),
            email: format!("{}@x.com", name.to_lowercase()),
            age,
            city: "Lviv".to_string(),
        }
    }

    #[test]
    fn test_single_record_scenario() {
        let transformer = Transformer::default();
        let input = vec![RawRecord {
            name: "Ana".to_string(),
            email: "a@x.com".to_string(),
            age: 30,
            city: "Lviv".to_string(),
        }];

        let result = transformer.transform(input).unwrap();

        assert_eq!(
            result.records,
            vec![OutputRecord {
                name: "Ana".to_string(),
                email: "a@x.com".to_string(),
                age_category: Some(AgeCategory::Adult),
                city: "Lviv".to_string(),
            }]
        );
        assert_eq!(result.summary.adult, 1);
    }

    #[test]
    fn test_boundaries() {
        let transformer = Transformer::default();
        let ages = [0, 24, 25, 64, 65, 120, 121, -1];
        let input: Vec<RawRecord> = ages.iter().map(|age| raw("P", *age)).collect();

        let categories: Vec<Option<AgeCategory>> = transformer
            .transform(input)
            .unwrap()
            .records
            .into_iter()
            .map(|r| r.age_category)
            .collect();

        assert_eq!(
            categories,
            vec![
                Some(AgeCategory::Youth),
                Some(AgeCategory::Youth),
                Some(AgeCategory::Adult),
                Some(AgeCategory::Adult),
                Some(AgeCategory::Senior),
                Some(AgeCategory::Senior),
                None,
                None,
            ]
        );
    }

    #[test]
    fn test_preserves_order_length_and_copied_fields() {
        let transformer = Transformer::default();
        let input = vec![
            RawRecord {
                name: "  Zoë, Jr. ".to_string(),
                email: "ZOE@Example.COM".to_string(),
                age: 70,
                city: "São Paulo".to_string(),
            },
            raw("Bo", 5),
            raw("Cy", 200),
            raw("Di", 40),
        ];

        let result = transformer.transform(input.clone()).unwrap();

        assert_eq!(result.records.len(), input.len());
        for (raw, out) in input.iter().zip(&result.records) {
            assert_eq!(raw.name, out.name);
            assert_eq!(raw.email, out.email);
            assert_eq!(raw.city, out.city);
        }
        assert_eq!(result.summary.total(), 4);
        assert_eq!(result.summary.uncategorized, 1);
    }

    #[test]
    fn test_empty_input() {
        let result = Transformer::default().transform(Vec::new()).unwrap();
        assert!(result.records.is_empty());
        assert_eq!(result.summary, TransformSummary::default());
    }

    #[test]
    fn test_reject_policy_fails_on_first_out_of_range_row() {
        let transformer = Transformer::with_policy(OutOfRangePolicy::Reject);
        let input = vec![raw("Ana", 30), raw("Old", 121), raw("Neg", -3)];

        let err = transformer.transform(input).unwrap_err();

        match err {
            EtlError::InvalidAge { row, name, age } => {
                assert_eq!(row, 2);
                assert_eq!(name, "Old");
                assert_eq!(age, 121);
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_reject_policy_passes_in_range_input() {
        let transformer = Transformer::with_policy(OutOfRangePolicy::Reject);
        let result = transformer.transform(vec![raw("A", 0), raw("B", 120)]).unwrap();
        assert_eq!(result.records.len(), 2);
        assert_eq!(transformer.policy(), OutOfRangePolicy::Reject);
    }
}
