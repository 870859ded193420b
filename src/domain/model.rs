use serde::{Deserialize, Serialize};
use std::fmt;

/// One parsed input row before enrichment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawRecord {
    pub name: String,
    pub email: String,
    pub age: i64,
    pub city: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AgeCategory {
    Youth,
    Adult,
    Senior,
}

impl AgeCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            AgeCategory::Youth => "youth",
            AgeCategory::Adult => "adult",
            AgeCategory::Senior => "senior",
        }
    }
}

impl fmt::Display for AgeCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// A record after age classification. Field order here is the field order of the
/// emitted document; `age_category` serializes as `null` when no bracket matched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputRecord {
    pub name: String,
    pub email: String,
    #[serde(rename = "ageCategory")]
    pub age_category: Option<AgeCategory>,
    pub city: String,
}

/// What the transformer does with an age that falls outside every bracket.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutOfRangePolicy {
    /// Emit the record with a `null` category.
    #[default]
    Null,
    /// Fail the run with `EtlError::InvalidAge`.
    Reject,
}

/// Per-category counts produced alongside a transform.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransformSummary {
    pub youth: usize,
    pub adult: usize,
    pub senior: usize,
    pub uncategorized: usize,
}

impl TransformSummary {
    pub fn record(&mut self, category: Option<AgeCategory>) {
        match category {
            Some(AgeCategory::Youth) => self.youth += 1,
            Some(AgeCategory::Adult) => self.adult += 1,
            Some(AgeCategory::Senior) => self.senior += 1,
            None => self.uncategorized += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.youth + self.adult + self.senior + self.uncategorized
    }
}

#[derive(Debug, Clone)]
pub struct TransformResult {
    pub records: Vec<OutputRecord>,
    pub summary: TransformSummary,
}
