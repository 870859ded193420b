use crate::domain::model::AgeCategory;

/// A named inclusive age range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AgeBracket {
    pub category: AgeCategory,
    pub min: i64,
    pub max: i64,
}

impl AgeBracket {
    pub const fn new(category: AgeCategory, min: i64, max: i64) -> Self {
        Self { category, min, max }
    }

    pub fn contains(&self, age: i64) -> bool {
        self.min <= age && age <= self.max
    }
}

pub const STANDARD_BRACKETS: [AgeBracket; 3] = [
    AgeBracket::new(AgeCategory::Youth, 0, 24),
    AgeBracket::new(AgeCategory::Adult, 25, 64),
    AgeBracket::new(AgeCategory::Senior, 65, 120),
];

/// Maps an age to the first bracket that contains it.
#[derive(Debug, Clone)]
pub struct Classifier {
    brackets: Vec<AgeBracket>,
}

impl Classifier {
    /// Order of `brackets` is the match order.
    pub fn with_brackets(brackets: Vec<AgeBracket>) -> Self {
        Self { brackets }
    }

    pub fn brackets(&self) -> &[AgeBracket] {
        &self.brackets
    }

    pub fn classify(&self, age: i64) -> Option<AgeCategory> {
        self.brackets
            .iter()
            .find(|bracket| bracket.contains(age))
            .map(|bracket| bracket.category)
    }
}

impl Default for Classifier {
    fn default() -> Self {
        Self::with_brackets(STANDARD_BRACKETS.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_ranges() {
        let classifier = Classifier::default();
        for age in 0..=24 {
            assert_eq!(classifier.classify(age), Some(AgeCategory::Youth), "age {}", age);
        }
        for age in 25..=64 {
            assert_eq!(classifier.classify(age), Some(AgeCategory::Adult), "age {}", age);
        }
        for age in 65..=120 {
            assert_eq!(classifier.classify(age), Some(AgeCategory::Senior), "age {}", age);
        }
    }

    #[test]
    fn test_out_of_range_ages_are_unclassified() {
        let classifier = Classifier::default();
        assert_eq!(classifier.classify(-1), None);
        assert_eq!(classifier.classify(121), None);
        assert_eq!(classifier.classify(i64::MIN), None);
        assert_eq!(classifier.classify(i64::MAX), None);
    }

    #[test]
    fn test_first_match_wins_on_overlap() {
        let classifier = Classifier::with_brackets(vec![
            AgeBracket::new(AgeCategory::Adult, 18, 70),
            AgeBracket::new(AgeCategory::Youth, 0, 20),
            AgeBracket::new(AgeCategory::Senior, 60, 120),
        ]);
        assert_eq!(classifier.classify(19), Some(AgeCategory::Adult));
        assert_eq!(classifier.classify(65), Some(AgeCategory::Adult));
        assert_eq!(classifier.classify(17), Some(AgeCategory::Youth));
        assert_eq!(classifier.classify(71), Some(AgeCategory::Senior));
    }

    #[test]
    fn test_standard_table_has_no_gaps() {
        for pair in STANDARD_BRACKETS.windows(2) {
            assert_eq!(pair[0].max + 1, pair[1].min);
        }
        assert_eq!(STANDARD_BRACKETS[0].min, 0);
    }
}
