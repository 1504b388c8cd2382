//! Tunable matching policy.
//!
//! The defaults reproduce the Spanish-oriented policy the matcher was built
//! around. A JSON policy file only needs to name the fields it overrides.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{PostmatchError, Result};

/// Score a candidate must strictly exceed to be selected.
pub const DEFAULT_THRESHOLD: f64 = 0.7;
/// Added to the base similarity when both postal codes agree.
pub const DEFAULT_POSTAL_CODE_BOOST: f64 = 0.2;
/// Length of a standalone digit run recognised as a postal code.
pub const DEFAULT_POSTAL_CODE_DIGITS: usize = 5;
/// Words that may precede a street number ("nº" is the ordinal abbreviation).
pub const DEFAULT_NUMBER_INDICATORS: &[&str] = &["no", "num", "numero", "nº"];

/// Matching policy constants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchPolicy {
    /// Confidence threshold (exclusive).
    pub threshold: f64,
    /// Boost applied on a postal-code agreement, before capping at 1.0.
    pub postal_code_boost: f64,
    /// Exact digit count of a postal code.
    pub postal_code_digits: usize,
    /// Optional indicator words in front of a street number, already normalized.
    pub number_indicators: Vec<String>,
}

impl Default for MatchPolicy {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            postal_code_boost: DEFAULT_POSTAL_CODE_BOOST,
            postal_code_digits: DEFAULT_POSTAL_CODE_DIGITS,
            number_indicators: DEFAULT_NUMBER_INDICATORS
                .iter()
                .map(|word| (*word).to_string())
                .collect(),
        }
    }
}

impl MatchPolicy {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads a (possibly partial) policy from a JSON file and validates it.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    pub fn from_json_str(text: &str) -> Result<Self> {
        let policy: Self = serde_json::from_str(text)?;
        policy.validate()?;
        Ok(policy)
    }

    #[must_use]
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    #[must_use]
    pub fn with_postal_code_boost(mut self, boost: f64) -> Self {
        self.postal_code_boost = boost;
        self
    }

    #[must_use]
    pub fn with_number_indicators<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.number_indicators = words.into_iter().map(Into::into).collect();
        self
    }

    /// Checks that every constant is usable by the scorer.
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.threshold) {
            return Err(PostmatchError::InvalidPolicy(format!(
                "threshold {} is outside [0, 1]",
                self.threshold
            )));
        }
        if !(0.0..=1.0).contains(&self.postal_code_boost) {
            return Err(PostmatchError::InvalidPolicy(format!(
                "postal code boost {} is outside [0, 1]",
                self.postal_code_boost
            )));
        }
        if self.postal_code_digits == 0 {
            return Err(PostmatchError::InvalidPolicy(
                "postal code digit count must be positive".to_string(),
            ));
        }
        if self.number_indicators.iter().any(|word| word.trim().is_empty()) {
            return Err(PostmatchError::InvalidPolicy(
                "number indicator words must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_constants() {
        let policy = MatchPolicy::default();
        assert_eq!(policy.threshold, 0.7);
        assert_eq!(policy.postal_code_boost, 0.2);
        assert_eq!(policy.postal_code_digits, 5);
        assert_eq!(policy.number_indicators, vec!["no", "num", "numero", "nº"]);
        assert!(policy.validate().is_ok());
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let policy = MatchPolicy::from_json_str(r#"{"threshold": 0.8}"#).expect("parse policy");
        assert_eq!(policy.threshold, 0.8);
        assert_eq!(policy.postal_code_boost, DEFAULT_POSTAL_CODE_BOOST);
        assert_eq!(policy.postal_code_digits, DEFAULT_POSTAL_CODE_DIGITS);
    }

    #[test]
    fn rejects_out_of_range_values() {
        assert!(MatchPolicy::default().with_threshold(1.5).validate().is_err());
        assert!(MatchPolicy::default().with_postal_code_boost(-0.1).validate().is_err());
        assert!(
            MatchPolicy::default()
                .with_number_indicators(["no", " "])
                .validate()
                .is_err()
        );
        assert!(MatchPolicy::from_json_str(r#"{"postal_code_digits": 0}"#).is_err());
    }

    #[test]
    fn rejects_malformed_json() {
        let err = MatchPolicy::from_json_str("{threshold").unwrap_err();
        assert!(matches!(err, PostmatchError::Json(_)));
    }
}
