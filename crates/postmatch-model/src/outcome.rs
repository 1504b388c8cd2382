//! Result of selecting a subscriber for a query address.

use serde::{Deserialize, Serialize};

use crate::subscriber::SubscriberRecord;

/// Outcome of one selection call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum MatchResult {
    /// No eligible candidate cleared the confidence threshold.
    NoMatch,
    /// The winning candidate and its similarity score.
    Match { record: SubscriberRecord, score: f64 },
}

impl MatchResult {
    pub fn is_match(&self) -> bool {
        matches!(self, Self::Match { .. })
    }

    pub fn record(&self) -> Option<&SubscriberRecord> {
        match self {
            Self::Match { record, .. } => Some(record),
            Self::NoMatch => None,
        }
    }

    pub fn score(&self) -> Option<f64> {
        match self {
            Self::Match { score, .. } => Some(*score),
            Self::NoMatch => None,
        }
    }

    /// Consumes the result, returning the matched record if any.
    pub fn into_record(self) -> Option<SubscriberRecord> {
        match self {
            Self::Match { record, .. } => Some(record),
            Self::NoMatch => None,
        }
    }
}
