//! Data model shared by the postmatch crates.

pub mod components;
pub mod error;
pub mod outcome;
pub mod policy;
pub mod subscriber;

pub use components::AddressComponents;
pub use error::{PostmatchError, Result};
pub use outcome::MatchResult;
pub use policy::MatchPolicy;
pub use subscriber::{DEFAULT_DISPLAY_NAME, SubscriberRecord};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn match_result_accessors() {
        let record = SubscriberRecord::new("Carmen López", "demo_carmen@example.com", "Plaza Nueva 15");
        let result = MatchResult::Match {
            record: record.clone(),
            score: 0.92,
        };
        assert!(result.is_match());
        assert_eq!(result.score(), Some(0.92));
        assert_eq!(result.record(), Some(&record));
        assert_eq!(result.into_record(), Some(record));

        assert!(!MatchResult::NoMatch.is_match());
        assert_eq!(MatchResult::NoMatch.score(), None);
    }

    #[test]
    fn match_result_serializes_with_status_tag() {
        let json = serde_json::to_value(MatchResult::NoMatch).expect("serialize");
        assert_eq!(json["status"], "no_match");

        let result = MatchResult::Match {
            record: SubscriberRecord::new("Ana", "ana@example.com", "Calle 1"),
            score: 1.0,
        };
        let json = serde_json::to_value(&result).expect("serialize");
        assert_eq!(json["status"], "match");
        assert_eq!(json["record"]["email"], "ana@example.com");
        let round: MatchResult = serde_json::from_value(json).expect("deserialize");
        assert_eq!(round, result);
    }

    #[test]
    fn components_share_postal_code_only_when_present() {
        let empty = AddressComponents::default();
        assert!(!empty.shares_postal_code(&AddressComponents::default()));

        let madrid = AddressComponents {
            postal_code: "28013".to_string(),
            ..AddressComponents::default()
        };
        assert!(madrid.shares_postal_code(&madrid.clone()));
    }
}
