//! Observability hooks for subscriber selection.
//!
//! The selector reports every comparison to a [`MatchObserver`] supplied by
//! the caller. Observers never influence the outcome.

use postmatch_model::{MatchResult, SubscriberRecord};
use tracing::{debug, info, trace};

/// Placeholder used when address and email logging is disabled.
pub const REDACTED_VALUE: &str = "[REDACTED]";

/// Receives selection events.
pub trait MatchObserver {
    /// Called once before the first candidate is examined.
    fn on_start(&mut self, _query: &str, _candidates: usize) {}

    /// Called for a candidate skipped for lacking an address or email.
    fn on_skipped(&mut self, _position: usize, _record: &SubscriberRecord) {}

    /// Called after an eligible candidate has been scored.
    fn on_candidate(&mut self, position: usize, record: &SubscriberRecord, score: f64);

    /// Called once with the final result.
    fn on_outcome(&mut self, query: &str, result: &MatchResult);
}

/// Discards every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl MatchObserver for NoopObserver {
    fn on_candidate(&mut self, _position: usize, _record: &SubscriberRecord, _score: f64) {}

    fn on_outcome(&mut self, _query: &str, _result: &MatchResult) {}
}

/// Emits selection events through `tracing`.
///
/// Addresses and emails are personal data, so they are replaced with
/// [`REDACTED_VALUE`] unless `log_data` is set.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver {
    log_data: bool,
}

impl TracingObserver {
    pub fn new(log_data: bool) -> Self {
        Self { log_data }
    }

    /// Returns the input value when data logging is enabled, otherwise a redacted token.
    pub fn redact<'a>(&self, value: &'a str) -> &'a str {
        if self.log_data { value } else { REDACTED_VALUE }
    }
}

impl MatchObserver for TracingObserver {
    fn on_start(&mut self, query: &str, candidates: usize) {
        debug!(
            query = self.redact(query),
            candidates, "looking for a matching subscriber"
        );
    }

    fn on_skipped(&mut self, position: usize, record: &SubscriberRecord) {
        debug!(
            position,
            missing_address = record.address.is_empty(),
            missing_email = record.email.is_empty(),
            "skipping ineligible subscriber"
        );
    }

    fn on_candidate(&mut self, position: usize, record: &SubscriberRecord, score: f64) {
        trace!(
            position,
            address = self.redact(&record.address),
            score, "compared subscriber address"
        );
    }

    fn on_outcome(&mut self, _query: &str, result: &MatchResult) {
        match result {
            MatchResult::Match { record, score } => info!(
                score = *score,
                email = self.redact(&record.email),
                "found matching subscriber"
            ),
            MatchResult::NoMatch => info!("no matching subscriber found"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn redaction_follows_flag() {
        assert_eq!(TracingObserver::default().redact("ana@example.com"), REDACTED_VALUE);
        assert_eq!(TracingObserver::new(true).redact("ana@example.com"), "ana@example.com");
    }
}
