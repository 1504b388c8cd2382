//! Best-candidate selection over a subscriber roster.
//!
//! Candidates are scanned in roster order. The running best starts at the
//! confidence threshold and is only replaced by a strictly greater score, so
//! a score equal to the threshold never matches and the first candidate to
//! reach the maximum wins ties.

use std::sync::LazyLock;

use postmatch_model::{MatchPolicy, MatchResult, Result, SubscriberRecord};

use crate::observer::{MatchObserver, TracingObserver};
use crate::score::{AddressScore, Scorer};

static DEFAULT_SELECTOR: LazyLock<MatchSelector> = LazyLock::new(MatchSelector::default);

/// A scored candidate, as listed by [`MatchSelector::rank_candidates`].
#[derive(Debug, Clone)]
pub struct RankedCandidate<'a> {
    /// Position of the record in the roster.
    pub position: usize,
    pub record: &'a SubscriberRecord,
    pub score: AddressScore,
    /// Whether the score clears the confidence threshold.
    pub above_threshold: bool,
}

/// Selects the subscriber whose address best matches a query.
#[derive(Debug, Clone, Default)]
pub struct MatchSelector {
    scorer: Scorer,
}

impl MatchSelector {
    pub fn new(scorer: Scorer) -> Self {
        Self { scorer }
    }

    /// Builds a selector for a custom policy.
    pub fn with_policy(policy: MatchPolicy) -> Result<Self> {
        Ok(Self::new(Scorer::new(policy)?))
    }

    pub fn scorer(&self) -> &Scorer {
        &self.scorer
    }

    /// Confidence threshold a score must strictly exceed.
    pub fn threshold(&self) -> f64 {
        self.scorer.policy().threshold
    }

    /// Finds the best match, logging through `tracing` with personal data redacted.
    pub fn find_best_match(&self, query: &str, candidates: &[SubscriberRecord]) -> MatchResult {
        self.find_best_match_observed(query, candidates, &mut TracingObserver::default())
    }

    /// Finds the best match, reporting each step to `observer`.
    pub fn find_best_match_observed(
        &self,
        query: &str,
        candidates: &[SubscriberRecord],
        observer: &mut dyn MatchObserver,
    ) -> MatchResult {
        observer.on_start(query, candidates.len());

        let mut best: Option<&SubscriberRecord> = None;
        let mut best_score = self.threshold();

        for (position, candidate) in candidates.iter().enumerate() {
            if !candidate.is_eligible() {
                observer.on_skipped(position, candidate);
                continue;
            }

            let score = self.scorer.similarity(query, &candidate.address);
            observer.on_candidate(position, candidate, score);

            if score > best_score {
                best_score = score;
                best = Some(candidate);
            }
        }

        let result = match best {
            Some(record) => MatchResult::Match {
                record: record.clone(),
                score: best_score,
            },
            None => MatchResult::NoMatch,
        };
        observer.on_outcome(query, &result);
        result
    }

    /// Scores every eligible candidate, best first.
    ///
    /// Equal scores keep roster order. At most `limit` entries are returned.
    pub fn rank_candidates<'a>(
        &self,
        query: &str,
        candidates: &'a [SubscriberRecord],
        limit: usize,
    ) -> Vec<RankedCandidate<'a>> {
        let threshold = self.threshold();
        let mut ranked: Vec<RankedCandidate<'a>> = candidates
            .iter()
            .enumerate()
            .filter(|(_, record)| record.is_eligible())
            .map(|(position, record)| {
                let score = self.scorer.score(query, &record.address);
                RankedCandidate {
                    position,
                    record,
                    above_threshold: score.score > threshold,
                    score,
                }
            })
            .collect();

        ranked.sort_by(|a, b| b.score.score.total_cmp(&a.score.score));
        ranked.truncate(limit);
        ranked
    }
}

/// Finds the best match under the default policy.
pub fn find_best_match(query: &str, candidates: &[SubscriberRecord]) -> MatchResult {
    DEFAULT_SELECTOR.find_best_match(query, candidates)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str, email: &str, address: &str) -> SubscriberRecord {
        SubscriberRecord::new(name, email, address)
    }

    #[test]
    fn empty_roster_has_no_match() {
        assert_eq!(find_best_match("Calle Mayor 1", &[]), MatchResult::NoMatch);
    }

    #[test]
    fn score_equal_to_threshold_does_not_match() {
        let roster = vec![record("Edge", "edge@example.com", "abcdefgqrs")];
        assert_eq!(find_best_match("abcdefgxyz", &roster), MatchResult::NoMatch);
    }

    #[test]
    fn first_of_equal_scores_wins() {
        let roster = vec![
            record("First", "first@example.com", "Plaza Nueva 15, 41001 Sevilla"),
            record("Second", "second@example.com", "Plaza Nueva 15, 41001 Sevilla"),
        ];
        let result = find_best_match("PLAZA NUEVA 15 41001 SEVILLA", &roster);
        assert_eq!(result.record().and_then(|r| r.name.as_deref()), Some("First"));
    }

    #[test]
    fn later_higher_score_replaces_earlier() {
        let roster = vec![
            record("Close", "close@example.com", "Calle Triana 54, 35002 Las Palmas"),
            record("Exact", "exact@example.com", "Calle Triana 45"),
        ];
        let result = find_best_match("Calle Triana 45", &roster);
        assert_eq!(result.record().and_then(|r| r.name.as_deref()), Some("Exact"));
        assert_eq!(result.score(), Some(1.0));
    }

    #[test]
    fn ineligible_records_are_never_returned() {
        let roster = vec![
            record("No email", "", "Calle Gran Vía 31, 28013 Madrid"),
            record("No address", "noaddr@example.com", ""),
        ];
        assert_eq!(
            find_best_match("Calle Gran Vía 31, 28013 Madrid", &roster),
            MatchResult::NoMatch
        );
        assert_eq!(find_best_match("", &roster), MatchResult::NoMatch);
    }

    #[test]
    fn custom_threshold_is_respected() {
        let selector =
            MatchSelector::with_policy(MatchPolicy::default().with_threshold(0.6)).expect("selector");
        let roster = vec![record("Edge", "edge@example.com", "abcdefgqrs")];
        let result = selector.find_best_match("abcdefgxyz", &roster);
        assert_eq!(result.score(), Some(0.7));
    }

    #[test]
    fn ranking_is_stable_and_limited() {
        let roster = vec![
            record("A", "a@example.com", "Calle Triana 45"),
            record("Skipped", "", "Calle Triana 45"),
            record("B", "b@example.com", "Calle Triana 45"),
            record("C", "c@example.com", "Avenida del Puerto 2"),
        ];
        let ranked = DEFAULT_SELECTOR.rank_candidates("Calle Triana 45", &roster, 2);
        let positions: Vec<_> = ranked.iter().map(|r| r.position).collect();
        assert_eq!(positions, vec![0, 2]);
        assert!(ranked.iter().all(|r| r.above_threshold));
    }
}
