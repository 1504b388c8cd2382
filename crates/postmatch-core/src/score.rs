//! Address similarity scoring.
//!
//! The base score is the gestalt ratio of the two normalized addresses. When
//! both addresses carry the same postal code a fixed boost is added, and the
//! sum is capped at 1.0.

use std::sync::LazyLock;

use postmatch_model::{AddressComponents, MatchPolicy, Result};

use crate::components::ComponentExtractor;
use crate::gestalt::gestalt_ratio;
use crate::normalize::normalize;

static DEFAULT_SCORER: LazyLock<Scorer> = LazyLock::new(Scorer::default);

/// Score for a single address pair.
#[derive(Debug, Clone)]
pub struct AddressScore {
    /// Final score in `[0, 1]`.
    pub score: f64,
    /// Breakdown of score components for explainability.
    pub explanation: Vec<ScoreComponent>,
}

impl AddressScore {
    /// Human-readable explanation of the score.
    pub fn explain(&self) -> String {
        self.explanation
            .iter()
            .map(|c| format!("{}: {:.0}%", c.name, c.value * 100.0))
            .collect::<Vec<_>>()
            .join("; ")
    }
}

/// A component contributing to the final score.
#[derive(Debug, Clone)]
pub struct ScoreComponent {
    /// Component name (e.g., "Text similarity").
    pub name: &'static str,
    /// Component value (negative for the cap adjustment).
    pub value: f64,
    /// Human-readable description.
    pub description: String,
}

/// Scores address pairs under one [`MatchPolicy`].
#[derive(Debug, Clone)]
pub struct Scorer {
    policy: MatchPolicy,
    extractor: ComponentExtractor,
}

impl Scorer {
    /// Validates the policy and compiles its extraction rules.
    pub fn new(policy: MatchPolicy) -> Result<Self> {
        policy.validate()?;
        let extractor = ComponentExtractor::new(&policy)?;
        Ok(Self { policy, extractor })
    }

    pub fn policy(&self) -> &MatchPolicy {
        &self.policy
    }

    pub fn extractor(&self) -> &ComponentExtractor {
        &self.extractor
    }

    /// Similarity of two raw addresses.
    pub fn similarity(&self, a: &str, b: &str) -> f64 {
        self.score(a, b).score
    }

    /// Similarity of two raw addresses with its breakdown.
    pub fn score(&self, a: &str, b: &str) -> AddressScore {
        let left = normalize(a);
        let right = normalize(b);
        let mut explanation = Vec::new();

        // The ratio depends on argument order; a fixed order keeps the score symmetric.
        let base = if left <= right {
            gestalt_ratio(&left, &right)
        } else {
            gestalt_ratio(&right, &left)
        };
        explanation.push(ScoreComponent {
            name: "Text similarity",
            value: base,
            description: format!("'{left}' vs '{right}'"),
        });

        let mut score = base;

        let left_components = self.extractor.extract_normalized(&left);
        let right_components = self.extractor.extract_normalized(&right);
        if let Some(boost) = self.postal_code_boost(&left_components, &right_components) {
            score += boost;
            explanation.push(ScoreComponent {
                name: "Postal code match",
                value: boost,
                description: format!("Both addresses carry postal code {}", left_components.postal_code),
            });
        }

        if score > 1.0 {
            explanation.push(ScoreComponent {
                name: "Cap",
                value: 1.0 - score,
                description: "Score capped at 100%".into(),
            });
            score = 1.0;
        }

        AddressScore { score, explanation }
    }

    fn postal_code_boost(&self, left: &AddressComponents, right: &AddressComponents) -> Option<f64> {
        left.shares_postal_code(right).then_some(self.policy.postal_code_boost)
    }
}

impl Default for Scorer {
    fn default() -> Self {
        Self {
            policy: MatchPolicy::default(),
            extractor: ComponentExtractor::default(),
        }
    }
}

/// Similarity of two raw addresses under the default policy.
pub fn similarity(a: &str, b: &str) -> f64 {
    DEFAULT_SCORER.similarity(a, b)
}

/// Scored breakdown of two raw addresses under the default policy.
pub fn score_addresses(a: &str, b: &str) -> AddressScore {
    DEFAULT_SCORER.score(a, b)
}
