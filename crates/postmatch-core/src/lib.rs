//! Matching of noisy postal addresses against a subscriber roster.
//!
//! The pipeline has four layers, each built on the one below:
//! [`normalize`] → [`extract_components`] → [`similarity`] → [`find_best_match`].
//! Every function is total and free of shared mutable state.

pub mod components;
pub mod gestalt;
pub mod normalize;
pub mod observer;
pub mod score;
pub mod selector;

pub use components::{ComponentExtractor, extract_components};
pub use gestalt::gestalt_ratio;
pub use normalize::normalize;
pub use observer::{MatchObserver, NoopObserver, REDACTED_VALUE, TracingObserver};
pub use score::{AddressScore, ScoreComponent, Scorer, score_addresses, similarity};
pub use selector::{MatchSelector, RankedCandidate, find_best_match};
