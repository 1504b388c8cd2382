//! Algebraic properties of normalization and scoring.

use postmatch_core::{normalize, similarity};
use proptest::prelude::*;

const ADDRESS_CHARS: &str = "[a-zA-Z0-9áéíóúñüÁÉÍÓÚÑÜçº ,.;/#()'-]{0,40}";

fn config() -> ProptestConfig {
    ProptestConfig {
        cases: 256,
        ..ProptestConfig::default()
    }
}

proptest! {
    #![proptest_config(config())]

    #[test]
    fn normalize_is_idempotent(text in ADDRESS_CHARS) {
        let once = normalize(&text);
        prop_assert_eq!(normalize(&once), once);
    }

    #[test]
    fn normalized_text_has_canonical_shape(text in "\\PC{0,40}") {
        let normalized = normalize(&text);
        prop_assert_eq!(normalized.trim(), normalized.as_str());
        prop_assert!(!normalized.contains("  "));
        prop_assert!(!normalized.chars().any(|c| c.is_ascii_punctuation() && c != '_'));
    }

    #[test]
    fn similarity_is_symmetric(a in ADDRESS_CHARS, b in ADDRESS_CHARS) {
        prop_assert_eq!(similarity(&a, &b), similarity(&b, &a));
    }

    #[test]
    fn similarity_is_bounded(a in ADDRESS_CHARS, b in ADDRESS_CHARS) {
        let score = similarity(&a, &b);
        prop_assert!((0.0..=1.0).contains(&score), "score {} out of bounds", score);
    }

    #[test]
    fn identical_text_scores_one(a in ADDRESS_CHARS) {
        prop_assert_eq!(similarity(&a, &a), 1.0);
    }

    #[test]
    fn case_and_accents_do_not_matter(a in "[a-z0-9 ]{1,30}") {
        prop_assert_eq!(similarity(&a, &a.to_uppercase()), 1.0);
    }
}

#[test]
fn case_accent_and_punctuation_invariance() {
    assert_eq!(normalize("MADRID"), normalize("Madrid"));
    assert_eq!(normalize("Madrid"), normalize("mádrid"));
    assert_eq!(normalize("Calle, Gran-Vía."), normalize("calle gran via"));
}
