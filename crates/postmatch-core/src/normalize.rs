//! Canonical form used for every address comparison.
//!
//! Normalization lowercases, strips nonspacing marks after canonical
//! decomposition, turns anything that is neither a word character nor
//! whitespace into a space, and collapses whitespace runs.

use std::sync::LazyLock;

use regex::Regex;
use unicode_general_category::{GeneralCategory, get_general_category};
use unicode_normalization::UnicodeNormalization;

static NON_WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\w\s]").expect("Invalid non-word regex"));

/// Normalizes an address for comparison. Total and idempotent.
pub fn normalize(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }

    let stripped: String = text
        .to_lowercase()
        .nfd()
        .filter(|ch| !is_nonspacing_mark(*ch))
        .collect();

    NON_WORD
        .replace_all(&stripped, " ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

fn is_nonspacing_mark(ch: char) -> bool {
    matches!(get_general_category(ch), GeneralCategory::NonspacingMark)
}
