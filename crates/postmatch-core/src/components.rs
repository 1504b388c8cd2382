//! Pattern-based extraction of postal code and street number.

use std::sync::LazyLock;

use postmatch_model::{AddressComponents, MatchPolicy, PostmatchError, Result};
use regex::Regex;

use crate::normalize::normalize;

static DEFAULT_EXTRACTOR: LazyLock<ComponentExtractor> = LazyLock::new(|| {
    ComponentExtractor::new(&MatchPolicy::default()).expect("Invalid default extraction patterns")
});

/// Compiled extraction rules for one [`MatchPolicy`].
#[derive(Debug, Clone)]
pub struct ComponentExtractor {
    postal_code: Regex,
    number: Regex,
}

impl ComponentExtractor {
    /// Builds the postal-code and street-number patterns from a policy.
    ///
    /// Indicator words are normalized and escaped, so `"número"` and
    /// `"numero"` configure the same rule.
    pub fn new(policy: &MatchPolicy) -> Result<Self> {
        if policy.postal_code_digits == 0 {
            return Err(PostmatchError::InvalidPolicy(
                "postal code digit count must be positive".to_string(),
            ));
        }
        let postal_code = compile(&format!(r"\b\d{{{}}}\b", policy.postal_code_digits))?;

        let indicators: Vec<String> = policy
            .number_indicators
            .iter()
            .map(|word| regex::escape(&normalize(word)))
            .filter(|word| !word.is_empty())
            .collect();
        let number_pattern = if indicators.is_empty() {
            r"\b\s*(\d+)\b".to_string()
        } else {
            format!(r"\b(?:{})?\s*(\d+)\b", indicators.join("|"))
        };
        let number = compile(&number_pattern)?;

        Ok(Self {
            postal_code,
            number,
        })
    }

    /// Extracts components from a raw address.
    pub fn extract(&self, address: &str) -> AddressComponents {
        self.extract_normalized(&normalize(address))
    }

    /// Extracts components from text that is already normalized.
    pub fn extract_normalized(&self, normalized: &str) -> AddressComponents {
        let mut components = AddressComponents::default();

        if let Some(found) = self.postal_code.find(normalized) {
            components.postal_code = found.as_str().to_string();
        }
        if let Some(number) = self
            .number
            .captures(normalized)
            .and_then(|captures| captures.get(1))
        {
            components.number = number.as_str().to_string();
        }

        components
    }
}

impl Default for ComponentExtractor {
    fn default() -> Self {
        DEFAULT_EXTRACTOR.clone()
    }
}

fn compile(pattern: &str) -> Result<Regex> {
    Regex::new(pattern).map_err(|error| PostmatchError::InvalidPattern {
        pattern: pattern.to_string(),
        message: error.to_string(),
    })
}

/// Extracts components using the default policy.
pub fn extract_components(address: &str) -> AddressComponents {
    DEFAULT_EXTRACTOR.extract(address)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn takes_first_postal_code() {
        let components = extract_components("Calle nº 12, 28013 y 08036");
        assert_eq!(components.postal_code, "28013");
        assert_eq!(components.number, "12");
    }

    #[test]
    fn postal_code_needs_exactly_five_digits() {
        assert_eq!(extract_components("Portal 123456").postal_code, "");
        assert_eq!(extract_components("Portal 1234").postal_code, "");
        assert_eq!(extract_components("cp:28013.").postal_code, "28013");
        assert_eq!(extract_components("x28013").postal_code, "");
    }

    #[test]
    fn number_skips_mixed_tokens() {
        let components = extract_components("Piso 3A num 45");
        assert_eq!(components.number, "45");
        assert_eq!(components.postal_code, "");

        assert_eq!(extract_components("abc12 x7y 123456").number, "123456");
    }

    #[test]
    fn number_indicator_is_not_captured() {
        assert_eq!(extract_components("Número 7").number, "7");
        assert_eq!(extract_components("no5 12").number, "5");
        assert_eq!(extract_components("Calle Mayor").number, "");
    }

    #[test]
    fn reserved_fields_stay_empty() {
        let components = extract_components("Calle Gran Vía 31, 28013 Madrid");
        assert_eq!(components.street, "");
        assert_eq!(components.city, "");
        assert_eq!(components.province, "");
        assert_eq!(extract_components(""), AddressComponents::default());
    }

    #[test]
    fn custom_policy_changes_rules() {
        let policy = MatchPolicy {
            postal_code_digits: 4,
            ..MatchPolicy::default()
        }
        .with_number_indicators(["Nr."]);
        let extractor = ComponentExtractor::new(&policy).expect("build extractor");

        let components = extractor.extract("Hauptstrasse Nr. 9, 1010 Wien");
        assert_eq!(components.postal_code, "1010");
        assert_eq!(components.number, "9");
    }

    #[test]
    fn zero_digit_postal_code_is_rejected() {
        let policy = MatchPolicy {
            postal_code_digits: 0,
            ..MatchPolicy::default()
        };
        assert!(ComponentExtractor::new(&policy).is_err());
    }
}
