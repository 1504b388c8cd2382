//! Subscriber roster records.

use serde::{Deserialize, Serialize};

/// Name shown when a record carries no name.
pub const DEFAULT_DISPLAY_NAME: &str = "Subscriber";

/// A subscriber as supplied by the roster.
///
/// Only `email` and `address` take part in matching; `city` and
/// `postal_code` are passed through untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubscriberRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub address: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,
}

impl SubscriberRecord {
    pub fn new(name: impl Into<String>, email: impl Into<String>, address: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            email: email.into(),
            address: address.into(),
            city: None,
            postal_code: None,
        }
    }

    #[must_use]
    pub fn with_city(mut self, city: impl Into<String>) -> Self {
        self.city = Some(city.into());
        self
    }

    #[must_use]
    pub fn with_postal_code(mut self, postal_code: impl Into<String>) -> Self {
        self.postal_code = Some(postal_code.into());
        self
    }

    /// A record can only be matched when both address and email are present.
    ///
    /// Whitespace-only values count as present.
    pub fn is_eligible(&self) -> bool {
        !self.address.is_empty() && !self.email.is_empty()
    }

    /// Name for display, falling back to [`DEFAULT_DISPLAY_NAME`].
    pub fn display_name(&self) -> &str {
        match self.name.as_deref() {
            Some(name) if !name.is_empty() => name,
            _ => DEFAULT_DISPLAY_NAME,
        }
    }
}
