use serde::{Deserialize, Serialize};

/// Structured fields pulled out of a normalized address.
///
/// Only `number` and `postal_code` are ever filled. `street`, `province`
/// and `city` are reserved and stay empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressComponents {
    pub street: String,
    pub number: String,
    pub postal_code: String,
    pub province: String,
    pub city: String,
}

impl AddressComponents {
    pub fn has_postal_code(&self) -> bool {
        !self.postal_code.is_empty()
    }

    /// True when both sides carry the same non-empty postal code.
    pub fn shares_postal_code(&self, other: &Self) -> bool {
        self.has_postal_code() && self.postal_code == other.postal_code
    }
}
