use serde::{Deserialize, Serialize};

/// Stock keeping unit identifying a product in the catalog.
///
/// Wraps the numeric SKU to keep it from being mixed up with
/// quantities and other plain integers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Sku(u64);

impl Sku {
    /// Creates a SKU from its numeric value.
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Returns the numeric value.
    pub const fn value(&self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for Sku {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for Sku {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl From<Sku> for u64 {
    fn from(sku: Sku) -> Self {
        sku.0
    }
}
