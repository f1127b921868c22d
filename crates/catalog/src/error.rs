//! Catalog error types.

use common::Sku;
use thiserror::Error;

/// Business rule violations reported by the catalog engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// The target SKU already holds a product.
    #[error("There is already a product named [{name}] with SKU [{sku}]")]
    DuplicateSku { sku: Sku, name: String },

    /// No product is stored under the addressed SKU.
    #[error("SKU [{0}] not found")]
    SkuNotFound(Sku),
}

impl CatalogError {
    /// Short label used for the `reason` metric and log fields.
    pub fn reason(&self) -> &'static str {
        match self {
            Self::DuplicateSku { .. } => "duplicate_sku",
            Self::SkuNotFound(_) => "sku_not_found",
        }
    }
}
