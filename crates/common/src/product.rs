//! Product records as stored in, and submitted to, the catalog.

use serde::{Deserialize, Serialize};

use crate::Sku;

/// Channel a warehouse sells through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WarehouseType {
    PhysicalStore,
    Ecommerce,
}

impl std::fmt::Display for WarehouseType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::PhysicalStore => write!(f, "PHYSICAL_STORE"),
            Self::Ecommerce => write!(f, "ECOMMERCE"),
        }
    }
}

/// Stock held for a product at a single warehouse.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WarehouseEntry {
    pub locality: String,
    pub quantity: u64,
    #[serde(rename = "type")]
    pub warehouse_type: WarehouseType,
}

impl WarehouseEntry {
    pub fn new(locality: impl Into<String>, quantity: u64, warehouse_type: WarehouseType) -> Self {
        Self {
            locality: locality.into(),
            quantity,
            warehouse_type,
        }
    }
}

/// Inventory of a stored product.
///
/// `quantity` is the sum of the warehouse quantities at the time the
/// record was written. It is wider than a single warehouse quantity so the
/// sum is exact for any number of warehouses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Inventory {
    pub quantity: u128,
    pub warehouses: Vec<WarehouseEntry>,
}

/// A product in its stored form, with derived fields filled in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub sku: Sku,
    pub name: String,
    pub inventory: Inventory,
    pub is_marketable: bool,
}

/// The caller-settable part of a product.
///
/// Derived fields have no place here; they are computed when the draft
/// is written to the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductDraft {
    pub sku: Sku,
    pub name: String,
    pub warehouses: Vec<WarehouseEntry>,
}

impl ProductDraft {
    pub fn new(sku: Sku, name: impl Into<String>, warehouses: Vec<WarehouseEntry>) -> Self {
        Self {
            sku,
            name: name.into(),
            warehouses,
        }
    }
}

/// Drops the derived fields of a stored product, keeping what a caller
/// could have submitted.
impl From<Product> for ProductDraft {
    fn from(product: Product) -> Self {
        Self {
            sku: product.sku,
            name: product.name,
            warehouses: product.inventory.warehouses,
        }
    }
}
