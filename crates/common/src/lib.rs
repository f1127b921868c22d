//! Shared types for the product catalog.

mod product;
mod types;

pub use product::{Inventory, Product, ProductDraft, WarehouseEntry, WarehouseType};
pub use types::Sku;
