//! Catalog engine for the product catalog service.
//!
//! This crate owns the business rules of the catalog:
//! - derivation of total quantity and marketability from warehouse stock
//! - SKU uniqueness across create, update and remove
//! - the create/update/remove transitions over a [`ProductStore`]

pub mod derive;
pub mod error;
pub mod service;

pub use common::{Inventory, Product, ProductDraft, Sku, WarehouseEntry, WarehouseType};
pub use derive::derive;
pub use error::CatalogError;
pub use product_store::{InMemoryProductStore, ProductStore};
pub use service::CatalogService;
