//! Product storage for the catalog.
//!
//! Stores hold fully derived product records keyed by SKU. They apply no
//! business rules and raise no errors; absence is reported as `None`.

pub mod memory;
pub mod store;

pub use common::{Product, Sku};
pub use memory::InMemoryProductStore;
pub use store::{ProductStore, ProductStoreExt};
