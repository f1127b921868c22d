use async_trait::async_trait;

use crate::{Product, Sku};

/// Core trait for product store implementations.
///
/// A store owns the keyed collection of product records. Records go in
/// and come out by value, so a caller holding a returned record can never
/// reach into the store's own copy. All implementations must be
/// thread-safe (Send + Sync).
#[async_trait]
pub trait ProductStore: Send + Sync {
    /// Retrieves the record stored under `sku`.
    async fn get(&self, sku: Sku) -> Option<Product>;

    /// Retrieves every stored record.
    ///
    /// Records are returned in the order their SKUs were first inserted.
    /// Overwriting a record keeps its position.
    async fn get_all(&self) -> Vec<Product>;

    /// Inserts the record under `product.sku`, replacing any existing
    /// record for that SKU entirely.
    async fn set(&self, product: Product);

    /// Removes the record stored under `sku`. Removing an absent SKU is a
    /// no-op.
    async fn delete(&self, sku: Sku);

    /// Removes every record.
    async fn clear(&self);

    /// Returns the number of stored records.
    async fn len(&self) -> usize;

    /// Checks whether the store holds no records.
    async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

/// Extension trait providing convenience methods for product stores.
#[async_trait]
pub trait ProductStoreExt: ProductStore {
    /// Checks whether a record exists for `sku`.
    async fn contains(&self, sku: Sku) -> bool {
        self.get(sku).await.is_some()
    }
}

// Blanket implementation for all ProductStore implementations
impl<T: ProductStore + ?Sized> ProductStoreExt for T {}
