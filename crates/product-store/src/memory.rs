use std::sync::Arc;

use async_trait::async_trait;
use indexmap::IndexMap;
use tokio::sync::RwLock;

use crate::{Product, ProductStore, Sku};

/// In-memory product store.
///
/// Records live in an insertion-ordered map behind a shared lock. Clones
/// of the store are handles onto the same collection; separate calls to
/// [`InMemoryProductStore::new`] give fully isolated stores.
#[derive(Clone, Default)]
pub struct InMemoryProductStore {
    products: Arc<RwLock<IndexMap<Sku, Product>>>,
}

impl InMemoryProductStore {
    /// Creates a new empty in-memory product store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-populated with `products`, in order.
    pub fn with_products(products: impl IntoIterator<Item = Product>) -> Self {
        let map = products.into_iter().map(|p| (p.sku, p)).collect();
        Self {
            products: Arc::new(RwLock::new(map)),
        }
    }
}

#[async_trait]
impl ProductStore for InMemoryProductStore {
    async fn get(&self, sku: Sku) -> Option<Product> {
        self.products.read().await.get(&sku).cloned()
    }

    async fn get_all(&self) -> Vec<Product> {
        self.products.read().await.values().cloned().collect()
    }

    async fn set(&self, product: Product) {
        let sku = product.sku;
        let mut products = self.products.write().await;
        if products.insert(sku, product).is_some() {
            tracing::trace!(%sku, "product record replaced");
        } else {
            tracing::trace!(%sku, "product record inserted");
        }
    }

    async fn delete(&self, sku: Sku) {
        // shift_remove keeps the remaining records in insertion order
        if self.products.write().await.shift_remove(&sku).is_some() {
            tracing::trace!(%sku, "product record deleted");
        }
    }

    async fn clear(&self) {
        self.products.write().await.clear();
    }

    async fn len(&self) -> usize {
        self.products.read().await.len()
    }
}
