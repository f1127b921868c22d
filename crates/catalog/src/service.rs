//! Catalog service providing the product operations.

use common::{Product, ProductDraft, Sku};
use product_store::ProductStore;
use tokio::sync::Mutex;

use crate::derive::derive;
use crate::error::CatalogError;

/// Service for managing the product catalog.
///
/// Owns the business rules over a [`ProductStore`]: stored records are
/// always in derived form and no two records share a SKU. Mutations run
/// behind a single write gate, so the lookup-then-write sequence of each
/// mutating operation is atomic with respect to other mutations. Reads
/// go straight to the store.
pub struct CatalogService<S: ProductStore> {
    store: S,
    write_gate: Mutex<()>,
}

impl<S: ProductStore> CatalogService<S> {
    /// Creates a new catalog service over the given store.
    pub fn new(store: S) -> Self {
        Self {
            store,
            write_gate: Mutex::new(()),
        }
    }

    /// Returns a reference to the underlying store.
    ///
    /// Intended for seeding and resetting the store from test harnesses;
    /// writes made through it bypass the catalog rules.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Adds a new product to the catalog.
    ///
    /// Fails with [`CatalogError::DuplicateSku`] if the SKU is taken.
    #[tracing::instrument(skip(self, draft), fields(sku = %draft.sku))]
    pub async fn create(&self, draft: ProductDraft) -> Result<Sku, CatalogError> {
        let _guard = self.write_gate.lock().await;

        if let Some(existing) = self.store.get(draft.sku).await {
            return Err(reject(duplicate(existing)));
        }

        let product = self.save(&draft).await;
        metrics::counter!("catalog_products_created_total").increment(1);
        tracing::info!(
            quantity = product.inventory.quantity,
            is_marketable = product.is_marketable,
            "product created"
        );
        Ok(product.sku)
    }

    /// Loads a product by SKU.
    ///
    /// Returns None if no product is stored under `sku`.
    #[tracing::instrument(skip(self))]
    pub async fn find_one(&self, sku: Sku) -> Option<Product> {
        self.store.get(sku).await
    }

    /// Lists every product in the catalog.
    #[tracing::instrument(skip(self))]
    pub async fn find_all(&self) -> Vec<Product> {
        self.store.get_all().await
    }

    /// Replaces the product stored under `sku` with `draft`.
    ///
    /// If the draft carries a different SKU the product moves to it. A
    /// move onto a SKU that is already taken fails with
    /// [`CatalogError::DuplicateSku`] and leaves the original untouched.
    #[tracing::instrument(skip(self, draft), fields(new_sku = %draft.sku))]
    pub async fn update(&self, sku: Sku, draft: ProductDraft) -> Result<(), CatalogError> {
        let _guard = self.write_gate.lock().await;

        if self.store.get(sku).await.is_none() {
            return Err(reject(CatalogError::SkuNotFound(sku)));
        }

        if draft.sku != sku {
            // The target must be checked before the old record goes away.
            if let Some(existing) = self.store.get(draft.sku).await {
                return Err(reject(duplicate(existing)));
            }

            self.store.delete(sku).await;
            tracing::debug!(old_sku = %sku, "product moved to new SKU");
        }

        let product = self.save(&draft).await;
        metrics::counter!("catalog_products_updated_total").increment(1);
        tracing::info!(
            quantity = product.inventory.quantity,
            is_marketable = product.is_marketable,
            "product updated"
        );
        Ok(())
    }

    /// Removes the product stored under `sku`.
    ///
    /// Fails with [`CatalogError::SkuNotFound`] if there is none.
    #[tracing::instrument(skip(self))]
    pub async fn remove(&self, sku: Sku) -> Result<(), CatalogError> {
        let _guard = self.write_gate.lock().await;

        if self.store.get(sku).await.is_none() {
            return Err(reject(CatalogError::SkuNotFound(sku)));
        }

        self.store.delete(sku).await;
        self.record_size().await;
        metrics::counter!("catalog_products_removed_total").increment(1);
        tracing::info!("product removed");
        Ok(())
    }

    async fn save(&self, draft: &ProductDraft) -> Product {
        let product = derive(draft);
        self.store.set(product.clone()).await;
        self.record_size().await;
        product
    }

    async fn record_size(&self) {
        metrics::gauge!("catalog_products").set(self.store.len().await as f64);
    }
}

fn duplicate(existing: Product) -> CatalogError {
    CatalogError::DuplicateSku {
        sku: existing.sku,
        name: existing.name,
    }
}

fn reject(err: CatalogError) -> CatalogError {
    metrics::counter!("catalog_rejections_total", "reason" => err.reason()).increment(1);
    tracing::warn!(error = %err, "catalog operation rejected");
    err
}
