//! HTTP API server with observability for the product catalog.
//!
//! Provides REST endpoints for product management, with structured
//! logging (tracing) and Prometheus metrics.

pub mod config;
pub mod error;
pub mod extract;
pub mod routes;

use std::sync::Arc;

use axum::Router;
use axum::routing::get;
use catalog::{CatalogService, InMemoryProductStore, ProductStore};
use metrics_exporter_prometheus::PrometheusHandle;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Creates the Axum application router with all routes and shared state.
pub fn create_app<S: ProductStore + 'static>(
    service: Arc<CatalogService<S>>,
    metrics_handle: PrometheusHandle,
) -> Router {
    let metrics_router = Router::new()
        .route("/metrics", get(routes::system::metrics))
        .with_state(metrics_handle);

    Router::new()
        .route("/health", get(routes::system::health::<S>))
        .route(
            "/products",
            get(routes::products::list::<S>).post(routes::products::create::<S>),
        )
        .route(
            "/products/{sku}",
            get(routes::products::get::<S>)
                .put(routes::products::update::<S>)
                .delete(routes::products::remove::<S>),
        )
        .with_state(service)
        .merge(metrics_router)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
}

/// Creates the default catalog service over a fresh in-memory store.
pub fn create_default_state() -> Arc<CatalogService<InMemoryProductStore>> {
    Arc::new(CatalogService::new(InMemoryProductStore::new()))
}
