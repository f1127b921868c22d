//! Operational endpoints: liveness and Prometheus scraping.

use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use axum::http::{StatusCode, header};
use axum::response::IntoResponse;
use catalog::{CatalogService, ProductStore};
use metrics_exporter_prometheus::PrometheusHandle;
use serde::Serialize;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub products: usize,
}

/// GET /health — reports liveness and the number of stored products.
pub async fn health<S: ProductStore + 'static>(
    State(service): State<Arc<CatalogService<S>>>,
) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        products: service.store().len().await,
    })
}

/// GET /metrics — renders the Prometheus exposition text.
pub async fn metrics(State(handle): State<PrometheusHandle>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4; charset=utf-8")],
        handle.render(),
    )
}
