//! Product catalog CRUD endpoints.

use std::sync::Arc;

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use catalog::{
    CatalogError, CatalogService, Product, ProductDraft, ProductStore, Sku, WarehouseEntry,
    WarehouseType,
};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::ApiError;
use crate::extract::ValidatedJson;

// -- Request types --

/// Body of `POST /products` and `PUT /products/{sku}`.
///
/// Fields not listed here, including any `inventory.quantity` or
/// `isMarketable`, are dropped during deserialization.
#[derive(Debug, Deserialize, Validate)]
pub struct ProductRequest {
    #[validate(range(min = 1, message = "sku must be a positive integer"))]
    pub sku: u64,
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: String,
    #[validate(nested)]
    pub inventory: InventoryRequest,
}

#[derive(Debug, Deserialize, Validate)]
pub struct InventoryRequest {
    #[validate(
        length(min = 1, message = "warehouses must not be empty"),
        nested
    )]
    pub warehouses: Vec<WarehouseRequest>,
}

#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct WarehouseRequest {
    #[validate(length(min = 1, message = "locality must not be empty"))]
    pub locality: String,
    #[validate(range(
        max = 9_007_199_254_740_991_u64,
        message = "quantity must be a safe integer"
    ))]
    pub quantity: u64,
    #[serde(rename = "type")]
    pub warehouse_type: WarehouseType,
}

impl From<ProductRequest> for ProductDraft {
    fn from(req: ProductRequest) -> Self {
        let warehouses = req
            .inventory
            .warehouses
            .into_iter()
            .map(|w| WarehouseEntry::new(w.locality, w.quantity, w.warehouse_type))
            .collect();
        ProductDraft::new(Sku::new(req.sku), req.name, warehouses)
    }
}

// -- Response types --

#[derive(Debug, Serialize)]
pub struct ProductCreatedResponse {
    pub sku: Sku,
}

// -- Handlers --

/// POST /products — add a product to the catalog.
#[tracing::instrument(skip(service, req), fields(sku = req.sku))]
pub async fn create<S: ProductStore + 'static>(
    State(service): State<Arc<CatalogService<S>>>,
    ValidatedJson(req): ValidatedJson<ProductRequest>,
) -> Result<(StatusCode, Json<ProductCreatedResponse>), ApiError> {
    let sku = service.create(req.into()).await?;
    Ok((StatusCode::CREATED, Json(ProductCreatedResponse { sku })))
}

/// GET /products — list every product.
#[tracing::instrument(skip(service))]
pub async fn list<S: ProductStore + 'static>(
    State(service): State<Arc<CatalogService<S>>>,
) -> Json<Vec<Product>> {
    Json(service.find_all().await)
}

/// GET /products/{sku} — load a product by SKU.
#[tracing::instrument(skip(service))]
pub async fn get<S: ProductStore + 'static>(
    State(service): State<Arc<CatalogService<S>>>,
    Path(sku): Path<String>,
) -> Result<Json<Product>, ApiError> {
    let sku = parse_sku(&sku)?;
    let product = service
        .find_one(sku)
        .await
        .ok_or(CatalogError::SkuNotFound(sku))?;
    Ok(Json(product))
}

/// PUT /products/{sku} — replace a product, possibly moving it to a new SKU.
#[tracing::instrument(skip(service, req), fields(new_sku = req.sku))]
pub async fn update<S: ProductStore + 'static>(
    State(service): State<Arc<CatalogService<S>>>,
    Path(sku): Path<String>,
    ValidatedJson(req): ValidatedJson<ProductRequest>,
) -> Result<StatusCode, ApiError> {
    let sku = parse_sku(&sku)?;
    service.update(sku, req.into()).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /products/{sku} — remove a product.
#[tracing::instrument(skip(service))]
pub async fn remove<S: ProductStore + 'static>(
    State(service): State<Arc<CatalogService<S>>>,
    Path(sku): Path<String>,
) -> Result<StatusCode, ApiError> {
    let sku = parse_sku(&sku)?;
    service.remove(sku).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Parses a path SKU.
///
/// Negative integers are well-formed but can never name a stored product,
/// so they resolve to not-found rather than a bad request.
fn parse_sku(raw: &str) -> Result<Sku, ApiError> {
    match raw.parse::<u64>() {
        Ok(sku) => Ok(Sku::new(sku)),
        Err(e) => match raw.parse::<i64>() {
            Ok(_) => Err(ApiError::NotFound(format!("SKU [{raw}] not found"))),
            Err(_) => Err(ApiError::BadRequest(format!("Invalid SKU [{raw}]: {e}"))),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(json: serde_json::Value) -> Result<ProductRequest, String> {
        let req: ProductRequest = serde_json::from_value(json).map_err(|e| e.to_string())?;
        req.validate().map_err(|e| e.to_string())?;
        Ok(req)
    }

    fn valid_body() -> serde_json::Value {
        serde_json::json!({
            "sku": 3,
            "name": "Item 3",
            "inventory": {
                "warehouses": [
                    { "locality": "SP", "quantity": 500, "type": "ECOMMERCE" }
                ]
            }
        })
    }

    #[test]
    fn valid_request_converts_to_draft() {
        let draft = ProductDraft::from(request(valid_body()).unwrap());

        assert_eq!(draft.sku, Sku::new(3));
        assert_eq!(draft.name, "Item 3");
        assert_eq!(
            draft.warehouses,
            vec![WarehouseEntry::new("SP", 500, WarehouseType::Ecommerce)]
        );
    }

    #[test]
    fn derived_fields_in_body_are_ignored() {
        let mut body = valid_body();
        body["inventory"]["quantity"] = serde_json::json!(999);
        body["isMarketable"] = serde_json::json!(false);

        assert!(request(body).is_ok());
    }

    #[test]
    fn zero_sku_is_rejected() {
        let mut body = valid_body();
        body["sku"] = serde_json::json!(0);

        assert!(request(body).is_err());
    }

    #[test]
    fn empty_name_is_rejected() {
        let mut body = valid_body();
        body["name"] = serde_json::json!("");

        assert!(request(body).is_err());
    }

    #[test]
    fn empty_warehouses_are_rejected() {
        let mut body = valid_body();
        body["inventory"]["warehouses"] = serde_json::json!([]);

        assert!(request(body).is_err());
    }

    #[test]
    fn empty_locality_is_rejected() {
        let mut body = valid_body();
        body["inventory"]["warehouses"][0]["locality"] = serde_json::json!("");

        assert!(request(body).is_err());
    }

    #[test]
    fn negative_quantity_is_rejected() {
        let mut body = valid_body();
        body["inventory"]["warehouses"][0]["quantity"] = serde_json::json!(-1);

        assert!(request(body).is_err());
    }

    #[test]
    fn quantity_above_u32_is_accepted() {
        let mut body = valid_body();
        body["inventory"]["warehouses"][0]["quantity"] = serde_json::json!(5_000_000_000u64);

        let draft = ProductDraft::from(request(body).unwrap());
        assert_eq!(draft.warehouses[0].quantity, 5_000_000_000);
    }

    #[test]
    fn quantity_beyond_safe_integer_is_rejected() {
        let mut body = valid_body();
        body["inventory"]["warehouses"][0]["quantity"] =
            serde_json::json!(9_007_199_254_740_992u64);

        assert!(request(body).is_err());
    }

    #[test]
    fn parse_sku_accepts_integers() {
        assert_eq!(parse_sku("42").unwrap(), Sku::new(42));
        assert!(matches!(parse_sku("abc"), Err(ApiError::BadRequest(_))));
        assert!(matches!(parse_sku("1.5"), Err(ApiError::BadRequest(_))));
    }

    #[test]
    fn negative_sku_is_not_found() {
        let err = parse_sku("-1").unwrap_err();

        assert!(matches!(err, ApiError::NotFound(_)));
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
        assert_eq!(err.to_string(), "SKU [-1] not found");
    }
}
