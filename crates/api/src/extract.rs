//! Request extractors.

use axum::Json;
use axum::extract::{FromRequest, Request};
use serde::de::DeserializeOwned;
use validator::Validate;

use crate::error::ApiError;

/// JSON body that has been deserialized and validated.
///
/// Malformed bodies and failed validations are both rejected with
/// `400 Bad Request`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await.map_err(|rejection| {
            metrics::counter!("api_invalid_requests_total", "reason" => "malformed").increment(1);
            ApiError::BadRequest(rejection.body_text())
        })?;

        value.validate().map_err(|errors| {
            metrics::counter!("api_invalid_requests_total", "reason" => "validation").increment(1);
            ApiError::BadRequest(errors.to_string())
        })?;

        Ok(Self(value))
    }
}
