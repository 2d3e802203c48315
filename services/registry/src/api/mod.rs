//! Registry HTTP API module.
//!
//! # Purpose
//! Exposes the route handler modules, the shared error helpers, and the JSON
//! extractor that maps body rejections onto the API error shape.
pub mod error;
pub mod graduates;
pub mod openapi;
pub mod system;
pub mod types;

use axum::async_trait;
use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequest, Request};
use error::{ApiError, api_schema_violation};

/// `axum::Json` with the rejection mapped to a 400 schema-violation body.
///
/// A payload missing a required field (or carrying a malformed cohort) is a
/// schema violation to this API, not axum's default 422.
pub struct ApiJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for ApiJson<T>
where
    axum::Json<T>: FromRequest<S, Rejection = JsonRejection>,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match axum::Json::<T>::from_request(req, state).await {
            Ok(axum::Json(value)) => Ok(ApiJson(value)),
            Err(rejection) => Err(api_schema_violation(
                "schema_violation",
                &rejection.body_text(),
            )),
        }
    }
}
