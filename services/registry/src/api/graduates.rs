//! Graduate CRUD API handlers.
//!
//! # Purpose
//! Implements the five record endpoints as direct pass-throughs to the store,
//! with consistent error mapping for missing records and schema violations.
//!
//! # Notes
//! Beyond required-field presence (enforced by payload deserialization) and
//! the store's student-id uniqueness, the server does not re-run the client's
//! format rules; see the admin client's validator for those.
use crate::api::ApiJson;
use crate::api::error::{ApiError, api_internal, api_not_found, api_schema_violation};
use crate::api::types::{GraduateListResponse, MessageResponse};
use crate::app::AppState;
use crate::store::StoreError;
use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use registry_model::{Graduate, GraduateFields};

#[utoipa::path(
    get,
    path = "/api/graduates",
    tag = "graduates",
    responses(
        (status = 200, description = "All graduate records, newest first", body = GraduateListResponse)
    )
)]
pub(crate) async fn list_graduates(
    State(state): State<AppState>,
) -> Result<Json<GraduateListResponse>, ApiError> {
    let items = state
        .store
        .list_graduates()
        .await
        .map_err(|err| api_internal("failed to list graduates", &err))?;
    Ok(Json(GraduateListResponse { items }))
}

#[utoipa::path(
    get,
    path = "/api/graduates/{id}",
    tag = "graduates",
    params(
        ("id" = String, Path, description = "Record identifier")
    ),
    responses(
        (status = 200, description = "Graduate record", body = Graduate),
        (status = 404, description = "Record not found", body = crate::api::types::ErrorResponse)
    )
)]
pub(crate) async fn get_graduate(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<Graduate>, ApiError> {
    match state.store.get_graduate(&id).await {
        Ok(graduate) => Ok(Json(graduate)),
        Err(StoreError::NotFound(_)) => Err(api_not_found("graduate not found")),
        Err(err) => Err(api_internal("failed to load graduate", &err)),
    }
}

#[utoipa::path(
    post,
    path = "/api/graduates",
    tag = "graduates",
    request_body = GraduateFields,
    responses(
        (status = 201, description = "Graduate created", body = Graduate),
        (status = 400, description = "Schema violation", body = crate::api::types::ErrorResponse)
    )
)]
pub(crate) async fn create_graduate(
    State(state): State<AppState>,
    ApiJson(body): ApiJson<GraduateFields>,
) -> Result<impl IntoResponse, ApiError> {
    match state.store.create_graduate(body.normalized()).await {
        Ok(graduate) => Ok((StatusCode::CREATED, Json(graduate))),
        Err(StoreError::Conflict(_)) => Err(api_schema_violation(
            "duplicate_student_id",
            "student id is already registered",
        )),
        Err(err) => Err(api_internal("failed to create graduate", &err)),
    }
}

#[utoipa::path(
    put,
    path = "/api/graduates/{id}",
    tag = "graduates",
    params(
        ("id" = String, Path, description = "Record identifier")
    ),
    request_body = GraduateFields,
    responses(
        (status = 200, description = "Graduate updated", body = Graduate),
        (status = 400, description = "Schema violation", body = crate::api::types::ErrorResponse),
        (status = 404, description = "Record not found", body = crate::api::types::ErrorResponse)
    )
)]
pub(crate) async fn update_graduate(
    Path(id): Path<String>,
    State(state): State<AppState>,
    ApiJson(body): ApiJson<GraduateFields>,
) -> Result<Json<Graduate>, ApiError> {
    match state.store.update_graduate(&id, body.normalized()).await {
        Ok(graduate) => Ok(Json(graduate)),
        Err(StoreError::NotFound(_)) => Err(api_not_found("graduate not found")),
        Err(StoreError::Conflict(_)) => Err(api_schema_violation(
            "duplicate_student_id",
            "student id is already registered",
        )),
        Err(err) => Err(api_internal("failed to update graduate", &err)),
    }
}

#[utoipa::path(
    delete,
    path = "/api/graduates/{id}",
    tag = "graduates",
    params(
        ("id" = String, Path, description = "Record identifier")
    ),
    responses(
        (status = 200, description = "Graduate deleted", body = MessageResponse),
        (status = 404, description = "Record not found", body = crate::api::types::ErrorResponse)
    )
)]
pub(crate) async fn delete_graduate(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<MessageResponse>, ApiError> {
    match state.store.delete_graduate(&id).await {
        Ok(()) => Ok(Json(MessageResponse {
            message: "graduate deleted".to_string(),
        })),
        Err(StoreError::NotFound(_)) => Err(api_not_found("graduate not found")),
        Err(err) => Err(api_internal("failed to delete graduate", &err)),
    }
}
