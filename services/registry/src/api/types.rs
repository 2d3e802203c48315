//! HTTP API request/response types.
//!
//! # Purpose
//! Defines shared payload shapes for the registry REST API and OpenAPI
//! schema generation. The record and field-set payloads themselves live in
//! `registry-model` and are reused by the admin client.
use registry_model::Graduate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
    pub request_id: Option<String>,
}

/// List envelope. Older server revisions returned a bare array; the admin
/// client still accepts both shapes.
#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct GraduateListResponse {
    pub items: Vec<Graduate>,
}

/// Delete confirmation body.
#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct SystemInfo {
    pub service: String,
    pub api_version: String,
    pub storage_backend: String,
    pub durable_storage: bool,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct HealthStatus {
    pub status: String,
}
