//! OpenAPI schema aggregation for the registry API.
//!
//! # Purpose
//! Collects all routes and schema types into a single OpenAPI document served
//! next to the Swagger UI.
use crate::api::{
    graduates, system,
    types::{ErrorResponse, GraduateListResponse, HealthStatus, MessageResponse, SystemInfo},
};
use registry_model::{Graduate, GraduateFields};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "alumni-registry",
        version = "v1",
        description = "Graduate record management HTTP API"
    ),
    paths(
        system::system_info,
        system::system_health,
        graduates::list_graduates,
        graduates::get_graduate,
        graduates::create_graduate,
        graduates::update_graduate,
        graduates::delete_graduate
    ),
    components(schemas(
        ErrorResponse,
        Graduate,
        GraduateFields,
        GraduateListResponse,
        HealthStatus,
        MessageResponse,
        SystemInfo
    )),
    tags(
        (name = "system", description = "System and health endpoints"),
        (name = "graduates", description = "Graduate record management")
    )
)]
pub struct ApiDoc;
