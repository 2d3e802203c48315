//! Registry HTTP application wiring.
//!
//! # Purpose
//! Builds the Axum router, configures middleware, and defines the shared
//! application state injected into handlers.
//!
//! # Notes
//! This module centralizes route composition to keep `main` small and
//! testable. Unknown `/api` routes return a JSON 404; everything else falls
//! through to the static admin UI with an `index.html` fallback for
//! client-side navigation.
use crate::api;
use crate::api::error::ApiError;
use crate::api::openapi::ApiDoc;
use crate::observability;
use crate::store::GraduateStore;
use axum::Router;
use axum::http::Method;
use axum::http::header::CONTENT_TYPE;
use std::path::PathBuf;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;
use tracing_opentelemetry::OpenTelemetrySpanExt;
use utoipa::OpenApi;

#[derive(Clone)]
pub struct AppState {
    pub api_version: String,
    pub store: Arc<dyn GraduateStore + Send + Sync>,
    pub static_dir: PathBuf,
}

async fn api_fallback() -> ApiError {
    api::error::api_not_found("route not found")
}

pub fn build_router(state: AppState) -> Router {
    let trace_layer =
        TraceLayer::new_for_http().make_span_with(|request: &axum::http::Request<_>| {
            let parent = observability::trace_context_from_headers(request.headers());
            let span = tracing::info_span!(
                "http.request",
                method = %request.method(),
                uri = %request.uri(),
                version = ?request.version()
            );
            span.set_parent(parent);
            span
        });

    let cors = CorsLayer::new()
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([CONTENT_TYPE])
        .allow_origin(Any);

    let static_files = ServeDir::new(&state.static_dir)
        .fallback(ServeFile::new(state.static_dir.join("index.html")));

    Router::new()
        .route(
            "/api/graduates",
            axum::routing::get(api::graduates::list_graduates)
                .post(api::graduates::create_graduate),
        )
        .route(
            "/api/graduates/:id",
            axum::routing::get(api::graduates::get_graduate)
                .put(api::graduates::update_graduate)
                .delete(api::graduates::delete_graduate),
        )
        .route(
            "/api/system/info",
            axum::routing::get(api::system::system_info),
        )
        .route(
            "/api/system/health",
            axum::routing::get(api::system::system_health),
        )
        .route("/api/*rest", axum::routing::any(api_fallback))
        .merge(
            utoipa_swagger_ui::SwaggerUi::new("/docs").url("/api/openapi.json", ApiDoc::openapi()),
        )
        .fallback_service(static_files)
        .layer(cors)
        .layer(trace_layer)
        .with_state(state)
}
