//! HTTP adapters - REST API implementations.

pub mod scoring;

use axum::{http::StatusCode, response::IntoResponse, routing::get, Json, Router};
use serde_json::json;

use crate::application::EvaluateScenarioHandler;

/// Assembles the application router.
///
/// Middleware (tracing, CORS, timeouts) is layered on by the binary so tests
/// can drive the bare router directly.
pub fn app_router(handler: EvaluateScenarioHandler) -> Router {
    Router::new()
        .route("/health", get(health))
        .nest("/api", scoring::scoring_routes(handler))
}

/// GET /health - Liveness probe
async fn health() -> impl IntoResponse {
    (StatusCode::OK, Json(json!({ "status": "ok" })))
}
