use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

/// Health check response payload. Constant: no data load, no dependencies.
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
}

/// GET /health -- liveness probe for container orchestration.
async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        service: "portfolio",
    })
}

/// Mount the (unlisted) health check route.
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
