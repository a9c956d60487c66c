//! Health check endpoints

use axum::{http::StatusCode, response::IntoResponse};
use serde::Serialize;

use crate::api::types::Json;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    /// Always false: classification uses a fixed placeholder distribution
    pub model_loaded: bool,
    pub version: &'static str,
}

/// GET /health and /api/health
pub async fn health_check() -> impl IntoResponse {
    let response = HealthResponse {
        status: "ok",
        model_loaded: false,
        version: env!("CARGO_PKG_VERSION"),
    };

    (StatusCode::OK, Json(response))
}

/// Liveness probe
pub async fn live_check() -> impl IntoResponse {
    StatusCode::OK
}
