//! Health endpoint.

use axum::Json;
use chrono::Local;

use crate::models::{HealthResponse, SERVICE_NAME};

/// `GET /api/health` — liveness only; does not probe the completion API.
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        service: SERVICE_NAME,
        timestamp: Local::now().to_rfc3339(),
        version: voxchat_core::version(),
    })
}
