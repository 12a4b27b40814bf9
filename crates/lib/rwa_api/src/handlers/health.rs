//! Liveness endpoint.

use axum::Json;
use rwa_core::health::{self, HealthReport};

/// `GET /health`: reports that the process is serving requests.
pub async fn health_handler() -> Json<HealthReport> {
    Json(health::report())
}
