//! Liveness probe with the active storage backend.

use actix_web::{HttpResponse, web};
use serde::Serialize;

use crate::state::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub storage: &'static str,
    pub version: &'static str,
    pub checked_at: String,
}

/// GET /api/health
///
/// Answers 503 with `status: "degraded"` when the configured database stops
/// answering pings; the in-memory fallback is always healthy.
pub async fn health_check(state: web::Data<AppState>) -> HttpResponse {
    let status = state.storage_status().await;
    let storage = status.name();
    let degraded = !status.is_healthy();

    let body = HealthResponse {
        status: if degraded { "degraded" } else { "ok" },
        storage,
        version: env!("CARGO_PKG_VERSION"),
        checked_at: chrono::Utc::now().to_rfc3339(),
    };

    if degraded {
        tracing::warn!(storage, "Health check degraded");
        HttpResponse::ServiceUnavailable().json(body)
    } else {
        HttpResponse::Ok().json(body)
    }
}
