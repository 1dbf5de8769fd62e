//! Liveness probe.

use std::sync::Arc;

use axum::routing::get;
use axum::{Json, Router};
use serde_json::{json, Value};
use utoipa::OpenApi;

use crate::state::AppState;

#[derive(OpenApi)]
#[openapi(paths(heartbeat))]
pub struct HealthApi;

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/health", get(heartbeat))
}

/// Answers without touching the record store, so deploy checks stay green
/// through store outages (read paths degrade to empty rather than fail, and
/// this probe should not be stricter than they are).
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses(
        (status = 200, description = "Service is up", body = Value)
    )
)]
pub async fn heartbeat() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "service": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

// ── Tests ──────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod test {
    use super::*;

    #[tokio::test]
    async fn heartbeat_names_the_service_and_reports_ok() {
        let Json(body) = heartbeat().await;
        assert_eq!(body["status"], "ok");
        assert_eq!(body["service"], "vitrine-server");
        assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
    }
}
