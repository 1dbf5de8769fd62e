//! Axum router construction.
//!
//! [`build`] assembles the complete application router, including:
//! - Middleware layers (CORS, per-request trace-ID injection)
//! - Optional Swagger UI / OpenAPI spec endpoint (disable with `VITRINE_ENABLE_SWAGGER=false`)
//! - Health / heartbeat route
//! - Public site `/v1` routes
//! - Admin `/admin` routes behind the session-token gate

mod admin;
pub mod doc;
mod health;
mod public;

use std::sync::Arc;

use axum::{middleware, Router};
use tower::ServiceBuilder;
use tracing::warn;
use utoipa_swagger_ui::SwaggerUi;
use vitrine_store::StoreError;

use crate::middleware::{cors, trace};
use crate::state::AppState;

// ── Router builder ────────────────────────────────────────────────────────────

/// Build the complete Axum [`Router`] for the application.
pub fn build(state: Arc<AppState>) -> Router {
    let api_router = Router::new()
        .merge(health::router())
        .nest("/v1", public::router())
        .nest("/admin", admin::router(state.clone()));

    let mut app = Router::new().merge(api_router);

    // ── Swagger UI ────────────────────────────────────────────────────────────
    // Enabled by default; disable with VITRINE_ENABLE_SWAGGER=false in
    // production to avoid exposing the API structure to potential attackers.
    let api_doc = doc::get_docs();

    if state.config.enable_swagger {
        app = app.merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", api_doc));
    }

    app
        // Outermost layers execute first on the way in.
        .layer(ServiceBuilder::new().layer(cors::cors_layer(
            state.config.cors_allowed_origins.as_deref(),
        )))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            trace::trace_middleware,
        ))
        .with_state(state)
}

// ── Shared degrade paths ──────────────────────────────────────────────────────

/// Collapse a failed fetch into "no data", logging the cause.  Read paths
/// never surface store errors to the caller; they render empty instead.
pub(crate) fn rows_or_empty<T>(
    result: Result<Vec<T>, StoreError>,
    collection: &'static str,
) -> Vec<T> {
    match result {
        Ok(rows) => rows,
        Err(e) => {
            warn!(collection, error = %e, "fetch failed; treating as no data");
            Vec::new()
        }
    }
}

/// Same degrade for count queries: a failed count reads as zero.
pub(crate) fn count_or_zero(result: Result<u64, StoreError>, collection: &'static str) -> u64 {
    match result {
        Ok(count) => count,
        Err(e) => {
            warn!(collection, error = %e, "count failed; treating as zero");
            0
        }
    }
}
