use std::sync::Arc;

use axum::extract::State;
use axum::http::HeaderMap;
use axum::Json;
use serde_json::{json, Value};
use tracing::{info, warn};
use utoipa::OpenApi;

use crate::error::ServerError;
use crate::middleware::auth::bearer_token;
use crate::schemas::auth::{LoginRequest, LoginResponse};
use crate::state::AppState;

// Login and logout are wired directly in the parent router so they stay
// outside the auth gate.
#[derive(OpenApi)]
#[openapi(paths(login, logout), components(schemas(LoginRequest, LoginResponse)))]
pub struct AuthApi;

/// Exchange the shared admin password for a session token.
#[utoipa::path(
    post,
    path = "/admin/login",
    tag = "admin",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Session established", body = LoginResponse),
        (status = 401, description = "Wrong password"),
    )
)]
pub async fn login(
    State(state): State<Arc<AppState>>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, ServerError> {
    match state.sessions.login(&req.password) {
        Some(token) => {
            info!("admin session established");
            Ok(Json(LoginResponse { token }))
        }
        None => {
            warn!("admin login rejected");
            Err(ServerError::Unauthorized)
        }
    }
}

/// Drop the presented session token.  Always succeeds, even for a token
/// that was never issued or has already expired.
#[utoipa::path(
    post,
    path = "/admin/logout",
    tag = "admin",
    responses(
        (status = 200, description = "Session cleared", body = Value),
    )
)]
pub async fn logout(State(state): State<Arc<AppState>>, headers: HeaderMap) -> Json<Value> {
    if let Some(token) = bearer_token(&headers) {
        state.sessions.logout(token);
    }
    Json(json!({ "ok": true }))
}
