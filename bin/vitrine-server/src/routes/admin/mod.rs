pub mod auth;
pub mod dashboard;
pub mod messages;
pub mod portfolio;
pub mod services;

use crate::middleware::auth as auth_middleware;
use crate::state::AppState;

use axum::routing::post;
use axum::{middleware, Router};
use std::sync::Arc;
use utoipa::OpenApi;

/// Routes nested under `/admin`.
///
/// Everything except login and logout sits behind the session-token gate;
/// login has to be reachable unauthenticated, and logout clears a session
/// unconditionally whether or not the presented token is still live.
pub fn router(state: Arc<AppState>) -> Router<Arc<AppState>> {
    Router::new()
        .merge(dashboard::router())
        .merge(services::router())
        .merge(portfolio::router())
        .merge(messages::router())
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth_middleware::require_admin,
        ))
        .route("/login", post(auth::login))
        .route("/logout", post(auth::logout))
        .with_state(state.clone())
}

#[derive(OpenApi)]
#[openapi()]
pub struct AdminApi;

pub fn api_docs() -> utoipa::openapi::OpenApi {
    let mut spec = AdminApi::openapi();
    spec.merge(auth::AuthApi::openapi());
    spec.merge(dashboard::DashboardApi::openapi());
    spec.merge(services::ServicesAdminApi::openapi());
    spec.merge(portfolio::PortfolioAdminApi::openapi());
    spec.merge(messages::MessagesAdminApi::openapi());
    spec
}
