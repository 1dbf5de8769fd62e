pub mod contact;
pub mod home;
pub mod portfolio;
pub mod services;

use crate::state::AppState;
use utoipa::OpenApi;

use axum::Router;
use std::sync::Arc;

/// Routes nested under `/v1` (public site surface, read-only except the
/// contact form).
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .merge(home::router())
        .merge(services::router())
        .merge(portfolio::router())
        .merge(contact::router())
}

#[derive(OpenApi)]
#[openapi()]
pub struct PublicApi;

pub fn api_docs() -> utoipa::openapi::OpenApi {
    let mut spec = PublicApi::openapi();
    spec.merge(home::HomeApi::openapi());
    spec.merge(services::ServicesApi::openapi());
    spec.merge(portfolio::PortfolioApi::openapi());
    spec.merge(contact::ContactApi::openapi());
    spec
}
