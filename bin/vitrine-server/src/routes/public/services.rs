use std::sync::Arc;

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use utoipa::OpenApi;
use vitrine_store::{Order, SelectQuery, Service, SERVICES};

use crate::routes::rows_or_empty;
use crate::schemas::services::ServiceResponse;
use crate::state::AppState;

#[derive(OpenApi)]
#[openapi(paths(list_services), components(schemas(ServiceResponse)))]
pub struct ServicesApi;

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/services", get(list_services))
}

/// All services in insertion order (oldest first), read-only.
#[utoipa::path(
    get,
    path = "/v1/services",
    tag = "public",
    responses(
        (status = 200, description = "All services, oldest first", body = Vec<ServiceResponse>),
    )
)]
pub async fn list_services(State(state): State<Arc<AppState>>) -> Json<Vec<ServiceResponse>> {
    let query = SelectQuery::new().order(Order::asc("created_at"));
    let rows = state.store.select::<Service>(SERVICES, &query).await;
    Json(
        rows_or_empty(rows, SERVICES)
            .into_iter()
            .map(Into::into)
            .collect(),
    )
}
