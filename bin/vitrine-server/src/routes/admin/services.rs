use std::sync::Arc;

use axum::extract::{Path, State};
use axum::routing::{get, put};
use axum::{Json, Router};
use serde_json::{json, Value};
use utoipa::OpenApi;
use validator::Validate;
use vitrine_store::{Order, SelectQuery, Service, SERVICES};

use crate::error::ServerError;
use crate::routes::rows_or_empty;
use crate::schemas::services::{ServiceForm, ServiceResponse};
use crate::state::AppState;

#[derive(OpenApi)]
#[openapi(
    paths(list_services, create_service, update_service, delete_service),
    components(schemas(ServiceForm, ServiceResponse))
)]
pub struct ServicesAdminApi;

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/services", get(list_services).post(create_service))
        .route("/services/{id}", put(update_service).delete(delete_service))
}

/// All services in insertion order, for the admin list view.
#[utoipa::path(
    get,
    path = "/admin/services",
    tag = "admin",
    responses(
        (status = 200, description = "All services, oldest first", body = Vec<ServiceResponse>),
        (status = 401, description = "Not authenticated"),
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

/// Create a service from the admin form.  The feature block is split into a
/// list on save; the store assigns id and creation time.
#[utoipa::path(
    post,
    path = "/admin/services",
    tag = "admin",
    request_body = ServiceForm,
    responses(
        (status = 200, description = "Service created", body = ServiceResponse),
        (status = 400, description = "Missing required field"),
        (status = 502, description = "Store rejected the insert"),
    )
)]
pub async fn create_service(
    State(state): State<Arc<AppState>>,
    Json(form): Json<ServiceForm>,
) -> Result<Json<ServiceResponse>, ServerError> {
    form.validate()?;
    let row: Service = state.store.insert(SERVICES, &form.into_row()).await?;
    Ok(Json(row.into()))
}

/// Overwrite an existing service with the form contents.
#[utoipa::path(
    put,
    path = "/admin/services/{id}",
    tag = "admin",
    request_body = ServiceForm,
    responses(
        (status = 200, description = "Service updated", body = Value),
        (status = 400, description = "Missing required field"),
        (status = 502, description = "Store rejected the update"),
    )
)]
pub async fn update_service(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(form): Json<ServiceForm>,
) -> Result<Json<Value>, ServerError> {
    form.validate()?;
    state.store.update(SERVICES, &id, &form.into_row()).await?;
    Ok(Json(json!({ "updated": true })))
}

/// Delete a service.  The admin UI asks for confirmation before calling
/// this; a failure leaves the list untouched on the client.
#[utoipa::path(
    delete,
    path = "/admin/services/{id}",
    tag = "admin",
    responses(
        (status = 200, description = "Service deleted", body = Value),
        (status = 502, description = "Store rejected the delete"),
    )
)]
pub async fn delete_service(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<Value>, ServerError> {
    state.store.delete(SERVICES, &id).await?;
    Ok(Json(json!({ "deleted": true })))
}
