use std::sync::Arc;

use axum::extract::{Path, State};
use axum::routing::{get, put};
use axum::{Json, Router};
use serde_json::{json, Value};
use utoipa::OpenApi;
use validator::Validate;
use vitrine_store::{Order, Project, SelectQuery, PORTFOLIO};

use crate::error::ServerError;
use crate::routes::rows_or_empty;
use crate::schemas::portfolio::{ProjectForm, ProjectResponse};
use crate::state::AppState;

#[derive(OpenApi)]
#[openapi(
    paths(list_projects, create_project, update_project, delete_project),
    components(schemas(ProjectForm, ProjectResponse))
)]
pub struct PortfolioAdminApi;

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/portfolio", get(list_projects).post(create_project))
        .route("/portfolio/{id}", put(update_project).delete(delete_project))
}

/// All projects newest first, for the admin list view.
#[utoipa::path(
    get,
    path = "/admin/portfolio",
    tag = "admin",
    responses(
        (status = 200, description = "All projects, newest first", body = Vec<ProjectResponse>),
        (status = 401, description = "Not authenticated"),
    )
)]
pub async fn list_projects(State(state): State<Arc<AppState>>) -> Json<Vec<ProjectResponse>> {
    let query = SelectQuery::new().order(Order::desc("created_at"));
    let rows = state.store.select::<Project>(PORTFOLIO, &query).await;
    Json(
        rows_or_empty(rows, PORTFOLIO)
            .into_iter()
            .map(Into::into)
            .collect(),
    )
}

/// Create a project from the admin form.  The technology line is split into
/// tags on save.
#[utoipa::path(
    post,
    path = "/admin/portfolio",
    tag = "admin",
    request_body = ProjectForm,
    responses(
        (status = 200, description = "Project created", body = ProjectResponse),
        (status = 400, description = "Missing required field"),
        (status = 502, description = "Store rejected the insert"),
    )
)]
pub async fn create_project(
    State(state): State<Arc<AppState>>,
    Json(form): Json<ProjectForm>,
) -> Result<Json<ProjectResponse>, ServerError> {
    form.validate()?;
    let row: Project = state.store.insert(PORTFOLIO, &form.into_row()).await?;
    Ok(Json(row.into()))
}

/// Overwrite an existing project with the form contents.
#[utoipa::path(
    put,
    path = "/admin/portfolio/{id}",
    tag = "admin",
    request_body = ProjectForm,
    responses(
        (status = 200, description = "Project updated", body = Value),
        (status = 400, description = "Missing required field"),
        (status = 502, description = "Store rejected the update"),
    )
)]
pub async fn update_project(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(form): Json<ProjectForm>,
) -> Result<Json<Value>, ServerError> {
    form.validate()?;
    state.store.update(PORTFOLIO, &id, &form.into_row()).await?;
    Ok(Json(json!({ "updated": true })))
}

/// Delete a project after the admin UI's confirmation prompt.
#[utoipa::path(
    delete,
    path = "/admin/portfolio/{id}",
    tag = "admin",
    responses(
        (status = 200, description = "Project deleted", body = Value),
        (status = 502, description = "Store rejected the delete"),
    )
)]
pub async fn delete_project(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<Value>, ServerError> {
    state.store.delete(PORTFOLIO, &id).await?;
    Ok(Json(json!({ "deleted": true })))
}
