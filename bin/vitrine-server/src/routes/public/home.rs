use std::sync::Arc;

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use utoipa::OpenApi;
use vitrine_store::{Order, Project, SelectQuery, Service, PORTFOLIO, SERVICES};

use crate::routes::rows_or_empty;
use crate::schemas::public::HomePreviewResponse;
use crate::state::AppState;

#[derive(OpenApi)]
#[openapi(paths(get_home), components(schemas(HomePreviewResponse)))]
pub struct HomeApi;

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/home", get(get_home))
}

/// Home-page preview: the first few services (oldest first) and the latest
/// few projects, fetched concurrently.  A failed fetch renders as an empty
/// section, never as an error page.
#[utoipa::path(
    get,
    path = "/v1/home",
    tag = "public",
    responses(
        (status = 200, description = "Preview slices for the home page", body = HomePreviewResponse),
    )
)]
pub async fn get_home(State(state): State<Arc<AppState>>) -> Json<HomePreviewResponse> {
    let limit = state.config.home_preview_limit;
    let services_query = SelectQuery::new().order(Order::asc("created_at")).limit(limit);
    let projects_query = SelectQuery::new()
        .order(Order::desc("created_at"))
        .limit(limit);

    let (services, projects) = tokio::join!(
        state.store.select::<Service>(SERVICES, &services_query),
        state.store.select::<Project>(PORTFOLIO, &projects_query),
    );

    Json(HomePreviewResponse {
        services: rows_or_empty(services, SERVICES)
            .into_iter()
            .map(Into::into)
            .collect(),
        projects: rows_or_empty(projects, PORTFOLIO)
            .into_iter()
            .map(Into::into)
            .collect(),
    })
}
