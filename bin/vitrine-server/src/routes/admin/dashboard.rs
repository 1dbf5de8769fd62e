use std::sync::Arc;

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use utoipa::OpenApi;
use vitrine_store::{Filter, MESSAGES, PORTFOLIO, SERVICES};

use crate::routes::count_or_zero;
use crate::schemas::dashboard::DashboardStats;
use crate::state::AppState;

#[derive(OpenApi)]
#[openapi(paths(get_dashboard), components(schemas(DashboardStats)))]
pub struct DashboardApi;

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/dashboard", get(get_dashboard))
}

/// Dashboard summary.
///
/// Four independent count queries fired concurrently and awaited jointly,
/// then merged into one stats object.  A failed count degrades to zero;
/// the dashboard renders whatever it got.
#[utoipa::path(
    get,
    path = "/admin/dashboard",
    tag = "admin",
    responses(
        (status = 200, description = "Collection counters", body = DashboardStats),
        (status = 401, description = "Not authenticated"),
    )
)]
pub async fn get_dashboard(State(state): State<Arc<AppState>>) -> Json<DashboardStats> {
    let unread = Filter::eq("read", "false");
    let (services, portfolio, messages, unread_messages) = tokio::join!(
        state.store.count(SERVICES, None),
        state.store.count(PORTFOLIO, None),
        state.store.count(MESSAGES, None),
        state.store.count(MESSAGES, Some(&unread)),
    );

    Json(DashboardStats {
        services: count_or_zero(services, SERVICES),
        portfolio: count_or_zero(portfolio, PORTFOLIO),
        messages: count_or_zero(messages, MESSAGES),
        unread_messages: count_or_zero(unread_messages, MESSAGES),
    })
}
