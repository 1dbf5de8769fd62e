use std::sync::Arc;

use axum::extract::{Query, State};
use axum::routing::get;
use axum::{Json, Router};
use serde::Deserialize;
use utoipa::{IntoParams, OpenApi};
use vitrine_store::{Order, Project, SelectQuery, PORTFOLIO};

use crate::routes::rows_or_empty;
use crate::schemas::public::PortfolioResponse;
use crate::state::AppState;

#[derive(OpenApi)]
#[openapi(paths(list_portfolio), components(schemas(PortfolioResponse)))]
pub struct PortfolioApi;

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/portfolio", get(list_portfolio))
}

#[derive(Debug, Deserialize, IntoParams)]
pub struct PortfolioParams {
    /// Category to filter on; `all` or absent returns everything.
    pub category: Option<String>,
}

/// Public portfolio listing, newest first.
///
/// The category filter is applied to the already-fetched set rather than
/// re-querying the store, and the available categories are derived from the
/// full set so the filter bar does not shrink while a filter is active.
#[utoipa::path(
    get,
    path = "/v1/portfolio",
    tag = "public",
    params(PortfolioParams),
    responses(
        (status = 200, description = "Projects and their categories", body = PortfolioResponse),
    )
)]
pub async fn list_portfolio(
    State(state): State<Arc<AppState>>,
    Query(params): Query<PortfolioParams>,
) -> Json<PortfolioResponse> {
    let query = SelectQuery::new().order(Order::desc("created_at"));
    let rows = state.store.select::<Project>(PORTFOLIO, &query).await;
    let projects = rows_or_empty(rows, PORTFOLIO);

    let categories = distinct_categories(&projects);
    let filtered = filter_by_category(projects, params.category.as_deref());

    Json(PortfolioResponse {
        categories,
        projects: filtered.into_iter().map(Into::into).collect(),
    })
}

/// Distinct categories in first-appearance order.
fn distinct_categories(projects: &[Project]) -> Vec<String> {
    let mut seen = Vec::new();
    for project in projects {
        if !seen.contains(&project.category) {
            seen.push(project.category.clone());
        }
    }
    seen
}

/// `all` (or no filter) bypasses filtering; anything else keeps exactly the
/// projects whose category equals the requested value.
fn filter_by_category(projects: Vec<Project>, category: Option<&str>) -> Vec<Project> {
    match category {
        None | Some("all") => projects,
        Some(wanted) => projects
            .into_iter()
            .filter(|p| p.category == wanted)
            .collect(),
    }
}

// ── Tests ──────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod test {
    use super::*;

    fn project(id: &str, category: &str) -> Project {
        Project {
            id: id.into(),
            title: format!("project {id}"),
            description: String::new(),
            category: category.into(),
            kind: String::new(),
            image: String::new(),
            link: String::new(),
            technologies: Vec::new(),
            status: Default::default(),
            created_at: None,
        }
    }

    #[test]
    fn categories_are_distinct_in_first_appearance_order() {
        let projects = vec![
            project("1", "web"),
            project("2", "mobile"),
            project("3", "web"),
            project("4", "design"),
        ];
        assert_eq!(distinct_categories(&projects), vec!["web", "mobile", "design"]);
    }

    #[test]
    fn all_filter_returns_the_full_set() {
        let projects = vec![project("1", "web"), project("2", "mobile")];
        assert_eq!(filter_by_category(projects.clone(), Some("all")).len(), 2);
        assert_eq!(filter_by_category(projects, None).len(), 2);
    }

    #[test]
    fn category_filter_returns_exactly_the_matching_subset() {
        let projects = vec![
            project("1", "web"),
            project("2", "mobile"),
            project("3", "web"),
        ];
        let filtered = filter_by_category(projects, Some("web"));
        let ids: Vec<_> = filtered.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "3"]);
    }

    #[test]
    fn unknown_category_yields_empty_set() {
        let projects = vec![project("1", "web")];
        assert!(filter_by_category(projects, Some("games")).is_empty());
    }
}
