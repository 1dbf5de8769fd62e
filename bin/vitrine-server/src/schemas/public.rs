use serde::Serialize;
use utoipa::ToSchema;

use super::portfolio::ProjectResponse;
use super::services::ServiceResponse;

/// Home-page preview: a capped slice of each public collection.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct HomePreviewResponse {
    pub services: Vec<ServiceResponse>,
    pub projects: Vec<ProjectResponse>,
}

/// Public portfolio listing.  `categories` is derived from the full fetched
/// set regardless of the active filter, so the filter bar stays stable while
/// the visitor switches between categories.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct PortfolioResponse {
    pub categories: Vec<String>,
    pub projects: Vec<ProjectResponse>,
}
