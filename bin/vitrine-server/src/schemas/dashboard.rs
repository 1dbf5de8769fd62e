use serde::Serialize;
use utoipa::ToSchema;

/// Summary counters for the admin dashboard, merged from four independent
/// count queries.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct DashboardStats {
    pub services: u64,
    pub portfolio: u64,
    pub messages: u64,
    pub unread_messages: u64,
}
