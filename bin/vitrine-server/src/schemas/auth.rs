use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct LoginRequest {
    pub password: String,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct LoginResponse {
    /// Bearer token to present on every admin call.  The client keeps it
    /// (it is the persisted session marker) and presents it again after a
    /// reload; it expires server-side.
    pub token: String,
}
