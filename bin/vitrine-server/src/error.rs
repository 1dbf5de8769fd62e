//! Unified server error type.
//!
//! Every handler returns `Result<T, ServerError>`, which implements
//! [`axum::response::IntoResponse`] so errors are automatically converted
//! to a JSON-body HTTP response with an appropriate status code.
//!
//! Store write failures keep the raw store message in the response body:
//! the admin UI shows it verbatim in its failure dialog, and the store
//! sits behind the operator's own credentials so the body is not secret.
//! Unclassified internal errors are still reduced to a generic message.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;
use tracing::error;
use vitrine_store::StoreError;

/// All errors that can occur in the vitrine-server request lifecycle.
#[derive(Debug, Error)]
pub enum ServerError {
    /// Propagated from the hosted record store.
    #[error("store error: {0}")]
    Store(#[from] StoreError),

    /// The caller referenced a resource that does not exist.
    #[error("not found: {0}")]
    NotFound(String),

    /// The caller sent an invalid or malformed request.
    #[error("bad request: {0}")]
    BadRequest(String),

    /// Missing or invalid admin credentials.
    #[error("unauthorised")]
    Unauthorized,

    /// An unclassified internal server error.
    #[error("internal error: {0}")]
    Internal(String),
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let (status, client_message) = match &self {
            // Client-facing errors: expose the message directly.
            ServerError::NotFound(m) => (StatusCode::NOT_FOUND, m.clone()),
            ServerError::BadRequest(m) => (StatusCode::BAD_REQUEST, m.clone()),
            ServerError::Unauthorized => (StatusCode::UNAUTHORIZED, "unauthorised".to_owned()),

            // A rejected write is surfaced with the store's own message; the
            // operation is abandoned and nothing is retried.
            ServerError::Store(e) => {
                error!(error = %e, "record store error");
                (StatusCode::BAD_GATEWAY, e.to_string())
            }

            ServerError::Internal(m) => {
                error!(message = %m, "internal server error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_owned(),
                )
            }
        };
        (status, Json(json!({ "error": client_message }))).into_response()
    }
}

impl From<anyhow::Error> for ServerError {
    fn from(e: anyhow::Error) -> Self {
        // Log the full error chain before discarding it so diagnostic detail
        // is preserved in the server logs even though clients only see a
        // generic message.
        error!(error = ?e, "converting anyhow error to ServerError::Internal");
        ServerError::Internal(e.to_string())
    }
}

impl From<validator::ValidationErrors> for ServerError {
    fn from(e: validator::ValidationErrors) -> Self {
        ServerError::BadRequest(e.to_string())
    }
}
