use std::sync::Arc;

use axum::extract::State;
use axum::routing::post;
use axum::{Json, Router};
use serde_json::{json, Value};
use tracing::info;
use utoipa::OpenApi;
use validator::Validate;
use vitrine_store::{Message, MESSAGES};

use crate::error::ServerError;
use crate::schemas::messages::ContactForm;
use crate::state::AppState;

#[derive(OpenApi)]
#[openapi(paths(submit_contact), components(schemas(ContactForm)))]
pub struct ContactApi;

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/contact", post(submit_contact))
}

/// Contact-form submission.
///
/// Presence checks run before any store call; a store failure comes back
/// with the raw store message and nothing is retried.  Repeated submissions
/// are not deduplicated.
#[utoipa::path(
    post,
    path = "/v1/contact",
    tag = "public",
    request_body = ContactForm,
    responses(
        (status = 200, description = "Message stored", body = Value),
        (status = 400, description = "Missing required field"),
        (status = 502, description = "Store rejected the insert"),
    )
)]
pub async fn submit_contact(
    State(state): State<Arc<AppState>>,
    Json(form): Json<ContactForm>,
) -> Result<Json<Value>, ServerError> {
    form.validate()?;
    let row: Message = state.store.insert(MESSAGES, &form.into_row()).await?;
    info!(id = %row.id, "contact message stored");
    Ok(Json(json!({ "ok": true })))
}
