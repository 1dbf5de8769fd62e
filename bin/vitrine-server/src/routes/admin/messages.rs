use std::sync::Arc;

use axum::extract::{Path, State};
use axum::routing::{delete, get, post};
use axum::{Json, Router};
use serde_json::{json, Value};
use tracing::warn;
use utoipa::OpenApi;
use vitrine_store::{Filter, Message, Order, SelectQuery, MESSAGES};

use crate::error::ServerError;
use crate::routes::rows_or_empty;
use crate::schemas::messages::{MessageListResponse, MessageResponse};
use crate::state::AppState;

#[derive(OpenApi)]
#[openapi(
    paths(list_messages, open_message, delete_message),
    components(schemas(MessageListResponse, MessageResponse))
)]
pub struct MessagesAdminApi;

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/messages", get(list_messages))
        .route("/messages/{id}", delete(delete_message))
        .route("/messages/{id}/open", post(open_message))
}

/// All messages newest first, plus the unread tally derived from the same
/// fetched set (no extra count query).
#[utoipa::path(
    get,
    path = "/admin/messages",
    tag = "admin",
    responses(
        (status = 200, description = "All messages, newest first", body = MessageListResponse),
        (status = 401, description = "Not authenticated"),
    )
)]
pub async fn list_messages(State(state): State<Arc<AppState>>) -> Json<MessageListResponse> {
    let query = SelectQuery::new().order(Order::desc("created_at"));
    let rows = state.store.select::<Message>(MESSAGES, &query).await;
    let messages = rows_or_empty(rows, MESSAGES);
    let unread = messages.iter().filter(|m| !m.read).count();
    Json(MessageListResponse {
        messages: messages.into_iter().map(Into::into).collect(),
        unread,
    })
}

/// Open one message for reading.
///
/// Opening an unread message flips its read flag in the store and the
/// returned copy is patched up front; if the store update fails the copy
/// stays patched anyway (optimistic, no rollback).  Opening an already-read
/// message issues no update at all, so the false→true transition happens
/// exactly once.
#[utoipa::path(
    post,
    path = "/admin/messages/{id}/open",
    tag = "admin",
    responses(
        (status = 200, description = "The message, marked read", body = MessageResponse),
        (status = 404, description = "No such message"),
        (status = 401, description = "Not authenticated"),
    )
)]
pub async fn open_message(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, ServerError> {
    let query = SelectQuery::new()
        .filter(Filter::eq("id", id.as_str()))
        .limit(1);
    let mut rows: Vec<Message> = state.store.select(MESSAGES, &query).await?;
    let mut row = rows
        .pop()
        .ok_or_else(|| ServerError::NotFound(format!("message {id}")))?;

    if !row.read {
        if let Err(e) = state
            .store
            .update(MESSAGES, &id, &json!({ "read": true }))
            .await
        {
            warn!(id = %id, error = %e, "mark-read update failed; returned copy stays read");
        }
        row.read = true;
    }

    Ok(Json(row.into()))
}

/// Delete a message after the admin UI's confirmation prompt.
#[utoipa::path(
    delete,
    path = "/admin/messages/{id}",
    tag = "admin",
    responses(
        (status = 200, description = "Message deleted", body = Value),
        (status = 502, description = "Store rejected the delete"),
    )
)]
pub async fn delete_message(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<Value>, ServerError> {
    state.store.delete(MESSAGES, &id).await?;
    Ok(Json(json!({ "deleted": true })))
}
