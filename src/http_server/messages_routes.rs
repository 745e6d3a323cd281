//! Messages HTTP Routes
//!
//! JSON CRUD API over the messages store.
//!
//! `PUT` is a full replacement and requires `content`; `PATCH` accepts an
//! omitted (or null) `content` and leaves the message untouched.

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::Deserialize;

use super::errors::{ApiError, ApiResult, DetailResponse};
use crate::store::{Record, RecordId, SharedStore, StoreError};

// ==================
// Request Types
// ==================

/// Payload for create and full replace
#[derive(Debug, Deserialize)]
pub struct MessageCreate {
    pub content: String,
}

/// Payload for partial update
#[derive(Debug, Default, Deserialize)]
pub struct MessageUpdate {
    #[serde(default)]
    pub content: Option<String>,
}

// ==================
// Messages Routes
// ==================

/// Create messages routes
pub fn messages_routes(store: SharedStore) -> Router {
    Router::new()
        .route(
            "/messages",
            get(list_messages_handler)
                .post(create_message_handler)
                .delete(delete_all_messages_handler),
        )
        .route(
            "/messages/:message_id",
            get(get_message_handler)
                .put(replace_message_handler)
                .patch(update_message_handler)
                .delete(delete_message_handler),
        )
        .with_state(store)
}

pub(crate) fn message_not_found(err: StoreError) -> ApiError {
    tracing::warn!(message_id = err.id(), "message not found");
    ApiError::not_found("Message not found")
}

// ==================
// Handlers
// ==================

async fn list_messages_handler(State(store): State<SharedStore>) -> Json<Vec<Record>> {
    Json(store.list_all().await)
}

async fn create_message_handler(
    State(store): State<SharedStore>,
    payload: Result<Json<MessageCreate>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<Record>)> {
    let Json(payload) = payload?;
    let message = store.create(payload.content).await;
    tracing::info!(message_id = message.id, "message created");
    Ok((StatusCode::CREATED, Json(message)))
}

async fn get_message_handler(
    State(store): State<SharedStore>,
    id: Result<Path<RecordId>, PathRejection>,
) -> ApiResult<Json<Record>> {
    let Path(id) = id?;
    let message = store.get(id).await.map_err(message_not_found)?;
    Ok(Json(message))
}

async fn replace_message_handler(
    State(store): State<SharedStore>,
    id: Result<Path<RecordId>, PathRejection>,
    payload: Result<Json<MessageCreate>, JsonRejection>,
) -> ApiResult<Json<Record>> {
    let Path(id) = id?;
    let Json(payload) = payload?;
    let message = store
        .replace(id, payload.content)
        .await
        .map_err(message_not_found)?;
    tracing::info!(message_id = id, "message replaced");
    Ok(Json(message))
}

async fn update_message_handler(
    State(store): State<SharedStore>,
    id: Result<Path<RecordId>, PathRejection>,
    payload: Result<Json<MessageUpdate>, JsonRejection>,
) -> ApiResult<Json<Record>> {
    let Path(id) = id?;
    let Json(payload) = payload?;
    let message = store
        .update_partial(id, payload.content)
        .await
        .map_err(message_not_found)?;
    Ok(Json(message))
}

async fn delete_message_handler(
    State(store): State<SharedStore>,
    id: Result<Path<RecordId>, PathRejection>,
) -> ApiResult<Json<DetailResponse>> {
    let Path(id) = id?;
    store.delete(id).await.map_err(message_not_found)?;
    tracing::info!(message_id = id, "message deleted");
    Ok(Json(DetailResponse::new(format!(
        "Message ID={} deleted!",
        id
    ))))
}

async fn delete_all_messages_handler(State(store): State<SharedStore>) -> Json<DetailResponse> {
    store.clear().await;
    tracing::info!("all messages deleted");
    Json(DetailResponse::new("All messages deleted"))
}
