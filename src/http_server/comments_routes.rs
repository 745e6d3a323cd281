//! Comments HTTP Routes
//!
//! Map-style API: comments are listed as an `{id: content}` object and the
//! request/response bodies are bare JSON strings.

use std::collections::BTreeMap;

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    routing::get,
    Json, Router,
};

use super::errors::{ApiError, ApiResult};
use crate::store::{RecordId, SharedStore, StoreError};

/// Create comments routes
pub fn comments_routes(store: SharedStore) -> Router {
    Router::new()
        .route("/comments", get(list_comments_handler).post(create_comment_handler))
        .route(
            "/comments/:comment_id",
            get(get_comment_handler)
                .put(update_comment_handler)
                .delete(delete_comment_handler),
        )
        .with_state(store)
}

fn comment_not_found(err: StoreError) -> ApiError {
    tracing::warn!(comment_id = err.id(), "comment not found");
    ApiError::not_found("Comment not found")
}

async fn list_comments_handler(
    State(store): State<SharedStore>,
) -> Json<BTreeMap<RecordId, String>> {
    Json(store.snapshot_map().await)
}

async fn get_comment_handler(
    State(store): State<SharedStore>,
    id: Result<Path<RecordId>, PathRejection>,
) -> ApiResult<Json<String>> {
    let Path(id) = id?;
    let comment = store.get(id).await.map_err(comment_not_found)?;
    Ok(Json(comment.content))
}

async fn create_comment_handler(
    State(store): State<SharedStore>,
    body: Result<Json<String>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<&'static str>)> {
    let Json(comment) = body?;
    let created = store.create(comment).await;
    tracing::info!(comment_id = created.id, "comment created");
    Ok((StatusCode::CREATED, Json("Comment created")))
}

async fn update_comment_handler(
    State(store): State<SharedStore>,
    id: Result<Path<RecordId>, PathRejection>,
    body: Result<Json<String>, JsonRejection>,
) -> ApiResult<Json<&'static str>> {
    let Path(id) = id?;
    let Json(comment) = body?;
    store.replace(id, comment).await.map_err(comment_not_found)?;
    Ok(Json("Comment updated"))
}

async fn delete_comment_handler(
    State(store): State<SharedStore>,
    id: Result<Path<RecordId>, PathRejection>,
) -> ApiResult<Json<&'static str>> {
    let Path(id) = id?;
    store.delete(id).await.map_err(comment_not_found)?;
    tracing::info!(comment_id = id, "comment deleted");
    Ok(Json("Comment deleted"))
}
