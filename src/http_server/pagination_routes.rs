//! Pagination Dependency Routes
//!
//! `Pagination` is resolved from the query string by its own extractor, so
//! handlers declare it as an argument and never parse parameters themselves.

use axum::{
    async_trait,
    extract::{FromRequestParts, Query},
    http::request::Parts,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use super::errors::ApiError;

fn default_limit() -> u32 {
    10
}

fn default_page() -> i64 {
    1
}

/// Pagination parameters injected into handlers
///
/// `limit` is unsigned, so negative values are rejected at extraction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    #[serde(default = "default_limit")]
    pub limit: u32,
    #[serde(default = "default_page")]
    pub page: i64,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            limit: default_limit(),
            page: default_page(),
        }
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for Pagination
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(pagination) = Query::<Pagination>::from_request_parts(parts, state).await?;
        Ok(pagination)
    }
}

/// Create pagination demo routes
pub fn pagination_routes() -> Router {
    Router::new()
        .route("/messages", get(paginated_messages_handler))
        .route("/comments", get(paginated_comments_handler))
        .route("/users", get(paginated_users_handler))
}

async fn paginated_messages_handler(pagination: Pagination) -> Json<Value> {
    Json(json!({ "messages": [pagination] }))
}

async fn paginated_comments_handler(pagination: Pagination) -> Json<Value> {
    Json(json!({ "comments": [pagination] }))
}

async fn paginated_users_handler(pagination: Pagination) -> Json<Value> {
    Json(json!({ "user": pagination }))
}
