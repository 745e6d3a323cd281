//! Observability HTTP Routes
//!
//! Health check reporting the version and the size of each store.

use axum::{extract::State, http::StatusCode, response::IntoResponse, routing::get, Json, Router};
use serde::Serialize;

use crate::store::SharedStore;

/// Stores whose sizes are reported
#[derive(Debug, Clone)]
pub struct HealthState {
    pub messages: SharedStore,
    pub comments: SharedStore,
}

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub messages: usize,
    pub comments: usize,
}

/// Health check route
pub fn health_routes(state: HealthState) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .with_state(state)
}

/// Health check handler
async fn health_handler(State(state): State<HealthState>) -> impl IntoResponse {
    let response = HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        messages: state.messages.len().await,
        comments: state.comments.len().await,
    };

    (StatusCode::OK, Json(response))
}
