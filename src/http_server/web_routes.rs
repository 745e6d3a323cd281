//! Web HTML Routes
//!
//! Server-rendered pages over the same store as the messages API, so a
//! message created through the form is visible at `/messages` and vice versa.

use axum::{
    extract::{
        rejection::{FormRejection, PathRejection},
        Form, Path, State,
    },
    http::{header, StatusCode},
    response::{Html, IntoResponse, Response},
    routing::get,
    Router,
};
use serde::Deserialize;

use super::pages;
use crate::store::{RecordId, SharedStore};

/// Form body of the creation page
#[derive(Debug, Deserialize)]
pub struct MessageForm {
    pub content: String,
}

/// Error rendered as an HTML page instead of JSON
#[derive(Debug)]
pub struct PageError {
    status: StatusCode,
    message: String,
}

impl PageError {
    fn not_found() -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            message: "Message not found".to_string(),
        }
    }
}

impl From<PathRejection> for PageError {
    fn from(rejection: PathRejection) -> Self {
        Self {
            status: rejection.status(),
            message: rejection.body_text(),
        }
    }
}

impl From<FormRejection> for PageError {
    fn from(rejection: FormRejection) -> Self {
        Self {
            status: rejection.status(),
            message: rejection.body_text(),
        }
    }
}

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        let title = self
            .status
            .canonical_reason()
            .unwrap_or("Error")
            .to_string();
        (self.status, Html(pages::render_error(&title, &self.message))).into_response()
    }
}

/// Create web page routes
pub fn web_routes(store: SharedStore) -> Router {
    Router::new()
        .route(
            "/web/messages",
            get(messages_page_handler).post(create_message_form_handler),
        )
        .route("/web/messages/create", get(create_page_handler))
        .route("/web/messages/:message_id", get(message_detail_page_handler))
        .route("/static/style.css", get(stylesheet_handler))
        .with_state(store)
}

async fn messages_page_handler(State(store): State<SharedStore>) -> Html<String> {
    Html(pages::render_list(&store.list_all().await))
}

async fn create_page_handler() -> Html<String> {
    Html(pages::render_create_form())
}

async fn create_message_form_handler(
    State(store): State<SharedStore>,
    form: Result<Form<MessageForm>, FormRejection>,
) -> Result<Html<String>, PageError> {
    let Form(form) = form?;
    let message = store.create(form.content).await;
    tracing::info!(message_id = message.id, "message created from form");
    Ok(Html(pages::render_list(&store.list_all().await)))
}

async fn message_detail_page_handler(
    State(store): State<SharedStore>,
    id: Result<Path<RecordId>, PathRejection>,
) -> Result<Html<String>, PageError> {
    let Path(id) = id?;
    match store.get(id).await {
        Ok(message) => Ok(Html(pages::render_detail(&message))),
        Err(err) => {
            tracing::warn!(message_id = err.id(), "message page not found");
            Err(PageError::not_found())
        }
    }
}

async fn stylesheet_handler() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "text/css; charset=utf-8")],
        pages::STYLESHEET,
    )
}
