//! Web Page Tests
//!
//! HTML views share the messages store with the JSON API.

mod common;

use axum::http::{Method, StatusCode};
use serde_json::json;

use common::{get, post_form, seeded_app, send_json};

fn is_html(content_type: &Option<String>) -> bool {
    content_type
        .as_deref()
        .map(|ct| ct.starts_with("text/html"))
        .unwrap_or(false)
}

#[tokio::test]
async fn test_list_page_shows_messages() {
    let app = seeded_app();
    let response = get(&app, "/web/messages").await;
    assert_eq!(response.status, StatusCode::OK);
    assert!(is_html(&response.content_type));
    assert!(response.body.contains("First message"));
    assert!(response.body.contains("href=\"/web/messages/0\""));
}

#[tokio::test]
async fn test_create_page_has_form() {
    let app = seeded_app();
    let response = get(&app, "/web/messages/create").await;
    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body.contains("<form method=\"post\" action=\"/web/messages\">"));
}

#[tokio::test]
async fn test_form_post_is_visible_in_api() {
    let app = seeded_app();

    let response = post_form(&app, "/web/messages", "content=Hello+world%21").await;
    assert_eq!(response.status, StatusCode::OK);
    assert!(is_html(&response.content_type));
    assert!(response.body.contains("Hello world!"));

    let api = get(&app, "/messages/1").await;
    assert_eq!(api.json(), json!({"id": 1, "content": "Hello world!"}));
}

#[tokio::test]
async fn test_api_create_is_visible_in_pages() {
    let app = seeded_app();
    send_json(&app, Method::POST, "/messages", json!({"content": "from api"})).await;

    let page = get(&app, "/web/messages/1").await;
    assert_eq!(page.status, StatusCode::OK);
    assert!(page.body.contains("Message #1"));
    assert!(page.body.contains("from api"));
}

#[tokio::test]
async fn test_form_without_content_is_rejected() {
    let app = seeded_app();
    let response = post_form(&app, "/web/messages", "other=1").await;
    assert!(response.status.is_client_error());
    assert!(is_html(&response.content_type));
    assert_eq!(get(&app, "/messages").await.json().as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_detail_page_not_found() {
    let app = seeded_app();
    let response = get(&app, "/web/messages/12").await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert!(is_html(&response.content_type));
    assert!(response.body.contains("Message not found"));
}

#[tokio::test]
async fn test_content_is_escaped() {
    let app = seeded_app();
    send_json(
        &app,
        Method::POST,
        "/messages",
        json!({"content": "<script>alert(1)</script>"}),
    )
    .await;

    let page = get(&app, "/web/messages").await;
    assert!(page.body.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
    assert!(!page.body.contains("<script>"));
}

#[tokio::test]
async fn test_stylesheet() {
    let app = seeded_app();
    let response = get(&app, "/static/style.css").await;
    assert_eq!(response.status, StatusCode::OK);
    assert!(response
        .content_type
        .as_deref()
        .unwrap()
        .starts_with("text/css"));
    assert!(response.body.contains("body {"));
}
