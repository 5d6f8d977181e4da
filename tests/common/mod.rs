#![allow(dead_code)]

use axum_test::TestServer;
use blog_api::infrastructure::persistence::InMemoryStore;
use blog_api::routes::app_router;
use blog_api::state::AppState;
use serde_json::{Value, json};
use std::sync::Arc;

/// Test server over a store holding the three sample posts and three comments.
pub fn seeded_server() -> TestServer {
    server_with(InMemoryStore::seeded())
}

/// Test server over an empty store.
pub fn empty_server() -> TestServer {
    server_with(InMemoryStore::new())
}

pub fn server_with(store: InMemoryStore) -> TestServer {
    let state = AppState::new(Arc::new(store));
    TestServer::new(app_router(state)).unwrap()
}

pub fn valid_post_body() -> Value {
    json!({
        "title": "Hello World",
        "content": "This is long enough.",
        "authorName": "Jo"
    })
}

pub fn valid_comment_body() -> Value {
    json!({
        "authorName": "Reader",
        "content": "Nice post"
    })
}

/// Asserts the error envelope and returns its message.
pub fn assert_error(body: &Value, code: &str) -> String {
    assert_eq!(body["error"]["code"], code, "unexpected body: {body}");
    body["error"]["message"]
        .as_str()
        .expect("error message must be a string")
        .to_string()
}

/// Asserts the `YYYY-MM-DDTHH:MM:SS.mmmZ` timestamp shape.
pub fn assert_iso_millis(value: &Value) {
    let text = value.as_str().expect("timestamp must be a string");
    assert_eq!(text.len(), 24, "unexpected timestamp: {text}");
    assert!(text.ends_with('Z'));
    assert_eq!(&text[19..20], ".");
}
