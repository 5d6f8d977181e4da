mod common;

use axum::http::StatusCode;
use serde_json::{Value, json};

#[tokio::test]
async fn test_list_comments_for_post() {
    let server = common::seeded_server();

    let response = server.get("/api/posts/1/comments").await;
    response.assert_status_ok();

    let body = response.json::<Value>();
    let comments = body["data"].as_array().unwrap();
    assert_eq!(comments.len(), 2);
    assert_eq!(comments[0]["id"], "1");
    assert_eq!(comments[0]["postId"], "1");
    assert_eq!(comments[0]["authorName"], "Reader One");
    assert_eq!(comments[0]["createdAt"], "2024-01-16T08:00:00.000Z");
    assert_eq!(comments[1]["authorName"], "Developer Joe");
}

#[tokio::test]
async fn test_list_comments_for_post_without_comments() {
    let server = common::seeded_server();

    let response = server.get("/api/posts/3/comments").await;

    response.assert_status_ok();
    response.assert_json(&json!({ "data": [] }));
}

#[tokio::test]
async fn test_list_comments_for_missing_post() {
    let server = common::seeded_server();

    let response = server.get("/api/posts/999/comments").await;

    response.assert_status_not_found();
    let message = common::assert_error(&response.json::<Value>(), "NOT_FOUND");
    assert_eq!(message, "Post not found");
}

#[tokio::test]
async fn test_create_comment() {
    let server = common::seeded_server();

    let response = server
        .post("/api/posts/3/comments")
        .json(&common::valid_comment_body())
        .await;
    response.assert_status(StatusCode::CREATED);

    let body = response.json::<Value>();
    let comment = &body["data"];
    assert_eq!(comment["id"], "4");
    assert_eq!(comment["postId"], "3");
    assert_eq!(comment["authorName"], "Reader");
    assert_eq!(comment["content"], "Nice post");
    common::assert_iso_millis(&comment["createdAt"]);

    let listed = server.get("/api/posts/3/comments").await.json::<Value>();
    assert_eq!(listed["data"][0]["id"], "4");
}

#[tokio::test]
async fn test_create_comment_ignores_body_id_and_post_id() {
    let server = common::seeded_server();

    let response = server
        .post("/api/posts/2/comments")
        .json(&json!({
            "id": "1",
            "postId": "1",
            "authorName": "Reader",
            "content": "Nice post"
        }))
        .await;
    response.assert_status(StatusCode::CREATED);

    let body = response.json::<Value>();
    assert_eq!(body["data"]["id"], "4");
    assert_eq!(body["data"]["postId"], "2");
}

#[tokio::test]
async fn test_create_comment_on_missing_post_reports_not_found_first() {
    let server = common::seeded_server();

    // Payload is invalid as well; the missing post wins
    let response = server
        .post("/api/posts/999/comments")
        .json(&json!({ "authorName": "J" }))
        .await;

    response.assert_status_not_found();
    let message = common::assert_error(&response.json::<Value>(), "NOT_FOUND");
    assert_eq!(message, "Post not found");
}

#[tokio::test]
async fn test_create_comment_on_missing_post_with_malformed_body() {
    let server = common::seeded_server();

    let response = server
        .post("/api/posts/999/comments")
        .bytes(axum::body::Bytes::from_static(b"{oops"))
        .content_type("application/json")
        .await;

    response.assert_status_not_found();
}

#[tokio::test]
async fn test_create_comment_validation_error() {
    let server = common::seeded_server();

    let response = server
        .post("/api/posts/1/comments")
        .json(&json!({ "authorName": "J", "content": "" }))
        .await;
    response.assert_status_bad_request();

    let message = common::assert_error(&response.json::<Value>(), "VALIDATION_ERROR");
    assert_eq!(
        message,
        "authorName must be at least 2 characters, content is required"
    );
}

#[tokio::test]
async fn test_create_comment_author_name_boundaries() {
    let server = common::seeded_server();

    for (len, accepted) in [(1, false), (2, true), (100, true), (101, false)] {
        let response = server
            .post("/api/posts/1/comments")
            .json(&json!({ "authorName": "a".repeat(len), "content": "Nice post" }))
            .await;

        if accepted {
            response.assert_status(StatusCode::CREATED);
        } else {
            response.assert_status_bad_request();
        }
    }
}

#[tokio::test]
async fn test_create_comment_content_limit() {
    let server = common::seeded_server();

    let response = server
        .post("/api/posts/1/comments")
        .json(&json!({ "authorName": "Reader", "content": "c".repeat(1001) }))
        .await;
    response.assert_status_bad_request();

    let message = common::assert_error(&response.json::<Value>(), "VALIDATION_ERROR");
    assert_eq!(message, "content must not exceed 1000 characters");
}

#[tokio::test]
async fn test_delete_comment() {
    let server = common::seeded_server();

    let response = server.delete("/api/comments/3").await;
    response.assert_status(StatusCode::NO_CONTENT);
    assert!(response.as_bytes().is_empty());

    let body = server.get("/api/posts/2/comments").await.json::<Value>();
    assert_eq!(body["data"], json!([]));
}

#[tokio::test]
async fn test_delete_comment_not_found() {
    let server = common::seeded_server();

    let response = server.delete("/api/comments/999").await;

    response.assert_status_not_found();
    let message = common::assert_error(&response.json::<Value>(), "NOT_FOUND");
    assert_eq!(message, "Comment not found");
}
