//! Handlers for comment endpoints.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use crate::api::dto::{CommentItem, CommentPayload, DataResponse};
use crate::api::extract::ApiJson;
use crate::error::AppError;
use crate::state::AppState;

/// Lists the comments of a post.
///
/// # Endpoint
///
/// `GET /api/posts/{id}/comments`
///
/// # Errors
///
/// Returns 404 Not Found if the post does not exist.
pub async fn list_comments_handler(
    Path(post_id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<DataResponse<Vec<CommentItem>>>, AppError> {
    let comments = state.comment_service.list_for_post(&post_id).await?;

    Ok(Json(DataResponse::new(
        comments.into_iter().map(CommentItem::from).collect(),
    )))
}

/// Adds a comment to a post.
///
/// # Endpoint
///
/// `POST /api/posts/{id}/comments`
///
/// # Request Body
///
/// ```json
/// { "authorName": "Reader", "content": "Nice post" }
/// ```
///
/// # Errors
///
/// Returns 404 Not Found if the post does not exist. This takes precedence over
/// any problem with the body.
/// Returns 400 Bad Request if validation fails.
pub async fn create_comment_handler(
    Path(post_id): Path<String>,
    State(state): State<AppState>,
    payload: Result<ApiJson<CommentPayload>, AppError>,
) -> Result<(StatusCode, Json<DataResponse<CommentItem>>), AppError> {
    let payload = match payload {
        Ok(ApiJson(payload)) => payload,
        Err(rejection) => {
            state.post_service.get_post(&post_id).await?;
            return Err(rejection);
        }
    };

    let comment = state
        .comment_service
        .create_comment(&post_id, payload.into())
        .await?;

    Ok((StatusCode::CREATED, Json(DataResponse::new(comment.into()))))
}

/// Deletes a comment.
///
/// # Endpoint
///
/// `DELETE /api/comments/{id}`
///
/// # Errors
///
/// Returns 404 Not Found if the comment does not exist.
pub async fn delete_comment_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<StatusCode, AppError> {
    state.comment_service.delete_comment(&id).await?;

    Ok(StatusCode::NO_CONTENT)
}
