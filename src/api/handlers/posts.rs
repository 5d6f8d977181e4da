//! Handlers for post endpoints.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use crate::api::dto::{DataResponse, PostItem, PostPayload};
use crate::api::extract::ApiJson;
use crate::error::AppError;
use crate::state::AppState;

/// Lists all posts.
///
/// # Endpoint
///
/// `GET /api/posts`
pub async fn list_posts_handler(
    State(state): State<AppState>,
) -> Result<Json<DataResponse<Vec<PostItem>>>, AppError> {
    let posts = state.post_service.list_posts().await?;

    Ok(Json(DataResponse::new(
        posts.into_iter().map(PostItem::from).collect(),
    )))
}

/// Returns a single post.
///
/// # Endpoint
///
/// `GET /api/posts/{id}`
///
/// # Errors
///
/// Returns 404 Not Found if the post does not exist.
pub async fn get_post_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<DataResponse<PostItem>>, AppError> {
    let post = state.post_service.get_post(&id).await?;

    Ok(Json(DataResponse::new(post.into())))
}

/// Creates a new post.
///
/// # Endpoint
///
/// `POST /api/posts`
///
/// # Request Body
///
/// ```json
/// {
///   "title": "Hello World",
///   "content": "This is long enough.",
///   "authorName": "Jo",
///   "status": "published"   // optional, defaults to "draft"
/// }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request if validation fails.
pub async fn create_post_handler(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<PostPayload>,
) -> Result<(StatusCode, Json<DataResponse<PostItem>>), AppError> {
    let post = state.post_service.create_post(payload.into()).await?;

    Ok((StatusCode::CREATED, Json(DataResponse::new(post.into()))))
}

/// Partially updates a post.
///
/// # Endpoint
///
/// `PUT /api/posts/{id}`
///
/// All fields are optional. Only provided fields are changed; `id` and
/// `createdAt` never change and `updatedAt` is refreshed.
///
/// # Errors
///
/// Returns 404 Not Found if the post does not exist, checked before the body.
/// Returns 400 Bad Request if validation fails.
pub async fn update_post_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
    payload: Result<ApiJson<PostPayload>, AppError>,
) -> Result<Json<DataResponse<PostItem>>, AppError> {
    let payload = match payload {
        Ok(ApiJson(payload)) => payload,
        Err(rejection) => {
            state.post_service.get_post(&id).await?;
            return Err(rejection);
        }
    };

    let post = state.post_service.update_post(&id, payload.into()).await?;

    Ok(Json(DataResponse::new(post.into())))
}

/// Deletes a post and all of its comments.
///
/// # Endpoint
///
/// `DELETE /api/posts/{id}`
///
/// # Errors
///
/// Returns 404 Not Found if the post does not exist.
pub async fn delete_post_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<StatusCode, AppError> {
    state.post_service.delete_post(&id).await?;

    Ok(StatusCode::NO_CONTENT)
}
