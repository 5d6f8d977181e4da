//! API route configuration.

use crate::api::handlers::{
    create_comment_handler, create_post_handler, delete_comment_handler, delete_post_handler,
    get_post_handler, list_comments_handler, list_posts_handler, update_post_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{delete, get},
};

/// All routes mounted under `/api`.
///
/// # Endpoints
///
/// - `GET    /posts`                - List posts
/// - `POST   /posts`                - Create a post
/// - `GET    /posts/{id}`           - Get a post
/// - `PUT    /posts/{id}`           - Update a post
/// - `DELETE /posts/{id}`           - Delete a post and its comments
/// - `GET    /posts/{id}/comments`  - List comments of a post
/// - `POST   /posts/{id}/comments`  - Add a comment to a post
/// - `DELETE /comments/{id}`        - Delete a comment
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/posts", get(list_posts_handler).post(create_post_handler))
        .route(
            "/posts/{id}",
            get(get_post_handler)
                .put(update_post_handler)
                .delete(delete_post_handler),
        )
        .route(
            "/posts/{id}/comments",
            get(list_comments_handler).post(create_comment_handler),
        )
        .route("/comments/{id}", delete(delete_comment_handler))
}
