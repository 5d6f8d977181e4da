//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod comments;
pub mod fallback;
pub mod health;
pub mod posts;

pub use comments::{create_comment_handler, delete_comment_handler, list_comments_handler};
pub use fallback::fallback_handler;
pub use health::health_handler;
pub use posts::{
    create_post_handler, delete_post_handler, get_post_handler, list_posts_handler,
    update_post_handler,
};
