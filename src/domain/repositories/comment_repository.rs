//! Repository trait for comment data access.

use crate::domain::entities::{Comment, NewComment};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for managing comments.
///
/// Does not check that the parent post exists; callers do that first.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CommentRepository: Send + Sync {
    /// Returns the comments of a post in insertion order.
    async fn find_by_post_id(&self, post_id: &str) -> Result<Vec<Comment>, AppError>;

    /// Finds a comment by its id.
    async fn find_by_id(&self, id: &str) -> Result<Option<Comment>, AppError>;

    /// Creates a new comment with a fresh id and `created_at == now`.
    async fn create(&self, new_comment: NewComment) -> Result<Comment, AppError>;

    /// Deletes a comment.
    ///
    /// Returns `Ok(true)` if the comment existed and was removed, `Ok(false)` otherwise.
    async fn delete(&self, id: &str) -> Result<bool, AppError>;
}
