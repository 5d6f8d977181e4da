//! Repository trait for post data access.

use crate::domain::entities::{NewPost, Post, PostPatch};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for managing blog posts.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::InMemoryStore`] - in-process store
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PostRepository: Send + Sync {
    /// Returns every post in insertion order.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the store is unavailable.
    async fn find_all(&self) -> Result<Vec<Post>, AppError>;

    /// Finds a post by its id.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(Post))` if found
    /// - `Ok(None)` if not found
    async fn find_by_id(&self, id: &str) -> Result<Option<Post>, AppError>;

    /// Creates a new post with a fresh id and `created_at == updated_at == now`.
    ///
    /// A missing status is stored as draft.
    async fn create(&self, new_post: NewPost) -> Result<Post, AppError>;

    /// Partially updates a post and refreshes `updated_at`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no post has this id.
    async fn update(&self, id: &str, patch: PostPatch) -> Result<Post, AppError>;

    /// Deletes a post together with all of its comments.
    ///
    /// Returns `Ok(true)` if the post existed and was removed, `Ok(false)` otherwise.
    async fn delete(&self, id: &str) -> Result<bool, AppError>;
}
