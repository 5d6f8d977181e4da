//! In-memory implementation of the post and comment repositories.

use async_trait::async_trait;
use chrono::Utc;
use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard};

use crate::domain::entities::{Comment, NewComment, NewPost, Post, PostPatch};
use crate::domain::repositories::{CommentRepository, PostRepository};
use crate::error::AppError;

/// Records and id counters guarded by the store lock.
#[derive(Debug)]
struct StoreState {
    posts: BTreeMap<u64, Post>,
    comments: BTreeMap<u64, Comment>,
    next_post_id: u64,
    next_comment_id: u64,
}

impl StoreState {
    fn assign_post_id(&mut self) -> u64 {
        let id = self.next_post_id;
        self.next_post_id += 1;
        id
    }

    fn assign_comment_id(&mut self) -> u64 {
        let id = self.next_comment_id;
        self.next_comment_id += 1;
        id
    }
}

/// Process-wide store for posts and comments.
///
/// Records are keyed by their numeric id. Ids only grow, so iterating a map
/// yields insertion order. Every repository call takes the lock exactly once,
/// which keeps the post removal and its comment cascade atomic.
#[derive(Debug)]
pub struct InMemoryStore {
    state: Mutex<StoreState>,
}

impl InMemoryStore {
    /// Creates an empty store. The first post and comment both get id `1`.
    pub fn new() -> Self {
        Self::from_records(Vec::new(), Vec::new())
    }

    /// Creates a store populated with the sample posts and comments.
    pub fn seeded() -> Self {
        Self::from_records(super::seed::posts(), super::seed::comments())
    }

    /// Creates a store from existing records.
    ///
    /// Records whose id is not a canonical decimal number are skipped. The
    /// counters continue after the highest id present.
    pub fn from_records(posts: Vec<Post>, comments: Vec<Comment>) -> Self {
        let posts: BTreeMap<u64, Post> = posts
            .into_iter()
            .filter_map(|post| parse_id(&post.id).map(|key| (key, post)))
            .collect();
        let comments: BTreeMap<u64, Comment> = comments
            .into_iter()
            .filter_map(|comment| parse_id(&comment.id).map(|key| (key, comment)))
            .collect();

        let next_post_id = posts.keys().next_back().map_or(1, |last| last + 1);
        let next_comment_id = comments.keys().next_back().map_or(1, |last| last + 1);

        Self {
            state: Mutex::new(StoreState {
                posts,
                comments,
                next_post_id,
                next_comment_id,
            }),
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, StoreState>, AppError> {
        Ok(self.state.lock()?)
    }
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

/// Maps a path id to its storage key.
///
/// Only canonical decimal strings match, so `"01"` does not address post `1`.
fn parse_id(id: &str) -> Option<u64> {
    id.parse::<u64>()
        .ok()
        .filter(|key| key.to_string() == id)
}

#[async_trait]
impl PostRepository for InMemoryStore {
    async fn find_all(&self) -> Result<Vec<Post>, AppError> {
        let state = self.lock()?;
        Ok(state.posts.values().cloned().collect())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Post>, AppError> {
        let Some(key) = parse_id(id) else {
            return Ok(None);
        };

        let state = self.lock()?;
        Ok(state.posts.get(&key).cloned())
    }

    async fn create(&self, new_post: NewPost) -> Result<Post, AppError> {
        let mut state = self.lock()?;
        let key = state.assign_post_id();
        let now = Utc::now();

        let post = Post {
            id: key.to_string(),
            title: new_post.title,
            content: new_post.content,
            author_name: new_post.author_name,
            status: new_post.status.unwrap_or_default(),
            created_at: now,
            updated_at: now,
        };

        state.posts.insert(key, post.clone());
        Ok(post)
    }

    async fn update(&self, id: &str, patch: PostPatch) -> Result<Post, AppError> {
        let not_found = || AppError::not_found("Post not found");
        let key = parse_id(id).ok_or_else(not_found)?;

        let mut state = self.lock()?;
        let post = state.posts.get_mut(&key).ok_or_else(not_found)?;

        // updated_at never moves backwards, even if the wall clock does
        let now = Utc::now().max(post.updated_at);
        post.apply(patch, now);

        Ok(post.clone())
    }

    async fn delete(&self, id: &str) -> Result<bool, AppError> {
        let Some(key) = parse_id(id) else {
            return Ok(false);
        };

        let mut state = self.lock()?;
        if !state.posts.contains_key(&key) {
            return Ok(false);
        }

        state.comments.retain(|_, comment| !comment.belongs_to(id));
        state.posts.remove(&key);

        Ok(true)
    }
}

#[async_trait]
impl CommentRepository for InMemoryStore {
    async fn find_by_post_id(&self, post_id: &str) -> Result<Vec<Comment>, AppError> {
        let state = self.lock()?;
        Ok(state
            .comments
            .values()
            .filter(|comment| comment.belongs_to(post_id))
            .cloned()
            .collect())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Comment>, AppError> {
        let Some(key) = parse_id(id) else {
            return Ok(None);
        };

        let state = self.lock()?;
        Ok(state.comments.get(&key).cloned())
    }

    async fn create(&self, new_comment: NewComment) -> Result<Comment, AppError> {
        let mut state = self.lock()?;
        let key = state.assign_comment_id();

        let comment = Comment {
            id: key.to_string(),
            post_id: new_comment.post_id,
            author_name: new_comment.author_name,
            content: new_comment.content,
            created_at: Utc::now(),
        };

        state.comments.insert(key, comment.clone());
        Ok(comment)
    }

    async fn delete(&self, id: &str) -> Result<bool, AppError> {
        let Some(key) = parse_id(id) else {
            return Ok(false);
        };

        let mut state = self.lock()?;
        Ok(state.comments.remove(&key).is_some())
    }
}
