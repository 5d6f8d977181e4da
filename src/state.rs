//! Shared application state injected into every handler.

use std::sync::Arc;

use crate::application::services::{CommentService, PostService};
use crate::infrastructure::persistence::InMemoryStore;

pub type Posts = PostService<InMemoryStore>;
pub type Comments = CommentService<InMemoryStore, InMemoryStore>;

#[derive(Clone)]
pub struct AppState {
    pub post_service: Arc<Posts>,
    pub comment_service: Arc<Comments>,
}

impl AppState {
    /// Wires both services to a single store, so post deletion and the comment
    /// cascade see the same data.
    pub fn new(store: Arc<InMemoryStore>) -> Self {
        Self {
            post_service: Arc::new(PostService::new(store.clone())),
            comment_service: Arc::new(CommentService::new(store.clone(), store)),
        }
    }
}
