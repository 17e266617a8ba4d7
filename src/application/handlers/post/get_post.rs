//! GetPostHandler - Query handler for the post detail view.

use std::sync::Arc;

use crate::domain::foundation::PostId;
use crate::domain::post::{Post, PostError};
use crate::ports::PostRepository;

/// Query for a single post.
#[derive(Debug, Clone)]
pub struct GetPostQuery {
    pub post_id: PostId,
}

/// Result: the requested post.
#[derive(Debug, Clone)]
pub struct GetPostResult {
    pub post: Post,
}

/// Handler for the post detail view.
pub struct GetPostHandler {
    repository: Arc<dyn PostRepository>,
}

impl GetPostHandler {
    pub fn new(repository: Arc<dyn PostRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, query: GetPostQuery) -> Result<GetPostResult, PostError> {
        let post = self
            .repository
            .find_by_id(&query.post_id)
            .await?
            .ok_or_else(|| PostError::not_found(query.post_id))?;
        Ok(GetPostResult { post })
    }
}
