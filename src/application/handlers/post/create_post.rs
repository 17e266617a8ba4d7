//! CreatePostHandler - Command handler for publishing a post.

use std::sync::Arc;

use crate::domain::foundation::{PostId, UserId};
use crate::domain::post::{Post, PostError};
use crate::ports::PostRepository;

/// Command to create a post. The author always comes from the
/// authenticated principal, never from the request body.
#[derive(Debug, Clone)]
pub struct CreatePostCommand {
    pub author_id: UserId,
    pub title: String,
    pub description: Option<String>,
    pub preview: Option<String>,
    pub is_free: bool,
}

/// Result of post creation.
#[derive(Debug, Clone)]
pub struct CreatePostResult {
    pub post: Post,
}

/// Handler for post creation.
pub struct CreatePostHandler {
    repository: Arc<dyn PostRepository>,
}

impl CreatePostHandler {
    pub fn new(repository: Arc<dyn PostRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: CreatePostCommand) -> Result<CreatePostResult, PostError> {
        let post = Post::create(
            PostId::new(),
            cmd.author_id,
            cmd.title,
            cmd.description,
            cmd.preview,
            cmd.is_free,
        )
        .map_err(crate::domain::foundation::DomainError::from)?;

        self.repository.save(&post).await?;

        tracing::info!(post_id = %post.id, author_id = %post.author_id, "Post created");

        Ok(CreatePostResult { post })
    }
}
