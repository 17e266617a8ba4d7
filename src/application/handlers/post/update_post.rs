//! UpdatePostHandler - Command handler for editing a post.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, PostId, UserId};
use crate::domain::post::{Post, PostError};
use crate::ports::PostRepository;

/// Command to edit an existing post.
#[derive(Debug, Clone)]
pub struct UpdatePostCommand {
    pub post_id: PostId,
    pub requesting_user: UserId,
    pub title: String,
    pub description: Option<String>,
    pub preview: Option<String>,
    pub is_free: bool,
}

/// Result of a post update.
#[derive(Debug, Clone)]
pub struct UpdatePostResult {
    pub post: Post,
}

/// Handler for post updates. Only the owning author may edit.
pub struct UpdatePostHandler {
    repository: Arc<dyn PostRepository>,
}

impl UpdatePostHandler {
    pub fn new(repository: Arc<dyn PostRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: UpdatePostCommand) -> Result<UpdatePostResult, PostError> {
        let mut post = self
            .repository
            .find_by_id(&cmd.post_id)
            .await?
            .ok_or_else(|| PostError::not_found(cmd.post_id))?;

        if !post.is_owned_by(&cmd.requesting_user) {
            return Err(PostError::forbidden(cmd.post_id));
        }

        post.update(cmd.title, cmd.description, cmd.preview, cmd.is_free)
            .map_err(DomainError::from)?;
        self.repository.update(&post).await?;

        Ok(UpdatePostResult { post })
    }
}
