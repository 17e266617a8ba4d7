//! Post repository port.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, PostId};
use crate::domain::post::Post;

/// Persistence contract for [`Post`] entities.
#[async_trait]
pub trait PostRepository: Send + Sync {
    /// Persist a new post.
    async fn save(&self, post: &Post) -> Result<(), DomainError>;

    /// Persist changes to an existing post.
    async fn update(&self, post: &Post) -> Result<(), DomainError>;

    /// Delete a post.
    async fn delete(&self, id: &PostId) -> Result<(), DomainError>;

    /// Find a post by id.
    async fn find_by_id(&self, id: &PostId) -> Result<Option<Post>, DomainError>;

    /// All posts, free posts first, then by title.
    async fn list(&self) -> Result<Vec<Post>, DomainError>;

    /// The most recently created posts, newest first.
    async fn latest(&self, limit: u32) -> Result<Vec<Post>, DomainError>;
}
