//! DeletePostHandler - Command handler for removing a post.

use std::sync::Arc;

use crate::domain::foundation::{PostId, UserId};
use crate::domain::post::PostError;
use crate::ports::PostRepository;

/// Command to delete a post.
#[derive(Debug, Clone)]
pub struct DeletePostCommand {
    pub post_id: PostId,
    pub requesting_user: UserId,
}

/// Handler for post deletion. Only the owning author may delete.
pub struct DeletePostHandler {
    repository: Arc<dyn PostRepository>,
}

impl DeletePostHandler {
    pub fn new(repository: Arc<dyn PostRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: DeletePostCommand) -> Result<(), PostError> {
        let post = self
            .repository
            .find_by_id(&cmd.post_id)
            .await?
            .ok_or_else(|| PostError::not_found(cmd.post_id))?;

        if !post.is_owned_by(&cmd.requesting_user) {
            return Err(PostError::forbidden(cmd.post_id));
        }

        self.repository.delete(&cmd.post_id).await?;

        tracing::info!(post_id = %cmd.post_id, "Post deleted");

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::DomainError;
    use crate::domain::post::Post;
    use async_trait::async_trait;
    use std::sync::Mutex;

    struct MockPostRepository {
        posts: Mutex<Vec<Post>>,
    }

    impl MockPostRepository {
        fn with(posts: Vec<Post>) -> Self {
            Self {
                posts: Mutex::new(posts),
            }
        }

        fn rows(&self) -> Vec<Post> {
            self.posts.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl PostRepository for MockPostRepository {
        async fn save(&self, post: &Post) -> Result<(), DomainError> {
            self.posts.lock().unwrap().push(post.clone());
            Ok(())
        }

        async fn update(&self, post: &Post) -> Result<(), DomainError> {
            let mut rows = self.posts.lock().unwrap();
            if let Some(row) = rows.iter_mut().find(|p| p.id == post.id) {
                *row = post.clone();
            }
            Ok(())
        }

        async fn delete(&self, id: &PostId) -> Result<(), DomainError> {
            self.posts.lock().unwrap().retain(|p| &p.id != id);
            Ok(())
        }

        async fn find_by_id(&self, id: &PostId) -> Result<Option<Post>, DomainError> {
            Ok(self
                .posts
                .lock()
                .unwrap()
                .iter()
                .find(|p| &p.id == id)
                .cloned())
        }

        async fn list(&self) -> Result<Vec<Post>, DomainError> {
            Ok(self.posts.lock().unwrap().clone())
        }

        async fn latest(&self, limit: u32) -> Result<Vec<Post>, DomainError> {
            let rows = self.posts.lock().unwrap();
            Ok(rows.iter().rev().take(limit as usize).cloned().collect())
        }
    }

    fn post_by(author: UserId) -> Post {
        Post::create(PostId::new(), author, "On writing well", None, None, false).unwrap()
    }

    #[tokio::test]
    async fn owner_can_delete() {
        let author = UserId::new();
        let post = post_by(author);
        let post_id = post.id;
        let repo = Arc::new(MockPostRepository::with(vec![post]));
        let handler = DeletePostHandler::new(repo.clone());

        handler
            .handle(DeletePostCommand {
                post_id,
                requesting_user: author,
            })
            .await
            .unwrap();

        assert!(repo.rows().is_empty());
    }

    #[tokio::test]
    async fn foreign_post_is_forbidden_and_kept() {
        let post = post_by(UserId::new());
        let post_id = post.id;
        let repo = Arc::new(MockPostRepository::with(vec![post]));
        let handler = DeletePostHandler::new(repo.clone());

        let result = handler
            .handle(DeletePostCommand {
                post_id,
                requesting_user: UserId::new(),
            })
            .await;

        assert!(matches!(result, Err(PostError::Forbidden(_))));
        assert_eq!(repo.rows().len(), 1);
    }

    #[tokio::test]
    async fn unknown_post_is_not_found() {
        let repo = Arc::new(MockPostRepository::with(vec![]));
        let handler = DeletePostHandler::new(repo);

        let result = handler
            .handle(DeletePostCommand {
                post_id: PostId::new(),
                requesting_user: UserId::new(),
            })
            .await;

        assert!(matches!(result, Err(PostError::NotFound(_))));
    }
}
