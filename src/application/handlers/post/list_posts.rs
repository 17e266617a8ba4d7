//! ListPostsHandler - Query handlers for the catalog and index views.

use std::sync::Arc;

use crate::domain::post::{Post, PostError};
use crate::ports::PostRepository;

/// How many posts the index view shows.
const INDEX_LIMIT: u32 = 3;

/// Query for the full catalog.
#[derive(Debug, Clone, Default)]
pub struct ListPostsQuery;

/// Query for the index view (latest posts).
#[derive(Debug, Clone, Default)]
pub struct LatestPostsQuery;

/// Result: posts in catalog or index order.
#[derive(Debug, Clone)]
pub struct ListPostsResult {
    pub posts: Vec<Post>,
}

/// Handler for the post catalog and the index view.
///
/// Ordering is the repository's concern: the catalog lists free posts
/// first and then sorts by title, the index returns the newest three.
pub struct ListPostsHandler {
    repository: Arc<dyn PostRepository>,
}

impl ListPostsHandler {
    pub fn new(repository: Arc<dyn PostRepository>) -> Self {
        Self { repository }
    }

    pub async fn list(&self, _query: ListPostsQuery) -> Result<ListPostsResult, PostError> {
        let posts = self.repository.list().await?;
        Ok(ListPostsResult { posts })
    }

    pub async fn latest(&self, _query: LatestPostsQuery) -> Result<ListPostsResult, PostError> {
        let posts = self.repository.latest(INDEX_LIMIT).await?;
        Ok(ListPostsResult { posts })
    }
}
