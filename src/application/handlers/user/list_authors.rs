//! ListAuthorsHandler - Query handler for the public author directory.

use std::sync::Arc;

use crate::domain::user::{User, UserError};
use crate::ports::UserRepository;

/// Query for the author directory.
#[derive(Debug, Clone, Default)]
pub struct ListAuthorsQuery;

/// Result: all publishing authors.
#[derive(Debug, Clone)]
pub struct ListAuthorsResult {
    pub authors: Vec<User>,
}

/// Handler for the author directory. Ordering is delegated to the
/// repository (last name ascending).
pub struct ListAuthorsHandler {
    repository: Arc<dyn UserRepository>,
}

impl ListAuthorsHandler {
    pub fn new(repository: Arc<dyn UserRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, _query: ListAuthorsQuery) -> Result<ListAuthorsResult, UserError> {
        let authors = self.repository.list_authors().await?;
        Ok(ListAuthorsResult { authors })
    }
}
