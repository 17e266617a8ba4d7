//! Post entity.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{PostId, Timestamp, UserId, ValidationError};

/// Maximum post title length.
const MAX_TITLE_LEN: usize = 150;

/// A content item owned by an author.
///
/// The author is always set server-side from the authenticated principal;
/// mutation is restricted to the owner by the application layer via
/// [`Post::is_owned_by`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    /// Unique identifier.
    pub id: PostId,

    /// Owning author.
    pub author_id: UserId,

    /// Post title.
    pub title: String,

    /// Optional body/description.
    pub description: Option<String>,

    /// Optional preview image storage path.
    pub preview: Option<String>,

    /// Whether the post is readable without a subscription.
    pub is_free: bool,

    /// When the post was created.
    pub created_at: Timestamp,
}

impl Post {
    /// Creates a new post for the given author.
    ///
    /// # Errors
    ///
    /// Returns a validation error when the title is empty or too long.
    pub fn create(
        id: PostId,
        author_id: UserId,
        title: impl Into<String>,
        description: Option<String>,
        preview: Option<String>,
        is_free: bool,
    ) -> Result<Self, ValidationError> {
        let title = title.into();
        Self::validate_title(&title)?;

        Ok(Self {
            id,
            author_id,
            title,
            description,
            preview,
            is_free,
            created_at: Timestamp::now(),
        })
    }

    /// Replaces the editable fields.
    ///
    /// # Errors
    ///
    /// Returns a validation error when the new title is empty or too long.
    pub fn update(
        &mut self,
        title: impl Into<String>,
        description: Option<String>,
        preview: Option<String>,
        is_free: bool,
    ) -> Result<(), ValidationError> {
        let title = title.into();
        Self::validate_title(&title)?;

        self.title = title;
        self.description = description;
        self.preview = preview;
        self.is_free = is_free;
        Ok(())
    }

    /// Whether the given user owns this post.
    pub fn is_owned_by(&self, user_id: &UserId) -> bool {
        &self.author_id == user_id
    }

    fn validate_title(title: &str) -> Result<(), ValidationError> {
        if title.trim().is_empty() {
            return Err(ValidationError::empty_field("title"));
        }
        if title.len() > MAX_TITLE_LEN {
            return Err(ValidationError::too_long("title", MAX_TITLE_LEN));
        }
        Ok(())
    }
}
