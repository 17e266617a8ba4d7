//! HTTP DTOs for post endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::post::Post;

pub use crate::adapters::http::ErrorResponse;

/// Request body for creating or updating a post.
///
/// The author is never part of the payload; it always comes from the
/// authenticated principal.
#[derive(Debug, Clone, Deserialize)]
pub struct PostRequest {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub preview: Option<String>,
    #[serde(default)]
    pub is_free: bool,
}

/// Post view for API responses.
#[derive(Debug, Clone, Serialize)]
pub struct PostView {
    pub id: String,
    pub author_id: String,
    pub title: String,
    pub description: Option<String>,
    pub preview: Option<String>,
    pub is_free: bool,
    pub created_at: String,
}

impl From<&Post> for PostView {
    fn from(post: &Post) -> Self {
        Self {
            id: post.id.to_string(),
            author_id: post.author_id.to_string(),
            title: post.title.clone(),
            description: post.description.clone(),
            preview: post.preview.clone(),
            is_free: post.is_free,
            created_at: post.created_at.as_datetime().to_rfc3339(),
        }
    }
}

/// Response for catalog and index listings.
#[derive(Debug, Clone, Serialize)]
pub struct PostListResponse {
    pub posts: Vec<PostView>,
}

impl PostListResponse {
    pub fn from_posts(posts: &[Post]) -> Self {
        Self {
            posts: posts.iter().map(PostView::from).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{PostId, UserId};

    #[test]
    fn request_defaults_optional_fields() {
        let request: PostRequest = serde_json::from_str(r#"{"title": "Hello"}"#).unwrap();
        assert_eq!(request.title, "Hello");
        assert!(request.description.is_none());
        assert!(!request.is_free);
    }

    #[test]
    fn view_carries_all_fields() {
        let post = Post::create(
            PostId::new(),
            UserId::new(),
            "On deadlines",
            Some("Short notes".to_string()),
            None,
            true,
        )
        .unwrap();

        let view = PostView::from(&post);

        assert_eq!(view.title, "On deadlines");
        assert_eq!(view.description.as_deref(), Some("Short notes"));
        assert!(view.is_free);
    }
}
