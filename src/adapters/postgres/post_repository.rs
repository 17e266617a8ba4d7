//! PostgreSQL implementation of PostRepository.

use crate::domain::foundation::{DomainError, ErrorCode, PostId, Timestamp, UserId};
use crate::domain::post::Post;
use crate::ports::PostRepository;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

/// PostgreSQL implementation of the PostRepository port.
pub struct PostgresPostRepository {
    pool: PgPool,
}

impl PostgresPostRepository {
    /// Creates a new repository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Database row representation of a post.
#[derive(Debug, sqlx::FromRow)]
struct PostRow {
    id: Uuid,
    author_id: Uuid,
    title: String,
    description: Option<String>,
    preview: Option<String>,
    is_free: bool,
    created_at: DateTime<Utc>,
}

impl From<PostRow> for Post {
    fn from(row: PostRow) -> Self {
        Post {
            id: PostId::from_uuid(row.id),
            author_id: UserId::from_uuid(row.author_id),
            title: row.title,
            description: row.description,
            preview: row.preview,
            is_free: row.is_free,
            created_at: Timestamp::from_datetime(row.created_at),
        }
    }
}

const SELECT_COLUMNS: &str = "id, author_id, title, description, preview, is_free, created_at";

#[async_trait]
impl PostRepository for PostgresPostRepository {
    async fn save(&self, post: &Post) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            INSERT INTO posts (id, author_id, title, description, preview, is_free, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(post.id.as_uuid())
        .bind(post.author_id.as_uuid())
        .bind(&post.title)
        .bind(&post.description)
        .bind(&post.preview)
        .bind(post.is_free)
        .bind(post.created_at.as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(ErrorCode::DatabaseError, format!("Failed to save post: {}", e))
        })?;

        Ok(())
    }

    async fn update(&self, post: &Post) -> Result<(), DomainError> {
        let result = sqlx::query(
            r#"
            UPDATE posts SET
                title = $2,
                description = $3,
                preview = $4,
                is_free = $5
            WHERE id = $1
            "#,
        )
        .bind(post.id.as_uuid())
        .bind(&post.title)
        .bind(&post.description)
        .bind(&post.preview)
        .bind(post.is_free)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(ErrorCode::DatabaseError, format!("Failed to update post: {}", e))
        })?;

        if result.rows_affected() == 0 {
            return Err(DomainError::new(ErrorCode::PostNotFound, "Post not found"));
        }

        Ok(())
    }

    async fn delete(&self, id: &PostId) -> Result<(), DomainError> {
        let result = sqlx::query("DELETE FROM posts WHERE id = $1")
            .bind(id.as_uuid())
            .execute(&self.pool)
            .await
            .map_err(|e| {
                DomainError::new(ErrorCode::DatabaseError, format!("Failed to delete post: {}", e))
            })?;

        if result.rows_affected() == 0 {
            return Err(DomainError::new(ErrorCode::PostNotFound, "Post not found"));
        }

        Ok(())
    }

    async fn find_by_id(&self, id: &PostId) -> Result<Option<Post>, DomainError> {
        let row: Option<PostRow> =
            sqlx::query_as(&format!("SELECT {} FROM posts WHERE id = $1", SELECT_COLUMNS))
                .bind(id.as_uuid())
                .fetch_optional(&self.pool)
                .await
                .map_err(|e| {
                    DomainError::new(ErrorCode::DatabaseError, format!("Failed to find post: {}", e))
                })?;

        Ok(row.map(Post::from))
    }

    async fn list(&self) -> Result<Vec<Post>, DomainError> {
        let rows: Vec<PostRow> = sqlx::query_as(&format!(
            "SELECT {} FROM posts ORDER BY is_free DESC, title ASC",
            SELECT_COLUMNS
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(ErrorCode::DatabaseError, format!("Failed to list posts: {}", e))
        })?;

        Ok(rows.into_iter().map(Post::from).collect())
    }

    async fn latest(&self, limit: u32) -> Result<Vec<Post>, DomainError> {
        let rows: Vec<PostRow> = sqlx::query_as(&format!(
            "SELECT {} FROM posts ORDER BY created_at DESC LIMIT $1",
            SELECT_COLUMNS
        ))
        .bind(i64::from(limit))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(ErrorCode::DatabaseError, format!("Failed to list posts: {}", e))
        })?;

        Ok(rows.into_iter().map(Post::from).collect())
    }
}
