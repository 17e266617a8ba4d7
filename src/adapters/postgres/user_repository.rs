//! PostgreSQL implementation of UserRepository.

use crate::domain::foundation::{DomainError, ErrorCode, Timestamp, UserId};
use crate::domain::user::{ConfirmationToken, PhoneNumber, User};
use crate::ports::UserRepository;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

/// PostgreSQL implementation of the UserRepository port.
pub struct PostgresUserRepository {
    pool: PgPool,
}

impl PostgresUserRepository {
    /// Creates a new repository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Database row representation of a user.
#[derive(Debug, sqlx::FromRow)]
struct UserRow {
    id: Uuid,
    phone: String,
    email: String,
    password_hash: String,
    first_name: Option<String>,
    last_name: Option<String>,
    avatar: Option<String>,
    is_author: bool,
    confirmation_token: Option<String>,
    is_active: bool,
    created_at: DateTime<Utc>,
}

impl TryFrom<UserRow> for User {
    type Error = DomainError;

    fn try_from(row: UserRow) -> Result<Self, Self::Error> {
        let phone = PhoneNumber::new(row.phone).map_err(|e| {
            DomainError::new(ErrorCode::DatabaseError, format!("Invalid phone: {}", e))
        })?;
        let confirmation_token = row
            .confirmation_token
            .map(ConfirmationToken::parse)
            .transpose()
            .map_err(|e| {
                DomainError::new(ErrorCode::DatabaseError, format!("Invalid token: {}", e))
            })?;

        Ok(User {
            id: UserId::from_uuid(row.id),
            phone,
            email: row.email,
            password_hash: row.password_hash,
            first_name: row.first_name,
            last_name: row.last_name,
            avatar: row.avatar,
            is_author: row.is_author,
            confirmation_token,
            is_active: row.is_active,
            created_at: Timestamp::from_datetime(row.created_at),
        })
    }
}

const SELECT_COLUMNS: &str = "id, phone, email, password_hash, first_name, last_name, avatar, \
                              is_author, confirmation_token, is_active, created_at";

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn save(&self, user: &User) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            INSERT INTO users (
                id, phone, email, password_hash, first_name, last_name, avatar,
                is_author, confirmation_token, is_active, created_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            "#,
        )
        .bind(user.id.as_uuid())
        .bind(user.phone.as_str())
        .bind(&user.email)
        .bind(&user.password_hash)
        .bind(&user.first_name)
        .bind(&user.last_name)
        .bind(&user.avatar)
        .bind(user.is_author)
        .bind(user.confirmation_token.as_ref().map(ConfirmationToken::as_str))
        .bind(user.is_active)
        .bind(user.created_at.as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(db_err) = &e {
                match db_err.constraint() {
                    Some("users_phone_key") => {
                        return DomainError::new(
                            ErrorCode::ValidationFailed,
                            "A user with this phone number already exists",
                        );
                    }
                    Some("users_email_key") => {
                        return DomainError::new(
                            ErrorCode::ValidationFailed,
                            "A user with this email already exists",
                        );
                    }
                    _ => {}
                }
            }
            DomainError::new(ErrorCode::DatabaseError, format!("Failed to save user: {}", e))
        })?;

        Ok(())
    }

    async fn update(&self, user: &User) -> Result<(), DomainError> {
        let result = sqlx::query(
            r#"
            UPDATE users SET
                phone = $2,
                email = $3,
                password_hash = $4,
                first_name = $5,
                last_name = $6,
                avatar = $7,
                is_author = $8,
                confirmation_token = $9,
                is_active = $10
            WHERE id = $1
            "#,
        )
        .bind(user.id.as_uuid())
        .bind(user.phone.as_str())
        .bind(&user.email)
        .bind(&user.password_hash)
        .bind(&user.first_name)
        .bind(&user.last_name)
        .bind(&user.avatar)
        .bind(user.is_author)
        .bind(user.confirmation_token.as_ref().map(ConfirmationToken::as_str))
        .bind(user.is_active)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(ErrorCode::DatabaseError, format!("Failed to update user: {}", e))
        })?;

        if result.rows_affected() == 0 {
            return Err(DomainError::new(ErrorCode::UserNotFound, "User not found"));
        }

        Ok(())
    }

    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, DomainError> {
        let row: Option<UserRow> =
            sqlx::query_as(&format!("SELECT {} FROM users WHERE id = $1", SELECT_COLUMNS))
                .bind(id.as_uuid())
                .fetch_optional(&self.pool)
                .await
                .map_err(|e| {
                    DomainError::new(ErrorCode::DatabaseError, format!("Failed to find user: {}", e))
                })?;

        row.map(User::try_from).transpose()
    }

    async fn find_by_phone(&self, phone: &PhoneNumber) -> Result<Option<User>, DomainError> {
        let row: Option<UserRow> = sqlx::query_as(&format!(
            "SELECT {} FROM users WHERE phone = $1",
            SELECT_COLUMNS
        ))
        .bind(phone.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(ErrorCode::DatabaseError, format!("Failed to find user: {}", e))
        })?;

        row.map(User::try_from).transpose()
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError> {
        let row: Option<UserRow> = sqlx::query_as(&format!(
            "SELECT {} FROM users WHERE email = $1",
            SELECT_COLUMNS
        ))
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(ErrorCode::DatabaseError, format!("Failed to find user: {}", e))
        })?;

        row.map(User::try_from).transpose()
    }

    async fn find_by_confirmation_token(
        &self,
        token: &ConfirmationToken,
    ) -> Result<Option<User>, DomainError> {
        let row: Option<UserRow> = sqlx::query_as(&format!(
            "SELECT {} FROM users WHERE confirmation_token = $1",
            SELECT_COLUMNS
        ))
        .bind(token.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(ErrorCode::DatabaseError, format!("Failed to find user: {}", e))
        })?;

        row.map(User::try_from).transpose()
    }

    async fn token_in_use(&self, token: &ConfirmationToken) -> Result<bool, DomainError> {
        let exists: Option<bool> = sqlx::query_scalar(
            "SELECT EXISTS (SELECT 1 FROM users WHERE confirmation_token = $1)",
        )
        .bind(token.as_str())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(ErrorCode::DatabaseError, format!("Failed to check token: {}", e))
        })?;

        Ok(exists.unwrap_or(false))
    }

    async fn list_authors(&self) -> Result<Vec<User>, DomainError> {
        let rows: Vec<UserRow> = sqlx::query_as(&format!(
            "SELECT {} FROM users WHERE is_author = TRUE ORDER BY last_name ASC",
            SELECT_COLUMNS
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(ErrorCode::DatabaseError, format!("Failed to list authors: {}", e))
        })?;

        rows.into_iter().map(User::try_from).collect()
    }
}
