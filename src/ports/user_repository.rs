//! User repository port.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, UserId};
use crate::domain::user::{ConfirmationToken, PhoneNumber, User};

/// Persistence contract for [`User`] aggregates.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Persist a new user.
    async fn save(&self, user: &User) -> Result<(), DomainError>;

    /// Persist changes to an existing user.
    async fn update(&self, user: &User) -> Result<(), DomainError>;

    /// Find a user by id.
    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, DomainError>;

    /// Find a user by phone number.
    async fn find_by_phone(&self, phone: &PhoneNumber) -> Result<Option<User>, DomainError>;

    /// Find a user by email.
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError>;

    /// Find the user holding a pending confirmation token.
    async fn find_by_confirmation_token(
        &self,
        token: &ConfirmationToken,
    ) -> Result<Option<User>, DomainError>;

    /// Whether any user currently holds this token.
    ///
    /// Used to keep freshly generated tokens unique across pending
    /// registrations.
    async fn token_in_use(&self, token: &ConfirmationToken) -> Result<bool, DomainError>;

    /// All authors, ordered by last name.
    async fn list_authors(&self) -> Result<Vec<User>, DomainError>;
}
