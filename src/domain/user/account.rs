//! User aggregate entity.
//!
//! Accounts are keyed by phone number and start inactive: a freshly
//! registered user holds a one-time confirmation token and gains access
//! only after confirming the code delivered by SMS.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{Timestamp, UserId};

use super::{ConfirmationToken, PhoneNumber, UserError};

/// User aggregate - a registered account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier.
    pub id: UserId,

    /// Phone number, the primary login identifier (unique).
    pub phone: PhoneNumber,

    /// Email address (unique).
    pub email: String,

    /// Argon2id PHC hash of the password.
    pub password_hash: String,

    /// Optional display name fields.
    pub first_name: Option<String>,
    pub last_name: Option<String>,

    /// Optional avatar storage path.
    pub avatar: Option<String>,

    /// Whether this user can publish posts.
    pub is_author: bool,

    /// Pending confirmation token; cleared once the account is confirmed.
    pub confirmation_token: Option<ConfirmationToken>,

    /// False until the SMS code has been confirmed.
    pub is_active: bool,

    /// When the account was created.
    pub created_at: Timestamp,
}

impl User {
    /// Creates a new inactive account holding a fresh confirmation token.
    #[allow(clippy::too_many_arguments)]
    pub fn register(
        id: UserId,
        phone: PhoneNumber,
        email: impl Into<String>,
        password_hash: impl Into<String>,
        first_name: Option<String>,
        last_name: Option<String>,
        is_author: bool,
        token: ConfirmationToken,
    ) -> Self {
        Self {
            id,
            phone,
            email: email.into(),
            password_hash: password_hash.into(),
            first_name,
            last_name,
            avatar: None,
            is_author,
            confirmation_token: Some(token),
            is_active: false,
            created_at: Timestamp::now(),
        }
    }

    /// Confirms the account with a user-supplied code.
    ///
    /// On success the account becomes active and the token is cleared;
    /// the token is single-use.
    ///
    /// # Errors
    ///
    /// Returns an error when the account is already active, holds no
    /// pending token, or the code does not match.
    pub fn confirm(&mut self, code: &str) -> Result<(), UserError> {
        if self.is_active {
            return Err(UserError::already_active(self.id));
        }

        let token = self
            .confirmation_token
            .as_ref()
            .ok_or_else(|| UserError::invalid_confirmation_code())?;

        if !token.matches(code) {
            return Err(UserError::invalid_confirmation_code());
        }

        self.is_active = true;
        self.confirmation_token = None;
        Ok(())
    }

    /// Updates the editable profile fields.
    pub fn update_profile(
        &mut self,
        first_name: Option<String>,
        last_name: Option<String>,
        avatar: Option<String>,
    ) {
        self.first_name = first_name;
        self.last_name = last_name;
        self.avatar = avatar;
    }

    /// Display name: full name when available, otherwise the phone number.
    pub fn display_name(&self) -> String {
        match (&self.first_name, &self.last_name) {
            (Some(first), Some(last)) => format!("{} {}", first, last),
            (Some(first), None) => first.clone(),
            (None, Some(last)) => last.clone(),
            (None, None) => self.phone.to_string(),
        }
    }
}
