//! RegisterUserHandler - Command handler for account registration.

use std::sync::Arc;

use crate::domain::foundation::UserId;
use crate::domain::user::{hash_password, ConfirmationToken, PhoneNumber, User, UserError};
use crate::ports::{SmsSender, UserRepository};

/// How many times to redraw a token that collides with a pending one.
const TOKEN_RETRY_LIMIT: usize = 10;

/// Command to register a new account.
#[derive(Debug, Clone)]
pub struct RegisterUserCommand {
    pub phone: String,
    pub email: String,
    pub password: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub is_author: bool,
}

/// Result of successful registration.
#[derive(Debug, Clone)]
pub struct RegisterUserResult {
    pub user: User,
}

/// Handler for account registration.
///
/// Validates the phone number, checks phone and email uniqueness, hashes
/// the password, generates a confirmation token unique among pending
/// registrations and persists the inactive account before sending the
/// SMS. A delivery failure is reported to the caller but the account
/// stays persisted, so the user can retry confirmation delivery without
/// re-registering.
pub struct RegisterUserHandler {
    repository: Arc<dyn UserRepository>,
    sms_sender: Arc<dyn SmsSender>,
}

impl RegisterUserHandler {
    pub fn new(repository: Arc<dyn UserRepository>, sms_sender: Arc<dyn SmsSender>) -> Self {
        Self {
            repository,
            sms_sender,
        }
    }

    pub async fn handle(&self, cmd: RegisterUserCommand) -> Result<RegisterUserResult, UserError> {
        let phone = PhoneNumber::new(cmd.phone)?;

        if self.repository.find_by_phone(&phone).await?.is_some() {
            return Err(UserError::phone_taken(phone.to_string()));
        }
        if self.repository.find_by_email(&cmd.email).await?.is_some() {
            return Err(UserError::email_taken(cmd.email));
        }

        let password_hash = hash_password(&cmd.password)?;
        let token = self.unique_token().await?;

        let user = User::register(
            UserId::new(),
            phone,
            cmd.email,
            password_hash,
            cmd.first_name,
            cmd.last_name,
            cmd.is_author,
            token.clone(),
        );
        self.repository.save(&user).await?;

        tracing::info!(user_id = %user.id, "Registered new account, sending confirmation SMS");

        self.sms_sender
            .send_confirmation_code(&token, &user.phone)
            .await
            .map_err(|e| UserError::sms_delivery_failed(e.to_string()))?;

        Ok(RegisterUserResult { user })
    }

    /// Draws tokens until one is free among pending registrations.
    async fn unique_token(&self) -> Result<ConfirmationToken, UserError> {
        for _ in 0..TOKEN_RETRY_LIMIT {
            let token = ConfirmationToken::generate();
            if !self.repository.token_in_use(&token).await? {
                return Ok(token);
            }
        }
        Err(UserError::infrastructure(
            "Could not generate a unique confirmation token",
        ))
    }
}
