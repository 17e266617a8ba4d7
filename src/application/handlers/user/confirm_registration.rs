//! ConfirmRegistrationHandler - Command handler for SMS confirmation.

use std::sync::Arc;

use crate::domain::user::{ConfirmationToken, User, UserError};
use crate::ports::UserRepository;

/// Command to confirm a pending registration with an SMS code.
#[derive(Debug, Clone)]
pub struct ConfirmRegistrationCommand {
    pub code: String,
}

/// Result of successful confirmation.
#[derive(Debug, Clone)]
pub struct ConfirmRegistrationResult {
    pub user: User,
}

/// Handler for registration confirmation.
///
/// The code alone identifies the pending account: the handler looks up
/// the user holding the token, activates the account and clears the
/// token so it cannot be replayed.
pub struct ConfirmRegistrationHandler {
    repository: Arc<dyn UserRepository>,
}

impl ConfirmRegistrationHandler {
    pub fn new(repository: Arc<dyn UserRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(
        &self,
        cmd: ConfirmRegistrationCommand,
    ) -> Result<ConfirmRegistrationResult, UserError> {
        let token = ConfirmationToken::parse(cmd.code)
            .map_err(|_| UserError::invalid_confirmation_code())?;

        let mut user = self
            .repository
            .find_by_confirmation_token(&token)
            .await?
            .ok_or_else(UserError::invalid_confirmation_code)?;

        user.confirm(token.as_str())?;
        self.repository.update(&user).await?;

        tracing::info!(user_id = %user.id, "Account confirmed");

        Ok(ConfirmRegistrationResult { user })
    }
}
