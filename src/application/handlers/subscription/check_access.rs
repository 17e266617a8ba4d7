//! CheckAccessHandler - Query handler for the subscription gate.

use std::sync::Arc;

use crate::domain::foundation::UserId;
use crate::domain::subscription::SubscriptionError;
use crate::ports::SubscriptionRepository;

/// Query: does this user hold an active, paid subscription?
#[derive(Debug, Clone)]
pub struct CheckAccessQuery {
    pub user_id: UserId,
}

/// Result of the gate check.
#[derive(Debug, Clone)]
pub struct CheckAccessResult {
    pub has_active_subscription: bool,
}

/// Handler for the subscription gate.
///
/// The gate is consulted before plan selection (to block a second
/// purchase) and by content-access decisions. It has no side effects.
pub struct CheckAccessHandler {
    repository: Arc<dyn SubscriptionRepository>,
}

impl CheckAccessHandler {
    pub fn new(repository: Arc<dyn SubscriptionRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, query: CheckAccessQuery) -> Result<CheckAccessResult, SubscriptionError> {
        let has_active_subscription = self.repository.has_active_paid(&query.user_id).await?;
        Ok(CheckAccessResult {
            has_active_subscription,
        })
    }
}
