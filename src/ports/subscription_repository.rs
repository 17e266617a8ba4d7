//! Subscription repository port.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, SubscriptionId, UserId};
use crate::domain::subscription::Subscription;

/// Persistence contract for [`Subscription`] aggregates.
#[async_trait]
pub trait SubscriptionRepository: Send + Sync {
    /// Persist a new subscription.
    async fn save(&self, subscription: &Subscription) -> Result<(), DomainError>;

    /// Persist changes to an existing subscription.
    async fn update(&self, subscription: &Subscription) -> Result<(), DomainError>;

    /// Find a subscription by id.
    async fn find_by_id(&self, id: &SubscriptionId) -> Result<Option<Subscription>, DomainError>;

    /// Find the user's unpaid subscription, if one exists.
    ///
    /// At most one such row exists per user (partial unique index).
    async fn find_unpaid_for_user(
        &self,
        user_id: &UserId,
    ) -> Result<Option<Subscription>, DomainError>;

    /// Whether the user holds any subscription with
    /// `is_active AND is_paid`.
    async fn has_active_paid(&self, user_id: &UserId) -> Result<bool, DomainError>;

    /// All subscriptions for a user, newest first.
    async fn list_for_user(&self, user_id: &UserId) -> Result<Vec<Subscription>, DomainError>;
}
