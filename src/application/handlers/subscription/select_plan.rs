//! SelectPlanHandler - Command handler for plan selection.

use std::sync::Arc;

use crate::domain::foundation::{SubscriptionId, UserId};
use crate::domain::subscription::{Plan, Subscription, SubscriptionError};
use crate::ports::SubscriptionRepository;

/// Command to select (or re-select) a subscription plan.
#[derive(Debug, Clone)]
pub struct SelectPlanCommand {
    pub user_id: UserId,
    pub plan: Plan,
}

/// Result of plan selection.
#[derive(Debug, Clone)]
pub struct SelectPlanResult {
    pub subscription: Subscription,
}

/// Handler for plan selection.
///
/// Selection is gated: a user who already holds an active, paid
/// subscription is rejected with a conflict and no state change. For
/// everyone else the flow is get-or-update: a user with a pending unpaid
/// record has its plan overwritten in place, so repeated selection before
/// payment converges to the latest choice and never creates duplicates.
pub struct SelectPlanHandler {
    repository: Arc<dyn SubscriptionRepository>,
}

impl SelectPlanHandler {
    pub fn new(repository: Arc<dyn SubscriptionRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: SelectPlanCommand) -> Result<SelectPlanResult, SubscriptionError> {
        // Gate: one active paid subscription at a time.
        if self.repository.has_active_paid(&cmd.user_id).await? {
            return Err(SubscriptionError::active_subscription_exists(cmd.user_id));
        }

        let subscription = match self.repository.find_unpaid_for_user(&cmd.user_id).await? {
            Some(mut existing) => {
                existing.change_plan(cmd.plan)?;
                self.repository.update(&existing).await?;
                tracing::debug!(
                    subscription_id = %existing.id,
                    plan = %cmd.plan,
                    "Updated pending subscription plan"
                );
                existing
            }
            None => {
                let subscription =
                    Subscription::select(SubscriptionId::new(), cmd.user_id, cmd.plan);
                self.repository.save(&subscription).await?;
                tracing::debug!(
                    subscription_id = %subscription.id,
                    plan = %cmd.plan,
                    "Created pending subscription"
                );
                subscription
            }
        };

        Ok(SelectPlanResult { subscription })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::DomainError;
    use crate::ports::SubscriptionRepository;
    use async_trait::async_trait;
    use std::sync::Mutex;

    struct MockSubscriptionRepository {
        subscriptions: Mutex<Vec<Subscription>>,
    }

    impl MockSubscriptionRepository {
        fn empty() -> Self {
            Self {
                subscriptions: Mutex::new(Vec::new()),
            }
        }

        fn with(subscriptions: Vec<Subscription>) -> Self {
            Self {
                subscriptions: Mutex::new(subscriptions),
            }
        }

        fn rows(&self) -> Vec<Subscription> {
            self.subscriptions.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl SubscriptionRepository for MockSubscriptionRepository {
        async fn save(&self, subscription: &Subscription) -> Result<(), DomainError> {
            self.subscriptions.lock().unwrap().push(subscription.clone());
            Ok(())
        }

        async fn update(&self, subscription: &Subscription) -> Result<(), DomainError> {
            let mut rows = self.subscriptions.lock().unwrap();
            if let Some(row) = rows.iter_mut().find(|s| s.id == subscription.id) {
                *row = subscription.clone();
            }
            Ok(())
        }

        async fn find_by_id(
            &self,
            id: &SubscriptionId,
        ) -> Result<Option<Subscription>, DomainError> {
            Ok(self
                .subscriptions
                .lock()
                .unwrap()
                .iter()
                .find(|s| &s.id == id)
                .cloned())
        }

        async fn find_unpaid_for_user(
            &self,
            user_id: &UserId,
        ) -> Result<Option<Subscription>, DomainError> {
            Ok(self
                .subscriptions
                .lock()
                .unwrap()
                .iter()
                .find(|s| &s.user_id == user_id && !s.is_paid)
                .cloned())
        }

        async fn has_active_paid(&self, user_id: &UserId) -> Result<bool, DomainError> {
            Ok(self
                .subscriptions
                .lock()
                .unwrap()
                .iter()
                .any(|s| &s.user_id == user_id && s.is_active && s.is_paid))
        }

        async fn list_for_user(
            &self,
            user_id: &UserId,
        ) -> Result<Vec<Subscription>, DomainError> {
            Ok(self
                .subscriptions
                .lock()
                .unwrap()
                .iter()
                .filter(|s| &s.user_id == user_id)
                .cloned()
                .collect())
        }
    }

    fn paid_subscription(user_id: UserId) -> Subscription {
        let mut sub = Subscription::select(SubscriptionId::new(), user_id, Plan::OneMonth);
        sub.mark_paid("cs_1", "https://pay.example.com/cs_1").unwrap();
        sub
    }

    #[tokio::test]
    async fn first_selection_creates_one_unpaid_row() {
        let repo = Arc::new(MockSubscriptionRepository::empty());
        let handler = SelectPlanHandler::new(repo.clone());
        let user_id = UserId::new();

        let result = handler
            .handle(SelectPlanCommand {
                user_id,
                plan: Plan::OneMonth,
            })
            .await
            .unwrap();

        assert!(!result.subscription.is_paid);
        assert_eq!(result.subscription.plan, Plan::OneMonth);

        let rows = repo.rows();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].user_id, user_id);
    }

    #[tokio::test]
    async fn repeated_selection_converges_without_duplicates() {
        let repo = Arc::new(MockSubscriptionRepository::empty());
        let handler = SelectPlanHandler::new(repo.clone());
        let user_id = UserId::new();

        handler
            .handle(SelectPlanCommand {
                user_id,
                plan: Plan::OneMonth,
            })
            .await
            .unwrap();
        let second = handler
            .handle(SelectPlanCommand {
                user_id,
                plan: Plan::OneYear,
            })
            .await
            .unwrap();

        let rows = repo.rows();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].plan, Plan::OneYear);
        assert_eq!(second.subscription.id, rows[0].id);
        assert!(!rows[0].is_paid);
    }

    #[tokio::test]
    async fn selecting_same_plan_twice_keeps_one_row() {
        let repo = Arc::new(MockSubscriptionRepository::empty());
        let handler = SelectPlanHandler::new(repo.clone());
        let user_id = UserId::new();

        for _ in 0..2 {
            handler
                .handle(SelectPlanCommand {
                    user_id,
                    plan: Plan::OneMonth,
                })
                .await
                .unwrap();
        }

        let rows = repo.rows();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].plan, Plan::OneMonth);
    }

    #[tokio::test]
    async fn active_paid_subscription_blocks_selection() {
        let user_id = UserId::new();
        let repo = Arc::new(MockSubscriptionRepository::with(vec![paid_subscription(
            user_id,
        )]));
        let handler = SelectPlanHandler::new(repo.clone());

        let result = handler
            .handle(SelectPlanCommand {
                user_id,
                plan: Plan::SixMonth,
            })
            .await;

        assert!(matches!(
            result,
            Err(SubscriptionError::ActiveSubscriptionExists(_))
        ));
        // No state change: the paid row is still the only one.
        assert_eq!(repo.rows().len(), 1);
    }

    #[tokio::test]
    async fn another_users_paid_subscription_does_not_block() {
        let repo = Arc::new(MockSubscriptionRepository::with(vec![paid_subscription(
            UserId::new(),
        )]));
        let handler = SelectPlanHandler::new(repo.clone());

        let result = handler
            .handle(SelectPlanCommand {
                user_id: UserId::new(),
                plan: Plan::ThreeMonth,
            })
            .await;

        assert!(result.is_ok());
        assert_eq!(repo.rows().len(), 2);
    }
}
