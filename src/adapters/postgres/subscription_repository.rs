//! PostgreSQL implementation of SubscriptionRepository.

use crate::domain::foundation::{DomainError, ErrorCode, SubscriptionId, Timestamp, UserId};
use crate::domain::subscription::{Plan, Subscription};
use crate::ports::SubscriptionRepository;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

/// PostgreSQL implementation of the SubscriptionRepository port.
pub struct PostgresSubscriptionRepository {
    pool: PgPool,
}

impl PostgresSubscriptionRepository {
    /// Creates a new repository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Database row representation of a subscription.
#[derive(Debug, sqlx::FromRow)]
struct SubscriptionRow {
    id: Uuid,
    user_id: Uuid,
    plan: String,
    start_date: DateTime<Utc>,
    end_date: Option<DateTime<Utc>>,
    is_active: bool,
    is_paid: bool,
    checkout_session_id: Option<String>,
    payment_link: Option<String>,
}

impl TryFrom<SubscriptionRow> for Subscription {
    type Error = DomainError;

    fn try_from(row: SubscriptionRow) -> Result<Self, Self::Error> {
        let plan = parse_plan(&row.plan)?;

        Ok(Subscription {
            id: SubscriptionId::from_uuid(row.id),
            user_id: UserId::from_uuid(row.user_id),
            plan,
            start_date: Timestamp::from_datetime(row.start_date),
            end_date: row.end_date.map(Timestamp::from_datetime),
            is_active: row.is_active,
            is_paid: row.is_paid,
            checkout_session_id: row.checkout_session_id,
            payment_link: row.payment_link,
        })
    }
}

fn parse_plan(s: &str) -> Result<Plan, DomainError> {
    Plan::parse(s).ok_or_else(|| {
        DomainError::new(
            ErrorCode::DatabaseError,
            format!("Invalid plan value: {}", s),
        )
    })
}

const SELECT_COLUMNS: &str = "id, user_id, plan, start_date, end_date, is_active, is_paid, \
                              checkout_session_id, payment_link";

#[async_trait]
impl SubscriptionRepository for PostgresSubscriptionRepository {
    async fn save(&self, subscription: &Subscription) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            INSERT INTO subscriptions (
                id, user_id, plan, start_date, end_date, is_active, is_paid,
                checkout_session_id, payment_link
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            "#,
        )
        .bind(subscription.id.as_uuid())
        .bind(subscription.user_id.as_uuid())
        .bind(subscription.plan.as_str())
        .bind(subscription.start_date.as_datetime())
        .bind(subscription.end_date.as_ref().map(Timestamp::as_datetime))
        .bind(subscription.is_active)
        .bind(subscription.is_paid)
        .bind(&subscription.checkout_session_id)
        .bind(&subscription.payment_link)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(db_err) = &e {
                if db_err.constraint() == Some("subscriptions_one_unpaid_per_user") {
                    return DomainError::new(
                        ErrorCode::SubscriptionConflict,
                        "User already has a pending subscription",
                    );
                }
            }
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to save subscription: {}", e),
            )
        })?;

        Ok(())
    }

    async fn update(&self, subscription: &Subscription) -> Result<(), DomainError> {
        let result = sqlx::query(
            r#"
            UPDATE subscriptions SET
                plan = $2,
                start_date = $3,
                end_date = $4,
                is_active = $5,
                is_paid = $6,
                checkout_session_id = $7,
                payment_link = $8
            WHERE id = $1
            "#,
        )
        .bind(subscription.id.as_uuid())
        .bind(subscription.plan.as_str())
        .bind(subscription.start_date.as_datetime())
        .bind(subscription.end_date.as_ref().map(Timestamp::as_datetime))
        .bind(subscription.is_active)
        .bind(subscription.is_paid)
        .bind(&subscription.checkout_session_id)
        .bind(&subscription.payment_link)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to update subscription: {}", e),
            )
        })?;

        if result.rows_affected() == 0 {
            return Err(DomainError::new(
                ErrorCode::SubscriptionNotFound,
                "Subscription not found",
            ));
        }

        Ok(())
    }

    async fn find_by_id(
        &self,
        id: &SubscriptionId,
    ) -> Result<Option<Subscription>, DomainError> {
        let row: Option<SubscriptionRow> = sqlx::query_as(&format!(
            "SELECT {} FROM subscriptions WHERE id = $1",
            SELECT_COLUMNS
        ))
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to find subscription: {}", e),
            )
        })?;

        row.map(Subscription::try_from).transpose()
    }

    async fn find_unpaid_for_user(
        &self,
        user_id: &UserId,
    ) -> Result<Option<Subscription>, DomainError> {
        let row: Option<SubscriptionRow> = sqlx::query_as(&format!(
            "SELECT {} FROM subscriptions WHERE user_id = $1 AND is_paid = FALSE",
            SELECT_COLUMNS
        ))
        .bind(user_id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to find pending subscription: {}", e),
            )
        })?;

        row.map(Subscription::try_from).transpose()
    }

    async fn has_active_paid(&self, user_id: &UserId) -> Result<bool, DomainError> {
        let exists: Option<bool> = sqlx::query_scalar(
            r#"
            SELECT EXISTS (
                SELECT 1 FROM subscriptions
                WHERE user_id = $1 AND is_active = TRUE AND is_paid = TRUE
            )
            "#,
        )
        .bind(user_id.as_uuid())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to check subscription status: {}", e),
            )
        })?;

        Ok(exists.unwrap_or(false))
    }

    async fn list_for_user(&self, user_id: &UserId) -> Result<Vec<Subscription>, DomainError> {
        let rows: Vec<SubscriptionRow> = sqlx::query_as(&format!(
            "SELECT {} FROM subscriptions WHERE user_id = $1 ORDER BY start_date DESC",
            SELECT_COLUMNS
        ))
        .bind(user_id.as_uuid())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to list subscriptions: {}", e),
            )
        })?;

        rows.into_iter().map(Subscription::try_from).collect()
    }
}
