//! HTTP handlers for subscription endpoints.
//!
//! Connect axum routes to the application layer command/query handlers.

use axum::extract::{Json, Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Redirect};

use crate::adapters::http::{AppState, AuthenticatedUser};
use crate::application::handlers::subscription::{
    InitiatePaymentCommand, InitiatePaymentHandler, SelectPlanCommand, SelectPlanHandler,
};
use crate::domain::foundation::SubscriptionId;
use crate::domain::subscription::SubscriptionError;

use super::dto::{ErrorResponse, PaymentResponse, SelectPlanRequest, SubscriptionView, SuccessResponse};

impl AppState {
    fn select_plan_handler(&self) -> SelectPlanHandler {
        SelectPlanHandler::new(self.subscription_repository.clone())
    }

    fn initiate_payment_handler(&self) -> InitiatePaymentHandler {
        InitiatePaymentHandler::new(
            self.subscription_repository.clone(),
            self.payment_provider.clone(),
        )
    }
}

/// POST /subscription/select - Select a plan, then bounce to payment.
///
/// On success the browser is redirected (303) to the payment URL for the
/// pending record. An existing active subscription yields a 400 with a
/// message and no state change.
pub async fn select_plan(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    Json(request): Json<SelectPlanRequest>,
) -> Result<impl IntoResponse, SubscriptionApiError> {
    let handler = state.select_plan_handler();
    let cmd = SelectPlanCommand {
        user_id: user.user_id,
        plan: request.plan,
    };

    let result = handler.handle(cmd).await?;

    Ok(Redirect::to(&format!(
        "/subscription/payment/{}",
        result.subscription.id
    )))
}

/// GET /subscription/payment/{id} - Initiate payment for a pending record.
///
/// Runs the checkout flow against the payment provider and responds with
/// the hosted payment link and the price.
pub async fn payment(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    Path(id): Path<SubscriptionId>,
) -> Result<impl IntoResponse, SubscriptionApiError> {
    let handler = state.initiate_payment_handler();
    let cmd = InitiatePaymentCommand {
        subscription_id: id,
        requesting_user: user.user_id,
    };

    let result = handler.handle(cmd).await?;

    let response = PaymentResponse {
        subscription: SubscriptionView::from(&result.subscription),
        price: result.price,
        payment_link: result.payment_link,
    };

    Ok(Json(response))
}

/// GET /subscription/success - Post-checkout landing payload.
pub async fn success() -> impl IntoResponse {
    Json(SuccessResponse::new())
}

/// API error type that converts subscription errors to HTTP responses.
#[derive(Debug)]
pub struct SubscriptionApiError(SubscriptionError);

impl From<SubscriptionError> for SubscriptionApiError {
    fn from(err: SubscriptionError) -> Self {
        Self(err)
    }
}

impl From<crate::domain::foundation::DomainError> for SubscriptionApiError {
    fn from(err: crate::domain::foundation::DomainError) -> Self {
        Self(SubscriptionError::from(err))
    }
}

impl IntoResponse for SubscriptionApiError {
    fn into_response(self) -> axum::response::Response {
        let (status, error_code) = match &self.0 {
            SubscriptionError::NotFound(_) => (StatusCode::NOT_FOUND, "SUBSCRIPTION_NOT_FOUND"),
            SubscriptionError::ActiveSubscriptionExists(_) => {
                (StatusCode::BAD_REQUEST, "SUBSCRIPTION_EXISTS")
            }
            SubscriptionError::AlreadyPaid(_) => (StatusCode::CONFLICT, "ALREADY_PAID"),
            SubscriptionError::UnknownPlan(_) => (StatusCode::BAD_REQUEST, "UNKNOWN_PLAN"),
            SubscriptionError::PaymentFailed { .. } => (StatusCode::BAD_GATEWAY, "PAYMENT_FAILED"),
            SubscriptionError::ValidationFailed { .. } => {
                (StatusCode::BAD_REQUEST, "VALIDATION_FAILED")
            }
            SubscriptionError::Infrastructure(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR")
            }
        };

        let body = ErrorResponse::new(error_code, self.0.message());
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::stripe::MockPaymentProvider;
    use crate::domain::foundation::{DomainError, PostId, UserId};
    use crate::domain::post::Post;
    use crate::domain::subscription::{Plan, Subscription};
    use crate::domain::user::{ConfirmationToken, PhoneNumber, User};
    use crate::ports::{
        DeliveryReceipt, PostRepository, SmsError, SmsSender, SubscriptionRepository,
        UserRepository,
    };
    use async_trait::async_trait;
    use std::sync::{Arc, Mutex};

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

    struct NoopUserRepository;

    #[async_trait]
    impl UserRepository for NoopUserRepository {
        async fn save(&self, _user: &User) -> Result<(), DomainError> {
            Ok(())
        }

        async fn update(&self, _user: &User) -> Result<(), DomainError> {
            Ok(())
        }

        async fn find_by_id(&self, _id: &UserId) -> Result<Option<User>, DomainError> {
            Ok(None)
        }

        async fn find_by_phone(&self, _phone: &PhoneNumber) -> Result<Option<User>, DomainError> {
            Ok(None)
        }

        async fn find_by_email(&self, _email: &str) -> Result<Option<User>, DomainError> {
            Ok(None)
        }

        async fn find_by_confirmation_token(
            &self,
            _token: &ConfirmationToken,
        ) -> Result<Option<User>, DomainError> {
            Ok(None)
        }

        async fn token_in_use(&self, _token: &ConfirmationToken) -> Result<bool, DomainError> {
            Ok(false)
        }

        async fn list_authors(&self) -> Result<Vec<User>, DomainError> {
            Ok(vec![])
        }
    }

    struct NoopPostRepository;

    #[async_trait]
    impl PostRepository for NoopPostRepository {
        async fn save(&self, _post: &Post) -> Result<(), DomainError> {
            Ok(())
        }

        async fn update(&self, _post: &Post) -> Result<(), DomainError> {
            Ok(())
        }

        async fn delete(&self, _id: &PostId) -> Result<(), DomainError> {
            Ok(())
        }

        async fn find_by_id(&self, _id: &PostId) -> Result<Option<Post>, DomainError> {
            Ok(None)
        }

        async fn list(&self) -> Result<Vec<Post>, DomainError> {
            Ok(vec![])
        }

        async fn latest(&self, _limit: u32) -> Result<Vec<Post>, DomainError> {
            Ok(vec![])
        }
    }

    struct NoopSmsSender;

    #[async_trait]
    impl SmsSender for NoopSmsSender {
        async fn send_confirmation_code(
            &self,
            _token: &ConfirmationToken,
            _phone: &PhoneNumber,
        ) -> Result<DeliveryReceipt, SmsError> {
            Ok(DeliveryReceipt {
                message_id: "noop".to_string(),
            })
        }
    }

    fn state_with(repo: Arc<MockSubscriptionRepository>) -> AppState {
        AppState {
            user_repository: Arc::new(NoopUserRepository),
            post_repository: Arc::new(NoopPostRepository),
            subscription_repository: repo,
            payment_provider: Arc::new(MockPaymentProvider::new()),
            sms_sender: Arc::new(NoopSmsSender),
        }
    }

    fn user(user_id: UserId) -> AuthenticatedUser {
        AuthenticatedUser { user_id }
    }

    #[tokio::test]
    async fn select_plan_redirects_to_payment_url() {
        let repo = Arc::new(MockSubscriptionRepository::empty());
        let state = state_with(repo.clone());
        let user_id = UserId::new();

        let response = select_plan(
            State(state),
            user(user_id),
            Json(SelectPlanRequest {
                plan: Plan::OneMonth,
            }),
        )
        .await
        .unwrap()
        .into_response();

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        let location = response
            .headers()
            .get(axum::http::header::LOCATION)
            .and_then(|v| v.to_str().ok())
            .unwrap();
        let rows = repo.rows();
        assert_eq!(rows.len(), 1);
        assert_eq!(location, format!("/subscription/payment/{}", rows[0].id));
    }

    #[tokio::test]
    async fn select_plan_conflict_is_bad_request() {
        let user_id = UserId::new();
        let mut paid = Subscription::select(SubscriptionId::new(), user_id, Plan::OneMonth);
        paid.mark_paid("cs_1", "https://pay.example.com/cs_1").unwrap();
        let repo = Arc::new(MockSubscriptionRepository::with(vec![paid]));
        let state = state_with(repo);

        let result = select_plan(
            State(state),
            user(user_id),
            Json(SelectPlanRequest {
                plan: Plan::OneYear,
            }),
        )
        .await;

        let response = result.err().unwrap().into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn payment_returns_link_and_price() {
        let user_id = UserId::new();
        let pending = Subscription::select(SubscriptionId::new(), user_id, Plan::ThreeMonth);
        let sub_id = pending.id;
        let repo = Arc::new(MockSubscriptionRepository::with(vec![pending]));
        let state = state_with(repo.clone());

        let response = payment(State(state), user(user_id), Path(sub_id))
            .await
            .unwrap()
            .into_response();

        assert_eq!(response.status(), StatusCode::OK);
        assert!(repo.rows()[0].is_paid);
    }

    #[tokio::test]
    async fn payment_for_foreign_subscription_is_not_found() {
        let pending =
            Subscription::select(SubscriptionId::new(), UserId::new(), Plan::ThreeMonth);
        let sub_id = pending.id;
        let repo = Arc::new(MockSubscriptionRepository::with(vec![pending]));
        let state = state_with(repo);

        let result = payment(State(state), user(UserId::new()), Path(sub_id)).await;

        let response = result.err().unwrap().into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn api_error_maps_payment_failed_to_502() {
        let err = SubscriptionApiError(SubscriptionError::payment_failed("provider down"));
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    }

    #[test]
    fn api_error_maps_already_paid_to_409() {
        let err = SubscriptionApiError(SubscriptionError::already_paid(SubscriptionId::new()));
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::CONFLICT);
    }

    #[test]
    fn api_error_maps_infrastructure_to_500() {
        let err = SubscriptionApiError(SubscriptionError::infrastructure("db down"));
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
