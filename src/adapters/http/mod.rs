//! HTTP adapters - axum routers, handlers and DTOs.
//!
//! Each bounded context gets its own module with `dto.rs`, `handlers.rs`
//! and `routes.rs`. Authentication and the shared application state live
//! here.

pub mod post;
pub mod subscription;
pub mod user;

use std::str::FromStr;
use std::sync::Arc;

use axum::response::{IntoResponse, Redirect};
use axum::Router;
use serde::Serialize;

use crate::domain::foundation::UserId;
use crate::ports::{
    PaymentProvider, PostRepository, SmsSender, SubscriptionRepository, UserRepository,
};

/// Shared application state containing all dependencies.
///
/// Cloned per request; dependencies are Arc-wrapped for cheap sharing.
#[derive(Clone)]
pub struct AppState {
    pub user_repository: Arc<dyn UserRepository>,
    pub post_repository: Arc<dyn PostRepository>,
    pub subscription_repository: Arc<dyn SubscriptionRepository>,
    pub payment_provider: Arc<dyn PaymentProvider>,
    pub sms_sender: Arc<dyn SmsSender>,
}

/// Create the complete application router.
pub fn app_router() -> Router<AppState> {
    Router::new()
        .merge(post::post_router())
        .nest("/subscription", subscription::subscription_routes())
        .nest("/users", user::user_routes())
        .merge(user::directory_routes())
}

/// Standard JSON error body.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            message: message.into(),
        }
    }
}

/// Authenticated user context extracted from the request.
///
/// In production this would come from a session or JWT middleware; for
/// now an `X-User-Id` header carries the principal.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub user_id: UserId,
}

/// Rejection for protected routes: browsers get sent to the login page
/// instead of receiving a hard failure.
pub struct RedirectToLogin;

impl IntoResponse for RedirectToLogin {
    fn into_response(self) -> axum::response::Response {
        Redirect::to("/users/login").into_response()
    }
}

impl<S> axum::extract::FromRequestParts<S> for AuthenticatedUser
where
    S: Send + Sync,
{
    type Rejection = RedirectToLogin;

    fn from_request_parts<'life0, 'life1, 'async_trait>(
        parts: &'life0 mut axum::http::request::Parts,
        _state: &'life1 S,
    ) -> std::pin::Pin<
        Box<dyn std::future::Future<Output = Result<Self, Self::Rejection>> + Send + 'async_trait>,
    >
    where
        'life0: 'async_trait,
        'life1: 'async_trait,
        Self: 'async_trait,
    {
        Box::pin(async move {
            let user_id = parts
                .headers
                .get("X-User-Id")
                .and_then(|v| v.to_str().ok())
                .and_then(|s| UserId::from_str(s).ok())
                .ok_or(RedirectToLogin)?;

            Ok(AuthenticatedUser { user_id })
        })
    }
}

/// Quick sanity check used by handler tests: a redirect rejection must
/// send the browser to the login page with a see-other status.
#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    #[test]
    fn redirect_rejection_is_see_other_to_login() {
        let response = RedirectToLogin.into_response();
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(
            response
                .headers()
                .get(axum::http::header::LOCATION)
                .and_then(|v| v.to_str().ok()),
            Some("/users/login")
        );
    }
}
