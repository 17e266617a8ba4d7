//! HTTP handlers for user endpoints.

use axum::extract::{Json, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;

use crate::adapters::http::AppState;
use crate::application::handlers::user::{
    ConfirmRegistrationCommand, ConfirmRegistrationHandler, ListAuthorsHandler, ListAuthorsQuery,
    RegisterUserCommand, RegisterUserHandler,
};
use crate::domain::user::UserError;

use super::dto::{AuthorListResponse, ConfirmRequest, ErrorResponse, RegisterRequest, UserView};

impl AppState {
    fn register_user_handler(&self) -> RegisterUserHandler {
        RegisterUserHandler::new(self.user_repository.clone(), self.sms_sender.clone())
    }

    fn confirm_registration_handler(&self) -> ConfirmRegistrationHandler {
        ConfirmRegistrationHandler::new(self.user_repository.clone())
    }

    fn list_authors_handler(&self) -> ListAuthorsHandler {
        ListAuthorsHandler::new(self.user_repository.clone())
    }
}

/// POST /users/register - Create an inactive account and send the code.
pub async fn register(
    State(state): State<AppState>,
    Json(request): Json<RegisterRequest>,
) -> Result<impl IntoResponse, UserApiError> {
    let handler = state.register_user_handler();
    let cmd = RegisterUserCommand {
        phone: request.phone,
        email: request.email,
        password: request.password,
        first_name: request.first_name,
        last_name: request.last_name,
        is_author: request.is_author,
    };

    let result = handler.handle(cmd).await?;

    Ok((StatusCode::CREATED, Json(UserView::from(&result.user))))
}

/// POST /users/confirm - Activate an account with the SMS code.
pub async fn confirm(
    State(state): State<AppState>,
    Json(request): Json<ConfirmRequest>,
) -> Result<impl IntoResponse, UserApiError> {
    let handler = state.confirm_registration_handler();
    let result = handler
        .handle(ConfirmRegistrationCommand { code: request.code })
        .await?;

    Ok(Json(UserView::from(&result.user)))
}

/// GET /authors - Public directory of publishing authors.
pub async fn list_authors(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, UserApiError> {
    let handler = state.list_authors_handler();
    let result = handler.handle(ListAuthorsQuery).await?;

    Ok(Json(AuthorListResponse::from_users(&result.authors)))
}

/// API error type that converts user errors to HTTP responses.
#[derive(Debug)]
pub struct UserApiError(UserError);

impl From<UserError> for UserApiError {
    fn from(err: UserError) -> Self {
        Self(err)
    }
}

impl IntoResponse for UserApiError {
    fn into_response(self) -> axum::response::Response {
        let (status, error_code) = match &self.0 {
            UserError::NotFound(_) => (StatusCode::NOT_FOUND, "USER_NOT_FOUND"),
            UserError::PhoneTaken(_) => (StatusCode::BAD_REQUEST, "PHONE_TAKEN"),
            UserError::EmailTaken(_) => (StatusCode::BAD_REQUEST, "EMAIL_TAKEN"),
            UserError::InvalidConfirmationCode => {
                (StatusCode::BAD_REQUEST, "INVALID_CONFIRMATION_CODE")
            }
            UserError::AlreadyActive(_) => (StatusCode::CONFLICT, "ALREADY_ACTIVE"),
            UserError::WeakPassword(_) => (StatusCode::BAD_REQUEST, "WEAK_PASSWORD"),
            UserError::SmsDeliveryFailed { .. } => (StatusCode::BAD_GATEWAY, "SMS_DELIVERY_FAILED"),
            UserError::ValidationFailed { .. } => (StatusCode::BAD_REQUEST, "VALIDATION_FAILED"),
            UserError::Infrastructure(_) => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR"),
        };

        let body = ErrorResponse::new(error_code, self.0.message());
        (status, Json(body)).into_response()
    }
}
