//! HTTP DTOs for user endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::user::User;

pub use crate::adapters::http::ErrorResponse;

/// Request body for registering an account.
#[derive(Debug, Clone, Deserialize)]
pub struct RegisterRequest {
    pub phone: String,
    pub email: String,
    pub password: String,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub is_author: bool,
}

/// Request body for confirming a registration.
#[derive(Debug, Clone, Deserialize)]
pub struct ConfirmRequest {
    pub code: String,
}

/// User view for API responses. Never exposes the password hash or the
/// confirmation token.
#[derive(Debug, Clone, Serialize)]
pub struct UserView {
    pub id: String,
    pub phone: String,
    pub email: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub is_author: bool,
    pub is_active: bool,
}

impl From<&User> for UserView {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.to_string(),
            phone: user.phone.as_str().to_string(),
            email: user.email.clone(),
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            is_author: user.is_author,
            is_active: user.is_active,
        }
    }
}

/// Response for the author directory.
#[derive(Debug, Clone, Serialize)]
pub struct AuthorListResponse {
    pub authors: Vec<UserView>,
}

impl AuthorListResponse {
    pub fn from_users(users: &[User]) -> Self {
        Self {
            authors: users.iter().map(UserView::from).collect(),
        }
    }
}
