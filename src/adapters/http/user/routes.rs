//! Route definitions for user endpoints.

use axum::routing::{get, post};
use axum::Router;

use crate::adapters::http::AppState;

use super::handlers;

/// Account routes, nested under `/users` by the app router.
pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/register", post(handlers::register))
        .route("/confirm", post(handlers::confirm))
}

/// Top-level directory routes.
pub fn directory_routes() -> Router<AppState> {
    Router::new().route("/authors", get(handlers::list_authors))
}
