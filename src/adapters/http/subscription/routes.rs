//! Route definitions for subscription endpoints.

use axum::routing::{get, post};
use axum::Router;

use crate::adapters::http::AppState;

use super::handlers;

/// Subscription routes, nested under `/subscription` by the app router.
pub fn subscription_routes() -> Router<AppState> {
    Router::new()
        .route("/select", post(handlers::select_plan))
        .route("/payment/:id", get(handlers::payment))
        .route("/success", get(handlers::success))
}
