//! Route definitions for post endpoints.

use axum::routing::get;
use axum::Router;

use crate::adapters::http::AppState;

use super::handlers;

/// Post routes: the index page plus the catalog CRUD surface.
pub fn post_router() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::index))
        .route("/posts", get(handlers::list_posts).post(handlers::create_post))
        .route(
            "/posts/:id",
            get(handlers::get_post)
                .put(handlers::update_post)
                .delete(handlers::delete_post),
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_post_router() {
        let _router: Router<AppState> = post_router();
    }
}
