//! Route definitions for exchanges and everything hanging off them.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{exchanges, messages, reviews};
use crate::state::AppState;

/// ```text
/// GET       /exchanges/                -> list
/// GET       /exchanges/{id}/           -> get_by_id
/// POST      /exchanges/{id}/status/    -> update_status
/// GET, POST /exchanges/{id}/messages/  -> messages::list, messages::send
/// POST      /exchanges/{id}/reviews/   -> reviews::create
/// POST      /messages/{id}/read/       -> messages::mark_read
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/exchanges/", get(exchanges::list))
        .route("/exchanges/{id}/", get(exchanges::get_by_id))
        .route("/exchanges/{id}/status/", post(exchanges::update_status))
        .route(
            "/exchanges/{id}/messages/",
            get(messages::list).post(messages::send),
        )
        .route("/exchanges/{id}/reviews/", post(reviews::create))
        .route("/messages/{id}/read/", post(messages::mark_read))
}
