use axum::routing::{get, post};
use axum::Router;

use crate::handlers::events;
use crate::state::AppState;

/// ```text
/// GET  /events/            -> list
/// POST /events/create/     -> create
/// GET  /events/{id}/       -> get_by_id
/// POST /events/{id}/join/  -> join
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/events/", get(events::list))
        .route("/events/create/", post(events::create))
        .route("/events/{id}/", get(events::get_by_id))
        .route("/events/{id}/join/", post(events::join))
}
