//! Route definitions for proposals and requests.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{proposals, requests};
use crate::state::AppState;

/// ```text
/// GET       /proposals/                -> list
/// GET, POST /proposals/create/         -> form, create
/// POST      /proposals/{id}/exchange/  -> start_exchange
/// GET       /requests/                 -> list
/// POST      /requests/create/          -> create
/// POST      /requests/{id}/exchange/   -> start_exchange
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/proposals/", get(proposals::list))
        .route(
            "/proposals/create/",
            get(proposals::form).post(proposals::create),
        )
        .route(
            "/proposals/{id}/exchange/",
            post(proposals::start_exchange),
        )
        .route("/requests/", get(requests::list))
        .route("/requests/create/", post(requests::create))
        .route("/requests/{id}/exchange/", post(requests::start_exchange))
}
