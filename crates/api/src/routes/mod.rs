pub mod account;
pub mod catalogue;
pub mod events;
pub mod exchanges;
pub mod health;
pub mod marketplace;

use axum::Router;

use crate::state::AppState;

/// Build the application route tree.
///
/// Route hierarchy (trailing slashes are significant):
///
/// ```text
/// /                                   categories (public)
/// /categories/                        categories (public)
/// /skills/                            all skills (public)
/// /skills/create/                     form choices, create (auth)
///
/// /register/                          register (public)
/// /login/                             login (public)
/// /logout/                            logout (auth)
/// /profile/                           profile view (auth)
/// /profile/skills/                    link a skill (auth)
/// /profile/skills/{skill_id}          unlink a skill (auth)
/// /points/                            balance and history (auth)
/// /users/{id}/reviews/                reviews received (public)
///
/// /proposals/                         all proposals (public)
/// /proposals/create/                  form choices, create (auth)
/// /proposals/{id}/exchange/           start exchange (auth)
/// /requests/                          all requests (public)
/// /requests/create/                   create (auth)
/// /requests/{id}/exchange/            start exchange (auth)
///
/// /exchanges/                         own exchanges, newest first (auth)
/// /exchanges/{id}/                    detail (participants)
/// /exchanges/{id}/status/             complete or reject (participants)
/// /exchanges/{id}/messages/           list, send (participants)
/// /exchanges/{id}/reviews/            review the other side (participants)
/// /messages/{id}/read/                mark read (receiver)
///
/// /events/                            all events by date (public)
/// /events/create/                     create (auth)
/// /events/{id}/                       detail with participant count (public)
/// /events/{id}/join/                  join (auth)
/// ```
pub fn app_routes() -> Router<AppState> {
    Router::new()
        .merge(catalogue::router())
        .merge(account::router())
        .merge(marketplace::router())
        .merge(exchanges::router())
        .merge(events::router())
}
