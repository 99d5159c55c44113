//! Route definitions for authentication and the acting user's own data.

use axum::routing::{delete, get, post};
use axum::Router;

use crate::handlers::{auth, points, profile, reviews};
use crate::state::AppState;

/// ```text
/// POST   /register/                  -> register
/// POST   /login/                     -> login
/// POST   /logout/                    -> logout
/// GET    /profile/                   -> view
/// POST   /profile/skills/            -> add_skill
/// DELETE /profile/skills/{skill_id}  -> remove_skill
/// GET    /points/                    -> view
/// GET    /users/{id}/reviews/        -> list_for_user
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/register/", post(auth::register))
        .route("/login/", post(auth::login))
        .route("/logout/", post(auth::logout))
        .route("/profile/", get(profile::view))
        .route("/profile/skills/", post(profile::add_skill))
        .route("/profile/skills/{skill_id}", delete(profile::remove_skill))
        .route("/points/", get(points::view))
        .route("/users/{id}/reviews/", get(reviews::list_for_user))
}
