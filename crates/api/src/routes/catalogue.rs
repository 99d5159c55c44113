use axum::routing::get;
use axum::Router;

use crate::handlers::catalogue;
use crate::state::AppState;

/// ```text
/// GET       /                -> list_categories
/// GET       /categories/     -> list_categories
/// GET       /skills/         -> list_skills
/// GET, POST /skills/create/  -> skill_form, create_skill
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(catalogue::list_categories))
        .route("/categories/", get(catalogue::list_categories))
        .route("/skills/", get(catalogue::list_skills))
        .route(
            "/skills/create/",
            get(catalogue::skill_form).post(catalogue::create_skill),
        )
}
