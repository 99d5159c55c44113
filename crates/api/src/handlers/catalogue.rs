//! Handlers for categories and skills.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;
use skillswap_core::error::CoreError;
use skillswap_core::forms::{validate_skill, SkillInput};
use skillswap_core::status::SkillLevel;
use skillswap_db::models::category::Category;
use skillswap_db::models::skill::{CreateSkill, Skill, SkillWithCategory};
use skillswap_db::repositories::{CategoryRepo, SkillRepo, UserSkillRepo};

use crate::error::AppResult;
use crate::extract::JsonBody;
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// Choice sets for the skill form.
#[derive(Debug, Serialize)]
pub struct SkillFormChoices {
    pub levels: &'static [SkillLevel],
    pub categories: Vec<Category>,
}

/// GET / and GET /categories/
pub async fn list_categories(
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<Category>>>> {
    let categories = CategoryRepo::list(&state.pool).await?;
    Ok(Json(DataResponse::new(categories)))
}

/// GET /skills/
pub async fn list_skills(
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<SkillWithCategory>>>> {
    let skills = SkillRepo::list_with_category(&state.pool).await?;
    Ok(Json(DataResponse::new(skills)))
}

/// GET /skills/create/
pub async fn skill_form(
    State(state): State<AppState>,
    _user: AuthUser,
) -> AppResult<Json<DataResponse<SkillFormChoices>>> {
    let categories = CategoryRepo::list(&state.pool).await?;
    Ok(Json(DataResponse::new(SkillFormChoices {
        levels: SkillLevel::ALL,
        categories,
    })))
}

/// POST /skills/create/
///
/// Creates the skill and links it to the acting user. The link is
/// get-or-create, so it never duplicates for the same skill.
pub async fn create_skill(
    State(state): State<AppState>,
    user: AuthUser,
    JsonBody(input): JsonBody<SkillInput>,
) -> AppResult<(StatusCode, Json<DataResponse<Skill>>)> {
    let category_ids = CategoryRepo::list_ids(&state.pool).await?;
    let valid = validate_skill(&input, &category_ids).map_err(CoreError::InvalidFields)?;

    let skill = SkillRepo::create(
        &state.pool,
        &CreateSkill {
            name: valid.name,
            description: valid.description,
            level: valid.level,
            category_id: valid.category_id,
        },
    )
    .await?;
    UserSkillRepo::get_or_create(&state.pool, user.user_id, skill.id).await?;

    tracing::info!(user_id = user.user_id, skill_id = skill.id, "Skill created");

    Ok((
        StatusCode::CREATED,
        Json(
            DataResponse::new(skill)
                .with_message("Skill added to your profile")
                .with_next("/profile/"),
        ),
    ))
}
