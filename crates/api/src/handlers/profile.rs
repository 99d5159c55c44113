//! Handlers for the acting user's profile and owned skills.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use skillswap_core::error::CoreError;
use skillswap_core::types::DbId;
use skillswap_db::models::exchange::ExchangeDetail;
use skillswap_db::models::proposal::ProposalDetail;
use skillswap_db::models::skill::SkillWithCategory;
use skillswap_db::models::user::UserResponse;
use skillswap_db::models::user_skill::UserSkill;
use skillswap_db::repositories::{ExchangeRepo, ProposalRepo, SkillRepo, UserRepo, UserSkillRepo};

use crate::error::{AppError, AppResult};
use crate::extract::JsonBody;
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct ProfileView {
    pub user: UserResponse,
    pub skills: Vec<SkillWithCategory>,
    pub proposals: Vec<ProposalDetail>,
    pub exchanges: Vec<ExchangeDetail>,
}

/// Request body for `POST /profile/skills/`.
#[derive(Debug, Deserialize)]
pub struct AddSkillRequest {
    pub skill_id: DbId,
}

/// GET /profile/
pub async fn view(
    State(state): State<AppState>,
    user: AuthUser,
) -> AppResult<Json<DataResponse<ProfileView>>> {
    let account = UserRepo::find_by_id(&state.pool, user.user_id)
        .await?
        .ok_or(AppError::LoginRequired)?;

    let profile = ProfileView {
        user: account.into(),
        skills: SkillRepo::list_for_user(&state.pool, user.user_id).await?,
        proposals: ProposalRepo::list_for_user(&state.pool, user.user_id).await?,
        exchanges: ExchangeRepo::list_for_user(&state.pool, user.user_id).await?,
    };
    Ok(Json(DataResponse::new(profile)))
}

/// POST /profile/skills/
///
/// Links an existing skill. Linking the same skill twice is a conflict.
pub async fn add_skill(
    State(state): State<AppState>,
    user: AuthUser,
    JsonBody(input): JsonBody<AddSkillRequest>,
) -> AppResult<(StatusCode, Json<DataResponse<UserSkill>>)> {
    SkillRepo::find_by_id(&state.pool, input.skill_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Skill",
            id: input.skill_id,
        }))?;

    let link = UserSkillRepo::create(&state.pool, user.user_id, input.skill_id).await?;
    tracing::info!(user_id = user.user_id, skill_id = input.skill_id, "Skill linked");

    Ok((
        StatusCode::CREATED,
        Json(DataResponse::new(link).with_next("/profile/")),
    ))
}

/// DELETE /profile/skills/{skill_id}
pub async fn remove_skill(
    State(state): State<AppState>,
    user: AuthUser,
    Path(skill_id): Path<DbId>,
) -> AppResult<StatusCode> {
    if UserSkillRepo::delete(&state.pool, user.user_id, skill_id).await? {
        tracing::info!(user_id = user.user_id, skill_id, "Skill unlinked");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "UserSkill",
            id: skill_id,
        }))
    }
}
