//! Handlers for the `/proposals` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;
use skillswap_core::error::CoreError;
use skillswap_core::forms::{validate_proposal, ProposalInput, SkillChoices};
use skillswap_core::status::ExchangeFormat;
use skillswap_core::types::DbId;
use skillswap_db::models::exchange::{CreateExchange, Exchange};
use skillswap_db::models::proposal::{CreateProposal, Proposal, ProposalDetail};
use skillswap_db::models::skill::SkillWithCategory;
use skillswap_db::repositories::{ExchangeRepo, ProposalRepo, SkillRepo, UserSkillRepo};
use skillswap_db::DbPool;

use crate::error::{AppError, AppResult};
use crate::extract::JsonBody;
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// Choice sets for the proposal form.
#[derive(Debug, Serialize)]
pub struct ProposalFormChoices {
    /// Only skills the acting user holds.
    pub skill_offered: Vec<SkillWithCategory>,
    /// Every skill.
    pub skill_wanted: Vec<SkillWithCategory>,
    pub formats: &'static [ExchangeFormat],
}

/// Offered/wanted id sets used to validate a proposal or request.
pub(crate) async fn skill_choices(pool: &DbPool, user_id: DbId) -> AppResult<SkillChoices> {
    Ok(SkillChoices {
        offered: UserSkillRepo::list_skill_ids(pool, user_id).await?,
        wanted: SkillRepo::list_ids(pool).await?,
    })
}

/// GET /proposals/
pub async fn list(
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<ProposalDetail>>>> {
    let proposals = ProposalRepo::list_detailed(&state.pool).await?;
    Ok(Json(DataResponse::new(proposals)))
}

/// GET /proposals/create/
pub async fn form(
    State(state): State<AppState>,
    user: AuthUser,
) -> AppResult<Json<DataResponse<ProposalFormChoices>>> {
    let choices = ProposalFormChoices {
        skill_offered: SkillRepo::list_for_user(&state.pool, user.user_id).await?,
        skill_wanted: SkillRepo::list_with_category(&state.pool).await?,
        formats: ExchangeFormat::ALL,
    };
    Ok(Json(DataResponse::new(choices)))
}

/// POST /proposals/create/
///
/// The author is always the acting user.
pub async fn create(
    State(state): State<AppState>,
    user: AuthUser,
    JsonBody(input): JsonBody<ProposalInput>,
) -> AppResult<(StatusCode, Json<DataResponse<Proposal>>)> {
    let choices = skill_choices(&state.pool, user.user_id).await?;
    let valid = validate_proposal(&input, &choices).map_err(CoreError::InvalidFields)?;

    let proposal = ProposalRepo::create(
        &state.pool,
        &CreateProposal {
            user_id: user.user_id,
            skill_offered_id: valid.skill_offered,
            skill_wanted_id: valid.skill_wanted,
            description: valid.description,
            format: valid.format,
            deadlines: valid.deadlines,
        },
    )
    .await?;

    tracing::info!(user_id = user.user_id, proposal_id = proposal.id, "Proposal created");

    Ok((
        StatusCode::CREATED,
        Json(
            DataResponse::new(proposal)
                .with_message("Proposal published")
                .with_next("/proposals/"),
        ),
    ))
}

/// POST /proposals/{id}/exchange/
///
/// The proposal's author becomes `user1`, the acting user `user2`.
pub async fn start_exchange(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<(StatusCode, Json<DataResponse<Exchange>>)> {
    let proposal = ProposalRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Proposal",
            id,
        }))?;

    if proposal.user_id == user.user_id {
        return Err(AppError::Core(CoreError::Forbidden(
            "You cannot start an exchange on your own proposal".into(),
        )));
    }

    let exchange = ExchangeRepo::create(
        &state.pool,
        &CreateExchange {
            user1_id: proposal.user_id,
            user2_id: user.user_id,
            proposal_id: Some(proposal.id),
            request_id: None,
            format: proposal.format,
        },
    )
    .await?;

    tracing::info!(
        exchange_id = exchange.id,
        proposal_id = proposal.id,
        user1_id = exchange.user1_id,
        user2_id = exchange.user2_id,
        "Exchange created from proposal"
    );

    Ok((
        StatusCode::CREATED,
        Json(
            DataResponse::new(exchange)
                .with_message("Exchange started")
                .with_next("/exchanges/"),
        ),
    ))
}
