//! Handlers for the `/exchanges` resource.

use axum::extract::{Path, State};
use axum::Json;
use skillswap_core::error::CoreError;
use skillswap_core::types::DbId;
use skillswap_db::models::exchange::{Exchange, ExchangeDetail, UpdateExchangeStatus};
use skillswap_db::repositories::ExchangeRepo;
use skillswap_db::DbPool;

use crate::error::{AppError, AppResult};
use crate::extract::JsonBody;
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// Load an exchange the acting user takes part in.
///
/// 404 if it does not exist, 403 if `user_id` is not a participant.
pub(crate) async fn participant_exchange(
    pool: &DbPool,
    id: DbId,
    user_id: DbId,
) -> AppResult<Exchange> {
    let exchange = ExchangeRepo::find_by_id(pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Exchange",
            id,
        }))?;

    if !exchange.is_participant(user_id) {
        return Err(AppError::Core(CoreError::Forbidden(
            "You are not a participant in this exchange".into(),
        )));
    }
    Ok(exchange)
}

/// GET /exchanges/
///
/// Exchanges the acting user takes part in, newest first.
pub async fn list(
    State(state): State<AppState>,
    user: AuthUser,
) -> AppResult<Json<DataResponse<Vec<ExchangeDetail>>>> {
    let exchanges = ExchangeRepo::list_for_user(&state.pool, user.user_id).await?;
    Ok(Json(DataResponse::new(exchanges)))
}

/// GET /exchanges/{id}/
pub async fn get_by_id(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<ExchangeDetail>>> {
    participant_exchange(&state.pool, id, user.user_id).await?;
    let detail = ExchangeRepo::find_detail(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Exchange",
            id,
        }))?;
    Ok(Json(DataResponse::new(detail)))
}

/// POST /exchanges/{id}/status/
///
/// Only an `active` exchange may move, and only to `completed` or `rejected`.
pub async fn update_status(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<DbId>,
    JsonBody(input): JsonBody<UpdateExchangeStatus>,
) -> AppResult<Json<DataResponse<Exchange>>> {
    let exchange = participant_exchange(&state.pool, id, user.user_id).await?;

    if !exchange.status.can_transition_to(input.status) {
        return Err(AppError::Core(CoreError::Validation(format!(
            "Cannot change exchange status from {} to {}",
            exchange.status, input.status
        ))));
    }

    let updated = ExchangeRepo::update_status(&state.pool, id, exchange.status, input.status)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::Conflict(
                "Exchange status was changed by someone else".into(),
            ))
        })?;

    tracing::info!(
        exchange_id = id,
        user_id = user.user_id,
        status = %updated.status,
        "Exchange status changed"
    );

    Ok(Json(
        DataResponse::new(updated).with_message(format!("Exchange marked {}", input.status)),
    ))
}
