//! Handlers for the `/requests` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use skillswap_core::error::CoreError;
use skillswap_core::forms::{validate_request, RequestInput};
use skillswap_core::status::ExchangeFormat;
use skillswap_core::types::DbId;
use skillswap_db::models::exchange::{CreateExchange, Exchange};
use skillswap_db::models::request::{CreateRequest, Request, RequestDetail};
use skillswap_db::repositories::{ExchangeRepo, RequestRepo};

use super::proposals::skill_choices;
use crate::error::{AppError, AppResult};
use crate::extract::JsonBody;
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /requests/
pub async fn list(
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<RequestDetail>>>> {
    let requests = RequestRepo::list_detailed(&state.pool).await?;
    Ok(Json(DataResponse::new(requests)))
}

/// POST /requests/create/
pub async fn create(
    State(state): State<AppState>,
    user: AuthUser,
    JsonBody(input): JsonBody<RequestInput>,
) -> AppResult<(StatusCode, Json<DataResponse<Request>>)> {
    let choices = skill_choices(&state.pool, user.user_id).await?;
    let valid = validate_request(&input, &choices).map_err(CoreError::InvalidFields)?;

    let request = RequestRepo::create(
        &state.pool,
        &CreateRequest {
            user_id: user.user_id,
            skill_wanted_id: valid.skill_wanted,
            skill_offered_id: valid.skill_offered,
            description: valid.description,
        },
    )
    .await?;

    tracing::info!(user_id = user.user_id, request_id = request.id, "Request created");

    Ok((
        StatusCode::CREATED,
        Json(
            DataResponse::new(request)
                .with_message("Request published")
                .with_next("/requests/"),
        ),
    ))
}

/// POST /requests/{id}/exchange/
///
/// The request's author becomes `user1`, the acting user `user2`.
pub async fn start_exchange(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<(StatusCode, Json<DataResponse<Exchange>>)> {
    let request = RequestRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Request",
            id,
        }))?;

    if request.user_id == user.user_id {
        return Err(AppError::Core(CoreError::Forbidden(
            "You cannot start an exchange on your own request".into(),
        )));
    }

    let exchange = ExchangeRepo::create(
        &state.pool,
        &CreateExchange {
            user1_id: request.user_id,
            user2_id: user.user_id,
            proposal_id: None,
            request_id: Some(request.id),
            format: ExchangeFormat::default(),
        },
    )
    .await?;

    tracing::info!(
        exchange_id = exchange.id,
        request_id = request.id,
        "Exchange created from request"
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
