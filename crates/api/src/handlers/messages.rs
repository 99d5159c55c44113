//! Handlers for chat messages inside an exchange.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use skillswap_core::error::CoreError;
use skillswap_core::forms::{validate_message, MessageInput};
use skillswap_core::types::DbId;
use skillswap_db::models::message::{CreateMessage, Message};
use skillswap_db::repositories::MessageRepo;

use super::exchanges::participant_exchange;
use crate::error::{AppError, AppResult};
use crate::extract::JsonBody;
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /exchanges/{id}/messages/
///
/// Oldest first.
pub async fn list(
    State(state): State<AppState>,
    user: AuthUser,
    Path(exchange_id): Path<DbId>,
) -> AppResult<Json<DataResponse<Vec<Message>>>> {
    participant_exchange(&state.pool, exchange_id, user.user_id).await?;
    let messages = MessageRepo::list_for_exchange(&state.pool, exchange_id).await?;
    Ok(Json(DataResponse::new(messages)))
}

/// POST /exchanges/{id}/messages/
///
/// The receiver is always the other participant.
pub async fn send(
    State(state): State<AppState>,
    user: AuthUser,
    Path(exchange_id): Path<DbId>,
    JsonBody(input): JsonBody<MessageInput>,
) -> AppResult<(StatusCode, Json<DataResponse<Message>>)> {
    let exchange = participant_exchange(&state.pool, exchange_id, user.user_id).await?;
    let text = validate_message(&input).map_err(CoreError::InvalidFields)?;

    let receiver_id = exchange
        .counterpart(user.user_id)
        .ok_or_else(|| AppError::InternalError("participant without counterpart".into()))?;

    let message = MessageRepo::create(
        &state.pool,
        &CreateMessage {
            exchange_id,
            sender_id: user.user_id,
            receiver_id,
            text,
        },
    )
    .await?;

    tracing::debug!(exchange_id, message_id = message.id, "Message sent");
    Ok((StatusCode::CREATED, Json(DataResponse::new(message))))
}

/// POST /messages/{id}/read/
pub async fn mark_read(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<Message>>> {
    let not_found = || {
        AppError::Core(CoreError::NotFound {
            entity: "Message",
            id,
        })
    };

    let message = MessageRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(not_found)?;

    if message.receiver_id != user.user_id {
        return Err(AppError::Core(CoreError::Forbidden(
            "Only the receiver can mark a message as read".into(),
        )));
    }

    let message = MessageRepo::mark_read(&state.pool, id)
        .await?
        .ok_or_else(not_found)?;
    Ok(Json(DataResponse::new(message)))
}
