//! Handlers for the `/events` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use skillswap_core::error::CoreError;
use skillswap_core::forms::{validate_event, EventInput};
use skillswap_core::types::DbId;
use skillswap_db::models::event::{CreateEvent, Event, EventParticipation, EventWithCount};
use skillswap_db::repositories::{CategoryRepo, EventRepo, ParticipationRepo};

use crate::error::{AppError, AppResult};
use crate::extract::JsonBody;
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /events/
pub async fn list(
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<EventWithCount>>>> {
    let events = EventRepo::list_with_count(&state.pool).await?;
    Ok(Json(DataResponse::new(events)))
}

/// GET /events/{id}/
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<EventWithCount>>> {
    let event = EventRepo::find_with_count(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Event", id }))?;
    Ok(Json(DataResponse::new(event)))
}

/// POST /events/create/
///
/// The organizer is always the acting user.
pub async fn create(
    State(state): State<AppState>,
    user: AuthUser,
    JsonBody(input): JsonBody<EventInput>,
) -> AppResult<(StatusCode, Json<DataResponse<Event>>)> {
    let category_ids = CategoryRepo::list_ids(&state.pool).await?;
    let valid = validate_event(&input, &category_ids).map_err(CoreError::InvalidFields)?;

    let event = EventRepo::create(
        &state.pool,
        &CreateEvent {
            title: valid.title,
            description: valid.description,
            organizer_id: user.user_id,
            event_date: valid.event_date,
            event_time: valid.event_time,
            location: valid.location,
            max_participants: valid.max_participants,
            category_id: valid.category_id,
        },
    )
    .await?;

    tracing::info!(event_id = event.id, organizer_id = user.user_id, "Event created");

    Ok((
        StatusCode::CREATED,
        Json(
            DataResponse::new(event)
                .with_message("Event created")
                .with_next("/events/"),
        ),
    ))
}

/// POST /events/{id}/join/
///
/// Registers the acting user as `pending`. Joining twice is a conflict;
/// joining a full event is a validation error.
pub async fn join(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<(StatusCode, Json<DataResponse<EventParticipation>>)> {
    EventRepo::find_with_count(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Event", id }))?;

    if ParticipationRepo::find(&state.pool, user.user_id, id)
        .await?
        .is_some()
    {
        return Err(AppError::Core(CoreError::Conflict(
            "You have already joined this event".into(),
        )));
    }

    let participation = ParticipationRepo::join(&state.pool, user.user_id, id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::Validation("This event is full".into())))?;

    tracing::info!(event_id = id, user_id = user.user_id, "Joined event");

    Ok((
        StatusCode::CREATED,
        Json(DataResponse::new(participation).with_message("Registration pending confirmation")),
    ))
}
