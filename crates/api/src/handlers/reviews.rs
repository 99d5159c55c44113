//! Handlers for exchange reviews.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use skillswap_core::error::CoreError;
use skillswap_core::forms::{validate_review, ReviewInput};
use skillswap_core::types::DbId;
use skillswap_db::models::review::{CreateReview, Review, ReviewDetail};
use skillswap_db::repositories::{ReviewRepo, UserRepo};

use super::exchanges::participant_exchange;
use crate::error::{AppError, AppResult};
use crate::extract::JsonBody;
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// POST /exchanges/{id}/reviews/
///
/// The acting user reviews the other participant. One review per exchange
/// per author.
pub async fn create(
    State(state): State<AppState>,
    user: AuthUser,
    Path(exchange_id): Path<DbId>,
    JsonBody(input): JsonBody<ReviewInput>,
) -> AppResult<(StatusCode, Json<DataResponse<Review>>)> {
    let exchange = participant_exchange(&state.pool, exchange_id, user.user_id).await?;
    let valid = validate_review(&input).map_err(CoreError::InvalidFields)?;

    let reviewed_user_id = exchange
        .counterpart(user.user_id)
        .ok_or_else(|| AppError::InternalError("participant without counterpart".into()))?;

    if ReviewRepo::find_by_exchange_and_reviewer(&state.pool, exchange_id, user.user_id)
        .await?
        .is_some()
    {
        return Err(AppError::Core(CoreError::Conflict(
            "You have already reviewed this exchange".into(),
        )));
    }

    let review = ReviewRepo::create(
        &state.pool,
        &CreateReview {
            reviewer_id: user.user_id,
            reviewed_user_id,
            exchange_id,
            text: valid.text,
            rating: valid.rating,
        },
    )
    .await?;

    tracing::info!(
        exchange_id,
        reviewer_id = user.user_id,
        reviewed_user_id,
        rating = review.rating,
        "Review created"
    );

    Ok((
        StatusCode::CREATED,
        Json(DataResponse::new(review).with_message("Thanks for your review")),
    ))
}

/// GET /users/{id}/reviews/
pub async fn list_for_user(
    State(state): State<AppState>,
    Path(user_id): Path<DbId>,
) -> AppResult<Json<DataResponse<Vec<ReviewDetail>>>> {
    UserRepo::find_by_id(&state.pool, user_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "User",
            id: user_id,
        }))?;
    let reviews = ReviewRepo::list_received(&state.pool, user_id).await?;
    Ok(Json(DataResponse::new(reviews)))
}
