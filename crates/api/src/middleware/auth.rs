//! Session-backed authentication extractor for Axum handlers.

use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;
use chrono::Utc;
use skillswap_core::types::DbId;
use skillswap_db::repositories::{SessionRepo, UserRepo};

use crate::auth::jwt::{hash_token, validate_token};
use crate::error::AppError;
use crate::state::AppState;

/// The acting user, extracted from `Authorization: Bearer <token>`.
///
/// The token must verify, its session must be neither revoked nor expired,
/// and the user must still be active. Any failure rejects with
/// [`AppError::LoginRequired`], which redirects to the login view.
///
/// ```ignore
/// async fn my_handler(user: AuthUser) -> AppResult<Json<()>> {
///     tracing::info!(user_id = user.user_id, "handling request");
///     Ok(Json(()))
/// }
/// ```
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub user_id: DbId,
    pub session_id: DbId,
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.strip_prefix("Bearer "))
            .ok_or(AppError::LoginRequired)?;

        let claims =
            validate_token(token, &state.config.jwt).map_err(|_| AppError::LoginRequired)?;

        let session = SessionRepo::find_by_id(&state.pool, claims.sid)
            .await?
            .filter(|s| s.user_id == claims.sub && s.token_hash == hash_token(&claims.jti))
            .ok_or(AppError::LoginRequired)?;

        if !session.is_live(Utc::now()) {
            return Err(AppError::LoginRequired);
        }

        let active = UserRepo::find_by_id(&state.pool, claims.sub)
            .await?
            .is_some_and(|u| u.is_active);
        if !active {
            return Err(AppError::LoginRequired);
        }

        Ok(AuthUser {
            user_id: claims.sub,
            session_id: session.id,
        })
    }
}
