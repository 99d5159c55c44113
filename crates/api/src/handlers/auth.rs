//! Handlers for registration, login and logout.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use chrono::Utc;
use serde::Serialize;
use skillswap_core::error::CoreError;
use skillswap_core::forms::{
    normalize_email, validate_login, validate_registration, LoginInput, RegistrationInput,
};
use skillswap_core::types::DbId;
use skillswap_db::models::session::CreateSession;
use skillswap_db::models::user::{CreateUser, UserResponse};
use skillswap_db::repositories::{SessionRepo, UserRepo};

use crate::auth::jwt::{generate_access_token, generate_session_token};
use crate::auth::password::{hash_password, verify_password};
use crate::error::{AppError, AppResult};
use crate::extract::JsonBody;
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

const INVALID_CREDENTIALS: &str = "Invalid email or password";

/// Successful authentication payload returned by register and login.
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub access_token: String,
    pub token_type: &'static str,
    /// Seconds until the token and its session expire.
    pub expires_in: i64,
    pub user: UserResponse,
}

/// POST /register/
///
/// Creates the account and logs it in immediately.
pub async fn register(
    State(state): State<AppState>,
    JsonBody(input): JsonBody<RegistrationInput>,
) -> AppResult<(StatusCode, Json<DataResponse<AuthResponse>>)> {
    let email_taken = match input.email.as_deref().map(str::trim) {
        Some(raw) if !raw.is_empty() => {
            UserRepo::email_exists(&state.pool, &normalize_email(raw)).await?
        }
        _ => false,
    };
    let valid = validate_registration(&input, email_taken).map_err(CoreError::InvalidFields)?;

    let password_hash = hash_password(&valid.password)
        .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;

    let user = UserRepo::create(
        &state.pool,
        &CreateUser {
            email: valid.email,
            full_name: valid.full_name,
            password_hash,
        },
    )
    .await?;

    tracing::info!(user_id = user.id, email = %user.email, "User registered");

    let response = open_session(&state, user.id, user.into()).await?;
    Ok((
        StatusCode::CREATED,
        Json(
            DataResponse::new(response)
                .with_message("Registration successful")
                .with_next("/profile/"),
        ),
    ))
}

/// POST /login/
///
/// An inactive account is only reported once the password has verified.
pub async fn login(
    State(state): State<AppState>,
    JsonBody(input): JsonBody<LoginInput>,
) -> AppResult<Json<DataResponse<AuthResponse>>> {
    let (email, password) = validate_login(&input).map_err(CoreError::InvalidFields)?;

    let user = UserRepo::find_by_email(&state.pool, &email)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::Unauthorized(INVALID_CREDENTIALS.into())))?;

    let password_valid = verify_password(&password, &user.password_hash)
        .map_err(|e| AppError::InternalError(format!("Password verification error: {e}")))?;
    if !password_valid {
        tracing::debug!(user_id = user.id, "Login failed: wrong password");
        return Err(AppError::Core(CoreError::Unauthorized(
            INVALID_CREDENTIALS.into(),
        )));
    }

    if !user.is_active {
        return Err(AppError::Core(CoreError::Forbidden(
            "Account is inactive".into(),
        )));
    }

    tracing::info!(user_id = user.id, "User logged in");

    let response = open_session(&state, user.id, user.into()).await?;
    Ok(Json(
        DataResponse::new(response).with_next("/profile/"),
    ))
}

/// POST /logout/
///
/// Revokes the session the request was authenticated with.
pub async fn logout(
    State(state): State<AppState>,
    user: AuthUser,
) -> AppResult<Json<DataResponse<()>>> {
    SessionRepo::revoke(&state.pool, user.session_id).await?;
    tracing::info!(user_id = user.user_id, session_id = user.session_id, "User logged out");
    Ok(Json(
        DataResponse::new(())
            .with_message("You have been logged out")
            .with_next("/login/"),
    ))
}

/// Persist a session row and sign an access token bound to it.
async fn open_session(
    state: &AppState,
    user_id: DbId,
    user: UserResponse,
) -> AppResult<AuthResponse> {
    let jwt = &state.config.jwt;
    let token = generate_session_token();

    let session = SessionRepo::create(
        &state.pool,
        &CreateSession {
            user_id,
            token_hash: token.hash,
            expires_at: Utc::now() + chrono::Duration::days(jwt.session_expiry_days),
        },
    )
    .await?;

    let access_token =
        generate_access_token(user_id, session.id, &token.jti, session.expires_at, jwt)
            .map_err(|e| AppError::InternalError(format!("Token generation error: {e}")))?;

    Ok(AuthResponse {
        access_token,
        token_type: "Bearer",
        expires_in: (session.expires_at - Utc::now()).num_seconds(),
        user,
    })
}
