//! User entity model and DTOs.

use serde::Serialize;
use sqlx::FromRow;
use skillswap_core::types::{DbId, Rating, Timestamp};

/// Full user row from the `users` table.
///
/// Contains the password hash -- NEVER serialize this to API responses directly.
/// Use [`UserResponse`] for external-facing output.
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: DbId,
    pub email: String,
    pub full_name: String,
    pub phone: Option<String>,
    pub photo_url: Option<String>,
    pub rating: Rating,
    pub city: Option<String>,
    pub password_hash: String,
    pub is_active: bool,
    pub registration_date: Timestamp,
}

/// Safe user representation for API responses (no password hash).
#[derive(Debug, Clone, Serialize)]
pub struct UserResponse {
    pub id: DbId,
    pub email: String,
    pub full_name: String,
    pub phone: Option<String>,
    pub photo_url: Option<String>,
    pub rating: Rating,
    pub city: Option<String>,
    pub registration_date: Timestamp,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            email: user.email,
            full_name: user.full_name,
            phone: user.phone,
            photo_url: user.photo_url,
            rating: user.rating,
            city: user.city,
            registration_date: user.registration_date,
        }
    }
}

/// The few user columns embedded in joined views.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserSummary {
    pub id: DbId,
    pub email: String,
    pub full_name: String,
}

/// DTO for creating a new user. The password must already be hashed.
#[derive(Debug)]
pub struct CreateUser {
    pub email: String,
    pub full_name: String,
    pub password_hash: String,
}
