//! Review entity model, DTOs and joined views.

use serde::Serialize;
use sqlx::FromRow;
use skillswap_core::types::{DbId, Timestamp};

use super::user::UserSummary;

/// A row from the `reviews` table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct Review {
    pub id: DbId,
    pub reviewer_id: DbId,
    pub reviewed_user_id: DbId,
    pub exchange_id: DbId,
    pub text: Option<String>,
    pub rating: i16,
    pub created_at: Timestamp,
}

#[derive(Debug)]
pub struct CreateReview {
    pub reviewer_id: DbId,
    pub reviewed_user_id: DbId,
    pub exchange_id: DbId,
    pub text: Option<String>,
    pub rating: i16,
}

/// A review with its author joined in.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReviewDetail {
    pub id: DbId,
    pub reviewer: UserSummary,
    pub exchange_id: DbId,
    pub text: Option<String>,
    pub rating: i16,
    pub created_at: Timestamp,
}

#[derive(Debug, FromRow)]
pub(crate) struct ReviewDetailRow {
    pub id: DbId,
    pub reviewer_id: DbId,
    pub reviewer_email: String,
    pub reviewer_full_name: String,
    pub exchange_id: DbId,
    pub text: Option<String>,
    pub rating: i16,
    pub created_at: Timestamp,
}

impl From<ReviewDetailRow> for ReviewDetail {
    fn from(row: ReviewDetailRow) -> Self {
        Self {
            id: row.id,
            reviewer: UserSummary {
                id: row.reviewer_id,
                email: row.reviewer_email,
                full_name: row.reviewer_full_name,
            },
            exchange_id: row.exchange_id,
            text: row.text,
            rating: row.rating,
            created_at: row.created_at,
        }
    }
}
