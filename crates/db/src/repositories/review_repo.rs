//! Repository for the `reviews` table.

use chrono::Utc;
use sqlx::SqlitePool;
use skillswap_core::types::DbId;

use crate::models::review::{CreateReview, Review, ReviewDetail, ReviewDetailRow};

const COLUMNS: &str = "id, reviewer_id, reviewed_user_id, exchange_id, text, rating, created_at";

pub struct ReviewRepo;

impl ReviewRepo {
    /// Insert a review.
    ///
    /// Storage rejects self-reviews (`check_reviewer_not_self`), ratings
    /// outside 1..=5, and a second review by the same author on the same
    /// exchange (`uq_reviews_exchange_reviewer`).
    pub async fn create(pool: &SqlitePool, input: &CreateReview) -> Result<Review, sqlx::Error> {
        let query = format!(
            "INSERT INTO reviews (reviewer_id, reviewed_user_id, exchange_id, text, rating, created_at)
             VALUES (?, ?, ?, ?, ?, ?)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Review>(&query)
            .bind(input.reviewer_id)
            .bind(input.reviewed_user_id)
            .bind(input.exchange_id)
            .bind(&input.text)
            .bind(input.rating)
            .bind(Utc::now())
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_exchange_and_reviewer(
        pool: &SqlitePool,
        exchange_id: DbId,
        reviewer_id: DbId,
    ) -> Result<Option<Review>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM reviews WHERE exchange_id = ? AND reviewer_id = ?");
        sqlx::query_as::<_, Review>(&query)
            .bind(exchange_id)
            .bind(reviewer_id)
            .fetch_optional(pool)
            .await
    }

    /// Reviews received by `user_id`, newest first, with the reviewer.
    pub async fn list_received(
        pool: &SqlitePool,
        user_id: DbId,
    ) -> Result<Vec<ReviewDetail>, sqlx::Error> {
        let rows = sqlx::query_as::<_, ReviewDetailRow>(
            "SELECT r.id, r.reviewer_id, u.email AS reviewer_email,
                    u.full_name AS reviewer_full_name,
                    r.exchange_id, r.text, r.rating, r.created_at
             FROM reviews r
             JOIN users u ON u.id = r.reviewer_id
             WHERE r.reviewed_user_id = ?
             ORDER BY r.created_at DESC, r.id DESC",
        )
        .bind(user_id)
        .fetch_all(pool)
        .await?;
        Ok(rows.into_iter().map(Into::into).collect())
    }
}
