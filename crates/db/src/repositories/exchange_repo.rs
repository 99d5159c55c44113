//! Repository for the `exchanges` table.

use chrono::Utc;
use sqlx::SqlitePool;
use skillswap_core::status::ExchangeStatus;
use skillswap_core::types::DbId;

use crate::models::exchange::{CreateExchange, Exchange, ExchangeDetail, ExchangeDetailRow};

const COLUMNS: &str = "id, user1_id, user2_id, proposal_id, request_id, status, start_date, \
                       end_date, format, location, notes, created_at";

/// Exchange joined with both users and its originating proposal/request.
const DETAIL: &str = "SELECT e.id, \
                             e.user1_id, u1.email AS user1_email, u1.full_name AS user1_full_name, \
                             e.user2_id, u2.email AS user2_email, u2.full_name AS user2_full_name, \
                             e.proposal_id, p.description AS proposal_description, \
                             p.format AS proposal_format, \
                             e.request_id, r.description AS request_description, \
                             e.status, e.start_date, e.end_date, e.format, e.location, e.notes, \
                             e.created_at \
                      FROM exchanges e \
                      JOIN users u1 ON u1.id = e.user1_id \
                      JOIN users u2 ON u2.id = e.user2_id \
                      LEFT JOIN proposals p ON p.id = e.proposal_id \
                      LEFT JOIN requests r ON r.id = e.request_id";

pub struct ExchangeRepo;

impl ExchangeRepo {
    /// Insert a new exchange in status `active`.
    ///
    /// `user1_id == user2_id` fails the `check_user1_not_equal_user2`
    /// constraint.
    pub async fn create(pool: &SqlitePool, input: &CreateExchange) -> Result<Exchange, sqlx::Error> {
        let query = format!(
            "INSERT INTO exchanges (user1_id, user2_id, proposal_id, request_id, status, format, created_at)
             VALUES (?, ?, ?, ?, ?, ?, ?)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Exchange>(&query)
            .bind(input.user1_id)
            .bind(input.user2_id)
            .bind(input.proposal_id)
            .bind(input.request_id)
            .bind(ExchangeStatus::Active)
            .bind(input.format)
            .bind(Utc::now())
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &SqlitePool, id: DbId) -> Result<Option<Exchange>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM exchanges WHERE id = ?");
        sqlx::query_as::<_, Exchange>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn find_detail(pool: &SqlitePool, id: DbId) -> Result<Option<ExchangeDetail>, sqlx::Error> {
        let query = format!("{DETAIL} WHERE e.id = ?");
        let row = sqlx::query_as::<_, ExchangeDetailRow>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await?;
        Ok(row.map(Into::into))
    }

    /// Exchanges where `user_id` is either participant, newest first.
    pub async fn list_for_user(
        pool: &SqlitePool,
        user_id: DbId,
    ) -> Result<Vec<ExchangeDetail>, sqlx::Error> {
        let query = format!(
            "{DETAIL}
             WHERE e.user1_id = ? OR e.user2_id = ?
             ORDER BY e.created_at DESC, e.id DESC"
        );
        let rows = sqlx::query_as::<_, ExchangeDetailRow>(&query)
            .bind(user_id)
            .bind(user_id)
            .fetch_all(pool)
            .await?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    /// Move an exchange from `from` to `to`.
    ///
    /// Returns `None` if the exchange is no longer in status `from`, so two
    /// racing updates cannot both apply.
    pub async fn update_status(
        pool: &SqlitePool,
        id: DbId,
        from: ExchangeStatus,
        to: ExchangeStatus,
    ) -> Result<Option<Exchange>, sqlx::Error> {
        let query = format!(
            "UPDATE exchanges SET status = ? WHERE id = ? AND status = ? RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Exchange>(&query)
            .bind(to)
            .bind(id)
            .bind(from)
            .fetch_optional(pool)
            .await
    }
}
