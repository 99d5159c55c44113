//! Repository for the `points` balance and `point_transactions` ledger.

use chrono::Utc;
use sqlx::SqlitePool;
use skillswap_core::error::CoreError;
use skillswap_core::points::apply_delta;
use skillswap_core::types::DbId;

use crate::models::point::{CreatePointTransaction, PointTransaction};

const TX_COLUMNS: &str = "id, user_id, amount, reason, exchange_id, created_at";

/// Failure modes of [`PointRepo::record_transaction`].
#[derive(Debug, thiserror::Error)]
pub enum LedgerError {
    /// Applying the amount would take the balance below zero.
    #[error("insufficient points: balance {balance}, change {amount}")]
    InsufficientBalance { balance: i64, amount: i64 },

    #[error(transparent)]
    Core(#[from] CoreError),

    #[error(transparent)]
    Database(#[from] sqlx::Error),
}

pub struct PointRepo;

impl PointRepo {
    /// Current balance; `0` when the user has no `points` row yet.
    pub async fn balance(pool: &SqlitePool, user_id: DbId) -> Result<i64, sqlx::Error> {
        let balance = sqlx::query_scalar::<_, i64>("SELECT balance FROM points WHERE user_id = ?")
            .bind(user_id)
            .fetch_optional(pool)
            .await?;
        Ok(balance.unwrap_or(0))
    }

    /// Ledger entries for `user_id`, newest first.
    pub async fn list_transactions(
        pool: &SqlitePool,
        user_id: DbId,
    ) -> Result<Vec<PointTransaction>, sqlx::Error> {
        let query = format!(
            "SELECT {TX_COLUMNS} FROM point_transactions
             WHERE user_id = ?
             ORDER BY created_at DESC, id DESC"
        );
        sqlx::query_as::<_, PointTransaction>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }

    /// Append a ledger entry and apply its amount to the balance.
    ///
    /// Runs in one transaction. The balance update is conditional on the
    /// result staying non-negative, so concurrent debits cannot overdraw.
    /// On [`LedgerError::InsufficientBalance`] nothing is written.
    pub async fn record_transaction(
        pool: &SqlitePool,
        input: &CreatePointTransaction,
    ) -> Result<PointTransaction, LedgerError> {
        let mut tx = pool.begin().await?;

        sqlx::query(
            "INSERT INTO points (user_id, balance) VALUES (?, 0)
             ON CONFLICT (user_id) DO NOTHING",
        )
        .bind(input.user_id)
        .execute(&mut *tx)
        .await?;

        let balance = sqlx::query_scalar::<_, i64>("SELECT balance FROM points WHERE user_id = ?")
            .bind(input.user_id)
            .fetch_one(&mut *tx)
            .await?;

        match apply_delta(balance, input.amount) {
            Ok(_) => {}
            Err(CoreError::Conflict(_)) => {
                tx.rollback().await?;
                return Err(LedgerError::InsufficientBalance {
                    balance,
                    amount: input.amount,
                });
            }
            Err(e) => {
                tx.rollback().await?;
                return Err(e.into());
            }
        }

        let updated = sqlx::query(
            "UPDATE points SET balance = balance + ?
             WHERE user_id = ? AND balance + ? >= 0",
        )
        .bind(input.amount)
        .bind(input.user_id)
        .bind(input.amount)
        .execute(&mut *tx)
        .await?;

        if updated.rows_affected() == 0 {
            tx.rollback().await?;
            return Err(LedgerError::InsufficientBalance {
                balance,
                amount: input.amount,
            });
        }

        let query = format!(
            "INSERT INTO point_transactions (user_id, amount, reason, exchange_id, created_at)
             VALUES (?, ?, ?, ?, ?)
             RETURNING {TX_COLUMNS}"
        );
        let entry = sqlx::query_as::<_, PointTransaction>(&query)
            .bind(input.user_id)
            .bind(input.amount)
            .bind(input.reason)
            .bind(input.exchange_id)
            .bind(Utc::now())
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;

        tracing::debug!(
            user_id = input.user_id,
            amount = input.amount,
            reason = %input.reason,
            "Point transaction recorded"
        );
        Ok(entry)
    }
}

impl From<LedgerError> for CoreError {
    fn from(err: LedgerError) -> Self {
        match err {
            LedgerError::InsufficientBalance { .. } => CoreError::Conflict(err.to_string()),
            LedgerError::Core(core) => core,
            LedgerError::Database(db) => CoreError::Internal(db.to_string()),
        }
    }
}
