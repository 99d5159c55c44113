//! Repository for the `messages` table.

use chrono::Utc;
use sqlx::SqlitePool;
use skillswap_core::types::DbId;

use crate::models::message::{CreateMessage, Message};

const COLUMNS: &str = "id, exchange_id, sender_id, receiver_id, text, sent_at, is_read";

pub struct MessageRepo;

impl MessageRepo {
    pub async fn create(pool: &SqlitePool, input: &CreateMessage) -> Result<Message, sqlx::Error> {
        let query = format!(
            "INSERT INTO messages (exchange_id, sender_id, receiver_id, text, sent_at)
             VALUES (?, ?, ?, ?, ?)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Message>(&query)
            .bind(input.exchange_id)
            .bind(input.sender_id)
            .bind(input.receiver_id)
            .bind(&input.text)
            .bind(Utc::now())
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &SqlitePool, id: DbId) -> Result<Option<Message>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM messages WHERE id = ?");
        sqlx::query_as::<_, Message>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Messages in an exchange, oldest first.
    pub async fn list_for_exchange(
        pool: &SqlitePool,
        exchange_id: DbId,
    ) -> Result<Vec<Message>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM messages WHERE exchange_id = ? ORDER BY sent_at, id"
        );
        sqlx::query_as::<_, Message>(&query)
            .bind(exchange_id)
            .fetch_all(pool)
            .await
    }

    pub async fn mark_read(pool: &SqlitePool, id: DbId) -> Result<Option<Message>, sqlx::Error> {
        let query = format!("UPDATE messages SET is_read = 1 WHERE id = ? RETURNING {COLUMNS}");
        sqlx::query_as::<_, Message>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }
}
