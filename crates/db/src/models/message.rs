//! Exchange chat messages.

use serde::Serialize;
use sqlx::FromRow;
use skillswap_core::types::{DbId, Timestamp};

/// A row from the `messages` table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct Message {
    pub id: DbId,
    pub exchange_id: DbId,
    pub sender_id: DbId,
    pub receiver_id: DbId,
    pub text: String,
    pub sent_at: Timestamp,
    pub is_read: bool,
}

#[derive(Debug)]
pub struct CreateMessage {
    pub exchange_id: DbId,
    pub sender_id: DbId,
    pub receiver_id: DbId,
    pub text: String,
}
