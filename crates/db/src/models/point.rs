//! Point ledger models. The balance itself is read as a scalar.

use serde::Serialize;
use sqlx::FromRow;
use skillswap_core::status::PointReason;
use skillswap_core::types::{DbId, Timestamp};

/// A row from the `point_transactions` ledger.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct PointTransaction {
    pub id: DbId,
    pub user_id: DbId,
    pub amount: i64,
    pub reason: PointReason,
    pub exchange_id: Option<DbId>,
    pub created_at: Timestamp,
}

#[derive(Debug)]
pub struct CreatePointTransaction {
    pub user_id: DbId,
    pub amount: i64,
    pub reason: PointReason,
    pub exchange_id: Option<DbId>,
}
