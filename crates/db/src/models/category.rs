//! Category reference data.

use serde::Serialize;
use sqlx::FromRow;
use skillswap_core::types::DbId;

#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct Category {
    pub id: DbId,
    pub name: String,
}
