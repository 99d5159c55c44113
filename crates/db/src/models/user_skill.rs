//! Ownership link between a user and a skill.

use serde::Serialize;
use sqlx::FromRow;
use skillswap_core::types::DbId;

/// A row from `user_skills`. `(user_id, skill_id)` is unique.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct UserSkill {
    pub id: DbId,
    pub user_id: DbId,
    pub skill_id: DbId,
}
