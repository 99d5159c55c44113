//! Learning-request entity model, DTOs and joined views.

use serde::Serialize;
use sqlx::FromRow;
use skillswap_core::status::SkillLevel;
use skillswap_core::types::{DbId, Timestamp};

use super::skill::SkillSummary;
use super::user::UserSummary;

/// A row from the `requests` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Request {
    pub id: DbId,
    pub user_id: DbId,
    pub skill_wanted_id: DbId,
    pub skill_offered_id: DbId,
    pub description: Option<String>,
    pub created_at: Timestamp,
}

#[derive(Debug)]
pub struct CreateRequest {
    pub user_id: DbId,
    pub skill_wanted_id: DbId,
    pub skill_offered_id: DbId,
    pub description: Option<String>,
}

/// A request with its author and both skills joined in.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RequestDetail {
    pub id: DbId,
    pub user: UserSummary,
    pub skill_wanted: SkillSummary,
    pub skill_offered: SkillSummary,
    pub description: Option<String>,
    pub created_at: Timestamp,
}

#[derive(Debug, FromRow)]
pub(crate) struct RequestDetailRow {
    pub id: DbId,
    pub user_id: DbId,
    pub user_email: String,
    pub user_full_name: String,
    pub skill_wanted_id: DbId,
    pub skill_wanted_name: String,
    pub skill_wanted_level: SkillLevel,
    pub skill_offered_id: DbId,
    pub skill_offered_name: String,
    pub skill_offered_level: SkillLevel,
    pub description: Option<String>,
    pub created_at: Timestamp,
}

impl From<RequestDetailRow> for RequestDetail {
    fn from(row: RequestDetailRow) -> Self {
        Self {
            id: row.id,
            user: UserSummary {
                id: row.user_id,
                email: row.user_email,
                full_name: row.user_full_name,
            },
            skill_wanted: SkillSummary {
                id: row.skill_wanted_id,
                name: row.skill_wanted_name,
                level: row.skill_wanted_level,
            },
            skill_offered: SkillSummary {
                id: row.skill_offered_id,
                name: row.skill_offered_name,
                level: row.skill_offered_level,
            },
            description: row.description,
            created_at: row.created_at,
        }
    }
}
