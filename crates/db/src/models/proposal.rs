//! Proposal entity model, DTOs and joined views.

use serde::Serialize;
use sqlx::FromRow;
use skillswap_core::status::{ExchangeFormat, SkillLevel};
use skillswap_core::types::{DbId, Timestamp};

use super::skill::SkillSummary;
use super::user::UserSummary;

/// A row from the `proposals` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Proposal {
    pub id: DbId,
    pub user_id: DbId,
    pub skill_offered_id: DbId,
    pub skill_wanted_id: DbId,
    pub description: Option<String>,
    pub format: ExchangeFormat,
    pub deadlines: Option<String>,
    pub created_at: Timestamp,
}

/// DTO for creating a proposal. `user_id` is always the acting user.
#[derive(Debug)]
pub struct CreateProposal {
    pub user_id: DbId,
    pub skill_offered_id: DbId,
    pub skill_wanted_id: DbId,
    pub description: Option<String>,
    pub format: ExchangeFormat,
    pub deadlines: Option<String>,
}

/// A proposal with its author and both skills joined in.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProposalDetail {
    pub id: DbId,
    pub user: UserSummary,
    pub skill_offered: SkillSummary,
    pub skill_wanted: SkillSummary,
    pub description: Option<String>,
    pub format: ExchangeFormat,
    pub deadlines: Option<String>,
    pub created_at: Timestamp,
}

#[derive(Debug, FromRow)]
pub(crate) struct ProposalDetailRow {
    pub id: DbId,
    pub user_id: DbId,
    pub user_email: String,
    pub user_full_name: String,
    pub skill_offered_id: DbId,
    pub skill_offered_name: String,
    pub skill_offered_level: SkillLevel,
    pub skill_wanted_id: DbId,
    pub skill_wanted_name: String,
    pub skill_wanted_level: SkillLevel,
    pub description: Option<String>,
    pub format: ExchangeFormat,
    pub deadlines: Option<String>,
    pub created_at: Timestamp,
}

impl From<ProposalDetailRow> for ProposalDetail {
    fn from(row: ProposalDetailRow) -> Self {
        Self {
            id: row.id,
            user: UserSummary {
                id: row.user_id,
                email: row.user_email,
                full_name: row.user_full_name,
            },
            skill_offered: SkillSummary {
                id: row.skill_offered_id,
                name: row.skill_offered_name,
                level: row.skill_offered_level,
            },
            skill_wanted: SkillSummary {
                id: row.skill_wanted_id,
                name: row.skill_wanted_name,
                level: row.skill_wanted_level,
            },
            description: row.description,
            format: row.format,
            deadlines: row.deadlines,
            created_at: row.created_at,
        }
    }
}
