//! Repository for the `proposals` table.

use chrono::Utc;
use sqlx::SqlitePool;
use skillswap_core::types::DbId;

use crate::models::proposal::{CreateProposal, Proposal, ProposalDetail, ProposalDetailRow};

const COLUMNS: &str = "id, user_id, skill_offered_id, skill_wanted_id, description, \
                       format, deadlines, created_at";

/// Proposal joined with its author and both skills.
const DETAIL: &str = "SELECT p.id, p.user_id, u.email AS user_email, u.full_name AS user_full_name, \
                             p.skill_offered_id, so.name AS skill_offered_name, \
                             so.level AS skill_offered_level, \
                             p.skill_wanted_id, sw.name AS skill_wanted_name, \
                             sw.level AS skill_wanted_level, \
                             p.description, p.format, p.deadlines, p.created_at \
                      FROM proposals p \
                      JOIN users u ON u.id = p.user_id \
                      JOIN skills so ON so.id = p.skill_offered_id \
                      JOIN skills sw ON sw.id = p.skill_wanted_id";

pub struct ProposalRepo;

impl ProposalRepo {
    pub async fn create(pool: &SqlitePool, input: &CreateProposal) -> Result<Proposal, sqlx::Error> {
        let query = format!(
            "INSERT INTO proposals
                (user_id, skill_offered_id, skill_wanted_id, description, format, deadlines, created_at)
             VALUES (?, ?, ?, ?, ?, ?, ?)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Proposal>(&query)
            .bind(input.user_id)
            .bind(input.skill_offered_id)
            .bind(input.skill_wanted_id)
            .bind(&input.description)
            .bind(input.format)
            .bind(&input.deadlines)
            .bind(Utc::now())
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &SqlitePool, id: DbId) -> Result<Option<Proposal>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM proposals WHERE id = ?");
        sqlx::query_as::<_, Proposal>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Every proposal with author and skills, ordered by id.
    pub async fn list_detailed(pool: &SqlitePool) -> Result<Vec<ProposalDetail>, sqlx::Error> {
        let query = format!("{DETAIL} ORDER BY p.id");
        let rows = sqlx::query_as::<_, ProposalDetailRow>(&query)
            .fetch_all(pool)
            .await?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    /// Proposals authored by `user_id`, with skills, ordered by id.
    pub async fn list_for_user(
        pool: &SqlitePool,
        user_id: DbId,
    ) -> Result<Vec<ProposalDetail>, sqlx::Error> {
        let query = format!("{DETAIL} WHERE p.user_id = ? ORDER BY p.id");
        let rows = sqlx::query_as::<_, ProposalDetailRow>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await?;
        Ok(rows.into_iter().map(Into::into).collect())
    }
}
