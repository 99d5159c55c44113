//! Repository for the `user_skills` link table.

use sqlx::SqlitePool;
use skillswap_core::types::DbId;

use crate::models::user_skill::UserSkill;

const COLUMNS: &str = "id, user_id, skill_id";

pub struct UserSkillRepo;

impl UserSkillRepo {
    /// Link a skill to a user. A second link for the same pair violates
    /// `uq_user_skills_user_skill`.
    pub async fn create(
        pool: &SqlitePool,
        user_id: DbId,
        skill_id: DbId,
    ) -> Result<UserSkill, sqlx::Error> {
        let query = format!(
            "INSERT INTO user_skills (user_id, skill_id) VALUES (?, ?) RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, UserSkill>(&query)
            .bind(user_id)
            .bind(skill_id)
            .fetch_one(pool)
            .await
    }

    /// Return the existing link for the pair, creating it if absent.
    ///
    /// Calling this any number of times leaves exactly one row.
    pub async fn get_or_create(
        pool: &SqlitePool,
        user_id: DbId,
        skill_id: DbId,
    ) -> Result<UserSkill, sqlx::Error> {
        sqlx::query(
            "INSERT INTO user_skills (user_id, skill_id) VALUES (?, ?)
             ON CONFLICT (user_id, skill_id) DO NOTHING",
        )
        .bind(user_id)
        .bind(skill_id)
        .execute(pool)
        .await?;

        let query = format!("SELECT {COLUMNS} FROM user_skills WHERE user_id = ? AND skill_id = ?");
        sqlx::query_as::<_, UserSkill>(&query)
            .bind(user_id)
            .bind(skill_id)
            .fetch_one(pool)
            .await
    }

    /// Remove a link. Returns `true` if a row was deleted.
    pub async fn delete(pool: &SqlitePool, user_id: DbId, skill_id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM user_skills WHERE user_id = ? AND skill_id = ?")
            .bind(user_id)
            .bind(skill_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Skill IDs owned by `user_id`; the "offered" choice set.
    pub async fn list_skill_ids(pool: &SqlitePool, user_id: DbId) -> Result<Vec<DbId>, sqlx::Error> {
        sqlx::query_scalar::<_, DbId>(
            "SELECT skill_id FROM user_skills WHERE user_id = ? ORDER BY skill_id",
        )
        .bind(user_id)
        .fetch_all(pool)
        .await
    }

    pub async fn count_for_user(pool: &SqlitePool, user_id: DbId) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM user_skills WHERE user_id = ?")
            .bind(user_id)
            .fetch_one(pool)
            .await
    }
}
