//! Repository for the `skills` table.

use sqlx::SqlitePool;
use skillswap_core::types::DbId;

use crate::models::skill::{CreateSkill, Skill, SkillWithCategory, SkillWithCategoryRow};

const COLUMNS: &str = "id, name, description, level, category_id";

/// `skills JOIN categories` projection used by the listing methods.
const WITH_CATEGORY: &str = "SELECT s.id, s.name, s.description, s.level, \
                                    s.category_id, c.name AS category_name \
                             FROM skills s \
                             JOIN categories c ON c.id = s.category_id";

pub struct SkillRepo;

impl SkillRepo {
    /// Insert a skill. Names are not unique; every call creates a new row.
    pub async fn create(pool: &SqlitePool, input: &CreateSkill) -> Result<Skill, sqlx::Error> {
        let query = format!(
            "INSERT INTO skills (name, description, level, category_id)
             VALUES (?, ?, ?, ?)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Skill>(&query)
            .bind(&input.name)
            .bind(&input.description)
            .bind(input.level)
            .bind(input.category_id)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &SqlitePool, id: DbId) -> Result<Option<Skill>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM skills WHERE id = ?");
        sqlx::query_as::<_, Skill>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Every skill with its category, ordered by id.
    pub async fn list_with_category(pool: &SqlitePool) -> Result<Vec<SkillWithCategory>, sqlx::Error> {
        let query = format!("{WITH_CATEGORY} ORDER BY s.id");
        let rows = sqlx::query_as::<_, SkillWithCategoryRow>(&query)
            .fetch_all(pool)
            .await?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    /// Skills linked to `user_id` through `user_skills`, with category.
    pub async fn list_for_user(
        pool: &SqlitePool,
        user_id: DbId,
    ) -> Result<Vec<SkillWithCategory>, sqlx::Error> {
        let query = format!(
            "{WITH_CATEGORY}
             JOIN user_skills us ON us.skill_id = s.id
             WHERE us.user_id = ?
             ORDER BY s.id"
        );
        let rows = sqlx::query_as::<_, SkillWithCategoryRow>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    /// IDs of every skill, for the "wanted" choice set.
    pub async fn list_ids(pool: &SqlitePool) -> Result<Vec<DbId>, sqlx::Error> {
        sqlx::query_scalar::<_, DbId>("SELECT id FROM skills ORDER BY id")
            .fetch_all(pool)
            .await
    }
}
