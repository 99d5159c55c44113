//! Skill entity model, DTOs and joined views.

use serde::Serialize;
use sqlx::FromRow;
use skillswap_core::status::SkillLevel;
use skillswap_core::types::DbId;

use super::category::Category;

/// A row from the `skills` table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct Skill {
    pub id: DbId,
    pub name: String,
    pub description: Option<String>,
    pub level: SkillLevel,
    pub category_id: DbId,
}

/// DTO for creating a new skill.
#[derive(Debug)]
pub struct CreateSkill {
    pub name: String,
    pub description: Option<String>,
    pub level: SkillLevel,
    pub category_id: DbId,
}

/// The few skill columns embedded in proposal/request views.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkillSummary {
    pub id: DbId,
    pub name: String,
    pub level: SkillLevel,
}

/// A skill with its category joined in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkillWithCategory {
    pub id: DbId,
    pub name: String,
    pub description: Option<String>,
    pub level: SkillLevel,
    pub category: Category,
}

/// Flat row shape of `skills JOIN categories`.
#[derive(Debug, FromRow)]
pub(crate) struct SkillWithCategoryRow {
    pub id: DbId,
    pub name: String,
    pub description: Option<String>,
    pub level: SkillLevel,
    pub category_id: DbId,
    pub category_name: String,
}

impl From<SkillWithCategoryRow> for SkillWithCategory {
    fn from(row: SkillWithCategoryRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            description: row.description,
            level: row.level,
            category: Category {
                id: row.category_id,
                name: row.category_name,
            },
        }
    }
}
