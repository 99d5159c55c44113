//! Repository for the `categories` table.

use sqlx::SqlitePool;
use skillswap_core::types::DbId;

use crate::models::category::Category;

pub struct CategoryRepo;

impl CategoryRepo {
    /// Insert a category. A duplicate name violates `uq_categories_name`.
    pub async fn create(pool: &SqlitePool, name: &str) -> Result<Category, sqlx::Error> {
        sqlx::query_as::<_, Category>("INSERT INTO categories (name) VALUES (?) RETURNING id, name")
            .bind(name)
            .fetch_one(pool)
            .await
    }

    /// All categories, alphabetically.
    pub async fn list(pool: &SqlitePool) -> Result<Vec<Category>, sqlx::Error> {
        sqlx::query_as::<_, Category>("SELECT id, name FROM categories ORDER BY name, id")
            .fetch_all(pool)
            .await
    }

    /// IDs of every category, for form choice validation.
    pub async fn list_ids(pool: &SqlitePool) -> Result<Vec<DbId>, sqlx::Error> {
        sqlx::query_scalar::<_, DbId>("SELECT id FROM categories ORDER BY id")
            .fetch_all(pool)
            .await
    }
}
