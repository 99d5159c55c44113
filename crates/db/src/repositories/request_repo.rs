//! Repository for the `requests` table.

use chrono::Utc;
use sqlx::SqlitePool;
use skillswap_core::types::DbId;

use crate::models::request::{CreateRequest, Request, RequestDetail, RequestDetailRow};

const COLUMNS: &str = "id, user_id, skill_wanted_id, skill_offered_id, description, created_at";

const DETAIL: &str = "SELECT r.id, r.user_id, u.email AS user_email, u.full_name AS user_full_name, \
                             r.skill_wanted_id, sw.name AS skill_wanted_name, \
                             sw.level AS skill_wanted_level, \
                             r.skill_offered_id, so.name AS skill_offered_name, \
                             so.level AS skill_offered_level, \
                             r.description, r.created_at \
                      FROM requests r \
                      JOIN users u ON u.id = r.user_id \
                      JOIN skills sw ON sw.id = r.skill_wanted_id \
                      JOIN skills so ON so.id = r.skill_offered_id";

pub struct RequestRepo;

impl RequestRepo {
    pub async fn create(pool: &SqlitePool, input: &CreateRequest) -> Result<Request, sqlx::Error> {
        let query = format!(
            "INSERT INTO requests (user_id, skill_wanted_id, skill_offered_id, description, created_at)
             VALUES (?, ?, ?, ?, ?)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Request>(&query)
            .bind(input.user_id)
            .bind(input.skill_wanted_id)
            .bind(input.skill_offered_id)
            .bind(&input.description)
            .bind(Utc::now())
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &SqlitePool, id: DbId) -> Result<Option<Request>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM requests WHERE id = ?");
        sqlx::query_as::<_, Request>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Every request with author and skills, ordered by id.
    pub async fn list_detailed(pool: &SqlitePool) -> Result<Vec<RequestDetail>, sqlx::Error> {
        let query = format!("{DETAIL} ORDER BY r.id");
        let rows = sqlx::query_as::<_, RequestDetailRow>(&query)
            .fetch_all(pool)
            .await?;
        Ok(rows.into_iter().map(Into::into).collect())
    }
}
