//! Shared fixtures for repository tests.

#![allow(dead_code)]

use skillswap_core::status::{ExchangeFormat, SkillLevel};
use skillswap_core::types::DbId;
use skillswap_db::models::exchange::{CreateExchange, Exchange};
use skillswap_db::models::skill::{CreateSkill, Skill};
use skillswap_db::models::user::{CreateUser, User};
use skillswap_db::repositories::{CategoryRepo, ExchangeRepo, SkillRepo, UserRepo};
use skillswap_db::DbPool;

/// A fresh in-memory database with all migrations applied.
pub async fn test_pool() -> DbPool {
    let pool = skillswap_db::create_in_memory_pool()
        .await
        .expect("in-memory pool");
    skillswap_db::run_migrations(&pool)
        .await
        .expect("migrations apply");
    pool
}

pub async fn user(pool: &DbPool, email: &str) -> User {
    UserRepo::create(
        pool,
        &CreateUser {
            email: email.to_string(),
            full_name: format!("User {email}"),
            password_hash: "not-a-real-hash".to_string(),
        },
    )
    .await
    .expect("create user")
}

pub async fn skill(pool: &DbPool, name: &str) -> Skill {
    let category = match CategoryRepo::create(pool, "General").await {
        Ok(c) => c.id,
        Err(_) => CategoryRepo::list(pool).await.unwrap()[0].id,
    };
    SkillRepo::create(
        pool,
        &CreateSkill {
            name: name.to_string(),
            description: None,
            level: SkillLevel::Intermediate,
            category_id: category,
        },
    )
    .await
    .expect("create skill")
}

pub async fn exchange(pool: &DbPool, user1: DbId, user2: DbId) -> Exchange {
    ExchangeRepo::create(
        pool,
        &CreateExchange {
            user1_id: user1,
            user2_id: user2,
            proposal_id: None,
            request_id: None,
            format: ExchangeFormat::Online,
        },
    )
    .await
    .expect("create exchange")
}

/// `true` if `err` is a constraint violation reported by the database.
pub fn is_constraint_violation(err: &sqlx::Error) -> bool {
    matches!(err, sqlx::Error::Database(db) if db.is_unique_violation()
        || db.is_check_violation()
        || db.is_foreign_key_violation())
}
