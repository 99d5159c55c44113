//! Shared helpers for HTTP-level integration tests.

#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request, Response, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

use skillswap_api::auth::jwt::JwtConfig;
use skillswap_api::config::ServerConfig;
use skillswap_api::router::build_app_router;
use skillswap_api::state::AppState;
use skillswap_core::types::DbId;
use skillswap_db::DbPool;

pub const PASSWORD: &str = "swap-skills-2024";

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        database_url: "sqlite::memory:".to_string(),
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        jwt: JwtConfig {
            secret: "test-secret-that-is-long-enough-for-hmac".to_string(),
            session_expiry_days: 14,
        },
    }
}

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

/// Build the full application router (same middleware stack as `main.rs`).
pub fn build_test_app(pool: DbPool) -> Router {
    let config = test_config();
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
    };
    build_app_router(state, &config)
}

/// Fresh database plus router over it.
pub async fn setup() -> (DbPool, Router) {
    let pool = test_pool().await;
    let app = build_test_app(pool.clone());
    (pool, app)
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

pub async fn body_json(response: Response<Body>) -> Value {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("read body")
        .to_bytes();
    serde_json::from_slice(&bytes).expect("body is JSON")
}

async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> Response<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header("authorization", format!("Bearer {token}"));
    }
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string())),
        None => builder.body(Body::empty()),
    }
    .expect("valid request");

    app.clone().oneshot(request).await.expect("infallible")
}

pub async fn get(app: &Router, uri: &str) -> Response<Body> {
    send(app, Method::GET, uri, None, None).await
}

pub async fn get_auth(app: &Router, uri: &str, token: &str) -> Response<Body> {
    send(app, Method::GET, uri, Some(token), None).await
}

pub async fn post_json(app: &Router, uri: &str, body: Value) -> Response<Body> {
    send(app, Method::POST, uri, None, Some(body)).await
}

pub async fn post_json_auth(app: &Router, uri: &str, token: &str, body: Value) -> Response<Body> {
    send(app, Method::POST, uri, Some(token), Some(body)).await
}

pub async fn post_auth(app: &Router, uri: &str, token: &str) -> Response<Body> {
    send(app, Method::POST, uri, Some(token), None).await
}

pub async fn delete_auth(app: &Router, uri: &str, token: &str) -> Response<Body> {
    send(app, Method::DELETE, uri, Some(token), None).await
}

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

/// A registered user and their bearer token.
pub struct TestUser {
    pub id: DbId,
    pub token: String,
}

/// Register a user through the API.
pub async fn register(app: &Router, email: &str) -> TestUser {
    let response = post_json(
        app,
        "/register/",
        json!({
            "email": email,
            "full_name": format!("User {email}"),
            "password": PASSWORD,
            "password_confirm": PASSWORD,
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    TestUser {
        id: json["data"]["user"]["id"].as_i64().expect("user id"),
        token: json["data"]["access_token"]
            .as_str()
            .expect("access token")
            .to_string(),
    }
}

/// Insert a category directly and return its id.
pub async fn category(pool: &DbPool, name: &str) -> DbId {
    skillswap_db::repositories::CategoryRepo::create(pool, name)
        .await
        .expect("create category")
        .id
}

/// Create a skill through the API as `user`; the user then owns it.
pub async fn create_skill(app: &Router, user: &TestUser, name: &str, category_id: DbId) -> DbId {
    let response = post_json_auth(
        app,
        "/skills/create/",
        &user.token,
        json!({ "name": name, "level": "intermediate", "category": category_id }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await["data"]["id"]
        .as_i64()
        .expect("skill id")
}

/// Publish a proposal through the API and return its id.
pub async fn create_proposal(app: &Router, user: &TestUser, offered: DbId, wanted: DbId) -> DbId {
    let response = post_json_auth(
        app,
        "/proposals/create/",
        &user.token,
        json!({ "skill_offered": offered, "skill_wanted": wanted, "format": "online" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await["data"]["id"]
        .as_i64()
        .expect("proposal id")
}

/// Two users with an active exchange between them (`a` is `user1`).
pub async fn exchange_between(app: &Router, pool: &DbPool) -> (TestUser, TestUser, DbId) {
    let a = register(app, "alice@example.com").await;
    let b = register(app, "bob@example.com").await;
    let music = category(pool, "Music").await;
    let guitar = create_skill(app, &a, "Guitar", music).await;
    let proposal = create_proposal(app, &a, guitar, guitar).await;

    let response = post_auth(app, &format!("/proposals/{proposal}/exchange/"), &b.token).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let id = body_json(response).await["data"]["id"]
        .as_i64()
        .expect("exchange id");
    (a, b, id)
}
