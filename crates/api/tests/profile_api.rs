//! HTTP-level tests for the profile, owned skills and points.

mod common;

use axum::http::StatusCode;
use common::{
    body_json, category, create_proposal, create_skill, delete_auth, exchange_between, get_auth,
    post_json_auth, register, setup,
};
use serde_json::json;
use skillswap_core::status::PointReason;
use skillswap_db::models::point::CreatePointTransaction;
use skillswap_db::repositories::PointRepo;

#[tokio::test]
async fn profile_collects_skills_proposals_and_exchanges() {
    let (pool, app) = setup().await;
    let (alice, _bob, exchange) = exchange_between(&app, &pool).await;

    let json = body_json(get_auth(&app, "/profile/", &alice.token).await).await;
    let data = &json["data"];
    assert_eq!(data["user"]["email"], "alice@example.com");
    assert!(data["user"].get("password_hash").is_none());
    assert_eq!(data["user"]["rating"], "0.00");
    assert_eq!(data["skills"][0]["name"], "Guitar");
    assert_eq!(data["proposals"].as_array().unwrap().len(), 1);
    assert_eq!(data["exchanges"][0]["id"], exchange);
}

#[tokio::test]
async fn linking_a_skill_twice_is_conflict() {
    let (pool, app) = setup().await;
    let music = category(&pool, "Music").await;
    let owner = register(&app, "owner@example.com").await;
    let learner = register(&app, "learner@example.com").await;
    let guitar = create_skill(&app, &owner, "Guitar", music).await;

    let response =
        post_json_auth(&app, "/profile/skills/", &learner.token, json!({ "skill_id": guitar }))
            .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(body_json(response).await["data"]["skill_id"], guitar);

    let again =
        post_json_auth(&app, "/profile/skills/", &learner.token, json!({ "skill_id": guitar }))
            .await;
    assert_eq!(again.status(), StatusCode::CONFLICT);

    let missing =
        post_json_auth(&app, "/profile/skills/", &learner.token, json!({ "skill_id": 999 })).await;
    assert_eq!(missing.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn unlinking_skill_keeps_existing_proposals() {
    let (pool, app) = setup().await;
    let music = category(&pool, "Music").await;
    let user = register(&app, "u1@example.com").await;
    let guitar = create_skill(&app, &user, "Guitar", music).await;
    create_proposal(&app, &user, guitar, guitar).await;

    let uri = format!("/profile/skills/{guitar}");
    assert_eq!(delete_auth(&app, &uri, &user.token).await.status(), StatusCode::NO_CONTENT);
    assert_eq!(delete_auth(&app, &uri, &user.token).await.status(), StatusCode::NOT_FOUND);

    let json = body_json(get_auth(&app, "/profile/", &user.token).await).await;
    assert!(json["data"]["skills"].as_array().unwrap().is_empty());
    assert_eq!(json["data"]["proposals"].as_array().unwrap().len(), 1);

    // Without the link the skill can no longer be offered.
    let response = post_json_auth(
        &app,
        "/proposals/create/",
        &user.token,
        json!({ "skill_offered": guitar, "skill_wanted": guitar }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn new_user_has_zero_points() {
    let (_pool, app) = setup().await;
    let user = register(&app, "u1@example.com").await;

    let json = body_json(get_auth(&app, "/points/", &user.token).await).await;
    assert_eq!(json["data"]["balance"], 0);
    assert!(json["data"]["transactions"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn points_view_shows_ledger_newest_first() {
    let (pool, app) = setup().await;
    let user = register(&app, "u1@example.com").await;

    for (amount, reason) in [(20, PointReason::Training), (-5, PointReason::PremiumPurchase)] {
        PointRepo::record_transaction(
            &pool,
            &CreatePointTransaction {
                user_id: user.id,
                amount,
                reason,
                exchange_id: None,
            },
        )
        .await
        .unwrap();
    }

    let json = body_json(get_auth(&app, "/points/", &user.token).await).await;
    assert_eq!(json["data"]["balance"], 15);
    let transactions = json["data"]["transactions"].as_array().unwrap();
    assert_eq!(transactions.len(), 2);
    assert_eq!(transactions[0]["amount"], -5);
    assert_eq!(transactions[0]["reason"], "premium_purchase");
    assert_eq!(transactions[1]["amount"], 20);
}
