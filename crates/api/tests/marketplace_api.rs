//! HTTP-level tests for skills, proposals, requests and starting exchanges.

mod common;

use axum::http::StatusCode;
use common::{
    body_json, category, create_proposal, create_skill, get, get_auth, post_auth, post_json_auth,
    register, setup,
};
use serde_json::json;
use skillswap_db::repositories::{ExchangeRepo, SkillRepo, UserSkillRepo};

#[tokio::test]
async fn home_and_skill_lists_are_public() {
    let (pool, app) = setup().await;
    let music = category(&pool, "Music").await;
    category(&pool, "Art").await;
    let user = register(&app, "u1@example.com").await;
    create_skill(&app, &user, "Guitar", music).await;

    let home = body_json(get(&app, "/").await).await;
    let names: Vec<_> = home["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["name"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(names, vec!["Art", "Music"]);

    let alias = body_json(get(&app, "/categories/").await).await;
    assert_eq!(alias["data"], home["data"]);

    let skills = body_json(get(&app, "/skills/").await).await;
    assert_eq!(skills["data"][0]["name"], "Guitar");
    assert_eq!(skills["data"][0]["level"], "intermediate");
    assert_eq!(skills["data"][0]["category"]["name"], "Music");
}

#[tokio::test]
async fn skill_form_lists_levels_and_categories() {
    let (pool, app) = setup().await;
    category(&pool, "Crafts").await;
    let user = register(&app, "u1@example.com").await;

    let json = body_json(get_auth(&app, "/skills/create/", &user.token).await).await;
    assert_eq!(json["data"]["levels"], json!(["novice", "intermediate", "expert"]));
    assert_eq!(json["data"]["categories"][0]["name"], "Crafts");
}

#[tokio::test]
async fn skill_create_rejects_bad_level_and_category() {
    let (_pool, app) = setup().await;
    let user = register(&app, "u1@example.com").await;

    let response = post_json_auth(
        &app,
        "/skills/create/",
        &user.token,
        json!({ "name": "Welding", "level": "guru", "category": 999 }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    let fields: Vec<_> = json["fields"]
        .as_array()
        .unwrap()
        .iter()
        .map(|f| f["field"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(fields, vec!["level", "category"]);
}

#[tokio::test]
async fn repeated_skill_create_links_each_skill_once() {
    let (pool, app) = setup().await;
    let crafts = category(&pool, "Crafts").await;
    let user = register(&app, "u1@example.com").await;

    let first = create_skill(&app, &user, "Welding", crafts).await;
    let second = create_skill(&app, &user, "Welding", crafts).await;

    // Names are not unique, so each call makes a new skill row.
    assert_ne!(first, second);
    assert_eq!(SkillRepo::list_ids(&pool).await.unwrap().len(), 2);

    // Each skill is linked to the user exactly once.
    let owned = UserSkillRepo::list_skill_ids(&pool, user.id).await.unwrap();
    assert_eq!(owned, vec![first, second]);
    UserSkillRepo::get_or_create(&pool, user.id, first).await.unwrap();
    assert_eq!(UserSkillRepo::count_for_user(&pool, user.id).await.unwrap(), 2);
}

#[tokio::test]
async fn proposal_with_unowned_skill_is_rejected() {
    let (pool, app) = setup().await;
    let music = category(&pool, "Music").await;
    let owner = register(&app, "owner@example.com").await;
    let guitar = create_skill(&app, &owner, "Guitar", music).await;
    let u1 = register(&app, "u1@example.com").await;

    let response = post_json_auth(
        &app,
        "/proposals/create/",
        &u1.token,
        json!({ "skill_offered": guitar, "skill_wanted": guitar }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert_eq!(json["fields"][0]["field"], "skill_offered");

    let proposals = body_json(get(&app, "/proposals/").await).await;
    assert!(proposals["data"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn proposal_is_created_for_the_acting_user() {
    let (pool, app) = setup().await;
    let music = category(&pool, "Music").await;
    let art = category(&pool, "Art").await;
    let u1 = register(&app, "u1@example.com").await;
    let u2 = register(&app, "u2@example.com").await;
    let guitar = create_skill(&app, &u1, "Guitar", music).await;
    let painting = create_skill(&app, &u2, "Painting", art).await;

    let response = post_json_auth(
        &app,
        "/proposals/create/",
        &u1.token,
        json!({
            "skill_offered": guitar,
            "skill_wanted": painting,
            "format": "online",
            "description": "  ",
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["next"], "/proposals/");
    assert_eq!(json["data"]["user_id"], u1.id);
    assert_eq!(json["data"]["format"], "online");
    assert!(json["data"]["description"].is_null());

    let listed = body_json(get(&app, "/proposals/").await).await;
    let row = &listed["data"][0];
    assert_eq!(row["user"]["email"], "u1@example.com");
    assert_eq!(row["skill_offered"]["name"], "Guitar");
    assert_eq!(row["skill_wanted"]["name"], "Painting");
}

#[tokio::test]
async fn proposal_form_narrows_offered_skills() {
    let (pool, app) = setup().await;
    let music = category(&pool, "Music").await;
    let u1 = register(&app, "u1@example.com").await;
    let u2 = register(&app, "u2@example.com").await;
    create_skill(&app, &u1, "Guitar", music).await;
    create_skill(&app, &u2, "Drums", music).await;

    let json = body_json(get_auth(&app, "/proposals/create/", &u1.token).await).await;
    let offered = json["data"]["skill_offered"].as_array().unwrap();
    assert_eq!(offered.len(), 1);
    assert_eq!(offered[0]["name"], "Guitar");
    assert_eq!(json["data"]["skill_wanted"].as_array().unwrap().len(), 2);
    assert_eq!(json["data"]["formats"], json!(["online", "offline"]));
}

#[tokio::test]
async fn exchange_from_someone_elses_proposal() {
    let (pool, app) = setup().await;
    let music = category(&pool, "Music").await;
    let u1 = register(&app, "u1@example.com").await;
    let u2 = register(&app, "u2@example.com").await;
    let guitar = create_skill(&app, &u1, "Guitar", music).await;
    let proposal = create_proposal(&app, &u1, guitar, guitar).await;

    let response = post_auth(&app, &format!("/proposals/{proposal}/exchange/"), &u2.token).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["next"], "/exchanges/");
    assert_eq!(json["data"]["user1_id"], u1.id);
    assert_eq!(json["data"]["user2_id"], u2.id);
    assert_eq!(json["data"]["proposal_id"], proposal);
    assert_eq!(json["data"]["status"], "active");
    assert_eq!(json["data"]["format"], "online");
}

#[tokio::test]
async fn exchange_on_own_proposal_is_forbidden() {
    let (pool, app) = setup().await;
    let music = category(&pool, "Music").await;
    let u1 = register(&app, "u1@example.com").await;
    let guitar = create_skill(&app, &u1, "Guitar", music).await;
    let proposal = create_proposal(&app, &u1, guitar, guitar).await;

    let response = post_auth(&app, &format!("/proposals/{proposal}/exchange/"), &u1.token).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    assert!(ExchangeRepo::list_for_user(&pool, u1.id).await.unwrap().is_empty());
}

#[tokio::test]
async fn exchange_on_missing_proposal_is_404() {
    let (_pool, app) = setup().await;
    let u1 = register(&app, "u1@example.com").await;
    let response = post_auth(&app, "/proposals/4242/exchange/", &u1.token).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn requests_mirror_proposals() {
    let (pool, app) = setup().await;
    let music = category(&pool, "Music").await;
    let u1 = register(&app, "u1@example.com").await;
    let u2 = register(&app, "u2@example.com").await;
    let guitar = create_skill(&app, &u1, "Guitar", music).await;
    let drums = create_skill(&app, &u2, "Drums", music).await;

    let response = post_json_auth(
        &app,
        "/requests/create/",
        &u1.token,
        json!({ "skill_wanted": drums, "skill_offered": guitar, "description": "Evenings" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let request = body_json(response).await["data"]["id"].as_i64().unwrap();

    let listed = body_json(get(&app, "/requests/").await).await;
    assert_eq!(listed["data"][0]["skill_wanted"]["name"], "Drums");
    assert_eq!(listed["data"][0]["description"], "Evenings");

    let own = post_auth(&app, &format!("/requests/{request}/exchange/"), &u1.token).await;
    assert_eq!(own.status(), StatusCode::FORBIDDEN);

    let response = post_auth(&app, &format!("/requests/{request}/exchange/"), &u2.token).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["data"]["user1_id"], u1.id);
    assert_eq!(json["data"]["request_id"], request);
    assert!(json["data"]["proposal_id"].is_null());
    assert_eq!(json["data"]["format"], "online");
}

#[tokio::test]
async fn request_offering_unowned_skill_is_rejected() {
    let (pool, app) = setup().await;
    let music = category(&pool, "Music").await;
    let u1 = register(&app, "u1@example.com").await;
    let u2 = register(&app, "u2@example.com").await;
    let drums = create_skill(&app, &u2, "Drums", music).await;

    let response = post_json_auth(
        &app,
        "/requests/create/",
        &u1.token,
        json!({ "skill_wanted": drums, "skill_offered": drums }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["fields"][0]["field"], "skill_offered");
}

#[tokio::test]
async fn wrongly_typed_skill_id_is_a_json_bad_request() {
    let (pool, app) = setup().await;
    let music = category(&pool, "Music").await;
    let u1 = register(&app, "u1@example.com").await;
    let guitar = create_skill(&app, &u1, "Guitar", music).await;

    let response = post_json_auth(
        &app,
        "/proposals/create/",
        &u1.token,
        json!({ "skill_offered": "Painting", "skill_wanted": guitar }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "BAD_REQUEST");
    assert!(json["error"].as_str().unwrap().contains("skill_offered"));

    let proposals = body_json(get(&app, "/proposals/").await).await;
    assert!(proposals["data"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn body_without_json_content_type_is_a_json_bad_request() {
    let (_pool, app) = setup().await;
    let u1 = register(&app, "u1@example.com").await;

    // No body and no content type at all.
    let response = post_auth(&app, "/skills/create/", &u1.token).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "BAD_REQUEST");
}
