//! HTTP-level integration tests for mentor assignment.

mod common;

use axum::http::StatusCode;
use common::{body_json, get, post_json, put_json};
use serde_json::json;
use sqlx::PgPool;

async fn seed_user(pool: &PgPool, email: &str, role: &str) -> i64 {
    let response = post_json(
        common::build_test_app(pool.clone()),
        "/api/v1/users",
        json!({"name": format!("User {email}"), "email": email, "role": role, "domain_role": "frontend"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await["id"].as_i64().unwrap()
}

async fn seed_mentor(pool: &PgPool, email: &str) -> i64 {
    let user_id = seed_user(pool, email, "mentor").await;
    let response = post_json(
        common::build_test_app(pool.clone()),
        "/api/v1/mentors",
        json!({"user_id": user_id, "expertise": "React"}),
    )
    .await;
    body_json(response).await["id"].as_i64().unwrap()
}

async fn seed_buddy(pool: &PgPool, email: &str) -> i64 {
    let user_id = seed_user(pool, email, "buddy").await;
    let response = post_json(
        common::build_test_app(pool.clone()),
        "/api/v1/buddies",
        json!({"user_id": user_id}),
    )
    .await;
    body_json(response).await["id"].as_i64().unwrap()
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_assign_returns_nested_mentor(pool: PgPool) {
    let mentor_id = seed_mentor(&pool, "m@x.com").await;
    let buddy_id = seed_buddy(&pool, "b@x.com").await;

    let response = post_json(
        common::build_test_app(pool),
        &format!("/api/v1/buddies/{buddy_id}/assign"),
        json!({"mentor_id": mentor_id}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["assigned_mentor_id"], mentor_id);
    assert_eq!(json["mentor"]["id"], mentor_id);
    assert_eq!(json["mentor"]["email"], "m@x.com");
    assert_eq!(json["mentor"]["expertise"], "React");
    assert_eq!(json["email"], "b@x.com");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_reassignment_overwrites(pool: PgPool) {
    let m1 = seed_mentor(&pool, "m1@x.com").await;
    let m2 = seed_mentor(&pool, "m2@x.com").await;
    let buddy_id = seed_buddy(&pool, "b@x.com").await;

    post_json(
        common::build_test_app(pool.clone()),
        &format!("/api/v1/buddies/{buddy_id}/assign"),
        json!({"mentor_id": m1}),
    )
    .await;

    let response = post_json(
        common::build_test_app(pool),
        &format!("/api/v1/buddies/{buddy_id}/assign"),
        json!({"mentor_id": m2}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["assigned_mentor_id"], m2);
    assert_eq!(json["mentor"]["email"], "m2@x.com");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_assign_missing_mentor_fails_closed(pool: PgPool) {
    let mentor_id = seed_mentor(&pool, "m@x.com").await;
    let buddy_id = seed_buddy(&pool, "b@x.com").await;

    post_json(
        common::build_test_app(pool.clone()),
        &format!("/api/v1/buddies/{buddy_id}/assign"),
        json!({"mentor_id": mentor_id}),
    )
    .await;

    let response = post_json(
        common::build_test_app(pool.clone()),
        &format!("/api/v1/buddies/{buddy_id}/assign"),
        json!({"mentor_id": 999999}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await["code"], "NOT_FOUND");

    // Prior assignment is untouched.
    let response = get(
        common::build_test_app(pool),
        &format!("/api/v1/buddies/{buddy_id}"),
    )
    .await;
    assert_eq!(body_json(response).await["assigned_mentor_id"], mentor_id);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_assign_missing_buddy_returns_404(pool: PgPool) {
    let mentor_id = seed_mentor(&pool, "m@x.com").await;

    let response = post_json(
        common::build_test_app(pool),
        "/api/v1/buddies/999999/assign",
        json!({"mentor_id": mentor_id}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_available_excludes_assigned_and_inactive(pool: PgPool) {
    let mentor_id = seed_mentor(&pool, "m@x.com").await;
    let assigned = seed_buddy(&pool, "assigned@x.com").await;
    let inactive = seed_buddy(&pool, "inactive@x.com").await;
    let free = seed_buddy(&pool, "free@x.com").await;

    post_json(
        common::build_test_app(pool.clone()),
        &format!("/api/v1/buddies/{assigned}/assign"),
        json!({"mentor_id": mentor_id}),
    )
    .await;
    put_json(
        common::build_test_app(pool.clone()),
        &format!("/api/v1/buddies/{inactive}"),
        json!({"status": "inactive"}),
    )
    .await;

    let response = get(common::build_test_app(pool), "/api/v1/buddies/available").await;
    let json = body_json(response).await;
    let ids: Vec<i64> = json
        .as_array()
        .unwrap()
        .iter()
        .map(|b| b["id"].as_i64().unwrap())
        .collect();

    assert!(ids.contains(&free));
    assert!(!ids.contains(&assigned));
    assert!(!ids.contains(&inactive));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_generic_update_clears_assignment(pool: PgPool) {
    let mentor_id = seed_mentor(&pool, "m@x.com").await;
    let buddy_id = seed_buddy(&pool, "b@x.com").await;

    post_json(
        common::build_test_app(pool.clone()),
        &format!("/api/v1/buddies/{buddy_id}/assign"),
        json!({"mentor_id": mentor_id}),
    )
    .await;

    // Explicit null clears; omitting the field would leave it unchanged.
    let response = put_json(
        common::build_test_app(pool.clone()),
        &format!("/api/v1/buddies/{buddy_id}"),
        json!({"assigned_mentor_id": null}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert!(json["assigned_mentor_id"].is_null());
    assert!(json["mentor"].is_null());

    // An update that does not mention the field keeps the assignment.
    post_json(
        common::build_test_app(pool.clone()),
        &format!("/api/v1/buddies/{buddy_id}/assign"),
        json!({"mentor_id": mentor_id}),
    )
    .await;
    let response = put_json(
        common::build_test_app(pool),
        &format!("/api/v1/buddies/{buddy_id}"),
        json!({"status": "active"}),
    )
    .await;
    assert_eq!(body_json(response).await["assigned_mentor_id"], mentor_id);
}
