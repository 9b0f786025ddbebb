//! HTTP-level integration tests for the dashboard stats endpoint.

mod common;

use axum::http::StatusCode;
use common::{body_json, get, post_json};
use serde_json::json;
use sqlx::PgPool;

async fn seed_user(pool: &PgPool, email: &str, role: &str) -> i64 {
    let response = post_json(
        common::build_test_app(pool.clone()),
        "/api/v1/users",
        json!({"name": format!("User {email}"), "email": email, "role": role, "domain_role": "frontend"}),
    )
    .await;
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

async fn seed_buddy(pool: &PgPool, email: &str, status: &str) -> i64 {
    let user_id = seed_user(pool, email, "buddy").await;
    let response = post_json(
        common::build_test_app(pool.clone()),
        "/api/v1/buddies",
        json!({"user_id": user_id, "status": status}),
    )
    .await;
    body_json(response).await["id"].as_i64().unwrap()
}

async fn seed_task(pool: &PgPool, mentor_id: i64, buddy_id: i64, status: &str) {
    let response = post_json(
        common::build_test_app(pool.clone()),
        "/api/v1/tasks",
        json!({"mentor_id": mentor_id, "buddy_id": buddy_id, "title": format!("task {status}"), "status": status}),
    )
    .await;
    assert_eq!(response.status(), axum::http::StatusCode::CREATED);
}

async fn stats(pool: &PgPool) -> serde_json::Value {
    let response = get(common::build_test_app(pool.clone()), "/api/v1/dashboard/stats").await;
    assert_eq!(response.status(), StatusCode::OK);
    body_json(response).await
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_empty_database_yields_zeros(pool: PgPool) {
    let json = stats(&pool).await;
    let data = &json["data"];

    assert_eq!(data["total_mentors"], 0);
    assert_eq!(data["active_buddies"], 0);
    assert_eq!(data["weekly_tasks"], 0);
    // No tasks at all: the rate is 0, not a division error.
    assert_eq!(data["completion_rate"], 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_completion_rate_is_fifty_for_two_of_four(pool: PgPool) {
    let mentor_id = seed_mentor(&pool, "m@x.com").await;
    let buddy_id = seed_buddy(&pool, "b@x.com", "active").await;

    seed_task(&pool, mentor_id, buddy_id, "completed").await;
    seed_task(&pool, mentor_id, buddy_id, "completed").await;
    seed_task(&pool, mentor_id, buddy_id, "pending").await;
    seed_task(&pool, mentor_id, buddy_id, "in_progress").await;

    let json = stats(&pool).await;
    let data = &json["data"];

    assert_eq!(data["completion_rate"], 50);
    // All four tasks were created just now, inside the rolling window.
    assert_eq!(data["weekly_tasks"], 4);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_nested_breakdowns_partition_by_status(pool: PgPool) {
    seed_mentor(&pool, "m@x.com").await;
    seed_buddy(&pool, "b1@x.com", "active").await;
    seed_buddy(&pool, "b2@x.com", "inactive").await;
    seed_buddy(&pool, "b3@x.com", "exited").await;

    let json = stats(&pool).await;
    let data = &json["data"];

    assert_eq!(data["total_mentors"], 1);
    assert_eq!(data["active_buddies"], 1);
    assert_eq!(data["mentors"]["total"], 1);
    assert_eq!(data["mentors"]["active"], 1);
    assert_eq!(data["buddies"]["total"], 3);
    assert_eq!(data["buddies"]["active"], 1);
    assert_eq!(data["buddies"]["inactive"], 1);
    assert_eq!(data["buddies"]["exited"], 1);
}
