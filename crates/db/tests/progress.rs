//! Integration tests for the topic progress checklist and upsert.

use sqlx::PgPool;

use mentorhub_db::models::buddy::CreateBuddy;
use mentorhub_db::models::enums::{DomainRole, UserRole};
use mentorhub_db::models::topic::CreateTopic;
use mentorhub_db::models::user::CreateUser;
use mentorhub_db::repositories::{BuddyRepo, ProgressRepo, TopicRepo, UserRepo};

async fn seed_buddy(
    pool: &PgPool,
    email: &str,
    domain: DomainRole,
) -> mentorhub_db::models::buddy::Buddy {
    let user = UserRepo::create(
        pool,
        &CreateUser {
            name: format!("Buddy {email}"),
            email: email.to_string(),
            role: UserRole::Buddy,
            domain_role: domain,
            avatar_url: None,
        },
    )
    .await
    .unwrap();
    BuddyRepo::create(
        pool,
        &CreateBuddy {
            user_id: user.id,
            status: None,
            join_date: None,
        },
    )
    .await
    .unwrap()
}

async fn seed_topic(
    pool: &PgPool,
    name: &str,
    domain: DomainRole,
) -> mentorhub_db::models::topic::Topic {
    TopicRepo::create(
        pool,
        &CreateTopic {
            name: name.to_string(),
            category: String::new(),
            domain_role: domain,
        },
    )
    .await
    .unwrap()
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_checklist_defaults_unchecked(pool: PgPool) {
    let buddy = seed_buddy(&pool, "b@x.com", DomainRole::Frontend).await;
    seed_topic(&pool, "HTML", DomainRole::Frontend).await;
    seed_topic(&pool, "CSS", DomainRole::Frontend).await;

    let items = ProgressRepo::checklist_for_buddy(&pool, buddy.id, DomainRole::Frontend)
        .await
        .unwrap();
    assert_eq!(items.len(), 2);
    assert!(items.iter().all(|i| !i.checked));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_upsert_creates_then_updates_single_row(pool: PgPool) {
    let buddy = seed_buddy(&pool, "b@x.com", DomainRole::Frontend).await;
    let topic = seed_topic(&pool, "HTML", DomainRole::Frontend).await;

    // No row yet: the first toggle creates one.
    assert!(ProgressRepo::find(&pool, buddy.id, topic.id)
        .await
        .unwrap()
        .is_none());

    let first = ProgressRepo::upsert(&pool, buddy.id, topic.id, true)
        .await
        .unwrap();
    assert!(first.checked);
    assert!(first.completed_at.is_some());

    // Repeating the same value is a state no-op: same row, still one
    // checked topic in the checklist.
    let second = ProgressRepo::upsert(&pool, buddy.id, topic.id, true)
        .await
        .unwrap();
    assert_eq!(second.id, first.id);
    assert!(second.checked);

    let items = ProgressRepo::checklist_for_buddy(&pool, buddy.id, DomainRole::Frontend)
        .await
        .unwrap();
    assert_eq!(items.iter().filter(|i| i.checked).count(), 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_unchecking_clears_completed_at(pool: PgPool) {
    let buddy = seed_buddy(&pool, "b@x.com", DomainRole::Frontend).await;
    let topic = seed_topic(&pool, "HTML", DomainRole::Frontend).await;

    ProgressRepo::upsert(&pool, buddy.id, topic.id, true)
        .await
        .unwrap();

    // Unchecking discards the earlier timestamp entirely.
    let cleared = ProgressRepo::upsert(&pool, buddy.id, topic.id, false)
        .await
        .unwrap();
    assert!(!cleared.checked);
    assert!(cleared.completed_at.is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_checklist_is_domain_scoped(pool: PgPool) {
    let buddy = seed_buddy(&pool, "fe@x.com", DomainRole::Frontend).await;
    seed_topic(&pool, "HTML", DomainRole::Frontend).await;
    let backend_topic = seed_topic(&pool, "SQL", DomainRole::Backend).await;

    let items = ProgressRepo::checklist_for_buddy(&pool, buddy.id, DomainRole::Frontend)
        .await
        .unwrap();
    assert_eq!(items.len(), 1);
    assert!(items.iter().all(|i| i.topic_id != backend_topic.id));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_progress_rows_are_per_buddy(pool: PgPool) {
    let b1 = seed_buddy(&pool, "b1@x.com", DomainRole::Frontend).await;
    let b2 = seed_buddy(&pool, "b2@x.com", DomainRole::Frontend).await;
    let topic = seed_topic(&pool, "HTML", DomainRole::Frontend).await;

    ProgressRepo::upsert(&pool, b1.id, topic.id, true)
        .await
        .unwrap();

    let b2_items = ProgressRepo::checklist_for_buddy(&pool, b2.id, DomainRole::Frontend)
        .await
        .unwrap();
    assert!(b2_items.iter().all(|i| !i.checked));
}
