//! Integration tests for the one-mentor-per-buddy assignment invariant.

use sqlx::PgPool;

use mentorhub_db::models::buddy::CreateBuddy;
use mentorhub_db::models::enums::{BuddyStatus, DomainRole, UserRole};
use mentorhub_db::models::mentor::CreateMentor;
use mentorhub_db::models::user::CreateUser;
use mentorhub_db::repositories::{BuddyRepo, MentorRepo, UserRepo};

async fn seed_mentor(pool: &PgPool, email: &str) -> mentorhub_db::models::mentor::Mentor {
    let user = UserRepo::create(
        pool,
        &CreateUser {
            name: format!("Mentor {email}"),
            email: email.to_string(),
            role: UserRole::Mentor,
            domain_role: DomainRole::Frontend,
            avatar_url: None,
        },
    )
    .await
    .unwrap();
    MentorRepo::create(
        pool,
        &CreateMentor {
            user_id: user.id,
            expertise: "React".to_string(),
            experience: String::new(),
            response_rate: None,
            is_active: None,
        },
    )
    .await
    .unwrap()
}

async fn seed_buddy(
    pool: &PgPool,
    email: &str,
    status: Option<BuddyStatus>,
) -> mentorhub_db::models::buddy::Buddy {
    let user = UserRepo::create(
        pool,
        &CreateUser {
            name: format!("Buddy {email}"),
            email: email.to_string(),
            role: UserRole::Buddy,
            domain_role: DomainRole::Frontend,
            avatar_url: None,
        },
    )
    .await
    .unwrap();
    BuddyRepo::create(
        pool,
        &CreateBuddy {
            user_id: user.id,
            status,
            join_date: None,
        },
    )
    .await
    .unwrap()
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_reassignment_overwrites(pool: PgPool) {
    let m1 = seed_mentor(&pool, "m1@x.com").await;
    let m2 = seed_mentor(&pool, "m2@x.com").await;
    let buddy = seed_buddy(&pool, "b@x.com", None).await;

    BuddyRepo::assign_mentor(&pool, buddy.id, m1.id)
        .await
        .unwrap()
        .unwrap();
    let after = BuddyRepo::assign_mentor(&pool, buddy.id, m2.id)
        .await
        .unwrap()
        .unwrap();

    // Overwrites, never appends.
    assert_eq!(after.assigned_mentor_id, Some(m2.id));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_assign_missing_buddy_returns_none(pool: PgPool) {
    let mentor = seed_mentor(&pool, "m@x.com").await;
    let result = BuddyRepo::assign_mentor(&pool, 999_999, mentor.id)
        .await
        .unwrap();
    assert!(result.is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_assign_missing_mentor_fails_closed(pool: PgPool) {
    let mentor = seed_mentor(&pool, "m@x.com").await;
    let buddy = seed_buddy(&pool, "b@x.com", None).await;

    BuddyRepo::assign_mentor(&pool, buddy.id, mentor.id)
        .await
        .unwrap()
        .unwrap();

    // FK violation on the missing mentor: no partial state mutation.
    let result = BuddyRepo::assign_mentor(&pool, buddy.id, 999_999).await;
    assert!(result.is_err(), "Missing mentor should fail");

    let unchanged = BuddyRepo::find_by_id(&pool, buddy.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(unchanged.assigned_mentor_id, Some(mentor.id));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_available_buddies_are_active_and_unassigned(pool: PgPool) {
    let mentor = seed_mentor(&pool, "m@x.com").await;
    let assigned = seed_buddy(&pool, "assigned@x.com", None).await;
    let inactive = seed_buddy(&pool, "inactive@x.com", Some(BuddyStatus::Inactive)).await;
    let free = seed_buddy(&pool, "free@x.com", None).await;

    BuddyRepo::assign_mentor(&pool, assigned.id, mentor.id)
        .await
        .unwrap()
        .unwrap();

    let available = BuddyRepo::list_available(&pool).await.unwrap();
    let ids: Vec<_> = available.iter().map(|b| b.id).collect();
    assert!(ids.contains(&free.id));
    assert!(!ids.contains(&assigned.id));
    assert!(!ids.contains(&inactive.id));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_detail_includes_nested_mentor_fields(pool: PgPool) {
    let mentor = seed_mentor(&pool, "m@x.com").await;
    let buddy = seed_buddy(&pool, "b@x.com", None).await;

    // Unassigned: mentor columns come back NULL.
    let detail = BuddyRepo::find_detailed(&pool, buddy.id)
        .await
        .unwrap()
        .unwrap();
    assert!(detail.mentor_name.is_none());

    BuddyRepo::assign_mentor(&pool, buddy.id, mentor.id)
        .await
        .unwrap()
        .unwrap();

    let detail = BuddyRepo::find_detailed(&pool, buddy.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(detail.assigned_mentor_id, Some(mentor.id));
    assert_eq!(detail.mentor_email.as_deref(), Some("m@x.com"));
    assert_eq!(detail.mentor_expertise.as_deref(), Some("React"));
}
