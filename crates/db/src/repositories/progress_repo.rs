//! Repository for per-buddy topic progress.

use sqlx::PgPool;

use mentorhub_core::types::DbId;

use crate::models::progress::{TopicChecklistItem, TopicProgress};

const COLUMNS: &str =
    "id, buddy_id, topic_id, checked, completed_at, created_at, updated_at";

/// Provides the progress checklist read and the atomic toggle upsert.
pub struct ProgressRepo;

impl ProgressRepo {
    /// The buddy's checklist: every topic in the given domain (fixed
    /// denominator, `id ASC`), LEFT JOINed with the buddy's progress
    /// rows. Topics without a row report `checked = false`.
    pub async fn checklist_for_buddy(
        pool: &PgPool,
        buddy_id: DbId,
        domain: crate::models::enums::DomainRole,
    ) -> Result<Vec<TopicChecklistItem>, sqlx::Error> {
        sqlx::query_as::<_, TopicChecklistItem>(
            "SELECT t.id AS topic_id, t.name, COALESCE(tp.checked, FALSE) AS checked
             FROM topics t
             LEFT JOIN topic_progress tp ON tp.topic_id = t.id AND tp.buddy_id = $1
             WHERE t.domain_role = $2
             ORDER BY t.id ASC",
        )
        .bind(buddy_id)
        .bind(domain)
        .fetch_all(pool)
        .await
    }

    /// Atomically set a topic's checked state for a buddy.
    ///
    /// Single `INSERT … ON CONFLICT` guarded by
    /// `uq_topic_progress_buddy_topic`, so concurrent toggles of the same
    /// pair can never create duplicate rows. `completed_at` is set to
    /// `NOW()` on every `true` write (a later check discards the earlier
    /// timestamp) and cleared on `false`.
    pub async fn upsert(
        pool: &PgPool,
        buddy_id: DbId,
        topic_id: DbId,
        checked: bool,
    ) -> Result<TopicProgress, sqlx::Error> {
        let query = format!(
            "INSERT INTO topic_progress (buddy_id, topic_id, checked, completed_at)
             VALUES ($1, $2, $3, CASE WHEN $3 THEN NOW() ELSE NULL END)
             ON CONFLICT ON CONSTRAINT uq_topic_progress_buddy_topic DO UPDATE SET
                checked = EXCLUDED.checked,
                completed_at = CASE WHEN EXCLUDED.checked THEN NOW() ELSE NULL END,
                updated_at = NOW()
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, TopicProgress>(&query)
            .bind(buddy_id)
            .bind(topic_id)
            .bind(checked)
            .fetch_one(pool)
            .await
    }

    /// Find the progress row for one (buddy, topic) pair, if any.
    pub async fn find(
        pool: &PgPool,
        buddy_id: DbId,
        topic_id: DbId,
    ) -> Result<Option<TopicProgress>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM topic_progress WHERE buddy_id = $1 AND topic_id = $2"
        );
        sqlx::query_as::<_, TopicProgress>(&query)
            .bind(buddy_id)
            .bind(topic_id)
            .fetch_optional(pool)
            .await
    }
}
