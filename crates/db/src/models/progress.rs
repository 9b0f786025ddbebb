//! Per-buddy topic completion records.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use mentorhub_core::types::{DbId, Timestamp};

/// Row from the `topic_progress` table.
///
/// Invariant (enforced by the upsert): `completed_at` is non-null iff
/// `checked` was true at the time of the last write.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct TopicProgress {
    pub id: DbId,
    pub buddy_id: DbId,
    pub topic_id: DbId,
    pub checked: bool,
    pub completed_at: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// One checklist line of a buddy's progress view: every topic in the
/// buddy's domain, with `checked` defaulting to false when no progress
/// row exists yet.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct TopicChecklistItem {
    pub topic_id: DbId,
    pub name: String,
    pub checked: bool,
}

/// DTO for the progress toggle endpoint.
#[derive(Debug, Deserialize)]
pub struct SetTopicProgress {
    pub checked: bool,
}
