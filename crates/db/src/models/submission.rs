//! Task submission model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use mentorhub_core::types::{DbId, Timestamp};

/// Submission row from the `submissions` table. Append-only history;
/// only `feedback` is mutable after creation.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Submission {
    pub id: DbId,
    pub task_id: DbId,
    pub github_link: String,
    pub deployed_url: Option<String>,
    pub notes: Option<String>,
    pub feedback: Option<String>,
    pub created_at: Timestamp,
}

/// DTO for recording a submission against a task.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateSubmission {
    #[validate(url)]
    pub github_link: String,
    #[validate(url)]
    pub deployed_url: Option<String>,
    pub notes: Option<String>,
}

/// DTO for the mentor's feedback update.
#[derive(Debug, Deserialize)]
pub struct SetFeedback {
    pub feedback: String,
}
