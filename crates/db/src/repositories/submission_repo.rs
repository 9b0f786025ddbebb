//! Repository for the `submissions` table.

use sqlx::PgPool;

use mentorhub_core::types::DbId;

use crate::models::submission::{CreateSubmission, Submission};

const COLUMNS: &str =
    "id, task_id, github_link, deployed_url, notes, feedback, created_at";

/// Provides append and read operations for task submissions.
/// Resubmission is allowed: many rows may exist per task.
pub struct SubmissionRepo;

impl SubmissionRepo {
    /// Record a submission against a task.
    pub async fn create(
        pool: &PgPool,
        task_id: DbId,
        input: &CreateSubmission,
    ) -> Result<Submission, sqlx::Error> {
        let query = format!(
            "INSERT INTO submissions (task_id, github_link, deployed_url, notes)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Submission>(&query)
            .bind(task_id)
            .bind(&input.github_link)
            .bind(&input.deployed_url)
            .bind(&input.notes)
            .fetch_one(pool)
            .await
    }

    /// All submissions for a task, ordered by creation time.
    pub async fn list_by_task(
        pool: &PgPool,
        task_id: DbId,
    ) -> Result<Vec<Submission>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM submissions WHERE task_id = $1 ORDER BY created_at ASC"
        );
        sqlx::query_as::<_, Submission>(&query)
            .bind(task_id)
            .fetch_all(pool)
            .await
    }

    /// Set the mentor's feedback on a submission.
    pub async fn set_feedback(
        pool: &PgPool,
        id: DbId,
        feedback: &str,
    ) -> Result<Option<Submission>, sqlx::Error> {
        let query = format!(
            "UPDATE submissions SET feedback = $2 WHERE id = $1 RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Submission>(&query)
            .bind(id)
            .bind(feedback)
            .fetch_optional(pool)
            .await
    }
}
