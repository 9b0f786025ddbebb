//! Task model, DTOs, and the derived-overdue rule.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use mentorhub_core::types::{DbId, Timestamp};

use crate::models::enums::TaskStatus;

/// Task row from the `tasks` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Task {
    pub id: DbId,
    pub mentor_id: DbId,
    pub buddy_id: DbId,
    pub title: String,
    pub description: String,
    pub status: TaskStatus,
    pub due_date: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Task {
    /// Effective status as seen by clients.
    ///
    /// `overdue` is never stored: an unfinished task past its due date
    /// reports `"overdue"`, while a task completed after its due date
    /// stays `"completed"`.
    pub fn effective_status(&self, now: Timestamp) -> &'static str {
        match (self.status, self.due_date) {
            (TaskStatus::Completed, _) => self.status.as_str(),
            (_, Some(due)) if due < now => "overdue",
            _ => self.status.as_str(),
        }
    }
}

/// DTO for creating a task.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateTask {
    pub mentor_id: DbId,
    pub buddy_id: DbId,
    #[validate(length(min = 1, max = 300))]
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub status: Option<TaskStatus>,
    pub due_date: Option<Timestamp>,
}

/// DTO for updating a task. All fields are optional.
///
/// `due_date` uses the double-`Option` pattern so a JSON `null` clears
/// the deadline (the task can no longer go overdue) while an absent
/// field leaves it unchanged.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct UpdateTask {
    #[validate(length(min = 1, max = 300))]
    pub title: Option<String>,
    pub description: Option<String>,
    pub status: Option<TaskStatus>,
    #[serde(default, with = "crate::models::double_option")]
    pub due_date: Option<Option<Timestamp>>,
}
