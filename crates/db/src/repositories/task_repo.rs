//! Repository for the `tasks` table.

use sqlx::PgPool;

use mentorhub_core::types::DbId;

use crate::models::enums::TaskStatus;
use crate::models::task::{CreateTask, Task, UpdateTask};

const COLUMNS: &str =
    "id, mentor_id, buddy_id, title, description, status, due_date, created_at, updated_at";

/// Status filter for task lists. `Overdue` selects on the derived
/// predicate (unfinished and past due), not a stored value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskStatusFilter {
    Stored(TaskStatus),
    Overdue,
}

/// Provides CRUD and filtered-list operations for tasks.
pub struct TaskRepo;

impl TaskRepo {
    /// Insert a new task, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateTask) -> Result<Task, sqlx::Error> {
        let query = format!(
            "INSERT INTO tasks (mentor_id, buddy_id, title, description, status, due_date)
             VALUES ($1, $2, $3, $4, COALESCE($5, 'pending'), $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Task>(&query)
            .bind(input.mentor_id)
            .bind(input.buddy_id)
            .bind(&input.title)
            .bind(&input.description)
            .bind(input.status)
            .bind(input.due_date)
            .fetch_one(pool)
            .await
    }

    /// Find a task by internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Task>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM tasks WHERE id = $1");
        sqlx::query_as::<_, Task>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List tasks. Filters AND-combine; `search` is a case-insensitive
    /// substring match on title or description.
    pub async fn list(
        pool: &PgPool,
        status: Option<TaskStatusFilter>,
        buddy_id: Option<DbId>,
        search: Option<&str>,
    ) -> Result<Vec<Task>, sqlx::Error> {
        let mut conditions: Vec<String> = Vec::new();
        let mut bind_idx: u32 = 1;

        match status {
            Some(TaskStatusFilter::Stored(_)) => {
                conditions.push(format!("status = ${bind_idx}"));
                bind_idx += 1;
            }
            Some(TaskStatusFilter::Overdue) => {
                // Derived view; no bind needed.
                conditions
                    .push("status <> 'completed' AND due_date IS NOT NULL AND due_date < NOW()".into());
            }
            None => {}
        }
        if buddy_id.is_some() {
            conditions.push(format!("buddy_id = ${bind_idx}"));
            bind_idx += 1;
        }
        if search.is_some() {
            conditions.push(format!(
                "(title ILIKE ${bind_idx} OR description ILIKE ${bind_idx})"
            ));
        }

        let where_clause = if conditions.is_empty() {
            String::new()
        } else {
            format!("WHERE {}", conditions.join(" AND "))
        };

        let query =
            format!("SELECT {COLUMNS} FROM tasks {where_clause} ORDER BY created_at DESC");

        let mut q = sqlx::query_as::<_, Task>(&query);
        if let Some(TaskStatusFilter::Stored(s)) = status {
            q = q.bind(s);
        }
        if let Some(b) = buddy_id {
            q = q.bind(b);
        }
        if let Some(term) = search {
            q = q.bind(format!("%{term}%"));
        }
        q.fetch_all(pool).await
    }

    /// Update a task. Only non-`None` fields are applied.
    ///
    /// `due_date` honours the double-`Option`: `Some(None)` clears the
    /// deadline, `None` leaves it unchanged.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateTask,
    ) -> Result<Option<Task>, sqlx::Error> {
        let query = format!(
            "UPDATE tasks SET
                title = COALESCE($2, title),
                description = COALESCE($3, description),
                status = COALESCE($4, status),
                due_date = CASE WHEN $5 THEN $6 ELSE due_date END,
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Task>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.description)
            .bind(input.status)
            .bind(input.due_date.is_some())
            .bind(input.due_date.flatten())
            .fetch_optional(pool)
            .await
    }

    /// Delete a task. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM tasks WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
