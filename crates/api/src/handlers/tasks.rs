//! Handlers for the `/tasks` resource and its submissions.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use validator::Validate;

use mentorhub_core::error::CoreError;
use mentorhub_core::types::{DbId, Timestamp};
use mentorhub_db::models::enums::TaskStatus;
use mentorhub_db::models::submission::{CreateSubmission, SetFeedback, Submission};
use mentorhub_db::models::task::{CreateTask, Task, UpdateTask};
use mentorhub_db::repositories::task_repo::TaskStatusFilter;
use mentorhub_db::repositories::{SubmissionRepo, TaskRepo};

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// A task as seen by clients. `status` is the stored value and round-trips
/// through `PUT`; `effective_status` is the derived view, reporting
/// `"overdue"` for an unfinished task past its due date.
#[derive(Debug, Serialize)]
pub struct TaskResponse {
    pub id: DbId,
    pub mentor_id: DbId,
    pub buddy_id: DbId,
    pub title: String,
    pub description: String,
    pub status: TaskStatus,
    pub effective_status: &'static str,
    pub due_date: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl TaskResponse {
    fn new(task: Task, now: Timestamp) -> Self {
        let effective_status = task.effective_status(now);
        Self {
            id: task.id,
            mentor_id: task.mentor_id,
            buddy_id: task.buddy_id,
            title: task.title,
            description: task.description,
            status: task.status,
            effective_status,
            due_date: task.due_date,
            created_at: task.created_at,
            updated_at: task.updated_at,
        }
    }
}

/// Query params for `GET /tasks`.
#[derive(Debug, Deserialize)]
pub struct TaskListQuery {
    /// Status filter: a stored status, `overdue` (derived), or `all`.
    pub status: Option<String>,
    /// Filter by assigned buddy.
    pub buddy_id: Option<DbId>,
    /// Case-insensitive substring match on title or description.
    pub search: Option<String>,
}

/// Parse the task status filter. `overdue` selects the derived predicate
/// rather than a stored value.
fn parse_status_filter(value: Option<&str>) -> AppResult<Option<TaskStatusFilter>> {
    match value {
        None | Some("all") => Ok(None),
        Some("overdue") => Ok(Some(TaskStatusFilter::Overdue)),
        Some(raw) => raw
            .parse()
            .map(|s| Some(TaskStatusFilter::Stored(s)))
            .map_err(|_| {
                AppError::Core(CoreError::Validation(format!(
                    "Unknown status filter value: {raw}"
                )))
            }),
    }
}

/// POST /api/v1/tasks
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateTask>,
) -> AppResult<(StatusCode, Json<TaskResponse>)> {
    input.validate()?;
    let task = TaskRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(TaskResponse::new(task, Utc::now()))))
}

/// GET /api/v1/tasks
pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<TaskListQuery>,
) -> AppResult<Json<Vec<TaskResponse>>> {
    let status = parse_status_filter(query.status.as_deref())?;
    let tasks =
        TaskRepo::list(&state.pool, status, query.buddy_id, query.search.as_deref()).await?;
    let now = Utc::now();
    Ok(Json(
        tasks.into_iter().map(|t| TaskResponse::new(t, now)).collect(),
    ))
}

/// GET /api/v1/tasks/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<TaskResponse>> {
    let task = TaskRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Task", id }))?;
    Ok(Json(TaskResponse::new(task, Utc::now())))
}

/// PUT /api/v1/tasks/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateTask>,
) -> AppResult<Json<TaskResponse>> {
    input.validate()?;
    let task = TaskRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Task", id }))?;
    Ok(Json(TaskResponse::new(task, Utc::now())))
}

/// DELETE /api/v1/tasks/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    let deleted = TaskRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound { entity: "Task", id }))
    }
}

/// POST /api/v1/tasks/{id}/submissions
pub async fn create_submission(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<CreateSubmission>,
) -> AppResult<(StatusCode, Json<Submission>)> {
    input.validate()?;
    TaskRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Task", id }))?;
    let submission = SubmissionRepo::create(&state.pool, id, &input).await?;
    Ok((StatusCode::CREATED, Json(submission)))
}

/// GET /api/v1/tasks/{id}/submissions
pub async fn list_submissions(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Vec<Submission>>> {
    TaskRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Task", id }))?;
    let submissions = SubmissionRepo::list_by_task(&state.pool, id).await?;
    Ok(Json(submissions))
}

/// PUT /api/v1/submissions/{id}/feedback
pub async fn set_feedback(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<SetFeedback>,
) -> AppResult<Json<Submission>> {
    let submission = SubmissionRepo::set_feedback(&state.pool, id, &input.feedback)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Submission",
            id,
        }))?;
    Ok(Json(submission))
}
