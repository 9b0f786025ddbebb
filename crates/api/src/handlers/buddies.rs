//! Handlers for the `/buddies` resource: CRUD, mentor assignment, and the
//! per-topic progress checklist.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};

use mentorhub_core::error::CoreError;
use mentorhub_core::progress::completion_percentage;
use mentorhub_core::types::{DbId, Timestamp};
use mentorhub_db::models::buddy::{BuddyDetail, CreateBuddy, UpdateBuddy};
use mentorhub_db::models::enums::{BuddyStatus, DomainRole};
use mentorhub_db::models::progress::{SetTopicProgress, TopicChecklistItem, TopicProgress};
use mentorhub_db::repositories::{BuddyRepo, ProgressRepo, TopicRepo};

use crate::error::{AppError, AppResult};
use crate::handlers::parse_filter;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Response types
// ---------------------------------------------------------------------------

/// Mentor detail nested inside a buddy response. Present only when the
/// buddy is assigned.
#[derive(Debug, Serialize)]
pub struct MentorSummary {
    pub id: DbId,
    pub user_id: DbId,
    pub name: String,
    pub email: String,
    pub expertise: String,
}

/// A buddy with its linked user fields and nested mentor detail.
#[derive(Debug, Serialize)]
pub struct BuddyResponse {
    pub id: DbId,
    pub user_id: DbId,
    pub name: String,
    pub email: String,
    pub domain_role: DomainRole,
    pub avatar_url: Option<String>,
    pub status: BuddyStatus,
    pub join_date: Timestamp,
    pub assigned_mentor_id: Option<DbId>,
    pub mentor: Option<MentorSummary>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl From<BuddyDetail> for BuddyResponse {
    fn from(detail: BuddyDetail) -> Self {
        // All mentor columns come from the same LEFT JOIN row: either all
        // present (assigned) or all NULL.
        let mentor = match (
            detail.assigned_mentor_id,
            detail.mentor_user_id,
            detail.mentor_name,
            detail.mentor_email,
            detail.mentor_expertise,
        ) {
            (Some(id), Some(user_id), Some(name), Some(email), Some(expertise)) => {
                Some(MentorSummary {
                    id,
                    user_id,
                    name,
                    email,
                    expertise,
                })
            }
            _ => None,
        };

        Self {
            id: detail.id,
            user_id: detail.user_id,
            name: detail.name,
            email: detail.email,
            domain_role: detail.domain_role,
            avatar_url: detail.avatar_url,
            status: detail.status,
            join_date: detail.join_date,
            assigned_mentor_id: detail.assigned_mentor_id,
            mentor,
            created_at: detail.created_at,
            updated_at: detail.updated_at,
        }
    }
}

/// The buddy's progress view: every topic in its domain plus the derived
/// completion percentage.
#[derive(Debug, Serialize)]
pub struct ProgressResponse {
    pub topics: Vec<TopicChecklistItem>,
    pub percentage: u8,
}

// ---------------------------------------------------------------------------
// Request types
// ---------------------------------------------------------------------------

/// Query params for `GET /buddies`.
#[derive(Debug, Deserialize)]
pub struct BuddyListQuery {
    /// Status filter; absent or `all` means no constraint.
    pub status: Option<String>,
    /// Domain filter; absent or `all` means no constraint.
    pub domain: Option<String>,
    /// Case-insensitive substring match on the linked user's name or email.
    pub search: Option<String>,
}

/// Body for `POST /buddies/{id}/assign`.
#[derive(Debug, Deserialize)]
pub struct AssignMentor {
    pub mentor_id: DbId,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/v1/buddies
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateBuddy>,
) -> AppResult<(StatusCode, Json<BuddyResponse>)> {
    let buddy = BuddyRepo::create(&state.pool, &input).await?;
    let detail = BuddyRepo::find_detailed(&state.pool, buddy.id)
        .await?
        .ok_or_else(|| AppError::InternalError("Created buddy row not readable".into()))?;
    Ok((StatusCode::CREATED, Json(detail.into())))
}

/// GET /api/v1/buddies
pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<BuddyListQuery>,
) -> AppResult<Json<Vec<BuddyResponse>>> {
    let status: Option<BuddyStatus> = parse_filter(query.status.as_deref(), "status")?;
    let domain: Option<DomainRole> = parse_filter(query.domain.as_deref(), "domain")?;
    let buddies = BuddyRepo::list(&state.pool, status, domain, query.search.as_deref()).await?;
    Ok(Json(buddies.into_iter().map(Into::into).collect()))
}

/// GET /api/v1/buddies/available
pub async fn list_available(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<BuddyResponse>>> {
    let buddies = BuddyRepo::list_available(&state.pool).await?;
    Ok(Json(buddies.into_iter().map(Into::into).collect()))
}

/// GET /api/v1/buddies/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<BuddyResponse>> {
    let detail = BuddyRepo::find_detailed(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Buddy",
            id,
        }))?;
    Ok(Json(detail.into()))
}

/// PUT /api/v1/buddies/{id}
///
/// Sending `"assigned_mentor_id": null` clears the assignment; omitting
/// the field leaves it unchanged.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateBuddy>,
) -> AppResult<Json<BuddyResponse>> {
    BuddyRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Buddy",
            id,
        }))?;
    let detail = BuddyRepo::find_detailed(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Buddy",
            id,
        }))?;
    Ok(Json(detail.into()))
}

/// DELETE /api/v1/buddies/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    let deleted = BuddyRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Buddy",
            id,
        }))
    }
}

/// POST /api/v1/buddies/{id}/assign
///
/// Atomic single-statement write: reassignment overwrites unconditionally.
/// A missing buddy or mentor is a 404 with no state mutated.
pub async fn assign(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<AssignMentor>,
) -> AppResult<Json<BuddyResponse>> {
    let assigned = BuddyRepo::assign_mentor(&state.pool, id, input.mentor_id)
        .await
        .map_err(|err| {
            if is_mentor_fk_violation(&err) {
                AppError::Core(CoreError::NotFound {
                    entity: "Mentor",
                    id: input.mentor_id,
                })
            } else {
                AppError::Database(err)
            }
        })?;
    assigned.ok_or(AppError::Core(CoreError::NotFound {
        entity: "Buddy",
        id,
    }))?;

    let detail = BuddyRepo::find_detailed(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Buddy",
            id,
        }))?;
    Ok(Json(detail.into()))
}

/// GET /api/v1/buddies/{id}/progress
///
/// An absent buddy yields the empty default (`topics: [], percentage: 0`)
/// rather than a 404: profiles may not be provisioned yet.
pub async fn get_progress(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<ProgressResponse>> {
    let Some(detail) = BuddyRepo::find_detailed(&state.pool, id).await? else {
        return Ok(Json(ProgressResponse {
            topics: Vec::new(),
            percentage: 0,
        }));
    };

    let topics =
        ProgressRepo::checklist_for_buddy(&state.pool, detail.id, detail.domain_role).await?;
    let checked = topics.iter().filter(|t| t.checked).count() as u32;
    let percentage = completion_percentage(checked, topics.len() as u32);

    Ok(Json(ProgressResponse { topics, percentage }))
}

/// PUT /api/v1/buddies/{id}/progress/{topic_id}
///
/// Upserts the (buddy, topic) progress record. The topic must belong to
/// the buddy's domain; cross-domain toggles are rejected.
pub async fn put_progress(
    State(state): State<AppState>,
    Path((id, topic_id)): Path<(DbId, DbId)>,
    Json(input): Json<SetTopicProgress>,
) -> AppResult<Json<TopicProgress>> {
    let buddy = BuddyRepo::find_detailed(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Buddy",
            id,
        }))?;
    let topic = TopicRepo::find_by_id(&state.pool, topic_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Topic",
            id: topic_id,
        }))?;

    if topic.domain_role != buddy.domain_role {
        return Err(AppError::Core(CoreError::Validation(format!(
            "Topic {topic_id} is outside the buddy's domain"
        ))));
    }

    let progress = ProgressRepo::upsert(&state.pool, id, topic_id, input.checked).await?;
    Ok(Json(progress))
}

/// Whether an error is the mentor-assignment foreign key violation,
/// i.e. the requested mentor does not exist.
fn is_mentor_fk_violation(err: &sqlx::Error) -> bool {
    matches!(
        err,
        sqlx::Error::Database(db_err)
            if db_err.code().as_deref() == Some("23503")
                && db_err.constraint() == Some("fk_buddies_assigned_mentor")
    )
}
