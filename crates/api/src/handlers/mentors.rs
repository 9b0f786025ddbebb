//! Handlers for the `/mentors` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use validator::Validate;

use mentorhub_core::error::CoreError;
use mentorhub_core::types::DbId;
use mentorhub_db::models::enums::DomainRole;
use mentorhub_db::models::mentor::{CreateMentor, MentorDetail, UpdateMentor};
use mentorhub_db::repositories::MentorRepo;

use crate::error::{AppError, AppResult};
use crate::handlers::parse_filter;
use crate::state::AppState;

/// Query params for `GET /mentors`.
#[derive(Debug, Deserialize)]
pub struct MentorListQuery {
    /// Domain filter; absent or `all` means no constraint.
    pub domain: Option<String>,
    /// Case-insensitive substring match on the linked user's name or email.
    pub search: Option<String>,
}

/// POST /api/v1/mentors
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateMentor>,
) -> AppResult<(StatusCode, Json<MentorDetail>)> {
    input.validate()?;
    let mentor = MentorRepo::create(&state.pool, &input).await?;
    let detail = MentorRepo::find_detailed(&state.pool, mentor.id)
        .await?
        .ok_or_else(|| AppError::InternalError("Created mentor row not readable".into()))?;
    Ok((StatusCode::CREATED, Json(detail)))
}

/// GET /api/v1/mentors
pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<MentorListQuery>,
) -> AppResult<Json<Vec<MentorDetail>>> {
    let domain: Option<DomainRole> = parse_filter(query.domain.as_deref(), "domain")?;
    let mentors = MentorRepo::list(&state.pool, domain, query.search.as_deref()).await?;
    Ok(Json(mentors))
}

/// GET /api/v1/mentors/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<MentorDetail>> {
    let detail = MentorRepo::find_detailed(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Mentor",
            id,
        }))?;
    Ok(Json(detail))
}

/// PUT /api/v1/mentors/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateMentor>,
) -> AppResult<Json<MentorDetail>> {
    input.validate()?;
    MentorRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Mentor",
            id,
        }))?;
    let detail = MentorRepo::find_detailed(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Mentor",
            id,
        }))?;
    Ok(Json(detail))
}

/// DELETE /api/v1/mentors/{id}
///
/// Deletion is rejected (409) while any buddy still references this
/// mentor; the foreign key's RESTRICT policy is the enforcement point.
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    let deleted = MentorRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Mentor",
            id,
        }))
    }
}
