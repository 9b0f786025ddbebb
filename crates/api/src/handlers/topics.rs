//! Handlers for the `/topics` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use validator::Validate;

use mentorhub_core::error::CoreError;
use mentorhub_core::types::DbId;
use mentorhub_db::models::enums::DomainRole;
use mentorhub_db::models::topic::{CreateTopic, Topic, UpdateTopic};
use mentorhub_db::repositories::TopicRepo;

use crate::error::{AppError, AppResult};
use crate::handlers::parse_filter;
use crate::state::AppState;

/// Query params for `GET /topics`.
#[derive(Debug, Deserialize)]
pub struct TopicListQuery {
    /// Domain filter; absent or `all` means no constraint.
    pub domain: Option<String>,
}

/// POST /api/v1/topics
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateTopic>,
) -> AppResult<(StatusCode, Json<Topic>)> {
    input.validate()?;
    let topic = TopicRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(topic)))
}

/// GET /api/v1/topics
pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<TopicListQuery>,
) -> AppResult<Json<Vec<Topic>>> {
    let domain: Option<DomainRole> = parse_filter(query.domain.as_deref(), "domain")?;
    let topics = TopicRepo::list(&state.pool, domain).await?;
    Ok(Json(topics))
}

/// GET /api/v1/topics/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Topic>> {
    let topic = TopicRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Topic",
            id,
        }))?;
    Ok(Json(topic))
}

/// PUT /api/v1/topics/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateTopic>,
) -> AppResult<Json<Topic>> {
    input.validate()?;
    let topic = TopicRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Topic",
            id,
        }))?;
    Ok(Json(topic))
}

/// DELETE /api/v1/topics/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    let deleted = TopicRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Topic",
            id,
        }))
    }
}
