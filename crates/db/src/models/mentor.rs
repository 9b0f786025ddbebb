//! Mentor profile model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use mentorhub_core::types::{DbId, Timestamp};

use crate::models::enums::DomainRole;

/// Mentor row from the `mentors` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Mentor {
    pub id: DbId,
    pub user_id: DbId,
    pub expertise: String,
    pub experience: String,
    pub response_rate: i16,
    pub is_active: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Mentor joined with its linked user, for list/detail endpoints.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct MentorDetail {
    pub id: DbId,
    pub user_id: DbId,
    pub expertise: String,
    pub experience: String,
    pub response_rate: i16,
    pub is_active: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    pub name: String,
    pub email: String,
    pub domain_role: DomainRole,
    pub avatar_url: Option<String>,
}

/// DTO for creating a mentor profile.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateMentor {
    pub user_id: DbId,
    #[validate(length(min = 1, max = 500))]
    pub expertise: String,
    #[validate(length(max = 2000))]
    #[serde(default)]
    pub experience: String,
    #[validate(range(min = 0, max = 100))]
    pub response_rate: Option<i16>,
    pub is_active: Option<bool>,
}

/// DTO for updating a mentor profile. All fields are optional.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateMentor {
    #[validate(length(min = 1, max = 500))]
    pub expertise: Option<String>,
    #[validate(length(max = 2000))]
    pub experience: Option<String>,
    #[validate(range(min = 0, max = 100))]
    pub response_rate: Option<i16>,
    pub is_active: Option<bool>,
}
