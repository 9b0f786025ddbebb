//! User entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use mentorhub_core::types::{DbId, Timestamp};

use crate::models::enums::{DomainRole, UserRole};

/// Full user row from the `users` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct User {
    pub id: DbId,
    pub name: String,
    pub email: String,
    pub role: UserRole,
    pub domain_role: DomainRole,
    pub avatar_url: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new user.
///
/// Validation is uniformly strict: a malformed email or an unknown
/// role/domain value is rejected, never silently defaulted.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateUser {
    #[validate(length(min = 1, max = 200))]
    pub name: String,
    #[validate(email)]
    pub email: String,
    pub role: UserRole,
    pub domain_role: DomainRole,
    pub avatar_url: Option<String>,
}

/// DTO for updating an existing user. All fields are optional.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateUser {
    #[validate(length(min = 1, max = 200))]
    pub name: Option<String>,
    #[validate(email)]
    pub email: Option<String>,
    pub role: Option<UserRole>,
    pub domain_role: Option<DomainRole>,
    pub avatar_url: Option<String>,
}
