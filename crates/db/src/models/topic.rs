//! Topic model and DTOs. Topics are domain-global learning items.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use mentorhub_core::types::{DbId, Timestamp};

use crate::models::enums::DomainRole;

/// Topic row from the `topics` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Topic {
    pub id: DbId,
    pub name: String,
    pub category: String,
    pub domain_role: DomainRole,
    pub created_at: Timestamp,
}

/// DTO for creating a topic.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateTopic {
    #[validate(length(min = 1, max = 200))]
    pub name: String,
    #[serde(default)]
    pub category: String,
    pub domain_role: DomainRole,
}

/// DTO for updating a topic. All fields are optional.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateTopic {
    #[validate(length(min = 1, max = 200))]
    pub name: Option<String>,
    pub category: Option<String>,
    pub domain_role: Option<DomainRole>,
}
