//! Buddy profile model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use mentorhub_core::types::{DbId, Timestamp};

use crate::models::enums::{BuddyStatus, DomainRole};

/// Buddy row from the `buddies` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Buddy {
    pub id: DbId,
    pub user_id: DbId,
    pub assigned_mentor_id: Option<DbId>,
    pub status: BuddyStatus,
    pub join_date: Timestamp,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Buddy joined with its linked user and (if assigned) mentor detail.
///
/// Flat row shape for `query_as`; the API layer nests the mentor fields.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct BuddyDetail {
    pub id: DbId,
    pub user_id: DbId,
    pub assigned_mentor_id: Option<DbId>,
    pub status: BuddyStatus,
    pub join_date: Timestamp,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    pub name: String,
    pub email: String,
    pub domain_role: DomainRole,
    pub avatar_url: Option<String>,
    pub mentor_user_id: Option<DbId>,
    pub mentor_name: Option<String>,
    pub mentor_email: Option<String>,
    pub mentor_expertise: Option<String>,
}

/// DTO for creating a buddy profile.
#[derive(Debug, Deserialize)]
pub struct CreateBuddy {
    pub user_id: DbId,
    pub status: Option<BuddyStatus>,
    pub join_date: Option<Timestamp>,
}

/// DTO for updating a buddy profile.
///
/// `assigned_mentor_id` uses the double-`Option` pattern so a JSON `null`
/// explicitly clears the assignment while an absent field leaves it alone.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateBuddy {
    pub status: Option<BuddyStatus>,
    pub join_date: Option<Timestamp>,
    #[serde(default, with = "crate::models::double_option")]
    pub assigned_mentor_id: Option<Option<DbId>>,
}
