//! Repository for the `buddies` table, including mentor assignment.

use sqlx::PgPool;

use mentorhub_core::types::DbId;

use crate::models::buddy::{Buddy, BuddyDetail, CreateBuddy, UpdateBuddy};
use crate::models::enums::{BuddyStatus, DomainRole};

const COLUMNS: &str =
    "id, user_id, assigned_mentor_id, status, join_date, created_at, updated_at";

/// Columns for the buddy + user + mentor join, aliased for `query_as`.
/// The mentor side is LEFT JOINed: unassigned buddies exist.
const DETAIL_COLUMNS: &str = "b.id, b.user_id, b.assigned_mentor_id, b.status, b.join_date, \
     b.created_at, b.updated_at, \
     u.name, u.email, u.domain_role, u.avatar_url, \
     m.user_id AS mentor_user_id, mu.name AS mentor_name, \
     mu.email AS mentor_email, m.expertise AS mentor_expertise";

const DETAIL_JOINS: &str = "FROM buddies b
     JOIN users u ON u.id = b.user_id
     LEFT JOIN mentors m ON m.id = b.assigned_mentor_id
     LEFT JOIN users mu ON mu.id = m.user_id";

/// Provides CRUD and assignment operations for buddy profiles.
pub struct BuddyRepo;

impl BuddyRepo {
    /// Insert a new buddy profile, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateBuddy) -> Result<Buddy, sqlx::Error> {
        let query = format!(
            "INSERT INTO buddies (user_id, status, join_date)
             VALUES ($1, COALESCE($2, 'active'), COALESCE($3, NOW()))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Buddy>(&query)
            .bind(input.user_id)
            .bind(input.status)
            .bind(input.join_date)
            .fetch_one(pool)
            .await
    }

    /// Find a buddy by internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Buddy>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM buddies WHERE id = $1");
        sqlx::query_as::<_, Buddy>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a buddy joined with user and (when assigned) mentor detail.
    pub async fn find_detailed(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<BuddyDetail>, sqlx::Error> {
        let query = format!("SELECT {DETAIL_COLUMNS} {DETAIL_JOINS} WHERE b.id = $1");
        sqlx::query_as::<_, BuddyDetail>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List buddies with user/mentor detail.
    ///
    /// Filters AND-combine: `status` on the buddy row, `domain` on the
    /// linked user, `search` as a case-insensitive substring match on the
    /// linked user's name or email.
    pub async fn list(
        pool: &PgPool,
        status: Option<BuddyStatus>,
        domain: Option<DomainRole>,
        search: Option<&str>,
    ) -> Result<Vec<BuddyDetail>, sqlx::Error> {
        let mut conditions: Vec<String> = Vec::new();
        let mut bind_idx: u32 = 1;

        if status.is_some() {
            conditions.push(format!("b.status = ${bind_idx}"));
            bind_idx += 1;
        }
        if domain.is_some() {
            conditions.push(format!("u.domain_role = ${bind_idx}"));
            bind_idx += 1;
        }
        if search.is_some() {
            conditions.push(format!(
                "(u.name ILIKE ${bind_idx} OR u.email ILIKE ${bind_idx})"
            ));
        }

        let where_clause = if conditions.is_empty() {
            String::new()
        } else {
            format!("WHERE {}", conditions.join(" AND "))
        };

        let query = format!(
            "SELECT {DETAIL_COLUMNS} {DETAIL_JOINS} {where_clause} ORDER BY b.created_at DESC"
        );

        let mut q = sqlx::query_as::<_, BuddyDetail>(&query);
        if let Some(s) = status {
            q = q.bind(s);
        }
        if let Some(d) = domain {
            q = q.bind(d);
        }
        if let Some(term) = search {
            q = q.bind(format!("%{term}%"));
        }
        q.fetch_all(pool).await
    }

    /// Buddies available for assignment: active and currently unassigned.
    pub async fn list_available(pool: &PgPool) -> Result<Vec<BuddyDetail>, sqlx::Error> {
        let query = format!(
            "SELECT {DETAIL_COLUMNS} {DETAIL_JOINS}
             WHERE b.assigned_mentor_id IS NULL AND b.status = 'active'
             ORDER BY b.created_at DESC"
        );
        sqlx::query_as::<_, BuddyDetail>(&query)
            .fetch_all(pool)
            .await
    }

    /// Point a buddy at a mentor in one atomic statement.
    ///
    /// Reassignment overwrites unconditionally (last write wins under
    /// row-level atomicity; no read-then-write). `None` means the buddy
    /// does not exist; a missing mentor surfaces as a foreign-key
    /// violation on `fk_buddies_assigned_mentor`, leaving prior state
    /// untouched.
    pub async fn assign_mentor(
        pool: &PgPool,
        buddy_id: DbId,
        mentor_id: DbId,
    ) -> Result<Option<Buddy>, sqlx::Error> {
        let query = format!(
            "UPDATE buddies
             SET assigned_mentor_id = $2, updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        let buddy = sqlx::query_as::<_, Buddy>(&query)
            .bind(buddy_id)
            .bind(mentor_id)
            .fetch_optional(pool)
            .await?;
        if buddy.is_some() {
            tracing::debug!(buddy_id, mentor_id, "Mentor assigned");
        }
        Ok(buddy)
    }

    /// Update a buddy profile.
    ///
    /// `assigned_mentor_id` honours the double-`Option`: `Some(None)`
    /// clears the assignment (the generic unassign path), `None` leaves
    /// it unchanged.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateBuddy,
    ) -> Result<Option<Buddy>, sqlx::Error> {
        let query = format!(
            "UPDATE buddies SET
                status = COALESCE($2, status),
                join_date = COALESCE($3, join_date),
                assigned_mentor_id = CASE WHEN $4 THEN $5 ELSE assigned_mentor_id END,
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Buddy>(&query)
            .bind(id)
            .bind(input.status)
            .bind(input.join_date)
            .bind(input.assigned_mentor_id.is_some())
            .bind(input.assigned_mentor_id.flatten())
            .fetch_optional(pool)
            .await
    }

    /// Delete a buddy. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM buddies WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
