//! Repository for the `mentors` table.

use sqlx::PgPool;

use mentorhub_core::types::DbId;

use crate::models::enums::DomainRole;
use crate::models::mentor::{CreateMentor, Mentor, MentorDetail, UpdateMentor};

const COLUMNS: &str =
    "id, user_id, expertise, experience, response_rate, is_active, created_at, updated_at";

/// Columns for the mentor + user join, qualified and aliased for `query_as`.
const DETAIL_COLUMNS: &str = "m.id, m.user_id, m.expertise, m.experience, m.response_rate, \
     m.is_active, m.created_at, m.updated_at, \
     u.name, u.email, u.domain_role, u.avatar_url";

/// Provides CRUD operations for mentor profiles.
pub struct MentorRepo;

impl MentorRepo {
    /// Insert a new mentor profile, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateMentor) -> Result<Mentor, sqlx::Error> {
        let query = format!(
            "INSERT INTO mentors (user_id, expertise, experience, response_rate, is_active)
             VALUES ($1, $2, $3, COALESCE($4, 100::smallint), COALESCE($5, TRUE))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Mentor>(&query)
            .bind(input.user_id)
            .bind(&input.expertise)
            .bind(&input.experience)
            .bind(input.response_rate)
            .bind(input.is_active)
            .fetch_one(pool)
            .await
    }

    /// Find a mentor by internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Mentor>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM mentors WHERE id = $1");
        sqlx::query_as::<_, Mentor>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a mentor joined with its linked user.
    pub async fn find_detailed(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<MentorDetail>, sqlx::Error> {
        let query = format!(
            "SELECT {DETAIL_COLUMNS}
             FROM mentors m
             JOIN users u ON u.id = m.user_id
             WHERE m.id = $1"
        );
        sqlx::query_as::<_, MentorDetail>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List mentors joined with user detail.
    ///
    /// Filters AND-combine: `domain` matches the linked user's domain,
    /// `search` is a case-insensitive substring match on name or email.
    pub async fn list(
        pool: &PgPool,
        domain: Option<DomainRole>,
        search: Option<&str>,
    ) -> Result<Vec<MentorDetail>, sqlx::Error> {
        let mut conditions: Vec<String> = Vec::new();
        let mut bind_idx: u32 = 1;

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
            "SELECT {DETAIL_COLUMNS}
             FROM mentors m
             JOIN users u ON u.id = m.user_id
             {where_clause}
             ORDER BY m.created_at DESC"
        );

        let mut q = sqlx::query_as::<_, MentorDetail>(&query);
        if let Some(d) = domain {
            q = q.bind(d);
        }
        if let Some(term) = search {
            q = q.bind(format!("%{term}%"));
        }
        q.fetch_all(pool).await
    }

    /// Update a mentor profile. Only non-`None` fields are applied.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateMentor,
    ) -> Result<Option<Mentor>, sqlx::Error> {
        let query = format!(
            "UPDATE mentors SET
                expertise = COALESCE($2, expertise),
                experience = COALESCE($3, experience),
                response_rate = COALESCE($4, response_rate),
                is_active = COALESCE($5, is_active),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Mentor>(&query)
            .bind(id)
            .bind(&input.expertise)
            .bind(&input.experience)
            .bind(input.response_rate)
            .bind(input.is_active)
            .fetch_optional(pool)
            .await
    }

    /// Delete a mentor. Returns `true` if a row was removed.
    ///
    /// Fails with a foreign-key violation on `fk_buddies_assigned_mentor`
    /// while any buddy still references this mentor (RESTRICT policy);
    /// the API layer maps that to a 409.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM mentors WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
