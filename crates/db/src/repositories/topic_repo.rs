//! Repository for the `topics` table.

use sqlx::PgPool;

use mentorhub_core::types::DbId;

use crate::models::enums::DomainRole;
use crate::models::topic::{CreateTopic, Topic, UpdateTopic};

const COLUMNS: &str = "id, name, category, domain_role, created_at";

/// Provides CRUD operations for topics.
///
/// Lists are ordered by `id ASC` (insertion order): that order is the
/// denominator set's stable presentation order for progress views.
pub struct TopicRepo;

impl TopicRepo {
    /// Insert a new topic, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateTopic) -> Result<Topic, sqlx::Error> {
        let query = format!(
            "INSERT INTO topics (name, category, domain_role)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Topic>(&query)
            .bind(&input.name)
            .bind(&input.category)
            .bind(input.domain_role)
            .fetch_one(pool)
            .await
    }

    /// Find a topic by internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Topic>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM topics WHERE id = $1");
        sqlx::query_as::<_, Topic>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List topics, optionally scoped to one domain.
    pub async fn list(
        pool: &PgPool,
        domain: Option<DomainRole>,
    ) -> Result<Vec<Topic>, sqlx::Error> {
        match domain {
            Some(d) => {
                let query = format!(
                    "SELECT {COLUMNS} FROM topics WHERE domain_role = $1 ORDER BY id ASC"
                );
                sqlx::query_as::<_, Topic>(&query).bind(d).fetch_all(pool).await
            }
            None => {
                let query = format!("SELECT {COLUMNS} FROM topics ORDER BY id ASC");
                sqlx::query_as::<_, Topic>(&query).fetch_all(pool).await
            }
        }
    }

    /// Update a topic. Only non-`None` fields are applied.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateTopic,
    ) -> Result<Option<Topic>, sqlx::Error> {
        let query = format!(
            "UPDATE topics SET
                name = COALESCE($2, name),
                category = COALESCE($3, category),
                domain_role = COALESCE($4, domain_role)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Topic>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.category)
            .bind(input.domain_role)
            .fetch_optional(pool)
            .await
    }

    /// Delete a topic. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM topics WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
