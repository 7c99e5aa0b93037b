//! Repository for the `stakeholders` table.

use maison_core::types::DbId;
use sqlx::PgPool;

use crate::models::stakeholder::{CreateStakeholder, Stakeholder, UpdateStakeholder};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, first_name, last_name, email, phone, relationship, created_at, updated_at";

/// Provides CRUD operations for stakeholders.
pub struct StakeholderRepo;

impl StakeholderRepo {
    /// Insert a new stakeholder, returning the created row.
    pub async fn create(
        pool: &PgPool,
        input: &CreateStakeholder,
    ) -> Result<Stakeholder, sqlx::Error> {
        let query = format!(
            "INSERT INTO stakeholders (first_name, last_name, email, phone, relationship) \
             VALUES ($1, $2, $3, $4, $5) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Stakeholder>(&query)
            .bind(&input.first_name)
            .bind(&input.last_name)
            .bind(&input.email)
            .bind(&input.phone)
            .bind(&input.relationship)
            .fetch_one(pool)
            .await
    }

    /// Find a stakeholder by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Stakeholder>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM stakeholders WHERE id = $1");
        sqlx::query_as::<_, Stakeholder>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all stakeholders by name.
    pub async fn list(pool: &PgPool) -> Result<Vec<Stakeholder>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM stakeholders ORDER BY last_name, first_name, id");
        sqlx::query_as::<_, Stakeholder>(&query)
            .fetch_all(pool)
            .await
    }

    /// Update a stakeholder. Only non-`None` fields in `input` are applied.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateStakeholder,
    ) -> Result<Option<Stakeholder>, sqlx::Error> {
        let query = format!(
            "UPDATE stakeholders SET
                first_name = COALESCE($2, first_name),
                last_name = COALESCE($3, last_name),
                email = COALESCE($4, email),
                phone = COALESCE($5, phone),
                relationship = COALESCE($6, relationship),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Stakeholder>(&query)
            .bind(id)
            .bind(&input.first_name)
            .bind(&input.last_name)
            .bind(&input.email)
            .bind(&input.phone)
            .bind(&input.relationship)
            .fetch_optional(pool)
            .await
    }

    /// Delete a stakeholder by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM stakeholders WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
