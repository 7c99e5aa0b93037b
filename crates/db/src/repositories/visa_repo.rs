//! Repository for the `visas` table.

use chrono::NaiveDate;
use maison_core::types::DbId;
use sqlx::PgPool;

use crate::models::visa::{CreateVisa, UpdateVisa, Visa};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, person_type, person_id, country, visa_type, visa_number, \
    issue_date, expiry_date, notes, created_at, updated_at";

/// Provides CRUD operations for visa records.
pub struct VisaRepo;

impl VisaRepo {
    /// Insert a new visa record, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateVisa) -> Result<Visa, sqlx::Error> {
        let query = format!(
            "INSERT INTO visas \
                (person_type, person_id, country, visa_type, visa_number, issue_date, \
                 expiry_date, notes) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Visa>(&query)
            .bind(&input.person_type)
            .bind(input.person_id)
            .bind(&input.country)
            .bind(&input.visa_type)
            .bind(&input.visa_number)
            .bind(input.issue_date)
            .bind(input.expiry_date)
            .bind(&input.notes)
            .fetch_one(pool)
            .await
    }

    /// Find a visa record by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Visa>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM visas WHERE id = $1");
        sqlx::query_as::<_, Visa>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all visa records by expiry, soonest first, undated last.
    pub async fn list(pool: &PgPool) -> Result<Vec<Visa>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM visas ORDER BY expiry_date ASC NULLS LAST, id"
        );
        sqlx::query_as::<_, Visa>(&query).fetch_all(pool).await
    }

    /// List the visa records held by one person.
    pub async fn list_for_person(
        pool: &PgPool,
        person_type: &str,
        person_id: DbId,
    ) -> Result<Vec<Visa>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM visas WHERE person_type = $1 AND person_id = $2 \
             ORDER BY expiry_date ASC NULLS LAST, id"
        );
        sqlx::query_as::<_, Visa>(&query)
            .bind(person_type)
            .bind(person_id)
            .fetch_all(pool)
            .await
    }

    /// List visas expiring on or before `before`.
    pub async fn list_expiring(pool: &PgPool, before: NaiveDate) -> Result<Vec<Visa>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM visas \
             WHERE expiry_date IS NOT NULL AND expiry_date <= $1 \
             ORDER BY expiry_date ASC, id"
        );
        sqlx::query_as::<_, Visa>(&query)
            .bind(before)
            .fetch_all(pool)
            .await
    }

    /// Update a visa record. Only non-`None` fields in `input` are applied.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateVisa,
    ) -> Result<Option<Visa>, sqlx::Error> {
        let query = format!(
            "UPDATE visas SET
                country = COALESCE($2, country),
                visa_type = COALESCE($3, visa_type),
                visa_number = COALESCE($4, visa_number),
                issue_date = COALESCE($5, issue_date),
                expiry_date = COALESCE($6, expiry_date),
                notes = COALESCE($7, notes),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Visa>(&query)
            .bind(id)
            .bind(&input.country)
            .bind(&input.visa_type)
            .bind(&input.visa_number)
            .bind(input.issue_date)
            .bind(input.expiry_date)
            .bind(&input.notes)
            .fetch_optional(pool)
            .await
    }

    /// Delete a visa record by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM visas WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
