//! Repository for the `employers` table.

use maison_core::types::DbId;
use sqlx::PgPool;

use crate::models::employer::{CreateEmployer, Employer, UpdateEmployer};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, company_name, contact_email, contact_phone, address, created_at, updated_at";

/// Provides CRUD operations for employers.
pub struct EmployerRepo;

impl EmployerRepo {
    /// Insert a new employer, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateEmployer) -> Result<Employer, sqlx::Error> {
        let query = format!(
            "INSERT INTO employers (company_name, contact_email, contact_phone, address) \
             VALUES ($1, $2, $3, $4) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Employer>(&query)
            .bind(&input.company_name)
            .bind(&input.contact_email)
            .bind(&input.contact_phone)
            .bind(&input.address)
            .fetch_one(pool)
            .await
    }

    /// Find an employer by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Employer>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM employers WHERE id = $1");
        sqlx::query_as::<_, Employer>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all employers by company name.
    pub async fn list(pool: &PgPool) -> Result<Vec<Employer>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM employers ORDER BY company_name, id");
        sqlx::query_as::<_, Employer>(&query).fetch_all(pool).await
    }

    /// Update an employer. Only non-`None` fields in `input` are applied.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateEmployer,
    ) -> Result<Option<Employer>, sqlx::Error> {
        let query = format!(
            "UPDATE employers SET
                company_name = COALESCE($2, company_name),
                contact_email = COALESCE($3, contact_email),
                contact_phone = COALESCE($4, contact_phone),
                address = COALESCE($5, address),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Employer>(&query)
            .bind(id)
            .bind(&input.company_name)
            .bind(&input.contact_email)
            .bind(&input.contact_phone)
            .bind(&input.address)
            .fetch_optional(pool)
            .await
    }

    /// Delete an employer by ID. Family members cascade. Returns `true` if
    /// a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM employers WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
