//! Repository for the `task_helpers` table.

use maison_core::types::DbId;
use sqlx::PgPool;

use crate::models::task_helper::{CreateTaskHelper, TaskHelper, UpdateTaskHelper};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, full_name, email, phone, specialty, created_at, updated_at";

/// Provides CRUD operations for task helpers.
pub struct TaskHelperRepo;

impl TaskHelperRepo {
    /// Insert a new task helper, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateTaskHelper) -> Result<TaskHelper, sqlx::Error> {
        let query = format!(
            "INSERT INTO task_helpers (full_name, email, phone, specialty) \
             VALUES ($1, $2, $3, $4) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, TaskHelper>(&query)
            .bind(&input.full_name)
            .bind(&input.email)
            .bind(&input.phone)
            .bind(&input.specialty)
            .fetch_one(pool)
            .await
    }

    /// Find a task helper by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<TaskHelper>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM task_helpers WHERE id = $1");
        sqlx::query_as::<_, TaskHelper>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all task helpers by name.
    pub async fn list(pool: &PgPool) -> Result<Vec<TaskHelper>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM task_helpers ORDER BY full_name, id");
        sqlx::query_as::<_, TaskHelper>(&query)
            .fetch_all(pool)
            .await
    }

    /// Update a task helper. Only non-`None` fields in `input` are applied.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateTaskHelper,
    ) -> Result<Option<TaskHelper>, sqlx::Error> {
        let query = format!(
            "UPDATE task_helpers SET
                full_name = COALESCE($2, full_name),
                email = COALESCE($3, email),
                phone = COALESCE($4, phone),
                specialty = COALESCE($5, specialty),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, TaskHelper>(&query)
            .bind(id)
            .bind(&input.full_name)
            .bind(&input.email)
            .bind(&input.phone)
            .bind(&input.specialty)
            .fetch_optional(pool)
            .await
    }

    /// Delete a task helper by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM task_helpers WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
