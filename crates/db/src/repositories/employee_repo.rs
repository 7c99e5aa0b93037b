//! Repository for the `employees` table.

use maison_core::types::DbId;
use sqlx::PgPool;

use crate::models::employee::{CreateEmployee, Employee, UpdateEmployee};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, first_name, last_name, full_name, role_title, email, phone, \
    nationality, date_of_birth, notes, created_at, updated_at";

/// Provides CRUD operations for employees.
pub struct EmployeeRepo;

impl EmployeeRepo {
    /// Insert a new employee, returning the created row.
    ///
    /// If `full_name` is `None`, defaults to `first_name last_name`.
    pub async fn create(pool: &PgPool, input: &CreateEmployee) -> Result<Employee, sqlx::Error> {
        let query = format!(
            "INSERT INTO employees \
                (first_name, last_name, full_name, role_title, email, phone, nationality, \
                 date_of_birth, notes) \
             VALUES ($1, $2, COALESCE($3, $1 || ' ' || $2), $4, $5, $6, $7, $8, $9) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Employee>(&query)
            .bind(&input.first_name)
            .bind(&input.last_name)
            .bind(&input.full_name)
            .bind(&input.role_title)
            .bind(&input.email)
            .bind(&input.phone)
            .bind(&input.nationality)
            .bind(input.date_of_birth)
            .bind(&input.notes)
            .fetch_one(pool)
            .await
    }

    /// Find an employee by its internal ID. Excludes soft-deleted rows.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Employee>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM employees WHERE id = $1 AND deleted_at IS NULL");
        sqlx::query_as::<_, Employee>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all employees by name. Excludes soft-deleted rows.
    pub async fn list(pool: &PgPool) -> Result<Vec<Employee>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM employees WHERE deleted_at IS NULL ORDER BY full_name, id"
        );
        sqlx::query_as::<_, Employee>(&query).fetch_all(pool).await
    }

    /// Update an employee. Only non-`None` fields in `input` are applied.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateEmployee,
    ) -> Result<Option<Employee>, sqlx::Error> {
        let query = format!(
            "UPDATE employees SET
                first_name = COALESCE($2, first_name),
                last_name = COALESCE($3, last_name),
                full_name = COALESCE($4, full_name),
                role_title = COALESCE($5, role_title),
                email = COALESCE($6, email),
                phone = COALESCE($7, phone),
                nationality = COALESCE($8, nationality),
                date_of_birth = COALESCE($9, date_of_birth),
                notes = COALESCE($10, notes),
                updated_at = NOW()
             WHERE id = $1 AND deleted_at IS NULL
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Employee>(&query)
            .bind(id)
            .bind(&input.first_name)
            .bind(&input.last_name)
            .bind(&input.full_name)
            .bind(&input.role_title)
            .bind(&input.email)
            .bind(&input.phone)
            .bind(&input.nationality)
            .bind(input.date_of_birth)
            .bind(&input.notes)
            .fetch_optional(pool)
            .await
    }

    /// Soft-delete an employee by ID. Returns `true` if a row was marked
    /// deleted.
    pub async fn soft_delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE employees SET deleted_at = NOW() WHERE id = $1 AND deleted_at IS NULL",
        )
        .bind(id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }
}
