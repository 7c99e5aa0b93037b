//! Repository for the `daily_tasks` table.

use maison_core::types::DbId;
use sqlx::PgPool;

use crate::models::daily_task::{CreateDailyTask, DailyTask, UpdateDailyTask};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, due_on, done, assignee_person_type, assignee_person_id, \
    notes, created_at, updated_at";

/// Provides CRUD operations for daily tasks.
pub struct DailyTaskRepo;

impl DailyTaskRepo {
    /// Insert a new task, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateDailyTask) -> Result<DailyTask, sqlx::Error> {
        let query = format!(
            "INSERT INTO daily_tasks \
                (title, due_on, assignee_person_type, assignee_person_id, notes) \
             VALUES ($1, $2, $3, $4, $5) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, DailyTask>(&query)
            .bind(&input.title)
            .bind(input.due_on)
            .bind(&input.assignee_person_type)
            .bind(input.assignee_person_id)
            .bind(&input.notes)
            .fetch_one(pool)
            .await
    }

    /// Find a task by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<DailyTask>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM daily_tasks WHERE id = $1");
        sqlx::query_as::<_, DailyTask>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all tasks, open tasks first, then by due date.
    pub async fn list(pool: &PgPool) -> Result<Vec<DailyTask>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM daily_tasks ORDER BY done ASC, due_on ASC NULLS LAST, id"
        );
        sqlx::query_as::<_, DailyTask>(&query).fetch_all(pool).await
    }

    /// Update a task. Only non-`None` fields in `input` are applied.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateDailyTask,
    ) -> Result<Option<DailyTask>, sqlx::Error> {
        let query = format!(
            "UPDATE daily_tasks SET
                title = COALESCE($2, title),
                due_on = COALESCE($3, due_on),
                done = COALESCE($4, done),
                assignee_person_type = COALESCE($5, assignee_person_type),
                assignee_person_id = COALESCE($6, assignee_person_id),
                notes = COALESCE($7, notes),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, DailyTask>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(input.due_on)
            .bind(input.done)
            .bind(&input.assignee_person_type)
            .bind(input.assignee_person_id)
            .bind(&input.notes)
            .fetch_optional(pool)
            .await
    }

    /// Delete a task by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM daily_tasks WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
