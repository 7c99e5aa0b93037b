//! Daily task entity model and DTOs.

use chrono::NaiveDate;
use maison_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A task row from the `daily_tasks` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct DailyTask {
    pub id: DbId,
    pub title: String,
    pub due_on: Option<NaiveDate>,
    pub done: bool,
    pub assignee_person_type: Option<String>,
    pub assignee_person_id: Option<DbId>,
    pub notes: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a task.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateDailyTask {
    pub title: String,
    pub due_on: Option<NaiveDate>,
    pub assignee_person_type: Option<String>,
    pub assignee_person_id: Option<DbId>,
    pub notes: Option<String>,
}

/// DTO for updating a task. All fields are optional.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateDailyTask {
    pub title: Option<String>,
    pub due_on: Option<NaiveDate>,
    pub done: Option<bool>,
    pub assignee_person_type: Option<String>,
    pub assignee_person_id: Option<DbId>,
    pub notes: Option<String>,
}
