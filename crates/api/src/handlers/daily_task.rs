//! Handlers for daily task records.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use maison_core::error::CoreError;
use maison_core::travel::PersonType;
use maison_core::types::DbId;
use maison_db::models::daily_task::{CreateDailyTask, UpdateDailyTask};
use maison_db::repositories::DailyTaskRepo;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "DailyTask",
        id,
    })
}

// ---------------------------------------------------------------------------
// GET /daily-tasks
// ---------------------------------------------------------------------------

/// List all tasks, open tasks first.
pub async fn list_tasks(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let items = DailyTaskRepo::list(&state.pool).await?;
    tracing::debug!(count = items.len(), "Listed daily tasks");
    Ok(Json(DataResponse { data: items }))
}

// ---------------------------------------------------------------------------
// POST /daily-tasks
// ---------------------------------------------------------------------------

/// Create a new task.
pub async fn create_task(
    State(state): State<AppState>,
    Json(body): Json<CreateDailyTask>,
) -> AppResult<impl IntoResponse> {
    if let Some(person_type) = &body.assignee_person_type {
        PersonType::parse(person_type)?;
    }
    let created = DailyTaskRepo::create(&state.pool, &body).await?;
    tracing::info!(id = created.id, title = %created.title, "Daily task created");
    Ok((StatusCode::CREATED, Json(DataResponse { data: created })))
}

// ---------------------------------------------------------------------------
// GET /daily-tasks/{id}
// ---------------------------------------------------------------------------

/// Get a single task by ID.
pub async fn get_task(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let task = DailyTaskRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(DataResponse { data: task }))
}

// ---------------------------------------------------------------------------
// PUT /daily-tasks/{id}
// ---------------------------------------------------------------------------

/// Update an existing task (including marking it done).
pub async fn update_task(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(body): Json<UpdateDailyTask>,
) -> AppResult<impl IntoResponse> {
    if let Some(person_type) = &body.assignee_person_type {
        PersonType::parse(person_type)?;
    }
    let updated = DailyTaskRepo::update(&state.pool, id, &body)
        .await?
        .ok_or_else(|| not_found(id))?;
    tracing::info!(id = updated.id, done = updated.done, "Daily task updated");
    Ok(Json(DataResponse { data: updated }))
}

// ---------------------------------------------------------------------------
// DELETE /daily-tasks/{id}
// ---------------------------------------------------------------------------

/// Delete a task.
pub async fn delete_task(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if DailyTaskRepo::delete(&state.pool, id).await? {
        tracing::info!(id, "Daily task deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(not_found(id))
    }
}
