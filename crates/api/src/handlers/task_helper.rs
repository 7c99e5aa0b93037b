//! Handlers for task helper records.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use maison_core::error::CoreError;
use maison_core::types::DbId;
use maison_db::models::task_helper::{CreateTaskHelper, UpdateTaskHelper};
use maison_db::repositories::TaskHelperRepo;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "TaskHelper",
        id,
    })
}

// ---------------------------------------------------------------------------
// GET /task-helpers
// ---------------------------------------------------------------------------

/// List all task helpers.
pub async fn list_task_helpers(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let items = TaskHelperRepo::list(&state.pool).await?;
    tracing::debug!(count = items.len(), "Listed task helpers");
    Ok(Json(DataResponse { data: items }))
}

// ---------------------------------------------------------------------------
// POST /task-helpers
// ---------------------------------------------------------------------------

/// Create a new task helper.
pub async fn create_task_helper(
    State(state): State<AppState>,
    Json(body): Json<CreateTaskHelper>,
) -> AppResult<impl IntoResponse> {
    let created = TaskHelperRepo::create(&state.pool, &body).await?;
    tracing::info!(id = created.id, name = %created.full_name, "Task helper created");
    Ok((StatusCode::CREATED, Json(DataResponse { data: created })))
}

// ---------------------------------------------------------------------------
// GET /task-helpers/{id}
// ---------------------------------------------------------------------------

/// Get a single task helper by ID.
pub async fn get_task_helper(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let helper = TaskHelperRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(DataResponse { data: helper }))
}

// ---------------------------------------------------------------------------
// PUT /task-helpers/{id}
// ---------------------------------------------------------------------------

/// Update an existing task helper.
pub async fn update_task_helper(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(body): Json<UpdateTaskHelper>,
) -> AppResult<impl IntoResponse> {
    let updated = TaskHelperRepo::update(&state.pool, id, &body)
        .await?
        .ok_or_else(|| not_found(id))?;
    tracing::info!(id = updated.id, "Task helper updated");
    Ok(Json(DataResponse { data: updated }))
}

// ---------------------------------------------------------------------------
// DELETE /task-helpers/{id}
// ---------------------------------------------------------------------------

/// Delete a task helper.
pub async fn delete_task_helper(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if TaskHelperRepo::delete(&state.pool, id).await? {
        tracing::info!(id, "Task helper deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(not_found(id))
    }
}
