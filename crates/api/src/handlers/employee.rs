//! Handlers for employee records.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use maison_core::error::CoreError;
use maison_core::types::DbId;
use maison_db::models::employee::{CreateEmployee, Employee, UpdateEmployee};
use maison_db::repositories::EmployeeRepo;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// Verify that an employee exists, returning the full row.
async fn ensure_employee_exists(pool: &sqlx::PgPool, id: DbId) -> AppResult<Employee> {
    EmployeeRepo::find_by_id(pool, id).await?.ok_or_else(|| {
        AppError::Core(CoreError::NotFound {
            entity: "Employee",
            id,
        })
    })
}

// ---------------------------------------------------------------------------
// GET /employees
// ---------------------------------------------------------------------------

/// List all employees.
pub async fn list_employees(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let items = EmployeeRepo::list(&state.pool).await?;
    tracing::debug!(count = items.len(), "Listed employees");
    Ok(Json(DataResponse { data: items }))
}

// ---------------------------------------------------------------------------
// POST /employees
// ---------------------------------------------------------------------------

/// Create a new employee.
pub async fn create_employee(
    State(state): State<AppState>,
    Json(body): Json<CreateEmployee>,
) -> AppResult<impl IntoResponse> {
    let created = EmployeeRepo::create(&state.pool, &body).await?;
    tracing::info!(id = created.id, name = %created.full_name, "Employee created");
    Ok((StatusCode::CREATED, Json(DataResponse { data: created })))
}

// ---------------------------------------------------------------------------
// GET /employees/{id}
// ---------------------------------------------------------------------------

/// Get a single employee by ID.
pub async fn get_employee(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let employee = ensure_employee_exists(&state.pool, id).await?;
    Ok(Json(DataResponse { data: employee }))
}

// ---------------------------------------------------------------------------
// PUT /employees/{id}
// ---------------------------------------------------------------------------

/// Update an existing employee.
pub async fn update_employee(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(body): Json<UpdateEmployee>,
) -> AppResult<impl IntoResponse> {
    let updated = EmployeeRepo::update(&state.pool, id, &body)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Employee",
            id,
        }))?;
    tracing::info!(id = updated.id, "Employee updated");
    Ok(Json(DataResponse { data: updated }))
}

// ---------------------------------------------------------------------------
// DELETE /employees/{id}
// ---------------------------------------------------------------------------

/// Soft-delete an employee.
pub async fn delete_employee(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = EmployeeRepo::soft_delete(&state.pool, id).await?;
    if deleted {
        tracing::info!(id, "Employee deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Employee",
            id,
        }))
    }
}
