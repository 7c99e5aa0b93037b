//! Handlers for stakeholder records.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use maison_core::error::CoreError;
use maison_core::types::DbId;
use maison_db::models::stakeholder::{CreateStakeholder, UpdateStakeholder};
use maison_db::repositories::StakeholderRepo;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Stakeholder",
        id,
    })
}

// ---------------------------------------------------------------------------
// GET /stakeholders
// ---------------------------------------------------------------------------

/// List all stakeholders.
pub async fn list_stakeholders(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let items = StakeholderRepo::list(&state.pool).await?;
    tracing::debug!(count = items.len(), "Listed stakeholders");
    Ok(Json(DataResponse { data: items }))
}

// ---------------------------------------------------------------------------
// POST /stakeholders
// ---------------------------------------------------------------------------

/// Create a new stakeholder.
pub async fn create_stakeholder(
    State(state): State<AppState>,
    Json(body): Json<CreateStakeholder>,
) -> AppResult<impl IntoResponse> {
    let created = StakeholderRepo::create(&state.pool, &body).await?;
    tracing::info!(id = created.id, "Stakeholder created");
    Ok((StatusCode::CREATED, Json(DataResponse { data: created })))
}

// ---------------------------------------------------------------------------
// GET /stakeholders/{id}
// ---------------------------------------------------------------------------

/// Get a single stakeholder by ID.
pub async fn get_stakeholder(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let stakeholder = StakeholderRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(DataResponse { data: stakeholder }))
}

// ---------------------------------------------------------------------------
// PUT /stakeholders/{id}
// ---------------------------------------------------------------------------

/// Update an existing stakeholder.
pub async fn update_stakeholder(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(body): Json<UpdateStakeholder>,
) -> AppResult<impl IntoResponse> {
    let updated = StakeholderRepo::update(&state.pool, id, &body)
        .await?
        .ok_or_else(|| not_found(id))?;
    tracing::info!(id = updated.id, "Stakeholder updated");
    Ok(Json(DataResponse { data: updated }))
}

// ---------------------------------------------------------------------------
// DELETE /stakeholders/{id}
// ---------------------------------------------------------------------------

/// Delete a stakeholder.
pub async fn delete_stakeholder(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if StakeholderRepo::delete(&state.pool, id).await? {
        tracing::info!(id, "Stakeholder deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(not_found(id))
    }
}
