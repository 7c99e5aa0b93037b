//! Handlers for meeting records.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use maison_core::error::CoreError;
use maison_core::types::DbId;
use maison_db::models::meeting::{CreateMeeting, UpdateMeeting};
use maison_db::repositories::MeetingRepo;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Meeting",
        id,
    })
}

// ---------------------------------------------------------------------------
// GET /meetings
// ---------------------------------------------------------------------------

/// List all meetings.
pub async fn list_meetings(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let items = MeetingRepo::list(&state.pool).await?;
    tracing::debug!(count = items.len(), "Listed meetings");
    Ok(Json(DataResponse { data: items }))
}

// ---------------------------------------------------------------------------
// POST /meetings
// ---------------------------------------------------------------------------

/// Create a new meeting.
pub async fn create_meeting(
    State(state): State<AppState>,
    Json(body): Json<CreateMeeting>,
) -> AppResult<impl IntoResponse> {
    let created = MeetingRepo::create(&state.pool, &body).await?;
    tracing::info!(id = created.id, title = %created.title, "Meeting created");
    Ok((StatusCode::CREATED, Json(DataResponse { data: created })))
}

// ---------------------------------------------------------------------------
// GET /meetings/{id}
// ---------------------------------------------------------------------------

/// Get a single meeting by ID.
pub async fn get_meeting(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let meeting = MeetingRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(DataResponse { data: meeting }))
}

// ---------------------------------------------------------------------------
// PUT /meetings/{id}
// ---------------------------------------------------------------------------

/// Update an existing meeting.
pub async fn update_meeting(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(body): Json<UpdateMeeting>,
) -> AppResult<impl IntoResponse> {
    let updated = MeetingRepo::update(&state.pool, id, &body)
        .await?
        .ok_or_else(|| not_found(id))?;
    tracing::info!(id = updated.id, "Meeting updated");
    Ok(Json(DataResponse { data: updated }))
}

// ---------------------------------------------------------------------------
// DELETE /meetings/{id}
// ---------------------------------------------------------------------------

/// Delete a meeting.
pub async fn delete_meeting(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if MeetingRepo::delete(&state.pool, id).await? {
        tracing::info!(id, "Meeting deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(not_found(id))
    }
}
