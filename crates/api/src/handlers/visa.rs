//! Handlers for visa records.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use chrono::{Days, NaiveDate, Utc};
use serde::Deserialize;

use maison_core::error::CoreError;
use maison_core::travel::PersonType;
use maison_core::types::DbId;
use maison_db::models::visa::{CreateVisa, UpdateVisa};
use maison_db::repositories::VisaRepo;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// Horizon used by the expiring-visas view when `before` is not given.
const DEFAULT_EXPIRY_WINDOW_DAYS: u64 = 90;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound { entity: "Visa", id })
}

// ---------------------------------------------------------------------------
// GET /visas
// ---------------------------------------------------------------------------

/// List all visa records.
pub async fn list_visas(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let items = VisaRepo::list(&state.pool).await?;
    tracing::debug!(count = items.len(), "Listed visas");
    Ok(Json(DataResponse { data: items }))
}

// ---------------------------------------------------------------------------
// GET /visas/expiring?before=
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub struct ExpiringParams {
    pub before: Option<NaiveDate>,
}

/// List visas expiring on or before the given date (default: 90 days out).
pub async fn list_expiring_visas(
    State(state): State<AppState>,
    Query(params): Query<ExpiringParams>,
) -> AppResult<impl IntoResponse> {
    let before = params.before.unwrap_or_else(|| {
        Utc::now().date_naive() + Days::new(DEFAULT_EXPIRY_WINDOW_DAYS)
    });
    let items = VisaRepo::list_expiring(&state.pool, before).await?;
    tracing::debug!(count = items.len(), %before, "Listed expiring visas");
    Ok(Json(DataResponse { data: items }))
}

// ---------------------------------------------------------------------------
// POST /visas
// ---------------------------------------------------------------------------

/// Create a new visa record.
pub async fn create_visa(
    State(state): State<AppState>,
    Json(body): Json<CreateVisa>,
) -> AppResult<impl IntoResponse> {
    PersonType::parse(&body.person_type)?;
    let created = VisaRepo::create(&state.pool, &body).await?;
    tracing::info!(id = created.id, country = %created.country, "Visa created");
    Ok((StatusCode::CREATED, Json(DataResponse { data: created })))
}

// ---------------------------------------------------------------------------
// GET /visas/{id}
// ---------------------------------------------------------------------------

/// Get a single visa record by ID.
pub async fn get_visa(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let visa = VisaRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(DataResponse { data: visa }))
}

// ---------------------------------------------------------------------------
// PUT /visas/{id}
// ---------------------------------------------------------------------------

/// Update an existing visa record.
pub async fn update_visa(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(body): Json<UpdateVisa>,
) -> AppResult<impl IntoResponse> {
    let updated = VisaRepo::update(&state.pool, id, &body)
        .await?
        .ok_or_else(|| not_found(id))?;
    tracing::info!(id = updated.id, "Visa updated");
    Ok(Json(DataResponse { data: updated }))
}

// ---------------------------------------------------------------------------
// DELETE /visas/{id}
// ---------------------------------------------------------------------------

/// Delete a visa record.
pub async fn delete_visa(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if VisaRepo::delete(&state.pool, id).await? {
        tracing::info!(id, "Visa deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(not_found(id))
    }
}
