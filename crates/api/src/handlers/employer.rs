//! Handlers for employer (household) records and their family members.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use maison_core::error::CoreError;
use maison_core::types::DbId;
use maison_db::models::employer::{CreateEmployer, Employer, UpdateEmployer};
use maison_db::models::family_member::{CreateFamilyMember, UpdateFamilyMember};
use maison_db::repositories::{EmployerRepo, FamilyMemberRepo};

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// Verify that an employer exists, returning the full row.
async fn ensure_employer_exists(pool: &sqlx::PgPool, id: DbId) -> AppResult<Employer> {
    EmployerRepo::find_by_id(pool, id).await?.ok_or_else(|| {
        AppError::Core(CoreError::NotFound {
            entity: "Employer",
            id,
        })
    })
}

// ---------------------------------------------------------------------------
// GET /employers
// ---------------------------------------------------------------------------

/// List all employers.
pub async fn list_employers(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let items = EmployerRepo::list(&state.pool).await?;
    tracing::debug!(count = items.len(), "Listed employers");
    Ok(Json(DataResponse { data: items }))
}

// ---------------------------------------------------------------------------
// POST /employers
// ---------------------------------------------------------------------------

/// Create a new employer.
pub async fn create_employer(
    State(state): State<AppState>,
    Json(body): Json<CreateEmployer>,
) -> AppResult<impl IntoResponse> {
    let created = EmployerRepo::create(&state.pool, &body).await?;
    tracing::info!(id = created.id, company = %created.company_name, "Employer created");
    Ok((StatusCode::CREATED, Json(DataResponse { data: created })))
}

// ---------------------------------------------------------------------------
// GET /employers/{id}
// ---------------------------------------------------------------------------

/// Get a single employer by ID.
pub async fn get_employer(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let employer = ensure_employer_exists(&state.pool, id).await?;
    Ok(Json(DataResponse { data: employer }))
}

// ---------------------------------------------------------------------------
// PUT /employers/{id}
// ---------------------------------------------------------------------------

/// Update an existing employer.
pub async fn update_employer(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(body): Json<UpdateEmployer>,
) -> AppResult<impl IntoResponse> {
    let updated = EmployerRepo::update(&state.pool, id, &body)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Employer",
            id,
        }))?;
    tracing::info!(id = updated.id, "Employer updated");
    Ok(Json(DataResponse { data: updated }))
}

// ---------------------------------------------------------------------------
// DELETE /employers/{id}
// ---------------------------------------------------------------------------

/// Delete an employer and, by cascade, its family members.
pub async fn delete_employer(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if EmployerRepo::delete(&state.pool, id).await? {
        tracing::info!(id, "Employer deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Employer",
            id,
        }))
    }
}

// ===========================================================================
// FAMILY MEMBER HANDLERS
// ===========================================================================

// ---------------------------------------------------------------------------
// GET /employers/{employer_id}/family-members
// ---------------------------------------------------------------------------

/// List the family members of a household.
pub async fn list_family_members(
    State(state): State<AppState>,
    Path(employer_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    ensure_employer_exists(&state.pool, employer_id).await?;
    let items = FamilyMemberRepo::list_for_employer(&state.pool, employer_id).await?;
    Ok(Json(DataResponse { data: items }))
}

// ---------------------------------------------------------------------------
// POST /employers/{employer_id}/family-members
// ---------------------------------------------------------------------------

/// Add a family member to a household.
pub async fn create_family_member(
    State(state): State<AppState>,
    Path(employer_id): Path<DbId>,
    Json(body): Json<CreateFamilyMember>,
) -> AppResult<impl IntoResponse> {
    ensure_employer_exists(&state.pool, employer_id).await?;
    let created = FamilyMemberRepo::create(&state.pool, employer_id, &body).await?;
    tracing::info!(id = created.id, employer_id, "Family member added");
    Ok((StatusCode::CREATED, Json(DataResponse { data: created })))
}

// ---------------------------------------------------------------------------
// PUT /employers/{employer_id}/family-members/{id}
// ---------------------------------------------------------------------------

/// Update a family member.
pub async fn update_family_member(
    State(state): State<AppState>,
    Path((_employer_id, id)): Path<(DbId, DbId)>,
    Json(body): Json<UpdateFamilyMember>,
) -> AppResult<impl IntoResponse> {
    let updated = FamilyMemberRepo::update(&state.pool, id, &body)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "FamilyMember",
            id,
        }))?;
    tracing::info!(id = updated.id, "Family member updated");
    Ok(Json(DataResponse { data: updated }))
}

// ---------------------------------------------------------------------------
// DELETE /employers/{employer_id}/family-members/{id}
// ---------------------------------------------------------------------------

/// Remove a family member.
pub async fn delete_family_member(
    State(state): State<AppState>,
    Path((_employer_id, id)): Path<(DbId, DbId)>,
) -> AppResult<StatusCode> {
    if FamilyMemberRepo::delete(&state.pool, id).await? {
        tracing::info!(id, "Family member removed");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "FamilyMember",
            id,
        }))
    }
}
