//! Handlers for trips, their destinations, and the passenger roster.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use maison_core::error::CoreError;
use maison_core::travel::PersonType;
use maison_core::types::DbId;
use maison_db::models::destination::CreateDestination;
use maison_db::models::passenger::{CreatePassenger, UpdatePassenger};
use maison_db::models::trip::{CreateTrip, Trip, UpdateTrip};
use maison_db::repositories::{DestinationRepo, PassengerRepo, TripRepo};

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Verify that a trip exists, returning the full row.
pub(crate) async fn ensure_trip_exists(pool: &sqlx::PgPool, id: DbId) -> AppResult<Trip> {
    TripRepo::find_by_id(pool, id).await?.ok_or_else(|| {
        AppError::Core(CoreError::NotFound {
            entity: "Trip",
            id,
        })
    })
}

// ---------------------------------------------------------------------------
// GET /trips
// ---------------------------------------------------------------------------

/// List all trips.
pub async fn list_trips(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let items = TripRepo::list(&state.pool).await?;
    tracing::debug!(count = items.len(), "Listed trips");
    Ok(Json(DataResponse { data: items }))
}

// ---------------------------------------------------------------------------
// POST /trips
// ---------------------------------------------------------------------------

/// Create a new trip (trip-request submission).
pub async fn create_trip(
    State(state): State<AppState>,
    Json(body): Json<CreateTrip>,
) -> AppResult<impl IntoResponse> {
    if body.request_number.trim().is_empty() {
        return Err(CoreError::Validation("request_number must not be empty".into()).into());
    }
    let created = TripRepo::create(&state.pool, &body).await?;
    tracing::info!(id = created.id, request_number = %created.request_number, "Trip created");
    Ok((StatusCode::CREATED, Json(DataResponse { data: created })))
}

// ---------------------------------------------------------------------------
// GET /trips/{id}
// ---------------------------------------------------------------------------

/// Get a single trip by ID.
pub async fn get_trip(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let trip = ensure_trip_exists(&state.pool, id).await?;
    Ok(Json(DataResponse { data: trip }))
}

// ---------------------------------------------------------------------------
// GET /trips/{id}/bundle
// ---------------------------------------------------------------------------

/// Get a trip with every sub-entity collection.
pub async fn get_trip_bundle(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let bundle = TripRepo::find_bundle(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Trip",
            id,
        }))?;
    Ok(Json(DataResponse { data: bundle }))
}

// ---------------------------------------------------------------------------
// PUT /trips/{id}
// ---------------------------------------------------------------------------

/// Update an existing trip.
pub async fn update_trip(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(body): Json<UpdateTrip>,
) -> AppResult<impl IntoResponse> {
    let updated = TripRepo::update(&state.pool, id, &body)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Trip",
            id,
        }))?;
    tracing::info!(id = updated.id, "Trip updated");
    Ok(Json(DataResponse { data: updated }))
}

// ---------------------------------------------------------------------------
// DELETE /trips/{id}
// ---------------------------------------------------------------------------

/// Delete a trip and, by cascade, its sub-entities.
pub async fn delete_trip(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = TripRepo::delete(&state.pool, id).await?;
    if deleted {
        tracing::info!(id, "Trip deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Trip",
            id,
        }))
    }
}

// ===========================================================================
// DESTINATION HANDLERS
// ===========================================================================

// ---------------------------------------------------------------------------
// GET /trips/{trip_id}/destinations
// ---------------------------------------------------------------------------

/// List the destinations of a trip.
pub async fn list_destinations(
    State(state): State<AppState>,
    Path(trip_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    ensure_trip_exists(&state.pool, trip_id).await?;
    let items = DestinationRepo::list_for_trip(&state.pool, trip_id).await?;
    Ok(Json(DataResponse { data: items }))
}

// ---------------------------------------------------------------------------
// POST /trips/{trip_id}/destinations
// ---------------------------------------------------------------------------

/// Add a destination to a trip.
pub async fn create_destination(
    State(state): State<AppState>,
    Path(trip_id): Path<DbId>,
    Json(body): Json<CreateDestination>,
) -> AppResult<impl IntoResponse> {
    ensure_trip_exists(&state.pool, trip_id).await?;
    let created = DestinationRepo::create(&state.pool, trip_id, &body).await?;
    tracing::info!(id = created.id, trip_id, "Destination added");
    Ok((StatusCode::CREATED, Json(DataResponse { data: created })))
}

// ---------------------------------------------------------------------------
// DELETE /trips/{trip_id}/destinations/{id}
// ---------------------------------------------------------------------------

/// Remove a destination.
pub async fn delete_destination(
    State(state): State<AppState>,
    Path((_trip_id, id)): Path<(DbId, DbId)>,
) -> AppResult<StatusCode> {
    let deleted = DestinationRepo::delete(&state.pool, id).await?;
    if deleted {
        tracing::info!(id, "Destination removed");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Destination",
            id,
        }))
    }
}

// ===========================================================================
// PASSENGER HANDLERS
// ===========================================================================

// ---------------------------------------------------------------------------
// GET /trips/{trip_id}/passengers
// ---------------------------------------------------------------------------

/// List the passenger roster of a trip.
pub async fn list_passengers(
    State(state): State<AppState>,
    Path(trip_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    ensure_trip_exists(&state.pool, trip_id).await?;
    let items = PassengerRepo::list_for_trip(&state.pool, trip_id).await?;
    Ok(Json(DataResponse { data: items }))
}

// ---------------------------------------------------------------------------
// POST /trips/{trip_id}/passengers
// ---------------------------------------------------------------------------

/// Add a passenger to a trip.
pub async fn create_passenger(
    State(state): State<AppState>,
    Path(trip_id): Path<DbId>,
    Json(body): Json<CreatePassenger>,
) -> AppResult<impl IntoResponse> {
    ensure_trip_exists(&state.pool, trip_id).await?;
    PersonType::parse(&body.person_type)?;

    let created = PassengerRepo::create(&state.pool, trip_id, &body).await?;
    tracing::info!(
        id = created.id,
        trip_id,
        person_type = %created.person_type,
        person_id = created.person_id,
        "Passenger added"
    );
    Ok((StatusCode::CREATED, Json(DataResponse { data: created })))
}

// ---------------------------------------------------------------------------
// PUT /trips/{trip_id}/passengers/{id}
// ---------------------------------------------------------------------------

/// Update a passenger's notification preferences.
pub async fn update_passenger(
    State(state): State<AppState>,
    Path((_trip_id, id)): Path<(DbId, DbId)>,
    Json(body): Json<UpdatePassenger>,
) -> AppResult<impl IntoResponse> {
    let updated = PassengerRepo::update(&state.pool, id, &body)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Passenger",
            id,
        }))?;
    tracing::info!(id = updated.id, "Passenger preferences updated");
    Ok(Json(DataResponse { data: updated }))
}

// ---------------------------------------------------------------------------
// DELETE /trips/{trip_id}/passengers/{id}
// ---------------------------------------------------------------------------

/// Remove a passenger from a trip.
pub async fn delete_passenger(
    State(state): State<AppState>,
    Path((_trip_id, id)): Path<(DbId, DbId)>,
) -> AppResult<StatusCode> {
    let deleted = PassengerRepo::delete(&state.pool, id).await?;
    if deleted {
        tracing::info!(id, "Passenger removed");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Passenger",
            id,
        }))
    }
}
