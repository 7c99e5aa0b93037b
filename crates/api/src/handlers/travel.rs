//! Handlers for trip sub-entities: flights, private jets, hotels (with
//! rooms and guest assignments), and events (with participants).

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use maison_core::error::CoreError;
use maison_core::travel::PersonType;
use maison_core::types::DbId;
use maison_db::models::flight::{CreateFlight, LinkPerson, UpdateFlight};
use maison_db::models::hotel::{CreateHotel, CreateHotelRoom, CreateRoomAssignment, UpdateHotel};
use maison_db::models::private_jet::{CreatePrivateJet, UpdatePrivateJet};
use maison_db::models::trip_event::{CreateTripEvent, UpdateTripEvent};
use maison_db::repositories::{FlightRepo, HotelRepo, PrivateJetRepo, TripEventRepo};

use crate::error::{AppError, AppResult};
use crate::handlers::trip::ensure_trip_exists;
use crate::response::DataResponse;
use crate::state::AppState;

fn not_found(entity: &'static str, id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound { entity, id })
}

// ===========================================================================
// FLIGHT HANDLERS
// ===========================================================================

// ---------------------------------------------------------------------------
// GET /trips/{trip_id}/flights
// ---------------------------------------------------------------------------

/// List the flights of a trip.
pub async fn list_flights(
    State(state): State<AppState>,
    Path(trip_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    ensure_trip_exists(&state.pool, trip_id).await?;
    let items = FlightRepo::list_for_trip(&state.pool, trip_id).await?;
    Ok(Json(DataResponse { data: items }))
}

// ---------------------------------------------------------------------------
// POST /trips/{trip_id}/flights
// ---------------------------------------------------------------------------

/// Add a flight to a trip.
pub async fn create_flight(
    State(state): State<AppState>,
    Path(trip_id): Path<DbId>,
    Json(body): Json<CreateFlight>,
) -> AppResult<impl IntoResponse> {
    ensure_trip_exists(&state.pool, trip_id).await?;
    let created = FlightRepo::create(&state.pool, trip_id, &body).await?;
    tracing::info!(id = created.id, trip_id, flight = %created.flight_number, "Flight added");
    Ok((StatusCode::CREATED, Json(DataResponse { data: created })))
}

// ---------------------------------------------------------------------------
// GET /trips/{trip_id}/flights/{id}
// ---------------------------------------------------------------------------

/// Get a single flight by ID.
pub async fn get_flight(
    State(state): State<AppState>,
    Path((_trip_id, id)): Path<(DbId, DbId)>,
) -> AppResult<impl IntoResponse> {
    let flight = FlightRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found("Flight", id))?;
    Ok(Json(DataResponse { data: flight }))
}

// ---------------------------------------------------------------------------
// PUT /trips/{trip_id}/flights/{id}
// ---------------------------------------------------------------------------

/// Update an existing flight.
pub async fn update_flight(
    State(state): State<AppState>,
    Path((_trip_id, id)): Path<(DbId, DbId)>,
    Json(body): Json<UpdateFlight>,
) -> AppResult<impl IntoResponse> {
    let updated = FlightRepo::update(&state.pool, id, &body)
        .await?
        .ok_or_else(|| not_found("Flight", id))?;
    tracing::info!(id = updated.id, "Flight updated");
    Ok(Json(DataResponse { data: updated }))
}

// ---------------------------------------------------------------------------
// DELETE /trips/{trip_id}/flights/{id}
// ---------------------------------------------------------------------------

/// Delete a flight.
pub async fn delete_flight(
    State(state): State<AppState>,
    Path((_trip_id, id)): Path<(DbId, DbId)>,
) -> AppResult<StatusCode> {
    if FlightRepo::delete(&state.pool, id).await? {
        tracing::info!(id, "Flight deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(not_found("Flight", id))
    }
}

// ---------------------------------------------------------------------------
// GET /trips/{trip_id}/flights/{id}/passengers
// ---------------------------------------------------------------------------

/// List the people linked to a flight.
pub async fn list_flight_passengers(
    State(state): State<AppState>,
    Path((_trip_id, id)): Path<(DbId, DbId)>,
) -> AppResult<impl IntoResponse> {
    let items = FlightRepo::list_passengers(&state.pool, id).await?;
    Ok(Json(DataResponse { data: items }))
}

// ---------------------------------------------------------------------------
// POST /trips/{trip_id}/flights/{id}/passengers
// ---------------------------------------------------------------------------

/// Link a person to a flight.
pub async fn add_flight_passenger(
    State(state): State<AppState>,
    Path((_trip_id, id)): Path<(DbId, DbId)>,
    Json(body): Json<LinkPerson>,
) -> AppResult<impl IntoResponse> {
    PersonType::parse(&body.person_type)?;
    FlightRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found("Flight", id))?;

    let created = FlightRepo::add_passenger(&state.pool, id, &body).await?;
    tracing::info!(flight_id = id, person_id = created.person_id, "Flight passenger linked");
    Ok((StatusCode::CREATED, Json(DataResponse { data: created })))
}

// ---------------------------------------------------------------------------
// DELETE /trips/{trip_id}/flights/{id}/passengers/{link_id}
// ---------------------------------------------------------------------------

/// Unlink a person from a flight.
pub async fn remove_flight_passenger(
    State(state): State<AppState>,
    Path((_trip_id, _flight_id, link_id)): Path<(DbId, DbId, DbId)>,
) -> AppResult<StatusCode> {
    if FlightRepo::remove_passenger(&state.pool, link_id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(not_found("FlightPassenger", link_id))
    }
}

// ===========================================================================
// PRIVATE JET HANDLERS
// ===========================================================================

// ---------------------------------------------------------------------------
// GET /trips/{trip_id}/private-jets
// ---------------------------------------------------------------------------

/// List the jet charters of a trip.
pub async fn list_private_jets(
    State(state): State<AppState>,
    Path(trip_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    ensure_trip_exists(&state.pool, trip_id).await?;
    let items = PrivateJetRepo::list_for_trip(&state.pool, trip_id).await?;
    Ok(Json(DataResponse { data: items }))
}

// ---------------------------------------------------------------------------
// POST /trips/{trip_id}/private-jets
// ---------------------------------------------------------------------------

/// Add a jet charter to a trip.
pub async fn create_private_jet(
    State(state): State<AppState>,
    Path(trip_id): Path<DbId>,
    Json(body): Json<CreatePrivateJet>,
) -> AppResult<impl IntoResponse> {
    ensure_trip_exists(&state.pool, trip_id).await?;
    let created = PrivateJetRepo::create(&state.pool, trip_id, &body).await?;
    tracing::info!(id = created.id, trip_id, operator = %created.operator_name, "Jet charter added");
    Ok((StatusCode::CREATED, Json(DataResponse { data: created })))
}

// ---------------------------------------------------------------------------
// PUT /trips/{trip_id}/private-jets/{id}
// ---------------------------------------------------------------------------

/// Update an existing jet charter.
pub async fn update_private_jet(
    State(state): State<AppState>,
    Path((_trip_id, id)): Path<(DbId, DbId)>,
    Json(body): Json<UpdatePrivateJet>,
) -> AppResult<impl IntoResponse> {
    let updated = PrivateJetRepo::update(&state.pool, id, &body)
        .await?
        .ok_or_else(|| not_found("PrivateJet", id))?;
    tracing::info!(id = updated.id, "Jet charter updated");
    Ok(Json(DataResponse { data: updated }))
}

// ---------------------------------------------------------------------------
// DELETE /trips/{trip_id}/private-jets/{id}
// ---------------------------------------------------------------------------

/// Delete a jet charter.
pub async fn delete_private_jet(
    State(state): State<AppState>,
    Path((_trip_id, id)): Path<(DbId, DbId)>,
) -> AppResult<StatusCode> {
    if PrivateJetRepo::delete(&state.pool, id).await? {
        tracing::info!(id, "Jet charter deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(not_found("PrivateJet", id))
    }
}

// ---------------------------------------------------------------------------
// POST /trips/{trip_id}/private-jets/{id}/passengers
// ---------------------------------------------------------------------------

/// Link a person to a jet charter.
pub async fn add_jet_passenger(
    State(state): State<AppState>,
    Path((_trip_id, id)): Path<(DbId, DbId)>,
    Json(body): Json<LinkPerson>,
) -> AppResult<impl IntoResponse> {
    PersonType::parse(&body.person_type)?;
    PrivateJetRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found("PrivateJet", id))?;

    let created = PrivateJetRepo::add_passenger(&state.pool, id, &body).await?;
    tracing::info!(jet_id = id, person_id = created.person_id, "Jet passenger linked");
    Ok((StatusCode::CREATED, Json(DataResponse { data: created })))
}

// ---------------------------------------------------------------------------
// DELETE /trips/{trip_id}/private-jets/{id}/passengers/{link_id}
// ---------------------------------------------------------------------------

/// Unlink a person from a jet charter.
pub async fn remove_jet_passenger(
    State(state): State<AppState>,
    Path((_trip_id, _jet_id, link_id)): Path<(DbId, DbId, DbId)>,
) -> AppResult<StatusCode> {
    if PrivateJetRepo::remove_passenger(&state.pool, link_id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(not_found("JetPassenger", link_id))
    }
}

// ===========================================================================
// HOTEL HANDLERS
// ===========================================================================

// ---------------------------------------------------------------------------
// GET /trips/{trip_id}/hotels
// ---------------------------------------------------------------------------

/// List the hotel bookings of a trip.
pub async fn list_hotels(
    State(state): State<AppState>,
    Path(trip_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    ensure_trip_exists(&state.pool, trip_id).await?;
    let items = HotelRepo::list_for_trip(&state.pool, trip_id).await?;
    Ok(Json(DataResponse { data: items }))
}

// ---------------------------------------------------------------------------
// POST /trips/{trip_id}/hotels
// ---------------------------------------------------------------------------

/// Add a hotel booking to a trip.
pub async fn create_hotel(
    State(state): State<AppState>,
    Path(trip_id): Path<DbId>,
    Json(body): Json<CreateHotel>,
) -> AppResult<impl IntoResponse> {
    ensure_trip_exists(&state.pool, trip_id).await?;
    let created = HotelRepo::create(&state.pool, trip_id, &body).await?;
    tracing::info!(id = created.id, trip_id, hotel = %created.name, "Hotel added");
    Ok((StatusCode::CREATED, Json(DataResponse { data: created })))
}

// ---------------------------------------------------------------------------
// PUT /trips/{trip_id}/hotels/{id}
// ---------------------------------------------------------------------------

/// Update an existing hotel booking.
pub async fn update_hotel(
    State(state): State<AppState>,
    Path((_trip_id, id)): Path<(DbId, DbId)>,
    Json(body): Json<UpdateHotel>,
) -> AppResult<impl IntoResponse> {
    let updated = HotelRepo::update(&state.pool, id, &body)
        .await?
        .ok_or_else(|| not_found("Hotel", id))?;
    tracing::info!(id = updated.id, "Hotel updated");
    Ok(Json(DataResponse { data: updated }))
}

// ---------------------------------------------------------------------------
// DELETE /trips/{trip_id}/hotels/{id}
// ---------------------------------------------------------------------------

/// Delete a hotel booking.
pub async fn delete_hotel(
    State(state): State<AppState>,
    Path((_trip_id, id)): Path<(DbId, DbId)>,
) -> AppResult<StatusCode> {
    if HotelRepo::delete(&state.pool, id).await? {
        tracing::info!(id, "Hotel deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(not_found("Hotel", id))
    }
}

// ---------------------------------------------------------------------------
// GET /trips/{trip_id}/hotels/{id}/rooms
// ---------------------------------------------------------------------------

/// List the rooms of a hotel booking.
pub async fn list_hotel_rooms(
    State(state): State<AppState>,
    Path((_trip_id, id)): Path<(DbId, DbId)>,
) -> AppResult<impl IntoResponse> {
    let items = HotelRepo::list_rooms(&state.pool, id).await?;
    Ok(Json(DataResponse { data: items }))
}

// ---------------------------------------------------------------------------
// POST /trips/{trip_id}/hotels/{id}/rooms
// ---------------------------------------------------------------------------

/// Add a room to a hotel booking.
pub async fn add_hotel_room(
    State(state): State<AppState>,
    Path((_trip_id, id)): Path<(DbId, DbId)>,
    Json(body): Json<CreateHotelRoom>,
) -> AppResult<impl IntoResponse> {
    HotelRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found("Hotel", id))?;

    let created = HotelRepo::add_room(&state.pool, id, &body).await?;
    tracing::info!(hotel_id = id, room_id = created.id, "Room added");
    Ok((StatusCode::CREATED, Json(DataResponse { data: created })))
}

// ---------------------------------------------------------------------------
// DELETE /trips/{trip_id}/hotels/{hotel_id}/rooms/{room_id}
// ---------------------------------------------------------------------------

/// Remove a room from a hotel booking.
pub async fn delete_hotel_room(
    State(state): State<AppState>,
    Path((_trip_id, _hotel_id, room_id)): Path<(DbId, DbId, DbId)>,
) -> AppResult<StatusCode> {
    if HotelRepo::delete_room(&state.pool, room_id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(not_found("HotelRoom", room_id))
    }
}

// ---------------------------------------------------------------------------
// POST /trips/{trip_id}/hotels/{hotel_id}/rooms/{room_id}/assignments
// ---------------------------------------------------------------------------

/// Assign a guest to a room.
pub async fn assign_room_guest(
    State(state): State<AppState>,
    Path((_trip_id, _hotel_id, room_id)): Path<(DbId, DbId, DbId)>,
    Json(body): Json<CreateRoomAssignment>,
) -> AppResult<impl IntoResponse> {
    PersonType::parse(&body.person_type)?;
    let created = HotelRepo::assign_guest(&state.pool, room_id, &body).await?;
    tracing::info!(room_id, person_id = created.person_id, "Room guest assigned");
    Ok((StatusCode::CREATED, Json(DataResponse { data: created })))
}

// ---------------------------------------------------------------------------
// DELETE /trips/{trip_id}/hotels/{hotel_id}/rooms/{room_id}/assignments/{id}
// ---------------------------------------------------------------------------

/// Remove a guest assignment.
pub async fn remove_room_guest(
    State(state): State<AppState>,
    Path((_trip_id, _hotel_id, _room_id, id)): Path<(DbId, DbId, DbId, DbId)>,
) -> AppResult<StatusCode> {
    if HotelRepo::remove_assignment(&state.pool, id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(not_found("RoomAssignment", id))
    }
}

// ===========================================================================
// EVENT HANDLERS
// ===========================================================================

// ---------------------------------------------------------------------------
// GET /trips/{trip_id}/events
// ---------------------------------------------------------------------------

/// List the events of a trip.
pub async fn list_events(
    State(state): State<AppState>,
    Path(trip_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    ensure_trip_exists(&state.pool, trip_id).await?;
    let items = TripEventRepo::list_for_trip(&state.pool, trip_id).await?;
    Ok(Json(DataResponse { data: items }))
}

// ---------------------------------------------------------------------------
// POST /trips/{trip_id}/events
// ---------------------------------------------------------------------------

/// Add an event to a trip.
pub async fn create_event(
    State(state): State<AppState>,
    Path(trip_id): Path<DbId>,
    Json(body): Json<CreateTripEvent>,
) -> AppResult<impl IntoResponse> {
    ensure_trip_exists(&state.pool, trip_id).await?;
    let created = TripEventRepo::create(&state.pool, trip_id, &body).await?;
    tracing::info!(id = created.id, trip_id, title = %created.title, "Event added");
    Ok((StatusCode::CREATED, Json(DataResponse { data: created })))
}

// ---------------------------------------------------------------------------
// PUT /trips/{trip_id}/events/{id}
// ---------------------------------------------------------------------------

/// Update an existing event.
pub async fn update_event(
    State(state): State<AppState>,
    Path((_trip_id, id)): Path<(DbId, DbId)>,
    Json(body): Json<UpdateTripEvent>,
) -> AppResult<impl IntoResponse> {
    let updated = TripEventRepo::update(&state.pool, id, &body)
        .await?
        .ok_or_else(|| not_found("TripEvent", id))?;
    tracing::info!(id = updated.id, "Event updated");
    Ok(Json(DataResponse { data: updated }))
}

// ---------------------------------------------------------------------------
// DELETE /trips/{trip_id}/events/{id}
// ---------------------------------------------------------------------------

/// Delete an event.
pub async fn delete_event(
    State(state): State<AppState>,
    Path((_trip_id, id)): Path<(DbId, DbId)>,
) -> AppResult<StatusCode> {
    if TripEventRepo::delete(&state.pool, id).await? {
        tracing::info!(id, "Event deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(not_found("TripEvent", id))
    }
}

// ---------------------------------------------------------------------------
// POST /trips/{trip_id}/events/{id}/participants
// ---------------------------------------------------------------------------

/// Add a participant to an event.
pub async fn add_event_participant(
    State(state): State<AppState>,
    Path((_trip_id, id)): Path<(DbId, DbId)>,
    Json(body): Json<LinkPerson>,
) -> AppResult<impl IntoResponse> {
    PersonType::parse(&body.person_type)?;
    TripEventRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found("TripEvent", id))?;

    let created = TripEventRepo::add_participant(&state.pool, id, &body).await?;
    tracing::info!(event_id = id, person_id = created.person_id, "Event participant added");
    Ok((StatusCode::CREATED, Json(DataResponse { data: created })))
}

// ---------------------------------------------------------------------------
// DELETE /trips/{trip_id}/events/{id}/participants/{link_id}
// ---------------------------------------------------------------------------

/// Remove a participant from an event.
pub async fn remove_event_participant(
    State(state): State<AppState>,
    Path((_trip_id, _event_id, link_id)): Path<(DbId, DbId, DbId)>,
) -> AppResult<StatusCode> {
    if TripEventRepo::remove_participant(&state.pool, link_id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(not_found("EventParticipant", link_id))
    }
}
