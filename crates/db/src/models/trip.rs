//! Trip entity model, DTOs, and the aggregated trip bundle.

use chrono::NaiveDate;
use maison_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::models::destination::Destination;
use crate::models::flight::{Flight, FlightPassenger};
use crate::models::hotel::HotelWithRooms;
use crate::models::passenger::Passenger;
use crate::models::private_jet::{JetPassenger, PrivateJet};
use crate::models::status::StatusId;
use crate::models::trip_event::EventWithParticipants;

/// A trip row from the `trips` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Trip {
    pub id: DbId,
    pub request_number: String,
    pub status_id: StatusId,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub notes: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new trip (trip-request submission).
#[derive(Debug, Clone, Deserialize)]
pub struct CreateTrip {
    pub request_number: String,
    /// Defaults to 1 (Request) if omitted.
    pub status_id: Option<StatusId>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub notes: Option<String>,
}

/// DTO for updating an existing trip. All fields are optional.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateTrip {
    pub request_number: Option<String>,
    pub status_id: Option<StatusId>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub notes: Option<String>,
}

/// A trip with every sub-entity collection the notification composer
/// consumes, loaded in one repository call.
#[derive(Debug, Clone, Serialize)]
pub struct TripBundle {
    pub trip: Trip,
    pub destinations: Vec<Destination>,
    pub flights: Vec<Flight>,
    pub flight_passengers: Vec<FlightPassenger>,
    pub private_jets: Vec<PrivateJet>,
    pub jet_passengers: Vec<JetPassenger>,
    pub hotels: Vec<HotelWithRooms>,
    pub events: Vec<EventWithParticipants>,
    pub passengers: Vec<Passenger>,
}
