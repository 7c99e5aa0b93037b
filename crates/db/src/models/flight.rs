//! Commercial flight entity models and DTOs.

use maison_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A flight row from the `flights` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Flight {
    pub id: DbId,
    pub trip_id: DbId,
    pub airline: String,
    pub flight_number: String,
    pub departure_airport: String,
    pub arrival_airport: String,
    pub departure_time: Option<Timestamp>,
    pub arrival_time: Option<Timestamp>,
    pub booking_reference: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A passenger linked to a flight (`flight_passengers` table).
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct FlightPassenger {
    pub id: DbId,
    pub flight_id: DbId,
    pub person_type: String,
    pub person_id: DbId,
}

/// DTO for adding a flight to a trip.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateFlight {
    pub airline: String,
    pub flight_number: String,
    pub departure_airport: String,
    pub arrival_airport: String,
    pub departure_time: Option<Timestamp>,
    pub arrival_time: Option<Timestamp>,
    pub booking_reference: Option<String>,
}

/// DTO for updating an existing flight. All fields are optional.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateFlight {
    pub airline: Option<String>,
    pub flight_number: Option<String>,
    pub departure_airport: Option<String>,
    pub arrival_airport: Option<String>,
    pub departure_time: Option<Timestamp>,
    pub arrival_time: Option<Timestamp>,
    pub booking_reference: Option<String>,
}

/// DTO for linking a person to a flight.
#[derive(Debug, Clone, Deserialize)]
pub struct LinkPerson {
    pub person_type: String,
    pub person_id: DbId,
}
