//! Private jet charter entity models and DTOs.

use maison_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A private jet charter row from the `private_jets` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct PrivateJet {
    pub id: DbId,
    pub trip_id: DbId,
    pub operator_name: String,
    pub tail_number: Option<String>,
    pub departure_airport: String,
    pub arrival_airport: String,
    pub departure_time: Option<Timestamp>,
    pub booking_reference: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A passenger linked to a jet charter (`private_jet_passengers` table).
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct JetPassenger {
    pub id: DbId,
    pub jet_id: DbId,
    pub person_type: String,
    pub person_id: DbId,
}

/// DTO for adding a jet charter to a trip.
#[derive(Debug, Clone, Deserialize)]
pub struct CreatePrivateJet {
    pub operator_name: String,
    pub tail_number: Option<String>,
    pub departure_airport: String,
    pub arrival_airport: String,
    pub departure_time: Option<Timestamp>,
    pub booking_reference: Option<String>,
}

/// DTO for updating an existing jet charter. All fields are optional.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdatePrivateJet {
    pub operator_name: Option<String>,
    pub tail_number: Option<String>,
    pub departure_airport: Option<String>,
    pub arrival_airport: Option<String>,
    pub departure_time: Option<Timestamp>,
    pub booking_reference: Option<String>,
}
