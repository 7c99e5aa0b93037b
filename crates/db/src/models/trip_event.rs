//! Trip event (embassy appointment, dinner, meeting on the road) models.

use maison_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// An event row from the `trip_events` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct TripEvent {
    pub id: DbId,
    pub trip_id: DbId,
    pub title: String,
    pub location: Option<String>,
    pub starts_at: Option<Timestamp>,
    pub ends_at: Option<Timestamp>,
    pub notes: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A participant row from the `event_participants` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct EventParticipant {
    pub id: DbId,
    pub event_id: DbId,
    pub person_type: String,
    pub person_id: DbId,
}

/// An event together with its participants.
#[derive(Debug, Clone, Serialize)]
pub struct EventWithParticipants {
    #[serde(flatten)]
    pub event: TripEvent,
    pub participants: Vec<EventParticipant>,
}

/// DTO for adding an event to a trip.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateTripEvent {
    pub title: String,
    pub location: Option<String>,
    pub starts_at: Option<Timestamp>,
    pub ends_at: Option<Timestamp>,
    pub notes: Option<String>,
}

/// DTO for updating an existing event. All fields are optional.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateTripEvent {
    pub title: Option<String>,
    pub location: Option<String>,
    pub starts_at: Option<Timestamp>,
    pub ends_at: Option<Timestamp>,
    pub notes: Option<String>,
}
