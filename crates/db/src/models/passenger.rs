//! Trip passenger membership models and DTOs.
//!
//! A passenger record ties one identity (person type + person id) to one
//! trip and carries the notification preferences the composer gates on.
//! The same identity appearing on multiple trips is multiple passenger
//! rows.

use maison_core::itinerary::ContentFlags;
use maison_core::travel::NotificationPreference;
use maison_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A passenger row from the `passengers` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Passenger {
    pub id: DbId,
    pub trip_id: DbId,
    pub person_type: String,
    pub person_id: DbId,
    pub receive_flight_details: bool,
    pub receive_hotel_details: bool,
    pub receive_event_details: bool,
    pub receive_itinerary: bool,
    pub notification_preference: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Passenger {
    /// The per-category flags in the shape the preference gate consumes.
    pub fn content_flags(&self) -> ContentFlags {
        ContentFlags {
            flight: self.receive_flight_details,
            hotel: self.receive_hotel_details,
            event: self.receive_event_details,
            itinerary: self.receive_itinerary,
        }
    }

    /// The overall preference, tolerating legacy string values.
    pub fn preference(&self) -> NotificationPreference {
        NotificationPreference::parse_lossy(&self.notification_preference)
    }
}

/// DTO for adding a passenger to a trip. Flags default to true, the
/// overall preference to `ALL`.
#[derive(Debug, Clone, Deserialize)]
pub struct CreatePassenger {
    pub person_type: String,
    pub person_id: DbId,
    pub receive_flight_details: Option<bool>,
    pub receive_hotel_details: Option<bool>,
    pub receive_event_details: Option<bool>,
    pub receive_itinerary: Option<bool>,
    pub notification_preference: Option<String>,
}

/// DTO for updating a passenger's notification preferences.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdatePassenger {
    pub receive_flight_details: Option<bool>,
    pub receive_hotel_details: Option<bool>,
    pub receive_event_details: Option<bool>,
    pub receive_itinerary: Option<bool>,
    pub notification_preference: Option<String>,
}
