//! Hotel, room, and guest assignment entity models and DTOs.

use chrono::NaiveDate;
use maison_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A hotel booking row from the `hotels` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Hotel {
    pub id: DbId,
    pub trip_id: DbId,
    pub name: String,
    pub city: Option<String>,
    pub check_in: Option<NaiveDate>,
    pub check_out: Option<NaiveDate>,
    pub confirmation_number: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A room row from the `hotel_rooms` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct HotelRoom {
    pub id: DbId,
    pub hotel_id: DbId,
    pub room_type: String,
    pub created_at: Timestamp,
}

/// A guest assignment row from the `room_assignments` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct RoomAssignment {
    pub id: DbId,
    pub room_id: DbId,
    pub person_type: String,
    pub person_id: DbId,
    pub created_at: Timestamp,
}

/// A room together with its guest assignments.
#[derive(Debug, Clone, Serialize)]
pub struct RoomWithGuests {
    #[serde(flatten)]
    pub room: HotelRoom,
    pub guests: Vec<RoomAssignment>,
}

/// A hotel together with its rooms and their guests.
#[derive(Debug, Clone, Serialize)]
pub struct HotelWithRooms {
    #[serde(flatten)]
    pub hotel: Hotel,
    pub rooms: Vec<RoomWithGuests>,
}

/// DTO for adding a hotel booking to a trip.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateHotel {
    pub name: String,
    pub city: Option<String>,
    pub check_in: Option<NaiveDate>,
    pub check_out: Option<NaiveDate>,
    pub confirmation_number: Option<String>,
}

/// DTO for updating an existing hotel booking. All fields are optional.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateHotel {
    pub name: Option<String>,
    pub city: Option<String>,
    pub check_in: Option<NaiveDate>,
    pub check_out: Option<NaiveDate>,
    pub confirmation_number: Option<String>,
}

/// DTO for adding a room to a hotel.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateHotelRoom {
    pub room_type: String,
}

/// DTO for assigning a guest to a room.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateRoomAssignment {
    pub person_type: String,
    pub person_id: DbId,
}
