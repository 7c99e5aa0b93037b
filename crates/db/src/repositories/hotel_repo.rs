//! Repository for the `hotels`, `hotel_rooms`, and `room_assignments`
//! tables.

use maison_core::types::DbId;
use sqlx::PgPool;

use crate::models::hotel::{
    CreateHotel, CreateHotelRoom, CreateRoomAssignment, Hotel, HotelRoom, RoomAssignment,
    UpdateHotel,
};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, trip_id, name, city, check_in, check_out, confirmation_number, \
    created_at, updated_at";

/// Provides CRUD operations for hotel bookings, rooms, and guest
/// assignments.
pub struct HotelRepo;

impl HotelRepo {
    /// Add a hotel booking to a trip.
    pub async fn create(
        pool: &PgPool,
        trip_id: DbId,
        input: &CreateHotel,
    ) -> Result<Hotel, sqlx::Error> {
        let query = format!(
            "INSERT INTO hotels (trip_id, name, city, check_in, check_out, confirmation_number) \
             VALUES ($1, $2, $3, $4, $5, $6) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Hotel>(&query)
            .bind(trip_id)
            .bind(&input.name)
            .bind(&input.city)
            .bind(input.check_in)
            .bind(input.check_out)
            .bind(&input.confirmation_number)
            .fetch_one(pool)
            .await
    }

    /// Find a hotel booking by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Hotel>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM hotels WHERE id = $1");
        sqlx::query_as::<_, Hotel>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List the hotel bookings of a trip in check-in order.
    pub async fn list_for_trip(pool: &PgPool, trip_id: DbId) -> Result<Vec<Hotel>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM hotels WHERE trip_id = $1 \
             ORDER BY check_in ASC NULLS LAST, id"
        );
        sqlx::query_as::<_, Hotel>(&query)
            .bind(trip_id)
            .fetch_all(pool)
            .await
    }

    /// Update a hotel booking. Only non-`None` fields in `input` are
    /// applied.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateHotel,
    ) -> Result<Option<Hotel>, sqlx::Error> {
        let query = format!(
            "UPDATE hotels SET
                name = COALESCE($2, name),
                city = COALESCE($3, city),
                check_in = COALESCE($4, check_in),
                check_out = COALESCE($5, check_out),
                confirmation_number = COALESCE($6, confirmation_number),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Hotel>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.city)
            .bind(input.check_in)
            .bind(input.check_out)
            .bind(&input.confirmation_number)
            .fetch_optional(pool)
            .await
    }

    /// Delete a hotel booking. Rooms and assignments cascade. Returns
    /// `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM hotels WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Add a room to a hotel booking.
    pub async fn add_room(
        pool: &PgPool,
        hotel_id: DbId,
        input: &CreateHotelRoom,
    ) -> Result<HotelRoom, sqlx::Error> {
        sqlx::query_as::<_, HotelRoom>(
            "INSERT INTO hotel_rooms (hotel_id, room_type) VALUES ($1, $2) \
             RETURNING id, hotel_id, room_type, created_at",
        )
        .bind(hotel_id)
        .bind(&input.room_type)
        .fetch_one(pool)
        .await
    }

    /// List the rooms of a hotel booking.
    pub async fn list_rooms(pool: &PgPool, hotel_id: DbId) -> Result<Vec<HotelRoom>, sqlx::Error> {
        sqlx::query_as::<_, HotelRoom>(
            "SELECT id, hotel_id, room_type, created_at FROM hotel_rooms \
             WHERE hotel_id = $1 ORDER BY id",
        )
        .bind(hotel_id)
        .fetch_all(pool)
        .await
    }

    /// Remove a room. Guest assignments cascade. Returns `true` if a row
    /// was removed.
    pub async fn delete_room(pool: &PgPool, room_id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM hotel_rooms WHERE id = $1")
            .bind(room_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Assign a guest to a room.
    pub async fn assign_guest(
        pool: &PgPool,
        room_id: DbId,
        input: &CreateRoomAssignment,
    ) -> Result<RoomAssignment, sqlx::Error> {
        sqlx::query_as::<_, RoomAssignment>(
            "INSERT INTO room_assignments (room_id, person_type, person_id) \
             VALUES ($1, $2, $3) \
             RETURNING id, room_id, person_type, person_id, created_at",
        )
        .bind(room_id)
        .bind(&input.person_type)
        .bind(input.person_id)
        .fetch_one(pool)
        .await
    }

    /// Remove a guest assignment. Returns `true` if a row was removed.
    pub async fn remove_assignment(pool: &PgPool, assignment_id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM room_assignments WHERE id = $1")
            .bind(assignment_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
