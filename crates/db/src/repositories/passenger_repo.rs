//! Repository for the `passengers` table.

use maison_core::types::DbId;
use sqlx::PgPool;

use crate::models::passenger::{CreatePassenger, Passenger, UpdatePassenger};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, trip_id, person_type, person_id, receive_flight_details, \
    receive_hotel_details, receive_event_details, receive_itinerary, \
    notification_preference, created_at, updated_at";

/// Provides CRUD operations for trip passengers.
pub struct PassengerRepo;

impl PassengerRepo {
    /// Add a passenger to a trip. Content flags default to true and the
    /// overall preference to `ALL`.
    pub async fn create(
        pool: &PgPool,
        trip_id: DbId,
        input: &CreatePassenger,
    ) -> Result<Passenger, sqlx::Error> {
        let query = format!(
            "INSERT INTO passengers \
                (trip_id, person_type, person_id, receive_flight_details, \
                 receive_hotel_details, receive_event_details, receive_itinerary, \
                 notification_preference) \
             VALUES ($1, $2, $3, COALESCE($4, TRUE), COALESCE($5, TRUE), \
                     COALESCE($6, TRUE), COALESCE($7, TRUE), COALESCE($8, 'ALL')) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Passenger>(&query)
            .bind(trip_id)
            .bind(&input.person_type)
            .bind(input.person_id)
            .bind(input.receive_flight_details)
            .bind(input.receive_hotel_details)
            .bind(input.receive_event_details)
            .bind(input.receive_itinerary)
            .bind(&input.notification_preference)
            .fetch_one(pool)
            .await
    }

    /// Find a passenger by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Passenger>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM passengers WHERE id = $1");
        sqlx::query_as::<_, Passenger>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List the passenger roster of a trip.
    pub async fn list_for_trip(pool: &PgPool, trip_id: DbId) -> Result<Vec<Passenger>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM passengers WHERE trip_id = $1 ORDER BY id");
        sqlx::query_as::<_, Passenger>(&query)
            .bind(trip_id)
            .fetch_all(pool)
            .await
    }

    /// Resolve a set of passenger-record ids, keeping only those that
    /// belong to the given trip. Unknown ids are silently dropped.
    pub async fn find_by_ids_for_trip(
        pool: &PgPool,
        ids: &[DbId],
        trip_id: DbId,
    ) -> Result<Vec<Passenger>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM passengers WHERE id = ANY($1) AND trip_id = $2 ORDER BY id"
        );
        sqlx::query_as::<_, Passenger>(&query)
            .bind(ids)
            .bind(trip_id)
            .fetch_all(pool)
            .await
    }

    /// Update a passenger's notification preferences. Only non-`None`
    /// fields in `input` are applied.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdatePassenger,
    ) -> Result<Option<Passenger>, sqlx::Error> {
        let query = format!(
            "UPDATE passengers SET
                receive_flight_details = COALESCE($2, receive_flight_details),
                receive_hotel_details = COALESCE($3, receive_hotel_details),
                receive_event_details = COALESCE($4, receive_event_details),
                receive_itinerary = COALESCE($5, receive_itinerary),
                notification_preference = COALESCE($6, notification_preference),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Passenger>(&query)
            .bind(id)
            .bind(input.receive_flight_details)
            .bind(input.receive_hotel_details)
            .bind(input.receive_event_details)
            .bind(input.receive_itinerary)
            .bind(&input.notification_preference)
            .fetch_optional(pool)
            .await
    }

    /// Remove a passenger from a trip. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM passengers WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
