//! Repository for the `flights` and `flight_passengers` tables.

use maison_core::types::DbId;
use sqlx::PgPool;

use crate::models::flight::{CreateFlight, Flight, FlightPassenger, LinkPerson, UpdateFlight};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, trip_id, airline, flight_number, departure_airport, \
    arrival_airport, departure_time, arrival_time, booking_reference, created_at, updated_at";

/// Provides CRUD operations for flights and their passenger links.
pub struct FlightRepo;

impl FlightRepo {
    /// Add a flight to a trip.
    pub async fn create(
        pool: &PgPool,
        trip_id: DbId,
        input: &CreateFlight,
    ) -> Result<Flight, sqlx::Error> {
        let query = format!(
            "INSERT INTO flights \
                (trip_id, airline, flight_number, departure_airport, arrival_airport, \
                 departure_time, arrival_time, booking_reference) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Flight>(&query)
            .bind(trip_id)
            .bind(&input.airline)
            .bind(&input.flight_number)
            .bind(&input.departure_airport)
            .bind(&input.arrival_airport)
            .bind(input.departure_time)
            .bind(input.arrival_time)
            .bind(&input.booking_reference)
            .fetch_one(pool)
            .await
    }

    /// Find a flight by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Flight>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM flights WHERE id = $1");
        sqlx::query_as::<_, Flight>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List the flights of a trip in departure order, undated flights last.
    pub async fn list_for_trip(pool: &PgPool, trip_id: DbId) -> Result<Vec<Flight>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM flights WHERE trip_id = $1 \
             ORDER BY departure_time ASC NULLS LAST, id"
        );
        sqlx::query_as::<_, Flight>(&query)
            .bind(trip_id)
            .fetch_all(pool)
            .await
    }

    /// Update a flight. Only non-`None` fields in `input` are applied.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateFlight,
    ) -> Result<Option<Flight>, sqlx::Error> {
        let query = format!(
            "UPDATE flights SET
                airline = COALESCE($2, airline),
                flight_number = COALESCE($3, flight_number),
                departure_airport = COALESCE($4, departure_airport),
                arrival_airport = COALESCE($5, arrival_airport),
                departure_time = COALESCE($6, departure_time),
                arrival_time = COALESCE($7, arrival_time),
                booking_reference = COALESCE($8, booking_reference),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Flight>(&query)
            .bind(id)
            .bind(&input.airline)
            .bind(&input.flight_number)
            .bind(&input.departure_airport)
            .bind(&input.arrival_airport)
            .bind(input.departure_time)
            .bind(input.arrival_time)
            .bind(&input.booking_reference)
            .fetch_optional(pool)
            .await
    }

    /// Delete a flight. Passenger links cascade. Returns `true` if a row
    /// was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM flights WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Link a person to a flight.
    pub async fn add_passenger(
        pool: &PgPool,
        flight_id: DbId,
        link: &LinkPerson,
    ) -> Result<FlightPassenger, sqlx::Error> {
        sqlx::query_as::<_, FlightPassenger>(
            "INSERT INTO flight_passengers (flight_id, person_type, person_id) \
             VALUES ($1, $2, $3) \
             RETURNING id, flight_id, person_type, person_id",
        )
        .bind(flight_id)
        .bind(&link.person_type)
        .bind(link.person_id)
        .fetch_one(pool)
        .await
    }

    /// List the people linked to a flight.
    pub async fn list_passengers(
        pool: &PgPool,
        flight_id: DbId,
    ) -> Result<Vec<FlightPassenger>, sqlx::Error> {
        sqlx::query_as::<_, FlightPassenger>(
            "SELECT id, flight_id, person_type, person_id FROM flight_passengers \
             WHERE flight_id = $1 ORDER BY id",
        )
        .bind(flight_id)
        .fetch_all(pool)
        .await
    }

    /// Unlink a person from a flight. Returns `true` if a row was removed.
    pub async fn remove_passenger(pool: &PgPool, link_id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM flight_passengers WHERE id = $1")
            .bind(link_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
