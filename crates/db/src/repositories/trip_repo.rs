//! Repository for the `trips` table and the aggregated trip bundle.

use maison_core::types::DbId;
use sqlx::PgPool;

use crate::models::destination::Destination;
use crate::models::flight::{Flight, FlightPassenger};
use crate::models::hotel::{Hotel, HotelRoom, HotelWithRooms, RoomAssignment, RoomWithGuests};
use crate::models::passenger::Passenger;
use crate::models::private_jet::{JetPassenger, PrivateJet};
use crate::models::trip::{CreateTrip, Trip, TripBundle, UpdateTrip};
use crate::models::trip_event::{EventParticipant, EventWithParticipants, TripEvent};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, request_number, status_id, start_date, end_date, notes, created_at, updated_at";

/// Provides CRUD operations for trips plus the aggregated bundle load the
/// notification composer and calendar views consume.
pub struct TripRepo;

impl TripRepo {
    /// Insert a new trip, returning the created row.
    ///
    /// If `status_id` is `None` in the input, defaults to 1 (Request).
    pub async fn create(pool: &PgPool, input: &CreateTrip) -> Result<Trip, sqlx::Error> {
        let query = format!(
            "INSERT INTO trips (request_number, status_id, start_date, end_date, notes)
             VALUES ($1, COALESCE($2, 1), $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Trip>(&query)
            .bind(&input.request_number)
            .bind(input.status_id)
            .bind(input.start_date)
            .bind(input.end_date)
            .bind(&input.notes)
            .fetch_one(pool)
            .await
    }

    /// Find a trip by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Trip>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM trips WHERE id = $1");
        sqlx::query_as::<_, Trip>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all trips ordered by start date, undated trips last.
    pub async fn list(pool: &PgPool) -> Result<Vec<Trip>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM trips ORDER BY start_date ASC NULLS LAST, id ASC"
        );
        sqlx::query_as::<_, Trip>(&query).fetch_all(pool).await
    }

    /// Update a trip. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateTrip,
    ) -> Result<Option<Trip>, sqlx::Error> {
        let query = format!(
            "UPDATE trips SET
                request_number = COALESCE($2, request_number),
                status_id = COALESCE($3, status_id),
                start_date = COALESCE($4, start_date),
                end_date = COALESCE($5, end_date),
                notes = COALESCE($6, notes),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Trip>(&query)
            .bind(id)
            .bind(&input.request_number)
            .bind(input.status_id)
            .bind(input.start_date)
            .bind(input.end_date)
            .bind(&input.notes)
            .fetch_optional(pool)
            .await
    }

    /// Delete a trip by ID. Sub-entities cascade. Returns `true` if a row
    /// was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM trips WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Load a trip with every sub-entity collection: destinations, flights
    /// and their passenger links, private jets and their links, hotels with
    /// rooms and guest assignments, events with participants, and the
    /// passenger roster.
    ///
    /// Returns `None` when the trip does not exist.
    pub async fn find_bundle(pool: &PgPool, id: DbId) -> Result<Option<TripBundle>, sqlx::Error> {
        let Some(trip) = Self::find_by_id(pool, id).await? else {
            return Ok(None);
        };

        let destinations = sqlx::query_as::<_, Destination>(
            "SELECT id, trip_id, city, country, arrival_date, departure_date, sort_order, \
             created_at FROM destinations WHERE trip_id = $1 ORDER BY sort_order, id",
        )
        .bind(id)
        .fetch_all(pool)
        .await?;

        let flights = sqlx::query_as::<_, Flight>(
            "SELECT id, trip_id, airline, flight_number, departure_airport, arrival_airport, \
             departure_time, arrival_time, booking_reference, created_at, updated_at \
             FROM flights WHERE trip_id = $1 ORDER BY departure_time ASC NULLS LAST, id",
        )
        .bind(id)
        .fetch_all(pool)
        .await?;

        let flight_passengers = sqlx::query_as::<_, FlightPassenger>(
            "SELECT id, flight_id, person_type, person_id FROM flight_passengers \
             WHERE flight_id IN (SELECT id FROM flights WHERE trip_id = $1) ORDER BY id",
        )
        .bind(id)
        .fetch_all(pool)
        .await?;

        let private_jets = sqlx::query_as::<_, PrivateJet>(
            "SELECT id, trip_id, operator_name, tail_number, departure_airport, \
             arrival_airport, departure_time, booking_reference, created_at, updated_at \
             FROM private_jets WHERE trip_id = $1 ORDER BY departure_time ASC NULLS LAST, id",
        )
        .bind(id)
        .fetch_all(pool)
        .await?;

        let jet_passengers = sqlx::query_as::<_, JetPassenger>(
            "SELECT id, jet_id, person_type, person_id FROM private_jet_passengers \
             WHERE jet_id IN (SELECT id FROM private_jets WHERE trip_id = $1) ORDER BY id",
        )
        .bind(id)
        .fetch_all(pool)
        .await?;

        let hotels = sqlx::query_as::<_, Hotel>(
            "SELECT id, trip_id, name, city, check_in, check_out, confirmation_number, \
             created_at, updated_at FROM hotels WHERE trip_id = $1 ORDER BY check_in ASC NULLS LAST, id",
        )
        .bind(id)
        .fetch_all(pool)
        .await?;

        let rooms = sqlx::query_as::<_, HotelRoom>(
            "SELECT id, hotel_id, room_type, created_at FROM hotel_rooms \
             WHERE hotel_id IN (SELECT id FROM hotels WHERE trip_id = $1) ORDER BY id",
        )
        .bind(id)
        .fetch_all(pool)
        .await?;

        let assignments = sqlx::query_as::<_, RoomAssignment>(
            "SELECT id, room_id, person_type, person_id, created_at FROM room_assignments \
             WHERE room_id IN (SELECT id FROM hotel_rooms \
                               WHERE hotel_id IN (SELECT id FROM hotels WHERE trip_id = $1)) \
             ORDER BY id",
        )
        .bind(id)
        .fetch_all(pool)
        .await?;

        let events = sqlx::query_as::<_, TripEvent>(
            "SELECT id, trip_id, title, location, starts_at, ends_at, notes, created_at, \
             updated_at FROM trip_events WHERE trip_id = $1 ORDER BY starts_at ASC NULLS LAST, id",
        )
        .bind(id)
        .fetch_all(pool)
        .await?;

        let participants = sqlx::query_as::<_, EventParticipant>(
            "SELECT id, event_id, person_type, person_id FROM event_participants \
             WHERE event_id IN (SELECT id FROM trip_events WHERE trip_id = $1) ORDER BY id",
        )
        .bind(id)
        .fetch_all(pool)
        .await?;

        let passengers = sqlx::query_as::<_, Passenger>(
            "SELECT id, trip_id, person_type, person_id, receive_flight_details, \
             receive_hotel_details, receive_event_details, receive_itinerary, \
             notification_preference, created_at, updated_at \
             FROM passengers WHERE trip_id = $1 ORDER BY id",
        )
        .bind(id)
        .fetch_all(pool)
        .await?;

        let hotels = hotels
            .into_iter()
            .map(|hotel| {
                let rooms = rooms
                    .iter()
                    .filter(|room| room.hotel_id == hotel.id)
                    .map(|room| RoomWithGuests {
                        room: room.clone(),
                        guests: assignments
                            .iter()
                            .filter(|a| a.room_id == room.id)
                            .cloned()
                            .collect(),
                    })
                    .collect();
                HotelWithRooms { hotel, rooms }
            })
            .collect();

        let events = events
            .into_iter()
            .map(|event| {
                let participants = participants
                    .iter()
                    .filter(|p| p.event_id == event.id)
                    .cloned()
                    .collect();
                EventWithParticipants { event, participants }
            })
            .collect();

        Ok(Some(TripBundle {
            trip,
            destinations,
            flights,
            flight_passengers,
            private_jets,
            jet_passengers,
            hotels,
            events,
            passengers,
        }))
    }
}
