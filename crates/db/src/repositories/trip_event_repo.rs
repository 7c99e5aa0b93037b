//! Repository for the `trip_events` and `event_participants` tables.

use maison_core::types::DbId;
use sqlx::PgPool;

use crate::models::flight::LinkPerson;
use crate::models::trip_event::{CreateTripEvent, EventParticipant, TripEvent, UpdateTripEvent};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, trip_id, title, location, starts_at, ends_at, notes, created_at, updated_at";

/// Provides CRUD operations for trip events and their participants.
pub struct TripEventRepo;

impl TripEventRepo {
    /// Add an event to a trip.
    pub async fn create(
        pool: &PgPool,
        trip_id: DbId,
        input: &CreateTripEvent,
    ) -> Result<TripEvent, sqlx::Error> {
        let query = format!(
            "INSERT INTO trip_events (trip_id, title, location, starts_at, ends_at, notes) \
             VALUES ($1, $2, $3, $4, $5, $6) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, TripEvent>(&query)
            .bind(trip_id)
            .bind(&input.title)
            .bind(&input.location)
            .bind(input.starts_at)
            .bind(input.ends_at)
            .bind(&input.notes)
            .fetch_one(pool)
            .await
    }

    /// Find an event by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<TripEvent>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM trip_events WHERE id = $1");
        sqlx::query_as::<_, TripEvent>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List the events of a trip in start order, undated events last.
    pub async fn list_for_trip(pool: &PgPool, trip_id: DbId) -> Result<Vec<TripEvent>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM trip_events WHERE trip_id = $1 \
             ORDER BY starts_at ASC NULLS LAST, id"
        );
        sqlx::query_as::<_, TripEvent>(&query)
            .bind(trip_id)
            .fetch_all(pool)
            .await
    }

    /// Update an event. Only non-`None` fields in `input` are applied.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateTripEvent,
    ) -> Result<Option<TripEvent>, sqlx::Error> {
        let query = format!(
            "UPDATE trip_events SET
                title = COALESCE($2, title),
                location = COALESCE($3, location),
                starts_at = COALESCE($4, starts_at),
                ends_at = COALESCE($5, ends_at),
                notes = COALESCE($6, notes),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, TripEvent>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.location)
            .bind(input.starts_at)
            .bind(input.ends_at)
            .bind(&input.notes)
            .fetch_optional(pool)
            .await
    }

    /// Delete an event. Participants cascade. Returns `true` if a row was
    /// removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM trip_events WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Add a participant to an event.
    pub async fn add_participant(
        pool: &PgPool,
        event_id: DbId,
        link: &LinkPerson,
    ) -> Result<EventParticipant, sqlx::Error> {
        sqlx::query_as::<_, EventParticipant>(
            "INSERT INTO event_participants (event_id, person_type, person_id) \
             VALUES ($1, $2, $3) \
             RETURNING id, event_id, person_type, person_id",
        )
        .bind(event_id)
        .bind(&link.person_type)
        .bind(link.person_id)
        .fetch_one(pool)
        .await
    }

    /// Remove a participant from an event. Returns `true` if a row was
    /// removed.
    pub async fn remove_participant(pool: &PgPool, link_id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM event_participants WHERE id = $1")
            .bind(link_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
