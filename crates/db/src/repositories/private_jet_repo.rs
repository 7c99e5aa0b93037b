//! Repository for the `private_jets` and `private_jet_passengers` tables.

use maison_core::types::DbId;
use sqlx::PgPool;

use crate::models::flight::LinkPerson;
use crate::models::private_jet::{CreatePrivateJet, JetPassenger, PrivateJet, UpdatePrivateJet};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, trip_id, operator_name, tail_number, departure_airport, \
    arrival_airport, departure_time, booking_reference, created_at, updated_at";

/// Provides CRUD operations for private jet charters and their passenger
/// links.
pub struct PrivateJetRepo;

impl PrivateJetRepo {
    /// Add a jet charter to a trip.
    pub async fn create(
        pool: &PgPool,
        trip_id: DbId,
        input: &CreatePrivateJet,
    ) -> Result<PrivateJet, sqlx::Error> {
        let query = format!(
            "INSERT INTO private_jets \
                (trip_id, operator_name, tail_number, departure_airport, arrival_airport, \
                 departure_time, booking_reference) \
             VALUES ($1, $2, $3, $4, $5, $6, $7) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, PrivateJet>(&query)
            .bind(trip_id)
            .bind(&input.operator_name)
            .bind(&input.tail_number)
            .bind(&input.departure_airport)
            .bind(&input.arrival_airport)
            .bind(input.departure_time)
            .bind(&input.booking_reference)
            .fetch_one(pool)
            .await
    }

    /// Find a jet charter by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<PrivateJet>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM private_jets WHERE id = $1");
        sqlx::query_as::<_, PrivateJet>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List the jet charters of a trip in departure order.
    pub async fn list_for_trip(
        pool: &PgPool,
        trip_id: DbId,
    ) -> Result<Vec<PrivateJet>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM private_jets WHERE trip_id = $1 \
             ORDER BY departure_time ASC NULLS LAST, id"
        );
        sqlx::query_as::<_, PrivateJet>(&query)
            .bind(trip_id)
            .fetch_all(pool)
            .await
    }

    /// Update a jet charter. Only non-`None` fields in `input` are applied.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdatePrivateJet,
    ) -> Result<Option<PrivateJet>, sqlx::Error> {
        let query = format!(
            "UPDATE private_jets SET
                operator_name = COALESCE($2, operator_name),
                tail_number = COALESCE($3, tail_number),
                departure_airport = COALESCE($4, departure_airport),
                arrival_airport = COALESCE($5, arrival_airport),
                departure_time = COALESCE($6, departure_time),
                booking_reference = COALESCE($7, booking_reference),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, PrivateJet>(&query)
            .bind(id)
            .bind(&input.operator_name)
            .bind(&input.tail_number)
            .bind(&input.departure_airport)
            .bind(&input.arrival_airport)
            .bind(input.departure_time)
            .bind(&input.booking_reference)
            .fetch_optional(pool)
            .await
    }

    /// Delete a jet charter. Passenger links cascade. Returns `true` if a
    /// row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM private_jets WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Link a person to a jet charter.
    pub async fn add_passenger(
        pool: &PgPool,
        jet_id: DbId,
        link: &LinkPerson,
    ) -> Result<JetPassenger, sqlx::Error> {
        sqlx::query_as::<_, JetPassenger>(
            "INSERT INTO private_jet_passengers (jet_id, person_type, person_id) \
             VALUES ($1, $2, $3) \
             RETURNING id, jet_id, person_type, person_id",
        )
        .bind(jet_id)
        .bind(&link.person_type)
        .bind(link.person_id)
        .fetch_one(pool)
        .await
    }

    /// Unlink a person from a jet charter. Returns `true` if a row was
    /// removed.
    pub async fn remove_passenger(pool: &PgPool, link_id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM private_jet_passengers WHERE id = $1")
            .bind(link_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
