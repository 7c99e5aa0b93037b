//! Repository for the `destinations` table.

use maison_core::types::DbId;
use sqlx::PgPool;

use crate::models::destination::{CreateDestination, Destination};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, trip_id, city, country, arrival_date, departure_date, sort_order, created_at";

/// Provides CRUD operations for trip destinations.
pub struct DestinationRepo;

impl DestinationRepo {
    /// Add a destination to a trip. `sort_order` defaults to 0.
    pub async fn create(
        pool: &PgPool,
        trip_id: DbId,
        input: &CreateDestination,
    ) -> Result<Destination, sqlx::Error> {
        let query = format!(
            "INSERT INTO destinations \
                (trip_id, city, country, arrival_date, departure_date, sort_order) \
             VALUES ($1, $2, $3, $4, $5, COALESCE($6, 0)) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Destination>(&query)
            .bind(trip_id)
            .bind(&input.city)
            .bind(&input.country)
            .bind(input.arrival_date)
            .bind(input.departure_date)
            .bind(input.sort_order)
            .fetch_one(pool)
            .await
    }

    /// List the destinations of a trip in sort order.
    pub async fn list_for_trip(
        pool: &PgPool,
        trip_id: DbId,
    ) -> Result<Vec<Destination>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM destinations WHERE trip_id = $1 ORDER BY sort_order, id"
        );
        sqlx::query_as::<_, Destination>(&query)
            .bind(trip_id)
            .fetch_all(pool)
            .await
    }

    /// Remove a destination. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM destinations WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
