//! Trip destination entity model and DTOs.

use chrono::NaiveDate;
use maison_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A destination row from the `destinations` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Destination {
    pub id: DbId,
    pub trip_id: DbId,
    pub city: String,
    pub country: Option<String>,
    pub arrival_date: Option<NaiveDate>,
    pub departure_date: Option<NaiveDate>,
    pub sort_order: i32,
    pub created_at: Timestamp,
}

/// DTO for adding a destination to a trip.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateDestination {
    pub city: String,
    pub country: Option<String>,
    pub arrival_date: Option<NaiveDate>,
    pub departure_date: Option<NaiveDate>,
    /// Defaults to 0 if omitted.
    pub sort_order: Option<i32>,
}
