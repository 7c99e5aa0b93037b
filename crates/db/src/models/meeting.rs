//! Meeting entity model and DTOs.

use maison_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A meeting row from the `meetings` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Meeting {
    pub id: DbId,
    pub title: String,
    pub location: Option<String>,
    pub starts_at: Option<Timestamp>,
    pub ends_at: Option<Timestamp>,
    pub agenda: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a meeting.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateMeeting {
    pub title: String,
    pub location: Option<String>,
    pub starts_at: Option<Timestamp>,
    pub ends_at: Option<Timestamp>,
    pub agenda: Option<String>,
}

/// DTO for updating a meeting. All fields are optional.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateMeeting {
    pub title: Option<String>,
    pub location: Option<String>,
    pub starts_at: Option<Timestamp>,
    pub ends_at: Option<Timestamp>,
    pub agenda: Option<String>,
}
