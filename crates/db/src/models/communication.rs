//! Communication receipt model and create DTO.
//!
//! One row per delivery attempt, written exactly once per attempted
//! (passenger, channel) pair. Rows are immutable: the composer never
//! updates or deletes them.

use maison_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A receipt row from the `communications` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct CommunicationReceipt {
    pub id: DbId,
    pub trip_id: DbId,
    pub person_type: String,
    pub person_id: DbId,
    /// `EMAIL` or `WHATSAPP`.
    pub channel: String,
    /// Comma-joined list of the requested content types.
    pub content_types: String,
    /// Email only.
    pub subject: Option<String>,
    pub body_text: String,
    /// Email only.
    pub body_html: Option<String>,
    /// `SENT` or `FAILED`.
    pub status: String,
    pub transport_message_id: Option<String>,
    pub error_message: Option<String>,
    pub created_at: Timestamp,
}

/// Insert payload for a receipt. Built by the composer, never from client
/// input.
#[derive(Debug, Clone)]
pub struct CreateCommunicationReceipt {
    pub trip_id: DbId,
    pub person_type: String,
    pub person_id: DbId,
    pub channel: String,
    pub content_types: String,
    pub subject: Option<String>,
    pub body_text: String,
    pub body_html: Option<String>,
    pub status: String,
    pub transport_message_id: Option<String>,
    pub error_message: Option<String>,
}
