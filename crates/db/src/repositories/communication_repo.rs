//! Repository for the `communications` table.
//!
//! Receipts are append-only: there is no update or delete path.

use maison_core::types::DbId;
use sqlx::PgPool;

use crate::models::communication::{CommunicationReceipt, CreateCommunicationReceipt};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, trip_id, person_type, person_id, channel, content_types, \
    subject, body_text, body_html, status, transport_message_id, error_message, created_at";

/// Provides append and read operations for communication receipts.
pub struct CommunicationRepo;

impl CommunicationRepo {
    /// Record one delivery attempt, returning the created receipt.
    pub async fn create(
        pool: &PgPool,
        input: &CreateCommunicationReceipt,
    ) -> Result<CommunicationReceipt, sqlx::Error> {
        let query = format!(
            "INSERT INTO communications \
                (trip_id, person_type, person_id, channel, content_types, subject, \
                 body_text, body_html, status, transport_message_id, error_message) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, CommunicationReceipt>(&query)
            .bind(input.trip_id)
            .bind(&input.person_type)
            .bind(input.person_id)
            .bind(&input.channel)
            .bind(&input.content_types)
            .bind(&input.subject)
            .bind(&input.body_text)
            .bind(&input.body_html)
            .bind(&input.status)
            .bind(&input.transport_message_id)
            .bind(&input.error_message)
            .fetch_one(pool)
            .await
    }

    /// List the delivery history of a trip, most recent first.
    pub async fn list_for_trip(
        pool: &PgPool,
        trip_id: DbId,
    ) -> Result<Vec<CommunicationReceipt>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM communications WHERE trip_id = $1 \
             ORDER BY created_at DESC, id DESC"
        );
        sqlx::query_as::<_, CommunicationReceipt>(&query)
            .bind(trip_id)
            .fetch_all(pool)
            .await
    }
}
