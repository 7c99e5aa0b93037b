//! Visa entity model and DTOs.

use chrono::NaiveDate;
use maison_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A visa row from the `visas` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Visa {
    pub id: DbId,
    pub person_type: String,
    pub person_id: DbId,
    pub country: String,
    pub visa_type: String,
    pub visa_number: Option<String>,
    pub issue_date: Option<NaiveDate>,
    pub expiry_date: Option<NaiveDate>,
    pub notes: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a visa record.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateVisa {
    pub person_type: String,
    pub person_id: DbId,
    pub country: String,
    pub visa_type: String,
    pub visa_number: Option<String>,
    pub issue_date: Option<NaiveDate>,
    pub expiry_date: Option<NaiveDate>,
    pub notes: Option<String>,
}

/// DTO for updating a visa record. All fields are optional.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateVisa {
    pub country: Option<String>,
    pub visa_type: Option<String>,
    pub visa_number: Option<String>,
    pub issue_date: Option<NaiveDate>,
    pub expiry_date: Option<NaiveDate>,
    pub notes: Option<String>,
}
