//! Family member entity model and DTOs.
//!
//! Family members belong to an employer household. Relationship links are
//! intentionally shallow: a free-text relation label, no graph.

use chrono::NaiveDate;
use maison_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A family member row from the `family_members` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct FamilyMember {
    pub id: DbId,
    pub employer_id: DbId,
    pub full_name: String,
    pub relation: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    pub notes: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for adding a family member to a household.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateFamilyMember {
    pub full_name: String,
    pub relation: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    pub notes: Option<String>,
}

/// DTO for updating a family member. All fields are optional.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateFamilyMember {
    pub full_name: Option<String>,
    pub relation: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    pub notes: Option<String>,
}
