//! Stakeholder (family principal / associate) entity model and DTOs.

use maison_core::itinerary::ContactCard;
use maison_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A stakeholder row from the `stakeholders` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Stakeholder {
    pub id: DbId,
    pub first_name: String,
    pub last_name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub relationship: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Stakeholder {
    /// Messaging projection: first and last name concatenated.
    pub fn contact_card(&self) -> ContactCard {
        ContactCard {
            display_name: format!("{} {}", self.first_name, self.last_name),
            email: self.email.clone(),
            phone: self.phone.clone(),
        }
    }
}

/// DTO for creating a stakeholder.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateStakeholder {
    pub first_name: String,
    pub last_name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub relationship: Option<String>,
}

/// DTO for updating a stakeholder. All fields are optional.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateStakeholder {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub relationship: Option<String>,
}
