//! Employer (company/household) entity model and DTOs.

use maison_core::itinerary::ContactCard;
use maison_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// An employer row from the `employers` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Employer {
    pub id: DbId,
    pub company_name: String,
    pub contact_email: Option<String>,
    pub contact_phone: Option<String>,
    pub address: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Employer {
    /// Messaging projection: the company name with the primary contact
    /// fields mapped into the generic email/phone slots.
    pub fn contact_card(&self) -> ContactCard {
        ContactCard {
            display_name: self.company_name.clone(),
            email: self.contact_email.clone(),
            phone: self.contact_phone.clone(),
        }
    }
}

/// DTO for creating an employer.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateEmployer {
    pub company_name: String,
    pub contact_email: Option<String>,
    pub contact_phone: Option<String>,
    pub address: Option<String>,
}

/// DTO for updating an employer. All fields are optional.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateEmployer {
    pub company_name: Option<String>,
    pub contact_email: Option<String>,
    pub contact_phone: Option<String>,
    pub address: Option<String>,
}
