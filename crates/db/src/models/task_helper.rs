//! Task helper (contractor/assistant) entity model and DTOs.

use maison_core::itinerary::ContactCard;
use maison_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A task helper row from the `task_helpers` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct TaskHelper {
    pub id: DbId,
    pub full_name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub specialty: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl TaskHelper {
    /// Messaging projection: the stored full name plus direct contacts.
    pub fn contact_card(&self) -> ContactCard {
        ContactCard {
            display_name: self.full_name.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
        }
    }
}

/// DTO for creating a task helper.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateTaskHelper {
    pub full_name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub specialty: Option<String>,
}

/// DTO for updating a task helper. All fields are optional.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateTaskHelper {
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub specialty: Option<String>,
}
