//! Identity resolution for notification recipients.
//!
//! A passenger record points into one of four identity tables. The resolved
//! person is a tagged union, never a loosely-typed bag of optional fields;
//! each variant owns its mapping into the common [`ContactCard`]
//! projection.

use maison_core::itinerary::ContactCard;
use maison_core::travel::PersonType;
use maison_core::types::DbId;
use maison_db::models::employee::Employee;
use maison_db::models::employer::Employer;
use maison_db::models::stakeholder::Stakeholder;
use maison_db::models::task_helper::TaskHelper;
use maison_db::repositories::{EmployeeRepo, EmployerRepo, StakeholderRepo, TaskHelperRepo};
use sqlx::PgPool;

/// One resolved identity, tagged by its source table.
#[derive(Debug, Clone)]
pub enum ResolvedPerson {
    Employee(Employee),
    Stakeholder(Stakeholder),
    Employer(Employer),
    TaskHelper(TaskHelper),
}

impl ResolvedPerson {
    /// Project to the common messaging shape. Employees and task helpers
    /// use their stored full name, stakeholders concatenate first and last
    /// name, employers use the company name with its primary contact
    /// fields.
    pub fn contact_card(&self) -> ContactCard {
        match self {
            ResolvedPerson::Employee(e) => e.contact_card(),
            ResolvedPerson::Stakeholder(s) => s.contact_card(),
            ResolvedPerson::Employer(e) => e.contact_card(),
            ResolvedPerson::TaskHelper(t) => t.contact_card(),
        }
    }
}

/// Look up a person in the identity table selected by `person_type`.
///
/// Returns `Ok(None)` when no row exists.
pub async fn resolve_person(
    pool: &PgPool,
    person_type: PersonType,
    person_id: DbId,
) -> Result<Option<ResolvedPerson>, sqlx::Error> {
    Ok(match person_type {
        PersonType::Employee => EmployeeRepo::find_by_id(pool, person_id)
            .await?
            .map(ResolvedPerson::Employee),
        PersonType::Stakeholder => StakeholderRepo::find_by_id(pool, person_id)
            .await?
            .map(ResolvedPerson::Stakeholder),
        PersonType::Employer => EmployerRepo::find_by_id(pool, person_id)
            .await?
            .map(ResolvedPerson::Employer),
        PersonType::TaskHelper => TaskHelperRepo::find_by_id(pool, person_id)
            .await?
            .map(ResolvedPerson::TaskHelper),
    })
}
