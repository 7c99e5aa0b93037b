//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` create DTO for inserts
//! - A `Deserialize` update DTO (all `Option` fields) for patches

pub mod communication;
pub mod daily_task;
pub mod destination;
pub mod employee;
pub mod employer;
pub mod family_member;
pub mod finance;
pub mod flight;
pub mod hotel;
pub mod meeting;
pub mod passenger;
pub mod private_jet;
pub mod stakeholder;
pub mod status;
pub mod task_helper;
pub mod trip;
pub mod trip_event;
pub mod visa;
