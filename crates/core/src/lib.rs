//! Maison domain core.
//!
//! Pure domain logic shared by the persistence and API layers:
//!
//! - [`types`]: shared id and timestamp aliases.
//! - [`error`]: the [`error::CoreError`] taxonomy.
//! - [`travel`]: travel-domain enumerations and their string mappings.
//! - [`conflict`]: trip date-range overlap detection.
//! - [`calendar`]: month/week grid builders for the trip calendar views.
//! - [`itinerary`]: notification preference gating, three-format message
//!   rendering, and phone normalization.
//!
//! This crate has no internal dependencies and performs no I/O.

pub mod calendar;
pub mod conflict;
pub mod error;
pub mod itinerary;
pub mod travel;
pub mod types;
