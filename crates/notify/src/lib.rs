//! Maison outbound notification delivery.
//!
//! This crate owns the transport seam between the itinerary composer and
//! the outside world:
//!
//! - [`Transport`]: the object-safe delivery trait the composer depends
//!   on; implementations never return `Err`, they report per-attempt
//!   outcomes as [`SendOutcome`].
//! - [`email`]: SMTP delivery via `lettre`.
//! - [`whatsapp`]: WhatsApp text delivery via an HTTP JSON API.
//! - [`Notifier`]: the production [`Transport`] combining both channels,
//!   each optional depending on configuration.

pub mod email;
pub mod transport;
pub mod whatsapp;

pub use email::{EmailConfig, SmtpMailer};
pub use transport::{ChatMessage, EmailMessage, Notifier, SendOutcome, Transport};
pub use whatsapp::{WhatsappConfig, WhatsappSender};
