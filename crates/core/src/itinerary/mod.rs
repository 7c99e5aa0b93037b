//! Itinerary notification building blocks.
//!
//! The pure parts of the travel-details composer: the per-passenger
//! preference gate, the synchronized three-format renderer, and phone
//! normalization for WhatsApp delivery. The orchestration (store reads,
//! transport calls, receipt writes) lives in the API layer.

pub mod gate;
pub mod phone;
pub mod render;

pub use gate::{check_gate, ContentFlags, SkipReason};
pub use phone::normalize_phone;
pub use render::{escape_html, MessageBuilder, Rendered};

/// Common contact projection shared by all person variants.
///
/// Each identity table maps into this shape differently; the mapping is
/// owned by the variant, never by a loosely-typed field bag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactCard {
    pub display_name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
}
