//! Travel-domain enumerations.
//!
//! Person types, notification preferences, channels, content types, and
//! delivery statuses are stored as SCREAMING_SNAKE_CASE strings in both the
//! database and API payloads. Each enum here owns the canonical string
//! mapping; the persistence layer stores the strings verbatim.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// PersonType
// ---------------------------------------------------------------------------

/// Which identity table a passenger, guest assignment, or event participant
/// points into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PersonType {
    Employee,
    Stakeholder,
    Employer,
    TaskHelper,
}

impl PersonType {
    /// The database/API string for this variant.
    pub fn as_str(self) -> &'static str {
        match self {
            PersonType::Employee => "EMPLOYEE",
            PersonType::Stakeholder => "STAKEHOLDER",
            PersonType::Employer => "EMPLOYER",
            PersonType::TaskHelper => "TASK_HELPER",
        }
    }

    /// Parse the database/API string form.
    pub fn parse(value: &str) -> Result<Self, CoreError> {
        match value {
            "EMPLOYEE" => Ok(PersonType::Employee),
            "STAKEHOLDER" => Ok(PersonType::Stakeholder),
            "EMPLOYER" => Ok(PersonType::Employer),
            "TASK_HELPER" => Ok(PersonType::TaskHelper),
            other => Err(CoreError::Validation(format!(
                "Unknown person type: {other}"
            ))),
        }
    }
}

// ---------------------------------------------------------------------------
// NotificationPreference
// ---------------------------------------------------------------------------

/// A passenger's overall notification preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NotificationPreference {
    All,
    None,
    Minimal,
}

impl NotificationPreference {
    pub fn as_str(self) -> &'static str {
        match self {
            NotificationPreference::All => "ALL",
            NotificationPreference::None => "NONE",
            NotificationPreference::Minimal => "MINIMAL",
        }
    }

    /// Parse the stored string form. Unknown values fall back to `All` so a
    /// row written by an older client still receives notifications.
    pub fn parse_lossy(value: &str) -> Self {
        match value {
            "NONE" => NotificationPreference::None,
            "MINIMAL" => NotificationPreference::Minimal,
            _ => NotificationPreference::All,
        }
    }
}

// ---------------------------------------------------------------------------
// Channels
// ---------------------------------------------------------------------------

/// The channel selector accepted by the send-details endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Channel {
    Email,
    Whatsapp,
    Both,
}

impl Channel {
    pub fn parse(value: &str) -> Result<Self, CoreError> {
        match value {
            "EMAIL" => Ok(Channel::Email),
            "WHATSAPP" => Ok(Channel::Whatsapp),
            "BOTH" => Ok(Channel::Both),
            other => Err(CoreError::Validation(format!("Unknown channel: {other}"))),
        }
    }

    /// Whether email delivery is requested.
    pub fn wants_email(self) -> bool {
        matches!(self, Channel::Email | Channel::Both)
    }

    /// Whether WhatsApp delivery is requested.
    pub fn wants_whatsapp(self) -> bool {
        matches!(self, Channel::Whatsapp | Channel::Both)
    }
}

/// A single concrete delivery channel, as recorded on receipts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DeliveryChannel {
    Email,
    Whatsapp,
}

impl DeliveryChannel {
    pub fn as_str(self) -> &'static str {
        match self {
            DeliveryChannel::Email => "EMAIL",
            DeliveryChannel::Whatsapp => "WHATSAPP",
        }
    }
}

// ---------------------------------------------------------------------------
// DeliveryStatus
// ---------------------------------------------------------------------------

/// Outcome of one delivery attempt, as recorded on receipts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DeliveryStatus {
    Sent,
    Failed,
}

impl DeliveryStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            DeliveryStatus::Sent => "SENT",
            DeliveryStatus::Failed => "FAILED",
        }
    }
}

// ---------------------------------------------------------------------------
// ContentType
// ---------------------------------------------------------------------------

/// Per-category content flag a content type may require on the passenger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentFlag {
    Flight,
    Hotel,
    Event,
    Itinerary,
}

/// Tag selecting which itinerary section(s) to render into a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ContentType {
    FlightDetails,
    PrivateJetDetails,
    HotelDetails,
    EventDetails,
    FullItinerary,
    TripBrief,
    PassengerList,
    Custom,
}

impl ContentType {
    pub fn as_str(self) -> &'static str {
        match self {
            ContentType::FlightDetails => "FLIGHT_DETAILS",
            ContentType::PrivateJetDetails => "PRIVATE_JET_DETAILS",
            ContentType::HotelDetails => "HOTEL_DETAILS",
            ContentType::EventDetails => "EVENT_DETAILS",
            ContentType::FullItinerary => "FULL_ITINERARY",
            ContentType::TripBrief => "TRIP_BRIEF",
            ContentType::PassengerList => "PASSENGER_LIST",
            ContentType::Custom => "CUSTOM",
        }
    }

    /// Parse the API string form.
    pub fn parse(value: &str) -> Result<Self, CoreError> {
        match value {
            "FLIGHT_DETAILS" => Ok(ContentType::FlightDetails),
            "PRIVATE_JET_DETAILS" => Ok(ContentType::PrivateJetDetails),
            "HOTEL_DETAILS" => Ok(ContentType::HotelDetails),
            "EVENT_DETAILS" => Ok(ContentType::EventDetails),
            "FULL_ITINERARY" => Ok(ContentType::FullItinerary),
            "TRIP_BRIEF" => Ok(ContentType::TripBrief),
            "PASSENGER_LIST" => Ok(ContentType::PassengerList),
            "CUSTOM" => Ok(ContentType::Custom),
            other => Err(CoreError::Validation(format!(
                "Unknown content type: {other}"
            ))),
        }
    }

    /// The passenger flag this content type requires, if any.
    ///
    /// Private jet, trip brief, passenger list, and custom content are not
    /// gated by any per-category flag.
    pub fn required_flag(self) -> Option<ContentFlag> {
        match self {
            ContentType::FlightDetails => Some(ContentFlag::Flight),
            ContentType::HotelDetails => Some(ContentFlag::Hotel),
            ContentType::EventDetails => Some(ContentFlag::Event),
            ContentType::FullItinerary => Some(ContentFlag::Itinerary),
            ContentType::PrivateJetDetails
            | ContentType::TripBrief
            | ContentType::PassengerList
            | ContentType::Custom => None,
        }
    }

    /// Comma-joined label for a requested content-type list, as recorded on
    /// communication receipts.
    pub fn join_labels(types: &[ContentType]) -> String {
        types
            .iter()
            .map(|t| t.as_str())
            .collect::<Vec<_>>()
            .join(",")
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;
    use crate::error::CoreError;

    #[test]
    fn person_type_round_trips() {
        for pt in [
            PersonType::Employee,
            PersonType::Stakeholder,
            PersonType::Employer,
            PersonType::TaskHelper,
        ] {
            assert_eq!(PersonType::parse(pt.as_str()).unwrap(), pt);
        }
    }

    #[test]
    fn person_type_rejects_unknown() {
        assert_matches!(PersonType::parse("ROBOT"), Err(CoreError::Validation(_)));
    }

    #[test]
    fn preference_parse_lossy_defaults_to_all() {
        assert_eq!(
            NotificationPreference::parse_lossy("WEEKLY"),
            NotificationPreference::All
        );
        assert_eq!(
            NotificationPreference::parse_lossy("NONE"),
            NotificationPreference::None
        );
        assert_eq!(
            NotificationPreference::parse_lossy("MINIMAL"),
            NotificationPreference::Minimal
        );
    }

    #[test]
    fn channel_parse_and_wants() {
        assert_eq!(Channel::parse("EMAIL").unwrap(), Channel::Email);
        assert_eq!(Channel::parse("WHATSAPP").unwrap(), Channel::Whatsapp);
        assert_eq!(Channel::parse("BOTH").unwrap(), Channel::Both);
        assert_matches!(Channel::parse("FAX"), Err(CoreError::Validation(_)));

        assert!(Channel::Both.wants_email() && Channel::Both.wants_whatsapp());
        assert!(Channel::Email.wants_email() && !Channel::Email.wants_whatsapp());
        assert!(!Channel::Whatsapp.wants_email() && Channel::Whatsapp.wants_whatsapp());
    }

    #[test]
    fn content_type_round_trips() {
        for ct in [
            ContentType::FlightDetails,
            ContentType::PrivateJetDetails,
            ContentType::HotelDetails,
            ContentType::EventDetails,
            ContentType::FullItinerary,
            ContentType::TripBrief,
            ContentType::PassengerList,
            ContentType::Custom,
        ] {
            assert_eq!(ContentType::parse(ct.as_str()).unwrap(), ct);
        }
        assert_matches!(ContentType::parse("DINNER"), Err(CoreError::Validation(_)));
    }

    #[test]
    fn required_flags() {
        assert_eq!(
            ContentType::FlightDetails.required_flag(),
            Some(ContentFlag::Flight)
        );
        assert_eq!(
            ContentType::HotelDetails.required_flag(),
            Some(ContentFlag::Hotel)
        );
        assert_eq!(
            ContentType::EventDetails.required_flag(),
            Some(ContentFlag::Event)
        );
        assert_eq!(
            ContentType::FullItinerary.required_flag(),
            Some(ContentFlag::Itinerary)
        );
        // Private jet content is not gated by the flight flag.
        assert_eq!(ContentType::PrivateJetDetails.required_flag(), None);
        assert_eq!(ContentType::TripBrief.required_flag(), None);
    }

    #[test]
    fn join_labels_comma_separated() {
        let label = ContentType::join_labels(&[
            ContentType::FlightDetails,
            ContentType::HotelDetails,
        ]);
        assert_eq!(label, "FLIGHT_DETAILS,HOTEL_DETAILS");
        assert_eq!(ContentType::join_labels(&[]), "");
    }
}
