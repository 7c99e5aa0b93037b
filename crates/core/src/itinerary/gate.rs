//! Per-passenger notification preference gate.
//!
//! Runs before any content is rendered or any transport is called. The gate
//! is all-or-nothing across the requested content types: one disallowed
//! type skips the passenger entirely.

use crate::travel::{ContentFlag, ContentType, NotificationPreference};

/// The passenger's per-category content flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContentFlags {
    pub flight: bool,
    pub hotel: bool,
    pub event: bool,
    pub itinerary: bool,
}

impl ContentFlags {
    fn allows(self, flag: ContentFlag) -> bool {
        match flag {
            ContentFlag::Flight => self.flight,
            ContentFlag::Hotel => self.hotel,
            ContentFlag::Event => self.event,
            ContentFlag::Itinerary => self.itinerary,
        }
    }
}

/// Why a passenger was skipped without any delivery attempt.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SkipReason {
    #[error("notifications disabled")]
    NotificationsDisabled,

    #[error("prefers minimal notifications")]
    PrefersMinimal,

    #[error("does not receive {} content", .0.as_str())]
    ContentDisallowed(ContentType),
}

/// Decide whether a passenger receives this send at all.
///
/// - `NONE` skips unconditionally.
/// - `MINIMAL` requires the request to include a full-itinerary or
///   trip-brief type.
/// - Regardless of the overall preference, every requested type's
///   per-category flag must be set; the first disallowed type skips the
///   whole passenger.
pub fn check_gate(
    preference: NotificationPreference,
    flags: ContentFlags,
    requested: &[ContentType],
) -> Result<(), SkipReason> {
    if preference == NotificationPreference::None {
        return Err(SkipReason::NotificationsDisabled);
    }

    if preference == NotificationPreference::Minimal {
        let has_summary = requested.iter().any(|t| {
            matches!(t, ContentType::FullItinerary | ContentType::TripBrief)
        });
        if !has_summary {
            return Err(SkipReason::PrefersMinimal);
        }
    }

    for content_type in requested {
        if let Some(flag) = content_type.required_flag() {
            if !flags.allows(flag) {
                return Err(SkipReason::ContentDisallowed(*content_type));
            }
        }
    }

    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    const ALL_FLAGS: ContentFlags = ContentFlags {
        flight: true,
        hotel: true,
        event: true,
        itinerary: true,
    };

    #[test]
    fn none_preference_always_skips() {
        for types in [
            vec![ContentType::FlightDetails],
            vec![ContentType::FullItinerary],
            vec![],
        ] {
            assert_eq!(
                check_gate(NotificationPreference::None, ALL_FLAGS, &types),
                Err(SkipReason::NotificationsDisabled)
            );
        }
    }

    #[test]
    fn minimal_skips_granular_only_requests() {
        let result = check_gate(
            NotificationPreference::Minimal,
            ALL_FLAGS,
            &[ContentType::FlightDetails],
        );
        assert_eq!(result, Err(SkipReason::PrefersMinimal));
    }

    #[test]
    fn minimal_passes_with_full_itinerary() {
        assert!(check_gate(
            NotificationPreference::Minimal,
            ALL_FLAGS,
            &[ContentType::FullItinerary]
        )
        .is_ok());
        assert!(check_gate(
            NotificationPreference::Minimal,
            ALL_FLAGS,
            &[ContentType::TripBrief]
        )
        .is_ok());
    }

    #[test]
    fn minimal_with_summary_still_checks_flags() {
        let no_itinerary = ContentFlags {
            itinerary: false,
            ..ALL_FLAGS
        };
        assert_matches!(
            check_gate(
                NotificationPreference::Minimal,
                no_itinerary,
                &[ContentType::FullItinerary]
            ),
            Err(SkipReason::ContentDisallowed(ContentType::FullItinerary))
        );
    }

    #[test]
    fn disallowed_flag_skips_regardless_of_preference() {
        let no_flight = ContentFlags {
            flight: false,
            ..ALL_FLAGS
        };
        assert_matches!(
            check_gate(
                NotificationPreference::All,
                no_flight,
                &[ContentType::FlightDetails]
            ),
            Err(SkipReason::ContentDisallowed(ContentType::FlightDetails))
        );
    }

    #[test]
    fn one_disallowed_type_skips_the_whole_request() {
        // Requesting four allowed types plus one disallowed type rejects
        // everything, not just the disallowed type.
        let no_hotel = ContentFlags {
            hotel: false,
            ..ALL_FLAGS
        };
        let requested = [
            ContentType::FlightDetails,
            ContentType::EventDetails,
            ContentType::FullItinerary,
            ContentType::HotelDetails,
        ];
        assert_matches!(
            check_gate(NotificationPreference::All, no_hotel, &requested),
            Err(SkipReason::ContentDisallowed(ContentType::HotelDetails))
        );
    }

    #[test]
    fn private_jet_is_not_flag_gated() {
        let no_flags = ContentFlags {
            flight: false,
            hotel: false,
            event: false,
            itinerary: false,
        };
        assert!(check_gate(
            NotificationPreference::All,
            no_flags,
            &[ContentType::PrivateJetDetails]
        )
        .is_ok());
    }

    #[test]
    fn skip_reason_messages() {
        assert_eq!(
            SkipReason::NotificationsDisabled.to_string(),
            "notifications disabled"
        );
        assert_eq!(
            SkipReason::PrefersMinimal.to_string(),
            "prefers minimal notifications"
        );
        assert_eq!(
            SkipReason::ContentDisallowed(ContentType::FlightDetails).to_string(),
            "does not receive FLIGHT_DETAILS content"
        );
    }
}
