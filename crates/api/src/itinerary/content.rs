//! Itinerary content section renderers.
//!
//! One renderer per section kind, each returning a [`Rendered`] triple
//! (plain text, HTML, chat markup) built through [`MessageBuilder`] so the
//! three formats stay synchronized. [`render_content`] is the single fold
//! over the requested content types.
//!
//! Section rules:
//! - a kind with zero entities on the trip is omitted entirely;
//! - a present kind with zero items linked to the recipient renders its
//!   heading with an empty body;
//! - the full itinerary renders all trip items, unfiltered by linkage;
//! - missing dates, times, and references render the literal `TBD`.

use chrono::NaiveDate;
use maison_core::itinerary::{MessageBuilder, Rendered};
use maison_core::travel::ContentType;
use maison_core::types::{DbId, Timestamp};
use maison_db::models::flight::Flight;
use maison_db::models::hotel::HotelWithRooms;
use maison_db::models::private_jet::PrivateJet;
use maison_db::models::trip::{Trip, TripBundle};
use maison_db::models::trip_event::EventWithParticipants;

/// Literal rendered wherever a date, time, or reference is missing.
const TBD: &str = "TBD";

// ---------------------------------------------------------------------------
// Field formatting
// ---------------------------------------------------------------------------

fn fmt_datetime(value: Option<Timestamp>) -> String {
    value
        .map(|t| t.format("%Y-%m-%d %H:%M UTC").to_string())
        .unwrap_or_else(|| TBD.to_string())
}

fn fmt_date(value: Option<NaiveDate>) -> String {
    value
        .map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_else(|| TBD.to_string())
}

fn fmt_opt(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or(TBD)
}

// ---------------------------------------------------------------------------
// Linkage filters
// ---------------------------------------------------------------------------

/// Flights linked to the recipient through `flight_passengers`.
pub fn flights_for<'a>(
    bundle: &'a TripBundle,
    person_type: &str,
    person_id: DbId,
) -> Vec<&'a Flight> {
    bundle
        .flights
        .iter()
        .filter(|flight| {
            bundle.flight_passengers.iter().any(|link| {
                link.flight_id == flight.id
                    && link.person_type == person_type
                    && link.person_id == person_id
            })
        })
        .collect()
}

/// Jet charters linked to the recipient through `private_jet_passengers`.
pub fn jets_for<'a>(
    bundle: &'a TripBundle,
    person_type: &str,
    person_id: DbId,
) -> Vec<&'a PrivateJet> {
    bundle
        .private_jets
        .iter()
        .filter(|jet| {
            bundle.jet_passengers.iter().any(|link| {
                link.jet_id == jet.id
                    && link.person_type == person_type
                    && link.person_id == person_id
            })
        })
        .collect()
}

/// Hotels where any room assignment names the recipient.
pub fn hotels_for<'a>(
    bundle: &'a TripBundle,
    person_type: &str,
    person_id: DbId,
) -> Vec<&'a HotelWithRooms> {
    bundle
        .hotels
        .iter()
        .filter(|hotel| {
            hotel.rooms.iter().any(|room| {
                room.guests
                    .iter()
                    .any(|g| g.person_type == person_type && g.person_id == person_id)
            })
        })
        .collect()
}

/// Events where the participant list names the recipient.
pub fn events_for<'a>(
    bundle: &'a TripBundle,
    person_type: &str,
    person_id: DbId,
) -> Vec<&'a EventWithParticipants> {
    bundle
        .events
        .iter()
        .filter(|event| {
            event
                .participants
                .iter()
                .any(|p| p.person_type == person_type && p.person_id == person_id)
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Section renderers
// ---------------------------------------------------------------------------

/// Trip identifier and date range, the lead of every full itinerary.
pub fn trip_header(trip: &Trip) -> Rendered {
    let mut builder = MessageBuilder::new();
    builder.heading(&format!("Trip {}", trip.request_number));
    builder.line(&format!(
        "Dates: {} to {}",
        fmt_date(trip.start_date),
        fmt_date(trip.end_date)
    ));
    builder.finish()
}

/// Free-text note prepended ahead of all sections.
pub fn custom_note(text: &str) -> Rendered {
    let mut builder = MessageBuilder::new();
    builder.line(text);
    builder.finish()
}

pub fn flight_section(flights: &[&Flight]) -> Rendered {
    let mut builder = MessageBuilder::new();
    builder.heading("Flight Details");
    for flight in flights {
        builder.line(&format!(
            "{} {}: {} to {}",
            flight.airline, flight.flight_number, flight.departure_airport, flight.arrival_airport
        ));
        builder.item(&format!("Departs {}", fmt_datetime(flight.departure_time)));
        builder.item(&format!("Arrives {}", fmt_datetime(flight.arrival_time)));
        builder.item(&format!("Reference {}", fmt_opt(&flight.booking_reference)));
    }
    builder.finish()
}

pub fn jet_section(jets: &[&PrivateJet]) -> Rendered {
    let mut builder = MessageBuilder::new();
    builder.heading("Private Jet Details");
    for jet in jets {
        builder.line(&format!(
            "{} ({}): {} to {}",
            jet.operator_name,
            fmt_opt(&jet.tail_number),
            jet.departure_airport,
            jet.arrival_airport
        ));
        builder.item(&format!("Departs {}", fmt_datetime(jet.departure_time)));
        builder.item(&format!("Reference {}", fmt_opt(&jet.booking_reference)));
    }
    builder.finish()
}

pub fn hotel_section(hotels: &[&HotelWithRooms]) -> Rendered {
    let mut builder = MessageBuilder::new();
    builder.heading("Hotel Details");
    for entry in hotels {
        let hotel = &entry.hotel;
        match &hotel.city {
            Some(city) => builder.line(&format!("{}, {}", hotel.name, city)),
            None => builder.line(&hotel.name),
        };
        builder.item(&format!("Check-in {}", fmt_date(hotel.check_in)));
        builder.item(&format!("Check-out {}", fmt_date(hotel.check_out)));
        builder.item(&format!(
            "Confirmation {}",
            fmt_opt(&hotel.confirmation_number)
        ));
        for room in &entry.rooms {
            builder.item(&format!(
                "{} ({} guest{})",
                room.room.room_type,
                room.guests.len(),
                if room.guests.len() == 1 { "" } else { "s" }
            ));
        }
    }
    builder.finish()
}

pub fn event_section(events: &[&EventWithParticipants]) -> Rendered {
    let mut builder = MessageBuilder::new();
    builder.heading("Event Details");
    for entry in events {
        let event = &entry.event;
        match &event.location {
            Some(location) => builder.line(&format!("{} at {}", event.title, location)),
            None => builder.line(&event.title),
        };
        builder.item(&format!("Starts {}", fmt_datetime(event.starts_at)));
        builder.item(&format!("Ends {}", fmt_datetime(event.ends_at)));
    }
    builder.finish()
}

/// The composite itinerary: trip header, then every flight, hotel, and
/// event on the trip regardless of recipient linkage. Kinds with zero
/// entities are left out.
pub fn full_itinerary(bundle: &TripBundle) -> Rendered {
    let mut out = trip_header(&bundle.trip);
    if !bundle.flights.is_empty() {
        out.push(&flight_section(&bundle.flights.iter().collect::<Vec<_>>()));
    }
    if !bundle.hotels.is_empty() {
        out.push(&hotel_section(&bundle.hotels.iter().collect::<Vec<_>>()));
    }
    if !bundle.events.is_empty() {
        out.push(&event_section(&bundle.events.iter().collect::<Vec<_>>()));
    }
    out
}

// ---------------------------------------------------------------------------
// Composition
// ---------------------------------------------------------------------------

/// Render the requested content types for one recipient as a single fold,
/// so every section lands in all three formats in the same order.
///
/// Trip brief, passenger list, and custom tags are recognized but render no
/// section of their own.
pub fn render_content(
    bundle: &TripBundle,
    person_type: &str,
    person_id: DbId,
    types: &[ContentType],
    custom_message: Option<&str>,
) -> Rendered {
    let mut out = Rendered::default();

    if let Some(text) = custom_message {
        let text = text.trim();
        if !text.is_empty() {
            out.push(&custom_note(text));
        }
    }

    for content_type in types {
        match content_type {
            ContentType::FlightDetails if !bundle.flights.is_empty() => {
                out.push(&flight_section(&flights_for(bundle, person_type, person_id)));
            }
            ContentType::PrivateJetDetails if !bundle.private_jets.is_empty() => {
                out.push(&jet_section(&jets_for(bundle, person_type, person_id)));
            }
            ContentType::HotelDetails if !bundle.hotels.is_empty() => {
                out.push(&hotel_section(&hotels_for(bundle, person_type, person_id)));
            }
            ContentType::EventDetails if !bundle.events.is_empty() => {
                out.push(&event_section(&events_for(bundle, person_type, person_id)));
            }
            ContentType::FullItinerary => {
                out.push(&full_itinerary(bundle));
            }
            _ => {}
        }
    }

    out
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use maison_db::models::flight::FlightPassenger;
    use maison_db::models::hotel::{Hotel, HotelRoom, RoomAssignment, RoomWithGuests};
    use maison_db::models::trip_event::{EventParticipant, TripEvent};

    use super::*;

    fn trip() -> Trip {
        Trip {
            id: 1,
            request_number: "TR-2024-0042".into(),
            status_id: 2,
            start_date: NaiveDate::from_ymd_opt(2024, 5, 1),
            end_date: NaiveDate::from_ymd_opt(2024, 5, 10),
            notes: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn flight(id: DbId, reference: Option<&str>) -> Flight {
        Flight {
            id,
            trip_id: 1,
            airline: "BA".into(),
            flight_number: "117".into(),
            departure_airport: "LHR".into(),
            arrival_airport: "JFK".into(),
            departure_time: None,
            arrival_time: None,
            booking_reference: reference.map(str::to_string),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn hotel_with_rooms(id: DbId, guests: Vec<(&str, DbId)>) -> HotelWithRooms {
        HotelWithRooms {
            hotel: Hotel {
                id,
                trip_id: 1,
                name: "The Connaught".into(),
                city: Some("London".into()),
                check_in: NaiveDate::from_ymd_opt(2024, 5, 1),
                check_out: None,
                confirmation_number: Some("CNF-1".into()),
                created_at: Utc::now(),
                updated_at: Utc::now(),
            },
            rooms: vec![RoomWithGuests {
                room: HotelRoom {
                    id: id * 10,
                    hotel_id: id,
                    room_type: "Suite".into(),
                    created_at: Utc::now(),
                },
                guests: guests
                    .into_iter()
                    .enumerate()
                    .map(|(i, (pt, pid))| RoomAssignment {
                        id: i as DbId + 1,
                        room_id: id * 10,
                        person_type: pt.into(),
                        person_id: pid,
                        created_at: Utc::now(),
                    })
                    .collect(),
            }],
        }
    }

    fn event_with_participants(id: DbId, participants: Vec<(&str, DbId)>) -> EventWithParticipants {
        EventWithParticipants {
            event: TripEvent {
                id,
                trip_id: 1,
                title: "Embassy appointment".into(),
                location: Some("Paris".into()),
                starts_at: None,
                ends_at: None,
                notes: None,
                created_at: Utc::now(),
                updated_at: Utc::now(),
            },
            participants: participants
                .into_iter()
                .enumerate()
                .map(|(i, (pt, pid))| EventParticipant {
                    id: i as DbId + 1,
                    event_id: id,
                    person_type: pt.into(),
                    person_id: pid,
                })
                .collect(),
        }
    }

    fn bundle(
        flights: Vec<Flight>,
        flight_passengers: Vec<FlightPassenger>,
        hotels: Vec<HotelWithRooms>,
        events: Vec<EventWithParticipants>,
    ) -> TripBundle {
        TripBundle {
            trip: trip(),
            destinations: vec![],
            flights,
            flight_passengers,
            private_jets: vec![],
            jet_passengers: vec![],
            hotels,
            events,
            passengers: vec![],
        }
    }

    fn link(flight_id: DbId, person_type: &str, person_id: DbId) -> FlightPassenger {
        FlightPassenger {
            id: flight_id * 100,
            flight_id,
            person_type: person_type.into(),
            person_id,
        }
    }

    #[test]
    fn absent_section_kind_is_omitted_entirely() {
        // No hotels on the trip: requesting HOTEL_DETAILS renders nothing,
        // while the flight section still renders.
        let b = bundle(
            vec![flight(1, Some("ABC123"))],
            vec![link(1, "EMPLOYEE", 7)],
            vec![],
            vec![],
        );
        let rendered = render_content(
            &b,
            "EMPLOYEE",
            7,
            &[ContentType::HotelDetails, ContentType::FlightDetails],
            None,
        );

        assert!(!rendered.text.contains("Hotel Details"));
        assert!(rendered.text.contains("Flight Details"));
        assert!(rendered.text.contains("BA 117: LHR to JFK"));
    }

    #[test]
    fn unlinked_section_renders_heading_with_empty_body() {
        // One hotel exists but no room is assigned to this recipient: the
        // heading renders, the body is empty.
        let b = bundle(
            vec![],
            vec![],
            vec![hotel_with_rooms(1, vec![("STAKEHOLDER", 9)])],
            vec![],
        );
        let rendered = render_content(&b, "EMPLOYEE", 7, &[ContentType::HotelDetails], None);

        assert!(rendered.text.contains("Hotel Details"));
        assert!(!rendered.text.contains("The Connaught"));
        assert_eq!(rendered.chat, "*Hotel Details*\n");
    }

    #[test]
    fn missing_fields_render_tbd() {
        let b = bundle(
            vec![flight(1, None)],
            vec![link(1, "EMPLOYEE", 7)],
            vec![],
            vec![],
        );
        let rendered = render_content(&b, "EMPLOYEE", 7, &[ContentType::FlightDetails], None);

        assert!(rendered.text.contains("Departs TBD"));
        assert!(rendered.text.contains("Arrives TBD"));
        assert!(rendered.text.contains("Reference TBD"));
    }

    #[test]
    fn full_itinerary_ignores_linkage() {
        // Nothing links this recipient, but the full itinerary still
        // carries every section plus the trip header.
        let b = bundle(
            vec![flight(1, Some("ABC123"))],
            vec![],
            vec![hotel_with_rooms(2, vec![("STAKEHOLDER", 9)])],
            vec![event_with_participants(3, vec![("STAKEHOLDER", 9)])],
        );
        let rendered = render_content(&b, "EMPLOYEE", 7, &[ContentType::FullItinerary], None);

        assert!(rendered.text.contains("Trip TR-2024-0042"));
        assert!(rendered.text.contains("Dates: 2024-05-01 to 2024-05-10"));
        assert!(rendered.text.contains("BA 117: LHR to JFK"));
        assert!(rendered.text.contains("The Connaught"));
        assert!(rendered.text.contains("Embassy appointment at Paris"));
    }

    #[test]
    fn full_itinerary_omits_absent_kinds() {
        let b = bundle(vec![flight(1, None)], vec![], vec![], vec![]);
        let rendered = render_content(&b, "EMPLOYEE", 7, &[ContentType::FullItinerary], None);

        assert!(rendered.text.contains("Flight Details"));
        assert!(!rendered.text.contains("Hotel Details"));
        assert!(!rendered.text.contains("Event Details"));
    }

    #[test]
    fn custom_message_is_prepended() {
        let b = bundle(
            vec![flight(1, None)],
            vec![link(1, "EMPLOYEE", 7)],
            vec![],
            vec![],
        );
        let rendered = render_content(
            &b,
            "EMPLOYEE",
            7,
            &[ContentType::FlightDetails],
            Some("Please travel with your passport."),
        );

        assert!(rendered
            .text
            .starts_with("Please travel with your passport.\n"));
        let note_pos = rendered.text.find("passport").unwrap();
        let section_pos = rendered.text.find("Flight Details").unwrap();
        assert!(note_pos < section_pos);
    }

    #[test]
    fn unhandled_types_render_nothing() {
        let b = bundle(vec![flight(1, None)], vec![], vec![], vec![]);
        let rendered = render_content(
            &b,
            "EMPLOYEE",
            7,
            &[
                ContentType::TripBrief,
                ContentType::PassengerList,
                ContentType::Custom,
            ],
            None,
        );
        assert!(rendered.is_empty());
    }

    #[test]
    fn three_formats_stay_parallel() {
        let b = bundle(
            vec![flight(1, Some("ABC123"))],
            vec![link(1, "EMPLOYEE", 7)],
            vec![],
            vec![],
        );
        let rendered = render_content(&b, "EMPLOYEE", 7, &[ContentType::FlightDetails], None);

        assert!(rendered.text.contains("Flight Details"));
        assert!(rendered.html.contains("<h3>Flight Details</h3>"));
        assert!(rendered.chat.contains("*Flight Details*"));
        assert!(rendered.html.contains("BA 117: LHR to JFK"));
        assert!(rendered.chat.contains("BA 117: LHR to JFK"));
    }
}
