//! Route definitions for the `/trips` resource and its sub-entities.

use axum::routing::{delete, get, post};
use axum::Router;

use crate::handlers::{send_details, travel, trip};
use crate::state::AppState;

/// Routes mounted at `/trips`.
///
/// ```text
/// GET    /                                        -> list_trips
/// POST   /                                        -> create_trip
/// GET    /{id}                                    -> get_trip
/// PUT    /{id}                                    -> update_trip
/// DELETE /{id}                                    -> delete_trip
/// GET    /{id}/bundle                             -> get_trip_bundle
///
/// POST   /{id}/send-details                       -> send_travel_details
/// GET    /{id}/communications                     -> list_communications
///
/// GET    /{trip_id}/destinations                  -> list, create
/// DELETE /{trip_id}/destinations/{id}             -> delete_destination
///
/// GET    /{trip_id}/passengers                    -> list, create
/// PUT    /{trip_id}/passengers/{id}               -> update, delete
///
/// GET    /{trip_id}/flights                       -> list, create
/// GET    /{trip_id}/flights/{id}                  -> get, update, delete
/// GET    /{trip_id}/flights/{id}/passengers       -> list, link
/// DELETE /{trip_id}/flights/{id}/passengers/{lid} -> unlink
///
/// GET    /{trip_id}/private-jets                  -> list, create
/// PUT    /{trip_id}/private-jets/{id}             -> update, delete
/// POST   /{trip_id}/private-jets/{id}/passengers  -> link
/// DELETE /{trip_id}/private-jets/{id}/passengers/{lid} -> unlink
///
/// GET    /{trip_id}/hotels                        -> list, create
/// PUT    /{trip_id}/hotels/{id}                   -> update, delete
/// GET    /{trip_id}/hotels/{id}/rooms             -> list, add
/// DELETE /{trip_id}/hotels/{hid}/rooms/{rid}      -> remove
/// POST   /{trip_id}/hotels/{hid}/rooms/{rid}/assignments -> assign
/// DELETE /{trip_id}/hotels/{hid}/rooms/{rid}/assignments/{id} -> remove
///
/// GET    /{trip_id}/events                        -> list, create
/// PUT    /{trip_id}/events/{id}                   -> update, delete
/// POST   /{trip_id}/events/{id}/participants      -> add
/// DELETE /{trip_id}/events/{id}/participants/{lid} -> remove
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        // Trip CRUD
        .route("/", get(trip::list_trips).post(trip::create_trip))
        .route(
            "/{id}",
            get(trip::get_trip)
                .put(trip::update_trip)
                .delete(trip::delete_trip),
        )
        .route("/{id}/bundle", get(trip::get_trip_bundle))
        // Notification composer
        .route("/{id}/send-details", post(send_details::send_travel_details))
        .route("/{id}/communications", get(send_details::list_communications))
        // Destinations
        .route(
            "/{trip_id}/destinations",
            get(trip::list_destinations).post(trip::create_destination),
        )
        .route(
            "/{trip_id}/destinations/{id}",
            delete(trip::delete_destination),
        )
        // Passengers
        .route(
            "/{trip_id}/passengers",
            get(trip::list_passengers).post(trip::create_passenger),
        )
        .route(
            "/{trip_id}/passengers/{id}",
            axum::routing::put(trip::update_passenger).delete(trip::delete_passenger),
        )
        // Flights
        .route(
            "/{trip_id}/flights",
            get(travel::list_flights).post(travel::create_flight),
        )
        .route(
            "/{trip_id}/flights/{id}",
            get(travel::get_flight)
                .put(travel::update_flight)
                .delete(travel::delete_flight),
        )
        .route(
            "/{trip_id}/flights/{id}/passengers",
            get(travel::list_flight_passengers).post(travel::add_flight_passenger),
        )
        .route(
            "/{trip_id}/flights/{id}/passengers/{link_id}",
            delete(travel::remove_flight_passenger),
        )
        // Private jets
        .route(
            "/{trip_id}/private-jets",
            get(travel::list_private_jets).post(travel::create_private_jet),
        )
        .route(
            "/{trip_id}/private-jets/{id}",
            axum::routing::put(travel::update_private_jet).delete(travel::delete_private_jet),
        )
        .route(
            "/{trip_id}/private-jets/{id}/passengers",
            post(travel::add_jet_passenger),
        )
        .route(
            "/{trip_id}/private-jets/{id}/passengers/{link_id}",
            delete(travel::remove_jet_passenger),
        )
        // Hotels, rooms, assignments
        .route(
            "/{trip_id}/hotels",
            get(travel::list_hotels).post(travel::create_hotel),
        )
        .route(
            "/{trip_id}/hotels/{id}",
            axum::routing::put(travel::update_hotel).delete(travel::delete_hotel),
        )
        .route(
            "/{trip_id}/hotels/{id}/rooms",
            get(travel::list_hotel_rooms).post(travel::add_hotel_room),
        )
        .route(
            "/{trip_id}/hotels/{hotel_id}/rooms/{room_id}",
            delete(travel::delete_hotel_room),
        )
        .route(
            "/{trip_id}/hotels/{hotel_id}/rooms/{room_id}/assignments",
            post(travel::assign_room_guest),
        )
        .route(
            "/{trip_id}/hotels/{hotel_id}/rooms/{room_id}/assignments/{id}",
            delete(travel::remove_room_guest),
        )
        // Events and participants
        .route(
            "/{trip_id}/events",
            get(travel::list_events).post(travel::create_event),
        )
        .route(
            "/{trip_id}/events/{id}",
            axum::routing::put(travel::update_event).delete(travel::delete_event),
        )
        .route(
            "/{trip_id}/events/{id}/participants",
            post(travel::add_event_participant),
        )
        .route(
            "/{trip_id}/events/{id}/participants/{link_id}",
            delete(travel::remove_event_participant),
        )
}
