//! Route definitions for the `/meetings` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::meeting;
use crate::state::AppState;

/// Routes mounted at `/meetings`.
///
/// ```text
/// GET    /     -> list_meetings
/// POST   /     -> create_meeting
/// GET    /{id} -> get_meeting
/// PUT    /{id} -> update_meeting
/// DELETE /{id} -> delete_meeting
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(meeting::list_meetings).post(meeting::create_meeting),
        )
        .route(
            "/{id}",
            get(meeting::get_meeting)
                .put(meeting::update_meeting)
                .delete(meeting::delete_meeting),
        )
}
