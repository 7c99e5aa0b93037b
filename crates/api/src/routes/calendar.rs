//! Route definitions for the calendar views.

use axum::routing::get;
use axum::Router;

use crate::handlers::calendar;
use crate::state::AppState;

/// Routes mounted at `/calendar`.
///
/// ```text
/// GET /month?year=&month= -> month_view
/// GET /week?date=         -> week_view
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/month", get(calendar::month_view))
        .route("/week", get(calendar::week_view))
}
