//! Handlers for the month and week calendar views.
//!
//! The handlers load every trip once, map rows to date spans, and delegate
//! the grid math and conflict detection to the pure `maison_core`
//! functions.

use std::collections::{BTreeMap, HashMap};

use axum::extract::{Query, State};
use axum::response::IntoResponse;
use axum::Json;
use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use maison_core::calendar::{month_grid, trips_on_day, week_grid, DayCell};
use maison_core::conflict::{detect_conflicts, TripSpan};
use maison_core::error::CoreError;
use maison_core::types::DbId;
use maison_db::models::trip::Trip;
use maison_db::repositories::TripRepo;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Query parameters and response shape
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub struct MonthParams {
    pub year: i32,
    pub month: u32,
}

#[derive(Debug, Deserialize)]
pub struct WeekParams {
    /// Any date inside the requested week.
    pub date: NaiveDate,
}

/// One calendar view: the day cells, trip placement per day, the conflict
/// map, and the trip rows for chip labelling.
#[derive(Debug, Serialize)]
pub struct CalendarView {
    pub cells: Vec<DayCell>,
    /// ISO date -> ids of the trips occupying that day. Days without trips
    /// are omitted.
    pub trips_by_day: BTreeMap<String, Vec<DbId>>,
    pub conflicts: HashMap<DbId, Vec<DbId>>,
    pub trips: Vec<Trip>,
}

fn spans(trips: &[Trip]) -> Vec<TripSpan> {
    trips
        .iter()
        .map(|trip| TripSpan {
            id: trip.id,
            start: trip.start_date,
            end: trip.end_date,
        })
        .collect()
}

fn build_view(trips: Vec<Trip>, cells: Vec<DayCell>) -> CalendarView {
    let spans = spans(&trips);

    let mut trips_by_day = BTreeMap::new();
    for cell in &cells {
        let ids = trips_on_day(&spans, cell.date);
        if !ids.is_empty() {
            trips_by_day.insert(cell.date.to_string(), ids);
        }
    }

    CalendarView {
        cells,
        trips_by_day,
        conflicts: detect_conflicts(&spans),
        trips,
    }
}

// ---------------------------------------------------------------------------
// GET /calendar/month?year=&month=
// ---------------------------------------------------------------------------

/// The month grid with trip placement and conflicts.
pub async fn month_view(
    State(state): State<AppState>,
    Query(params): Query<MonthParams>,
) -> AppResult<impl IntoResponse> {
    let today = Utc::now().date_naive();
    let cells = month_grid(params.year, params.month, today).ok_or_else(|| {
        CoreError::Validation(format!("Invalid month: {}-{}", params.year, params.month))
    })?;

    let trips = TripRepo::list(&state.pool).await?;
    tracing::debug!(
        year = params.year,
        month = params.month,
        trips = trips.len(),
        "Built month view"
    );
    Ok(Json(DataResponse {
        data: build_view(trips, cells),
    }))
}

// ---------------------------------------------------------------------------
// GET /calendar/week?date=
// ---------------------------------------------------------------------------

/// The week grid with trip placement and conflicts.
pub async fn week_view(
    State(state): State<AppState>,
    Query(params): Query<WeekParams>,
) -> AppResult<impl IntoResponse> {
    let today = Utc::now().date_naive();
    let cells = week_grid(params.date, today);

    let trips = TripRepo::list(&state.pool).await?;
    tracing::debug!(anchor = %params.date, trips = trips.len(), "Built week view");
    Ok(Json(DataResponse {
        data: build_view(trips, cells),
    }))
}
