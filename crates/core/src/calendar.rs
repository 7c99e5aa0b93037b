//! Calendar grid builders for the trip calendar views.
//!
//! Pure date arithmetic: the month grid pads with leading/trailing days so
//! every row is a full Monday-to-Sunday week; the week grid is the seven
//! days of the anchor's week. Trip placement into cells goes through
//! [`trips_on_day`].

use chrono::{Datelike, Days, NaiveDate, Weekday};
use serde::Serialize;

use crate::conflict::TripSpan;
use crate::types::DbId;

/// One cell of a calendar grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DayCell {
    pub date: NaiveDate,
    /// Whether the cell belongs to the display month (false for the padding
    /// days of adjacent months).
    pub in_month: bool,
    pub weekend: bool,
    pub today: bool,
}

/// The Monday on or before `date`.
fn week_start(date: NaiveDate) -> NaiveDate {
    date - Days::new(u64::from(date.weekday().num_days_from_monday()))
}

fn cell(date: NaiveDate, in_month: bool, today: NaiveDate) -> DayCell {
    DayCell {
        date,
        in_month,
        weekend: matches!(date.weekday(), Weekday::Sat | Weekday::Sun),
        today: date == today,
    }
}

/// Build the month grid for `year`/`month`.
///
/// Returns `None` for an invalid month. The grid always covers whole weeks,
/// so its length is a multiple of 7 and the first cell is a Monday.
pub fn month_grid(year: i32, month: u32, today: NaiveDate) -> Option<Vec<DayCell>> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let next_month = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)?
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)?
    };
    let last = next_month.pred_opt()?;

    let grid_start = week_start(first);
    let grid_end = week_start(last) + Days::new(6);

    let mut cells = Vec::new();
    let mut day = grid_start;
    while day <= grid_end {
        cells.push(cell(day, day.month() == month && day.year() == year, today));
        day = day.succ_opt()?;
    }
    Some(cells)
}

/// Build the seven cells of the week containing `anchor`, Monday first.
///
/// `in_month` is relative to the anchor's month so week views spanning a
/// month boundary can dim the foreign days.
pub fn week_grid(anchor: NaiveDate, today: NaiveDate) -> Vec<DayCell> {
    let start = week_start(anchor);
    (0..7)
        .map(|offset| {
            let date = start + Days::new(offset);
            cell(date, date.month() == anchor.month(), today)
        })
        .collect()
}

/// Ids of the trips whose `[start, end]` interval contains `day`.
///
/// Start-only trips count as single-day stays; dateless trips are never
/// placed.
pub fn trips_on_day(trips: &[TripSpan], day: NaiveDate) -> Vec<DbId> {
    trips
        .iter()
        .filter(|trip| trip.contains(day))
        .map(|trip| trip.id)
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn month_grid_covers_whole_weeks() {
        let today = date(2024, 5, 15);
        let grid = month_grid(2024, 5, today).unwrap();

        assert_eq!(grid.len() % 7, 0);
        assert_eq!(grid[0].date.weekday(), Weekday::Mon);
        assert_eq!(grid.last().unwrap().date.weekday(), Weekday::Sun);
    }

    #[test]
    fn month_grid_flags_padding_days() {
        // May 2024 starts on a Wednesday: the grid leads with Apr 29-30.
        let today = date(2024, 5, 15);
        let grid = month_grid(2024, 5, today).unwrap();

        assert_eq!(grid[0].date, date(2024, 4, 29));
        assert!(!grid[0].in_month);
        assert!(!grid[1].in_month);
        assert!(grid[2].in_month);
        assert_eq!(grid[2].date, date(2024, 5, 1));

        let in_month_count = grid.iter().filter(|c| c.in_month).count();
        assert_eq!(in_month_count, 31);
    }

    #[test]
    fn month_grid_december_wraps_year() {
        let today = date(2024, 12, 1);
        let grid = month_grid(2024, 12, today).unwrap();
        let in_month_count = grid.iter().filter(|c| c.in_month).count();
        assert_eq!(in_month_count, 31);
        // Trailing cells belong to January 2025 and are not in-month.
        assert!(!grid.last().unwrap().in_month);
    }

    #[test]
    fn month_grid_rejects_invalid_month() {
        assert!(month_grid(2024, 13, date(2024, 1, 1)).is_none());
        assert!(month_grid(2024, 0, date(2024, 1, 1)).is_none());
    }

    #[test]
    fn month_grid_marks_today_and_weekends() {
        let today = date(2024, 5, 15);
        let grid = month_grid(2024, 5, today).unwrap();

        let todays: Vec<_> = grid.iter().filter(|c| c.today).collect();
        assert_eq!(todays.len(), 1);
        assert_eq!(todays[0].date, today);

        // 2024-05-04 is a Saturday.
        let sat = grid.iter().find(|c| c.date == date(2024, 5, 4)).unwrap();
        assert!(sat.weekend);
        let wed = grid.iter().find(|c| c.date == today).unwrap();
        assert!(!wed.weekend);
    }

    #[test]
    fn week_grid_is_monday_first() {
        // 2024-05-15 is a Wednesday; its week runs May 13 (Mon) - 19 (Sun).
        let cells = week_grid(date(2024, 5, 15), date(2024, 5, 15));
        assert_eq!(cells.len(), 7);
        assert_eq!(cells[0].date, date(2024, 5, 13));
        assert_eq!(cells[6].date, date(2024, 5, 19));
        assert!(cells.iter().any(|c| c.today));
    }

    #[test]
    fn week_grid_spanning_month_boundary() {
        // 2024-05-01 is a Wednesday; its week starts Apr 29.
        let cells = week_grid(date(2024, 5, 1), date(2024, 1, 1));
        assert_eq!(cells[0].date, date(2024, 4, 29));
        assert!(!cells[0].in_month);
        assert!(cells[2].in_month);
    }

    #[test]
    fn trips_on_day_places_trips() {
        let trips = [
            TripSpan {
                id: 1,
                start: Some(date(2024, 5, 1)),
                end: Some(date(2024, 5, 10)),
            },
            TripSpan {
                id: 2,
                start: Some(date(2024, 5, 5)),
                end: None,
            },
            TripSpan {
                id: 3,
                start: None,
                end: None,
            },
        ];

        assert_eq!(trips_on_day(&trips, date(2024, 5, 5)), vec![1, 2]);
        assert_eq!(trips_on_day(&trips, date(2024, 5, 6)), vec![1]);
        assert_eq!(trips_on_day(&trips, date(2024, 5, 11)), Vec::<DbId>::new());
    }
}
