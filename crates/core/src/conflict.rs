//! Trip date-range conflict detection.
//!
//! A conflict is a pair of trips whose closed `[start, end]` date intervals
//! overlap. Trips missing either bound are excluded from conflict
//! consideration entirely. The scan is O(n²) pairwise, which is fine at the
//! expected scale of dozens to low hundreds of trips.

use std::collections::HashMap;

use chrono::NaiveDate;

use crate::types::DbId;

/// Minimal projection of a trip consumed by conflict detection and the
/// calendar grid builders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TripSpan {
    pub id: DbId,
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

impl TripSpan {
    /// Closed interval bounds, present only when both dates are set.
    fn bounds(&self) -> Option<(NaiveDate, NaiveDate)> {
        match (self.start, self.end) {
            (Some(start), Some(end)) => Some((start, end)),
            _ => None,
        }
    }

    /// Whether the trip occupies `day`.
    ///
    /// A trip with only a start date counts as a single-day stay on that
    /// date; a trip with neither date occupies nothing.
    pub fn contains(&self, day: NaiveDate) -> bool {
        match (self.start, self.end) {
            (Some(start), Some(end)) => start <= day && day <= end,
            (Some(start), None) => start == day,
            _ => false,
        }
    }
}

/// Two closed intervals overlap when each starts no later than the other
/// ends. Trips without both bounds never overlap anything.
pub fn spans_overlap(a: &TripSpan, b: &TripSpan) -> bool {
    match (a.bounds(), b.bounds()) {
        (Some((start_a, end_a)), Some((start_b, end_b))) => {
            start_a <= end_b && start_b <= end_a
        }
        _ => false,
    }
}

/// Compute the conflict map for a set of trips.
///
/// The result contains an entry only for trips with at least one conflict;
/// each value lists the other trip ids in input order. Both directions of a
/// conflicting pair are recorded, and a trip is never reported against
/// itself.
pub fn detect_conflicts(trips: &[TripSpan]) -> HashMap<DbId, Vec<DbId>> {
    let mut conflicts: HashMap<DbId, Vec<DbId>> = HashMap::new();

    for i in 0..trips.len() {
        for j in (i + 1)..trips.len() {
            let (a, b) = (&trips[i], &trips[j]);
            if a.id != b.id && spans_overlap(a, b) {
                conflicts.entry(a.id).or_default().push(b.id);
                conflicts.entry(b.id).or_default().push(a.id);
            }
        }
    }

    conflicts
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

    fn span(id: DbId, start: Option<(i32, u32, u32)>, end: Option<(i32, u32, u32)>) -> TripSpan {
        TripSpan {
            id,
            start: start.map(|(y, m, d)| date(y, m, d)),
            end: end.map(|(y, m, d)| date(y, m, d)),
        }
    }

    #[test]
    fn overlapping_pair_recorded_both_ways() {
        let a = span(1, Some((2024, 1, 1)), Some((2024, 1, 5)));
        let b = span(2, Some((2024, 1, 4)), Some((2024, 1, 10)));

        let map = detect_conflicts(&[a, b]);
        assert_eq!(map.len(), 2);
        assert_eq!(map[&1], vec![2]);
        assert_eq!(map[&2], vec![1]);
    }

    #[test]
    fn adjacent_trips_do_not_conflict() {
        let a = span(1, Some((2024, 1, 1)), Some((2024, 1, 5)));
        let c = span(3, Some((2024, 1, 6)), Some((2024, 1, 8)));

        let map = detect_conflicts(&[a, c]);
        assert!(map.is_empty());
    }

    #[test]
    fn same_day_boundary_conflicts() {
        // Closed intervals: sharing a single day counts as an overlap.
        let a = span(1, Some((2024, 1, 1)), Some((2024, 1, 5)));
        let b = span(2, Some((2024, 1, 5)), Some((2024, 1, 9)));

        let map = detect_conflicts(&[a, b]);
        assert_eq!(map[&1], vec![2]);
        assert_eq!(map[&2], vec![1]);
    }

    #[test]
    fn overlap_is_symmetric() {
        let a = span(1, Some((2024, 3, 10)), Some((2024, 3, 20)));
        let b = span(2, Some((2024, 3, 15)), Some((2024, 3, 25)));
        assert_eq!(spans_overlap(&a, &b), spans_overlap(&b, &a));

        let c = span(3, Some((2024, 4, 1)), Some((2024, 4, 2)));
        assert_eq!(spans_overlap(&a, &c), spans_overlap(&c, &a));
    }

    #[test]
    fn dateless_trips_never_appear() {
        let no_dates = span(1, None, None);
        let no_end = span(2, Some((2024, 1, 1)), None);
        let full = span(3, Some((2024, 1, 1)), Some((2024, 12, 31)));

        let map = detect_conflicts(&[no_dates, no_end, full]);
        assert!(!map.contains_key(&1));
        assert!(!map.contains_key(&2));
        // Nothing else to conflict with, so the map is empty outright.
        assert!(map.is_empty());
    }

    #[test]
    fn trip_never_conflicts_with_itself() {
        let a = span(1, Some((2024, 1, 1)), Some((2024, 1, 5)));
        let map = detect_conflicts(&[a]);
        assert!(map.is_empty());

        // Duplicate ids in the input are still excluded as identity pairs.
        let map = detect_conflicts(&[a, a]);
        assert!(map.is_empty());
    }

    #[test]
    fn value_lists_follow_input_order() {
        let a = span(1, Some((2024, 1, 1)), Some((2024, 1, 31)));
        let b = span(2, Some((2024, 1, 10)), Some((2024, 1, 12)));
        let c = span(3, Some((2024, 1, 20)), Some((2024, 1, 22)));

        let map = detect_conflicts(&[a, b, c]);
        assert_eq!(map[&1], vec![2, 3]);
        assert_eq!(map[&2], vec![1]);
        assert_eq!(map[&3], vec![1]);
    }

    #[test]
    fn contains_handles_partial_dates() {
        let full = span(1, Some((2024, 5, 1)), Some((2024, 5, 10)));
        assert!(full.contains(date(2024, 5, 1)));
        assert!(full.contains(date(2024, 5, 10)));
        assert!(!full.contains(date(2024, 5, 11)));

        let start_only = span(2, Some((2024, 5, 3)), None);
        assert!(start_only.contains(date(2024, 5, 3)));
        assert!(!start_only.contains(date(2024, 5, 4)));

        let dateless = span(3, None, None);
        assert!(!dateless.contains(date(2024, 5, 3)));
    }
}
