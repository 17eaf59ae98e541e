use slipcal_types::{DayStatus, StatusRange};

/// Collapse a year's leading and trailing off-season blocks into single
/// transition-day markers.
///
/// Must be applied once per vessel per year, after all of that year's
/// months have been normalized and concatenated. Only the first and last
/// element of the list are inspected; interior off-season runs are left
/// alone. A months-long off-season block is useless as a calendar event,
/// so only the boundary day survives, re-labeled:
///
/// - leading off-season `(start, end)` becomes `(end, end, LastDayOffSeason)`
/// - trailing off-season `(start, end)` becomes `(start, start, FirstDayOffSeason)`
///
/// An empty list is returned unchanged. When the list holds exactly one
/// off-season range it is both edges; both rules fire against the bounds
/// captured before either mutation, yielding the chronologically ordered
/// pair `[(start, FirstDayOffSeason), (end, LastDayOffSeason)]`. If that
/// lone range covered a single day the two markers coincide and only the
/// `LastDayOffSeason` one is kept (the leading rule runs first).
#[must_use]
pub fn correct_season_edges(ranges: Vec<StatusRange>) -> Vec<StatusRange> {
    let Some(first) = ranges.first().copied() else {
        return ranges;
    };
    // Bounds captured before any mutation; the single-range case reads both.
    let last = ranges[ranges.len() - 1];

    if ranges.len() == 1 {
        if !first.status.is_off_season() {
            return ranges;
        }
        if first.start == first.end {
            return vec![StatusRange::single(first.end, DayStatus::LastDayOffSeason)];
        }
        return vec![
            StatusRange::single(first.start, DayStatus::FirstDayOffSeason),
            StatusRange::single(first.end, DayStatus::LastDayOffSeason),
        ];
    }

    let mut out = ranges;
    if first.status.is_off_season() {
        out[0] = StatusRange::single(first.end, DayStatus::LastDayOffSeason);
    }
    if last.status.is_off_season() {
        let tail = out.len() - 1;
        out[tail] = StatusRange::single(last.start, DayStatus::FirstDayOffSeason);
    }
    out
}
