use chrono::{Days, NaiveDate};

use slipcal_types::{Observation, Period, SlipcalError, StatusRange};

/// Collapse one period's per-day observations into maximal status ranges.
///
/// - Observations are sorted by date; any pre-existing order is accepted.
/// - A range extends only while the status is identical AND the next
///   observation is the strict next calendar day. A missing date breaks the
///   range even when the status matches on both sides.
/// - Empty input produces an empty list; a single observation produces one
///   single-day range.
///
/// # Errors
/// Returns `InvalidInput` when two observations share a date, or when an
/// observation falls outside `period`. Both are caller contract violations;
/// failing fast here beats the silent range corruption they used to cause
/// downstream.
pub fn normalize_period(
    period: Period,
    observations: &[Observation],
) -> Result<Vec<StatusRange>, SlipcalError> {
    let mut sorted: Vec<Observation> = observations.to_vec();
    sorted.sort_by_key(|o| o.date);

    let mut ranges: Vec<StatusRange> = Vec::new();
    let mut open: Option<StatusRange> = None;

    for obs in sorted {
        if !period.contains(obs.date) {
            return Err(SlipcalError::invalid_input(format!(
                "observation date {} outside period {period}",
                obs.date
            )));
        }
        match open.take() {
            None => open = Some(StatusRange::single(obs.date, obs.status)),
            Some(current) => {
                if obs.date == current.end {
                    return Err(SlipcalError::invalid_input(format!(
                        "duplicate observation date {} in period {period}",
                        obs.date
                    )));
                }
                if obs.status == current.status && obs.date == next_day(current.end) {
                    open = Some(StatusRange::new(current.start, obs.date, current.status));
                } else {
                    ranges.push(current);
                    open = Some(StatusRange::single(obs.date, obs.status));
                }
            }
        }
    }

    if let Some(current) = open {
        ranges.push(current);
    }
    Ok(ranges)
}

fn next_day(date: NaiveDate) -> NaiveDate {
    date.checked_add_days(Days::new(1)).unwrap_or(date)
}
