use slipcal_types::{Observation, Period, SlipcalError, StatusRange, TimelineOptions};

use super::normalize::normalize_period;
use super::season::correct_season_edges;

/// Fold per-period observation sets into one vessel timeline.
///
/// The fold is explicit about its ordering dependency: each period is
/// normalized independently, periods are concatenated in chronological
/// order, season-edge correction runs once per *year* on that year's
/// concatenated list, and the corrected years are concatenated into the
/// final timeline.
///
/// Because normalization happens per period, a same-status run spanning a
/// month boundary stays split in two adjacent ranges. That is the observed
/// vendor-scrape behavior and the default; set
/// [`TimelineOptions::coalesce_across_periods`] for a final global re-merge
/// pass instead.
///
/// # Errors
/// Returns `InvalidInput` when periods are not strictly increasing (which
/// also rejects a repeated period), or when any period's observations
/// violate the normalizer contract.
pub fn assemble_timeline<I>(
    periods: I,
    options: TimelineOptions,
) -> Result<Vec<StatusRange>, SlipcalError>
where
    I: IntoIterator<Item = (Period, Vec<Observation>)>,
{
    // Per-year accumulation; years close in order because periods must be
    // strictly increasing.
    let mut timeline: Vec<StatusRange> = Vec::new();
    let mut open_year: Option<(i32, Vec<StatusRange>)> = None;
    let mut previous: Option<Period> = None;

    for (period, observations) in periods {
        if let Some(prev) = previous
            && period <= prev
        {
            return Err(SlipcalError::invalid_input(format!(
                "periods out of order: {period} after {prev}"
            )));
        }
        previous = Some(period);

        let ranges = normalize_period(period, &observations)?;
        match &mut open_year {
            Some((year, acc)) if *year == period.year() => acc.extend(ranges),
            _ => {
                if let Some((_, acc)) = open_year.take() {
                    timeline.extend(correct_season_edges(acc));
                }
                open_year = Some((period.year(), ranges));
            }
        }
    }

    if let Some((_, acc)) = open_year {
        timeline.extend(correct_season_edges(acc));
    }

    if options.coalesce_across_periods {
        timeline = coalesce_ranges(timeline);
    }
    Ok(timeline)
}

/// Merge adjacent same-status ranges separated only by a period boundary.
///
/// Input must already be chronologically ordered and non-overlapping; the
/// output preserves both invariants and is maximally merged.
#[must_use]
pub fn coalesce_ranges(ranges: Vec<StatusRange>) -> Vec<StatusRange> {
    let mut out: Vec<StatusRange> = Vec::with_capacity(ranges.len());
    for range in ranges {
        match out.last_mut() {
            Some(prev) if prev.abuts(&range) => prev.end = range.end,
            _ => out.push(range),
        }
    }
    out
}
