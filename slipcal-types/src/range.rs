use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::{DayStatus, Vessel};

/// One raw per-day status observation for a vessel.
///
/// Produced by connectors; at most one observation per date within a single
/// fetch period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Observation {
    /// Calendar day the status was observed for.
    pub date: NaiveDate,
    /// Observed status for that day.
    pub status: DayStatus,
}

impl Observation {
    /// Build an observation.
    #[must_use]
    pub const fn new(date: NaiveDate, status: DayStatus) -> Self {
        Self { date, status }
    }
}

/// A maximal run of consecutive calendar days sharing one status,
/// inclusive on both ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusRange {
    /// First day of the run (inclusive).
    pub start: NaiveDate,
    /// Last day of the run (inclusive).
    pub end: NaiveDate,
    /// Status shared by every day in the run.
    pub status: DayStatus,
}

impl StatusRange {
    /// Build a range spanning `start..=end`.
    #[must_use]
    pub const fn new(start: NaiveDate, end: NaiveDate, status: DayStatus) -> Self {
        Self { start, end, status }
    }

    /// Build a single-day range.
    #[must_use]
    pub const fn single(day: NaiveDate, status: DayStatus) -> Self {
        Self {
            start: day,
            end: day,
            status,
        }
    }

    /// Day immediately after the range; the exclusive end used by
    /// calendar-file conventions.
    #[must_use]
    pub fn exclusive_end(&self) -> NaiveDate {
        self.end.checked_add_days(Days::new(1)).unwrap_or(self.end)
    }

    /// Whether `other` starts on the day right after this range ends and
    /// carries the same status, i.e. the two could be one longer range.
    #[must_use]
    pub fn abuts(&self, other: &Self) -> bool {
        self.status == other.status && self.exclusive_end() == other.start
    }
}

/// The final, ordered, non-overlapping range sequence for one vessel across
/// the full multi-period window. Immutable once handed to the publisher.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VesselTimeline {
    /// The vessel this timeline belongs to.
    pub vessel: Vessel,
    /// Chronologically ordered, non-overlapping status ranges.
    pub ranges: Vec<StatusRange>,
}

impl VesselTimeline {
    /// Build a timeline from already-assembled ranges.
    #[must_use]
    pub const fn new(vessel: Vessel, ranges: Vec<StatusRange>) -> Self {
        Self { vessel, ranges }
    }
}
