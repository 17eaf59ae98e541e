use core::fmt;
use serde::{Deserialize, Serialize};

/// Per-day availability status for a vessel.
///
/// `FirstDayOffSeason` and `LastDayOffSeason` are synthetic markers produced
/// by the season-edge correction; connectors never emit them directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DayStatus {
    /// The vessel can be chartered on this day.
    Available,
    /// The vessel is booked by a customer.
    Booked,
    /// The vessel cannot be chartered (maintenance, off-season block, ...).
    Unavailable,
    /// The vendor explicitly marks the day as outside the charter season.
    OffSeason,
    /// Synthetic marker: first off-season day after the season ends.
    FirstDayOffSeason,
    /// Synthetic marker: last off-season day before the season starts.
    LastDayOffSeason,
}

impl DayStatus {
    /// Stable, kebab-case identifier for logs and archive payloads.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Available => "available",
            Self::Booked => "booked",
            Self::Unavailable => "unavailable",
            Self::OffSeason => "off-season",
            Self::FirstDayOffSeason => "first-day-off-season",
            Self::LastDayOffSeason => "last-day-off-season",
        }
    }

    /// Human-readable label used in calendar event summaries.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Available => "Available",
            Self::Booked => "Booked",
            Self::Unavailable => "Unavailable",
            Self::OffSeason => "Off-Season",
            Self::FirstDayOffSeason => "First Day of Off-Season",
            Self::LastDayOffSeason => "Last Day of Off-Season",
        }
    }

    /// Whether this status denotes an off-season block for the purposes of
    /// season-edge correction.
    #[must_use]
    pub const fn is_off_season(self) -> bool {
        matches!(self, Self::Unavailable | Self::OffSeason)
    }
}

impl fmt::Display for DayStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
