use core::fmt;

use chrono::{Datelike, Days, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::SlipcalError;

/// One (year, month) fetch unit.
///
/// A period is the granularity at which the vendor page is fetched and at
/// which observations are archived; ordering is chronological.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "RawPeriod", into = "RawPeriod")]
pub struct Period {
    year: i32,
    month: u32,
}

#[derive(Serialize, Deserialize)]
struct RawPeriod {
    year: i32,
    month: u32,
}

impl TryFrom<RawPeriod> for Period {
    type Error = SlipcalError;
    fn try_from(raw: RawPeriod) -> Result<Self, Self::Error> {
        Self::new(raw.year, raw.month)
    }
}

impl From<Period> for RawPeriod {
    fn from(p: Period) -> Self {
        Self {
            year: p.year,
            month: p.month,
        }
    }
}

impl Period {
    /// Build a period, validating the month.
    ///
    /// # Errors
    /// Returns `InvalidInput` when `month` is outside `1..=12`.
    pub fn new(year: i32, month: u32) -> Result<Self, SlipcalError> {
        if !(1..=12).contains(&month) {
            return Err(SlipcalError::invalid_input(format!(
                "month {month} out of range 1..=12"
            )));
        }
        Ok(Self { year, month })
    }

    /// The calendar year of this period.
    #[must_use]
    pub const fn year(self) -> i32 {
        self.year
    }

    /// The month of this period (1-12).
    #[must_use]
    pub const fn month(self) -> u32 {
        self.month
    }

    /// First calendar day of the period.
    #[must_use]
    pub fn first_day(self) -> NaiveDate {
        // Month is validated at construction, so day 1 always exists.
        NaiveDate::from_ymd_opt(self.year, self.month, 1)
            .unwrap_or(NaiveDate::MIN)
    }

    /// Last calendar day of the period.
    #[must_use]
    pub fn last_day(self) -> NaiveDate {
        self.succ()
            .first_day()
            .checked_sub_days(Days::new(1))
            .unwrap_or(NaiveDate::MAX)
    }

    /// The immediately following period.
    #[must_use]
    pub const fn succ(self) -> Self {
        if self.month == 12 {
            Self {
                year: self.year + 1,
                month: 1,
            }
        } else {
            Self {
                year: self.year,
                month: self.month + 1,
            }
        }
    }

    /// Whether a date falls inside this period.
    #[must_use]
    pub fn contains(self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

/// Inclusive span of periods forming the fetch window for a season run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeasonWindow {
    from: Period,
    to: Period,
}

impl SeasonWindow {
    /// Build a window spanning `from..=to`.
    ///
    /// # Errors
    /// Returns `InvalidInput` when `from` is after `to`.
    pub fn new(from: Period, to: Period) -> Result<Self, SlipcalError> {
        if from > to {
            return Err(SlipcalError::invalid_input(format!(
                "season window start {from} is after end {to}"
            )));
        }
        Ok(Self { from, to })
    }

    /// First period of the window.
    #[must_use]
    pub const fn from(self) -> Period {
        self.from
    }

    /// Last period of the window (inclusive).
    #[must_use]
    pub const fn to(self) -> Period {
        self.to
    }

    /// Iterate the window's periods in chronological order.
    #[must_use]
    pub const fn periods(self) -> PeriodIter {
        PeriodIter {
            next: Some(self.from),
            last: self.to,
        }
    }
}

impl fmt::Display for SeasonWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..={}", self.from, self.to)
    }
}

/// Iterator over the periods of a [`SeasonWindow`], in chronological order.
#[derive(Debug, Clone)]
pub struct PeriodIter {
    next: Option<Period>,
    last: Period,
}

impl Iterator for PeriodIter {
    type Item = Period;

    fn next(&mut self) -> Option<Period> {
        let current = self.next?;
        self.next = if current < self.last {
            Some(current.succ())
        } else {
            None
        };
        Some(current)
    }
}
