use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::DayStatus;

/// Swappable mapping from raw vendor day-cell classes to [`DayStatus`].
///
/// The set of recognized raw classes has changed across vendor revisions,
/// so connectors take the mapping as data rather than hardcoding it. A raw
/// class with no rule is dropped (no observation for that day), and the
/// `record_available` flag selects between the two historical conventions:
/// available days as explicit observations, or as gaps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusPolicy {
    rules: HashMap<String, DayStatus>,
    record_available: bool,
}

impl StatusPolicy {
    /// Empty policy: every raw class is dropped.
    #[must_use]
    pub fn empty(record_available: bool) -> Self {
        Self {
            rules: HashMap::new(),
            record_available,
        }
    }

    /// The explicit-available convention: booked and available days both
    /// become observations.
    #[must_use]
    pub fn explicit_available() -> Self {
        Self::san_juan_rules(true)
    }

    /// The implicit-available convention: available days are dropped and
    /// show up as gaps between ranges.
    #[must_use]
    pub fn implicit_available() -> Self {
        Self::san_juan_rules(false)
    }

    fn san_juan_rules(record_available: bool) -> Self {
        let mut policy = Self::empty(record_available);
        policy.rule("CbgM", DayStatus::Booked);
        policy.rule("CbgT", DayStatus::Available);
        policy.rule("CbgWE", DayStatus::Available);
        policy.rule("CbgU", DayStatus::Unavailable);
        policy.rule("CbgO", DayStatus::OffSeason);
        policy
    }

    /// Add or replace a mapping rule for a raw day-cell class.
    pub fn rule(&mut self, raw_class: impl Into<String>, status: DayStatus) -> &mut Self {
        self.rules.insert(raw_class.into(), status);
        self
    }

    /// Classify a raw day-cell class.
    ///
    /// Returns `None` when the class is unknown, or when it maps to
    /// `Available` under the implicit-available convention.
    #[must_use]
    pub fn classify(&self, raw_class: &str) -> Option<DayStatus> {
        let status = *self.rules.get(raw_class)?;
        if status == DayStatus::Available && !self.record_available {
            return None;
        }
        Some(status)
    }

    /// Whether available days are recorded as explicit observations.
    #[must_use]
    pub const fn records_available(&self) -> bool {
        self.record_available
    }
}

impl Default for StatusPolicy {
    fn default() -> Self {
        Self::explicit_available()
    }
}
