//! Configuration types shared across the orchestrator and middleware.

use serde::{Deserialize, Serialize};

use crate::Period;

/// Options controlling cross-period timeline assembly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TimelineOptions {
    /// Re-merge adjacent same-status ranges across period boundaries into one
    /// range after assembly.
    ///
    /// Off by default: each month is normalized independently, so a run that
    /// spans a month boundary stays split in two. That mirrors the vendor
    /// scrape's observed behavior; enabling this produces the cleaner,
    /// globally merged timeline instead.
    pub coalesce_across_periods: bool,
}

/// Configuration for the archival read-through middleware.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArchiveConfig {
    /// Periods strictly before this one are treated as closed and served
    /// from the archive once stored; this period and later ones are always
    /// fetched live.
    pub archive_before: Period,
}

impl ArchiveConfig {
    /// Archive everything strictly before `cutoff`.
    #[must_use]
    pub const fn before(cutoff: Period) -> Self {
        Self {
            archive_before: cutoff,
        }
    }
}
