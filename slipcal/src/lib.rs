//! Slipcal turns a charter vendor's per-day availability page into
//! subscribable vessel calendars.
//!
//! Overview
//! - Drives a single `CharterConnector` (see `slipcal-sanjuan` for the
//!   production one) across a season window of monthly periods.
//! - Normalizes each month's per-day observations into maximal contiguous
//!   status ranges, corrects off-season edges per calendar year, and
//!   concatenates years into one timeline per vessel.
//! - Publishes one `.ics` file per vessel plus an `index.html` linking them.
//!
//! Key behaviors
//! - Vessels are processed independently; one failing vessel is logged and
//!   skipped, never aborting the fleet run.
//! - A vessel with zero observations across the whole window is dropped and
//!   never published.
//! - Month-boundary splits are preserved by default;
//!   `TimelineOptions::coalesce_across_periods` re-merges them globally.
//! - Middleware (e.g. `ArchiveMiddleware`) wraps the connector at build
//!   time, in registration order.
//!
//! Building an orchestrator and publishing a season:
//! ```rust,ignore
//! use std::sync::Arc;
//! use slipcal::{Period, PublishOptions, SeasonWindow, Slipcal};
//! use slipcal_sanjuan::SanJuanConnector;
//!
//! let window = SeasonWindow::new(
//!     Period::new(2025, 3)?,
//!     Period::new(2025, 10)?,
//! )?;
//! let slipcal = Slipcal::builder()
//!     .connector(Arc::new(SanJuanConnector::new_default()))
//!     .season_window(window)
//!     .build()?;
//!
//! let timelines = slipcal.timelines().await?;
//! let report = slipcal::publish::publish(
//!     &timelines,
//!     &PublishOptions::new("output"),
//! ).await?;
//! ```
//!
//! See the `demos/` member for runnable end-to-end demonstrations.
#![warn(missing_docs)]

pub(crate) mod core;
/// Calendar and index artifact generation.
pub mod publish;

pub use core::{Slipcal, SlipcalBuilder};
pub use publish::{PublishOptions, PublishReport, PublishedCalendar};

pub use slipcal_archive::{ArchiveMiddleware, JsonDirStore, MemoryStore};

// Re-export core types for convenience
pub use slipcal_core::{
    ArchiveConfig,
    ArchiveKey,
    ArchiveStore,
    AvailabilityProvider,
    CharterConnector,
    DayStatus,
    Middleware,
    Observation,
    Period,
    PeriodIter,
    SeasonWindow,
    SlipcalError,
    StatusPolicy,
    StatusRange,
    TimelineOptions,
    Vessel,
    VesselId,
    VesselRosterProvider,
    VesselTimeline,
};
