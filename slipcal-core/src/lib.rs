//! slipcal-core
//!
//! Connector traits and the pure availability-timeline engine shared across
//! the slipcal ecosystem.
//!
//! - `connector`: the `CharterConnector` trait, capability provider traits,
//!   and the `ArchiveStore` capability for period archival.
//! - `middleware`: the trait implemented by connector wrappers.
//! - `timeline`: the pure transform from per-day observations to ordered
//!   status ranges (per-period normalization, season-edge correction, and
//!   cross-period assembly).
//!
//! The timeline engine is synchronous and owns no I/O state; connectors and
//! stores are async (Tokio ecosystem, via `async-trait`) and live at the
//! edges.
#![warn(missing_docs)]

/// Connector capability traits and the primary `CharterConnector` interface.
pub mod connector;
/// Middleware trait implemented by connector wrappers.
pub mod middleware;
/// Pure timeline engine: normalization, season edges, cross-period assembly.
pub mod timeline;

pub use connector::{ArchiveKey, ArchiveStore, AvailabilityProvider, CharterConnector,
    VesselRosterProvider};
pub use middleware::Middleware;
pub use timeline::assemble::{assemble_timeline, coalesce_ranges};
pub use timeline::normalize::normalize_period;
pub use timeline::season::correct_season_edges;

pub use slipcal_types::{
    ArchiveConfig, DayStatus, Observation, Period, PeriodIter, SeasonWindow, SlipcalError,
    StatusPolicy, StatusRange, TimelineOptions, Vessel, VesselId, VesselTimeline,
};
