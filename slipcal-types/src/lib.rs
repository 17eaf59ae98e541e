//! Slipcal-specific data transfer objects and configuration primitives.
#![warn(missing_docs)]

mod config;
mod error;
mod period;
mod policy;
mod range;
mod status;
mod vessel;

pub use config::{ArchiveConfig, TimelineOptions};
pub use error::SlipcalError;
pub use period::{Period, PeriodIter, SeasonWindow};
pub use policy::StatusPolicy;
pub use range::{Observation, StatusRange, VesselTimeline};
pub use status::DayStatus;
pub use vessel::{Vessel, VesselId};
