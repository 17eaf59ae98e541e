use async_trait::async_trait;

use slipcal_types::{Observation, Period, SlipcalError, Vessel, VesselId};

/// Focused role trait for connectors that list the charter fleet.
#[async_trait]
pub trait VesselRosterProvider: Send + Sync {
    /// Fetch the vessels currently listed on the vendor overview page.
    async fn vessels(&self) -> Result<Vec<Vessel>, SlipcalError>;
}

/// Focused role trait for connectors that provide per-day availability.
#[async_trait]
pub trait AvailabilityProvider: Send + Sync {
    /// Fetch the per-day observations for one vessel within one period.
    ///
    /// The returned set carries at most one observation per date and every
    /// date falls inside `period`. Connectors must hand back complete
    /// periods only; a partially fetched month is an error, never a
    /// truncated set.
    async fn availability(
        &self,
        vessel: &VesselId,
        period: Period,
    ) -> Result<Vec<Observation>, SlipcalError>;
}

/// Main connector trait implemented by vendor crates. Exposes capability
/// discovery.
pub trait CharterConnector: Send + Sync {
    /// A stable identifier for logs and error tagging (e.g. "slipcal-sanjuan").
    fn name(&self) -> &'static str;

    /// Human-friendly vendor string.
    fn vendor(&self) -> &'static str {
        "unknown"
    }

    /// Advertise roster capability by returning a usable trait object
    /// reference when supported.
    fn as_vessel_roster_provider(&self) -> Option<&dyn VesselRosterProvider> {
        None
    }

    /// Advertise availability capability by returning a usable trait object
    /// reference when supported.
    fn as_availability_provider(&self) -> Option<&dyn AvailabilityProvider> {
        None
    }
}

/// Key addressing one archived period payload: (vessel, year, month).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ArchiveKey {
    /// Vessel the payload belongs to.
    pub vessel: VesselId,
    /// Period the payload covers.
    pub period: Period,
}

impl ArchiveKey {
    /// Build a key.
    #[must_use]
    pub const fn new(vessel: VesselId, period: Period) -> Self {
        Self { vessel, period }
    }
}

/// Keyed store of archived period observations with read-through-on-miss
/// semantics.
///
/// Closed months never change on the vendor side, so a stored payload is
/// authoritative forever. Implementations decide durability (in-memory,
/// JSON files, ...).
#[async_trait]
pub trait ArchiveStore: Send + Sync {
    /// Look up the archived observations for a key, if present.
    async fn get(&self, key: &ArchiveKey) -> Result<Option<Vec<Observation>>, SlipcalError>;

    /// Store the observations for a key, replacing any previous payload.
    async fn put(&self, key: ArchiveKey, observations: Vec<Observation>)
    -> Result<(), SlipcalError>;
}
