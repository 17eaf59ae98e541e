//! Mock connector for CI-safe tests and demos. Provides deterministic
//! availability data from static fixtures, plus hooks for scripting custom
//! fleets and forced failures.
#![warn(missing_docs)]

use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use slipcal_core::connector::{AvailabilityProvider, CharterConnector, VesselRosterProvider};
use slipcal_types::{Observation, Period, SlipcalError, Vessel, VesselId};

pub mod fixtures;

/// Mock connector with a scriptable fleet.
///
/// `MockConnector::new()` loads the charter-season fixture; `empty()` starts
/// blank so tests can script exactly the scenario they need. A vessel marked
/// via [`failing`](Self::failing) returns a forced connector error from every
/// availability call, which exercises the orchestrator's skip-and-continue
/// path.
pub struct MockConnector {
    fleet: Vec<Vessel>,
    availability: HashMap<(VesselId, Period), Vec<Observation>>,
    fail: HashSet<VesselId>,
    availability_calls: AtomicUsize,
}

impl Default for MockConnector {
    fn default() -> Self {
        Self::new()
    }
}

impl MockConnector {
    /// Connector pre-loaded with the charter-season fixture fleet.
    #[must_use]
    pub fn new() -> Self {
        fixtures::charter_season()
    }

    /// Connector with no vessels and no data.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            fleet: Vec::new(),
            availability: HashMap::new(),
            fail: HashSet::new(),
            availability_calls: AtomicUsize::new(0),
        }
    }

    /// Add a vessel to the roster.
    #[must_use]
    pub fn with_vessel(mut self, vessel: Vessel) -> Self {
        self.fleet.push(vessel);
        self
    }

    /// Script the observations returned for one (vessel, period) pair.
    /// Periods without a script yield an empty observation set.
    #[must_use]
    pub fn with_availability(
        mut self,
        vessel: &VesselId,
        period: Period,
        observations: Vec<Observation>,
    ) -> Self {
        self.availability
            .insert((vessel.clone(), period), observations);
        self
    }

    /// Force every availability call for `vessel` to fail.
    #[must_use]
    pub fn failing(mut self, vessel: &VesselId) -> Self {
        self.fail.insert(vessel.clone());
        self
    }

    /// Number of availability calls that reached this connector. Lets tests
    /// assert that an archive layer short-circuited the fetch.
    #[must_use]
    pub fn availability_call_count(&self) -> usize {
        self.availability_calls.load(Ordering::SeqCst)
    }
}

impl CharterConnector for MockConnector {
    fn name(&self) -> &'static str {
        "slipcal-mock"
    }

    fn vendor(&self) -> &'static str {
        "Mock"
    }

    fn as_vessel_roster_provider(&self) -> Option<&dyn VesselRosterProvider> {
        Some(self)
    }

    fn as_availability_provider(&self) -> Option<&dyn AvailabilityProvider> {
        Some(self)
    }
}

#[async_trait]
impl VesselRosterProvider for MockConnector {
    async fn vessels(&self) -> Result<Vec<Vessel>, SlipcalError> {
        Ok(self.fleet.clone())
    }
}

#[async_trait]
impl AvailabilityProvider for MockConnector {
    async fn availability(
        &self,
        vessel: &VesselId,
        period: Period,
    ) -> Result<Vec<Observation>, SlipcalError> {
        self.availability_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail.contains(vessel) {
            return Err(SlipcalError::connector(
                "slipcal-mock",
                format!("forced failure: availability for {vessel}"),
            ));
        }
        Ok(self
            .availability
            .get(&(vessel.clone(), period))
            .cloned()
            .unwrap_or_default())
    }
}
