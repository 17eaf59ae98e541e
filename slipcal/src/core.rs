use std::sync::Arc;

use futures::future::join_all;
use slipcal_core::connector::CharterConnector;
use slipcal_core::{Middleware, assemble_timeline};
use slipcal_types::{
    Observation, Period, SeasonWindow, SlipcalError, TimelineOptions, Vessel, VesselTimeline,
};

/// Orchestrator that turns one connector's raw observations into
/// publishable vessel timelines.
pub struct Slipcal {
    pub(crate) connector: Arc<dyn CharterConnector>,
    pub(crate) window: SeasonWindow,
    pub(crate) options: TimelineOptions,
}

impl std::fmt::Debug for Slipcal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Slipcal")
            .field("connector", &self.connector.name())
            .field("window", &self.window)
            .field("options", &self.options)
            .finish()
    }
}

/// Builder for constructing a [`Slipcal`] orchestrator.
pub struct SlipcalBuilder {
    connector: Option<Arc<dyn CharterConnector>>,
    middleware: Vec<Box<dyn Middleware>>,
    window: Option<SeasonWindow>,
    options: TimelineOptions,
}

impl Default for SlipcalBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl SlipcalBuilder {
    /// Create a new builder with defaults: no connector, no middleware,
    /// per-period range splits preserved.
    #[must_use]
    pub fn new() -> Self {
        Self {
            connector: None,
            middleware: vec![],
            window: None,
            options: TimelineOptions::default(),
        }
    }

    /// Register the vendor connector. Exactly one connector drives an
    /// orchestrator; registering again replaces the previous one.
    #[must_use]
    pub fn connector(mut self, c: Arc<dyn CharterConnector>) -> Self {
        self.connector = Some(c);
        self
    }

    /// Push a middleware layer. Layers wrap the connector in registration
    /// order, so the first pushed layer sits closest to the connector.
    #[must_use]
    pub fn with_middleware(mut self, m: Box<dyn Middleware>) -> Self {
        self.middleware.push(m);
        self
    }

    /// Set the season window of periods to fetch and assemble.
    #[must_use]
    pub const fn season_window(mut self, window: SeasonWindow) -> Self {
        self.window = Some(window);
        self
    }

    /// Set the cross-period assembly options.
    #[must_use]
    pub const fn timeline_options(mut self, options: TimelineOptions) -> Self {
        self.options = options;
        self
    }

    /// Finalize the orchestrator.
    ///
    /// # Errors
    /// Fails when no connector or no season window was registered.
    pub fn build(self) -> Result<Slipcal, SlipcalError> {
        let mut connector = self
            .connector
            .ok_or_else(|| SlipcalError::invalid_input("no connector registered"))?;
        let window = self
            .window
            .ok_or_else(|| SlipcalError::invalid_input("no season window set"))?;
        for layer in self.middleware {
            tracing::debug!(middleware = layer.name(), "applying middleware layer");
            connector = layer.apply(connector);
        }
        Ok(Slipcal {
            connector,
            window,
            options: self.options,
        })
    }
}

impl Slipcal {
    /// Start building an orchestrator.
    #[must_use]
    pub fn builder() -> SlipcalBuilder {
        SlipcalBuilder::new()
    }

    /// The configured season window.
    #[must_use]
    pub const fn window(&self) -> &SeasonWindow {
        &self.window
    }

    /// Fetch the fleet roster from the connector.
    ///
    /// # Errors
    /// Fails when the connector does not expose a roster or the fetch
    /// itself fails.
    pub async fn vessels(&self) -> Result<Vec<Vessel>, SlipcalError> {
        let roster = self
            .connector
            .as_vessel_roster_provider()
            .ok_or(SlipcalError::unsupported("vessel roster"))?;
        roster.vessels().await
    }

    /// Build the assembled timeline for one vessel across the configured
    /// season window.
    ///
    /// Periods are fetched in chronological order and assembled with
    /// season-edge correction applied per calendar year. A vessel with no
    /// observations in any period yields a timeline with no ranges.
    ///
    /// # Errors
    /// Fails when the connector lacks the availability capability, a
    /// period fetch fails, or a period's observations violate the
    /// one-per-day contract.
    pub async fn timeline(&self, vessel: &Vessel) -> Result<VesselTimeline, SlipcalError> {
        let provider = self
            .connector
            .as_availability_provider()
            .ok_or(SlipcalError::unsupported("availability"))?;

        let mut periods: Vec<(Period, Vec<Observation>)> = Vec::new();
        for period in self.window.periods() {
            let observations = provider.availability(&vessel.id, period).await?;
            tracing::debug!(
                vessel = %vessel.id,
                %period,
                observations = observations.len(),
                "fetched period"
            );
            periods.push((period, observations));
        }
        let ranges = assemble_timeline(periods, self.options)?;
        Ok(VesselTimeline::new(vessel.clone(), ranges))
    }

    /// Build timelines for the whole fleet.
    ///
    /// Vessels are processed independently and concurrently. A vessel whose
    /// fetch or assembly fails is skipped with a warning rather than
    /// aborting the run, and vessels with no observations at all are
    /// dropped from the result. Roster order is preserved.
    ///
    /// # Errors
    /// Fails only when the roster itself cannot be fetched.
    pub async fn timelines(&self) -> Result<Vec<VesselTimeline>, SlipcalError> {
        let fleet = self.vessels().await?;
        tracing::info!(vessels = fleet.len(), "building fleet timelines");

        let results = join_all(fleet.iter().map(|vessel| self.timeline(vessel))).await;

        let mut timelines = Vec::with_capacity(fleet.len());
        for (vessel, result) in fleet.iter().zip(results) {
            match result {
                Ok(timeline) if timeline.ranges.is_empty() => {
                    tracing::info!(vessel = %vessel.id, "no observations in window, dropping");
                }
                Ok(timeline) => timelines.push(timeline),
                Err(err) => {
                    tracing::warn!(vessel = %vessel.id, error = %err, "skipping vessel");
                }
            }
        }
        Ok(timelines)
    }
}
