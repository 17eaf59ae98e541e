use std::sync::Arc;

use async_trait::async_trait;

use slipcal_core::connector::{AvailabilityProvider, VesselRosterProvider};
use slipcal_core::{ArchiveKey, ArchiveStore, CharterConnector, Middleware};
use slipcal_types::{ArchiveConfig, Observation, Period, SlipcalError, VesselId};

/// Declarative wrapper that applies period archival when building a
/// connector stack.
pub struct ArchiveMiddleware {
    cfg: ArchiveConfig,
    store: Arc<dyn ArchiveStore>,
}

impl ArchiveMiddleware {
    /// Build the middleware from a cutoff configuration and a store.
    #[must_use]
    pub fn new(cfg: ArchiveConfig, store: Arc<dyn ArchiveStore>) -> Self {
        Self { cfg, store }
    }
}

impl Middleware for ArchiveMiddleware {
    fn apply(self: Box<Self>, inner: Arc<dyn CharterConnector>) -> Arc<dyn CharterConnector> {
        let Self { cfg, store } = *self;
        Arc::new(ArchivingConnector { inner, store, cfg })
    }

    fn name(&self) -> &'static str {
        "ArchiveMiddleware"
    }

    fn config_json(&self) -> serde_json::Value {
        serde_json::json!({
            "archive_before": self.cfg.archive_before.to_string(),
        })
    }
}

/// Connector wrapper serving closed periods from the archive.
pub struct ArchivingConnector {
    inner: Arc<dyn CharterConnector>,
    store: Arc<dyn ArchiveStore>,
    cfg: ArchiveConfig,
}

impl CharterConnector for ArchivingConnector {
    fn name(&self) -> &'static str {
        self.inner.name()
    }

    fn vendor(&self) -> &'static str {
        self.inner.vendor()
    }

    fn as_vessel_roster_provider(&self) -> Option<&dyn VesselRosterProvider> {
        // The roster is a live page; archival does not apply.
        self.inner.as_vessel_roster_provider()
    }

    fn as_availability_provider(&self) -> Option<&dyn AvailabilityProvider> {
        self.inner
            .as_availability_provider()
            .map(|_| self as &dyn AvailabilityProvider)
    }
}

#[async_trait]
impl AvailabilityProvider for ArchivingConnector {
    async fn availability(
        &self,
        vessel: &VesselId,
        period: Period,
    ) -> Result<Vec<Observation>, SlipcalError> {
        let inner = self
            .inner
            .as_availability_provider()
            .ok_or_else(|| SlipcalError::unsupported("availability"))?;

        if period >= self.cfg.archive_before {
            return inner.availability(vessel, period).await;
        }

        let key = ArchiveKey::new(vessel.clone(), period);
        if let Some(observations) = self.store.get(&key).await? {
            tracing::debug!(vessel = %vessel, %period, "archive hit");
            return Ok(observations);
        }

        tracing::debug!(vessel = %vessel, %period, "archive miss, fetching live");
        let observations = inner.availability(vessel, period).await?;
        self.store.put(key, observations.clone()).await?;
        Ok(observations)
    }
}
