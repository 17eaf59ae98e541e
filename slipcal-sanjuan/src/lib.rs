//! slipcal-sanjuan
//!
//! Connector that implements `CharterConnector` on top of the San Juan
//! Sailing availability overview page. Exposes the fleet roster and
//! per-month day observations parsed out of the overview table.
#![warn(missing_docs)]

/// Overview-page row extraction.
pub mod overview;

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use slipcal_core::connector::{AvailabilityProvider, CharterConnector, VesselRosterProvider};
use slipcal_types::{Observation, Period, SlipcalError, StatusPolicy, Vessel, VesselId};
use tokio::sync::{Mutex, OnceCell};

use overview::OverviewRow;

/// Default location of the vendor overview page.
pub const DEFAULT_OVERVIEW_URL: &str = "https://jibe.sanjuansailing.com/a-vesseloverview.asp";

/// Connector backed by the live San Juan Sailing overview page.
///
/// One overview fetch yields every vessel's cells for a month, so fetched
/// pages are memoized per period and shared across `availability` calls.
pub struct SanJuanConnector {
    http: reqwest::Client,
    base_url: String,
    policy: StatusPolicy,
    pages: Mutex<HashMap<Period, Arc<OnceCell<Arc<Vec<OverviewRow>>>>>>,
}

impl SanJuanConnector {
    /// Build a connector against the production overview page with the
    /// default status policy.
    #[must_use]
    pub fn new_default() -> Self {
        Self::builder().build()
    }

    /// Start configuring a connector.
    #[must_use]
    pub fn builder() -> SanJuanBuilder {
        SanJuanBuilder::default()
    }

    fn page_url(&self, period: Option<Period>) -> Result<url::Url, SlipcalError> {
        let mut u = url::Url::parse(&self.base_url)
            .map_err(|e| SlipcalError::invalid_input(format!("overview url: {e}")))?;
        if let Some(period) = period {
            u.query_pairs_mut()
                .append_pair("month", &period.month().to_string())
                .append_pair("year", &period.year().to_string());
        }
        Ok(u)
    }

    async fn fetch_page(&self, period: Option<Period>) -> Result<Vec<OverviewRow>, SlipcalError> {
        let url = self.page_url(period)?;
        tracing::info!(url = %url, "fetching overview page");
        let resp = self
            .http
            .get(url.clone())
            .send()
            .await
            .map_err(|e| SlipcalError::Http(format!("GET {url}: {e}")))?;
        if !resp.status().is_success() {
            return Err(SlipcalError::Http(format!(
                "GET {url}: status {}",
                resp.status()
            )));
        }
        let body = resp
            .text()
            .await
            .map_err(|e| SlipcalError::Http(format!("read {url}: {e}")))?;
        let rows = overview::parse(&body)?;
        tracing::info!(rows = rows.len(), "parsed overview page");
        Ok(rows)
    }

    /// Fetch and parse the overview page for `period`, serving repeats
    /// from the in-process memo.
    ///
    /// Single-flight per period: concurrent callers for the same period
    /// share one fetch, while fetches for different periods proceed in
    /// parallel. The map lock is never held across the fetch. A failed
    /// fetch leaves the cell empty so a later call retries.
    async fn page(&self, period: Period) -> Result<Arc<Vec<OverviewRow>>, SlipcalError> {
        let cell = {
            let mut pages = self.pages.lock().await;
            Arc::clone(pages.entry(period).or_default())
        };
        let rows = cell
            .get_or_try_init(|| async {
                Ok::<_, SlipcalError>(Arc::new(self.fetch_page(Some(period)).await?))
            })
            .await?;
        Ok(Arc::clone(rows))
    }
}

#[async_trait]
impl VesselRosterProvider for SanJuanConnector {
    async fn vessels(&self) -> Result<Vec<Vessel>, SlipcalError> {
        let rows = self.fetch_page(None).await?;
        Ok(rows.into_iter().map(|r| r.vessel).collect())
    }
}

#[async_trait]
impl AvailabilityProvider for SanJuanConnector {
    async fn availability(
        &self,
        vessel: &VesselId,
        period: Period,
    ) -> Result<Vec<Observation>, SlipcalError> {
        let rows = self.page(period).await?;
        let row = rows
            .iter()
            .find(|r| r.vessel_id() == vessel)
            .ok_or_else(|| SlipcalError::not_found(format!("vessel {vessel} in {period}")))?;
        row.observations_for(period, &self.policy)
    }
}

impl CharterConnector for SanJuanConnector {
    fn name(&self) -> &'static str {
        "slipcal-sanjuan"
    }

    fn vendor(&self) -> &'static str {
        "San Juan Sailing"
    }

    fn as_vessel_roster_provider(&self) -> Option<&dyn VesselRosterProvider> {
        Some(self)
    }

    fn as_availability_provider(&self) -> Option<&dyn AvailabilityProvider> {
        Some(self)
    }
}

/// Builder for [`SanJuanConnector`].
#[derive(Debug, Default)]
pub struct SanJuanBuilder {
    base_url: Option<String>,
    policy: Option<StatusPolicy>,
    http: Option<reqwest::Client>,
}

impl SanJuanBuilder {
    /// Point the connector at an alternative overview page, e.g. a local
    /// test server.
    #[must_use]
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Override the cell-class to status mapping.
    #[must_use]
    pub fn status_policy(mut self, policy: StatusPolicy) -> Self {
        self.policy = Some(policy);
        self
    }

    /// Supply a preconfigured HTTP client (proxies, timeouts).
    #[must_use]
    pub fn http_client(mut self, client: reqwest::Client) -> Self {
        self.http = Some(client);
        self
    }

    /// Finish building the connector.
    #[must_use]
    pub fn build(self) -> SanJuanConnector {
        SanJuanConnector {
            http: self.http.unwrap_or_default(),
            base_url: self
                .base_url
                .unwrap_or_else(|| DEFAULT_OVERVIEW_URL.to_string()),
            policy: self.policy.unwrap_or_default(),
            pages: Mutex::new(HashMap::new()),
        }
    }
}
