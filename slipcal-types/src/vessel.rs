use core::fmt;
use serde::{Deserialize, Serialize};

/// Stable identifier for a vessel, derived from its display name.
///
/// The identifier doubles as the calendar file stem, so whitespace is
/// replaced with underscores (matching the published `.ics` names).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VesselId(String);

impl VesselId {
    /// Build an identifier from a raw string, normalizing whitespace to `_`.
    pub fn new(raw: impl AsRef<str>) -> Self {
        let id = raw
            .as_ref()
            .trim()
            .chars()
            .map(|c| if c.is_whitespace() { '_' } else { c })
            .collect();
        Self(id)
    }

    /// The identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for VesselId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A charter vessel as listed on the vendor overview page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vessel {
    /// Stable identifier (also the calendar file stem).
    pub id: VesselId,
    /// Display name as shown on the overview page.
    pub name: String,
    /// Link to the vessel detail page, when the row carried one.
    pub detail_url: Option<String>,
}

impl Vessel {
    /// Build a vessel from its display name, deriving the identifier.
    pub fn named(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            id: VesselId::new(&name),
            name,
            detail_url: None,
        }
    }

    /// Attach the detail page link.
    #[must_use]
    pub fn with_detail_url(mut self, url: impl Into<String>) -> Self {
        self.detail_url = Some(url.into());
        self
    }
}
