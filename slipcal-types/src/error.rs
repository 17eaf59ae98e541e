use thiserror::Error;

/// Unified error type for the slipcal workspace.
///
/// Wraps caller contract violations, connector-tagged failures, transport
/// and parse errors from the vendor page, and archive store I/O.
#[derive(Debug, Error)]
pub enum SlipcalError {
    /// Caller contract violation: duplicate observation date, a date outside
    /// the claimed period, unordered periods, or builder misuse.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// An individual connector returned an error.
    #[error("{connector} failed: {msg}")]
    Connector {
        /// Connector name that failed.
        connector: String,
        /// Human-readable error message.
        msg: String,
    },

    /// A vessel or page could not be found.
    #[error("not found: {what}")]
    NotFound {
        /// Description of the missing resource, e.g. "overview row for Selkie".
        what: String,
    },

    /// The requested capability is not implemented by the target connector.
    #[error("unsupported capability: {capability}")]
    Unsupported {
        /// A capability string describing what was requested (e.g. "availability").
        capability: &'static str,
    },

    /// The vendor page fetch failed (transport error or non-success status).
    #[error("http error: {0}")]
    Http(String),

    /// The vendor page did not have the expected table shape.
    #[error("parse error: {0}")]
    Parse(String),

    /// The archive store failed to read or write a period payload.
    #[error("archive error: {0}")]
    Archive(String),

    /// Writing a calendar or index artifact failed.
    #[error("publish error: {0}")]
    Publish(String),
}

impl SlipcalError {
    /// Helper: build an `InvalidInput` error from any message.
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    /// Helper: build a `Connector` error with the connector name and message.
    pub fn connector(connector: impl Into<String>, msg: impl Into<String>) -> Self {
        Self::Connector {
            connector: connector.into(),
            msg: msg.into(),
        }
    }

    /// Helper: build a `NotFound` error for a description of the missing resource.
    pub fn not_found(what: impl Into<String>) -> Self {
        Self::NotFound { what: what.into() }
    }

    /// Helper: build an `Unsupported` error for a capability string.
    #[must_use]
    pub const fn unsupported(cap: &'static str) -> Self {
        Self::Unsupported { capability: cap }
    }
}
