//! Archival middleware for slipcal connectors.
//!
//! Charter months that have fully elapsed never change on the vendor side,
//! so their observations can be served from a keyed archive instead of
//! re-scraped. [`ArchiveMiddleware`] wraps any [`CharterConnector`] with
//! read-through-on-miss semantics against an [`ArchiveStore`]: periods
//! strictly before the configured cutoff are looked up first and stored on
//! miss; the cutoff period and everything after it are always fetched live.
//!
//! Two stores ship with the crate: [`MemoryStore`] for tests and demos, and
//! [`JsonDirStore`] persisting one JSON file per (vessel, period) key.
#![warn(missing_docs)]

mod middleware;
mod store;

pub use middleware::{ArchiveMiddleware, ArchivingConnector};
pub use store::{JsonDirStore, MemoryStore};

pub use slipcal_core::{ArchiveKey, ArchiveStore, CharterConnector};
pub use slipcal_types::ArchiveConfig;
