//! Pure timeline engine shared by connectors and the orchestrator.
//!
//! Modules include:
//! - `normalize`: collapse one period's per-day observations into ranges
//! - `season`: season-edge correction on a merged yearly range list
//! - `assemble`: fold per-period range lists into one vessel timeline

/// Cross-period assembly of normalized range lists.
pub mod assemble;
/// Per-period observation-to-range normalization.
pub mod normalize;
/// Season-edge correction of yearly range lists.
pub mod season;
