use std::sync::Arc;

use slipcal_core::CharterConnector;
use slipcal_types::{Period, SeasonWindow};

/// Return a connector for demos.
///
/// Set `SLIPCAL_DEMOS_USE_MOCK` to run against the fixture fleet instead of
/// the live vendor page, e.g. in CI.
#[must_use]
pub fn get_connector() -> Arc<dyn CharterConnector> {
    if std::env::var("SLIPCAL_DEMOS_USE_MOCK").is_ok() {
        println!("--- (Using Mock Connector for CI) ---");
        Arc::new(slipcal_mock::MockConnector::new())
    } else {
        Arc::new(slipcal_sanjuan::SanJuanConnector::new_default())
    }
}

/// The season window the demos fetch: the 2025 charter season.
///
/// # Panics
/// Never panics; the window bounds are valid months.
#[must_use]
pub fn demo_window() -> SeasonWindow {
    let from = Period::new(2025, 3).unwrap_or_else(|_| unreachable!("valid month"));
    let to = Period::new(2025, 10).unwrap_or_else(|_| unreachable!("valid month"));
    SeasonWindow::new(from, to).unwrap_or_else(|_| unreachable!("ordered window"))
}
