//! Demonstrates the archival middleware: closed months are fetched once,
//! stored as JSON under `archive/`, and served from disk on later runs.

use std::sync::Arc;

use slipcal::{ArchiveConfig, ArchiveMiddleware, JsonDirStore, Period, Slipcal};
use slipcal_demos::common::{demo_window, get_connector};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();

    // Months before August 2025 are closed; serve them from the archive.
    let cutoff = Period::new(2025, 8)?;
    let store = Arc::new(JsonDirStore::new("archive"));
    let archive = ArchiveMiddleware::new(ArchiveConfig::before(cutoff), store);

    let slipcal = Slipcal::builder()
        .connector(get_connector())
        .with_middleware(Box::new(archive))
        .season_window(demo_window())
        .build()?;

    let timelines = slipcal.timelines().await?;
    for timeline in &timelines {
        println!("{}: {} ranges", timeline.vessel.name, timeline.ranges.len());
    }
    Ok(())
}
