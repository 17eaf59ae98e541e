//! End-to-end run: fetch the fleet, assemble timelines, and publish one
//! `.ics` per vessel plus the `index.html` subscription page.

use slipcal::publish::{self, PublishOptions};
use slipcal::Slipcal;
use slipcal_demos::common::{demo_window, get_connector};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();

    let slipcal = Slipcal::builder()
        .connector(get_connector())
        .season_window(demo_window())
        .build()?;

    let timelines = slipcal.timelines().await?;
    println!("assembled {} vessel timelines", timelines.len());

    let options = PublishOptions::new("output")
        .link_base("https://raw.githubusercontent.com/sjs-calendar/ical/main/output");
    let report = publish::publish(&timelines, &options).await?;

    for calendar in &report.calendars {
        println!("wrote {} -> {}", calendar.path.display(), calendar.link);
    }
    println!("index at {}", report.index.display());
    Ok(())
}
