use slipcal::Slipcal;
use slipcal_demos::common::{demo_window, get_connector};
use tracing_subscriber::fmt::format::FmtSpan;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Human-friendly tracing subscriber with env-based filtering.
    // Suggested: RUST_LOG=info,slipcal=debug,slipcal_sanjuan=debug
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .with_span_events(FmtSpan::ENTER | FmtSpan::EXIT)
        .try_init();

    let slipcal = Slipcal::builder()
        .connector(get_connector())
        .season_window(demo_window())
        .build()?;

    let timelines = slipcal.timelines().await?;
    for timeline in &timelines {
        println!(
            "{}: {} ranges across {}",
            timeline.vessel.name,
            timeline.ranges.len(),
            slipcal.window()
        );
    }
    Ok(())
}
