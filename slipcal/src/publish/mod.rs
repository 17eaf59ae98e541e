//! Publishing of assembled timelines: one `.ics` calendar per vessel plus
//! an `index.html` page linking all of them.

pub mod ics;
pub mod index;

use std::path::{Path, PathBuf};

use slipcal_types::{SlipcalError, Vessel, VesselTimeline};

/// Where and how artifacts are written.
#[derive(Debug, Clone)]
pub struct PublishOptions {
    out_dir: PathBuf,
    link_base: Option<String>,
}

impl PublishOptions {
    /// Publish into `out_dir`, with index links relative to the directory.
    pub fn new(out_dir: impl Into<PathBuf>) -> Self {
        Self {
            out_dir: out_dir.into(),
            link_base: None,
        }
    }

    /// Prefix index links with an absolute base URL, e.g. the raw-content
    /// URL of the repository the artifacts are pushed to.
    #[must_use]
    pub fn link_base(mut self, base: impl Into<String>) -> Self {
        self.link_base = Some(base.into());
        self
    }

    fn link_for(&self, file_name: &str) -> String {
        match &self.link_base {
            Some(base) => format!("{}/{file_name}", base.trim_end_matches('/')),
            None => file_name.to_string(),
        }
    }
}

/// One written calendar file.
#[derive(Debug, Clone)]
pub struct PublishedCalendar {
    /// Vessel the calendar covers.
    pub vessel: Vessel,
    /// Path of the written `.ics` file.
    pub path: PathBuf,
    /// Link used for this calendar on the index page.
    pub link: String,
}

/// Summary of one publish run.
#[derive(Debug, Clone)]
pub struct PublishReport {
    /// Calendars written, in input order.
    pub calendars: Vec<PublishedCalendar>,
    /// Path of the written index page.
    pub index: PathBuf,
}

/// Write one calendar file per timeline and the index page linking them.
///
/// The calendar file name is the vessel identifier plus `.ics`, so
/// `Island Time` publishes as `Island_Time.ics`.
///
/// # Errors
/// Fails on the first filesystem error; artifacts written before the
/// failure are left in place.
pub async fn publish(
    timelines: &[VesselTimeline],
    options: &PublishOptions,
) -> Result<PublishReport, SlipcalError> {
    tokio::fs::create_dir_all(&options.out_dir)
        .await
        .map_err(|e| publish_err("create output dir", &options.out_dir, &e))?;

    let mut calendars = Vec::with_capacity(timelines.len());
    for timeline in timelines {
        let file_name = format!("{}.ics", timeline.vessel.id.as_str());
        let path = options.out_dir.join(&file_name);
        tokio::fs::write(&path, ics::render(timeline))
            .await
            .map_err(|e| publish_err("write calendar", &path, &e))?;
        tracing::info!(vessel = %timeline.vessel.id, path = %path.display(), "wrote calendar");
        calendars.push(PublishedCalendar {
            vessel: timeline.vessel.clone(),
            path,
            link: options.link_for(&file_name),
        });
    }

    let entries: Vec<(String, String)> = calendars
        .iter()
        .map(|c| (c.vessel.name.clone(), c.link.clone()))
        .collect();
    let index = options.out_dir.join("index.html");
    tokio::fs::write(&index, index::render(&entries))
        .await
        .map_err(|e| publish_err("write index", &index, &e))?;
    tracing::info!(path = %index.display(), calendars = calendars.len(), "wrote index");

    Ok(PublishReport { calendars, index })
}

fn publish_err(context: &str, path: &Path, err: &std::io::Error) -> SlipcalError {
    SlipcalError::Publish(format!("{context} {}: {err}", path.display()))
}
