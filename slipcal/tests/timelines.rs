use std::sync::Arc;

use chrono::NaiveDate;
use slipcal::{
    DayStatus, Observation, Period, SeasonWindow, Slipcal, SlipcalError, StatusRange,
    TimelineOptions, Vessel, VesselId,
};
use slipcal_mock::MockConnector;

fn d(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

fn window(from: (i32, u32), to: (i32, u32)) -> SeasonWindow {
    SeasonWindow::new(
        Period::new(from.0, from.1).unwrap(),
        Period::new(to.0, to.1).unwrap(),
    )
    .unwrap()
}

fn orchestrator(connector: MockConnector, window: SeasonWindow) -> Slipcal {
    Slipcal::builder()
        .connector(Arc::new(connector))
        .season_window(window)
        .build()
        .unwrap()
}

#[test]
fn build_without_connector_fails() {
    let err = Slipcal::builder()
        .season_window(window((2025, 3), (2025, 10)))
        .build()
        .unwrap_err();
    assert!(matches!(err, SlipcalError::InvalidInput(_)));
}

#[test]
fn build_without_window_fails() {
    let err = Slipcal::builder()
        .connector(Arc::new(MockConnector::empty()))
        .build()
        .unwrap_err();
    assert!(matches!(err, SlipcalError::InvalidInput(_)));
}

#[tokio::test]
async fn fleet_run_drops_vessels_with_no_observations() {
    // Peregrine is in the fixture roster but never reports a single day.
    let slipcal = orchestrator(MockConnector::new(), window((2025, 3), (2025, 10)));
    let timelines = slipcal.timelines().await.unwrap();

    let ids: Vec<_> = timelines
        .iter()
        .map(|t| t.vessel.id.as_str())
        .collect();
    assert_eq!(ids, ["Selkie", "Island_Time"]);
}

#[tokio::test]
async fn fleet_run_skips_failing_vessels() {
    let connector = MockConnector::new().failing(&VesselId::new("Selkie"));
    let slipcal = orchestrator(connector, window((2025, 3), (2025, 10)));

    let timelines = slipcal.timelines().await.unwrap();
    let ids: Vec<_> = timelines
        .iter()
        .map(|t| t.vessel.id.as_str())
        .collect();
    assert_eq!(ids, ["Island_Time"]);
}

#[tokio::test]
async fn selkie_timeline_keeps_month_splits_by_default() {
    let slipcal = orchestrator(MockConnector::new(), window((2025, 6), (2025, 7)));
    let vessel = Vessel::named("Selkie");
    let timeline = slipcal.timeline(&vessel).await.unwrap();

    assert_eq!(
        timeline.ranges,
        [
            StatusRange::new(d(2025, 6, 1), d(2025, 6, 9), DayStatus::Available),
            StatusRange::new(d(2025, 6, 10), d(2025, 6, 17), DayStatus::Booked),
            StatusRange::new(d(2025, 6, 18), d(2025, 6, 30), DayStatus::Available),
            StatusRange::new(d(2025, 7, 1), d(2025, 7, 3), DayStatus::Booked),
            StatusRange::new(d(2025, 7, 4), d(2025, 7, 31), DayStatus::Available),
        ]
    );
}

#[tokio::test]
async fn island_time_timeline_gets_both_season_markers() {
    let slipcal = orchestrator(MockConnector::new(), window((2025, 3), (2025, 10)));
    let vessel = Vessel::named("Island Time");
    let timeline = slipcal.timeline(&vessel).await.unwrap();

    assert_eq!(
        timeline.ranges,
        [
            StatusRange::single(d(2025, 3, 31), DayStatus::LastDayOffSeason),
            StatusRange::new(d(2025, 4, 1), d(2025, 4, 10), DayStatus::Unavailable),
            StatusRange::new(d(2025, 4, 11), d(2025, 4, 30), DayStatus::Available),
            StatusRange::single(d(2025, 10, 1), DayStatus::FirstDayOffSeason),
        ]
    );
}

#[tokio::test]
async fn coalesce_option_merges_a_run_across_the_month_boundary() {
    let vessel = Vessel::named("Wanderer");
    let june = Period::new(2025, 6).unwrap();
    let july = Period::new(2025, 7).unwrap();
    let booked = |from: NaiveDate, to: NaiveDate| {
        from.iter_days()
            .take_while(|day| *day <= to)
            .map(|day| Observation::new(day, DayStatus::Booked))
            .collect::<Vec<_>>()
    };
    let connector = MockConnector::empty()
        .with_vessel(vessel.clone())
        .with_availability(&vessel.id, june, booked(d(2025, 6, 25), d(2025, 6, 30)))
        .with_availability(&vessel.id, july, booked(d(2025, 7, 1), d(2025, 7, 5)));

    let slipcal = Slipcal::builder()
        .connector(Arc::new(connector))
        .season_window(window((2025, 6), (2025, 7)))
        .timeline_options(TimelineOptions {
            coalesce_across_periods: true,
        })
        .build()
        .unwrap();

    let timeline = slipcal.timeline(&vessel).await.unwrap();
    assert_eq!(
        timeline.ranges,
        [StatusRange::new(
            d(2025, 6, 25),
            d(2025, 7, 5),
            DayStatus::Booked
        )]
    );
}

#[tokio::test]
async fn unscripted_periods_contribute_nothing() {
    // The fixture scripts Selkie for June and July only; a wider window
    // must not invent data for the silent months.
    let slipcal = orchestrator(MockConnector::new(), window((2025, 3), (2025, 12)));
    let vessel = Vessel::named("Selkie");
    let timeline = slipcal.timeline(&vessel).await.unwrap();

    assert_eq!(timeline.ranges.first().map(|r| r.start), Some(d(2025, 6, 1)));
    assert_eq!(timeline.ranges.last().map(|r| r.end), Some(d(2025, 7, 31)));
}
