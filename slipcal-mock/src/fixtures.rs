//! Deterministic fixture fleet covering the interesting timeline shapes:
//! a well-booked boat, a boat with off-season edges, and a boat that never
//! reports any availability at all.

use chrono::NaiveDate;

use slipcal_types::{DayStatus, Observation, Period, Vessel};

use crate::MockConnector;

fn day(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or(NaiveDate::MIN)
}

fn run(
    year: i32,
    month: u32,
    days: std::ops::RangeInclusive<u32>,
    status: DayStatus,
) -> Vec<Observation> {
    days.map(|d| Observation::new(day(year, month, d), status))
        .collect()
}

fn month(year: i32, month_no: u32) -> Period {
    Period::new(year, month_no).unwrap_or_else(|_| unreachable!("fixture months are valid"))
}

/// The default 2025 charter-season fixture.
#[must_use]
pub fn charter_season() -> MockConnector {
    let selkie = Vessel::named("Selkie").with_detail_url("https://charter.example/selkie");
    let island_time =
        Vessel::named("Island Time").with_detail_url("https://charter.example/island-time");
    let peregrine = Vessel::named("Peregrine");

    let june_selkie = {
        let mut obs = run(2025, 6, 1..=9, DayStatus::Available);
        obs.extend(run(2025, 6, 10..=17, DayStatus::Booked));
        obs.extend(run(2025, 6, 18..=30, DayStatus::Available));
        obs
    };
    let july_selkie = {
        let mut obs = run(2025, 7, 1..=3, DayStatus::Booked);
        obs.extend(run(2025, 7, 4..=31, DayStatus::Available));
        obs
    };

    // Island Time opens the year off-season and closes it off-season, so the
    // assembled timeline exercises both season-edge markers.
    let march_island = run(2025, 3, 1..=31, DayStatus::Unavailable);
    let april_island = {
        let mut obs = run(2025, 4, 1..=10, DayStatus::Unavailable);
        obs.extend(run(2025, 4, 11..=30, DayStatus::Available));
        obs
    };
    let october_island = run(2025, 10, 1..=31, DayStatus::Unavailable);

    MockConnector::empty()
        .with_vessel(selkie.clone())
        .with_vessel(island_time.clone())
        .with_vessel(peregrine)
        .with_availability(&selkie.id, month(2025, 6), june_selkie)
        .with_availability(&selkie.id, month(2025, 7), july_selkie)
        .with_availability(&island_time.id, month(2025, 3), march_island)
        .with_availability(&island_time.id, month(2025, 4), april_island)
        .with_availability(&island_time.id, month(2025, 10), october_island)
}
