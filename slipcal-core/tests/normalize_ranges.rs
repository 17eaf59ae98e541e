use chrono::NaiveDate;
use slipcal_core::normalize_period;
use slipcal_types::{DayStatus, Observation, Period, SlipcalError, StatusRange};

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

fn obs(y: i32, m: u32, day: u32, status: DayStatus) -> Observation {
    Observation::new(d(y, m, day), status)
}

#[test]
fn consecutive_same_status_days_merge_into_one_range() {
    let period = Period::new(2025, 3).unwrap();
    let observations: Vec<Observation> = (1..=10)
        .map(|day| obs(2025, 3, day, DayStatus::Booked))
        .collect();
    let ranges = normalize_period(period, &observations).unwrap();
    assert_eq!(
        ranges,
        vec![StatusRange::new(d(2025, 3, 1), d(2025, 3, 10), DayStatus::Booked)]
    );
}

#[test]
fn status_change_closes_the_open_range() {
    // Scenario: two unavailable days then an available one.
    let period = Period::new(2025, 3).unwrap();
    let observations = vec![
        obs(2025, 3, 1, DayStatus::Unavailable),
        obs(2025, 3, 2, DayStatus::Unavailable),
        obs(2025, 3, 3, DayStatus::Available),
    ];
    let ranges = normalize_period(period, &observations).unwrap();
    assert_eq!(
        ranges,
        vec![
            StatusRange::new(d(2025, 3, 1), d(2025, 3, 2), DayStatus::Unavailable),
            StatusRange::single(d(2025, 3, 3), DayStatus::Available),
        ]
    );
}

#[test]
fn a_one_day_gap_breaks_the_range_even_with_identical_status() {
    let period = Period::new(2025, 3).unwrap();
    let observations = vec![
        obs(2025, 3, 1, DayStatus::Booked),
        obs(2025, 3, 3, DayStatus::Booked),
    ];
    let ranges = normalize_period(period, &observations).unwrap();
    assert_eq!(
        ranges,
        vec![
            StatusRange::single(d(2025, 3, 1), DayStatus::Booked),
            StatusRange::single(d(2025, 3, 3), DayStatus::Booked),
        ]
    );
}

#[test]
fn unsorted_input_is_sorted_before_merging() {
    let period = Period::new(2025, 3).unwrap();
    let observations = vec![
        obs(2025, 3, 3, DayStatus::Booked),
        obs(2025, 3, 1, DayStatus::Booked),
        obs(2025, 3, 2, DayStatus::Booked),
    ];
    let ranges = normalize_period(period, &observations).unwrap();
    assert_eq!(
        ranges,
        vec![StatusRange::new(d(2025, 3, 1), d(2025, 3, 3), DayStatus::Booked)]
    );
}

#[test]
fn empty_input_yields_no_ranges() {
    let period = Period::new(2025, 3).unwrap();
    assert!(normalize_period(period, &[]).unwrap().is_empty());
}

#[test]
fn single_observation_yields_a_single_day_range() {
    let period = Period::new(2025, 7).unwrap();
    let ranges = normalize_period(period, &[obs(2025, 7, 14, DayStatus::Available)]).unwrap();
    assert_eq!(
        ranges,
        vec![StatusRange::single(d(2025, 7, 14), DayStatus::Available)]
    );
}

#[test]
fn duplicate_dates_fail_fast() {
    let period = Period::new(2025, 3).unwrap();
    let observations = vec![
        obs(2025, 3, 5, DayStatus::Booked),
        obs(2025, 3, 5, DayStatus::Available),
    ];
    let err = normalize_period(period, &observations).unwrap_err();
    assert!(matches!(err, SlipcalError::InvalidInput(_)), "{err}");
}

#[test]
fn duplicate_dates_with_identical_status_also_fail() {
    let period = Period::new(2025, 3).unwrap();
    let observations = vec![
        obs(2025, 3, 5, DayStatus::Booked),
        obs(2025, 3, 5, DayStatus::Booked),
    ];
    assert!(normalize_period(period, &observations).is_err());
}

#[test]
fn out_of_period_dates_fail_fast() {
    let period = Period::new(2025, 3).unwrap();
    let observations = vec![obs(2025, 4, 1, DayStatus::Booked)];
    let err = normalize_period(period, &observations).unwrap_err();
    assert!(matches!(err, SlipcalError::InvalidInput(_)), "{err}");
}
