use std::collections::BTreeMap;

use chrono::{Datelike, Days, NaiveDate};
use proptest::prelude::*;
use slipcal_core::{assemble_timeline, normalize_period};
use slipcal_types::{DayStatus, Observation, Period, StatusRange, TimelineOptions};

fn status_from_index(i: u8) -> DayStatus {
    match i % 4 {
        0 => DayStatus::Available,
        1 => DayStatus::Booked,
        2 => DayStatus::Unavailable,
        _ => DayStatus::OffSeason,
    }
}

/// Duplicate-free observation sets within one month, as (day, status) pairs.
fn arb_month(year: i32, month: u32) -> impl Strategy<Value = (Period, Vec<Observation>)> {
    let period = Period::new(year, month).unwrap();
    let last_day = period.last_day().day();
    proptest::collection::btree_map(1u32..=last_day, any::<u8>(), 0..=last_day as usize).prop_map(
        move |days: BTreeMap<u32, u8>| {
            let obs = days
                .into_iter()
                .map(|(day, s)| {
                    Observation::new(
                        NaiveDate::from_ymd_opt(year, month, day).unwrap(),
                        status_from_index(s),
                    )
                })
                .collect();
            (period, obs)
        },
    )
}

fn arb_window() -> impl Strategy<Value = Vec<(Period, Vec<Observation>)>> {
    (arb_month(2024, 11), arb_month(2024, 12), arb_month(2025, 1)).prop_map(|(a, b, c)| {
        vec![a, b, c]
    })
}

fn assert_ordered_non_overlapping(ranges: &[StatusRange]) {
    for r in ranges {
        assert!(r.start <= r.end, "inverted range {r:?}");
    }
    for pair in ranges.windows(2) {
        assert!(
            pair[0].end < pair[1].start,
            "overlap or disorder between {:?} and {:?}",
            pair[0],
            pair[1]
        );
    }
}

proptest! {
    #[test]
    fn normalizer_output_is_ordered_and_maximally_merged((period, obs) in arb_month(2025, 6)) {
        let ranges = normalize_period(period, &obs).unwrap();
        assert_ordered_non_overlapping(&ranges);

        // Maximal merge: no adjacent pair may be collapsible.
        for pair in ranges.windows(2) {
            prop_assert!(!pair[0].abuts(&pair[1]));
        }

        // Every observed day is covered by exactly one range of its status,
        // and ranges cover no unobserved day.
        let by_date: BTreeMap<NaiveDate, DayStatus> =
            obs.iter().map(|o| (o.date, o.status)).collect();
        let mut covered = 0usize;
        for r in &ranges {
            let mut day = r.start;
            while day <= r.end {
                prop_assert_eq!(by_date.get(&day).copied(), Some(r.status));
                covered += 1;
                day = day.checked_add_days(Days::new(1)).unwrap();
            }
        }
        prop_assert_eq!(covered, by_date.len());
    }

    #[test]
    fn uniform_status_month_collapses_to_one_range(days in 1u32..=28) {
        let period = Period::new(2025, 2).unwrap();
        let obs: Vec<Observation> = (1..=days)
            .map(|day| Observation::new(
                NaiveDate::from_ymd_opt(2025, 2, day).unwrap(),
                DayStatus::Booked,
            ))
            .collect();
        let ranges = normalize_period(period, &obs).unwrap();
        prop_assert_eq!(ranges.len(), 1);
        prop_assert_eq!(ranges[0].start.day(), 1);
        prop_assert_eq!(ranges[0].end.day(), days);
    }

    #[test]
    fn assembled_timelines_uphold_the_ordering_invariant(window in arb_window()) {
        let timeline = assemble_timeline(window, TimelineOptions::default()).unwrap();
        assert_ordered_non_overlapping(&timeline);
    }

    #[test]
    fn coalesced_timelines_uphold_the_ordering_invariant(window in arb_window()) {
        let options = TimelineOptions { coalesce_across_periods: true };
        let timeline = assemble_timeline(window, options).unwrap();
        assert_ordered_non_overlapping(&timeline);
        for pair in timeline.windows(2) {
            prop_assert!(!pair[0].abuts(&pair[1]));
        }
    }
}
