//! Integration tests for cumulative time averaging driven by a sample stream.

use proptest::prelude::*;
use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;
use transmission_aggregation::prelude::*;

/// Helper to build a single-locus sample
fn sample(trait_id: TraitId, count: Count) -> LocusCounts {
    LocusCounts::from([(0, TraitCounts::from([(trait_id, count)]))])
}

#[test]
fn test_paired_stacks_share_anchor() {
    let anchor = 50_000;
    let mut before = MoranCumulativeTimeAverager::new(anchor, &[10, 50], 100, 1, false).unwrap();
    let mut after = MoranCumulativeTimeAverager::new(anchor, &[10, 50], 100, 1, true).unwrap();

    assert_eq!(before.latest_tick(), after.earliest_tick());

    for tick in 40_000..60_000 {
        let counts = sample(tick as u64 % 3, 1);
        let configs = ConfigurationCounts::from([(vec![tick as u64 % 3], 1)]);
        if before.is_within_bounds(tick) {
            before.record_sample(tick, &counts, &configs);
        }
        if after.is_within_bounds(tick) {
            after.record_sample(tick, &counts, &configs);
        }
    }

    // The anchor tick belongs to the "after" stack only.
    let before_total: u64 = before.counts_for_window(50).unwrap()[&0].values().sum();
    let after_total: u64 = after.counts_for_window(50).unwrap()[&0].values().sum();
    assert_eq!(before_total, 5000);
    assert_eq!(after_total, 5000);

    let short_before: u64 = before.counts_for_window(10).unwrap()[&0].values().sum();
    assert_eq!(short_before, 1000);

    let configs = after.configuration_counts_by_generation();
    assert_eq!(configs[&10].values().sum::<u64>(), 1000);
}

#[test]
fn test_streamed_simulation_matches_manual_totals() {
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(42);
    let config = TimeAveragingConfig::new(1000, vec![1, 5, 10], 100).with_num_loci(2);
    let mut averager = config.build_cumulative().unwrap();

    let mut expected_short = 0u64;
    for tick in 0..3000 {
        let trait_id = rng.random_range(0..5u64);
        let counts = LocusCounts::from([
            (0, TraitCounts::from([(trait_id, 2)])),
            (1, TraitCounts::from([(trait_id + 100, 1)])),
        ]);
        if (1000..1100).contains(&tick) {
            expected_short += 2;
        }
        averager.record_sample(tick, &counts, &ConfigurationCounts::new());
    }

    let short = averager.counts_for_window(1).unwrap();
    assert_eq!(short[&0].values().sum::<u64>(), expected_short);
    assert_eq!(short[&1].values().sum::<u64>(), expected_short / 2);

    let long = averager.counts_for_window(10).unwrap();
    assert_eq!(long[&0].values().sum::<u64>(), 2000);
}

#[test]
fn test_report_to_json() {
    let mut averager = MoranCumulativeTimeAverager::new(10_000, &[10, 50], 100, 1, true).unwrap();
    averager.record_sample(
        10_025,
        &sample(1002, 15),
        &ConfigurationCounts::from([(vec![1002], 1)]),
    );

    let json = serde_json::to_string(&averager.report()).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value.as_array().unwrap().len(), 2);
    assert_eq!(value[1]["generations"], 50);
    assert_eq!(value[1]["end"], 15_000);
    assert_eq!(value[1]["counts_by_locus"]["0"]["1002"], 15);
}

#[test]
fn test_query_errors_leave_state_intact() {
    let mut averager = MoranCumulativeTimeAverager::new(0, &[10], 100, 1, true).unwrap();
    averager.record_sample(5, &sample(1, 1), &ConfigurationCounts::new());

    assert_eq!(
        averager.counts_for_window(11),
        Err(TimeAveragingError::UnknownWindow(11))
    );
    assert_eq!(averager.counts_for_window(10).unwrap()[&0][&1], 1);
}

proptest! {
    #[test]
    fn prop_record_order_does_not_matter(
        samples in proptest::collection::vec((0i64..2000, 0u64..4, 1u64..10), 1..60),
        seed in any::<u64>(),
    ) {
        let build = || MoranCumulativeTimeAverager::new(500, &[2, 5, 10], 100, 1, true).unwrap();
        let mut in_order = build();
        let mut shuffled = build();

        for &(tick, trait_id, count) in &samples {
            in_order.record_sample(
                tick,
                &sample(trait_id, count),
                &ConfigurationCounts::from([(vec![trait_id], count)]),
            );
        }

        let mut reordered = samples.clone();
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(seed);
        for i in (1..reordered.len()).rev() {
            let j = rng.random_range(0..=i);
            reordered.swap(i, j);
        }
        for &(tick, trait_id, count) in &reordered {
            shuffled.record_sample(
                tick,
                &sample(trait_id, count),
                &ConfigurationCounts::from([(vec![trait_id], count)]),
            );
        }

        prop_assert_eq!(in_order.all_window_counts(), shuffled.all_window_counts());
        prop_assert_eq!(
            in_order.configuration_counts_by_generation(),
            shuffled.configuration_counts_by_generation()
        );
    }

    #[test]
    fn prop_nested_windows_dominate(ticks in proptest::collection::vec(-1000i64..3000, 0..80)) {
        let mut averager = MoranCumulativeTimeAverager::new(0, &[1, 5, 20], 100, 1, true).unwrap();
        for &tick in &ticks {
            averager.record_sample(tick, &sample(1, 1), &ConfigurationCounts::new());
        }

        let total = |g| -> u64 { averager.counts_for_window(g).unwrap()[&0].values().sum() };
        prop_assert!(total(1) <= total(5));
        prop_assert!(total(5) <= total(20));
        prop_assert_eq!(total(20), ticks.iter().filter(|t| (0..2000).contains(*t)).count() as u64);
    }
}
