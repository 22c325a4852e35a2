//! Randomised property tests for funding schedule lookup.

use std::collections::BTreeSet;

use proptest::prelude::*;

use crate::{
    block::Height,
    parameters::miner_fund::{Activation, FundingEra, FundingSchedule, MINER_FUND_RATIO},
    time::DateTime32,
    transaction::Script,
};

/// Returns a distinct P2SH-shaped script for `tag`.
fn fund_script(tag: u8) -> Script {
    let mut raw = vec![0xa9, 0x14];
    raw.extend([tag; 20]);
    raw.push(0x87);

    Script::new(&raw)
}

/// Builds a valid height-gated schedule with one era per activation height.
fn height_schedule(activation_heights: &BTreeSet<u32>) -> FundingSchedule {
    let eras = activation_heights
        .iter()
        .enumerate()
        .map(|(index, &height)| {
            FundingEra::new(
                Activation::Height(Height(height)),
                [fund_script(index as u8)],
                MINER_FUND_RATIO,
            )
        });

    FundingSchedule::from_eras(eras).expect("distinct ascending heights build a valid schedule")
}

proptest! {
    /// Schedule lookup agrees with a naive linear scan over the eras.
    #[test]
    fn era_lookup_matches_linear_scan(
        activation_heights in prop::collection::btree_set(any::<u32>(), 1..8usize),
        probe in any::<u32>(),
    ) {
        let _init_guard = cinder_test::init();

        let schedule = height_schedule(&activation_heights);

        let expected = schedule
            .eras()
            .iter()
            .filter(|era| era.activation() <= Activation::Height(Height(probe)))
            .last();

        prop_assert_eq!(
            schedule.era_active_at(Activation::Height(Height(probe))),
            expected
        );
    }

    /// Moving the probe forward never reverts to an earlier era.
    #[test]
    fn era_lookup_is_monotonic(
        activation_heights in prop::collection::btree_set(any::<u32>(), 1..8usize),
        mut probes in prop::array::uniform2(any::<u32>()),
    ) {
        let _init_guard = cinder_test::init();

        probes.sort();
        let schedule = height_schedule(&activation_heights);

        let era_index = |position: u32| {
            schedule
                .era_active_at(Activation::Height(Height(position)))
                .map(|active| {
                    schedule
                        .eras()
                        .iter()
                        .position(|era| era == active)
                        .expect("active era comes from this schedule")
                })
        };

        prop_assert!(era_index(probes[0]) <= era_index(probes[1]));
    }

    /// `from_eras` keeps eras in their given ascending order.
    #[test]
    fn schedule_preserves_era_order(
        activation_heights in prop::collection::btree_set(any::<u32>(), 1..8usize),
    ) {
        let _init_guard = cinder_test::init();

        let schedule = height_schedule(&activation_heights);

        let schedule_heights: Vec<u32> = schedule
            .eras()
            .iter()
            .map(|era| match era.activation() {
                Activation::Height(height) => height.0,
                Activation::MedianTime(_) => unreachable!("height-gated schedule"),
            })
            .collect();

        prop_assert_eq!(
            schedule_heights,
            activation_heights.into_iter().collect::<Vec<u32>>()
        );
    }

    /// A height-gated schedule never matches median-time probes.
    #[test]
    fn cross_kind_probes_never_match(
        activation_heights in prop::collection::btree_set(any::<u32>(), 1..8usize),
        probe_time in any::<u32>(),
    ) {
        let _init_guard = cinder_test::init();

        let schedule = height_schedule(&activation_heights);

        prop_assert_eq!(
            schedule.era_active_at(Activation::MedianTime(DateTime32::from(probe_time))),
            None
        );
    }
}
