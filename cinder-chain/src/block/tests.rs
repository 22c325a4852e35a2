//! Tests for block heights and parent-block snapshots.

use color_eyre::Report;

use crate::time::DateTime32;

use super::*;

#[test]
fn height_add_and_sub() -> Result<(), Report> {
    let _init_guard = cinder_test::init();

    assert_eq!(Height(100) + 1, Some(Height(101)));
    assert_eq!(Height(100) - 1, Some(Height(99)));

    // height arithmetic stays within the valid range
    assert_eq!(Height::MAX + 1, None);
    assert_eq!(Height::MIN - 1, None);
    assert_eq!(Height::MAX + 0, Some(Height::MAX));
    assert_eq!(Height(0) + HeightDiff::from(Height::MAX_AS_U32), Some(Height::MAX));

    // difference between heights is signed
    assert_eq!(Height(100) - Height(1), 99);
    assert_eq!(Height(1) - Height(100), -99);
    assert_eq!(Height::MAX - Height::MIN, HeightDiff::from(Height::MAX_AS_U32));

    Ok(())
}

#[test]
fn height_arithmetic_handles_extreme_diffs() -> Result<(), Report> {
    let _init_guard = cinder_test::init();

    // diffs that overflow the i64 intermediate are out of range, not a panic
    assert_eq!(Height(1) + HeightDiff::MAX, None);
    assert_eq!(Height(1) - HeightDiff::MIN, None);
    assert_eq!(Height::MAX + HeightDiff::MAX, None);
    assert_eq!(Height::MAX - HeightDiff::MIN, None);

    // extreme diffs that stay within i64 are still range checked
    assert_eq!(Height(0) + HeightDiff::MAX, None);
    assert_eq!(Height(0) - HeightDiff::MAX, None);
    assert_eq!(Height(0) + HeightDiff::MIN, None);

    Ok(())
}

#[test]
fn candidate_height_is_parent_plus_one() -> Result<(), Report> {
    let _init_guard = cinder_test::init();

    let parent = ParentBlock {
        height: Height(99_999),
        median_time_past: DateTime32::from(1_684_152_000),
    };

    assert_eq!(parent.candidate_height(), Some(Height(100_000)));

    // the genesis block is the parent of the block at height 1
    let genesis = ParentBlock {
        height: Height::MIN,
        median_time_past: DateTime32::from(0),
    };

    assert_eq!(genesis.candidate_height(), Some(Height(1)));

    // a parent at the maximum height has no valid candidate height
    let tip = ParentBlock {
        height: Height::MAX,
        median_time_past: DateTime32::from(0),
    };

    assert_eq!(tip.candidate_height(), None);

    Ok(())
}
