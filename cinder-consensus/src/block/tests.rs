//! Tests for block verification


use color_eyre::Report;

use cinder_chain::{
    amount::{Amount, NonNegative},
    block::{Height, ParentBlock},
    parameters::miner_fund::{Activation, FundingEra, FundingSchedule, MINER_FUND_RATIO},
    time::DateTime32,
    transaction::{Output, Script},
};

use crate::error::{BlockError, MinerFundError};

use super::*;

/// Returns a distinct P2SH-shaped script for `tag`.
fn fund_script(tag: u8) -> Script {
    let mut raw = vec![0xa9, 0x14];
    raw.extend([tag; 20]);
    raw.push(0x87);

    Script::new(&raw)
}

/// Returns a parent block at `height` whose median-time-past is
/// `median_time_past`.
fn parent(height: u32, median_time_past: u32) -> ParentBlock {
    ParentBlock {
        height: Height(height),
        median_time_past: DateTime32::from(median_time_past),
    }
}

/// Returns a coinbase output paying `value` embers to `lock_script`.
fn output_paying(lock_script: Script, value: i64) -> Output {
    Output {
        value: Amount::try_from(value).expect("valid test amount"),
        lock_script,
    }
}

/// The worked consensus example: a single funding era from height 100_000,
/// paying 8% of a 6.25 CDR subsidy.
#[test]
fn miner_fund_end_to_end() -> Result<(), Report> {
    let _init_guard = cinder_test::init();

    let fund = fund_script(1);
    let miner = fund_script(9);

    let schedule = FundingSchedule::from_eras([FundingEra::new(
        Activation::Height(Height(100_000)),
        [fund.clone()],
        MINER_FUND_RATIO,
    )])
    .expect("one valid era is a valid schedule");

    let subsidy: Amount<NonNegative> = Amount::try_from(625_000_000)?;

    // block 99_999: no era is active yet, so no fund output is needed
    let policy = subsidy::miner_fund::resolve(&schedule, parent(99_998, 0));
    check::miner_fund_is_valid(&policy, subsidy, &[output_paying(miner.clone(), 625_000_000)])
        .expect("blocks before the first era need no fund output");

    // block 100_000: the era is active, and 0.5 CDR must go to the fund
    let policy = subsidy::miner_fund::resolve(&schedule, parent(99_999, 0));

    check::miner_fund_is_valid(
        &policy,
        subsidy,
        &[
            output_paying(fund.clone(), 50_000_000),
            output_paying(miner.clone(), 575_000_000),
        ],
    )
    .expect("a coinbase paying the full fund amount is valid");

    assert_eq!(
        check::miner_fund_is_valid(
            &policy,
            subsidy,
            &[
                output_paying(fund.clone(), 40_000_000),
                output_paying(miner.clone(), 585_000_000),
            ],
        ),
        Err(BlockError::MinerFund(MinerFundError::InsufficientAmount)),
    );

    Ok(())
}

/// Returns a policy with destinations `tags`, active for the whole chain.
fn active_policy(tags: &[u8]) -> subsidy::miner_fund::ResolvedPolicy {
    let era = FundingEra::new(
        Activation::Height(Height(0)),
        tags.iter().map(|tag| fund_script(*tag)),
        MINER_FUND_RATIO,
    );
    let schedule = FundingSchedule::from_eras([era]).expect("one valid era is a valid schedule");

    subsidy::miner_fund::resolve(&schedule, parent(0, 0))
}

/// A fund output at exactly the required amount passes, one ember less
/// fails, and overpaying is allowed.
#[test]
fn miner_fund_boundary_amounts() -> Result<(), Report> {
    let _init_guard = cinder_test::init();

    let policy = active_policy(&[1]);
    let subsidy: Amount<NonNegative> = Amount::try_from(625_000_000)?;

    check::miner_fund_is_valid(&policy, subsidy, &[output_paying(fund_script(1), 50_000_000)])
        .expect("paying exactly the required amount is valid");

    check::miner_fund_is_valid(&policy, subsidy, &[output_paying(fund_script(1), 50_000_001)])
        .expect("overpaying the fund is valid");

    assert_eq!(
        check::miner_fund_is_valid(
            &policy,
            subsidy,
            &[output_paying(fund_script(1), 49_999_999)],
        ),
        Err(BlockError::MinerFund(MinerFundError::InsufficientAmount)),
    );

    Ok(())
}

/// Outputs to non-fund scripts never satisfy the rule, even with enough
/// value.
#[test]
fn miner_fund_requires_a_matching_destination() -> Result<(), Report> {
    let _init_guard = cinder_test::init();

    let policy = active_policy(&[1]);
    let subsidy: Amount<NonNegative> = Amount::try_from(625_000_000)?;

    assert_eq!(
        check::miner_fund_is_valid(
            &policy,
            subsidy,
            &[output_paying(fund_script(2), 625_000_000)],
        ),
        Err(BlockError::MinerFund(MinerFundError::NoMatchingDestination)),
    );

    assert_eq!(
        check::miner_fund_is_valid(&policy, subsidy, &[]),
        Err(BlockError::MinerFund(MinerFundError::NoMatchingDestination)),
    );

    Ok(())
}

/// The required value must come from a single output: several smaller fund
/// outputs do not add up.
#[test]
fn miner_fund_outputs_do_not_accumulate() -> Result<(), Report> {
    let _init_guard = cinder_test::init();

    let subsidy: Amount<NonNegative> = Amount::try_from(625_000_000)?;

    // split across two outputs to the same destination
    let policy = active_policy(&[1]);
    assert_eq!(
        check::miner_fund_is_valid(
            &policy,
            subsidy,
            &[
                output_paying(fund_script(1), 25_000_000),
                output_paying(fund_script(1), 25_000_000),
            ],
        ),
        Err(BlockError::MinerFund(MinerFundError::InsufficientAmount)),
    );

    // split across two different whitelisted destinations
    let policy = active_policy(&[1, 2]);
    assert_eq!(
        check::miner_fund_is_valid(
            &policy,
            subsidy,
            &[
                output_paying(fund_script(1), 25_000_000),
                output_paying(fund_script(2), 25_000_000),
            ],
        ),
        Err(BlockError::MinerFund(MinerFundError::InsufficientAmount)),
    );

    Ok(())
}

/// With several whitelisted destinations, paying any one of them is enough,
/// and extra underfunded fund outputs are harmless.
#[test]
fn miner_fund_accepts_any_whitelisted_destination() -> Result<(), Report> {
    let _init_guard = cinder_test::init();

    let policy = active_policy(&[1, 2]);
    let subsidy: Amount<NonNegative> = Amount::try_from(625_000_000)?;

    check::miner_fund_is_valid(&policy, subsidy, &[output_paying(fund_script(2), 50_000_000)])
        .expect("paying the second whitelisted destination is valid");

    check::miner_fund_is_valid(
        &policy,
        subsidy,
        &[
            output_paying(fund_script(1), 1),
            output_paying(fund_script(2), 50_000_000),
        ],
    )
    .expect("an extra underfunded fund output does not invalidate the block");

    Ok(())
}

/// A subsidy small enough to round the fund amount down to zero still
/// requires an output to a fund destination.
#[test]
fn miner_fund_zero_requirement_still_needs_a_destination() -> Result<(), Report> {
    let _init_guard = cinder_test::init();

    let policy = active_policy(&[1]);
    let subsidy: Amount<NonNegative> = Amount::try_from(7)?;

    check::miner_fund_is_valid(&policy, subsidy, &[output_paying(fund_script(1), 0)])
        .expect("a zero-value fund output meets a zero requirement");

    assert_eq!(
        check::miner_fund_is_valid(&policy, subsidy, &[output_paying(fund_script(2), 7)]),
        Err(BlockError::MinerFund(MinerFundError::NoMatchingDestination)),
    );

    Ok(())
}

/// An inactive policy accepts any coinbase, including an empty one.
#[test]
fn miner_fund_inactive_policy_accepts_everything() -> Result<(), Report> {
    let _init_guard = cinder_test::init();

    let policy = subsidy::miner_fund::ResolvedPolicy::inactive();
    let subsidy: Amount<NonNegative> = Amount::try_from(625_000_000)?;

    check::miner_fund_is_valid(&policy, subsidy, &[]).expect("no outputs are needed");
    check::miner_fund_is_valid(&policy, subsidy, &[output_paying(fund_script(9), 625_000_000)])
        .expect("any outputs are accepted");
    check::miner_fund_is_valid(&policy, Amount::zero(), &[])
        .expect("a zero subsidy is accepted");

    Ok(())
}
