//! Consensus check functions

use cinder_chain::{
    amount::{Amount, NonNegative},
    transaction::Output,
};

use crate::error::*;

use super::subsidy::{self, miner_fund::ResolvedPolicy};

/// Returns `Ok(())` if the coinbase transaction with `coinbase_outputs`
/// pays the miner fund required by `policy`, for a block whose subsidy is
/// `expected_block_subsidy`.
///
/// Consensus rule: while a funding era is active, the coinbase transaction
/// must have at least one output that pays the era's fraction of the block
/// subsidy, rounded down, to one of the era's destination scripts. The
/// required value must come from a single output: fund outputs do not
/// accumulate.
///
/// When `policy` is inactive, every coinbase transaction passes, including
/// one with no outputs at all.
pub fn miner_fund_is_valid(
    policy: &ResolvedPolicy,
    expected_block_subsidy: Amount<NonNegative>,
    coinbase_outputs: &[Output],
) -> Result<(), BlockError> {
    if policy.is_inactive() {
        return Ok(());
    }

    let required = subsidy::miner_fund::required_fund_amount(policy, expected_block_subsidy)?;

    let fund_outputs = subsidy::miner_fund::find_fund_outputs(policy, coinbase_outputs);
    if fund_outputs.is_empty() {
        Err(MinerFundError::NoMatchingDestination)?;
    }

    if fund_outputs.iter().any(|output| output.value >= required) {
        Ok(())
    } else {
        Err(MinerFundError::InsufficientAmount)?
    }
}
