//! Miner fund calculations.
//!
//! The policy for a candidate block is resolved from the network's funding
//! schedule and the parent block alone, so resolution is a pure function:
//! repeated calls with the same inputs give the same policy.

use std::collections::HashSet;

use cinder_chain::{
    amount::{Amount, NonNegative},
    block::{Height, ParentBlock},
    parameters::miner_fund::{Activation, ActivationKind, FundRatio, FundingSchedule},
    transaction::{Output, Script},
};

use crate::error::MinerFundError;


/// The miner fund policy in force for a single candidate block.
///
/// When the destination whitelist is empty the policy is inactive: every
/// coinbase transaction passes, and the ratio is never consulted.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ResolvedPolicy {
    /// The scripts that can receive the fund payment.
    destinations: HashSet<Script>,

    /// The fraction of the block subsidy the fund payment must reach.
    ratio: FundRatio,
}

impl ResolvedPolicy {
    /// Returns the policy for chain positions with no active funding era.
    pub fn inactive() -> ResolvedPolicy {
        ResolvedPolicy {
            destinations: HashSet::new(),
            ratio: FundRatio::new(0, 1),
        }
    }

    /// Returns `true` if no funding era applies, so any coinbase is valid.
    pub fn is_inactive(&self) -> bool {
        self.destinations.is_empty()
    }

    /// Returns the destination whitelist in force.
    pub fn destinations(&self) -> &HashSet<Script> {
        &self.destinations
    }

    /// Returns the subsidy fraction in force.
    pub fn ratio(&self) -> FundRatio {
        self.ratio
    }
}

/// Returns the miner fund policy for the child block of `parent`, under
/// `schedule`.
///
/// Height-gated schedules are probed with the candidate block's height, and
/// median-time-gated schedules with the parent block's median-time-past.
/// Positions before the first era resolve to an inactive policy.
pub fn resolve(schedule: &FundingSchedule, parent: ParentBlock) -> ResolvedPolicy {
    let position = match schedule.activation_kind() {
        Some(ActivationKind::Height) => {
            // A parent at the maximum height has no candidate height. Every
            // era threshold is a valid height, so the last era is still the
            // active one at that position.
            let height = parent.candidate_height().unwrap_or(Height::MAX);

            Activation::Height(height)
        }
        Some(ActivationKind::MedianTime) => Activation::MedianTime(parent.median_time_past),
        None => return ResolvedPolicy::inactive(),
    };

    match schedule.era_active_at(position) {
        Some(era) => ResolvedPolicy {
            destinations: era.destinations().clone(),
            ratio: era.ratio(),
        },
        None => ResolvedPolicy::inactive(),
    }
}

/// Returns the minimum amount a single coinbase output must pay to a fund
/// destination under `policy`, for a block with `expected_block_subsidy`.
///
/// The amount is `ratio` of the subsidy, in exact integer arithmetic with
/// the division rounding down.
pub fn required_fund_amount(
    policy: &ResolvedPolicy,
    expected_block_subsidy: Amount<NonNegative>,
) -> Result<Amount<NonNegative>, MinerFundError> {
    let ratio = policy.ratio();

    Ok(((expected_block_subsidy * ratio.numerator())? / ratio.denominator())?)
}

/// Returns the outputs in `outputs` that pay any destination in `policy`,
/// regardless of their value.
pub fn find_fund_outputs(policy: &ResolvedPolicy, outputs: &[Output]) -> Vec<Output> {
    outputs
        .iter()
        .filter(|output| policy.destinations().contains(&output.lock_script))
        .cloned()
        .collect()
}
