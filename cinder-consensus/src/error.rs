//! Errors that can occur when checking consensus rules.
//!
//! Each error variant corresponds to a consensus rule, so enumerating
//! all possible verification failures enumerates the consensus rules we
//! implement, and ensures that we don't reject blocks for a
//! non-enumerated reason.

use thiserror::Error;

use cinder_chain::amount;

/// Errors for the miner fund consensus rules.
#[derive(Error, Debug, PartialEq)]
pub enum MinerFundError {
    /// No coinbase output pays any of the active fund destinations.
    #[error("no coinbase output pays a miner fund destination")]
    NoMatchingDestination,

    /// Some coinbase output pays a fund destination, but none of them pays
    /// the full required amount on its own.
    #[error("no single coinbase output pays the full miner fund amount")]
    InsufficientAmount,

    /// The required fund amount could not be computed from the subsidy.
    #[error("invalid miner fund amount")]
    Amount(#[from] amount::Error),
}

/// Block-level consensus errors.
#[derive(Error, Debug, PartialEq)]
pub enum BlockError {
    /// The block's coinbase transaction breaks a miner fund rule.
    #[error("block's coinbase transaction failed miner fund validation")]
    MinerFund(#[from] MinerFundError),
}
