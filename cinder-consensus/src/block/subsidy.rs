//! Validate how coinbase transactions distribute the block subsidy.

/// Miner fund functions apply for blocks in an active funding era.
pub mod miner_fund;
