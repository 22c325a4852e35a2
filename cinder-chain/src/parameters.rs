//! Consensus parameters for each Cinder network.
//!
//! Some consensus parameters change when a network upgrade activates. Each
//! upgrade happens at a particular chain position, measured either by block
//! height or by the parent block's median-time-past. Typically, consensus
//! parameters are accessed via a function that takes a [`Network`] and a
//! chain position.

pub mod miner_fund;
mod network;
pub mod seeds;

pub use network::Network;
