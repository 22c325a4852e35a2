//! Implementation of Cinder consensus checks.
//!
//! More specifically, this crate implements *semantic* validity checks, as
//! defined below.
//!
//! ## Verification levels.
//!
//! Cinder's implementation of the consensus rules is oriented around three
//! telescoping notions of validity:
//!
//! 1. *Structural Validity*, or whether the format and structure of the
//!    object are valid.  For instance, a funding schedule must keep its
//!    eras in activation order, and an amount must be in the valid money
//!    range.
//!
//! 2. *Semantic Validity*, or whether the object could potentially be
//!    valid, depending on the chain state.  For instance, a coinbase
//!    transaction must pay the required miner fund amount to one of the
//!    fund destinations for the funding era its block falls into.
//!
//! 3. *Contextual Validity*, or whether a semantically valid block is
//!    actually valid in the context of a particular chain state.  For
//!    instance, a block is only valid if its parent block is the current
//!    chain tip.
//!
//! *Structural validity* is enforced by the definitions of data
//! structures in `cinder-chain`.  *Semantic validity* is enforced by the
//! code in this crate.  *Contextual validity* is enforced when blocks are
//! committed to the chain state.

#![doc(html_root_url = "https://doc.cinderchain.org/cinder_consensus")]
// Standard lints
#![deny(missing_docs)]
#![allow(clippy::try_err)]
#![forbid(unsafe_code)]

mod block;
mod config;

pub mod error;

pub use block::check::miner_fund_is_valid;
pub use block::subsidy::miner_fund;
pub use config::Config;
