//! Core consensus data structures for Cinder.
//!
//! This crate defines the value types that consensus rules are written
//! against: currency amounts, block heights, 32-bit consensus timestamps,
//! transparent transaction outputs and their scripts, and the per-network
//! consensus parameters, including the hard-coded miner fund schedules and
//! the seed peer tables.
//!
//! It contains no I/O and spawns no tasks; everything here is plain data
//! that can be shared freely between validation threads.

#![doc(html_root_url = "https://doc.cinderchain.org/cinder_chain")]
// Standard lints
#![deny(missing_docs)]
#![allow(clippy::try_err)]
#![forbid(unsafe_code)]

#[macro_use]
extern crate serde;

pub mod amount;
pub mod block;
pub mod parameters;
pub mod time;
pub mod transaction;
