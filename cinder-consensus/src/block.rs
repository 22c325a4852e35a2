//! Block verification for Cinder.
//!
//! The checks in this module are context-free given a resolved policy: the
//! caller looks up the funding schedule and the parent block position, and
//! the checks here depend on nothing else.

pub mod check;
pub mod subsidy;

#[cfg(test)]
mod tests;
