//! Transaction outputs and their scripts.
//!
//! Cinder transactions are transparent: every output is a plain value plus a
//! lock script. Consensus rules about coinbase payouts are written against
//! the list of outputs in a block's coinbase transaction.

mod script;

pub use script::Script;

use crate::amount::{Amount, NonNegative};

/// A transparent output from a transaction.
///
/// The most important output list in this crate is the coinbase output list:
/// the first transaction of every block creates the block reward, and
/// consensus rules constrain where parts of that reward must be paid.
#[derive(Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[cfg_attr(
    any(test, feature = "proptest-impl"),
    derive(proptest_derive::Arbitrary)
)]
pub struct Output {
    /// Transaction value.
    pub value: Amount<NonNegative>,

    /// The lock script defines the conditions under which this output can be
    /// spent.
    pub lock_script: Script,
}
