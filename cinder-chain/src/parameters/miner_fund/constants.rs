//! Hard-coded miner fund tables for each Cinder network.

use crate::transaction::Script;

pub(crate) mod mainnet;
pub(crate) mod testnet;

/// Converts a hex-encoded hard-coded script into a [`Script`].
///
/// # Panics
///
/// If the hex is malformed. Only call this on hard-coded table entries.
pub(super) fn script_from_hex(hex_script: &str) -> Script {
    Script::new(&hex::decode(hex_script).expect("hard-coded script is valid hex"))
}
