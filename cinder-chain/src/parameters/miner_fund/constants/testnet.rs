//! Hard-coded Testnet miner fund table.

use lazy_static::lazy_static;

use crate::{
    parameters::miner_fund::{
        constants::script_from_hex, Activation, FundingEra, FundingSchedule, MINER_FUND_RATIO,
    },
    time::DateTime32,
};

/// The Testnet activation time of the Basalt network upgrade:
/// May 15, 2023, 12:00:00 UTC.
pub(crate) const BASALT_ACTIVATION_TIME: u32 = 1_684_152_000;

/// The Testnet activation time of the Pumice network upgrade:
/// May 15, 2024, 12:00:00 UTC.
pub(crate) const PUMICE_ACTIVATION_TIME: u32 = 1_715_774_400;

/// The Testnet activation time of the Obsidian network upgrade:
/// May 15, 2025, 12:00:00 UTC.
pub(crate) const OBSIDIAN_ACTIVATION_TIME: u32 = 1_747_310_400;

/// The Testnet miner fund destination from Basalt, as a hex P2SH script.
pub(crate) const BASALT_FUND_SCRIPT: &str = "a9146f10de4b5e2ab26f30cd11c5113b4a9de5b3542687";

/// The Testnet miner fund destination from Pumice, as a hex P2SH script.
pub(crate) const PUMICE_FUND_SCRIPT: &str = "a914117f28103db0a4a22ea2ad42a6b94b91ff461fca87";

/// The Testnet miner fund destination from Obsidian, as a hex P2SH script.
pub(crate) const OBSIDIAN_FUND_SCRIPT: &str = "a9148cf1479a33cc2ecd0b6e9cbc934ad84986a1efc887";

lazy_static! {
    /// The hard-coded Testnet funding schedule.
    ///
    /// Upgrades activate at the same times as Mainnet, but pay to separate
    /// Testnet destination scripts.
    pub(crate) static ref FUNDING_SCHEDULE: FundingSchedule = FundingSchedule::from_eras([
        FundingEra::new(
            Activation::MedianTime(DateTime32::from(BASALT_ACTIVATION_TIME)),
            [script_from_hex(BASALT_FUND_SCRIPT)],
            MINER_FUND_RATIO,
        ),
        FundingEra::new(
            Activation::MedianTime(DateTime32::from(PUMICE_ACTIVATION_TIME)),
            [
                script_from_hex(PUMICE_FUND_SCRIPT),
                script_from_hex(BASALT_FUND_SCRIPT),
            ],
            MINER_FUND_RATIO,
        ),
        FundingEra::new(
            Activation::MedianTime(DateTime32::from(OBSIDIAN_ACTIVATION_TIME)),
            [script_from_hex(OBSIDIAN_FUND_SCRIPT)],
            MINER_FUND_RATIO,
        ),
    ])
    .expect("hard-coded Testnet funding schedule is valid");
}
