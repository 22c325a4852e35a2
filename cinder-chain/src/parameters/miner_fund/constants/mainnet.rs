//! Hard-coded Mainnet miner fund table.

use lazy_static::lazy_static;

use crate::{
    parameters::miner_fund::{
        constants::script_from_hex, Activation, FundingEra, FundingSchedule, MINER_FUND_RATIO,
    },
    time::DateTime32,
};

/// The Mainnet activation time of the Basalt network upgrade:
/// May 15, 2023, 12:00:00 UTC.
pub(crate) const BASALT_ACTIVATION_TIME: u32 = 1_684_152_000;

/// The Mainnet activation time of the Pumice network upgrade:
/// May 15, 2024, 12:00:00 UTC.
pub(crate) const PUMICE_ACTIVATION_TIME: u32 = 1_715_774_400;

/// The Mainnet activation time of the Obsidian network upgrade:
/// May 15, 2025, 12:00:00 UTC.
pub(crate) const OBSIDIAN_ACTIVATION_TIME: u32 = 1_747_310_400;

/// The Mainnet miner fund destination from Basalt, as a hex P2SH script.
pub(crate) const BASALT_FUND_SCRIPT: &str = "a9143a155ff499764c36b1e22db4de6dcf217379feb787";

/// The Mainnet miner fund destination from Pumice, as a hex P2SH script.
///
/// During Pumice the previous Basalt destination stays on the whitelist, so
/// miners can switch payout addresses without a flag-day coordination.
pub(crate) const PUMICE_FUND_SCRIPT: &str = "a9149ec958e37bf6efb6443dfd0b2b5e1f1b84a9c2f087";

/// The Mainnet miner fund destination from Obsidian, as a hex P2SH script.
pub(crate) const OBSIDIAN_FUND_SCRIPT: &str = "a914c52f0566b3d3ee1c1d7e0ca8d9f5797ad92cb34687";

lazy_static! {
    /// The hard-coded Mainnet funding schedule.
    ///
    /// Every era pays [`MINER_FUND_RATIO`] of the block subsidy to one of
    /// its destination scripts, from its activation time until the next
    /// era activates.
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
    .expect("hard-coded Mainnet funding schedule is valid");
}
