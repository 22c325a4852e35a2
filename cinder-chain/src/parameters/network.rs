//! The Cinder networks, and network-specific consensus tables.

use std::fmt;

use crate::parameters::{
    miner_fund::{constants as miner_fund_constants, FundingSchedule},
    seeds::{self, SeedSpec},
};


/// An enum describing the possible network choices.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[cfg_attr(
    any(test, feature = "proptest-impl"),
    derive(proptest_derive::Arbitrary)
)]
pub enum Network {
    /// The production Cinder network.
    #[default]
    Mainnet,

    /// The oldest public test network.
    Testnet,
}

impl From<&Network> for &'static str {
    fn from(network: &Network) -> &'static str {
        match network {
            Network::Mainnet => "Mainnet",
            Network::Testnet => "Testnet",
        }
    }
}

impl From<Network> for &'static str {
    fn from(network: Network) -> &'static str {
        (&network).into()
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.into())
    }
}

impl Network {
    /// Returns an iterator over [`Network`] variants.
    pub fn iter() -> impl Iterator<Item = Network> {
        [Network::Mainnet, Network::Testnet].into_iter()
    }

    /// Returns the default port associated to this network.
    pub fn default_port(&self) -> u16 {
        match self {
            Network::Mainnet => 8533,
            Network::Testnet => 18533,
        }
    }

    /// Returns `true` if this network is a test network.
    pub fn is_a_test_network(&self) -> bool {
        *self != Network::Mainnet
    }

    /// Returns the hard-coded miner fund schedule for this network.
    ///
    /// The schedule's structural rules are checked when the table is first
    /// used, and a malformed hard-coded table is a panic at startup.
    pub fn miner_fund_schedule(&self) -> &'static FundingSchedule {
        match self {
            Network::Mainnet => &miner_fund_constants::mainnet::FUNDING_SCHEDULE,
            Network::Testnet => &miner_fund_constants::testnet::FUNDING_SCHEDULE,
        }
    }

    /// Returns the hard-coded seed peer endpoints for this network.
    ///
    /// These are last-resort peer addresses, only used to bootstrap initial
    /// connections when no fresher address source is available.
    pub fn seed_peers(&self) -> &'static [SeedSpec] {
        match self {
            Network::Mainnet => &seeds::MAINNET_SEED_PEERS,
            Network::Testnet => &seeds::TESTNET_SEED_PEERS,
        }
    }
}
