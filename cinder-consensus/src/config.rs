//! Configuration for semantic verification.

use serde::{Deserialize, Serialize};
use tracing::warn;

use cinder_chain::parameters::{miner_fund::FundingSchedule, Network};

/// Configuration for semantic block verification.
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(deny_unknown_fields, default)]
pub struct Config {
    /// Should Cinder enforce the miner fund rule when validating blocks?
    /// This is a developer-only option.
    ///
    /// # Security
    ///
    /// This option is `true` by default. The miner fund is a consensus
    /// rule, so a node that skips it accepts blocks the rest of its
    /// network rejects, and can end up following a worthless fork.
    ///
    /// Only disable this option on throwaway test networks.
    pub enforce_miner_fund: bool,
}

// we like our default configs to be explicit
#[allow(unknown_lints)]
#[allow(clippy::derivable_impls)]
impl Default for Config {
    fn default() -> Self {
        Self {
            enforce_miner_fund: true,
        }
    }
}

impl Config {
    /// Returns the miner fund schedule this node enforces for `network`,
    /// or `None` if enforcement is disabled by this config.
    ///
    /// Logs a warning when enforcement is disabled on a production network.
    pub fn miner_fund_schedule(&self, network: &Network) -> Option<&'static FundingSchedule> {
        if !self.enforce_miner_fund {
            if !network.is_a_test_network() {
                warn!(
                    ?network,
                    "miner fund enforcement is disabled; this node can accept blocks its network rejects"
                );
            }

            return None;
        }

        Some(network.miner_fund_schedule())
    }
}

#[cfg(test)]
mod tests {
    use color_eyre::Report;

    use cinder_chain::parameters::Network;

    use super::Config;

    /// An empty config file gives the explicit defaults.
    #[test]
    fn config_defaults_parse() -> Result<(), Report> {
        let _init_guard = cinder_test::init();

        let config: Config = toml::from_str("")?;
        assert!(config.enforce_miner_fund);

        let config: Config = toml::from_str("enforce_miner_fund = false\n")?;
        assert!(!config.enforce_miner_fund);

        Ok(())
    }

    /// Unknown config keys are rejected rather than silently dropped.
    #[test]
    fn config_rejects_unknown_fields() {
        let _init_guard = cinder_test::init();

        let parsed: Result<Config, _> = toml::from_str("enforce_minerfund = true\n");
        assert!(parsed.is_err());
    }

    /// A default config enforces the hard-coded schedule on every network,
    /// and a disabled config enforces nothing.
    #[test]
    fn config_gates_the_fund_schedule() {
        let _init_guard = cinder_test::init();

        let enforcing = Config::default();
        let disabled = Config {
            enforce_miner_fund: false,
        };

        for network in Network::iter() {
            assert_eq!(
                enforcing.miner_fund_schedule(&network),
                Some(network.miner_fund_schedule())
            );
            assert_eq!(disabled.miner_fund_schedule(&network), None);
        }
    }
}
