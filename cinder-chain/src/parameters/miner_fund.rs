//! Miner fund consensus rules.
//!
//! From its first funding era onwards, each Cinder network requires every
//! coinbase transaction to pay a fixed fraction of the block subsidy to one
//! of a small set of fund destination scripts. The eras, their destination
//! scripts, and the fraction paid are hard-coded per network in a
//! [`FundingSchedule`].

use std::{cmp::Ordering, collections::HashSet};

use thiserror::Error;

use crate::{block::Height, time::DateTime32, transaction::Script};

pub(crate) mod constants;


/// The fraction of the block subsidy paid to the miner fund, on every Cinder
/// network and in every funding era so far.
pub const MINER_FUND_RATIO: FundRatio = FundRatio::new(8, 100);

/// The chain position at which a funding era activates.
///
/// Activations within one schedule all use the same kind, so the active era
/// can be looked up with a single reference position. Positions of different
/// kinds are unordered.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Activation {
    /// Active for all blocks at this height or above.
    Height(Height),

    /// Active for all blocks whose parent has this median-time-past or above.
    MedianTime(DateTime32),
}

impl Activation {
    /// Returns the kind of this activation position.
    pub fn kind(&self) -> ActivationKind {
        match self {
            Activation::Height(_) => ActivationKind::Height,
            Activation::MedianTime(_) => ActivationKind::MedianTime,
        }
    }
}

impl PartialOrd for Activation {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self, other) {
            (Activation::Height(height), Activation::Height(other_height)) => {
                height.partial_cmp(other_height)
            }
            (Activation::MedianTime(time), Activation::MedianTime(other_time)) => {
                time.partial_cmp(other_time)
            }
            _ => None,
        }
    }
}

/// The measurement a funding era's activation is gated on.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum ActivationKind {
    /// Gated on the height of the block being validated.
    Height,

    /// Gated on the median-time-past of the parent block.
    MedianTime,
}

/// The fraction of the block subsidy that a funding era pays to the fund,
/// as an exact rational number.
///
/// Keeping the numerator and denominator separate lets the required fund
/// amount be computed in pure integer arithmetic, without rounding drift.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct FundRatio {
    numerator: u64,
    denominator: u64,
}

impl FundRatio {
    /// Creates a new subsidy fraction.
    ///
    /// The fraction is checked when a [`FundingSchedule`] is built from it:
    /// it must be greater than zero and at most one.
    pub const fn new(numerator: u64, denominator: u64) -> FundRatio {
        FundRatio {
            numerator,
            denominator,
        }
    }

    /// Returns the numerator of this fraction.
    pub fn numerator(&self) -> u64 {
        self.numerator
    }

    /// Returns the denominator of this fraction.
    pub fn denominator(&self) -> u64 {
        self.denominator
    }

    /// Returns `true` if this fraction is in the half-open interval (0, 1].
    fn is_valid(&self) -> bool {
        self.numerator > 0 && self.numerator <= self.denominator
    }
}

/// A single funding era.
///
/// From this era's activation position until the next era's, every coinbase
/// transaction must pay at least `ratio` of the block subsidy to one of the
/// scripts in `destinations`.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FundingEra {
    /// The chain position at which this era replaces the previous one.
    activation: Activation,

    /// The whitelist of scripts that can receive this era's fund payment.
    destinations: HashSet<Script>,

    /// The fraction of the block subsidy this era pays to the fund.
    ratio: FundRatio,
}

impl FundingEra {
    /// Creates a new funding era.
    ///
    /// `destinations` has set semantics, so duplicate scripts collapse into
    /// one. Schedule construction rejects eras with no destinations at all.
    pub fn new(
        activation: Activation,
        destinations: impl IntoIterator<Item = Script>,
        ratio: FundRatio,
    ) -> FundingEra {
        FundingEra {
            activation,
            destinations: destinations.into_iter().collect(),
            ratio,
        }
    }

    /// Returns the chain position at which this era activates.
    pub fn activation(&self) -> Activation {
        self.activation
    }

    /// Returns the whitelist of destination scripts for this era.
    pub fn destinations(&self) -> &HashSet<Script> {
        &self.destinations
    }

    /// Returns the fraction of the block subsidy this era pays to the fund.
    pub fn ratio(&self) -> FundRatio {
        self.ratio
    }
}

/// An immutable table of funding eras for a single network, ordered by
/// activation position.
///
/// An empty schedule is valid, and means the miner fund rule is never
/// active on that network.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct FundingSchedule {
    eras: Vec<FundingEra>,
}

impl FundingSchedule {
    /// Creates a new funding schedule from `eras`.
    ///
    /// Returns an error unless every era has at least one destination and a
    /// fraction in (0, 1], and the activation positions all use the same
    /// kind and strictly increase.
    pub fn from_eras(
        eras: impl IntoIterator<Item = FundingEra>,
    ) -> Result<FundingSchedule, ScheduleError> {
        let eras: Vec<FundingEra> = eras.into_iter().collect();

        for era in &eras {
            if era.destinations.is_empty() {
                Err(ScheduleError::EmptyDestinations {
                    activation: era.activation,
                })?;
            }
            if !era.ratio.is_valid() {
                Err(ScheduleError::InvalidRatio {
                    numerator: era.ratio.numerator,
                    denominator: era.ratio.denominator,
                })?;
            }
        }

        for pair in eras.windows(2) {
            match pair[0].activation.partial_cmp(&pair[1].activation) {
                Some(Ordering::Less) => {}
                Some(_) => Err(ScheduleError::NonIncreasingActivation {
                    activation: pair[1].activation,
                })?,
                None => Err(ScheduleError::MixedActivationKinds)?,
            }
        }

        Ok(FundingSchedule { eras })
    }

    /// Returns the eras of this schedule, ordered by activation position.
    pub fn eras(&self) -> &[FundingEra] {
        &self.eras
    }

    /// Returns the activation kind shared by every era in this schedule, or
    /// `None` if the schedule is empty.
    pub fn activation_kind(&self) -> Option<ActivationKind> {
        self.eras.first().map(|era| era.activation.kind())
    }

    /// Returns the era in effect at `position`: the era with the largest
    /// activation position less than or equal to `position`.
    ///
    /// Returns `None` before the first era activates, when the schedule is
    /// empty, or when `position` is not the kind this schedule is gated on.
    pub fn era_active_at(&self, position: Activation) -> Option<&FundingEra> {
        self.eras
            .iter()
            .take_while(|era| era.activation <= position)
            .last()
    }
}

/// Structural errors in a funding schedule.
///
/// Hard-coded schedules are checked with these rules when first used, so a
/// node refuses to start with a table it cannot interpret unambiguously.
#[derive(Error, Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum ScheduleError {
    /// The eras are out of order, or share an activation position.
    #[error("funding era at {activation:?} does not strictly increase on the previous era")]
    NonIncreasingActivation {
        /// The activation position of the out-of-order era.
        activation: Activation,
    },

    /// The eras gate on more than one kind of chain position.
    #[error("all funding eras in a schedule must use the same activation kind")]
    MixedActivationKinds,

    /// An era has nowhere to send the fund payment.
    #[error("funding era at {activation:?} has an empty destination whitelist")]
    EmptyDestinations {
        /// The activation position of the destination-less era.
        activation: Activation,
    },

    /// An era pays a fraction outside (0, 1].
    #[error("funding era fraction {numerator}/{denominator} is not in (0, 1]")]
    InvalidRatio {
        /// The numerator of the rejected fraction.
        numerator: u64,
        /// The denominator of the rejected fraction.
        denominator: u64,
    },
}
