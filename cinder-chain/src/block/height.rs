//! Block height type and arithmetic.

use std::ops::{Add, Sub};

/// The height of a block is the length of the chain back to the genesis block.
///
/// # Invariants
///
/// Users should not construct block heights greater than `Height::MAX`.
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Height(pub u32);

impl Height {
    /// The minimum Height.
    ///
    /// Due to the underlying type, it is impossible to construct block heights
    /// less than `Height::MIN`.
    ///
    /// Style note: Sometimes, `Height::MIN` is less readable than
    /// `Height(0)`. Use whichever makes sense in context.
    pub const MIN: Height = Height(0);

    /// The maximum Height.
    ///
    /// Users should not construct block heights greater than `Height::MAX`.
    pub const MAX: Height = Height(499_999_999);

    /// The maximum Height as a u32, for range patterns.
    ///
    /// `Height::MAX.0` can't be used in match range patterns, use this
    /// alias instead.
    pub const MAX_AS_U32: u32 = Self::MAX.0;
}

/// A difference between two [`Height`]s, possibly negative.
///
/// This can also be used to represent a relative height.
pub type HeightDiff = i64;

impl Sub<Height> for Height {
    type Output = HeightDiff;

    fn sub(self, rhs: Height) -> Self::Output {
        // All valid heights fit in HeightDiff, so this can't overflow.
        HeightDiff::from(self.0) - HeightDiff::from(rhs.0)
    }
}

impl Sub<HeightDiff> for Height {
    type Output = Option<Self>;

    fn sub(self, rhs: HeightDiff) -> Option<Self> {
        let result = HeightDiff::from(self.0).checked_sub(rhs)?;
        let height = result.try_into().ok()?;
        let height = Height(height);

        if height <= Height::MAX {
            Some(height)
        } else {
            None
        }
    }
}

impl Add<HeightDiff> for Height {
    type Output = Option<Self>;

    fn add(self, rhs: HeightDiff) -> Option<Self> {
        let result = HeightDiff::from(self.0).checked_add(rhs)?;
        let height = result.try_into().ok()?;
        let height = Height(height);

        if height <= Height::MAX {
            Some(height)
        } else {
            None
        }
    }
}

#[cfg(any(test, feature = "proptest-impl"))]
use proptest::prelude::*;

#[cfg(any(test, feature = "proptest-impl"))]
impl Arbitrary for Height {
    type Parameters = ();

    fn arbitrary_with(_args: ()) -> Self::Strategy {
        (Height::MIN.0..=Height::MAX.0).prop_map(Height).boxed()
    }

    type Strategy = BoxedStrategy<Self>;
}
