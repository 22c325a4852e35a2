//! Blocks, block heights, and the parent-block snapshot used by
//! activation-gated consensus rules.

mod height;

#[cfg(test)]
mod tests;

pub use height::{Height, HeightDiff};

use crate::time::DateTime32;

/// A read-only snapshot of the parent-block fields that gate consensus rules.
///
/// Rules that switch on at a chain position are decided from the block
/// immediately preceding the candidate block: the candidate's own height is
/// the parent height plus one, and time-gated rules compare against the
/// parent's median-time-past. The snapshot is supplied by the external chain
/// index, so validation code never walks the block tree itself.
///
/// Because the snapshot carries only the chain *position*, recomputing a
/// decision after a reorganization to a different branch at the same position
/// yields the same answer.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct ParentBlock {
    /// The height of the parent block in its chain.
    pub height: Height,

    /// The median-time-past of the parent block.
    pub median_time_past: DateTime32,
}

impl ParentBlock {
    /// Returns the height of the candidate block that builds on this parent,
    /// or `None` for a parent at [`Height::MAX`], which has no valid
    /// candidate height.
    pub fn candidate_height(&self) -> Option<Height> {
        self.height + 1
    }
}
