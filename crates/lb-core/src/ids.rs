//! Strongly typed, zero-cost identifier wrappers.
//!
//! Both IDs are `Copy + Ord + Hash` so they can be used as map keys and sorted
//! collection elements without ceremony.  The inner integer is `pub`; callers
//! should still prefer `.index()` when addressing a `Vec`, because the two
//! IDs map onto indices differently.  Only `NodeIdx` converts to `usize`,
//! since an `AgentId`'s raw value is not its index:
//!
//! | ID        | First value | `.index()`       |
//! |-----------|-------------|------------------|
//! | `AgentId` | `1`         | `self.0 - 1`     |
//! | `NodeIdx` | `0`         | `self.0`         |
//!
//! `AgentId` is 1-based because it is the number users see and type.

use std::fmt;

/// Generate a typed ID wrapper around a primitive integer.
macro_rules! typed_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident($inner:ty);) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        $vis struct $name(pub $inner);

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

typed_id! {
    /// Identity of a ladybug, assigned in reading order when a board is parsed.
    pub struct AgentId(u32);
}

typed_id! {
    /// Handle of a node inside one behavior tree's arena.
    ///
    /// Only meaningful for the tree that issued it.
    pub struct NodeIdx(u32);
}

impl AgentId {
    /// The first ladybug on a board.
    pub const FIRST: AgentId = AgentId(1);

    /// Position of this agent in SoA storage.
    ///
    /// # Panics
    /// Panics in debug mode on `AgentId(0)`, which is never issued.
    #[inline(always)]
    pub fn index(self) -> usize {
        (self.0 - 1) as usize
    }

    /// The agent stored at `index` (inverse of [`index`](Self::index)).
    #[inline]
    pub fn from_index(index: usize) -> AgentId {
        AgentId(index as u32 + 1)
    }
}

impl NodeIdx {
    /// Cast to `usize` for direct use as an arena index.
    #[inline(always)]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl From<NodeIdx> for usize {
    #[inline(always)]
    fn from(idx: NodeIdx) -> usize {
        idx.index()
    }
}

impl TryFrom<usize> for NodeIdx {
    type Error = std::num::TryFromIntError;
    fn try_from(n: usize) -> Result<NodeIdx, Self::Error> {
        u32::try_from(n).map(NodeIdx)
    }
}
