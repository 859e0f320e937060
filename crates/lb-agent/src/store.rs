//! Core ladybug storage: `LadybugStore`.
//!
//! Every ladybug is a row across three parallel arrays.  The store holds no
//! behavior trees; the simulation keeps those in a separate `Vec` indexed the
//! same way, so a tree can borrow itself mutably while its actions borrow the
//! store:
//!
//! ```ignore
//! // lb-sim tick (simplified):
//! let tree = self.trees[agent.index()].as_mut()?;
//! let trace = tree.tick(&mut self.grid, &mut self.ladybugs, agent);
//! ```

use lb_core::{AgentId, Direction, Position};

/// Structure-of-Arrays storage for all ladybug state.
///
/// Every `Vec` field has exactly `count` elements; `AgentId::index()` is the
/// index into all of them.
///
/// `Clone` is a deep copy and is used as the initial-state snapshot restored
/// when trees are (re)loaded.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LadybugStore {
    /// Number of ladybugs.  Equals the length of every SoA `Vec`.
    pub count: usize,

    /// Current cell.  Always in bounds of the grid the store was built for.
    pub position: Vec<Position>,

    /// Current facing.
    pub direction: Vec<Direction>,

    /// `true` once a behavior tree has been bound to the ladybug.
    pub active: Vec<bool>,
}

impl LadybugStore {
    /// `true` if there are no ladybugs.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Iterator over all `AgentId`s in ascending order.
    pub fn agent_ids(&self) -> impl Iterator<Item = AgentId> + '_ {
        (0..self.count).map(AgentId::from_index)
    }

    /// `true` if `agent` names a ladybug in this store.
    #[inline]
    pub fn contains(&self, agent: AgentId) -> bool {
        agent.0 >= 1 && agent.index() < self.count
    }

    // ── Per-agent accessors ───────────────────────────────────────────────

    #[inline]
    pub fn position(&self, agent: AgentId) -> Position {
        self.position[agent.index()]
    }

    #[inline]
    pub fn direction(&self, agent: AgentId) -> Direction {
        self.direction[agent.index()]
    }

    #[inline]
    pub fn is_active(&self, agent: AgentId) -> bool {
        self.active[agent.index()]
    }

    #[inline]
    pub fn set_active(&mut self, agent: AgentId, active: bool) {
        self.active[agent.index()] = active;
    }

    /// Mark every ladybug inactive.
    pub fn deactivate_all(&mut self) {
        self.active.fill(false);
    }

    /// Active ladybugs in ascending id order.
    pub fn active_ids(&self) -> impl Iterator<Item = AgentId> + '_ {
        self.agent_ids().filter(|&a| self.is_active(a))
    }

    // ── Occupancy ─────────────────────────────────────────────────────────

    /// The ladybug standing on `pos`, if any.
    pub fn agent_at(&self, pos: Position) -> Option<AgentId> {
        self.position.iter().position(|&p| p == pos).map(AgentId::from_index)
    }

    /// `true` if a ladybug other than `agent` stands on `pos`.
    pub fn occupied_by_other(&self, agent: AgentId, pos: Position) -> bool {
        self.position
            .iter()
            .enumerate()
            .any(|(i, &p)| p == pos && i != agent.index())
    }

    /// The cell directly ahead of `agent`.  May lie outside the grid.
    #[inline]
    pub fn front(&self, agent: AgentId) -> Position {
        self.position(agent).step(self.direction(agent))
    }

    // ── Crate-private constructor used by LadybugStoreBuilder ─────────────

    pub(crate) fn new(position: Vec<Position>, direction: Vec<Direction>) -> Self {
        debug_assert_eq!(position.len(), direction.len());
        let count = position.len();
        Self { count, position, direction, active: vec![false; count] }
    }
}
