//! Leaf semantics: what each action does and what each condition checks.

use lb_agent::LadybugStore;
use lb_core::AgentId;
use lb_grid::{Cell, Grid};

use crate::{ActionKind, ConditionKind};

impl ActionKind {
    /// Perform the action for `agent`.  `false` means the action failed and
    /// nothing changed.
    pub fn perform(self, grid: &mut Grid, agents: &mut LadybugStore, agent: AgentId) -> bool {
        match self {
            ActionKind::Move      => agents.step_forward(agent, grid),
            ActionKind::TurnLeft  => agents.turn_left(agent),
            ActionKind::TurnRight => agents.turn_right(agent),
            ActionKind::TakeLeaf  => agents.take_leaf(agent, grid),
            ActionKind::PlaceLeaf => agents.place_leaf(agent, grid),
            ActionKind::Fly(goal) => agents.fly(agent, grid, goal),
        }
    }
}

impl ConditionKind {
    /// Evaluate the predicate for `agent`.  Never mutates anything.
    pub fn holds(self, grid: &Grid, agents: &LadybugStore, agent: AgentId) -> bool {
        match self {
            ConditionKind::AtEdge        => agents.at_edge(agent, grid),
            ConditionKind::LeafFront     => agents.cell_in_front(agent, grid) == Some(Cell::Leaf),
            ConditionKind::TreeFront     => agents.cell_in_front(agent, grid) == Some(Cell::Tree),
            ConditionKind::MushroomFront => agents.cell_in_front(agent, grid) == Some(Cell::Mushroom),
            ConditionKind::ExistsPathTo(goal) => grid.exists_path(agents.position(agent), goal),
            ConditionKind::ExistsPathBetween(start, goal) => grid.exists_path(start, goal),
        }
    }
}
