//! Mutable state borrowed for the duration of one tick.

use lb_agent::LadybugStore;
use lb_core::AgentId;
use lb_grid::Grid;

use crate::Trace;

/// Everything a walk reads or writes while ticking one ladybug's tree.
///
/// Only the ticking ladybug's own actions write to `grid` and `agents`.
/// `halted` is set when an action is installed as the resume pointer; every
/// composite on the way back up returns `Running` once it is set.
pub(crate) struct TickContext<'a> {
    pub grid:   &'a mut Grid,
    pub agents: &'a mut LadybugStore,
    pub agent:  AgentId,
    pub trace:  Trace,
    pub halted: bool,
}

impl<'a> TickContext<'a> {
    pub fn new(grid: &'a mut Grid, agents: &'a mut LadybugStore, agent: AgentId) -> Self {
        Self { grid, agents, agent, trace: Trace::new(), halted: false }
    }
}
