//! Primitive ladybug actions and the front-cell queries conditions use.
//!
//! Every action either mutates state and returns `true`, or leaves both the
//! store and the grid untouched and returns `false`.  A failed action is an
//! ordinary outcome, not an error.

use lb_core::{AgentId, Direction, Position};
use lb_grid::{Cell, Grid};

use crate::LadybugStore;

impl LadybugStore {
    // ── Movement ──────────────────────────────────────────────────────────

    /// Step one cell forward.
    ///
    /// Blocked by the grid edge, another ladybug, a tree or a leaf.  A
    /// mushroom ahead is pushed one cell further when that cell is in bounds
    /// and empty; otherwise the step fails.
    pub fn step_forward(&mut self, agent: AgentId, grid: &mut Grid) -> bool {
        let direction = self.direction(agent);
        let front = self.front(agent);
        if !grid.in_bounds(front) || self.occupied_by_other(agent, front) {
            return false;
        }
        match grid.cell_at(front) {
            Cell::Empty => {}
            Cell::Mushroom => {
                let beyond = front.step(direction);
                // A ladybug does not block a pushed mushroom.
                if !grid.is_empty(beyond) {
                    return false;
                }
                grid.set_cell(beyond, Cell::Mushroom);
                grid.set_cell(front, Cell::Empty);
            }
            Cell::Tree | Cell::Leaf => return false,
        }
        self.position[agent.index()] = front;
        true
    }

    /// Rotate 90° counter-clockwise.  Always succeeds.
    pub fn turn_left(&mut self, agent: AgentId) -> bool {
        let d = &mut self.direction[agent.index()];
        *d = d.turn_left();
        true
    }

    /// Rotate 90° clockwise.  Always succeeds.
    pub fn turn_right(&mut self, agent: AgentId) -> bool {
        let d = &mut self.direction[agent.index()];
        *d = d.turn_right();
        true
    }

    /// Teleport to `goal`.
    ///
    /// The goal must be in bounds, empty and free of other ladybugs.  The new
    /// facing follows the dominant axis of the displacement, ties going to
    /// the horizontal axis; a zero displacement keeps the facing.
    pub fn fly(&mut self, agent: AgentId, grid: &Grid, goal: Position) -> bool {
        if !grid.is_empty(goal) || self.occupied_by_other(agent, goal) {
            return false;
        }
        let from = self.position(agent);
        if let Some(d) = Direction::of_displacement(goal.column - from.column, goal.row - from.row) {
            self.direction[agent.index()] = d;
        }
        self.position[agent.index()] = goal;
        true
    }

    // ── Leaves ────────────────────────────────────────────────────────────

    /// Drop a leaf on the empty cell ahead.
    pub fn place_leaf(&self, agent: AgentId, grid: &mut Grid) -> bool {
        self.swap_front(agent, grid, Cell::Empty, Cell::Leaf)
    }

    /// Pick up the leaf lying ahead.
    pub fn take_leaf(&self, agent: AgentId, grid: &mut Grid) -> bool {
        self.swap_front(agent, grid, Cell::Leaf, Cell::Empty)
    }

    fn swap_front(&self, agent: AgentId, grid: &mut Grid, expected: Cell, replacement: Cell) -> bool {
        let front = self.front(agent);
        if grid.cell(front) != Some(expected) {
            return false;
        }
        grid.set_cell(front, replacement);
        true
    }

    // ── Queries ───────────────────────────────────────────────────────────

    /// Contents of the cell ahead, or `None` past the grid edge.
    #[inline]
    pub fn cell_in_front(&self, agent: AgentId, grid: &Grid) -> Option<Cell> {
        grid.cell(self.front(agent))
    }

    /// `true` if the ladybug stands on a border cell.
    #[inline]
    pub fn at_edge(&self, agent: AgentId, grid: &Grid) -> bool {
        grid.at_edge(self.position(agent))
    }
}
