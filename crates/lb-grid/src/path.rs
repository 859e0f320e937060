//! Connectivity queries over empty cells.
//!
//! Ladybugs only ask *whether* two cells are connected, never for the route
//! itself, so this is a plain breadth-first search with no predecessor
//! tracking.  Neighbor expansion follows [`Grid::neighbors`] order, which
//! makes the search order fully deterministic.

use std::collections::VecDeque;

use rustc_hash::FxHashSet;

use lb_core::Position;

use crate::{Cell, Grid};

impl Grid {
    /// `true` if `goal` is reachable from `start` through orthogonally
    /// adjacent empty cells.
    ///
    /// Both endpoints must be in bounds and empty; otherwise the answer is
    /// `false` regardless of connectivity.  `start == goal` is `true` without
    /// searching.
    pub fn exists_path(&self, start: Position, goal: Position) -> bool {
        if !self.is_empty(start) || !self.is_empty(goal) {
            return false;
        }
        if start == goal {
            return true;
        }

        let mut visited = FxHashSet::default();
        let mut queue   = VecDeque::new();
        visited.insert(start);
        queue.push_back(start);

        while let Some(current) = queue.pop_front() {
            for neighbor in self.neighbors(current) {
                if neighbor == goal {
                    return true;
                }
                if self.cell_at(neighbor) == Cell::Empty && visited.insert(neighbor) {
                    queue.push_back(neighbor);
                }
            }
        }
        false
    }
}
