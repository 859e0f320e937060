//! Fluent builder for constructing a `LadybugStore`.
//!
//! # Usage
//!
//! ```rust
//! use lb_agent::LadybugStoreBuilder;
//! use lb_core::{Direction, Position};
//!
//! let store = LadybugStoreBuilder::new()
//!     .spawn(Position::new(0, 0), Direction::Up)
//!     .spawn(Position::new(2, 1), Direction::Left)
//!     .build();
//!
//! assert_eq!(store.count, 2);
//! assert!(!store.active[0]);
//! ```
//!
//! A board loader produces spawns in reading order; use
//! [`LadybugStoreBuilder::from_spawns`] to keep ids aligned with it.

use lb_core::{Direction, Position};
use lb_grid::Spawn;

use crate::LadybugStore;

/// Fluent builder for [`LadybugStore`].  Every ladybug starts inactive.
#[derive(Default)]
pub struct LadybugStoreBuilder {
    position:  Vec<Position>,
    direction: Vec<Direction>,
}

impl LadybugStoreBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the builder with the ladybugs found by the board loader.
    pub fn from_spawns(spawns: &[Spawn]) -> Self {
        spawns
            .iter()
            .fold(Self::new(), |b, s| b.spawn(s.position, s.direction))
    }

    /// Append one ladybug.  The n-th call yields `AgentId(n)`.
    pub fn spawn(mut self, position: Position, direction: Direction) -> Self {
        self.position.push(position);
        self.direction.push(direction);
        self
    }

    pub fn build(self) -> LadybugStore {
        LadybugStore::new(self.position, self.direction)
    }
}
