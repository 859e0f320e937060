//! `lb-sim`: the game facade for the ladybug behavior-tree simulator.
//!
//! # Turn loop
//!
//! ```text
//! next_action():
//!   for agent in active ladybugs, ascending id:
//!     ① Tick:   walk the agent's tree until one action runs (or none can).
//!     ② Report: observer.on_trace(trace)
//!     ③ Render: observer.on_agent_done(agent, grid, ladybugs)
//! ```
//!
//! Ladybugs act one after another, so a later ladybug already sees the
//! board as the earlier ones left it.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use lb_sim::{Game, NoopObserver};
//!
//! let mut game = Game::new();
//! game.load_board(&["^..", ".#."])?;
//! game.load_trees(&["flowchart TD", "A[move]"])?;
//! let trace = game.next_action(&mut NoopObserver)?;
//! ```

pub mod error;
pub mod game;
pub mod observer;


pub use error::{GameError, GameResult};
pub use game::Game;
pub use observer::{NoopObserver, TurnObserver};
