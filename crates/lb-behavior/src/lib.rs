//! `lb-behavior`: behavior trees for ladybugs.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                         |
//! |--------------|------------------------------------------------------------------|
//! | [`node`]     | `NodeKind`, `ActionKind`, `ConditionKind`, `NodeStatus`, `Node`  |
//! | [`leaf`]     | What actions do and what conditions check                        |
//! | [`tree`]     | `BehaviorTree` (tick engine, head, jump, reset), `TreeBuilder`   |
//! | [`trace`]    | `Trace`, `TraceEntry`, `TraceEvent`                              |
//! | [`parser`]   | `parse_trees`, `parse_single_node`                               |
//! | [`notation`] | `BehaviorTree::to_notation`                                      |
//! | [`error`]    | `BehaviorError`, `TreeParseError`                                |
//!
//! # Design notes
//!
//! A tree is an arena: nodes live in one `Vec`, refer to each other by
//! [`NodeIdx`](lb_core::NodeIdx), and are looked up by string id through an
//! index the tree keeps current.  Trees never hold references into the grid
//! or the ladybug store; both are borrowed only for the duration of
//! [`BehaviorTree::tick`].
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                       |
//! |---------|--------------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on kinds and statuses.     |

mod context;
pub mod error;
pub mod leaf;
pub mod node;
pub mod notation;
pub mod parser;
pub mod trace;
pub mod tree;

#[cfg(test)]
mod tests;

pub use error::{BehaviorError, BehaviorResult, ParseResult, TreeParseError};
pub use node::{ActionKind, ConditionKind, Node, NodeKind, NodeSpec, NodeStatus};
pub use parser::{parse_single_node, parse_trees};
pub use trace::{Trace, TraceEntry, TraceEvent};
pub use tree::{BehaviorTree, TreeBuilder};
