//! `lb-core`: foundational types for the ladybug behavior-tree simulator.
//!
//! This crate is a dependency of every other `lb-*` crate.  It has no `lb-*`
//! dependencies and no mandatory external ones (only optional `serde`).
//!
//! # What lives here
//!
//! | Module  | Contents                                      |
//! |---------|-----------------------------------------------|
//! | [`ids`] | `AgentId` (1-based), `NodeIdx` (arena handle) |
//! | [`pos`] | `Position`, `Direction`                       |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                              |
//! |---------|-----------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types. |

pub mod ids;
pub mod pos;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use ids::{AgentId, NodeIdx};
pub use pos::{Direction, Position};
