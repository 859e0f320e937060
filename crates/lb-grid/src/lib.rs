//! `lb-grid`: the board ladybugs walk on.
//!
//! # Crate layout
//!
//! | Module     | Contents                                                  |
//! |------------|-----------------------------------------------------------|
//! | [`grid`]   | `Cell`, `Grid` (bounds, occupancy, neighbors)             |
//! | [`path`]   | `Grid::exists_path` breadth-first connectivity query      |
//! | [`loader`] | `parse_board` text loader, `Spawn`                        |
//! | [`error`]  | `GridError`, `GridResult<T>`                              |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                       |
//! |---------|--------------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on public value types.     |

pub mod error;
pub mod grid;
pub mod loader;
pub mod path;


pub use error::{GridError, GridResult};
pub use grid::{Cell, Grid};
pub use loader::{Spawn, parse_board};
