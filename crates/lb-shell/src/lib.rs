//! `lb-shell`: interactive command shell for the ladybug simulator.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                    |
//! |-------------|-------------------------------------------------------------|
//! | [`command`] | `Command` and its line parser                               |
//! | [`shell`]   | `Shell` (read loop, command execution), `TurnPrinter`       |
//! | [`render`]  | Board, position and trace-line rendering                    |
//! | [`logging`] | `tracing-subscriber` setup                                  |
//! | [`error`]   | `ShellError`, `ShellResult<T>`                              |
//!
//! # Commands
//!
//! ```text
//! load board <path>                  print board
//! load trees <path>...               head <id>
//! list ladybugs                      reset tree <id>
//! next action                        jump to <id> <node>
//! print position <id>                add sibling <id> <existing> <node>
//! quit
//! ```

pub mod command;
pub mod error;
pub mod logging;
pub mod render;
pub mod shell;


pub use command::Command;
pub use error::{ShellError, ShellResult};
pub use shell::{Flow, Shell, TurnPrinter};
