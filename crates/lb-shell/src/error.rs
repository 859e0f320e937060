use std::io;

use lb_sim::GameError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ShellError {
    #[error("unknown command '{0}'")]
    UnknownCommand(String),

    #[error("usage: {0}")]
    Usage(&'static str),

    #[error("'{0}' is not a valid ladybug id")]
    InvalidLadybug(String),

    #[error("could not read '{path}': {source}")]
    Read { path: String, source: io::Error },

    /// Writing to the shell's own output failed.  Not reported to the user.
    #[error("output failed: {0}")]
    Output(#[from] io::Error),

    #[error(transparent)]
    Game(#[from] GameError),
}

pub type ShellResult<T> = Result<T, ShellError>;
