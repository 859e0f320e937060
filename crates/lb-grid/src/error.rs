//! Grid-subsystem error type.

use thiserror::Error;

/// Errors produced while building a grid or reading a board.
///
/// Row and column numbers are 1-based, as shown to the user.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GridError {
    #[error("board has no cells")]
    Empty,

    #[error("invalid cell symbol '{symbol}' at row {row}, column {column}")]
    UnknownSymbol { symbol: char, row: usize, column: usize },

    #[error("row {row} has {got} cells, expected {expected}")]
    RaggedRow { row: usize, expected: usize, got: usize },

    #[error("no ladybug on board")]
    NoLadybugs,
}

pub type GridResult<T> = Result<T, GridError>;
