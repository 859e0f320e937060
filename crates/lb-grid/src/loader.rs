//! Board text loader.
//!
//! # Format
//!
//! One line per grid row, one character per cell:
//!
//! | Symbol            | Meaning                                   |
//! |-------------------|-------------------------------------------|
//! | `.`               | empty                                     |
//! | `#`               | tree (obstacle)                           |
//! | `*`               | leaf                                      |
//! | `o`               | mushroom                                  |
//! | `^` `>` `v` `<`   | ladybug facing up/right/down/left         |
//!
//! A ladybug glyph stands on an empty cell.  Ladybugs are numbered in
//! reading order (row by row, left to right), starting at 1.
//!
//! ```text
//! ^..
//! .#.
//! ```

use lb_core::{Direction, Position};

use crate::{Cell, Grid, GridError, GridResult};

/// A ladybug found while reading a board: where it starts and which way it
/// faces.  The i-th spawn becomes `AgentId(i + 1)`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Spawn {
    pub position:  Position,
    pub direction: Direction,
}

/// Parse board lines into a [`Grid`] and the ladybugs standing on it.
///
/// Fails on an unknown symbol, rows of unequal length, no rows at all, or a
/// board without any ladybug.
pub fn parse_board<S: AsRef<str>>(lines: &[S]) -> GridResult<(Grid, Vec<Spawn>)> {
    let mut rows:   Vec<Vec<Cell>> = Vec::with_capacity(lines.len());
    let mut spawns: Vec<Spawn>     = Vec::new();

    for (row, line) in lines.iter().enumerate() {
        let line = line.as_ref().trim_end_matches('\r');
        let mut cells = Vec::with_capacity(line.len());
        for (column, symbol) in line.chars().enumerate() {
            if let Some(direction) = Direction::from_symbol(symbol) {
                let position = Position::new(column as i32, row as i32);
                spawns.push(Spawn { position, direction });
                cells.push(Cell::Empty);
                continue;
            }
            match Cell::from_symbol(symbol) {
                Some(cell) => cells.push(cell),
                None => {
                    return Err(GridError::UnknownSymbol { symbol, row: row + 1, column: column + 1 });
                }
            }
        }
        rows.push(cells);
    }

    let grid = Grid::from_rows(rows)?;
    if spawns.is_empty() {
        return Err(GridError::NoLadybugs);
    }
    Ok((grid, spawns))
}
