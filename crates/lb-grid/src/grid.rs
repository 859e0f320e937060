//! Cell kinds and the fixed-size grid they live in.
//!
//! # Data layout
//!
//! Cells are stored row-major in one flat `Vec`; the cell at
//! `(column, row)` lives at `row * columns + column`.  The shape is fixed at
//! construction; only the cell contents change afterwards (leaves placed or
//! taken, mushrooms pushed).

use std::fmt;

use lb_core::{Direction, Position};

use crate::{GridError, GridResult};

// ── Cell ──────────────────────────────────────────────────────────────────────

/// Contents of one grid cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Cell {
    #[default]
    Empty,
    /// Impassable obstacle.
    Tree,
    /// Marker a ladybug can place and take.
    Leaf,
    /// Pushable obstacle.
    Mushroom,
}

impl Cell {
    pub fn symbol(self) -> char {
        match self {
            Cell::Empty    => '.',
            Cell::Tree     => '#',
            Cell::Leaf     => '*',
            Cell::Mushroom => 'o',
        }
    }

    pub fn from_symbol(symbol: char) -> Option<Cell> {
        [Cell::Empty, Cell::Tree, Cell::Leaf, Cell::Mushroom]
            .into_iter()
            .find(|c| c.symbol() == symbol)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Cell::Empty    => "empty",
            Cell::Tree     => "tree",
            Cell::Leaf     => "leaf",
            Cell::Mushroom => "mushroom",
        };
        f.write_str(name)
    }
}

// ── Grid ──────────────────────────────────────────────────────────────────────

/// Rectangular matrix of [`Cell`]s.
///
/// `Clone` is a deep copy and doubles as the snapshot used before a
/// destructive reload.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    columns: usize,
    rows:    usize,
    cells:   Vec<Cell>,
}

impl Grid {
    /// Build a grid from rows of cells.  Every row must have the same length
    /// and there must be at least one non-empty row.
    pub fn from_rows(rows: Vec<Vec<Cell>>) -> GridResult<Grid> {
        let columns = rows.first().map(Vec::len).unwrap_or(0);
        if columns == 0 {
            return Err(GridError::Empty);
        }
        let row_count = rows.len();
        let mut cells = Vec::with_capacity(columns * row_count);
        for (row, line) in rows.into_iter().enumerate() {
            if line.len() != columns {
                return Err(GridError::RaggedRow { row: row + 1, expected: columns, got: line.len() });
            }
            cells.extend(line);
        }
        Ok(Grid { columns, rows: row_count, cells })
    }

    /// An all-empty grid of the given shape.
    pub fn empty(columns: usize, rows: usize) -> Grid {
        Grid { columns, rows, cells: vec![Cell::Empty; columns * rows] }
    }

    // ── Dimensions ────────────────────────────────────────────────────────

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    // ── Lookups ───────────────────────────────────────────────────────────

    #[inline]
    pub fn in_bounds(&self, pos: Position) -> bool {
        pos.column >= 0
            && pos.row >= 0
            && (pos.column as usize) < self.columns
            && (pos.row as usize) < self.rows
    }

    #[inline]
    fn offset(&self, pos: Position) -> usize {
        pos.row as usize * self.columns + pos.column as usize
    }

    /// Cell at `pos`, or `None` outside the grid.
    #[inline]
    pub fn cell(&self, pos: Position) -> Option<Cell> {
        self.in_bounds(pos).then(|| self.cells[self.offset(pos)])
    }

    /// Cell at `pos` without a bounds check of its own.
    ///
    /// Callers guard with [`in_bounds`](Self::in_bounds); debug builds assert it.
    #[inline]
    pub fn cell_at(&self, pos: Position) -> Cell {
        debug_assert!(self.in_bounds(pos), "cell_at out of bounds: {pos}");
        self.cells[self.offset(pos)]
    }

    /// Overwrite the cell at `pos`.  Same precondition as [`cell_at`](Self::cell_at).
    #[inline]
    pub fn set_cell(&mut self, pos: Position, cell: Cell) {
        debug_assert!(self.in_bounds(pos), "set_cell out of bounds: {pos}");
        let offset = self.offset(pos);
        self.cells[offset] = cell;
    }

    /// `true` if `pos` is inside the grid and holds [`Cell::Empty`].
    #[inline]
    pub fn is_empty(&self, pos: Position) -> bool {
        self.cell(pos) == Some(Cell::Empty)
    }

    /// In-bounds orthogonal neighbors of `pos`, in [`Direction::ALL`] order.
    ///
    /// Scans four candidates without allocating.
    pub fn neighbors(&self, pos: Position) -> impl Iterator<Item = Position> + '_ {
        Direction::ALL
            .into_iter()
            .map(move |d| pos.step(d))
            .filter(move |&p| self.in_bounds(p))
    }

    /// `true` if `pos` has fewer than four in-bounds neighbors.
    pub fn at_edge(&self, pos: Position) -> bool {
        self.neighbors(pos).count() < Direction::ALL.len()
    }

    /// Row-major iterator over `(position, cell)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (Position, Cell)> + '_ {
        self.cells.iter().enumerate().map(move |(i, &cell)| {
            let pos = Position::new((i % self.columns) as i32, (i / self.columns) as i32);
            (pos, cell)
        })
    }
}
