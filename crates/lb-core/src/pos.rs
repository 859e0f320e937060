//! Grid coordinates and facing directions.
//!
//! Internally every coordinate is 0-based and column-first.  The 1-based
//! display form used in tree files and shell output is produced only by
//! [`Position::from_display`] / [`Position::to_display`].

use std::fmt;

/// A cell coordinate.  Value type; may lie outside any particular grid.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub column: i32,
    pub row:    i32,
}

impl Position {
    #[inline]
    pub const fn new(column: i32, row: i32) -> Self {
        Self { column, row }
    }

    /// The neighboring coordinate one step in `direction`.
    #[inline]
    pub fn step(self, direction: Direction) -> Position {
        let (d_col, d_row) = direction.delta();
        Position::new(self.column + d_col, self.row + d_row)
    }

    /// Convert 1-based display coordinates `(x, y)` into an internal position.
    #[inline]
    pub fn from_display(x: i32, y: i32) -> Position {
        Position::new(x - 1, y - 1)
    }

    /// 1-based display coordinates `(x, y)`.
    #[inline]
    pub fn to_display(self) -> (i32, i32) {
        (self.column + 1, self.row + 1)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.column, self.row)
    }
}

// ── Direction ─────────────────────────────────────────────────────────────────

/// One of the four facings.  Turning is the cyclic group of order 4.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    Up,
    Right,
    Down,
    Left,
}

impl Direction {
    /// Clockwise from `Up`.  Neighbor enumeration follows this order.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Right,
        Direction::Down,
        Direction::Left,
    ];

    /// Unit displacement `(Δcolumn, Δrow)`; rows grow downwards.
    #[inline]
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up    => (0, -1),
            Direction::Right => (1, 0),
            Direction::Down  => (0, 1),
            Direction::Left  => (-1, 0),
        }
    }

    #[inline]
    pub fn turn_left(self) -> Direction {
        match self {
            Direction::Up    => Direction::Left,
            Direction::Left  => Direction::Down,
            Direction::Down  => Direction::Right,
            Direction::Right => Direction::Up,
        }
    }

    #[inline]
    pub fn turn_right(self) -> Direction {
        match self {
            Direction::Up    => Direction::Right,
            Direction::Right => Direction::Down,
            Direction::Down  => Direction::Left,
            Direction::Left  => Direction::Up,
        }
    }

    /// Board glyph for a ladybug facing this way.
    pub fn symbol(self) -> char {
        match self {
            Direction::Up    => '^',
            Direction::Right => '>',
            Direction::Down  => 'v',
            Direction::Left  => '<',
        }
    }

    pub fn from_symbol(symbol: char) -> Option<Direction> {
        Direction::ALL.into_iter().find(|d| d.symbol() == symbol)
    }

    /// Facing after a jump by `(d_col, d_row)`.
    ///
    /// The axis with the larger magnitude wins, ties go to the horizontal
    /// axis.  `None` for a zero displacement.
    pub fn of_displacement(d_col: i32, d_row: i32) -> Option<Direction> {
        if d_col == 0 && d_row == 0 {
            return None;
        }
        if d_col.abs() >= d_row.abs() {
            Some(if d_col > 0 { Direction::Right } else { Direction::Left })
        } else {
            Some(if d_row < 0 { Direction::Up } else { Direction::Down })
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Direction::Up    => "up",
            Direction::Right => "right",
            Direction::Down  => "down",
            Direction::Left  => "left",
        };
        f.write_str(name)
    }
}
