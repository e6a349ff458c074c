//! Board coordinates.
//!
//! ## Layout
//!
//! Rows run 0..8 from the top of the board, columns 0..8 from the left.
//! Only dark squares, where `(row + col) % 2 == 1`, are ever occupied.
//!
//! ```text
//!      0 1 2 3 4 5 6 7
//!   0  . b . b . b . b     <- Black's back row (Red promotes here)
//!   1  b . b . b . b .
//!   2  . b . b . b . b
//!   3  . . . . . . . .
//!   4  . . . . . . . .
//!   5  r . r . r . r .
//!   6  . r . r . r . r
//!   7  r . r . r . r .     <- Red's back row (Black promotes here)
//! ```
//!
//! `Square` is always on the board. Untrusted coordinates go through
//! `Square::try_new`, which rejects anything off the board before it can be
//! used as an index.

use serde::{Deserialize, Serialize};

use super::error::{CheckersError, Result};

/// Width and height of the board.
pub const BOARD_SIZE: usize = 8;

/// A square on the 8x8 board.
///
/// Deserialization goes through [`Square::try_new`], so off-board
/// coordinates in JSON input are rejected rather than stored.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "RawSquare")]
pub struct Square {
    row: u8,
    col: u8,
}

impl Square {
    /// Create a square from known-good coordinates.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is 8 or more.
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        assert!(row < BOARD_SIZE && col < BOARD_SIZE, "Square must be on the board");
        Self {
            row: row as u8,
            col: col as u8,
        }
    }

    /// Create a square from untrusted coordinates.
    ///
    /// ```
    /// use rust_checkers::core::Square;
    ///
    /// assert!(Square::try_new(5, 0).is_ok());
    /// assert!(Square::try_new(4, -1).is_err());
    /// assert!(Square::try_new(8, 3).is_err());
    /// ```
    pub fn try_new(row: i64, col: i64) -> Result<Self> {
        if (0..BOARD_SIZE as i64).contains(&row) && (0..BOARD_SIZE as i64).contains(&col) {
            Ok(Self::new(row as usize, col as usize))
        } else {
            Err(CheckersError::OutOfBounds { row, col })
        }
    }

    /// Row index (0 is the top).
    #[must_use]
    pub const fn row(self) -> usize {
        self.row as usize
    }

    /// Column index (0 is the left).
    #[must_use]
    pub const fn col(self) -> usize {
        self.col as usize
    }

    /// Whether this is a playable (dark) square.
    #[must_use]
    pub const fn is_dark(self) -> bool {
        (self.row + self.col) % 2 == 1
    }

    /// The square `steps` squares away along `dir`, if it is on the board.
    #[must_use]
    pub fn offset(self, dir: Direction, steps: i8) -> Option<Self> {
        let (dr, dc) = dir.delta();
        let row = self.row as i64 + i64::from(dr * steps);
        let col = self.col as i64 + i64::from(dc * steps);
        Self::try_new(row, col).ok()
    }

    /// Iterate over all 64 squares in row-major order.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..BOARD_SIZE).flat_map(|row| (0..BOARD_SIZE).map(move |col| Square::new(row, col)))
    }

    /// Iterate over the 32 dark squares in row-major order.
    pub fn dark() -> impl Iterator<Item = Square> {
        Self::all().filter(|sq| sq.is_dark())
    }
}

/// Unchecked wire form of a square.
#[derive(Deserialize)]
struct RawSquare {
    row: i64,
    col: i64,
}

impl TryFrom<RawSquare> for Square {
    type Error = CheckersError;

    fn try_from(raw: RawSquare) -> Result<Self> {
        Self::try_new(raw.row, raw.col)
    }
}

impl std::fmt::Display for Square {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{},{}", self.row, self.col)
    }
}

/// A diagonal direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// Toward row 0, column 0.
    UpLeft,
    /// Toward row 0, column 7.
    UpRight,
    /// Toward row 7, column 0.
    DownLeft,
    /// Toward row 7, column 7.
    DownRight,
}

impl Direction {
    /// All four diagonals.
    pub const ALL: [Direction; 4] = [
        Direction::UpLeft,
        Direction::UpRight,
        Direction::DownLeft,
        Direction::DownRight,
    ];

    /// The two diagonals toward row 0.
    pub const UP: [Direction; 2] = [Direction::UpLeft, Direction::UpRight];

    /// The two diagonals toward row 7.
    pub const DOWN: [Direction; 2] = [Direction::DownLeft, Direction::DownRight];

    /// (row, col) delta of one step.
    #[must_use]
    pub const fn delta(self) -> (i8, i8) {
        match self {
            Direction::UpLeft => (-1, -1),
            Direction::UpRight => (-1, 1),
            Direction::DownLeft => (1, -1),
            Direction::DownRight => (1, 1),
        }
    }
}
