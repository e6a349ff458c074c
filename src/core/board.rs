//! The 8x8 board.
//!
//! ## Representation
//!
//! A plain `[[Option<Piece>; 8]; 8]` grid indexed by `Square`. Cloning is a
//! 64-byte copy, so snapshots for the presentation layer are cheap.
//!
//! ## Diagrams
//!
//! Boards can be written and read as eight lines of eight characters:
//! `.` for an empty square, `r`/`b` for men, `R`/`B` for kings. Whitespace
//! inside a line is ignored, so diagrams may be spaced out for readability.
//!
//! ```
//! use rust_checkers::core::{Board, Color, Piece, Square};
//!
//! let board = Board::from_diagram(
//!     "
//!     . . . . . . . .
//!     . . . . . . . .
//!     . . . b . . . .
//!     . . . . r . . .
//!     . . . . . . . .
//!     . . . . . . . .
//!     . . . . . . . .
//!     . . . . . . . .
//!     ",
//! )
//! .unwrap();
//!
//! assert_eq!(board.get(Square::new(2, 3)), Some(Piece::man(Color::Black)));
//! assert_eq!(board.counts()[Color::Red], 1);
//! ```

use serde::{Deserialize, Serialize};

use super::color::{Color, ColorMap};
use super::error::{CheckersError, Result};
use super::piece::Piece;
use super::square::{Square, BOARD_SIZE};

/// Rows each side fills in the starting position.
const STARTING_ROWS: usize = 3;

/// An 8x8 checkers board.
///
/// Deserialization places every piece through [`Board::place`], so JSON
/// input with a piece on a light square is rejected.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawBoard")]
pub struct Board {
    cells: [[Option<Piece>; BOARD_SIZE]; BOARD_SIZE],
}

/// Unchecked wire form of a board.
#[derive(Deserialize)]
struct RawBoard {
    cells: [[Option<Piece>; BOARD_SIZE]; BOARD_SIZE],
}

impl TryFrom<RawBoard> for Board {
    type Error = CheckersError;

    fn try_from(raw: RawBoard) -> Result<Self> {
        let mut board = Self::empty();
        for sq in Square::all() {
            if let Some(piece) = raw.cells[sq.row()][sq.col()] {
                board.place(sq, piece)?;
            }
        }
        Ok(board)
    }
}

impl Board {
    /// A board with no pieces.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// The standard starting position: black men on the dark squares of
    /// rows 0-2, red men on the dark squares of rows 5-7.
    #[must_use]
    pub fn standard() -> Self {
        let mut board = Self::empty();
        for sq in Square::dark() {
            if sq.row() < STARTING_ROWS {
                board.cells[sq.row()][sq.col()] = Some(Piece::man(Color::Black));
            } else if sq.row() >= BOARD_SIZE - STARTING_ROWS {
                board.cells[sq.row()][sq.col()] = Some(Piece::man(Color::Red));
            }
        }
        board
    }

    /// Parse a diagram (see module docs).
    pub fn from_diagram(diagram: &str) -> Result<Self> {
        let rows: Vec<Vec<char>> = diagram
            .lines()
            .map(|line| line.chars().filter(|c| !c.is_whitespace()).collect::<Vec<_>>())
            .filter(|row| !row.is_empty())
            .collect();

        if rows.len() != BOARD_SIZE {
            return Err(CheckersError::BadDiagram(format!(
                "expected {} rows, found {}",
                BOARD_SIZE,
                rows.len()
            )));
        }

        let mut board = Self::empty();
        for (row, chars) in rows.iter().enumerate() {
            if chars.len() != BOARD_SIZE {
                return Err(CheckersError::BadDiagram(format!(
                    "row {} has {} squares",
                    row,
                    chars.len()
                )));
            }
            for (col, &c) in chars.iter().enumerate() {
                if c == '.' {
                    continue;
                }
                let piece = Piece::from_char(c).ok_or_else(|| {
                    CheckersError::BadDiagram(format!("unknown piece '{}' at {},{}", c, row, col))
                })?;
                board.place(Square::new(row, col), piece)?;
            }
        }

        Ok(board)
    }

    /// The piece on a square, if any.
    #[must_use]
    pub fn get(&self, sq: Square) -> Option<Piece> {
        self.cells[sq.row()][sq.col()]
    }

    /// Whether a square is empty.
    #[must_use]
    pub fn is_empty(&self, sq: Square) -> bool {
        self.get(sq).is_none()
    }

    /// Put a piece on a dark square, replacing whatever was there.
    pub fn place(&mut self, sq: Square, piece: Piece) -> Result<()> {
        if !sq.is_dark() {
            return Err(CheckersError::LightSquare(sq));
        }
        self.cells[sq.row()][sq.col()] = Some(piece);
        Ok(())
    }

    /// Remove and return the piece on a square.
    pub fn take(&mut self, sq: Square) -> Option<Piece> {
        self.cells[sq.row()][sq.col()].take()
    }

    /// Iterate over occupied squares in row-major order.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(move |sq| self.get(sq).map(|p| (sq, p)))
    }

    /// Iterate over the squares holding pieces of one color.
    pub fn squares_of(&self, color: Color) -> impl Iterator<Item = Square> + '_ {
        self.pieces()
            .filter(move |(_, p)| p.color == color)
            .map(|(sq, _)| sq)
    }

    /// Number of pieces per color.
    #[must_use]
    pub fn counts(&self) -> ColorMap<usize> {
        let mut counts = ColorMap::with_value(0);
        for (_, piece) in self.pieces() {
            counts[piece.color] += 1;
        }
        counts
    }

    /// Whether a color has at least one piece left.
    #[must_use]
    pub fn has_pieces(&self, color: Color) -> bool {
        self.pieces().any(|(_, p)| p.color == color)
    }

    /// Rows of diagram characters, for front ends that render cell by cell.
    #[must_use]
    pub fn to_rows(&self) -> Vec<String> {
        self.cells
            .iter()
            .map(|row| {
                row.iter()
                    .map(|cell| cell.map_or('.', Piece::to_char))
                    .collect()
            })
            .collect()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in self.to_rows() {
            writeln!(f, "{}", row)?;
        }
        Ok(())
    }
}
