//! Pieces: a color and a rank.

use serde::{Deserialize, Serialize};

use super::color::Color;
use super::square::Direction;

/// Rank of a piece.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Rank {
    /// Moves and captures diagonally forward only.
    Man,
    /// Moves and captures diagonally in all four directions.
    King,
}

/// A piece on the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piece {
    pub color: Color,
    pub rank: Rank,
}

impl Piece {
    /// A man of the given color.
    #[must_use]
    pub const fn man(color: Color) -> Self {
        Self {
            color,
            rank: Rank::Man,
        }
    }

    /// A king of the given color.
    #[must_use]
    pub const fn king(color: Color) -> Self {
        Self {
            color,
            rank: Rank::King,
        }
    }

    #[must_use]
    pub const fn is_king(self) -> bool {
        matches!(self.rank, Rank::King)
    }

    /// The same piece as a king.
    #[must_use]
    pub const fn crowned(self) -> Self {
        Self::king(self.color)
    }

    /// Directions this piece may move and capture in.
    #[must_use]
    pub fn directions(self) -> &'static [Direction] {
        match (self.rank, self.color) {
            (Rank::King, _) => &Direction::ALL,
            (Rank::Man, Color::Red) => &Direction::UP,
            (Rank::Man, Color::Black) => &Direction::DOWN,
        }
    }

    /// Diagram character: `r`/`b` for men, `R`/`B` for kings.
    #[must_use]
    pub const fn to_char(self) -> char {
        match (self.color, self.rank) {
            (Color::Red, Rank::Man) => 'r',
            (Color::Red, Rank::King) => 'R',
            (Color::Black, Rank::Man) => 'b',
            (Color::Black, Rank::King) => 'B',
        }
    }

    /// Inverse of [`Piece::to_char`].
    #[must_use]
    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            'r' => Some(Self::man(Color::Red)),
            'R' => Some(Self::king(Color::Red)),
            'b' => Some(Self::man(Color::Black)),
            'B' => Some(Self::king(Color::Black)),
            _ => None,
        }
    }
}
