//! Move representation: source, destination, captured squares.
//!
//! A `Move` is one segment of a turn. A simple step captures nothing; a jump
//! captures the one piece it hops over. Multi-jumps are played as a chain of
//! single-jump segments, each applied separately while the engine holds the
//! turn in the continuing-capture state.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::color::Color;
use super::square::Square;

/// A candidate transition of one piece.
///
/// ```
/// use rust_checkers::core::{Move, Square};
///
/// let step = Move::step(Square::new(5, 0), Square::new(4, 1));
/// assert!(!step.is_capture());
/// assert_eq!(step.to_string(), "5,0-4,1");
///
/// let jump = Move::jump(Square::new(2, 3), Square::new(4, 5), Square::new(3, 4));
/// assert!(jump.is_capture());
/// assert_eq!(jump.to_string(), "2,3x4,5");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// Square the piece starts on.
    pub from: Square,

    /// Square the piece lands on.
    pub to: Square,

    /// Squares of the pieces removed by this move.
    /// SmallVec keeps the common 0-1 capture case off the heap.
    pub captures: SmallVec<[Square; 2]>,
}

impl Move {
    /// A non-capturing step.
    #[must_use]
    pub fn step(from: Square, to: Square) -> Self {
        Self {
            from,
            to,
            captures: SmallVec::new(),
        }
    }

    /// A single jump over `captured`.
    #[must_use]
    pub fn jump(from: Square, to: Square, captured: Square) -> Self {
        let mut captures = SmallVec::new();
        captures.push(captured);
        Self { from, to, captures }
    }

    /// Whether this move removes at least one piece.
    #[must_use]
    pub fn is_capture(&self) -> bool {
        !self.captures.is_empty()
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let sep = if self.is_capture() { 'x' } else { '-' };
        write!(f, "{}{}{}", self.from, sep, self.to)
    }
}

/// An applied move with metadata for the in-memory history.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    /// The side that moved.
    pub color: Color,

    /// The move applied.
    pub mv: Move,

    /// Turn number when the move was applied.
    pub turn: u32,

    /// Sequence number within the turn (multi-jump segments share a turn).
    pub sequence: u32,

    /// Whether the moving man was crowned by this move.
    pub promoted: bool,
}
