//! Error type for rejected input.
//!
//! None of these are fatal. The session layer turns every one of them into a
//! no-op, so they only reach callers that use the strict `try_*` entry points.

use thiserror::Error;

use super::color::Color;
use super::square::Square;

/// Why an operation was refused.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum CheckersError {
    #[error("({row}, {col}) is off the board")]
    OutOfBounds { row: i64, col: i64 },

    #[error("{0} is a light square and can never hold a piece")]
    LightSquare(Square),

    #[error("no piece at {0}")]
    EmptySquare(Square),

    #[error("piece at {square} belongs to {owner}, but it is {to_move}'s turn")]
    NotYourPiece {
        square: Square,
        owner: Color,
        to_move: Color,
    },

    #[error("no legal move from {from} to {to}")]
    IllegalMove { from: Square, to: Square },

    #[error("the piece at {0} must continue capturing")]
    CaptureInProgress(Square),

    #[error("the game is over")]
    GameOver,

    #[error("bad board diagram: {0}")]
    BadDiagram(String),
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, CheckersError>;
