//! Core types: colors, squares, pieces, the board, moves, state, config, errors.
//!
//! Nothing in here knows the movement rules; those live in `rules`.

pub mod board;
pub mod color;
pub mod config;
pub mod error;
pub mod moves;
pub mod piece;
pub mod square;
pub mod state;

pub use board::Board;
pub use color::{Color, ColorMap};
pub use config::RulesConfig;
pub use error::{CheckersError, Result};
pub use moves::{Move, MoveRecord};
pub use piece::{Piece, Rank};
pub use square::{Direction, Square, BOARD_SIZE};
pub use state::{GameState, TurnPhase};
