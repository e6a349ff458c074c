//! # rust-checkers
//!
//! A two-player checkers (draughts) rules engine on an 8x8 board, driven by
//! square clicks from an external presentation layer.
//!
//! ## Design Principles
//!
//! 1. **Explicit State**: the whole game lives in one `GameState` value owned
//!    by a `GameController`. Rules are functions of that state.
//!
//! 2. **Silent Rejection**: bad input (wrong piece, off-board click, move not
//!    on offer) is a no-op for the presentation layer. Strict `try_*` calls
//!    report the reason as a `CheckersError`.
//!
//! 3. **Configuration Over Convention**: forced capture and the blocked-side
//!    loss rule are `RulesConfig` switches, off by default.
//!
//! ## Modules
//!
//! - `core`: colors, squares, pieces, board, moves, state, config, errors
//! - `rules`: move generation, move application, terminal detection,
//!   the `RulesEngine` trait
//! - `games`: the standard `Checkers` rules and its builder
//! - `session`: `GameController` and the `UpdatedState` view
//!
//! ## Example
//!
//! ```
//! use rust_checkers::session::GameController;
//!
//! let mut game = GameController::standard();
//!
//! let moves = game.request_moves(5, 0);
//! assert_eq!(moves.len(), 1);
//!
//! let view = game.choose_move(&moves[0]);
//! assert_eq!(view.status, "Black's turn");
//! ```

pub mod core;
pub mod games;
pub mod rules;
pub mod session;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::{
    Board, CheckersError, Color, ColorMap, Direction, GameState, Move, MoveRecord, Piece, Rank,
    RulesConfig, Square, TurnPhase, BOARD_SIZE,
};

pub use crate::rules::{GameResult, MoveOutcome, RulesEngine, Transition, WinReason};

pub use crate::games::checkers::{Checkers, CheckersBuilder};

pub use crate::session::{GameController, UpdatedState};
