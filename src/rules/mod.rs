//! Checkers rules.
//!
//! - `movegen`: single-piece move generation and the selection policy
//! - `apply`: move application, promotion, multi-jump continuation
//! - `terminal`: win detection
//! - `engine`: the `RulesEngine` trait tying them together
//!
//! Everything here is a function of an explicit `GameState` and
//! `RulesConfig`; nothing keeps state between calls.

pub mod apply;
pub mod engine;
pub mod movegen;
pub mod terminal;

pub use apply::{apply_move, MoveOutcome, Transition};
pub use engine::{GameResult, RulesEngine, WinReason};
pub use movegen::{
    capture_moves, color_has_capture, color_has_move, color_moves, legal_moves, piece_moves,
};
pub use terminal::check_terminal;
