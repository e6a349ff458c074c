//! Rules engine trait for game implementations.
//!
//! Implementations define:
//! - What moves are legal for a selected piece
//! - How moves modify state
//! - Win conditions

use serde::{Deserialize, Serialize};

use crate::core::{Board, Color, GameState, Move, Result, RulesConfig, Square};

use super::apply::MoveOutcome;

/// Why the game ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WinReason {
    /// The loser has no pieces on the board.
    NoPiecesLeft,
    /// The loser is to move and has no legal move.
    NoLegalMoves,
}

/// Result of a completed game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameResult {
    pub winner: Color,
    pub reason: WinReason,
}

impl GameResult {
    /// Check if a side won.
    #[must_use]
    pub fn is_winner(&self, color: Color) -> bool {
        self.winner == color
    }

    /// The losing side.
    #[must_use]
    pub fn loser(&self) -> Color {
        self.winner.opponent()
    }
}

/// Rules engine trait.
///
/// ## Implementation Notes
///
/// - `piece_moves`: one piece only, no turn rules; empty for an empty square
/// - `legal_moves`: the moves offered when the side to move selects `from`
/// - `apply_move`: must reject anything `legal_moves` would not offer
/// - `is_terminal`: return None if the game continues
pub trait RulesEngine {
    /// Get the rules configuration.
    fn config(&self) -> &RulesConfig;

    /// Moves of the piece on `from`, ignoring whose turn it is.
    fn piece_moves(&self, board: &Board, from: Square) -> Vec<Move>;

    /// Moves offered for selecting `from` in `state`.
    fn legal_moves(&self, state: &GameState, from: Square) -> Result<Vec<Move>>;

    /// Apply a move to the game state.
    fn apply_move(&self, state: &mut GameState, mv: &Move) -> Result<MoveOutcome>;

    /// Check if the game is over.
    fn is_terminal(&self, state: &GameState) -> Option<GameResult>;

    // === Convenience Methods ===

    /// Every move the side to move could make right now.
    ///
    /// During a continuing capture this is just the moves offered for the
    /// capturing piece.
    fn all_legal_moves(&self, state: &GameState) -> Vec<Move> {
        if state.is_terminal() {
            return Vec::new();
        }
        if state.must_continue_capture {
            return state.legal_moves.clone();
        }

        state
            .board
            .squares_of(state.current_player)
            .filter_map(|sq| self.legal_moves(state, sq).ok())
            .flatten()
            .collect()
    }
}
