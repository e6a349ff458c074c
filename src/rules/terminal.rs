//! Terminal-state detection.

use crate::core::{Board, Color, RulesConfig};

use super::engine::{GameResult, WinReason};
use super::movegen::color_has_move;

/// Check whether the game is over with `to_move` about to play.
///
/// A side with no pieces left loses. With `blocked_player_loses`, a side to
/// move that has pieces but no legal move loses as well.
pub fn check_terminal(board: &Board, to_move: Color, config: &RulesConfig) -> Option<GameResult> {
    let counts = board.counts();

    if counts[Color::Red] == 0 || counts[Color::Black] == 0 {
        let winner = if counts[Color::Red] > 0 {
            Color::Red
        } else {
            Color::Black
        };
        return Some(GameResult {
            winner,
            reason: WinReason::NoPiecesLeft,
        });
    }

    if config.blocked_player_loses && !color_has_move(board, to_move) {
        return Some(GameResult {
            winner: to_move.opponent(),
            reason: WinReason::NoLegalMoves,
        });
    }

    None
}
