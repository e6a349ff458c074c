//! What the presentation layer renders after each input.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::core::{Board, Color, GameState, Square};
use crate::rules::GameResult;

/// Snapshot handed to the presentation layer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdatedState {
    /// Board to render.
    pub board: Board,

    /// Side to move (unchanged while a capture chain continues).
    pub current_player: Color,

    /// Selected square, drawn with a selection marker.
    pub selected: Option<Square>,

    /// Destination squares to highlight.
    pub highlighted: FxHashSet<Square>,

    /// `"<Color>'s turn"` or `"<Color> Wins!"`.
    pub status: String,

    /// No further input is accepted.
    pub input_disabled: bool,

    pub result: Option<GameResult>,
}

impl UpdatedState {
    /// Build the snapshot for a state.
    #[must_use]
    pub fn from_state(state: &GameState) -> Self {
        Self {
            board: state.board,
            current_player: state.current_player,
            selected: state.selected,
            highlighted: state.legal_moves.iter().map(|mv| mv.to).collect(),
            status: status_text(state),
            input_disabled: state.is_terminal(),
            result: state.result,
        }
    }

    #[must_use]
    pub fn is_highlighted(&self, sq: Square) -> bool {
        self.highlighted.contains(&sq)
    }
}

/// Human-readable status line.
///
/// ```
/// use rust_checkers::core::GameState;
/// use rust_checkers::session::status_text;
///
/// assert_eq!(status_text(&GameState::standard()), "Red's turn");
/// ```
#[must_use]
pub fn status_text(state: &GameState) -> String {
    match state.result {
        Some(result) => format!("{} Wins!", result.winner),
        None => format!("{}'s turn", state.current_player),
    }
}
