//! Game state.
//!
//! ## GameState
//!
//! Everything that changes during play:
//! - Board
//! - Side to move, turn number, sequence within the turn
//! - Current selection and the legal moves offered for it
//! - Continuing-capture flag
//! - Move history and final result
//!
//! There is no ambient state anywhere in the crate: the rules functions take
//! a `&mut GameState` and the session controller owns the only instance.
//!
//! Uses an `im` vector for the history so snapshots stay O(1) to clone.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::board::Board;
use super::color::Color;
use super::moves::{Move, MoveRecord};
use super::square::Square;
use crate::rules::GameResult;

/// Where the turn currently stands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurnPhase {
    /// Waiting for the side to move to pick a piece.
    Idle,
    /// A piece is selected and its moves are offered.
    Selected,
    /// The piece that just captured must keep jumping.
    ContinuingCapture,
    /// The game is over; no input is accepted.
    Terminal,
}

/// Full game state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    /// Piece positions.
    pub board: Board,

    /// Side to move.
    pub current_player: Color,

    /// Selected square, if any.
    pub selected: Option<Square>,

    /// Legal moves for the selected piece.
    pub legal_moves: Vec<Move>,

    /// The selected piece has just captured and must capture again.
    pub must_continue_capture: bool,

    /// Turn number (starts at 1, advances when the turn passes).
    pub turn_number: u32,

    /// Move sequence within the turn.
    pub action_sequence: u32,

    /// Applied moves, oldest first.
    pub history: Vector<MoveRecord>,

    /// Final result once the game has ended.
    pub result: Option<GameResult>,
}

impl GameState {
    /// Create a state for `board` with `first_player` to move.
    #[must_use]
    pub fn new(board: Board, first_player: Color) -> Self {
        Self {
            board,
            current_player: first_player,
            selected: None,
            legal_moves: Vec::new(),
            must_continue_capture: false,
            turn_number: 1,
            action_sequence: 0,
            history: Vector::new(),
            result: None,
        }
    }

    /// The standard starting position with Red to move.
    #[must_use]
    pub fn standard() -> Self {
        Self::new(Board::standard(), Color::Red)
    }

    /// Current phase of the turn state machine.
    #[must_use]
    pub fn phase(&self) -> TurnPhase {
        if self.result.is_some() {
            TurnPhase::Terminal
        } else if self.must_continue_capture {
            TurnPhase::ContinuingCapture
        } else if self.selected.is_some() {
            TurnPhase::Selected
        } else {
            TurnPhase::Idle
        }
    }

    #[must_use]
    pub fn is_terminal(&self) -> bool {
        self.result.is_some()
    }

    /// Select a square and offer `moves` for it.
    pub fn select(&mut self, sq: Square, moves: Vec<Move>) {
        self.selected = Some(sq);
        self.legal_moves = moves;
    }

    /// Drop the selection and its offered moves.
    pub fn clear_selection(&mut self) {
        self.selected = None;
        self.legal_moves.clear();
        self.must_continue_capture = false;
    }

    /// The offered move landing on `to`, if any.
    #[must_use]
    pub fn offered_move_to(&self, to: Square) -> Option<&Move> {
        self.legal_moves.iter().find(|mv| mv.to == to)
    }

    /// Pass the turn to the other side.
    pub fn switch_turn(&mut self) {
        self.clear_selection();
        self.current_player = self.current_player.opponent();
        self.turn_number += 1;
        self.action_sequence = 0;
    }

    /// Record an applied move in history.
    pub fn record_move(&mut self, mv: Move, promoted: bool) {
        let sequence = self.action_sequence;
        self.action_sequence += 1;
        self.history.push_back(MoveRecord {
            color: self.current_player,
            mv,
            turn: self.turn_number,
            sequence,
            promoted,
        });
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state() {
        let state = GameState::standard();

        assert_eq!(state.current_player, Color::Red);
        assert_eq!(state.turn_number, 1);
        assert_eq!(state.phase(), TurnPhase::Idle);
        assert!(state.legal_moves.is_empty());
        assert!(state.history.is_empty());
    }

    #[test]
    fn test_select_and_clear() {
        let mut state = GameState::standard();
        let mv = Move::step(Square::new(5, 0), Square::new(4, 1));

        state.select(Square::new(5, 0), vec![mv.clone()]);
        assert_eq!(state.phase(), TurnPhase::Selected);
        assert_eq!(state.offered_move_to(Square::new(4, 1)), Some(&mv));
        assert_eq!(state.offered_move_to(Square::new(4, 3)), None);

        state.clear_selection();
        assert_eq!(state.phase(), TurnPhase::Idle);
        assert!(state.legal_moves.is_empty());
    }

    #[test]
    fn test_switch_turn() {
        let mut state = GameState::standard();
        state.record_move(Move::step(Square::new(5, 0), Square::new(4, 1)), false);

        state.switch_turn();

        assert_eq!(state.current_player, Color::Black);
        assert_eq!(state.turn_number, 2);
        assert_eq!(state.action_sequence, 0);
    }

    #[test]
    fn test_record_move() {
        let mut state = GameState::standard();
        state.record_move(Move::step(Square::new(5, 0), Square::new(4, 1)), false);
        state.record_move(Move::step(Square::new(4, 1), Square::new(3, 2)), false);

        assert_eq!(state.history.len(), 2);
        assert_eq!(state.history[0].sequence, 0);
        assert_eq!(state.history[1].sequence, 1);
        assert_eq!(state.history[1].color, Color::Red);
        assert_eq!(state.history[1].turn, 1);
    }

    #[test]
    fn test_phase_continuing_capture() {
        let mut state = GameState::standard();
        state.select(Square::new(4, 1), Vec::new());
        state.must_continue_capture = true;

        assert_eq!(state.phase(), TurnPhase::ContinuingCapture);
    }

    #[test]
    fn test_serialization() {
        let mut state = GameState::standard();
        state.record_move(Move::step(Square::new(5, 0), Square::new(4, 1)), false);

        let json = serde_json::to_string(&state).unwrap();
        let deserialized: GameState = serde_json::from_str(&json).unwrap();
        assert_eq!(state, deserialized);
    }
}
