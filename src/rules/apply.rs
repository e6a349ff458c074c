//! Move application: board update, promotion, multi-jump continuation,
//! turn switch and terminal check.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::core::{CheckersError, Color, GameState, Move, Rank, Result, RulesConfig, Square};

use super::engine::GameResult;
use super::movegen::{capture_moves, legal_moves};
use super::terminal::check_terminal;

/// What happened to the turn after a move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Transition {
    /// The piece on this square must jump again; the turn does not pass.
    ContinueCapture(Square),
    /// The turn passed to this side.
    TurnPassed(Color),
    /// The game ended.
    GameOver(GameResult),
}

/// Result of applying one move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveOutcome {
    /// The moving man was crowned.
    pub promoted: bool,
    pub transition: Transition,
}

/// Apply `mv` for the side to move.
///
/// The move must be one `legal_moves` offers for its source square; anything
/// else is rejected and the state is left untouched.
///
/// Promotion happens before the further-capture check, so a man crowned by a
/// jump continues the chain with king directions.
pub fn apply_move(state: &mut GameState, mv: &Move, config: &RulesConfig) -> Result<MoveOutcome> {
    let allowed = legal_moves(state, mv.from, config)?;
    if !allowed.contains(mv) {
        return Err(CheckersError::IllegalMove {
            from: mv.from,
            to: mv.to,
        });
    }

    let mut piece = state
        .board
        .take(mv.from)
        .ok_or(CheckersError::EmptySquare(mv.from))?;
    for &captured in &mv.captures {
        state.board.take(captured);
    }

    let promoted = piece.rank == Rank::Man && mv.to.row() == piece.color.promotion_row();
    if promoted {
        piece = piece.crowned();
    }
    state.board.place(mv.to, piece)?;
    state.record_move(mv.clone(), promoted);

    debug!(
        "{} plays {}{}",
        piece.color,
        mv,
        if promoted { " and is crowned" } else { "" }
    );

    if mv.is_capture() {
        let further = capture_moves(&state.board, mv.to, piece);
        if !further.is_empty() {
            debug!("{} must keep jumping from {}", piece.color, mv.to);
            state.select(mv.to, further);
            state.must_continue_capture = true;
            return Ok(MoveOutcome {
                promoted,
                transition: Transition::ContinueCapture(mv.to),
            });
        }
    }

    state.switch_turn();

    if let Some(result) = check_terminal(&state.board, state.current_player, config) {
        debug!("game over: {} wins ({:?})", result.winner, result.reason);
        state.result = Some(result);
        return Ok(MoveOutcome {
            promoted,
            transition: Transition::GameOver(result),
        });
    }

    Ok(MoveOutcome {
        promoted,
        transition: Transition::TurnPassed(state.current_player),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Board, Piece, TurnPhase};
    use crate::rules::WinReason;

    fn state(diagram: &str, to_move: Color) -> GameState {
        GameState::new(Board::from_diagram(diagram).unwrap(), to_move)
    }

    #[test]
    fn test_simple_step_passes_turn() {
        let mut state = GameState::standard();
        let mv = Move::step(Square::new(5, 0), Square::new(4, 1));

        let outcome = apply_move(&mut state, &mv, &RulesConfig::default()).unwrap();

        assert_eq!(outcome.transition, Transition::TurnPassed(Color::Black));
        assert!(!outcome.promoted);
        assert!(state.board.is_empty(Square::new(5, 0)));
        assert_eq!(state.board.get(Square::new(4, 1)), Some(Piece::man(Color::Red)));
        assert_eq!(state.current_player, Color::Black);
        assert_eq!(state.phase(), TurnPhase::Idle);
        assert_eq!(state.history.len(), 1);
    }

    #[test]
    fn test_illegal_move_leaves_state_untouched() {
        let mut state = GameState::standard();
        let before = state.clone();
        let config = RulesConfig::default();

        let backwards = Move::step(Square::new(5, 0), Square::new(6, 1));
        assert_eq!(
            apply_move(&mut state, &backwards, &config),
            Err(CheckersError::IllegalMove {
                from: Square::new(5, 0),
                to: Square::new(6, 1),
            })
        );

        let opponent = Move::step(Square::new(2, 1), Square::new(3, 0));
        assert!(apply_move(&mut state, &opponent, &config).is_err());

        assert_eq!(state, before);
    }

    #[test]
    fn test_capture_removes_piece() {
        let mut state = state(
            "
            . . . . . . . .
            . . . . . . . .
            . . . b . . . .
            . . . . r . . .
            . . . . . . . .
            . . . . . . . .
            . r . . . . . .
            . . . . . . . .
            ",
            Color::Black,
        );
        let mv = Move::jump(Square::new(2, 3), Square::new(4, 5), Square::new(3, 4));

        let outcome = apply_move(&mut state, &mv, &RulesConfig::default()).unwrap();

        assert_eq!(outcome.transition, Transition::TurnPassed(Color::Red));
        assert!(state.board.is_empty(Square::new(3, 4)));
        assert!(state.board.is_empty(Square::new(2, 3)));
        assert_eq!(state.board.get(Square::new(4, 5)), Some(Piece::man(Color::Black)));
    }

    #[test]
    fn test_multi_jump_keeps_turn() {
        let mut state = state(
            "
            . . . . . . . .
            . . . . . . . .
            . . . . . . . .
            . . . . b . . .
            . . . . . . . .
            . . . . b . . .
            . . . r . . . .
            . . . . . . . .
            ",
            Color::Red,
        );
        let config = RulesConfig::default();
        let first = Move::jump(Square::new(6, 3), Square::new(4, 5), Square::new(5, 4));

        let outcome = apply_move(&mut state, &first, &config).unwrap();

        assert_eq!(outcome.transition, Transition::ContinueCapture(Square::new(4, 5)));
        assert_eq!(state.current_player, Color::Red);
        assert_eq!(state.phase(), TurnPhase::ContinuingCapture);
        assert_eq!(state.selected, Some(Square::new(4, 5)));
        assert_eq!(
            state.legal_moves,
            vec![Move::jump(Square::new(4, 5), Square::new(2, 3), Square::new(3, 4))]
        );

        let second = state.legal_moves[0].clone();
        let outcome = apply_move(&mut state, &second, &config).unwrap();

        assert_eq!(
            outcome.transition,
            Transition::GameOver(GameResult {
                winner: Color::Red,
                reason: WinReason::NoPiecesLeft,
            })
        );
        assert_eq!(state.phase(), TurnPhase::Terminal);
        assert_eq!(state.history.len(), 2);
        assert_eq!(state.history[1].sequence, 1);
    }

    #[test]
    fn test_step_not_allowed_mid_chain() {
        let mut state = state(
            "
            . . . . . . . .
            . . . . . . . .
            . . . . . . . .
            . . . . b . . .
            . . . . . . . .
            . . . . b . . .
            . . . r . . . .
            . . . . . . . .
            ",
            Color::Red,
        );
        let config = RulesConfig::default();
        let first = Move::jump(Square::new(6, 3), Square::new(4, 5), Square::new(5, 4));
        apply_move(&mut state, &first, &config).unwrap();

        let step = Move::step(Square::new(4, 5), Square::new(3, 6));
        assert!(apply_move(&mut state, &step, &config).is_err());
        assert_eq!(state.phase(), TurnPhase::ContinuingCapture);
    }

    #[test]
    fn test_promotion_on_far_row() {
        let mut state = state(
            "
            . . . . . . . .
            r . . . . . . .
            . . . . . . . .
            . . . . . . . .
            . . . . . . . .
            . . . . . . . .
            . . . . . b . .
            . . . . . . . .
            ",
            Color::Red,
        );
        let mv = Move::step(Square::new(1, 0), Square::new(0, 1));

        let outcome = apply_move(&mut state, &mv, &RulesConfig::default()).unwrap();

        assert!(outcome.promoted);
        assert_eq!(state.board.get(Square::new(0, 1)), Some(Piece::king(Color::Red)));
        assert!(state.history[0].promoted);
    }

    #[test]
    fn test_black_promotes_on_row_seven() {
        let mut state = state(
            "
            . . . . . . . .
            . . . . . . . .
            . . . . . . . .
            . . . . . . . .
            . r . . . . . .
            . . . . . . . .
            . . . . . b . .
            . . . . . . . .
            ",
            Color::Black,
        );
        let mv = Move::step(Square::new(6, 5), Square::new(7, 6));

        apply_move(&mut state, &mv, &RulesConfig::default()).unwrap();

        assert_eq!(state.board.get(Square::new(7, 6)), Some(Piece::king(Color::Black)));
    }

    #[test]
    fn test_crowned_piece_continues_as_king() {
        // Red jumps onto row 0 and, now a king, can jump back down.
        let mut state = state(
            "
            . . . . . . . .
            . . . . b . b .
            . . . r . . . .
            . . . . . . . .
            . . . . . . . .
            . . . . . . . .
            . . . . . . . .
            . . . . . . . .
            ",
            Color::Red,
        );
        let first = Move::jump(Square::new(2, 3), Square::new(0, 5), Square::new(1, 4));

        let outcome = apply_move(&mut state, &first, &RulesConfig::default()).unwrap();

        assert!(outcome.promoted);
        assert_eq!(outcome.transition, Transition::ContinueCapture(Square::new(0, 5)));
        assert_eq!(state.board.get(Square::new(0, 5)), Some(Piece::king(Color::Red)));
        assert_eq!(
            state.legal_moves,
            vec![Move::jump(Square::new(0, 5), Square::new(2, 7), Square::new(1, 6))]
        );
    }

    #[test]
    fn test_game_over_rejects_moves() {
        let mut state = state(
            "
            . . . . . . . .
            . . . . . . . .
            . . . b . . . .
            . . . . r . . .
            . . . . . . . .
            . . . . . . . .
            . . . . . . . .
            . . . . . . . .
            ",
            Color::Black,
        );
        let config = RulesConfig::default();
        let mv = Move::jump(Square::new(2, 3), Square::new(4, 5), Square::new(3, 4));

        let outcome = apply_move(&mut state, &mv, &config).unwrap();
        assert!(matches!(outcome.transition, Transition::GameOver(r) if r.winner == Color::Black));

        let after = Move::step(Square::new(4, 5), Square::new(5, 6));
        assert_eq!(apply_move(&mut state, &after, &config), Err(CheckersError::GameOver));
    }
}
