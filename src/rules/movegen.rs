//! Move generation.
//!
//! `piece_moves` looks at one piece only. The selection policy in
//! `legal_moves` layers the turn rules on top: continuing-capture lock,
//! ownership and (optionally) forced capture.

use log::trace;

use crate::core::{Board, CheckersError, Color, GameState, Move, Piece, Result, RulesConfig, Square};

/// Moves for a single piece, steps and jumps together.
///
/// For each direction the piece may travel:
/// - a step is legal if the adjacent diagonal square is on the board and empty
/// - a jump is legal if the adjacent square holds an opponent piece and the
///   square beyond it is on the board and empty
pub fn piece_moves(board: &Board, from: Square, piece: Piece) -> Vec<Move> {
    let mut moves = Vec::new();

    for &dir in piece.directions() {
        let Some(next) = from.offset(dir, 1) else {
            continue;
        };

        match board.get(next) {
            None => moves.push(Move::step(from, next)),
            Some(other) if other.color != piece.color => {
                if let Some(landing) = from.offset(dir, 2) {
                    if board.is_empty(landing) {
                        moves.push(Move::jump(from, landing, next));
                    }
                }
            }
            Some(_) => {}
        }
    }

    trace!("{} moves for {:?} at {}", moves.len(), piece, from);
    moves
}

/// Jumps only, for a single piece.
pub fn capture_moves(board: &Board, from: Square, piece: Piece) -> Vec<Move> {
    let mut moves = piece_moves(board, from, piece);
    moves.retain(Move::is_capture);
    moves
}

/// Every move of every piece of one color, unfiltered.
pub fn color_moves(board: &Board, color: Color) -> Vec<Move> {
    board
        .pieces()
        .filter(|(_, p)| p.color == color)
        .flat_map(|(sq, p)| piece_moves(board, sq, p))
        .collect()
}

/// Whether any piece of `color` can jump.
pub fn color_has_capture(board: &Board, color: Color) -> bool {
    board
        .pieces()
        .filter(|(_, p)| p.color == color)
        .any(|(sq, p)| piece_moves(board, sq, p).iter().any(Move::is_capture))
}

/// Whether any piece of `color` can move at all.
pub fn color_has_move(board: &Board, color: Color) -> bool {
    board
        .pieces()
        .filter(|(_, p)| p.color == color)
        .any(|(sq, p)| !piece_moves(board, sq, p).is_empty())
}

/// Moves offered when the side to move selects the piece at `from`.
///
/// - During a continuing capture only the capturing piece may be selected,
///   and only its jumps are offered.
/// - With `mandatory_capture`, a side that can jump anywhere is offered
///   jumps only (possibly none for the selected piece).
pub fn legal_moves(state: &GameState, from: Square, config: &RulesConfig) -> Result<Vec<Move>> {
    if state.is_terminal() {
        return Err(CheckersError::GameOver);
    }

    let piece = state.board.get(from).ok_or(CheckersError::EmptySquare(from))?;
    if piece.color != state.current_player {
        return Err(CheckersError::NotYourPiece {
            square: from,
            owner: piece.color,
            to_move: state.current_player,
        });
    }

    if state.must_continue_capture {
        return match state.selected {
            Some(capturing) if capturing == from => Ok(capture_moves(&state.board, from, piece)),
            Some(capturing) => Err(CheckersError::CaptureInProgress(capturing)),
            None => Ok(capture_moves(&state.board, from, piece)),
        };
    }

    let mut moves = piece_moves(&state.board, from, piece);
    if config.mandatory_capture && color_has_capture(&state.board, piece.color) {
        moves.retain(Move::is_capture);
    }
    Ok(moves)
}
