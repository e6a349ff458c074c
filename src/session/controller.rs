//! Click-driven game controller.
//!
//! Owns the single `GameState` and exposes the calls a front end makes:
//! - `request_moves`: a piece of the side to move was clicked
//! - `choose_move`: a highlighted destination was clicked
//! - `click`: the raw square-click handler combining both
//!
//! Rejected input never changes state and never surfaces as an error on
//! these calls; it is logged at debug level and the current view is
//! returned. The `try_*` variants expose the reason instead.

use log::debug;

use crate::core::{CheckersError, GameState, Move, Result, RulesConfig, Square};
use crate::games::checkers::{Checkers, CheckersBuilder};
use crate::rules::{MoveOutcome, RulesEngine};

use super::view::UpdatedState;

/// Owns one game and routes presentation-layer input into the rules.
#[derive(Clone, Debug)]
pub struct GameController<R: RulesEngine = Checkers> {
    rules: R,
    state: GameState,
}

impl GameController<Checkers> {
    /// Standard game with default rules.
    #[must_use]
    pub fn standard() -> Self {
        Self::with_config(RulesConfig::default())
    }

    /// Standard starting position under `config`.
    #[must_use]
    pub fn with_config(config: RulesConfig) -> Self {
        let (rules, state) = CheckersBuilder::new().config(config).build();
        Self::new(rules, state)
    }
}

impl Default for GameController<Checkers> {
    fn default() -> Self {
        Self::standard()
    }
}

impl<R: RulesEngine> GameController<R> {
    pub fn new(rules: R, state: GameState) -> Self {
        Self { rules, state }
    }

    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    #[must_use]
    pub fn rules(&self) -> &R {
        &self.rules
    }

    /// Snapshot of the current state for rendering.
    #[must_use]
    pub fn view(&self) -> UpdatedState {
        UpdatedState::from_state(&self.state)
    }

    /// Select the piece on `sq` and return the moves offered for it.
    ///
    /// During a continuing capture the selection cannot change; asking for
    /// the capturing piece returns its remaining jumps.
    pub fn try_request_moves(&mut self, sq: Square) -> Result<&[Move]> {
        let moves = self.rules.legal_moves(&self.state, sq)?;
        if !self.state.must_continue_capture {
            self.state.select(sq, moves);
        }
        Ok(&self.state.legal_moves)
    }

    /// Select the piece at (`row`, `col`); invalid requests return no moves
    /// and leave the state untouched.
    pub fn request_moves(&mut self, row: i64, col: i64) -> Vec<Move> {
        let result = Square::try_new(row, col)
            .and_then(|sq| self.try_request_moves(sq).map(<[Move]>::to_vec));
        match result {
            Ok(moves) => moves,
            Err(err) => {
                debug!("ignored selection at ({}, {}): {}", row, col, err);
                Vec::new()
            }
        }
    }

    /// Apply one of the currently offered moves.
    pub fn try_choose_move(&mut self, mv: &Move) -> Result<MoveOutcome> {
        if self.state.is_terminal() {
            return Err(CheckersError::GameOver);
        }
        if !self.state.legal_moves.contains(mv) {
            return Err(CheckersError::IllegalMove {
                from: mv.from,
                to: mv.to,
            });
        }
        self.rules.apply_move(&mut self.state, mv)
    }

    /// Apply one of the currently offered moves and return the new view.
    /// Moves that are not on offer are ignored.
    pub fn choose_move(&mut self, mv: &Move) -> UpdatedState {
        if let Err(err) = self.try_choose_move(mv) {
            debug!("ignored move {}: {}", mv, err);
        }
        self.view()
    }

    /// Handle a click on (`row`, `col`).
    ///
    /// - game over: ignored
    /// - continuing capture: only a highlighted destination is accepted
    /// - own piece: (re)select it
    /// - highlighted destination of the selected piece: play it
    /// - anything else: ignored
    pub fn click(&mut self, row: i64, col: i64) -> UpdatedState {
        let sq = match Square::try_new(row, col) {
            Ok(sq) => sq,
            Err(err) => {
                debug!("ignored click: {}", err);
                return self.view();
            }
        };

        if self.state.is_terminal() {
            debug!("ignored click at {}: game is over", sq);
            return self.view();
        }

        let offered = self.state.offered_move_to(sq).cloned();

        if self.state.must_continue_capture {
            if let Some(mv) = offered {
                return self.choose_move(&mv);
            }
            debug!("ignored click at {}: capture must continue", sq);
            return self.view();
        }

        let owns_piece = self
            .state
            .board
            .get(sq)
            .is_some_and(|p| p.color == self.state.current_player);

        if owns_piece {
            if let Err(err) = self.try_request_moves(sq) {
                debug!("ignored selection at {}: {}", sq, err);
            }
        } else if let Some(mv) = offered {
            return self.choose_move(&mv);
        } else {
            debug!("ignored click at {}", sq);
        }

        self.view()
    }
}
