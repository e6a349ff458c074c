//! Standard 8x8 checkers.

use crate::core::{Board, Color, GameState, Move, Result, RulesConfig, Square};
use crate::rules::{self, GameResult, MoveOutcome, RulesEngine};

/// Checkers rules with a fixed configuration.
#[derive(Clone, Debug, Default)]
pub struct Checkers {
    config: RulesConfig,
}

impl Checkers {
    #[must_use]
    pub fn new(config: RulesConfig) -> Self {
        Self { config }
    }

    /// A fresh game in the standard starting position.
    #[must_use]
    pub fn new_game(&self) -> GameState {
        GameState::new(Board::standard(), self.config.first_player)
    }
}

/// Builder for creating a Checkers game.
pub struct CheckersBuilder {
    config: RulesConfig,
    board: Option<Board>,
}

impl Default for CheckersBuilder {
    fn default() -> Self {
        Self {
            config: RulesConfig::default(),
            board: None,
        }
    }
}

impl CheckersBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn config(mut self, config: RulesConfig) -> Self {
        self.config = config;
        self
    }

    pub fn first_player(mut self, color: Color) -> Self {
        self.config.first_player = color;
        self
    }

    pub fn mandatory_capture(mut self, enabled: bool) -> Self {
        self.config.mandatory_capture = enabled;
        self
    }

    pub fn blocked_player_loses(mut self, enabled: bool) -> Self {
        self.config.blocked_player_loses = enabled;
        self
    }

    /// Start from a custom position instead of the standard one.
    pub fn board(mut self, board: Board) -> Self {
        self.board = Some(board);
        self
    }

    /// Build the rules and initial state.
    ///
    /// A custom position that is already decided comes back terminal.
    pub fn build(self) -> (Checkers, GameState) {
        let board = self.board.unwrap_or_else(Board::standard);
        let mut state = GameState::new(board, self.config.first_player);
        state.result = rules::check_terminal(&state.board, state.current_player, &self.config);

        (Checkers::new(self.config), state)
    }
}

impl RulesEngine for Checkers {
    fn config(&self) -> &RulesConfig {
        &self.config
    }

    fn piece_moves(&self, board: &Board, from: Square) -> Vec<Move> {
        match board.get(from) {
            Some(piece) => rules::piece_moves(board, from, piece),
            None => Vec::new(),
        }
    }

    fn legal_moves(&self, state: &GameState, from: Square) -> Result<Vec<Move>> {
        rules::legal_moves(state, from, &self.config)
    }

    fn apply_move(&self, state: &mut GameState, mv: &Move) -> Result<MoveOutcome> {
        rules::apply_move(state, mv, &self.config)
    }

    fn is_terminal(&self, state: &GameState) -> Option<GameResult> {
        state
            .result
            .or_else(|| rules::check_terminal(&state.board, state.current_player, &self.config))
    }
}
