//! Game bindings for Python.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::core::{Color, RulesConfig};
use crate::session::GameController;

use super::py_core::{PyMove, PyUpdatedState};

/// Python wrapper for a click-driven checkers game.
#[pyclass(name = "CheckersGame")]
pub struct PyCheckersGame {
    controller: GameController,
}

#[pymethods]
impl PyCheckersGame {
    /// Create a new game in the standard starting position.
    ///
    /// # Arguments
    /// - first_player: "red" or "black"
    /// - mandatory_capture: force captures at initial selection
    /// - blocked_player_loses: a side to move with no legal move loses
    #[new]
    #[pyo3(signature = (
        first_player = "red",
        mandatory_capture = false,
        blocked_player_loses = false
    ))]
    fn new(
        first_player: &str,
        mandatory_capture: bool,
        blocked_player_loses: bool,
    ) -> PyResult<Self> {
        let first_player = match first_player.to_ascii_lowercase().as_str() {
            "red" => Color::Red,
            "black" => Color::Black,
            other => {
                return Err(PyErr::new::<PyValueError, _>(format!(
                    "first_player must be 'red' or 'black', got '{}'",
                    other
                )))
            }
        };

        let config = RulesConfig::default()
            .with_first_player(first_player)
            .with_mandatory_capture(mandatory_capture)
            .with_blocked_player_loses(blocked_player_loses);

        Ok(Self {
            controller: GameController::with_config(config),
        })
    }

    /// Select the piece at (row, col) and return its legal moves.
    fn request_moves(&mut self, row: i64, col: i64) -> Vec<PyMove> {
        self.controller
            .request_moves(row, col)
            .into_iter()
            .map(PyMove)
            .collect()
    }

    /// Apply one of the offered moves.
    fn choose_move(&mut self, mv: &PyMove) -> PyUpdatedState {
        PyUpdatedState(self.controller.choose_move(&mv.0))
    }

    /// Handle a click on (row, col).
    fn click(&mut self, row: i64, col: i64) -> PyUpdatedState {
        PyUpdatedState(self.controller.click(row, col))
    }

    /// Current view without changing anything.
    fn view(&self) -> PyUpdatedState {
        PyUpdatedState(self.controller.view())
    }

    /// Board rows as strings: `.` empty, `r`/`b` men, `R`/`B` kings.
    #[getter]
    fn board(&self) -> Vec<String> {
        self.controller.state().board.to_rows()
    }

    /// `"<Color>'s turn"` or `"<Color> Wins!"`.
    #[getter]
    fn status(&self) -> String {
        crate::session::status_text(self.controller.state())
    }

    /// Number of moves applied so far.
    #[getter]
    fn move_count(&self) -> usize {
        self.controller.state().history.len()
    }

    fn __repr__(&self) -> String {
        let state = self.controller.state();
        format!(
            "CheckersGame(turn={}, status={:?})",
            state.turn_number,
            crate::session::status_text(state)
        )
    }
}
