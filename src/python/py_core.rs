//! Core type bindings for Python.

use pyo3::prelude::*;

use crate::core::Move;
use crate::session::UpdatedState;

/// Python wrapper for Move.
#[pyclass(name = "Move")]
#[derive(Clone, Debug)]
pub struct PyMove(pub Move);

#[pymethods]
impl PyMove {
    /// Source square as (row, col).
    #[getter]
    fn from_square(&self) -> (usize, usize) {
        (self.0.from.row(), self.0.from.col())
    }

    /// Destination square as (row, col).
    #[getter]
    fn to_square(&self) -> (usize, usize) {
        (self.0.to.row(), self.0.to.col())
    }

    /// Captured squares as (row, col) pairs.
    #[getter]
    fn captures(&self) -> Vec<(usize, usize)> {
        self.0.captures.iter().map(|sq| (sq.row(), sq.col())).collect()
    }

    fn is_capture(&self) -> bool {
        self.0.is_capture()
    }

    fn __repr__(&self) -> String {
        format!("Move({})", self.0)
    }

    fn __eq__(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

/// Python wrapper for UpdatedState.
#[pyclass(name = "UpdatedState")]
#[derive(Clone, Debug)]
pub struct PyUpdatedState(pub UpdatedState);

#[pymethods]
impl PyUpdatedState {
    /// Board rows as strings: `.` empty, `r`/`b` men, `R`/`B` kings.
    #[getter]
    fn board(&self) -> Vec<String> {
        self.0.board.to_rows()
    }

    /// Highlighted destinations as sorted (row, col) pairs.
    #[getter]
    fn highlighted(&self) -> Vec<(usize, usize)> {
        let mut squares: Vec<_> = self
            .0
            .highlighted
            .iter()
            .map(|sq| (sq.row(), sq.col()))
            .collect();
        squares.sort_unstable();
        squares
    }

    #[getter]
    fn selected(&self) -> Option<(usize, usize)> {
        self.0.selected.map(|sq| (sq.row(), sq.col()))
    }

    #[getter]
    fn current_player(&self) -> String {
        self.0.current_player.to_string()
    }

    #[getter]
    fn status(&self) -> String {
        self.0.status.clone()
    }

    #[getter]
    fn input_disabled(&self) -> bool {
        self.0.input_disabled
    }

    /// Winning side, or None while the game continues.
    #[getter]
    fn winner(&self) -> Option<String> {
        self.0.result.map(|r| r.winner.to_string())
    }

    fn __repr__(&self) -> String {
        format!("UpdatedState(status={:?})", self.0.status)
    }
}
