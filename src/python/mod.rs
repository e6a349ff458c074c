//! Python bindings for the rust-checkers engine.
//!
//! Lets a Python front end drive a game through the same click contract the
//! session controller exposes.
//!
//! # Quick Start
//!
//! ```python
//! import rust_checkers as checkers
//!
//! game = checkers.CheckersGame(mandatory_capture=False)
//!
//! moves = game.request_moves(5, 0)
//! view = game.choose_move(moves[0])
//! print(view.status)  # "Black's turn"
//! ```

use pyo3::prelude::*;

mod py_core;
mod py_games;

pub use py_core::*;
pub use py_games::*;

/// rust_checkers: a checkers rules engine.
#[pymodule]
fn rust_checkers(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyMove>()?;
    m.add_class::<PyUpdatedState>()?;
    m.add_class::<PyCheckersGame>()?;

    Ok(())
}
