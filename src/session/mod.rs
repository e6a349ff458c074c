//! Presentation-layer contract.
//!
//! A front end (browser glue, a terminal UI, the Python binding) forwards
//! square clicks to a `GameController` and renders the `UpdatedState` it gets
//! back. The controller is the only owner of the game state.

mod controller;
mod view;

pub use controller::GameController;
pub use view::{status_text, UpdatedState};
