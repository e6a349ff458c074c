//! Standard checkers on an 8x8 board.
//!
//! - Red moves first from rows 5-7, Black starts on rows 0-2
//! - Men move and capture diagonally forward, kings in all four directions
//! - A piece that captures must keep capturing while it can
//! - A man reaching the far row is crowned immediately
//! - A side with no pieces left loses

mod game;

pub use game::{Checkers, CheckersBuilder};
