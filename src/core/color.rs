//! Side identification and per-side data storage.
//!
//! ## Color
//!
//! The two sides of a checkers game. Red starts at the bottom of the board
//! (rows 5-7) and moves toward row 0; Black starts at the top and moves
//! toward row 7.
//!
//! ## ColorMap
//!
//! Fixed two-entry storage indexed by `Color`.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

use super::square::BOARD_SIZE;

/// One of the two sides.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Color {
    /// Moves toward decreasing rows. Moves first by default.
    #[default]
    Red,
    /// Moves toward increasing rows.
    Black,
}

impl Color {
    /// Both colors, Red first.
    pub const ALL: [Color; 2] = [Color::Red, Color::Black];

    /// The other side.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Color::Red => Color::Black,
            Color::Black => Color::Red,
        }
    }

    /// Index for array storage (Red = 0, Black = 1).
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Row delta of a forward step for a man of this color.
    #[must_use]
    pub const fn forward(self) -> i8 {
        match self {
            Color::Red => -1,
            Color::Black => 1,
        }
    }

    /// The far row where men of this color are promoted.
    #[must_use]
    pub const fn promotion_row(self) -> usize {
        match self {
            Color::Red => 0,
            Color::Black => BOARD_SIZE - 1,
        }
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Color::Red => write!(f, "Red"),
            Color::Black => write!(f, "Black"),
        }
    }
}

/// Per-color data storage with O(1) access.
///
/// ```
/// use rust_checkers::core::{Color, ColorMap};
///
/// let mut counts: ColorMap<usize> = ColorMap::with_value(12);
/// counts[Color::Black] -= 1;
///
/// assert_eq!(counts[Color::Red], 12);
/// assert_eq!(counts[Color::Black], 11);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ColorMap<T> {
    data: [T; 2],
}

impl<T> ColorMap<T> {
    /// Create a map with values from a factory function.
    pub fn new(factory: impl Fn(Color) -> T) -> Self {
        Self {
            data: [factory(Color::Red), factory(Color::Black)],
        }
    }

    /// Create a map with both entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self::new(|_| value.clone())
    }

    /// Iterate over (Color, &T) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (Color, &T)> {
        Color::ALL.into_iter().zip(self.data.iter())
    }
}

impl<T> Index<Color> for ColorMap<T> {
    type Output = T;

    fn index(&self, color: Color) -> &Self::Output {
        &self.data[color.index()]
    }
}

impl<T> IndexMut<Color> for ColorMap<T> {
    fn index_mut(&mut self, color: Color) -> &mut Self::Output {
        &mut self.data[color.index()]
    }
}
