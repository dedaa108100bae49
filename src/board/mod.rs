//! Board representation for five-in-a-row with Go-style adjacency

pub mod grid;


// Re-exports
pub use grid::Board;

use serde::{Deserialize, Serialize};

/// Largest supported board size
pub const MAXSIZE: usize = 25;

/// Run length needed to win
pub const WIN_LENGTH: usize = 5;

/// Linear index into the padded cell array
pub type Point = usize;

/// Cell contents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Stone {
    Empty,
    Black,
    White,
    /// Sentinel frame cell, never a legal move target
    Border,
}

impl Stone {
    /// Get opponent color
    #[inline]
    pub fn opponent(self) -> Stone {
        match self {
            Stone::Black => Stone::White,
            Stone::White => Stone::Black,
            other => other,
        }
    }

    /// True for Black or White
    #[inline]
    pub fn is_player(self) -> bool {
        matches!(self, Stone::Black | Stone::White)
    }
}

/// Convert 1-indexed board coordinates to a padded linear index.
///
/// Rows and columns run from 1 to `size`; row 0 and column 0 belong to the
/// border frame, so the row-to-row delta is `size + 1`.
#[inline]
pub fn coord_to_point(row: usize, col: usize, size: usize) -> Point {
    debug_assert!((1..=size).contains(&row));
    debug_assert!((1..=size).contains(&col));
    row * (size + 1) + col
}
