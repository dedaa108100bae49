//! Five-in-a-row engine on a Go board
//!
//! Implements the board and rule primitives for a stone-placement game that
//! pairs Go-style adjacency and capture analysis with a five-in-a-row win
//! condition:
//! - Padded board representation with a sentinel border frame
//! - Move legality and placement with copy-based simulation
//! - Group flood fill, liberty analysis, and capture resolution
//! - Directional run scanning for win and game-state queries
//!
//! # Architecture
//!
//! The crate is organized into two modules:
//! - [`board`]: Padded cell array plus per-color point bookkeeping
//! - [`rules`]: Placement, capture, and win-detection engines
//!
//! # Quick Start
//!
//! ```
//! use gofive::{check_state, coord_to_point, try_place, Board, GameState, Stone};
//!
//! let mut board = Board::new(9);
//! let point = coord_to_point(5, 5, board.size());
//! assert!(try_place(&mut board, point, Stone::Black));
//! assert_eq!(check_state(&board), GameState::Ongoing);
//! ```
//!
//! Capture resolution is an independently callable capability: placement
//! never triggers it, callers decide when to invoke
//! [`rules::resolve_capture`].

pub mod board;
pub mod rules;

// Re-export commonly used types for convenience
pub use board::{coord_to_point, Board, Point, Stone, MAXSIZE, WIN_LENGTH};
pub use rules::{
    check_state, check_win, group_of, has_liberty, is_legal, is_simple_eye, resolve_capture,
    try_place, CaptureOutcome, GameState,
};
