//! Game rules for five-in-a-row on a Go board
//!
//! This module implements the rule engines:
//! - Move legality and placement
//! - Group connectivity, liberties, and captures
//! - Win conditions (five-in-a-row, full-board draw)

pub mod capture;
pub mod play;
pub mod win;

// Re-exports for convenient access
pub use capture::{group_of, has_liberty, is_simple_eye, resolve_capture, CaptureOutcome};
pub use play::{is_legal, try_place};
pub use win::{check_state, check_win, GameState};
