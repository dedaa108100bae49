//! Win detection and overall game state
//!
//! A color wins with an unbroken run of at least [`WIN_LENGTH`] stones
//! along one of four directions. The scan is read-only: it walks the
//! board through the color's point index without touching any state.

use serde::{Deserialize, Serialize};

use crate::board::{Board, Stone, WIN_LENGTH};

/// Result of inspecting the current position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameState {
    Ongoing,
    BlackWin,
    WhiteWin,
    /// Board full with no winning run on it
    Draw,
}

/// Check whether `stone` has a run of at least [`WIN_LENGTH`].
///
/// The four directions are scanned in a fixed order: rightward, downward,
/// then the two downward diagonals. Within a direction every recorded
/// stone of the color is tried as a run start, and the chain extends one
/// cell at a time until it leaves the color; the border frame stops every
/// walk, so a single step from a stone is always a valid index. The first
/// qualifying run short-circuits the scan.
pub fn check_win(board: &Board, stone: Stone) -> bool {
    let stride = board.stride();
    // Rightward, downward, down-right, down-left
    let deltas = [1, stride, stride + 1, stride - 1];

    for delta in deltas {
        for &start in board.stones(stone) {
            let mut point = start;
            let mut run = 1;
            while run < WIN_LENGTH {
                point += delta;
                if board.get(point) != stone {
                    break;
                }
                run += 1;
            }
            if run >= WIN_LENGTH {
                return true;
            }
        }
    }
    false
}

/// Classify the current position.
///
/// White is inspected before Black; a full board without a winning run is
/// a draw; anything else is an ongoing game.
pub fn check_state(board: &Board) -> GameState {
    if check_win(board, Stone::White) {
        GameState::WhiteWin
    } else if check_win(board, Stone::Black) {
        GameState::BlackWin
    } else if board.is_full() {
        GameState::Draw
    } else {
        GameState::Ongoing
    }
}
