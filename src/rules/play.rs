//! Move legality and placement
//!
//! Placement is the only mutator of cell contents during normal play.
//! Rejection and mutation are mutually exclusive: a rejected move leaves
//! the board byte-for-byte unchanged.

use crate::board::{Board, Point, Stone};

use super::win::check_win;

/// Attempt to play `stone` on `point`.
///
/// The move is rejected when the game is already decided, when no empty
/// point remains, or when the target cell is not empty. On success the
/// cell is written and the point enters the color's sorted index.
///
/// Returns whether the move was played.
pub fn try_place(board: &mut Board, point: Point, stone: Stone) -> bool {
    debug_assert!(stone.is_player());
    debug_assert!(point < board.cell_count());

    // No play continues past a decided game
    if check_win(board, Stone::White) || check_win(board, Stone::Black) {
        return false;
    }

    if board.is_full() {
        tracing::debug!(point, "move rejected, no empty point left");
        return false;
    }

    if board.get(point) != Stone::Empty {
        return false;
    }

    board.place_stone(point, stone);
    true
}

/// Check whether `stone` may legally be played on `point`.
///
/// The move is simulated on a full copy of the board, so the board this is
/// called on is never mutated, whatever the simulated placement does.
pub fn is_legal(board: &Board, point: Point, stone: Stone) -> bool {
    let mut scratch = board.clone();
    try_place(&mut scratch, point, stone)
}
