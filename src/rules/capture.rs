//! Group connectivity, liberties, captures, and eye shape
//!
//! A group is the maximal set of same-color stones connected through
//! orthogonal adjacency; it lives while it has a liberty, an empty cell
//! next to any of its stones. This engine is independently callable:
//! placement never invokes it.

use crate::board::{Board, Point, Stone};

/// Outcome of a capture attempt
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CaptureOutcome {
    /// Points cleared from the board, sorted ascending; empty when the
    /// group still had a liberty
    pub removed: Vec<Point>,
}

impl CaptureOutcome {
    /// Number of stones taken off the board
    #[inline]
    pub fn count(&self) -> usize {
        self.removed.len()
    }

    /// The captured point when exactly one stone fell, relevant for ko
    #[inline]
    pub fn single(&self) -> Option<Point> {
        match self.removed.as_slice() {
            [point] => Some(*point),
            _ => None,
        }
    }
}

/// Collect the maximal group of same-color stones connected to `seed`
/// through orthogonal adjacency.
///
/// Iterative flood fill: an explicit frontier stack plus a visited marker
/// per cell, so no position is processed twice and the walk ends when the
/// frontier drains. The result is sorted ascending.
pub fn group_of(board: &Board, seed: Point) -> Vec<Point> {
    let color = board.get(seed);
    debug_assert!(color.is_player());

    let mut marker = vec![false; board.cell_count()];
    let mut frontier = vec![seed];
    let mut group = Vec::new();
    marker[seed] = true;

    while let Some(point) = frontier.pop() {
        group.push(point);
        for nb in board.neighbors(point) {
            if !marker[nb] && board.get(nb) == color {
                marker[nb] = true;
                frontier.push(nb);
            }
        }
    }

    group.sort_unstable();
    group
}

/// True when at least one stone of `group` has an empty orthogonal
/// neighbor.
pub fn has_liberty(board: &Board, group: &[Point]) -> bool {
    group.iter().any(|&stone| {
        board
            .neighbors(stone)
            .iter()
            .any(|&nb| board.get(nb) == Stone::Empty)
    })
}

/// Capture the group at `point` if it has no liberty left.
///
/// A liberty-less group is cleared from the board; when exactly one stone
/// fell, its location is recorded as the board's ko point. A group that
/// keeps a liberty is left untouched and the outcome is empty.
pub fn resolve_capture(board: &mut Board, point: Point) -> CaptureOutcome {
    let group = group_of(board, point);
    if has_liberty(board, &group) {
        return CaptureOutcome::default();
    }

    for &stone in &group {
        board.remove_stone(stone);
    }
    let outcome = CaptureOutcome { removed: group };
    board.set_ko_point(outcome.single());
    tracing::debug!(count = outcome.count(), "captured group");
    outcome
}

/// Check if `point` is a simple eye for `color`.
///
/// Every orthogonal neighbor must be border or `color`. Among the diagonal
/// neighbors at most one may belong to the opponent, and none at all when
/// the point touches the board edge, where fewer diagonals exist to vouch
/// for the eye.
pub fn is_simple_eye(board: &Board, point: Point, color: Stone) -> bool {
    if !is_surrounded(board, point, color) {
        return false;
    }
    let opponent = color.opponent();
    let mut false_count = 0;
    let mut at_edge = 0;
    for nb in board.diag_neighbors(point) {
        if board.get(nb) == Stone::Border {
            at_edge = 1;
        } else if board.get(nb) == opponent {
            false_count += 1;
        }
    }
    false_count <= 1 - at_edge
}

/// Whether every orthogonal neighbor of `point` is border or `color`
fn is_surrounded(board: &Board, point: Point, color: Stone) -> bool {
    board.neighbors(point).iter().all(|&nb| {
        let nb_color = board.get(nb);
        nb_color == Stone::Border || nb_color == color
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::coord_to_point;

    fn pt(row: usize, col: usize) -> Point {
        coord_to_point(row, col, 9)
    }

    #[test]
    fn test_group_of_lone_stone() {
        let mut board = Board::new(9);
        board.place_stone(pt(5, 5), Stone::Black);

        assert_eq!(group_of(&board, pt(5, 5)), vec![pt(5, 5)]);
    }

    #[test]
    fn test_group_of_connected_shape() {
        let mut board = Board::new(9);
        // L-shaped black group
        let shape = [pt(4, 4), pt(5, 4), pt(6, 4), pt(6, 5)];
        for &point in &shape {
            board.place_stone(point, Stone::Black);
        }
        // Diagonal contact only, not part of the group
        board.place_stone(pt(5, 5), Stone::Black);
        // Orthogonal contact but wrong color
        board.place_stone(pt(3, 4), Stone::White);

        let mut expected = shape.to_vec();
        expected.sort_unstable();
        assert_eq!(group_of(&board, pt(5, 4)), expected);
    }

    #[test]
    fn test_group_same_from_any_member() {
        let mut board = Board::new(9);
        for col in 2..6 {
            board.place_stone(pt(7, col), Stone::White);
        }

        let from_head = group_of(&board, pt(7, 2));
        let from_tail = group_of(&board, pt(7, 5));
        assert_eq!(from_head, from_tail);
        assert_eq!(from_head.len(), 4);
    }

    #[test]
    fn test_liberty_on_open_board() {
        let mut board = Board::new(9);
        board.place_stone(pt(5, 5), Stone::Black);

        let group = group_of(&board, pt(5, 5));
        assert!(has_liberty(&board, &group));
    }

    #[test]
    fn test_no_liberty_when_enclosed() {
        let mut board = Board::new(9);
        board.place_stone(pt(5, 5), Stone::Black);
        for &point in &[pt(4, 5), pt(6, 5), pt(5, 4), pt(5, 6)] {
            board.place_stone(point, Stone::White);
        }

        let group = group_of(&board, pt(5, 5));
        assert!(!has_liberty(&board, &group));
    }

    #[test]
    fn test_corner_stone_liberties() {
        let mut board = Board::new(9);
        // Corner stone has two neighbors on the board, two in the frame
        board.place_stone(pt(1, 1), Stone::Black);
        board.place_stone(pt(1, 2), Stone::White);

        let group = group_of(&board, pt(1, 1));
        assert!(has_liberty(&board, &group));

        board.place_stone(pt(2, 1), Stone::White);
        assert!(!has_liberty(&board, &group));
    }

    #[test]
    fn test_capture_single_stone() {
        let mut board = Board::new(9);
        board.place_stone(pt(5, 5), Stone::Black);
        for &point in &[pt(4, 5), pt(6, 5), pt(5, 4), pt(5, 6)] {
            board.place_stone(point, Stone::White);
        }

        let outcome = resolve_capture(&mut board, pt(5, 5));
        assert_eq!(outcome.count(), 1);
        assert_eq!(outcome.single(), Some(pt(5, 5)));
        assert_eq!(board.get(pt(5, 5)), Stone::Empty);
        assert_eq!(board.ko_point(), Some(pt(5, 5)));
        assert!(board.index_is_consistent());
    }

    #[test]
    fn test_capture_whole_group() {
        let mut board = Board::new(9);
        // Two-stone black group, fully enclosed
        board.place_stone(pt(5, 5), Stone::Black);
        board.place_stone(pt(5, 6), Stone::Black);
        for &point in &[
            pt(4, 5),
            pt(4, 6),
            pt(6, 5),
            pt(6, 6),
            pt(5, 4),
            pt(5, 7),
        ] {
            board.place_stone(point, Stone::White);
        }

        let outcome = resolve_capture(&mut board, pt(5, 6));
        assert_eq!(outcome.count(), 2);
        assert_eq!(outcome.single(), None);
        assert_eq!(board.get(pt(5, 5)), Stone::Empty);
        assert_eq!(board.get(pt(5, 6)), Stone::Empty);
        assert!(board.stones(Stone::Black).is_empty());
        assert!(board.index_is_consistent());
    }

    #[test]
    fn test_no_capture_with_liberty() {
        let mut board = Board::new(9);
        board.place_stone(pt(5, 5), Stone::Black);
        // Three sides only, one liberty remains
        for &point in &[pt(4, 5), pt(6, 5), pt(5, 4)] {
            board.place_stone(point, Stone::White);
        }

        let before = board.clone();
        let outcome = resolve_capture(&mut board, pt(5, 5));
        assert_eq!(outcome.count(), 0);
        assert_eq!(outcome.single(), None);
        assert_eq!(board, before);
    }

    #[test]
    fn test_capture_against_the_frame() {
        let mut board = Board::new(9);
        // Corner stone pressed against the border needs only two stones
        board.place_stone(pt(1, 1), Stone::White);
        board.place_stone(pt(1, 2), Stone::Black);
        board.place_stone(pt(2, 1), Stone::Black);

        let outcome = resolve_capture(&mut board, pt(1, 1));
        assert_eq!(outcome.count(), 1);
        assert_eq!(board.get(pt(1, 1)), Stone::Empty);
    }

    #[test]
    fn test_simple_eye_center() {
        let mut board = Board::new(9);
        for &point in &[pt(4, 5), pt(6, 5), pt(5, 4), pt(5, 6)] {
            board.place_stone(point, Stone::Black);
        }

        assert!(is_simple_eye(&board, pt(5, 5), Stone::Black));
        assert!(!is_simple_eye(&board, pt(5, 5), Stone::White));
    }

    #[test]
    fn test_center_eye_tolerates_one_opponent_diagonal() {
        let mut board = Board::new(9);
        for &point in &[pt(4, 5), pt(6, 5), pt(5, 4), pt(5, 6)] {
            board.place_stone(point, Stone::Black);
        }
        board.place_stone(pt(4, 4), Stone::White);
        assert!(is_simple_eye(&board, pt(5, 5), Stone::Black));

        board.place_stone(pt(6, 6), Stone::White);
        assert!(!is_simple_eye(&board, pt(5, 5), Stone::Black));
    }

    #[test]
    fn test_edge_eye_tolerates_no_opponent_diagonal() {
        let mut board = Board::new(9);
        // Eye at (1, 5): the row-0 side is border
        for &point in &[pt(1, 4), pt(1, 6), pt(2, 5)] {
            board.place_stone(point, Stone::Black);
        }
        assert!(is_simple_eye(&board, pt(1, 5), Stone::Black));

        board.place_stone(pt(2, 4), Stone::White);
        assert!(!is_simple_eye(&board, pt(1, 5), Stone::Black));
    }

    #[test]
    fn test_open_point_is_not_an_eye() {
        let mut board = Board::new(9);
        // One flank missing
        for &point in &[pt(4, 5), pt(6, 5), pt(5, 4)] {
            board.place_stone(point, Stone::Black);
        }
        assert!(!is_simple_eye(&board, pt(5, 5), Stone::Black));
    }
}
