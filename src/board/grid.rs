//! Padded board state with per-color point bookkeeping

use std::fmt;

use serde::{Deserialize, Serialize};

use super::{Point, Stone, MAXSIZE};

/// Game board stored as a one-dimensional cell array with a border frame.
///
/// Interior cells live at [`coord_to_point`](super::coord_to_point)`(row,
/// col, size)` for rows and columns 1 to `size`. One border column separates
/// consecutive rows and a full border row pads each end of the array, so a
/// single step in any of the eight directions from an interior cell always
/// lands on a valid index.
///
/// The per-color point lists mirror `cells` exactly: they hold the indices
/// of that color's stones, sorted ascending without duplicates, and are
/// updated only by [`place_stone`](Board::place_stone) and
/// [`remove_stone`](Board::remove_stone).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    size: usize,
    /// Row-to-row index delta, `size + 1`
    stride: usize,
    cells: Vec<Stone>,
    /// Color that moves first; informational, placement does not enforce turns
    first_player: Stone,
    /// Last single-stone capture location, tracked for ko but not consulted
    ko_point: Option<Point>,
    black_points: Vec<Point>,
    white_points: Vec<Point>,
}

impl Board {
    /// Create an empty board of the given size.
    ///
    /// # Panics
    ///
    /// Panics unless `2 <= size <= MAXSIZE`.
    pub fn new(size: usize) -> Self {
        let mut board = Self {
            size: 0,
            stride: 0,
            cells: Vec::new(),
            first_player: Stone::Black,
            ko_point: None,
            black_points: Vec::new(),
            white_points: Vec::new(),
        };
        board.reset(size);
        board
    }

    /// Reinitialize to an empty board of the given size.
    ///
    /// # Panics
    ///
    /// Panics unless `2 <= size <= MAXSIZE`.
    pub fn reset(&mut self, size: usize) {
        assert!(
            (2..=MAXSIZE).contains(&size),
            "board size {size} outside 2..={MAXSIZE}"
        );
        self.size = size;
        self.stride = size + 1;
        self.cells = vec![Stone::Border; size * size + 3 * (size + 1)];
        self.first_player = Stone::Black;
        self.ko_point = None;
        self.black_points.clear();
        self.white_points.clear();
        for row in 1..=size {
            let start = self.row_start(row);
            for cell in &mut self.cells[start..start + size] {
                *cell = Stone::Empty;
            }
        }
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Row-to-row index delta in the padded array
    #[inline]
    pub fn stride(&self) -> usize {
        self.stride
    }

    /// Length of the padded cell array
    #[inline]
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Index of the first interior cell of `row` (1-indexed)
    #[inline]
    pub fn row_start(&self, row: usize) -> Point {
        debug_assert!((1..=self.size).contains(&row));
        row * self.stride + 1
    }

    /// Get cell contents at a point
    #[inline]
    pub fn get(&self, point: Point) -> Stone {
        self.cells[point]
    }

    /// Check if the cell at a point is empty
    #[inline]
    pub fn is_empty_point(&self, point: Point) -> bool {
        self.cells[point] == Stone::Empty
    }

    /// Points currently held by a color, sorted ascending.
    ///
    /// Empty and Border have no stones, so they yield an empty slice.
    #[inline]
    pub fn stones(&self, stone: Stone) -> &[Point] {
        match stone {
            Stone::Black => &self.black_points,
            Stone::White => &self.white_points,
            _ => &[],
        }
    }

    /// Total stones on board
    #[inline]
    pub fn stone_count(&self) -> usize {
        self.black_points.len() + self.white_points.len()
    }

    /// True when no interior cell is empty
    #[inline]
    pub fn is_full(&self) -> bool {
        self.stone_count() == self.size * self.size
    }

    /// Color that moves first
    #[inline]
    pub fn first_player(&self) -> Stone {
        self.first_player
    }

    pub fn set_first_player(&mut self, stone: Stone) {
        debug_assert!(stone.is_player());
        self.first_player = stone;
    }

    /// Location of the last single-stone capture, if any
    #[inline]
    pub fn ko_point(&self) -> Option<Point> {
        self.ko_point
    }

    pub(crate) fn set_ko_point(&mut self, point: Option<Point>) {
        self.ko_point = point;
    }

    /// The four orthogonal neighbors of an interior point
    #[inline]
    pub fn neighbors(&self, point: Point) -> [Point; 4] {
        debug_assert!(self.cells[point] != Stone::Border);
        [
            point - 1,
            point + 1,
            point - self.stride,
            point + self.stride,
        ]
    }

    /// The four diagonal neighbors of an interior point
    #[inline]
    pub fn diag_neighbors(&self, point: Point) -> [Point; 4] {
        debug_assert!(self.cells[point] != Stone::Border);
        [
            point - self.stride - 1,
            point - self.stride + 1,
            point + self.stride - 1,
            point + self.stride + 1,
        ]
    }

    /// All empty interior points, sorted ascending
    pub fn empty_points(&self) -> Vec<Point> {
        let mut empties = Vec::new();
        for row in 1..=self.size {
            let start = self.row_start(row);
            for point in start..start + self.size {
                if self.cells[point] == Stone::Empty {
                    empties.push(point);
                }
            }
        }
        empties
    }

    /// Write a stone to an empty cell and record it in the color index.
    ///
    /// Raw mutation without rule checks; use [`try_place`](crate::try_place)
    /// for game moves.
    pub fn place_stone(&mut self, point: Point, stone: Stone) {
        debug_assert!(stone.is_player());
        debug_assert_eq!(self.cells[point], Stone::Empty);
        self.cells[point] = stone;
        let index = self.points_mut(stone);
        if let Err(slot) = index.binary_search(&point) {
            index.insert(slot, point);
        }
    }

    /// Clear a stone from the board and from the color index
    pub fn remove_stone(&mut self, point: Point) {
        let stone = self.cells[point];
        debug_assert!(stone.is_player());
        self.cells[point] = Stone::Empty;
        let index = self.points_mut(stone);
        if let Ok(slot) = index.binary_search(&point) {
            index.remove(slot);
        }
    }

    /// Recompute the per-color point lists from the cells and compare them
    /// with the maintained index.
    pub fn index_is_consistent(&self) -> bool {
        let mut black = Vec::new();
        let mut white = Vec::new();
        for (point, &cell) in self.cells.iter().enumerate() {
            match cell {
                Stone::Black => black.push(point),
                Stone::White => white.push(point),
                _ => {}
            }
        }
        black == self.black_points && white == self.white_points
    }

    fn points_mut(&mut self, stone: Stone) -> &mut Vec<Point> {
        match stone {
            Stone::Black => &mut self.black_points,
            Stone::White => &mut self.white_points,
            _ => unreachable!("only Black and White stones are indexed"),
        }
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in (1..=self.size).rev() {
            let start = self.row_start(row);
            write!(f, "{row:2} ")?;
            for point in start..start + self.size {
                let glyph = match self.cells[point] {
                    Stone::Empty => '.',
                    Stone::Black => 'X',
                    Stone::White => 'O',
                    Stone::Border => '#',
                };
                write!(f, "{glyph} ")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
