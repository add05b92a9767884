use super::dir::Dir;
use num_integer::Integer;
use std::fmt::{Debug, Error, Formatter};

#[derive(Eq, PartialEq, Copy, Clone, Hash, PartialOrd, Ord)]
pub struct GridPoint {
    // field order gives row-major ordering
    pub row: isize,
    pub col: isize,
}

/// Extents of the board, `row` rows by `col` columns
pub type GridDim = GridPoint;

impl GridPoint {
    pub const fn new(row: isize, col: isize) -> Self {
        Self { row, col }
    }

    #[must_use]
    pub fn translate(self, dir: Dir, dist: usize) -> Self {
        let (dr, dc) = dir.delta();
        let dist = dist as isize;
        Self {
            row: self.row + dr * dist,
            col: self.col + dc * dist,
        }
    }

    // mod height, mod width
    // a point n cells out of bounds ends up n cells from the opposite edge
    #[must_use]
    pub fn wrap_around(self, board_dim: GridDim) -> Self {
        Self {
            row: self.row.mod_floor(&board_dim.row),
            col: self.col.mod_floor(&board_dim.col),
        }
    }

    // wraps around board edges
    #[must_use]
    pub fn wrapping_translate(self, dir: Dir, dist: usize, board_dim: GridDim) -> Self {
        self.translate(dir, dist).wrap_around(board_dim)
    }

    // None if other is not exactly one (wrapping) step away
    pub fn wrapping_dir_to_1(self, other: Self, board_dim: GridDim) -> Option<Dir> {
        Dir::iter().find(|dir| self.wrapping_translate(*dir, 1, board_dim) == other)
    }

    pub fn contains(self, pos: Self) -> bool {
        (0..self.row).contains(&pos.row) && (0..self.col).contains(&pos.col)
    }

    /// Number of cells on a board of these dimensions
    pub fn area(self) -> usize {
        (self.row * self.col) as usize
    }

    /// Row-major index of `pos` on a board of dimension `self`
    pub fn index_of(self, pos: Self) -> usize {
        (pos.row * self.col + pos.col) as usize
    }

    /// Inverse of `index_of`
    pub fn point_at(self, idx: usize) -> Self {
        let idx = idx as isize;
        Self {
            row: idx / self.col,
            col: idx % self.col,
        }
    }
}

impl Debug for GridPoint {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), Error> {
        write!(f, "({}, {})", self.row, self.col)
    }
}
