use std::collections::{HashSet, VecDeque};

use tracing::debug;

use crate::basic::{Dir, GridDim, GridPoint};

pub use builder::{Builder, BuilderError};

pub mod builder;

/// Cells covered by the snake, head first
pub struct Body {
    cells: VecDeque<GridPoint>,
    /// Mirrors `cells` for O(1) occupancy checks
    occupied: HashSet<GridPoint>,
}

impl Body {
    /// None if there are no cells or a cell appears more than once
    pub fn from_cells(cells: impl IntoIterator<Item = GridPoint>) -> Option<Self> {
        let cells: VecDeque<_> = cells.into_iter().collect();
        let occupied: HashSet<_> = cells.iter().copied().collect();
        (!cells.is_empty() && occupied.len() == cells.len()).then_some(Self { cells, occupied })
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn head(&self) -> GridPoint {
        self.cells[0]
    }

    pub fn tail(&self) -> GridPoint {
        self.cells[self.cells.len() - 1]
    }

    pub fn contains(&self, pos: GridPoint) -> bool {
        self.occupied.contains(&pos)
    }

    pub fn occupied(&self) -> &HashSet<GridPoint> {
        &self.occupied
    }

    /// Head to tail
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = GridPoint> + ExactSizeIterator + '_ {
        self.cells.iter().copied()
    }

    fn push_head(&mut self, pos: GridPoint) {
        let inserted = self.occupied.insert(pos);
        debug_assert!(inserted, "pushed head onto occupied cell {:?}", pos);
        self.cells.push_front(pos);
    }

    fn pop_tail(&mut self) -> Option<GridPoint> {
        let tail = self.cells.pop_back()?;
        self.occupied.remove(&tail);
        Some(tail)
    }

    /// Move the head one cell in `dir`, growing by one if the new head
    /// lands on `food`
    ///
    /// The cell the tail is leaving counts as free, so following your own
    /// tail is allowed. On collision the body is left untouched.
    pub fn advance(&mut self, dir: Dir, food: GridPoint, board_dim: GridDim) -> Result<Step, Collision> {
        let new_head = self.head().wrapping_translate(dir, 1, board_dim);
        let ate_food = new_head == food;
        let vacated = (!ate_food).then(|| self.tail());

        if self.contains(new_head) && vacated != Some(new_head) {
            return Err(Collision { at: new_head, len: self.len() });
        }

        if vacated.is_some() {
            self.pop_tail();
        }
        self.push_head(new_head);

        Ok(Step { head: new_head, vacated, len: self.len(), ate_food })
    }
}

/// Result of one successful advance
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Step {
    pub head: GridPoint,
    /// The cell the tail left, None when the snake grew
    pub vacated: Option<GridPoint>,
    pub len: usize,
    pub ate_food: bool,
}

/// The snake ran into itself, the game is over
#[derive(Copy, Clone, Debug, Eq, PartialEq, Display, Error)]
#[display(fmt = "snake of length {} collided with itself at {:?}", len, at)]
pub struct Collision {
    pub at: GridPoint,
    /// Length of the snake at the time of the crash
    pub len: usize,
}

pub struct Snake {
    pub body: Body,
    board_dim: GridDim,

    /// Direction the snake will take on the next step
    dir: Dir,
}

impl Snake {
    pub fn head(&self) -> GridPoint {
        self.body.head()
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn dir(&self) -> Dir {
        self.dir
    }

    /// Request a turn, a 180° turn is ignored and false is returned.
    /// The latest accepted request is used on the next step.
    pub fn change_dir(&mut self, new_dir: Dir) -> bool {
        if new_dir.is_opposite(self.dir) {
            debug!(from = ?self.dir, to = ?new_dir, "ignoring 180° turn");
            return false;
        }
        self.dir = new_dir;
        true
    }

    pub fn step(&mut self, food: GridPoint) -> Result<Step, Collision> {
        self.body.advance(self.dir, food, self.board_dim)
    }
}
