use crate::basic::{Dir, GridDim, GridPoint};
use static_assertions::const_assert;
use std::time::Duration;

/// Board size and starting position, chosen once at startup
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Layout {
    /// Narrow portrait board with an on-screen direction pad
    Compact,
    /// Wide board
    Expanded,
}

const EXPANDED_DIM: GridDim = GridDim::new(31, 55);
const COMPACT_DIM: GridDim = GridDim::new(25, 15);
pub const INITIAL_LEN: isize = 3;

const_assert!(EXPANDED_DIM.col > INITIAL_LEN && EXPANDED_DIM.row > 0);
const_assert!(COMPACT_DIM.row > INITIAL_LEN && COMPACT_DIM.col > 0);

impl Layout {
    pub fn board_dim(self) -> GridDim {
        match self {
            Layout::Compact => COMPACT_DIM,
            Layout::Expanded => EXPANDED_DIM,
        }
    }

    /// Side length of a cell in pixels
    pub fn cell_side(self) -> f32 {
        match self {
            Layout::Compact => 20.,
            Layout::Expanded => 15.,
        }
    }

    pub fn initial_dir(self) -> Dir {
        match self {
            Layout::Compact => Dir::D,
            Layout::Expanded => Dir::R,
        }
    }

    /// Three contiguous cells against the edge the snake moves away
    /// from, centered on the other axis, head first
    pub fn initial_cells(self) -> Vec<GridPoint> {
        let GridDim { row: rows, col: cols } = self.board_dim();
        match self {
            Layout::Compact => (0..INITIAL_LEN)
                .rev()
                .map(|row| GridPoint::new(row, cols / 2))
                .collect(),
            Layout::Expanded => (0..INITIAL_LEN)
                .rev()
                .map(|col| GridPoint::new(rows / 2, col))
                .collect(),
        }
    }

    /// Whether the direction pad is drawn under the board
    pub fn has_dpad(self) -> bool {
        matches!(self, Layout::Compact)
    }
}

pub struct Prefs {
    pub layout: Layout,
    pub tick: Duration,
    /// Seed for food placement, random if None
    pub seed: Option<u64>,
    pub draw_grid: bool,
    pub message_duration: Duration,
    /// Upper bound on the number of ticks run in a single
    /// update to catch up after a stall
    pub max_catch_up: usize,
}

impl Default for Prefs {
    fn default() -> Self {
        Self {
            layout: Layout::Expanded,
            tick: Duration::from_millis(130),
            seed: None,
            draw_grid: true,
            message_duration: Duration::from_secs(2),
            max_catch_up: 5,
        }
    }
}

// builder
impl Prefs {
    pub fn layout(mut self, layout: Layout) -> Self {
        self.layout = layout;
        self
    }

    pub fn tick(mut self, tick: Duration) -> Self {
        self.tick = tick;
        self
    }

    pub fn seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    pub fn draw_grid(mut self, draw_grid: bool) -> Self {
        self.draw_grid = draw_grid;
        self
    }
}
