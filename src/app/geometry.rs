use ggez::graphics::Rect;

use crate::app::keyboard_control::Action;
use crate::app::prefs::Layout;
use crate::basic::{Dir, GridDim, GridPoint, Point};

const MARGIN: f32 = 20.;
const STATUS_HEIGHT: f32 = 40.;
const BUTTON_HEIGHT: f32 = 40.;
const BUTTON_WIDTH: f32 = 90.;
const BUTTON_GAP: f32 = 12.;
const DPAD_CELL: f32 = 56.;

/// An on-screen control
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Button {
    pub label: &'static str,
    pub rect: Rect,
    pub action: Action,
}

impl Button {
    pub fn contains(&self, pos: Point) -> bool {
        self.rect.contains(pos)
    }
}

/// Where everything goes in the window, fixed for a given layout
pub struct Geometry {
    pub window_dim: Point,
    /// Top-left corner of the board
    pub board_offset: Point,
    pub board_size: Point,
    pub cell_side: f32,
    pub buttons: Vec<Button>,
}

impl Geometry {
    pub fn new(layout: Layout) -> Self {
        let GridDim { row: rows, col: cols } = layout.board_dim();
        let cell_side = layout.cell_side();
        let board_size = Point {
            x: cols as f32 * cell_side,
            y: rows as f32 * cell_side,
        };
        let board_offset = Point { x: MARGIN, y: MARGIN + STATUS_HEIGHT };

        let button_row_width = 3. * BUTTON_WIDTH + 2. * BUTTON_GAP;
        let content_width = board_size.x.max(button_row_width);
        let window_width = content_width + 2. * MARGIN;
        // center the board when the buttons are wider
        let board_offset = Point {
            x: board_offset.x + (content_width - board_size.x) / 2.,
            ..board_offset
        };

        let mut y = board_offset.y + board_size.y + MARGIN;
        let mut buttons = vec![];

        let mut x = (window_width - button_row_width) / 2.;
        for (label, action) in [("Start", Action::Start), ("Stop", Action::Stop), ("Reset", Action::Reset)] {
            buttons.push(Button {
                label,
                rect: Rect::new(x, y, BUTTON_WIDTH, BUTTON_HEIGHT),
                action,
            });
            x += BUTTON_WIDTH + BUTTON_GAP;
        }
        y += BUTTON_HEIGHT + MARGIN;

        if layout.has_dpad() {
            let left = (window_width - 3. * DPAD_CELL) / 2.;
            // (column, row) within a 3x3 pad
            for (label, dir, (c, r)) in [
                ("^", Dir::U, (1., 0.)),
                ("<", Dir::L, (0., 1.)),
                (">", Dir::R, (2., 1.)),
                ("v", Dir::D, (1., 2.)),
            ] {
                buttons.push(Button {
                    label,
                    rect: Rect::new(left + c * DPAD_CELL, y + r * DPAD_CELL, DPAD_CELL, DPAD_CELL),
                    action: Action::Turn(dir),
                });
            }
            y += 3. * DPAD_CELL + MARGIN;
        }

        Self {
            window_dim: Point { x: window_width, y },
            board_offset,
            board_size,
            cell_side,
            buttons,
        }
    }

    /// Pixel rectangle of a cell, relative to the board
    pub fn cell_rect(&self, pos: GridPoint) -> Rect {
        Rect::new(
            pos.col as f32 * self.cell_side,
            pos.row as f32 * self.cell_side,
            self.cell_side,
            self.cell_side,
        )
    }

    pub fn status_pos(&self) -> Point {
        Point { x: self.board_offset.x, y: MARGIN }
    }

    pub fn board_center(&self) -> Point {
        self.board_offset + self.board_size / 2.
    }

    pub fn button_at(&self, pos: Point) -> Option<&Button> {
        self.buttons.iter().find(|button| button.contains(pos))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn center(rect: Rect) -> Point {
        Point { x: rect.x + rect.w / 2., y: rect.y + rect.h / 2. }
    }

    #[test]
    fn test_expanded_window_fits_board() {
        let geometry = Geometry::new(Layout::Expanded);
        assert_eq!(geometry.board_size, Point { x: 55. * 15., y: 31. * 15. });
        assert!(geometry.window_dim.x >= geometry.board_offset.x + geometry.board_size.x);
        assert_eq!(geometry.buttons.len(), 3);
        assert!(geometry.buttons.iter().all(|b| b.rect.bottom() <= geometry.window_dim.y));
    }

    #[test]
    fn test_compact_has_dpad() {
        let geometry = Geometry::new(Layout::Compact);
        let turns: Vec<_> = geometry
            .buttons
            .iter()
            .filter_map(|b| match b.action {
                Action::Turn(dir) => Some(dir),
                _ => None,
            })
            .collect();
        assert_eq!(turns, [Dir::U, Dir::L, Dir::R, Dir::D]);
        assert!(geometry.buttons.iter().all(|b| b.rect.bottom() <= geometry.window_dim.y));
    }

    #[test]
    fn test_button_hit_test() {
        let geometry = Geometry::new(Layout::Compact);
        for button in &geometry.buttons {
            assert_eq!(geometry.button_at(center(button.rect)).map(|b| b.action), Some(button.action));
        }
        assert!(geometry.button_at(geometry.board_center()).is_none());
    }

    #[test]
    fn test_cell_rect() {
        let geometry = Geometry::new(Layout::Expanded);
        let rect = geometry.cell_rect(GridPoint::new(2, 3));
        assert_eq!((rect.x, rect.y, rect.w, rect.h), (45., 30., 15., 15.));
    }
}
