use ggez::graphics::Rect;
use ggez::mint::Point2;
use std::ops::Div;

/// A more convenient version of mint::Point2<f32>
#[derive(Copy, Clone, Debug, PartialEq, Add)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl From<Point> for Point2<f32> {
    fn from(Point { x, y }: Point) -> Self {
        Point2 { x, y }
    }
}

impl From<Point2<f32>> for Point {
    fn from(Point2 { x, y }: Point2<f32>) -> Self {
        Self { x, y }
    }
}

impl Div<f32> for Point {
    type Output = Self;

    fn div(self, rhs: f32) -> Self::Output {
        Self { x: self.x / rhs, y: self.y / rhs }
    }
}

impl Point {
    pub const fn zero() -> Self {
        Self { x: 0., y: 0. }
    }

    /// Rectangle with its top-left corner at `self`
    pub fn rect(self, size: Point) -> Rect {
        Rect::new(self.x, self.y, size.x, size.y)
    }
}
