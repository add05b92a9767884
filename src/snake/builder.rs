use super::*;
use itertools::Itertools;
use std::fmt::{Display, Formatter};
use tracing::debug;

#[derive(Debug)]
#[must_use]
pub struct BuilderError(pub Box<Builder>, pub &'static str);

impl Display for BuilderError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "snake builder error: {}", self.1)?;
        writeln!(f, "builder: {:?}", self.0)
    }
}

impl std::error::Error for BuilderError {}

#[derive(Default, Clone, Debug)]
pub struct Builder {
    /// Head first
    pub cells: Option<Vec<GridPoint>>,
    pub dir: Option<Dir>,
    pub board_dim: Option<GridDim>,
}

impl Builder {
    #[inline(always)]
    #[must_use]
    pub fn cells(mut self, value: Vec<GridPoint>) -> Self {
        self.cells = Some(value);
        self
    }

    #[inline(always)]
    #[must_use]
    pub fn dir(mut self, value: Dir) -> Self {
        self.dir = Some(value);
        self
    }

    #[inline(always)]
    #[must_use]
    pub fn board_dim(mut self, value: GridDim) -> Self {
        self.board_dim = Some(value);
        self
    }

    fn error(&self, message: &'static str) -> BuilderError {
        BuilderError(Box::new(self.clone()), message)
    }

    pub fn build(&self) -> Result<Snake, BuilderError> {
        let cells = self.cells.as_ref().ok_or_else(|| self.error("missing field `cells`"))?;
        let dir = self.dir.ok_or_else(|| self.error("missing field `dir`"))?;
        let board_dim = self
            .board_dim
            .ok_or_else(|| self.error("missing field `board_dim`"))?;

        if board_dim.row <= 0 || board_dim.col <= 0 {
            return Err(self.error("board has no cells"));
        }
        if cells.is_empty() {
            return Err(self.error("snake has no cells"));
        }
        if !cells.iter().all(|pos| board_dim.contains(*pos)) {
            return Err(self.error("snake extends outside of the board"));
        }
        if !cells
            .iter()
            .tuple_windows()
            .all(|(a, b)| a.wrapping_dir_to_1(*b, board_dim).is_some())
        {
            return Err(self.error("snake cells are not contiguous"));
        }
        if cells.len() > 1 && cells[0].wrapping_translate(dir, 1, board_dim) == cells[1] {
            return Err(self.error("snake is facing into its own body"));
        }

        let body = Body::from_cells(cells.iter().copied())
            .ok_or_else(|| self.error("snake overlaps itself"))?;

        debug!(head = ?body.head(), len = body.len(), ?dir, "spawn snake");

        Ok(Snake { body, board_dim, dir })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use Dir::*;

    fn builder(cells: &[(isize, isize)], dir: Dir) -> Builder {
        Builder::default()
            .cells(cells.iter().map(|&(row, col)| GridPoint { row, col }).collect())
            .dir(dir)
            .board_dim(GridDim::new(5, 5))
    }

    fn build_err(builder: Builder) -> &'static str {
        match builder.build() {
            Ok(_) => panic!("expected builder error"),
            Err(BuilderError(_, message)) => message,
        }
    }

    #[test]
    fn test_build_straight_snake() {
        let snake = builder(&[(2, 2), (2, 1), (2, 0)], R).build().unwrap();
        assert_eq!(snake.len(), 3);
        assert_eq!(snake.head(), GridPoint::new(2, 2));
        assert_eq!(snake.dir(), R);
    }

    #[test]
    fn test_contiguity_may_wrap() {
        assert!(builder(&[(0, 0), (0, 4), (0, 3)], R).build().is_ok());
    }

    #[test]
    fn test_missing_fields() {
        assert_eq!(build_err(Builder::default()), "missing field `cells`");
        assert_eq!(
            build_err(Builder::default().cells(vec![GridPoint::new(0, 0)])),
            "missing field `dir`"
        );
    }

    #[test]
    fn test_invalid_shapes() {
        assert_eq!(build_err(builder(&[], R)), "snake has no cells");
        assert_eq!(build_err(builder(&[(2, 2), (2, 5)], R)), "snake extends outside of the board");
        assert_eq!(build_err(builder(&[(2, 2), (2, 0)], R)), "snake cells are not contiguous");
        assert_eq!(build_err(builder(&[(2, 2), (2, 1)], L)), "snake is facing into its own body");
        assert_eq!(
            build_err(builder(&[(2, 2), (2, 1), (2, 2)], U)),
            "snake overlaps itself"
        );
    }

    #[test]
    fn test_error_display_mentions_reason() {
        let err = builder(&[], R).build().err().unwrap();
        assert!(err.to_string().starts_with("snake builder error: snake has no cells"));
    }
}
