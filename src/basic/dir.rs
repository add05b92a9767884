use std::ops::{Add, Neg};

use Dir::*;

// defined in clockwise order starting at U
#[repr(u8)]
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
pub enum Dir {
    U = 0,
    R = 1,
    D = 2,
    L = 3,
}

impl From<u8> for Dir {
    fn from(num: u8) -> Self {
        match num % 4 {
            0 => U,
            1 => R,
            2 => D,
            _ => L,
        }
    }
}

impl Neg for Dir {
    type Output = Self;

    fn neg(self) -> Self::Output {
        self + 2
    }
}

/// Clockwise quarter turns
impl Add<u8> for Dir {
    type Output = Self;

    fn add(self, rhs: u8) -> Self::Output {
        Self::from(self as u8 + rhs % 4)
    }
}

impl Dir {
    // clockwise order starting from U
    pub fn iter() -> impl Iterator<Item = Self> {
        [U, R, D, L].iter().copied()
    }

    /// Change in (row, column) when moving one cell in this direction
    pub fn delta(self) -> (isize, isize) {
        match self {
            U => (-1, 0),
            R => (0, 1),
            D => (1, 0),
            L => (0, -1),
        }
    }

    pub fn is_opposite(self, other: Self) -> bool {
        self == -other
    }
}

#[test]
fn test_dir_math() {
    let test_plus = [(U, 1, R), (U, 2, D), (L, 1, U), (D, 4, D)];

    for &(start, add, expect) in &test_plus {
        assert_eq!(start + add, expect);
    }

    for (dir, opposite) in [(U, D), (R, L), (D, U), (L, R)] {
        assert_eq!(-dir, opposite);
        assert!(dir.is_opposite(opposite));
        assert!(!dir.is_opposite(dir));
    }
}

#[test]
fn test_opposite_deltas_cancel() {
    for dir in Dir::iter() {
        let (dr, dc) = dir.delta();
        let (or, oc) = (-dir).delta();
        assert_eq!((dr + or, dc + oc), (0, 0), "{:?}", dir);
    }
}
