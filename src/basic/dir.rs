use std::ops::Neg;

use rand::Rng;

use crate::basic::GridPoint;
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
        Self::from(self as u8 + 2)
    }
}

impl Dir {
    // clockwise order starting from U
    pub fn iter() -> impl Iterator<Item = Self> {
        [U, R, D, L].iter().copied()
    }

    /// Unit step in (row, col), rows grow downwards
    pub fn delta(self) -> GridPoint {
        let (row, col) = match self {
            U => (-1, 0),
            D => (1, 0),
            L => (0, -1),
            R => (0, 1),
        };
        GridPoint { row, col }
    }

    pub fn random(rng: &mut impl Rng) -> Self {
        Self::from(rng.gen_range(0..4))
    }
}

#[test]
fn test_reverse() {
    for (dir, rev) in [(U, D), (D, U), (L, R), (R, L)] {
        assert_eq!(-dir, rev, "-{:?}", dir);
        assert_eq!(-(-dir), dir);
    }
}

#[test]
fn test_delta_cancels_with_reverse() {
    for dir in Dir::iter() {
        let start = GridPoint { row: 3, col: 3 };
        assert_eq!(start + dir.delta() + (-dir).delta(), start);
    }
}

#[test]
fn test_from_wraps() {
    assert_eq!(Dir::from(4), U);
    assert_eq!(Dir::from(7), L);
}
