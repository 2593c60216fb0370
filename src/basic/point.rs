use std::cmp::Ordering;
use std::fmt::{Debug, Error, Formatter};
use std::ops::Add;

use crate::basic::Dir;

/// A cell on the board, rows grow downwards and columns to the right
#[derive(Eq, PartialEq, Copy, Clone, Add, Sub, Hash, Default)]
pub struct GridPoint {
    pub row: isize,
    pub col: isize,
}

impl GridPoint {
    pub const fn new(row: isize, col: isize) -> Self {
        Self { row, col }
    }

    #[must_use]
    pub fn translate(self, dir: Dir, dist: usize) -> Self {
        let GridPoint { row, col } = dir.delta();
        let dist = dist as isize;
        Self {
            row: self.row + row * dist,
            col: self.col + col * dist,
        }
    }
}

impl Add<Dir> for GridPoint {
    type Output = Self;

    fn add(self, dir: Dir) -> Self::Output {
        self + dir.delta()
    }
}

impl From<(isize, isize)> for GridPoint {
    fn from((row, col): (isize, isize)) -> Self {
        Self { row, col }
    }
}

impl Debug for GridPoint {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), Error> {
        write!(f, "<{}, {}>", self.row, self.col)
    }
}

// row-major
impl PartialOrd for GridPoint {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for GridPoint {
    fn cmp(&self, other: &Self) -> Ordering {
        match self.row.cmp(&other.row) {
            Ordering::Equal => self.col.cmp(&other.col),
            ord => ord,
        }
    }
}

/// Board size in cells
#[derive(Eq, PartialEq, Copy, Clone, Debug, Hash)]
pub struct GridDim {
    /// Number of columns
    pub width: usize,
    /// Number of rows
    pub height: usize,
}

impl GridDim {
    pub const fn new(width: usize, height: usize) -> Self {
        Self { width, height }
    }

    pub fn contains(self, pos: GridPoint) -> bool {
        (0..self.height as isize).contains(&pos.row) && (0..self.width as isize).contains(&pos.col)
    }

    pub fn cell_count(self) -> usize {
        self.width * self.height
    }

    /// Row-major index, only meaningful for contained points
    pub fn index_of(self, pos: GridPoint) -> usize {
        pos.row as usize * self.width + pos.col as usize
    }

    pub fn point_at(self, idx: usize) -> GridPoint {
        GridPoint {
            row: (idx / self.width) as isize,
            col: (idx % self.width) as isize,
        }
    }
}

#[test]
fn test_contains() {
    let dim = GridDim::new(12, 8);
    [
        ((0, 0), true),
        ((7, 11), true),
        ((-1, 3), false),
        ((0, -1), false),
        ((8, 0), false),
        ((0, 12), false),
    ]
    .iter()
    .for_each(|&((row, col), inside)| {
        assert_eq!(dim.contains(GridPoint { row, col }), inside, "<{}, {}>", row, col);
    });
}

#[test]
fn test_index_point_agree() {
    let dim = GridDim::new(5, 3);
    for idx in 0..dim.cell_count() {
        assert_eq!(dim.index_of(dim.point_at(idx)), idx);
    }
    assert_eq!(dim.point_at(7), GridPoint::new(1, 2));
}

#[test]
fn test_translate() {
    let p = GridPoint::new(2, 3);
    assert_eq!(p + Dir::R, GridPoint::new(2, 4));
    assert_eq!(p + Dir::U, GridPoint::new(1, 3));
    assert_eq!(p.translate(Dir::L, 3), GridPoint::new(2, 0));
}
