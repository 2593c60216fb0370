//! Built-in level tables
//!
//! Tags: 0 floor, 1 wall, 2 snake start, 3 first food

use crate::grid::{Grid, GridError};

pub const LEVEL_W: usize = 12;
pub const LEVEL_H: usize = 8;

type Table = [[u8; LEVEL_W]; LEVEL_H];

#[rustfmt::skip]
const ARENA: Table = [
    [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
    [0, 1, 1, 0, 0, 0, 0, 0, 0, 1, 1, 0],
    [0, 1, 0, 2, 0, 0, 0, 0, 0, 0, 1, 0],
    [0, 0, 0, 0, 0, 1, 1, 0, 0, 0, 0, 0],
    [0, 0, 0, 0, 0, 1, 1, 0, 3, 0, 0, 0],
    [0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0],
    [0, 1, 1, 0, 0, 0, 0, 0, 0, 1, 1, 0],
    [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
];

#[rustfmt::skip]
const OPEN: Table = [
    [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
    [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
    [0, 0, 0, 2, 0, 0, 0, 0, 0, 0, 0, 0],
    [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
    [0, 0, 0, 0, 0, 0, 0, 0, 3, 0, 0, 0],
    [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
    [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
    [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
];

// alternating walls, the snake start sits on a wall-parity cell
#[rustfmt::skip]
const CHECKERBOARD: Table = [
    [0, 1, 0, 1, 0, 1, 0, 1, 0, 1, 0, 1],
    [1, 0, 1, 0, 1, 0, 1, 0, 1, 0, 1, 0],
    [0, 1, 0, 2, 0, 1, 0, 1, 0, 1, 0, 1],
    [1, 0, 1, 0, 1, 0, 1, 0, 1, 0, 1, 0],
    [0, 1, 0, 1, 0, 1, 0, 1, 3, 1, 0, 1],
    [1, 0, 1, 0, 1, 0, 1, 0, 1, 0, 1, 0],
    [0, 1, 0, 1, 0, 1, 0, 1, 0, 1, 0, 1],
    [1, 0, 1, 0, 1, 0, 1, 0, 1, 0, 1, 0],
];

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Level {
    Arena,
    Open,
    Checkerboard,
}

impl Level {
    pub const ALL: [Level; 3] = [Level::Arena, Level::Open, Level::Checkerboard];

    pub fn name(self) -> &'static str {
        match self {
            Level::Arena => "arena",
            Level::Open => "open",
            Level::Checkerboard => "checkerboard",
        }
    }

    pub fn table(self) -> &'static Table {
        match self {
            Level::Arena => &ARENA,
            Level::Open => &OPEN,
            Level::Checkerboard => &CHECKERBOARD,
        }
    }

    pub fn grid(self) -> Result<Grid, GridError> {
        Grid::from_table(self.table())
    }

    /// Cycles through `ALL`
    #[must_use]
    pub fn next(self) -> Self {
        let idx = Self::ALL.iter().position(|&level| level == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::basic::{Dir, GridDim, GridPoint};

    #[test]
    fn test_all_levels_parse_with_markers() {
        for level in Level::ALL {
            let grid = level.grid().unwrap();
            assert_eq!(grid.dim(), GridDim::new(LEVEL_W, LEVEL_H), "{}", level.name());
            let head = grid.player_start().expect("missing player start");
            let food = grid.food_start().expect("missing food start");
            assert!(!grid.is_wall(head), "{}: head on wall", level.name());
            assert!(!grid.is_wall(food), "{}: food on wall", level.name());
        }
    }

    #[test]
    fn test_reference_markers() {
        let grid = Level::Checkerboard.grid().unwrap();
        assert_eq!(grid.player_start(), Some(GridPoint::new(2, 3)));
        assert_eq!(grid.food_start(), Some(GridPoint::new(4, 8)));
        assert_eq!(grid.open_cell_count(), LEVEL_W * LEVEL_H / 2 + 1);
    }

    #[test]
    fn test_checkerboard_allows_single_hops() {
        let grid = Level::Checkerboard.grid().unwrap();
        let head = grid.player_start().unwrap();
        for dir in Dir::iter() {
            assert!(grid.is_open(head + dir), "{:?}", dir);
            assert!(!grid.is_open(head.translate(dir, 2)), "{:?}", dir);
        }
    }

    #[test]
    fn test_next_cycles() {
        let mut level = Level::Arena;
        for _ in 0..Level::ALL.len() {
            level = level.next();
        }
        assert_eq!(level, Level::Arena);
    }
}
