use itertools::iproduct;
use std::fmt::{Debug, Formatter};

use crate::basic::{GridDim, GridPoint};

pub mod levels;

/// Meaning of a tag in a level table, anything that isn't a wall is walkable
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Tile {
    Floor,
    Wall,
    /// Where the snake's head starts, floor afterwards
    PlayerStart,
    /// Where the first food appears, floor afterwards
    FoodStart,
}

impl Tile {
    pub const TAG_WALL: u8 = 1;
    pub const TAG_PLAYER_START: u8 = 2;
    pub const TAG_FOOD_START: u8 = 3;
}

impl From<u8> for Tile {
    fn from(tag: u8) -> Self {
        match tag {
            Self::TAG_WALL => Tile::Wall,
            Self::TAG_PLAYER_START => Tile::PlayerStart,
            Self::TAG_FOOD_START => Tile::FoodStart,
            _ => Tile::Floor,
        }
    }
}

#[derive(Debug, Display, Error, Clone, Eq, PartialEq)]
pub enum GridError {
    #[display(fmt = "level table is empty")]
    Empty,
    #[display(fmt = "level table is not rectangular: row {} has {} cells, expected {}", row, len, expected)]
    Ragged { row: usize, len: usize, expected: usize },
}

/// The static playing field, the wall pattern is fixed at construction
#[derive(Clone, Eq, PartialEq)]
pub struct Grid {
    dim: GridDim,
    // row-major
    walls: Vec<bool>,
    player_start: Option<GridPoint>,
    food_start: Option<GridPoint>,
}

impl Grid {
    /// Parse a rectangular table of tile tags, the first marker of each
    /// kind (in row-major order) is remembered as a spawn point
    pub fn from_table<R: AsRef<[u8]>>(table: &[R]) -> Result<Self, GridError> {
        let width = table.first().map(|row| row.as_ref().len()).unwrap_or(0);
        if width == 0 {
            return Err(GridError::Empty);
        }

        let mut walls = Vec::with_capacity(width * table.len());
        let mut player_start = None;
        let mut food_start = None;

        for (row_idx, row) in table.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != width {
                return Err(GridError::Ragged {
                    row: row_idx,
                    len: row.len(),
                    expected: width,
                });
            }

            for (col_idx, &tag) in row.iter().enumerate() {
                let pos = GridPoint::new(row_idx as isize, col_idx as isize);
                let tile = Tile::from(tag);
                match tile {
                    Tile::PlayerStart => {
                        player_start.get_or_insert(pos);
                    }
                    Tile::FoodStart => {
                        food_start.get_or_insert(pos);
                    }
                    Tile::Floor | Tile::Wall => {}
                }
                walls.push(tile == Tile::Wall);
            }
        }

        Ok(Self {
            dim: GridDim::new(width, table.len()),
            walls,
            player_start,
            food_start,
        })
    }

    /// A board without walls or markers
    pub fn open(dim: GridDim) -> Self {
        assert!(
            dim.width > 0 && dim.height > 0,
            "grid dimensions must be positive, got {:?}",
            dim
        );
        Self {
            dim,
            walls: vec![false; dim.cell_count()],
            player_start: None,
            food_start: None,
        }
    }

    pub fn dim(&self) -> GridDim {
        self.dim
    }

    pub fn width(&self) -> usize {
        self.dim.width
    }

    pub fn height(&self) -> usize {
        self.dim.height
    }

    pub fn contains(&self, pos: GridPoint) -> bool {
        self.dim.contains(pos)
    }

    /// Panics if `pos` is outside the grid, bounds are the caller's business
    pub fn is_wall(&self, pos: GridPoint) -> bool {
        assert!(
            self.contains(pos),
            "is_wall queried out of bounds at {:?} (grid {:?})",
            pos,
            self.dim
        );
        self.walls[self.dim.index_of(pos)]
    }

    /// In bounds and walkable
    pub fn is_open(&self, pos: GridPoint) -> bool {
        self.contains(pos) && !self.is_wall(pos)
    }

    pub fn player_start(&self) -> Option<GridPoint> {
        self.player_start
    }

    pub fn food_start(&self) -> Option<GridPoint> {
        self.food_start
    }

    /// Row-major
    pub fn cells(&self) -> impl Iterator<Item = GridPoint> {
        iproduct!(0..self.dim.height as isize, 0..self.dim.width as isize)
            .map(|(row, col)| GridPoint { row, col })
    }

    pub fn open_cells(&self) -> impl Iterator<Item = GridPoint> + '_ {
        self.cells().filter(move |&pos| !self.is_wall(pos))
    }

    pub fn open_cell_count(&self) -> usize {
        self.walls.iter().filter(|&&wall| !wall).count()
    }
}

impl Debug for Grid {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Grid {}x{}", self.dim.width, self.dim.height)?;
        for row in self.walls.chunks(self.dim.width) {
            let line: String = row.iter().map(|&wall| if wall { '#' } else { '.' }).collect();
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}
