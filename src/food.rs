use rand::Rng;

use crate::basic::GridPoint;
use crate::grid::Grid;
use crate::snake::Body;

/// Random draws before falling back to enumerating the free cells
pub const MAX_SPAWN_ATTEMPTS: usize = 1024;

#[derive(Debug, Display, Error, Copy, Clone, Eq, PartialEq)]
pub enum SpawnError {
    #[display(fmt = "no free cell left for food")]
    BoardFull,
}

/// Free cells are open (in bounds, not a wall) and not under the snake
pub fn is_free(pos: GridPoint, grid: &Grid, body: &Body) -> bool {
    grid.is_open(pos) && !body.contains(pos)
}

/// Pick a uniformly random free cell
pub fn random_free_spot(grid: &Grid, body: &Body, rng: &mut impl Rng) -> Result<GridPoint, SpawnError> {
    // the body only ever covers open cells
    let free_spaces = grid.open_cell_count().saturating_sub(body.len());
    if free_spaces == 0 {
        return Err(SpawnError::BoardFull);
    }

    let dim = grid.dim();
    for _ in 0..MAX_SPAWN_ATTEMPTS {
        let pos = GridPoint {
            row: rng.gen_range(0..dim.height) as isize,
            col: rng.gen_range(0..dim.width) as isize,
        };
        if is_free(pos, grid, body) {
            return Ok(pos);
        }
    }

    // crowded board, pick among the free cells directly
    let new_idx = rng.gen_range(0..free_spaces);
    grid.open_cells()
        .filter(|&pos| !body.contains(pos))
        .nth(new_idx)
        .ok_or(SpawnError::BoardFull)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::basic::{Dir, GridDim};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn line_body(head: GridPoint, coming_from: Dir, len: usize, capacity: usize) -> Body {
        Body::from_segments((0..len).map(|i| head.translate(coming_from, i)), capacity)
    }

    #[test]
    fn test_never_on_body_or_wall() {
        let grid = Grid::from_table(&[[0u8, 1, 0, 0], [0, 1, 0, 0], [0, 0, 0, 1]]).unwrap();
        let body = line_body(GridPoint::new(0, 3), Dir::D, 2, grid.dim().cell_count());
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..500 {
            let pos = random_free_spot(&grid, &body, &mut rng).unwrap();
            assert!(grid.is_open(pos), "{:?} is not open", pos);
            assert!(!body.contains(pos), "{:?} is under the snake", pos);
        }
    }

    #[test]
    fn test_single_free_cell_is_found() {
        let grid = Grid::open(GridDim::new(3, 1));
        let body = line_body(GridPoint::new(0, 2), Dir::L, 2, 3);
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(random_free_spot(&grid, &body, &mut rng), Ok(GridPoint::new(0, 0)));
    }

    #[test]
    fn test_board_full() {
        let grid = Grid::from_table(&[[0u8, 0, 1]]).unwrap();
        let body = line_body(GridPoint::new(0, 0), Dir::R, 2, 3);
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(random_free_spot(&grid, &body, &mut rng), Err(SpawnError::BoardFull));
    }

    #[test]
    fn test_crowded_board_falls_back_to_the_last_free_cell() {
        // far more cells than random draws, only two of them open
        let mut table = vec![vec![1u8; 200]; 200];
        table[0][0] = 0;
        table[199][0] = 0;
        let grid = Grid::from_table(&table).unwrap();
        assert_eq!(grid.open_cells().count(), 2);

        let body = Body::new(GridPoint::new(0, 0), grid.dim().cell_count());
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..5 {
            assert_eq!(random_free_spot(&grid, &body, &mut rng), Ok(GridPoint::new(199, 0)));
        }
    }

    #[test]
    fn test_seeded_placement_is_deterministic() {
        let grid = Grid::open(GridDim::new(12, 8));
        let body = line_body(GridPoint::new(2, 3), Dir::L, 3, grid.dim().cell_count());
        let spots = |seed| {
            let mut rng = StdRng::seed_from_u64(seed);
            (0..20)
                .map(|_| random_free_spot(&grid, &body, &mut rng).unwrap())
                .collect::<Vec<_>>()
        };
        assert_eq!(spots(42), spots(42));
    }
}
