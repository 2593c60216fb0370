use super::*;
use crate::food;
use itertools::Itertools;
use log::warn;
use rand::SeedableRng;
use std::fmt::{Display, Formatter};

#[derive(Debug, Error)]
#[must_use]
pub struct BuilderError(pub Box<Builder>, pub &'static str);

impl Display for BuilderError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "snake builder error: {}", self.1)?;
        writeln!(f, "builder: {:?}", self.0)
    }
}

#[derive(Default, Clone, Debug)]
pub struct Builder {
    /// Head first, consecutive segments must be neighbours
    pub body: Option<Vec<GridPoint>>,
    pub dir: Option<Dir>,
    pub food: Option<GridPoint>,
    pub seed: Option<u64>,
}

impl Builder {
    /// The reference start heading
    pub const DEFAULT_DIR: Dir = Dir::R;

    /// Head and food taken from the grid's spawn markers
    pub fn from_grid(grid: &Grid) -> Self {
        Self {
            body: grid.player_start().map(|head| vec![head]),
            food: grid.food_start(),
            ..Self::default()
        }
    }

    #[inline(always)]
    #[must_use]
    pub fn head(mut self, value: GridPoint) -> Self {
        self.body = Some(vec![value]);
        self
    }

    #[inline(always)]
    #[must_use]
    pub fn body(mut self, value: Vec<GridPoint>) -> Self {
        self.body = Some(value);
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
    pub fn food(mut self, value: GridPoint) -> Self {
        self.food = Some(value);
        self
    }

    #[inline(always)]
    #[must_use]
    pub fn seed(mut self, value: u64) -> Self {
        self.seed = Some(value);
        self
    }

    fn error(&self, msg: &'static str) -> BuilderError {
        BuilderError(Box::new(self.clone()), msg)
    }

    /// Food placement uses `StdRng`, seeded if `seed` is set
    pub fn build(&self, grid: Grid) -> Result<Simulation, BuilderError> {
        let rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        self.build_with_rng(grid, rng)
    }

    pub fn build_with_rng<R: Rng>(&self, grid: Grid, mut rng: R) -> Result<Simulation<R>, BuilderError> {
        let body = self.validate_body(&grid)?;
        let dir = self.dir.unwrap_or(Self::DEFAULT_DIR);
        let food = self.settle_food(&grid, &body, &mut rng)?;

        info!(
            "spawn snake of length {} at {:?} going {:?}, food at {:?}",
            body.len(),
            body.head(),
            dir,
            food
        );

        Ok(Simulation {
            grid,
            body,
            dir,
            pending_dir: dir,
            start_dir: dir,
            food,
            state: State::Living,
            ticks: 0,
            rng,
        })
    }

    pub(super) fn validate_body(&self, grid: &Grid) -> Result<Body, BuilderError> {
        let segments = self.body.as_ref().ok_or_else(|| self.error("missing field `head`"))?;
        if segments.is_empty() {
            return Err(self.error("empty body"));
        }
        if segments.len() > grid.dim().cell_count() {
            return Err(self.error("body longer than the grid has cells"));
        }
        if !segments.iter().all(|&seg| grid.is_open(seg)) {
            return Err(self.error("body out of bounds or on a wall"));
        }
        if !segments.iter().all_unique() {
            return Err(self.error("body overlaps itself"));
        }
        let connected = segments
            .iter()
            .tuple_windows()
            .all(|(&a, &b)| Dir::iter().any(|dir| a + dir == b));
        if !connected {
            return Err(self.error("body segments are not neighbours"));
        }
        if self.food.map_or(false, |food| !grid.contains(food)) {
            return Err(self.error("food out of bounds"));
        }

        Ok(Body::from_segments(segments.iter().copied(), grid.dim().cell_count()))
    }

    pub(super) fn settle_food(&self, grid: &Grid, body: &Body, rng: &mut impl Rng) -> Result<GridPoint, BuilderError> {
        match self.food {
            Some(pos) if food::is_free(pos, grid, body) => return Ok(pos),
            Some(pos) => warn!("food at {:?} is blocked, placing it elsewhere", pos),
            None => {}
        }
        food::random_free_spot(grid, body, rng).map_err(|_| self.error("no free cell for food"))
    }
}
