use log::{debug, info};
use rand::rngs::StdRng;
use rand::Rng;
use static_assertions::assert_impl_all;

pub use body::Body;
pub use builder::{Builder, BuilderError};

use crate::basic::{Dir, GridPoint};
use crate::food::{self, SpawnError};
use crate::grid::Grid;

mod body;
pub mod builder;

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Crash {
    /// Ran off the board or into a wall tile
    Wall,
    Itself,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum State {
    Living,
    Crashed(Crash),
    /// The snake covers every open cell, there is nowhere left to put food
    Filled,
}

/// Outcome of a single tick
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum StepResult {
    Moved,
    AteFood,
    CollidedWithWall,
    CollidedWithSelf,
    /// The game was already over, nothing changed
    AlreadyTerminal,
}

impl StepResult {
    /// Whether the game is over after this step
    pub fn is_terminal(self) -> bool {
        matches!(
            self,
            StepResult::CollidedWithWall | StepResult::CollidedWithSelf | StepResult::AlreadyTerminal
        )
    }
}

/// Owned copy of everything a renderer needs
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Snapshot {
    pub body: Vec<GridPoint>,
    pub len: usize,
    /// Stale once the board is filled, it then lies under the head
    pub food: GridPoint,
    pub game_over: bool,
}

pub struct Simulation<R: Rng = StdRng> {
    grid: Grid,
    body: Body,

    /// Direction of the last step
    dir: Dir,
    /// Committed at the start of the next step
    pending_dir: Dir,
    /// Heading restored by `reset`
    start_dir: Dir,

    food: GridPoint,
    state: State,
    /// Steps that moved the snake
    ticks: u64,

    rng: R,
}

assert_impl_all!(Simulation: Send, Sync);

#[allow(clippy::len_without_is_empty)]
impl<R: Rng> Simulation<R> {
    /// Ask for a new heading from the next step on, reversing into the
    /// neck and requests after game over are ignored
    pub fn request_heading(&mut self, dir: Dir) -> bool {
        if self.is_game_over() || dir == -self.dir {
            return false;
        }
        self.pending_dir = dir;
        true
    }

    /// Advance by one tick
    ///
    /// An error means the snake has just filled every open cell and there
    /// is no room left for food, the game is over (`State::Filled`) and
    /// `food()` keeps the eaten position, now under the head
    pub fn step(&mut self) -> Result<StepResult, SpawnError> {
        if self.is_game_over() {
            return Ok(StepResult::AlreadyTerminal);
        }

        self.dir = self.pending_dir;
        let next = self.body.head() + self.dir;

        // the board edge counts as a wall
        if !self.grid.is_open(next) {
            return Ok(self.crash(Crash::Wall, next));
        }

        let ate = next == self.food;

        // when not eating, the tail moves out of the way this tick
        if let Some(segment) = self.body.collision_at(next, !ate) {
            debug!("head ran into segment {} at {:?}", segment, next);
            return Ok(self.crash(Crash::Itself, next));
        }

        self.body.advance(next, ate);
        self.ticks += 1;

        if !ate {
            return Ok(StepResult::Moved);
        }

        match food::random_free_spot(&self.grid, &self.body, &mut self.rng) {
            Ok(pos) => {
                debug!("ate at {:?}, length {}, new food at {:?}", next, self.body.len(), pos);
                self.food = pos;
                Ok(StepResult::AteFood)
            }
            Err(err) => {
                info!("snake fills the board at length {}", self.body.len());
                self.state = State::Filled;
                Err(err)
            }
        }
    }

    fn crash(&mut self, crash: Crash, at: GridPoint) -> StepResult {
        info!(
            "game over: {:?} crash at {:?} after {} ticks, length {}",
            crash,
            at,
            self.ticks,
            self.body.len()
        );
        self.state = State::Crashed(crash);
        match crash {
            Crash::Wall => StepResult::CollidedWithWall,
            Crash::Itself => StepResult::CollidedWithSelf,
        }
    }

    /// Start over with a single segment at `head`, on failure nothing changes
    pub fn reset(&mut self, head: GridPoint, food: GridPoint) -> Result<(), BuilderError> {
        let builder = Builder::default().head(head).dir(self.start_dir).food(food);
        let body = builder.validate_body(&self.grid)?;
        let food = builder.settle_food(&self.grid, &body, &mut self.rng)?;

        info!("reset at {:?}, food at {:?}", head, food);

        self.body = body;
        self.dir = self.start_dir;
        self.pending_dir = self.start_dir;
        self.food = food;
        self.state = State::Living;
        self.ticks = 0;
        Ok(())
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn body(&self) -> &Body {
        &self.body
    }

    pub fn head(&self) -> GridPoint {
        self.body.head()
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn capacity(&self) -> usize {
        self.body.capacity()
    }

    pub fn food(&self) -> GridPoint {
        self.food
    }

    pub fn heading(&self) -> Dir {
        self.dir
    }

    pub fn pending_heading(&self) -> Dir {
        self.pending_dir
    }

    pub fn state(&self) -> State {
        self.state
    }

    pub fn is_game_over(&self) -> bool {
        self.state != State::Living
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            body: self.body.iter().collect(),
            len: self.body.len(),
            food: self.food,
            game_over: self.is_game_over(),
        }
    }
}
