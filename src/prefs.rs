use crate::grid::levels::Level;
use log::LevelFilter;
use std::time::Duration;

pub struct Prefs {
    /// Real time between two simulation steps
    pub tick: Duration,
    /// Steps performed at most in one update to catch up after a stall
    pub max_catch_up_ticks: usize,

    pub level: Level,
    /// `None` seeds food placement from system entropy
    pub seed: Option<u64>,

    pub window_width: f32,
    pub window_height: f32,
    pub draw_grid_lines: bool,

    pub log_level: LevelFilter,
}

impl Default for Prefs {
    fn default() -> Self {
        Self {
            tick: Duration::from_millis(200),
            max_catch_up_ticks: 3,

            level: Level::Arena,
            seed: None,

            window_width: 768.,
            window_height: 512.,
            draw_grid_lines: true,

            log_level: LevelFilter::Info,
        }
    }
}

// builder
impl Prefs {
    #[must_use]
    pub fn tick(mut self, tick: Duration) -> Self {
        self.tick = tick;
        self
    }

    #[must_use]
    pub fn level(mut self, level: Level) -> Self {
        self.level = level;
        self
    }

    #[must_use]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    #[must_use]
    pub fn draw_grid_lines(mut self, draw_grid_lines: bool) -> Self {
        self.draw_grid_lines = draw_grid_lines;
        self
    }

    #[must_use]
    pub fn log_level(mut self, log_level: LevelFilter) -> Self {
        self.log_level = log_level;
        self
    }
}

#[test]
fn test_default_cadence() {
    let prefs = Prefs::default();
    assert_eq!(prefs.tick, Duration::from_millis(200));
    assert!(prefs.max_catch_up_ticks >= 1);
    assert_eq!(prefs.level, Level::Arena);
}

#[test]
fn test_builder_chain() {
    let prefs = Prefs::default()
        .tick(Duration::from_millis(350))
        .level(Level::Open)
        .seed(3)
        .draw_grid_lines(false)
        .log_level(LevelFilter::Debug);
    assert_eq!(prefs.tick, Duration::from_millis(350));
    assert_eq!(prefs.level, Level::Open);
    assert_eq!(prefs.seed, Some(3));
    assert!(!prefs.draw_grid_lines);
    assert_eq!(prefs.log_level, LevelFilter::Debug);
}
