use log::warn;
use std::time::{Duration, Instant};

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum State {
    Playing,
    Paused,
    GameOver,
}

/// Decides how many simulation steps are due based on real time
pub struct Control {
    tick: Duration,
    max_catch_up: usize,
    last_update: Instant,
    state: State,
}

impl Control {
    /// Shortest accepted tick, shorter ones are raised to it
    pub const MIN_TICK: Duration = Duration::from_millis(1);

    pub fn new(tick: Duration, max_catch_up: usize) -> Self {
        if tick < Self::MIN_TICK {
            warn!("tick of {:?} is too short, using {:?}", tick, Self::MIN_TICK);
        }
        Self {
            tick: tick.max(Self::MIN_TICK),
            max_catch_up: max_catch_up.max(1),
            last_update: Instant::now(),
            state: State::Playing,
        }
    }

    pub fn state(&self) -> State {
        self.state
    }

    // called in update(), the caller performs that many steps
    pub fn due_ticks(&mut self) -> usize {
        self.due_ticks_at(Instant::now())
    }

    pub fn due_ticks_at(&mut self, now: Instant) -> usize {
        if self.state != State::Playing {
            self.last_update = now;
            return 0;
        }

        let elapsed = now.saturating_duration_since(self.last_update);
        let due = (elapsed.as_nanos() / self.tick.as_nanos()) as usize;
        if due > self.max_catch_up {
            // the backlog is dropped instead of fast-forwarding through it
            warn!("{} ticks behind, skipping {}", due, due - self.max_catch_up);
            self.last_update = now;
            return self.max_catch_up;
        }

        // keep the remainder so the cadence doesn't drift
        self.last_update += self.tick * due as u32;
        due
    }

    pub fn play(&mut self) {
        self.play_at(Instant::now())
    }

    fn play_at(&mut self, now: Instant) {
        self.state = State::Playing;
        self.last_update = now;
    }

    pub fn pause(&mut self) {
        if self.state == State::Playing {
            self.state = State::Paused;
        }
    }

    pub fn toggle_pause(&mut self) {
        match self.state {
            State::Playing => self.pause(),
            State::Paused => self.play(),
            State::GameOver => {}
        }
    }

    pub fn game_over(&mut self) {
        self.state = State::GameOver;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TICK: Duration = Duration::from_millis(200);

    fn control_at(start: Instant) -> Control {
        let mut control = Control::new(TICK, 3);
        control.play_at(start);
        control
    }

    #[test]
    fn test_nothing_due_before_a_tick() {
        let start = Instant::now();
        let mut control = control_at(start);
        assert_eq!(control.due_ticks_at(start + Duration::from_millis(199)), 0);
        assert_eq!(control.due_ticks_at(start + TICK), 1);
    }

    #[test]
    fn test_remainder_carries_over() {
        let start = Instant::now();
        let mut control = control_at(start);
        assert_eq!(control.due_ticks_at(start + Duration::from_millis(300)), 1);
        // 100ms left over from the first call
        assert_eq!(control.due_ticks_at(start + Duration::from_millis(400)), 1);
        assert_eq!(control.due_ticks_at(start + Duration::from_millis(500)), 0);
    }

    #[test]
    fn test_catch_up_is_capped() {
        let start = Instant::now();
        let mut control = control_at(start);
        assert_eq!(control.due_ticks_at(start + TICK * 2), 2);
        let later = start + TICK * 50;
        assert_eq!(control.due_ticks_at(later), 3);
        assert_eq!(control.due_ticks_at(later + Duration::from_millis(10)), 0);
    }

    #[test]
    fn test_paused_time_is_not_owed() {
        let start = Instant::now();
        let mut control = control_at(start);
        control.pause();
        assert_eq!(control.due_ticks_at(start + TICK * 10), 0);
        control.play_at(start + TICK * 10);
        assert_eq!(control.due_ticks_at(start + TICK * 10 + Duration::from_millis(50)), 0);
        assert_eq!(control.due_ticks_at(start + TICK * 11), 1);
    }

    #[test]
    fn test_zero_tick_is_raised() {
        let start = Instant::now();
        let mut control = Control::new(Duration::ZERO, 3);
        control.play_at(start);
        assert_eq!(control.due_ticks_at(start), 0);
        assert_eq!(control.due_ticks_at(start + Control::MIN_TICK), 1);
    }

    #[test]
    fn test_toggle_pause_ignores_game_over() {
        let mut control = Control::new(TICK, 3);
        control.toggle_pause();
        assert_eq!(control.state(), State::Paused);
        control.toggle_pause();
        assert_eq!(control.state(), State::Playing);
        control.game_over();
        control.toggle_pause();
        assert_eq!(control.state(), State::GameOver);
        assert_eq!(control.due_ticks(), 0);
    }
}
