use ggez::input::keyboard::KeyCode::{self, *};
use tile_snake::basic::Dir;

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Action {
    Turn(Dir),
    TogglePause,
    Restart,
    NextLevel,
    ToggleGrid,
    Quit,
}

/// Movement keys, the arrow keys work regardless
#[derive(Copy, Clone, Debug)]
pub struct Controls {
    pub u: KeyCode,
    pub d: KeyCode,
    pub l: KeyCode,
    pub r: KeyCode,
}

impl Default for Controls {
    fn default() -> Self {
        Self { u: W, d: S, l: A, r: D }
    }
}

impl Controls {
    pub fn dir(&self, key: KeyCode) -> Option<Dir> {
        match key {
            Up => Some(Dir::U),
            Down => Some(Dir::D),
            Left => Some(Dir::L),
            Right => Some(Dir::R),
            k if k == self.u => Some(Dir::U),
            k if k == self.d => Some(Dir::D),
            k if k == self.l => Some(Dir::L),
            k if k == self.r => Some(Dir::R),
            _ => None,
        }
    }

    pub fn action(&self, key: KeyCode) -> Option<Action> {
        if let Some(dir) = self.dir(key) {
            return Some(Action::Turn(dir));
        }
        match key {
            P | Space => Some(Action::TogglePause),
            R => Some(Action::Restart),
            L => Some(Action::NextLevel),
            G => Some(Action::ToggleGrid),
            Escape => Some(Action::Quit),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wasd_and_arrows() {
        let controls = Controls::default();
        assert_eq!(controls.action(W), Some(Action::Turn(Dir::U)));
        assert_eq!(controls.action(A), Some(Action::Turn(Dir::L)));
        assert_eq!(controls.action(S), Some(Action::Turn(Dir::D)));
        assert_eq!(controls.action(D), Some(Action::Turn(Dir::R)));
        assert_eq!(controls.action(Left), Some(Action::Turn(Dir::L)));
        assert_eq!(controls.action(Down), Some(Action::Turn(Dir::D)));
    }

    #[test]
    fn test_rebound_keys_shadow_commands() {
        let controls = Controls { u: K, d: J, l: H, r: L };
        assert_eq!(controls.action(L), Some(Action::Turn(Dir::R)));
        assert_eq!(controls.action(W), None);
    }

    #[test]
    fn test_commands() {
        let controls = Controls::default();
        assert_eq!(controls.action(Space), Some(Action::TogglePause));
        assert_eq!(controls.action(P), Some(Action::TogglePause));
        assert_eq!(controls.action(R), Some(Action::Restart));
        assert_eq!(controls.action(Escape), Some(Action::Quit));
        assert_eq!(controls.action(Q), None);
    }
}
