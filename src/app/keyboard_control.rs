use crate::basic::Dir;
use ggez::input::keyboard::KeyCode::{self, *};

/// Everything the player can ask for, from the keyboard
/// or from an on-screen button
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Action {
    Turn(Dir),
    Start,
    Stop,
    /// Start if stopped, stop if running, replay after game over
    StartStop,
    Reset,
    ToggleGrid,
    Quit,
}

#[derive(Copy, Clone)]
pub struct Controls {
    pub u: KeyCode,
    pub d: KeyCode,
    pub l: KeyCode,
    pub r: KeyCode,
}

impl Controls {
    pub const ARROWS: Self = Self { u: Up, d: Down, l: Left, r: Right };
    pub const WASD: Self = Self { u: W, d: S, l: A, r: D };

    fn dir(&self, key: KeyCode) -> Option<Dir> {
        match key {
            k if k == self.u => Some(Dir::U),
            k if k == self.d => Some(Dir::D),
            k if k == self.l => Some(Dir::L),
            k if k == self.r => Some(Dir::R),
            _ => None,
        }
    }
}

/// Map a pressed key to an action, None for unbound keys
pub fn action_for_key(key: KeyCode) -> Option<Action> {
    if let Some(dir) = [Controls::ARROWS, Controls::WASD]
        .iter()
        .find_map(|controls| controls.dir(key))
    {
        return Some(Action::Turn(dir));
    }

    #[rustfmt::skip]
    let action = match key {
        Space => Action::StartStop,
        Return | NumpadEnter => Action::Start,
        P => Action::Stop,
        R => Action::Reset,
        G => Action::ToggleGrid,
        Escape => Action::Quit,
        _ => return None,
    };
    Some(action)
}

#[test]
fn test_key_bindings() {
    for (key, action) in [
        (Up, Action::Turn(Dir::U)),
        (S, Action::Turn(Dir::D)),
        (A, Action::Turn(Dir::L)),
        (Right, Action::Turn(Dir::R)),
        (Space, Action::StartStop),
        (Return, Action::Start),
        (R, Action::Reset),
        (G, Action::ToggleGrid),
        (Escape, Action::Quit),
    ] {
        assert_eq!(action_for_key(key), Some(action), "{:?}", key);
    }
    assert_eq!(action_for_key(Q), None);
}
