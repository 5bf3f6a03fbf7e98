/// Input model.
///
/// A raw backend only answers "is this key down right now?".  Once per tick
/// [`InputState::sample`] folds that answer into a small state machine per
/// key, which gives the simulation held / just-pressed / just-released
/// queries without caring where the input came from.

use glam::Vec2;

/// Every key the game reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    W,
    A,
    S,
    D,
    Up,
    Down,
    Left,
    Right,
    /// Speed modifier.
    Shift,
    Escape,
    /// Toggles enemy AI.
    P,
    /// Rotates the quad clockwise.
    C,
    /// Rotates the quad counter-clockwise.
    V,
}

const KEY_COUNT: usize = 13;

impl Key {
    pub const ALL: [Key; KEY_COUNT] = [
        Key::W,
        Key::A,
        Key::S,
        Key::D,
        Key::Up,
        Key::Down,
        Key::Left,
        Key::Right,
        Key::Shift,
        Key::Escape,
        Key::P,
        Key::C,
        Key::V,
    ];

    fn index(self) -> usize {
        self as usize
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left,
    Right,
}

impl MouseButton {
    fn index(self) -> usize {
        self as usize
    }
}

/// Raw hardware state, queried once per tick.
pub trait InputSource {
    fn key_down(&self, key: Key) -> bool;
    fn mouse_down(&self, button: MouseButton) -> bool;
    /// Mouse position in relative screen space: `[-1, 1]` on both axes, +y up.
    fn mouse_relative(&self) -> Vec2;
}

// ── Per-key state machine ────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum KeyState {
    #[default]
    Idle,
    JustPressed,
    Held,
    JustReleased,
}

impl KeyState {
    /// Advance one tick given whether the key is physically down.
    pub fn next(self, down: bool) -> KeyState {
        match (self, down) {
            (KeyState::Idle | KeyState::JustReleased, true) => KeyState::JustPressed,
            (KeyState::JustPressed | KeyState::Held, true) => KeyState::Held,
            (KeyState::JustPressed | KeyState::Held, false) => KeyState::JustReleased,
            (KeyState::Idle | KeyState::JustReleased, false) => KeyState::Idle,
        }
    }

    pub fn is_down(self) -> bool {
        matches!(self, KeyState::JustPressed | KeyState::Held)
    }
}

// ── Sampled input ────────────────────────────────────────────────────────────

/// Input as seen by one simulation tick.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct InputState {
    keys: [KeyState; KEY_COUNT],
    mouse: [KeyState; 2],
    mouse_relative: Vec2,
}

impl InputState {
    /// Recompute every key's state from the backend.  Call exactly once per tick.
    pub fn sample(&mut self, source: &impl InputSource) {
        for key in Key::ALL {
            let slot = &mut self.keys[key.index()];
            *slot = slot.next(source.key_down(key));
        }
        for button in [MouseButton::Left, MouseButton::Right] {
            let slot = &mut self.mouse[button.index()];
            *slot = slot.next(source.mouse_down(button));
        }
        self.mouse_relative = source.mouse_relative();
    }

    pub fn key(&self, key: Key) -> KeyState {
        self.keys[key.index()]
    }

    /// Currently held, including the tick it went down.
    pub fn is_down(&self, key: Key) -> bool {
        self.key(key).is_down()
    }

    /// Went down this tick.
    pub fn is_pressed(&self, key: Key) -> bool {
        self.key(key) == KeyState::JustPressed
    }

    /// Went up this tick.
    pub fn is_released(&self, key: Key) -> bool {
        self.key(key) == KeyState::JustReleased
    }

    pub fn mouse_held(&self, button: MouseButton) -> bool {
        self.mouse[button.index()].is_down()
    }

    pub fn mouse_pressed(&self, button: MouseButton) -> bool {
        self.mouse[button.index()] == KeyState::JustPressed
    }

    pub fn mouse_released(&self, button: MouseButton) -> bool {
        self.mouse[button.index()] == KeyState::JustReleased
    }

    pub fn mouse_relative(&self) -> Vec2 {
        self.mouse_relative
    }
}
