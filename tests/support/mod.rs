#![allow(dead_code)]

use std::collections::HashSet;

use glam::Vec2;
use zombies::bullets::BulletPool;
use zombies::entities::{Entity, FireControl, GameState, GameStatus, Quad};
use zombies::input::{InputSource, InputState, Key, MouseButton};

/// Scriptable input backend.
#[derive(Debug, Clone, Default)]
pub struct FakeInput {
    pub keys: HashSet<Key>,
    pub buttons: HashSet<MouseButton>,
    pub mouse: Vec2,
}

impl FakeInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn hold(mut self, key: Key) -> Self {
        self.keys.insert(key);
        self
    }

    pub fn click(mut self, button: MouseButton) -> Self {
        self.buttons.insert(button);
        self
    }

    pub fn aim(mut self, relative: Vec2) -> Self {
        self.mouse = relative;
        self
    }
}

impl InputSource for FakeInput {
    fn key_down(&self, key: Key) -> bool {
        self.keys.contains(&key)
    }

    fn mouse_down(&self, button: MouseButton) -> bool {
        self.buttons.contains(&button)
    }

    fn mouse_relative(&self) -> Vec2 {
        self.mouse
    }
}

/// Input for a single tick in which everything in `fake` was just pressed.
pub fn pressed(fake: &FakeInput) -> InputState {
    let mut input = InputState::default();
    input.sample(fake);
    input
}

/// Input for a tick in which everything in `fake` has been down for a while.
pub fn held(fake: &FakeInput) -> InputState {
    let mut input = InputState::default();
    input.sample(fake);
    input.sample(fake);
    input
}

pub fn dead_enemy() -> Entity {
    Entity {
        alive: false,
        ..Entity::new(Vec2::new(100.0, 100.0))
    }
}

/// Player at the origin, every enemy dead and far away, empty pool.
pub fn make_state() -> GameState {
    GameState {
        player: Entity::new(Vec2::ZERO),
        enemies: [dead_enemy(); 10],
        bullets: BulletPool::new(),
        fire: FireControl::default(),
        speed: 0.6,
        ai_enabled: false,
        quad: Quad::default(),
        kills: 0,
        status: GameStatus::Playing,
        frame: 0,
    }
}
