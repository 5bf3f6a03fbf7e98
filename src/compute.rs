/// Pure game-logic functions.
///
/// Every public function takes an immutable reference to the current
/// `GameState` and returns a brand-new `GameState`.  Time comes in through
/// [`FrameInfo`] and input through a sampled [`InputState`], so a tick is
/// fully determined by its arguments.

use std::f32::consts::TAU;

use glam::Vec2;
use log::info;
use rand::Rng;

use crate::bullets::BulletPool;
use crate::config::Tuning;
use crate::consts::{ASPECT_HEIGHT, ASPECT_WIDTH, ENEMY_COUNT};
use crate::entities::{Entity, FireControl, GameState, GameStatus, Quad};
use crate::input::{InputState, Key, MouseButton};
use crate::screen_to_world_matrix;

/// Timing for one tick.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FrameInfo {
    /// Monotonic clock reading in milliseconds.
    pub now: u64,
    /// Length of the previous frame in seconds.
    pub frame_time: f32,
}

// ── Constructors ─────────────────────────────────────────────────────────────

/// Build the initial game state: player at the origin, enemies scattered on
/// integer coordinates across the visible world.
pub fn init_state(rng: &mut impl Rng, tuning: &Tuning) -> GameState {
    let half_w = ASPECT_WIDTH as i32;
    let half_h = ASPECT_HEIGHT as i32;
    let enemies: [Entity; ENEMY_COUNT] = std::array::from_fn(|_| {
        let x = rng.gen_range(-half_w..half_w) as f32;
        let y = rng.gen_range(-half_h..half_h) as f32;
        Entity::new(Vec2::new(x, y))
    });

    GameState {
        player: Entity::new(Vec2::ZERO),
        enemies,
        bullets: BulletPool::new(),
        fire: FireControl::default(),
        speed: tuning.normal_speed,
        ai_enabled: false,
        quad: Quad::default(),
        kills: 0,
        status: GameStatus::Playing,
        frame: 0,
    }
}

// ── Input-driven state transitions (pure) ───────────────────────────────────

/// Aim, speed modifier, WASD movement, escape.
pub fn update_player(
    state: &GameState,
    input: &InputState,
    frame_time: f32,
    tuning: &Tuning,
) -> GameState {
    let mouse_world = screen_to_world_matrix().transform_point2(input.mouse_relative());
    let mut player = state.player;
    player.dir = (mouse_world - player.pos).normalize_or_zero();

    // Edge-triggered: the speed only changes when a press or release is seen.
    let speed = if input.is_pressed(Key::Shift) {
        tuning.fast_speed
    } else if input.is_released(Key::Shift) {
        tuning.normal_speed
    } else {
        state.speed
    };

    let step = speed * frame_time;
    if input.is_down(Key::W) {
        player.pos.y += step;
    }
    if input.is_down(Key::S) {
        player.pos.y -= step;
    }
    if input.is_down(Key::D) {
        player.pos.x += step;
    }
    if input.is_down(Key::A) {
        player.pos.x -= step;
    }

    let status = if input.is_pressed(Key::Escape) {
        GameStatus::Exiting
    } else {
        state.status
    };

    GameState {
        player,
        speed,
        status,
        ..state.clone()
    }
}

/// C / V spin the quad, the arrow keys drag its first corner.
pub fn update_quad(
    state: &GameState,
    input: &InputState,
    frame_time: f32,
    tuning: &Tuning,
) -> GameState {
    let mut quad = state.quad;

    if input.is_down(Key::C) {
        quad.angle -= tuning.quad_spin * frame_time;
    }
    if input.is_down(Key::V) {
        quad.angle += tuning.quad_spin * frame_time;
    }
    quad.angle = quad.angle.rem_euclid(TAU);

    let step = state.speed * frame_time;
    let corner = &mut quad.corners[0];
    if input.is_down(Key::Up) {
        corner.y += step;
    }
    if input.is_down(Key::Down) {
        corner.y -= step;
    }
    if input.is_down(Key::Right) {
        corner.x += step;
    }
    if input.is_down(Key::Left) {
        corner.x -= step;
    }

    GameState {
        quad,
        ..state.clone()
    }
}

/// P toggles the chase AI; while on, living enemies walk straight at the player.
pub fn update_enemies(
    state: &GameState,
    input: &InputState,
    frame_time: f32,
    tuning: &Tuning,
) -> GameState {
    let ai_enabled = if input.is_pressed(Key::P) {
        info!("enemy AI {}", if state.ai_enabled { "off" } else { "on" });
        !state.ai_enabled
    } else {
        state.ai_enabled
    };

    let mut enemies = state.enemies;
    if ai_enabled {
        let target = state.player.pos;
        for enemy in enemies.iter_mut().filter(|e| e.alive) {
            let to_player = (target - enemy.pos).normalize_or_zero();
            enemy.pos += to_player * (tuning.enemy_speed * frame_time);
        }
    }

    GameState {
        ai_enabled,
        enemies,
        ..state.clone()
    }
}

/// Fire while the left button is held, at most once per cooldown.
///
/// The cooldown clock only advances while the button is held.
pub fn player_shoot(state: &GameState, input: &InputState, now: u64, tuning: &Tuning) -> GameState {
    if !input.mouse_held(MouseButton::Left) {
        return state.clone();
    }

    let mut fire = state.fire;
    let mut bullets = state.bullets.clone();
    if fire.can_fire {
        fire.timer.start(now);
        fire.can_fire = false;
        bullets.fire();
    } else {
        fire.timer.update(now);
        if fire.timer.elapsed_millis() >= tuning.fire_cooldown_ms {
            fire.can_fire = true;
        }
    }

    GameState {
        fire,
        bullets,
        ..state.clone()
    }
}

// ── Per-frame tick ───────────────────────────────────────────────────────────

/// Advance the simulation by one frame.
pub fn tick(
    state: &GameState,
    input: &InputState,
    frame: FrameInfo,
    tuning: &Tuning,
) -> GameState {
    let dt = frame.frame_time;

    let state = update_player(state, input, dt, tuning);
    let state = update_quad(&state, input, dt, tuning);
    let state = update_enemies(&state, input, dt, tuning);
    let mut state = player_shoot(&state, input, frame.now, tuning);

    let player = state.player;
    let report = state
        .bullets
        .step(&player, &mut state.enemies, frame.now, tuning);
    state.kills += report.killed.len() as u32;
    if !report.killed.is_empty() {
        info!("kills: {}", state.kills);
    }

    state.frame += 1;
    state
}
