//! Zombies - a top-down arena shooter for the terminal.
//!
//! Core modules:
//! - `entities`: pure game data (entities, bullet slots, game state)
//! - `compute`: the per-frame simulation tick
//! - `bullets`: fixed-capacity bullet pool with oldest-first recycling
//! - `collision`: rotated-frame swept hit test
//! - `input`: per-key state machines over a swappable input source
//! - `terminal`: crossterm-backed input source
//! - `graphics` / `render`: software rasterizer and world-space draw helpers
//! - `timer`: millisecond stopwatch and frame pacing
//! - `config`: gameplay tuning and runtime settings

pub mod bullets;
pub mod collision;
pub mod compute;
pub mod config;
pub mod entities;
pub mod graphics;
pub mod input;
pub mod render;
pub mod terminal;
pub mod timer;

use glam::{Mat3, Vec2};

/// World layout constants.
pub mod consts {
    /// Bullet pool capacity.
    pub const MAX_BULLETS: usize = 50;
    /// Number of enemies spawned at startup.
    pub const ENEMY_COUNT: usize = 10;

    /// Half-extent of the visible world along x.
    pub const ASPECT_WIDTH: f32 = 16.0;
    /// Half-extent of the visible world along y.
    pub const ASPECT_HEIGHT: f32 = 9.0;

    /// Tile grid dimensions.
    pub const WORLD_WIDTH: usize = 9;
    pub const WORLD_HEIGHT: usize = 5;
}

/// World → relative screen space (`[-1, 1]` on both axes, +y up).
#[inline]
pub fn view_matrix() -> Mat3 {
    Mat3::from_scale(Vec2::new(
        1.0 / consts::ASPECT_WIDTH,
        1.0 / consts::ASPECT_HEIGHT,
    ))
}

/// Relative screen space → world.
#[inline]
pub fn screen_to_world_matrix() -> Mat3 {
    Mat3::from_scale(Vec2::new(consts::ASPECT_WIDTH, consts::ASPECT_HEIGHT))
}
