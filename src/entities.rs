/// Game entity types. Pure data, no update logic.

use glam::Vec2;

use crate::bullets::BulletPool;
use crate::consts::ENEMY_COUNT;
use crate::timer::Timer;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GameStatus {
    Playing,
    /// Escape was pressed; the loop should shut down cleanly.
    Exiting,
}

// ── Entities ──────────────────────────────────────────────────────────────────

/// Player, enemy or bullet body.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Entity {
    pub pos: Vec2,
    /// Unit facing vector, or zero.
    pub dir: Vec2,
    pub alive: bool,
}

impl Entity {
    pub fn new(pos: Vec2) -> Self {
        Self {
            pos,
            dir: Vec2::ZERO,
            alive: true,
        }
    }
}

impl Default for Entity {
    fn default() -> Self {
        Self::new(Vec2::ZERO)
    }
}

// ── Projectiles ───────────────────────────────────────────────────────────────

/// One slot of the bullet pool.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct BulletSlot {
    /// Snapshot from the previous tick, used by the swept hit test.
    pub last_frame: Entity,
    pub current_frame: Entity,
    /// Spawned this tick; position is snapped to the player on the next update.
    pub fired: bool,
    /// Slot is occupied by a live projectile.
    pub in_motion: bool,
    pub age: Timer,
    /// Firing order; smaller is older.
    pub shot_order: u64,
}

/// Cooldown gate between shots.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FireControl {
    pub can_fire: bool,
    pub timer: Timer,
}

impl Default for FireControl {
    fn default() -> Self {
        Self {
            can_fire: true,
            timer: Timer::default(),
        }
    }
}

// ── Scenery ───────────────────────────────────────────────────────────────────

/// The rotating quadrilateral in the middle of the arena.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Quad {
    /// Corners A, B, C, D before rotation.
    pub corners: [Vec2; 4],
    /// Rotation in radians, kept in `[0, 2π)`.
    pub angle: f32,
}

impl Default for Quad {
    fn default() -> Self {
        Self {
            corners: [
                Vec2::new(-2.0, -2.0),
                Vec2::new(-2.0, 2.0),
                Vec2::new(2.0, 2.0),
                Vec2::new(2.0, -2.0),
            ],
            angle: 0.0,
        }
    }
}

// ── Master game state ─────────────────────────────────────────────────────────

/// The entire game state.  Cloneable so the tick can return a new copy
/// without mutating the original.
#[derive(Clone, Debug, PartialEq)]
pub struct GameState {
    pub player: Entity,
    pub enemies: [Entity; ENEMY_COUNT],
    pub bullets: BulletPool,
    pub fire: FireControl,
    /// Current player speed; flips between normal and fast on modifier edges.
    pub speed: f32,
    pub ai_enabled: bool,
    pub quad: Quad,
    pub kills: u32,
    pub status: GameStatus,
    pub frame: u64,
}
