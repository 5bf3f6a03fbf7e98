/// Game tuning and runtime settings.
///
/// `Tuning` holds the gameplay constants.  `RuntimeConfig` is read from
/// `ZOMBIES_*` environment variables and decides where logs go.

use std::env;
use std::fs::File;

use log::LevelFilter;

// ── Gameplay tuning ──────────────────────────────────────────────────────────

/// Gameplay constants, in world units, seconds and milliseconds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tuning {
    /// Player speed in world units per second.
    pub normal_speed: f32,
    /// Player speed while the fast modifier is engaged.
    pub fast_speed: f32,
    /// Enemy chase speed in world units per second.
    pub enemy_speed: f32,
    /// Distance a bullet travels per tick (not scaled by frame time).
    pub bullet_step: f32,
    pub fire_cooldown_ms: u64,
    /// Bullets older than this are retired.
    pub bullet_lifetime_ms: u64,
    /// Half-width of the slab used by the bullet hit test.
    pub collision_radius: f32,
    /// Half-size of the squares drawn for the player, enemies and bullets.
    pub draw_radius: f32,
    /// Quad rotation rate in radians per second.
    pub quad_spin: f32,
    pub tile_size: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            normal_speed: 0.6,
            fast_speed: 1.2,
            enemy_speed: 0.5,
            bullet_step: 0.9,
            fire_cooldown_ms: 300,
            bullet_lifetime_ms: 1500,
            collision_radius: 0.4,
            draw_radius: 0.3,
            quad_spin: 2.0,
            tile_size: 0.6,
        }
    }
}

// ── Runtime settings ─────────────────────────────────────────────────────────

/// Process-level settings read from the environment.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RuntimeConfig {
    /// File that receives log output; logging is off when unset.
    pub log_file: Option<String>,
    /// Fixed RNG seed for enemy placement.
    pub seed: Option<u64>,
    pub target_fps: u32,
    /// Draw the rotating quad's edges on top of its fill.
    pub outline_quad: bool,
}

pub const DEFAULT_TARGET_FPS: u32 = 60;

impl RuntimeConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from an arbitrary key lookup so tests don't touch the process env.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let log_file = lookup("ZOMBIES_LOG").filter(|v| !v.trim().is_empty());
        let seed = lookup("ZOMBIES_SEED").and_then(|v| v.trim().parse().ok());
        let target_fps = lookup("ZOMBIES_FPS")
            .and_then(|v| v.trim().parse::<u32>().ok())
            .filter(|&fps| fps > 0)
            .unwrap_or(DEFAULT_TARGET_FPS);
        let outline_quad = lookup("ZOMBIES_OUTLINE")
            .map(|v| matches!(v.trim(), "1" | "true" | "TRUE" | "yes"))
            .unwrap_or(false);

        Self {
            log_file,
            seed,
            target_fps,
            outline_quad,
        }
    }
}

/// Install `env_logger`, writing to the configured file.
///
/// The terminal is in raw mode on the alternate screen for the whole run, so
/// log lines must never reach stdout or stderr.
pub fn init_logging(config: &RuntimeConfig) -> std::io::Result<()> {
    let mut builder = env_logger::Builder::new();
    match &config.log_file {
        Some(path) => {
            let file = File::create(path)?;
            builder
                .filter_level(LevelFilter::Info)
                .parse_env("RUST_LOG")
                .target(env_logger::Target::Pipe(Box::new(file)));
        }
        None => {
            builder.filter_level(LevelFilter::Off);
        }
    }
    // A second init (e.g. from tests) is harmless.
    let _ = builder.try_init();
    Ok(())
}
