//! Catcher - simulation core of the loading-screen catcher mini-game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (spawning, motion, collisions, power-ups)
//! - `session`: Scheduler owning the live game state and its collaborators
//! - `highscores`: Single-scalar high score persistence
//! - `settings`: Data-driven play-field and power-up tuning

pub mod error;
pub mod highscores;
pub mod session;
pub mod settings;
pub mod sim;

#[cfg(target_arch = "wasm32")]
pub mod wasm;

pub use error::{Error, Result};
pub use highscores::{HighScoreStore, MemoryStore};
pub use session::{Clock, ManualClock, Session};
pub use settings::GameConfig;

/// Fixed gameplay rules (not configurable)
pub mod consts {
    /// Basket easing factor toward its target per tick
    pub const BASKET_LERP: f32 = 0.2;

    /// Base fall speed (px/tick) before difficulty scaling
    pub const BASE_FALL_SPEED: f32 = 4.0;
    /// Random extra fall speed added at spawn, drawn from [0, this)
    pub const FALL_SPEED_JITTER: f32 = 1.5;
    /// Hard cap on spawn fall speed
    pub const MAX_FALL_SPEED: f32 = 12.0;
    /// Speed multiplier while SlowMo is active
    pub const SLOW_MO_FACTOR: f32 = 0.4;

    /// Every this many points raise the speed bonus one step
    pub const SPEED_STEP_POINTS: u64 = 50;
    /// Percentage added per speed step
    pub const SPEED_STEP_PERCENT: u64 = 15;

    /// Spawn interval at score 0
    pub const SPAWN_INTERVAL_BASE_MS: u64 = 800;
    /// Spawn interval floor
    pub const SPAWN_INTERVAL_MIN_MS: u64 = 300;
    pub const SPAWN_STEP_POINTS: u64 = 30;
    pub const SPAWN_STEP_MS: u64 = 50;

    /// Bad-entity probability: base, growth per 500 points, ceiling
    pub const BAD_CHANCE_BASE: f32 = 0.25;
    pub const BAD_CHANCE_GROWTH: f32 = 0.15;
    pub const BAD_CHANCE_MAX: f32 = 0.45;
    /// Power-up probability: base, growth per 1000 points
    pub const POWER_UP_CHANCE_BASE: f32 = 0.08;
    pub const POWER_UP_CHANCE_GROWTH: f32 = 0.05;

    /// Combo multiplier growth per combo step, and its cap
    pub const COMBO_STEP: f32 = 0.1;
    pub const COMBO_MAX_MULTIPLIER: f32 = 2.5;
    /// Score multiplier while Double is active
    pub const DOUBLE_MULTIPLIER: f32 = 2.0;
    /// Combo at which the renderer flashes the combo counter
    pub const COMBO_FLASH_THRESHOLD: u32 = 3;

    /// Points needed per level
    pub const POINTS_PER_LEVEL: u64 = 100;

    /// Magnet reach (horizontal, center to center) and peak pull per tick
    pub const MAGNET_RADIUS: f32 = 150.0;
    pub const MAGNET_PULL: f32 = 4.0;

    /// Particle burst shape
    pub const PARTICLE_BURST: usize = 5;
    pub const PARTICLE_SPEED: f32 = 3.0;
    pub const PARTICLE_LIFT: f32 = -2.0;
    pub const PARTICLE_GRAVITY: f32 = 0.15;
    pub const PARTICLE_DECAY: f32 = 0.04;
    pub const PARTICLE_SIZE: f32 = 6.0;
}
