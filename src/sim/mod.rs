//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Injected clock values and RNG only
//! - Stable iteration order (by entity ID)
//! - No rendering, storage or platform dependencies

pub mod catalog;
pub mod collision;
pub mod difficulty;
pub mod particles;
pub mod powerups;
pub mod rng;
pub mod signals;
pub mod spawner;
pub mod state;
pub mod tick;

pub use collision::{aabb_overlap, combo_multiplier, entity_basket_collision, magnet_pull};
pub use difficulty::{spawn_interval_ms, speed_bonus_percent};
pub use powerups::{ActivePowerUp, PowerUps};
pub use rng::{RandomSource, ScriptedRng, SeededRng};
pub use signals::Signals;
pub use state::{
    Basket, CatchKind, Entity, EntityKind, GameEvent, GamePhase, GameState, Particle, PowerUpKind,
};
pub use tick::{TickInput, step, tick};
