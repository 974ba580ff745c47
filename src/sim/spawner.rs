//! Entity spawner
//!
//! Draw order per spawn is fixed: classification, item/kind pick, speed
//! jitter, x position. Scripted RNGs in tests rely on it.

use glam::Vec2;

use super::catalog::{BAD_ITEMS, GOOD_ITEMS, POWER_UPS};
use super::difficulty::{bad_chance, base_fall_speed, good_chance, power_up_chance};
use super::powerups::PowerUps;
use super::rng::{RandomSource, pick_weighted};
use super::state::{Entity, EntityKind, PowerUpKind};
use crate::consts::{FALL_SPEED_JITTER, MAX_FALL_SPEED};

/// Classify a spawn: PowerUp band first, then Good, then Bad
pub fn classify(score: u64, roll: f32) -> EntityKind {
    let bands = [
        (EntityKind::PowerUp, power_up_chance(score)),
        (EntityKind::Good, good_chance(score)),
        (EntityKind::Bad, bad_chance(score)),
    ];
    pick_weighted(&bands, roll).unwrap_or(EntityKind::Bad)
}

/// Fall speed for a new entity, capped at `MAX_FALL_SPEED`
pub fn fall_speed(score: u64, slow_mo: bool, jitter_roll: f32) -> f32 {
    let speed = base_fall_speed(score, slow_mo) + jitter_roll * FALL_SPEED_JITTER;
    speed.min(MAX_FALL_SPEED)
}

/// Create one new entity just above the visible play-field
pub fn spawn_entity(
    id: u32,
    score: u64,
    power_ups: &PowerUps,
    now: f64,
    field_width: f32,
    entity_size: f32,
    rng: &mut dyn RandomSource,
) -> Entity {
    let slow_mo = power_ups.has_at(PowerUpKind::SlowMo, now);

    let kind = classify(score, rng.next_unit());
    let (visual, score_value, power_up) = match kind {
        EntityKind::PowerUp => {
            let pu = POWER_UPS[rng.index(POWER_UPS.len())];
            (pu.visual().to_string(), 0, Some(pu))
        }
        EntityKind::Good => {
            let item = GOOD_ITEMS[rng.index(GOOD_ITEMS.len())];
            (item.visual.to_string(), item.score_value, None)
        }
        EntityKind::Bad => {
            let item = BAD_ITEMS[rng.index(BAD_ITEMS.len())];
            (item.visual.to_string(), item.score_value, None)
        }
    };

    let fall_speed = fall_speed(score, slow_mo, rng.next_unit());
    let x = rng.range(0.0, (field_width - entity_size).max(0.0));

    Entity {
        id,
        pos: Vec2::new(x, -entity_size),
        size: Vec2::splat(entity_size),
        fall_speed,
        kind,
        visual,
        score_value,
        power_up,
    }
}
