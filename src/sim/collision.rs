//! Collision detection and catch resolution
//!
//! Entities and the basket are axis-aligned boxes. A catch applies the
//! scoring, life and power-up rules for the caught entity's kind.

use glam::Vec2;

use super::particles::emit_burst;
use super::state::{Basket, CatchKind, Entity, EntityKind, GameEvent, GameState, PowerUpKind};
use crate::consts::*;

/// Strict AABB overlap (touching edges do not count)
#[inline]
pub fn aabb_overlap(a_pos: Vec2, a_size: Vec2, b_pos: Vec2, b_size: Vec2) -> bool {
    a_pos.x < b_pos.x + b_size.x
        && a_pos.x + a_size.x > b_pos.x
        && a_pos.y < b_pos.y + b_size.y
        && a_pos.y + a_size.y > b_pos.y
}

/// Check whether an entity overlaps the basket
pub fn entity_basket_collision(entity: &Entity, basket: &Basket) -> bool {
    aabb_overlap(entity.pos, entity.size, basket.pos, basket.size)
}

/// Combo score multiplier: +0.1 per combo step, capped at 2.5
pub fn combo_multiplier(combo: u32) -> f32 {
    (1.0 + combo as f32 * COMBO_STEP).min(COMBO_MAX_MULTIPLIER)
}

/// Points for a Good catch: `floor(value * combo_multiplier * double)`.
///
/// The multiplier is taken in whole tenths so the floor is exact.
pub fn good_catch_points(score_value: i32, combo: u32, double: bool) -> i64 {
    let tenths = (combo_multiplier(combo) * 10.0).round() as i64;
    let double = if double { DOUBLE_MULTIPLIER as i64 } else { 1 };
    (score_value as i64 * tenths * double).div_euclid(10)
}

/// Horizontal magnet pull for one tick (signed, toward the basket).
///
/// Zero outside `MAGNET_RADIUS`. Never overshoots the basket center.
pub fn magnet_pull(entity_center_x: f32, basket_center_x: f32) -> f32 {
    let dx = basket_center_x - entity_center_x;
    let distance = dx.abs();
    if distance >= MAGNET_RADIUS || distance == 0.0 {
        return 0.0;
    }
    let pull = MAGNET_PULL * (1.0 - distance / MAGNET_RADIUS);
    pull.min(distance).copysign(dx)
}

/// Result of resolving a single catch
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CatchOutcome {
    /// A Clear pickup was caught; wipe Bad entities after this tick's catches
    pub clear_pending: bool,
}

/// Apply the rules for catching `entity`. The caller removes it from the field.
pub fn resolve_catch(
    state: &mut GameState,
    entity: &Entity,
    now: f64,
    events: &mut Vec<GameEvent>,
) -> CatchOutcome {
    let mut outcome = CatchOutcome::default();
    emit_burst(state, entity);
    state.total_catches += 1;

    let points = match entity.kind {
        EntityKind::PowerUp => {
            if let Some(kind) = entity.power_up {
                match kind {
                    PowerUpKind::Heart => {
                        state.lives = state.lives.saturating_add(1).min(state.max_lives);
                    }
                    PowerUpKind::Clear => outcome.clear_pending = true,
                    timed => {
                        if let Some(duration) = state.config.duration_ms(timed) {
                            state.active_power_ups.activate(timed, now, duration);
                        }
                    }
                }
                log::debug!("Power-up {:?} activated", kind);
                events.push(GameEvent::PowerUpActivated(kind));
            }
            0
        }

        EntityKind::Good => {
            let double = state.active_power_ups.has_double();
            let points = good_catch_points(entity.score_value, state.combo, double);
            state.score = state.score.saturating_add(points.max(0) as u64);
            state.combo += 1;
            state.max_combo = state.max_combo.max(state.combo);
            state.last_catch = Some(CatchKind::Good);
            state.last_catch_tick = Some(state.tick_index);
            points
        }

        EntityKind::Bad => {
            let before = state.score as i64;
            if !state.active_power_ups.has_shield() {
                let penalty = entity.score_value as i64;
                state.score = before.saturating_add(penalty).max(0) as u64;
                state.lives = state.lives.saturating_sub(1);
            }
            // A shielded hit still breaks the streak
            state.combo = 0;
            state.last_catch = Some(CatchKind::Bad);
            state.last_catch_tick = Some(state.tick_index);
            state.score as i64 - before
        }
    };

    events.push(GameEvent::Caught {
        id: entity.id,
        kind: entity.kind,
        points,
    });
    outcome
}

/// Remove every falling Bad entity, returning how many went
pub fn clear_bad_entities(objects: &mut Vec<Entity>) -> usize {
    let before = objects.len();
    objects.retain(|e| e.kind != EntityKind::Bad);
    before - objects.len()
}
