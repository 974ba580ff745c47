//! Simulation tick
//!
//! One discrete update of the whole game, invoked once per animation frame
//! while playing. Order per tick:
//! expire buffs, spawn check, basket easing, motion, catches, off-screen
//! cleanup, derived state.

use super::collision::{clear_bad_entities, entity_basket_collision, magnet_pull, resolve_catch};
use super::difficulty::{level_for_score, spawn_interval_ms};
use super::particles;
use super::rng::RandomSource;
use super::spawner::spawn_entity;
use super::state::{EntityKind, GameEvent, GamePhase, GameState};
use crate::consts::SLOW_MO_FACTOR;

/// Input for a single tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Clock value (ms) for this tick
    pub now: f64,
    /// Latest basket target (left edge), if the input layer wrote one
    pub target_x: Option<f32>,
}

/// Advance the game state by one tick, returning what happened
pub fn tick(
    state: &mut GameState,
    input: &TickInput,
    rng: &mut dyn RandomSource,
) -> Vec<GameEvent> {
    let mut events = Vec::new();

    // Only a running game is simulated
    if state.phase != GamePhase::Playing {
        return events;
    }

    let now = input.now;
    state.tick_index += 1;
    if let Some(last) = state.last_tick_at {
        state.play_time += ((now - last).max(0.0) / 1000.0) as f32;
    }
    state.last_tick_at = Some(now);

    // --- BUFF EXPIRY ---
    for kind in state.active_power_ups.expire(now) {
        log::debug!("Power-up {:?} expired", kind);
        events.push(GameEvent::PowerUpExpired(kind));
    }

    // --- SPAWN ---
    if now - state.last_spawn_at >= spawn_interval_ms(state.score) as f64 {
        let id = state.next_entity_id();
        let entity = spawn_entity(
            id,
            state.score,
            &state.active_power_ups,
            now,
            state.config.field_width,
            state.config.entity_size,
            rng,
        );
        state.objects.push(entity);
        state.last_spawn_at = now;
    }

    // --- BASKET ---
    // A non-finite target would stick in the easing forever
    if let Some(target) = input.target_x.filter(|x| x.is_finite()) {
        state.basket.target_x = target;
    }
    state.basket.ease_toward_target(state.config.field_width);

    // --- MOTION ---
    let slow = if state.active_power_ups.has_slow_mo() {
        SLOW_MO_FACTOR
    } else {
        1.0
    };
    let magnet = state.active_power_ups.has_magnet();
    let basket_cx = state.basket.center().x;
    for entity in &mut state.objects {
        if magnet && entity.kind == EntityKind::Good {
            entity.pos.x += magnet_pull(entity.center().x, basket_cx);
        }
        entity.pos.y += entity.fall_speed * slow;
    }
    particles::integrate(&mut state.particles);

    // --- CATCHES ---
    let objects = std::mem::take(&mut state.objects);
    let mut remaining = Vec::with_capacity(objects.len());
    let mut clear_pending = false;
    for entity in objects {
        // Nothing else resolves once the last life is gone
        if state.lives == 0 || !entity_basket_collision(&entity, &state.basket) {
            remaining.push(entity);
            continue;
        }
        let outcome = resolve_catch(state, &entity, now, &mut events);
        clear_pending |= outcome.clear_pending;
    }
    state.objects = remaining;

    if clear_pending {
        let removed = clear_bad_entities(&mut state.objects);
        log::debug!("Clear removed {} bad entities", removed);
        events.push(GameEvent::Cleared { removed });
    }

    // --- OFF-SCREEN ---
    if state.lives > 0 {
        let floor = state.config.field_height;
        let objects = std::mem::take(&mut state.objects);
        for entity in objects {
            if entity.pos.y <= floor {
                state.objects.push(entity);
                continue;
            }
            if entity.kind == EntityKind::Good {
                state.combo = 0;
            }
            events.push(GameEvent::Missed {
                id: entity.id,
                kind: entity.kind,
            });
        }
    }

    // --- DERIVED ---
    state.level = level_for_score(state.score);
    if state.score > state.high_score {
        state.high_score = state.score;
        events.push(GameEvent::NewHighScore(state.score));
    }
    if state.lives == 0 {
        state.phase = GamePhase::GameOver;
        log::info!(
            "Game over: score={} max_combo={} catches={}",
            state.score,
            state.max_combo,
            state.total_catches
        );
        events.push(GameEvent::GameOver { score: state.score });
    }

    // Ensure deterministic ordering
    state.normalize_order();
    events
}

/// Pure form of [`tick`]: the input state is left untouched
pub fn step(
    state: &GameState,
    input: &TickInput,
    rng: &mut dyn RandomSource,
) -> (GameState, Vec<GameEvent>) {
    let mut next = state.clone();
    let events = tick(&mut next, input, rng);
    (next, events)
}
