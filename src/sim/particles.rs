//! Cosmetic catch particles

use glam::Vec2;

use super::state::{Entity, EntityKind, GameState, Particle};
use crate::consts::*;

/// Particle color keyed by entity kind: green, red or gold (0xRRGGBB)
pub fn kind_color(kind: EntityKind) -> u32 {
    match kind {
        EntityKind::Good => 0x22C55E,
        EntityKind::Bad => 0xEF4444,
        EntityKind::PowerUp => 0xFACC15,
    }
}

/// Emit a burst around the entity's center.
///
/// Velocities are evenly spaced around a circle with an upward bias; the first
/// particle carries the entity glyph.
pub fn emit_burst(state: &mut GameState, entity: &Entity) {
    let center = entity.center();
    let color = kind_color(entity.kind);
    for i in 0..PARTICLE_BURST {
        let angle = std::f32::consts::TAU * i as f32 / PARTICLE_BURST as f32;
        let vel = Vec2::new(
            angle.cos() * PARTICLE_SPEED,
            angle.sin() * PARTICLE_SPEED + PARTICLE_LIFT,
        );
        let id = state.next_entity_id();
        state.particles.push(Particle {
            id,
            pos: center,
            vel,
            life: 1.0,
            max_life: 1.0,
            color,
            size: PARTICLE_SIZE,
            glyph: (i == 0).then(|| entity.visual.clone()),
        });
    }
}

/// Advance every particle one tick and drop the dead ones
pub fn integrate(particles: &mut Vec<Particle>) {
    for p in particles.iter_mut() {
        p.pos += p.vel;
        p.vel.y += PARTICLE_GRAVITY;
        p.life -= PARTICLE_DECAY;
    }
    particles.retain(|p| p.life > 0.0);
}
