//! Active power-up registry
//!
//! Holds at most one entry per timed kind. Re-acquiring a kind overwrites its
//! expiry instead of stacking a second entry.

use serde::{Deserialize, Serialize};

use super::state::PowerUpKind;

/// A timed buff currently in effect
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ActivePowerUp {
    pub kind: PowerUpKind,
    /// Clock value (ms) at which the buff ends
    pub expires_at: f64,
    /// Full duration (ms), for HUD progress bars
    pub duration: f64,
}

impl ActivePowerUp {
    /// Fraction of the buff left at `now`, in [0, 1]
    pub fn remaining_fraction(&self, now: f64) -> f32 {
        if self.duration <= 0.0 {
            return 0.0;
        }
        ((self.expires_at - now) / self.duration).clamp(0.0, 1.0) as f32
    }
}

/// The registry of live timed buffs
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PowerUps {
    entries: Vec<ActivePowerUp>,
}

impl PowerUps {
    /// Drop every entry with `expires_at <= now`, returning the expired kinds
    pub fn expire(&mut self, now: f64) -> Vec<PowerUpKind> {
        let mut expired = Vec::new();
        self.entries.retain(|p| {
            let live = p.expires_at > now;
            if !live {
                expired.push(p.kind);
            }
            live
        });
        expired
    }

    /// Start or refresh a timed buff. Instant kinds are ignored.
    pub fn activate(&mut self, kind: PowerUpKind, now: f64, duration: f64) {
        if kind.is_instant() {
            return;
        }
        let expires_at = now + duration;
        if let Some(existing) = self.entries.iter_mut().find(|p| p.kind == kind) {
            existing.expires_at = expires_at;
            existing.duration = duration;
        } else {
            self.entries.push(ActivePowerUp {
                kind,
                expires_at,
                duration,
            });
        }
    }

    /// Whether `kind` has a live entry
    pub fn has(&self, kind: PowerUpKind) -> bool {
        self.entries.iter().any(|p| p.kind == kind)
    }

    /// Whether `kind` has an entry that is still in the future at `now`
    pub fn has_at(&self, kind: PowerUpKind, now: f64) -> bool {
        self.entries
            .iter()
            .any(|p| p.kind == kind && p.expires_at > now)
    }

    pub fn has_shield(&self) -> bool {
        self.has(PowerUpKind::Shield)
    }

    pub fn has_magnet(&self) -> bool {
        self.has(PowerUpKind::Magnet)
    }

    pub fn has_double(&self) -> bool {
        self.has(PowerUpKind::Double)
    }

    pub fn has_slow_mo(&self) -> bool {
        self.has(PowerUpKind::SlowMo)
    }

    pub fn get(&self, kind: PowerUpKind) -> Option<&ActivePowerUp> {
        self.entries.iter().find(|p| p.kind == kind)
    }

    /// Push every expiry forward (used to freeze buffs across a pause)
    pub fn shift(&mut self, delta_ms: f64) {
        for p in &mut self.entries {
            p.expires_at += delta_ms;
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &ActivePowerUp> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
