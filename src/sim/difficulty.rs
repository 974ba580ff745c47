//! Difficulty curves
//!
//! Pure functions of cumulative score. No hidden state, so any point of a run
//! can be replayed from the score alone.

use crate::consts::*;

/// Stepwise fall-speed bonus in percent: +15 every 50 points, uncapped
pub fn speed_bonus_percent(score: u64) -> u64 {
    (score / SPEED_STEP_POINTS) * SPEED_STEP_PERCENT
}

/// Milliseconds between spawns: 800 minus 50 every 30 points, floored at 300
pub fn spawn_interval_ms(score: u64) -> u64 {
    let reduction = (score / SPAWN_STEP_POINTS).saturating_mul(SPAWN_STEP_MS);
    SPAWN_INTERVAL_BASE_MS
        .saturating_sub(reduction)
        .max(SPAWN_INTERVAL_MIN_MS)
}

/// Probability that a spawn is a Bad entity
pub fn bad_chance(score: u64) -> f32 {
    let raw = BAD_CHANCE_BASE + (score as f32 / 500.0) * BAD_CHANCE_GROWTH;
    raw.min(BAD_CHANCE_MAX)
}

/// Probability that a spawn is a power-up.
///
/// Capped at `1 - bad_chance` so the three bands always partition `[0, 1)`.
pub fn power_up_chance(score: u64) -> f32 {
    let raw = POWER_UP_CHANCE_BASE + (score as f32 / 1000.0) * POWER_UP_CHANCE_GROWTH;
    raw.min(1.0 - bad_chance(score))
}

/// Probability that a spawn is a Good entity (the remaining mass)
pub fn good_chance(score: u64) -> f32 {
    (1.0 - bad_chance(score) - power_up_chance(score)).max(0.0)
}

/// Level shown to the player: one per 100 points, starting at 1
pub fn level_for_score(score: u64) -> u32 {
    (score / POINTS_PER_LEVEL + 1).min(u32::MAX as u64) as u32
}

/// Spawn fall speed before jitter
pub fn base_fall_speed(score: u64, slow_mo: bool) -> f32 {
    let bonus = speed_bonus_percent(score) as f32 / 100.0;
    let slow = if slow_mo { SLOW_MO_FACTOR } else { 1.0 };
    BASE_FALL_SPEED * (1.0 + bonus) * slow
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_speed_bonus_steps() {
        assert_eq!(speed_bonus_percent(0), 0);
        assert_eq!(speed_bonus_percent(49), 0);
        assert_eq!(speed_bonus_percent(50), 15);
        assert_eq!(speed_bonus_percent(99), 15);
        assert_eq!(speed_bonus_percent(100), 30);
        assert_eq!(speed_bonus_percent(1000), 300);
    }

    #[test]
    fn test_spawn_interval() {
        assert_eq!(spawn_interval_ms(0), 800);
        assert_eq!(spawn_interval_ms(29), 800);
        assert_eq!(spawn_interval_ms(30), 750);
        assert_eq!(spawn_interval_ms(90), 650);
        assert_eq!(spawn_interval_ms(300), 300);
        assert_eq!(spawn_interval_ms(10_000), 300);
        assert_eq!(spawn_interval_ms(u64::MAX), 300);
    }

    #[test]
    fn test_level() {
        assert_eq!(level_for_score(0), 1);
        assert_eq!(level_for_score(99), 1);
        assert_eq!(level_for_score(100), 2);
        assert_eq!(level_for_score(250), 3);
    }

    #[test]
    fn test_chances_at_zero() {
        assert!((bad_chance(0) - 0.25).abs() < 1e-6);
        assert!((power_up_chance(0) - 0.08).abs() < 1e-6);
        assert!((good_chance(0) - 0.67).abs() < 1e-6);
    }

    #[test]
    fn test_bad_chance_caps() {
        assert!((bad_chance(10_000) - 0.45).abs() < 1e-6);
    }

    #[test]
    fn test_base_fall_speed() {
        assert!((base_fall_speed(0, false) - 4.0).abs() < 1e-6);
        assert!((base_fall_speed(50, false) - 4.6).abs() < 1e-5);
        assert!((base_fall_speed(0, true) - 1.6).abs() < 1e-6);
    }

    proptest! {
        #[test]
        fn prop_probabilities_partition(score in 0u64..5_000_000) {
            let bad = bad_chance(score);
            let pu = power_up_chance(score);
            let good = good_chance(score);
            prop_assert!((0.0..=1.0).contains(&bad));
            prop_assert!((0.0..=1.0).contains(&pu));
            prop_assert!((0.0..=1.0).contains(&good));
            prop_assert!(bad <= 0.45 + 1e-6);
            prop_assert!((bad + pu + good - 1.0).abs() < 1e-4);
        }

        #[test]
        fn prop_power_up_chance_monotonic(a in 0u64..5_000_000, delta in 0u64..10_000) {
            prop_assert!(power_up_chance(a + delta) >= power_up_chance(a));
        }

        #[test]
        fn prop_spawn_interval_bounded(score in any::<u64>()) {
            let ms = spawn_interval_ms(score);
            prop_assert!((300..=800).contains(&ms));
        }
    }
}
