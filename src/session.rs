//! Session scheduler
//!
//! Owns the single live `GameState` together with the injected clock, RNG and
//! high-score store. The host calls [`Session::frame`] once per animation
//! frame; everything else is a command.

use std::cell::Cell;
use std::rc::Rc;

use crate::highscores::HighScoreStore;
use crate::settings::GameConfig;
use crate::sim::{GameEvent, GamePhase, GameState, RandomSource, Signals, TickInput, tick};

/// Monotonic millisecond clock
pub trait Clock {
    fn now_ms(&self) -> f64;
}

/// Hand-driven clock for tests and replays. Clones share the same time.
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    now: Rc<Cell<f64>>,
}

impl ManualClock {
    pub fn new(start_ms: f64) -> Self {
        Self {
            now: Rc::new(Cell::new(start_ms)),
        }
    }

    pub fn advance(&self, ms: f64) {
        self.now.set(self.now.get() + ms);
    }

    pub fn set(&self, ms: f64) {
        self.now.set(ms);
    }
}

impl Clock for ManualClock {
    fn now_ms(&self) -> f64 {
        self.now.get()
    }
}

/// Wall clock backed by `Instant` (native only)
#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug, Clone)]
pub struct SystemClock {
    origin: std::time::Instant,
}

#[cfg(not(target_arch = "wasm32"))]
impl Default for SystemClock {
    fn default() -> Self {
        Self {
            origin: std::time::Instant::now(),
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl Clock for SystemClock {
    fn now_ms(&self) -> f64 {
        self.origin.elapsed().as_secs_f64() * 1000.0
    }
}

/// One game session
pub struct Session<C: Clock, S: HighScoreStore, R: RandomSource> {
    state: GameState,
    clock: C,
    store: S,
    rng: R,
    /// Last basket target written by the input layer (last write wins)
    basket_target: Option<f32>,
    paused_at: Option<f64>,
    complete: bool,
}

impl<C: Clock, S: HighScoreStore, R: RandomSource> Session<C, S, R> {
    /// Create a session, reading the stored high score once
    pub fn new(config: GameConfig, clock: C, store: S, rng: R) -> Self {
        let high_score = store.read();
        Self {
            state: GameState::new(config, high_score),
            clock,
            store,
            rng,
            basket_target: None,
            paused_at: None,
            complete: false,
        }
    }

    /// Read-only view of the current state
    pub fn snapshot(&self) -> &GameState {
        &self.state
    }

    /// Flash/indicator signals for the current snapshot
    pub fn signals(&self) -> Signals {
        Signals::derive(&self.state)
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// NotStarted -> Playing
    pub fn start(&mut self) {
        if self.state.phase != GamePhase::NotStarted {
            log::debug!("start ignored in phase {:?}", self.state.phase);
            return;
        }
        self.begin_run();
        log::info!("Game started (high score {})", self.state.high_score);
    }

    /// Playing -> Paused
    pub fn pause(&mut self) {
        if self.state.phase != GamePhase::Playing {
            return;
        }
        self.state.phase = GamePhase::Paused;
        self.paused_at = Some(self.clock.now_ms());
        log::info!("Game paused");
    }

    /// Paused -> Playing, with every game clock frozen across the pause
    pub fn resume(&mut self) {
        if self.state.phase != GamePhase::Paused {
            return;
        }
        let now = self.clock.now_ms();
        let paused_for = self.paused_at.take().map_or(0.0, |at| (now - at).max(0.0));
        self.state.last_spawn_at += paused_for;
        if let Some(last) = self.state.last_tick_at.as_mut() {
            *last += paused_for;
        }
        self.state.active_power_ups.shift(paused_for);
        self.state.phase = GamePhase::Playing;
        log::info!("Game resumed after {:.0}ms", paused_for);
    }

    /// Any started phase -> fresh Playing run, keeping the high score
    pub fn restart(&mut self) {
        if self.state.phase == GamePhase::NotStarted {
            self.start();
            return;
        }
        self.begin_run();
        log::info!("Game restarted (high score {})", self.state.high_score);
    }

    /// Host finished loading; no further frames are simulated
    pub fn complete(&mut self) {
        if !self.complete {
            self.complete = true;
            log::info!(
                "Loading complete, session stopped at score {}",
                self.state.score
            );
        }
    }

    pub fn is_complete(&self) -> bool {
        self.complete
    }

    /// Record where the basket's left edge should head. Non-finite values are
    /// dropped and the previous target stands.
    pub fn set_basket_target(&mut self, x: f32) {
        if !x.is_finite() {
            log::debug!("Ignoring non-finite basket target {}", x);
            return;
        }
        self.basket_target = Some(x);
    }

    /// Run one simulation step if the game is live
    pub fn frame(&mut self) -> Vec<GameEvent> {
        if self.complete || !self.state.is_playing() {
            return Vec::new();
        }
        let input = TickInput {
            now: self.clock.now_ms(),
            target_x: self.basket_target.take(),
        };
        let events = tick(&mut self.state, &input, &mut self.rng);

        let new_high = events.iter().rev().find_map(|e| match e {
            GameEvent::NewHighScore(s) => Some(*s),
            _ => None,
        });
        if let Some(score) = new_high {
            // A dropped write only costs persistence; the run goes on
            if let Err(e) = self.store.write(score) {
                log::warn!("Failed to save high score {}: {}", score, e);
            } else {
                log::debug!("New high score {}", score);
            }
        }
        events
    }

    fn begin_run(&mut self) {
        let now = self.clock.now_ms();
        self.state.begin_run(now);
        self.paused_at = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{Error, Result};
    use crate::highscores::MemoryStore;
    use crate::sim::{PowerUpKind, ScriptedRng};

    struct FailingStore;

    impl HighScoreStore for FailingStore {
        fn read(&self) -> u64 {
            0
        }

        fn write(&mut self, _score: u64) -> Result<()> {
            Err(Error::StorageUnavailable)
        }
    }

    fn session(clock: &ManualClock) -> Session<ManualClock, MemoryStore, ScriptedRng> {
        Session::new(
            GameConfig::default(),
            clock.clone(),
            MemoryStore::new(50),
            ScriptedRng::constant(0.5),
        )
    }

    #[test]
    fn test_reads_high_score_once() {
        let clock = ManualClock::new(0.0);
        let s = session(&clock);
        assert_eq!(s.snapshot().high_score, 50);
        assert_eq!(s.snapshot().phase, GamePhase::NotStarted);
    }

    #[test]
    fn test_frame_before_start_is_noop() {
        let clock = ManualClock::new(0.0);
        let mut s = session(&clock);
        clock.advance(1000.0);
        assert!(s.frame().is_empty());
        assert_eq!(s.snapshot().tick_index, 0);
    }

    #[test]
    fn test_pause_freezes_and_resume_shifts_clocks() {
        let clock = ManualClock::new(0.0);
        let mut s = session(&clock);
        s.start();
        clock.advance(400.0);
        s.frame();
        s.pause();
        clock.advance(10_000.0);
        assert!(s.frame().is_empty());
        s.resume();
        assert!(s.snapshot().is_playing());
        // 400ms of play elapsed, so the first spawn is 400ms away
        assert_eq!(s.snapshot().last_spawn_at, 10_000.0);
        clock.advance(399.0);
        s.frame();
        assert!(s.snapshot().objects.is_empty());
        clock.advance(1.0);
        s.frame();
        assert_eq!(s.snapshot().objects.len(), 1);
        assert!((s.snapshot().play_time - 0.8).abs() < 1e-4);
    }

    #[test]
    fn test_resume_extends_power_ups() {
        let clock = ManualClock::new(0.0);
        let mut s = session(&clock);
        s.start();
        s.state
            .active_power_ups
            .activate(PowerUpKind::Shield, 0.0, 5000.0);
        clock.set(1000.0);
        s.pause();
        clock.set(9000.0);
        s.resume();
        let shield = s.snapshot().active_power_ups.get(PowerUpKind::Shield);
        assert_eq!(shield.map(|p| p.expires_at), Some(13_000.0));
    }

    #[test]
    fn test_complete_stops_frames() {
        let clock = ManualClock::new(0.0);
        let mut s = session(&clock);
        s.start();
        s.complete();
        clock.advance(1000.0);
        s.frame();
        assert_eq!(s.snapshot().tick_index, 0);
        assert!(s.is_complete());
    }

    #[test]
    fn test_failed_high_score_write_is_not_fatal() {
        let clock = ManualClock::new(0.0);
        let mut s = Session::new(
            GameConfig::default(),
            clock.clone(),
            FailingStore,
            ScriptedRng::constant(0.5),
        );
        s.start();
        s.state.score = 10;
        clock.advance(16.0);
        let events = s.frame();
        assert!(events.contains(&GameEvent::NewHighScore(10)));
        assert_eq!(s.snapshot().high_score, 10);
        assert!(s.snapshot().is_playing());
    }

    #[test]
    fn test_basket_target_last_write_wins() {
        let clock = ManualClock::new(0.0);
        let mut s = session(&clock);
        s.start();
        s.set_basket_target(10.0);
        s.set_basket_target(300.0);
        clock.advance(16.0);
        s.frame();
        assert_eq!(s.snapshot().basket.target_x, 300.0);
    }

    #[test]
    fn test_non_finite_basket_target_dropped() {
        let clock = ManualClock::new(0.0);
        let mut s = session(&clock);
        s.start();
        s.set_basket_target(250.0);
        s.set_basket_target(f32::NAN);
        clock.advance(16.0);
        s.frame();
        assert_eq!(s.snapshot().basket.target_x, 250.0);
        assert!(s.snapshot().basket.pos.x.is_finite());

        // Later valid targets still steer and the basket still catches
        s.set_basket_target(f32::INFINITY);
        s.set_basket_target(200.0);
        for _ in 0..600 {
            clock.advance(16.0);
            s.frame();
        }
        let basket = &s.snapshot().basket;
        assert!((basket.pos.x - 200.0).abs() < 1e-3);
        assert!(s.snapshot().total_catches > 0);
    }
}
