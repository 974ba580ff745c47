//! Game state and core simulation types
//!
//! One `GameState` per session. It is only ever mutated inside a tick; the
//! renderer reads it as a snapshot.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::powerups::PowerUps;
use crate::consts::BASKET_LERP;
use crate::settings::GameConfig;

/// Session lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GamePhase {
    /// Waiting for the first start command
    #[default]
    NotStarted,
    /// Active gameplay
    Playing,
    /// Frozen; the scheduler does not tick
    Paused,
    /// Lives ran out
    GameOver,
}

/// What a falling entity is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EntityKind {
    Good,
    Bad,
    PowerUp,
}

/// Power-up types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PowerUpKind {
    /// +1 life (instant)
    Heart,
    /// Bad catches cost nothing
    Shield,
    /// Good items drift toward the basket
    Magnet,
    /// Good catches score double
    Double,
    /// Everything falls slower
    SlowMo,
    /// Wipes every falling Bad item (instant)
    Clear,
}

/// Kind of the most recent scoring catch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CatchKind {
    Good,
    Bad,
}

/// A falling entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    pub id: u32,
    /// Top-left corner
    pub pos: Vec2,
    pub size: Vec2,
    /// px per tick, before SlowMo
    pub fall_speed: f32,
    pub kind: EntityKind,
    pub visual: String,
    /// Negative for Bad entities, zero for power-ups
    pub score_value: i32,
    pub power_up: Option<PowerUpKind>,
}

impl Entity {
    pub fn center(&self) -> Vec2 {
        self.pos + self.size * 0.5
    }
}

/// The player's catcher
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Basket {
    /// Top-left corner
    pub pos: Vec2,
    pub size: Vec2,
    /// Where the input layer wants the left edge to be
    pub target_x: f32,
}

impl Basket {
    /// Basket centered horizontally on the floor line
    pub fn new(config: &GameConfig) -> Self {
        let size = Vec2::new(config.basket_width, config.basket_height);
        let x = (config.field_width - size.x) / 2.0;
        Self {
            pos: Vec2::new(x, config.basket_y()),
            size,
            target_x: x,
        }
    }

    pub fn center(&self) -> Vec2 {
        self.pos + self.size * 0.5
    }

    /// First-order lag toward `target_x`, clamped inside the play-field
    pub fn ease_toward_target(&mut self, field_width: f32) {
        self.pos.x += (self.target_x - self.pos.x) * BASKET_LERP;
        let max_x = (field_width - self.size.x).max(0.0);
        self.pos.x = self.pos.x.clamp(0.0, max_x);
    }
}

/// A cosmetic particle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Particle {
    pub id: u32,
    pub pos: Vec2,
    pub vel: Vec2,
    /// 0-1, decreases every tick
    pub life: f32,
    pub max_life: f32,
    /// 0xRRGGBB
    pub color: u32,
    pub size: f32,
    /// The caught entity's glyph, on one particle per burst
    pub glyph: Option<String>,
}

/// Something that happened during a tick
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Entity caught by the basket; `points` is the applied score delta
    Caught {
        id: u32,
        kind: EntityKind,
        points: i64,
    },
    /// Entity fell past the floor
    Missed { id: u32, kind: EntityKind },
    PowerUpActivated(PowerUpKind),
    PowerUpExpired(PowerUpKind),
    /// A Clear pickup removed this many Bad entities
    Cleared { removed: usize },
    NewHighScore(u64),
    GameOver { score: u64 },
}

/// Complete game state (deterministic, serializable)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    pub config: GameConfig,
    pub phase: GamePhase,
    pub score: u64,
    pub high_score: u64,
    /// Falling entities (sorted by id)
    pub objects: Vec<Entity>,
    pub basket: Basket,
    pub lives: u8,
    pub max_lives: u8,
    pub level: u32,
    pub combo: u32,
    pub max_combo: u32,
    pub last_catch: Option<CatchKind>,
    pub active_power_ups: PowerUps,
    pub total_catches: u32,
    /// Seconds of active play this run
    pub play_time: f32,
    /// Visual particles (not gameplay-affecting)
    pub particles: Vec<Particle>,
    /// Ticks simulated this run
    pub tick_index: u64,
    /// Tick on which `last_catch` was set
    pub last_catch_tick: Option<u64>,
    /// Clock value (ms) of the last spawn
    pub last_spawn_at: f64,
    /// Clock value (ms) of the previous tick
    pub last_tick_at: Option<f64>,
    /// Next entity ID
    next_id: u32,
}

impl GameState {
    /// Fresh, not yet started state
    pub fn new(config: GameConfig, high_score: u64) -> Self {
        let basket = Basket::new(&config);
        let max_lives = config.max_lives;
        Self {
            config,
            phase: GamePhase::NotStarted,
            score: 0,
            high_score,
            objects: Vec::new(),
            basket,
            lives: max_lives,
            max_lives,
            level: 1,
            combo: 0,
            max_combo: 0,
            last_catch: None,
            active_power_ups: PowerUps::default(),
            total_catches: 0,
            play_time: 0.0,
            particles: Vec::new(),
            tick_index: 0,
            last_catch_tick: None,
            last_spawn_at: 0.0,
            last_tick_at: None,
            next_id: 1,
        }
    }

    /// Reset everything but the high score and enter `Playing`
    pub fn begin_run(&mut self, now: f64) {
        let high_score = self.high_score;
        *self = Self::new(self.config.clone(), high_score);
        self.phase = GamePhase::Playing;
        self.last_spawn_at = now;
        self.last_tick_at = Some(now);
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id = self.next_id.wrapping_add(1);
        id
    }

    pub fn is_playing(&self) -> bool {
        self.phase == GamePhase::Playing
    }

    pub fn is_paused(&self) -> bool {
        self.phase == GamePhase::Paused
    }

    /// True once a run has begun, including after game over
    pub fn game_started(&self) -> bool {
        self.phase != GamePhase::NotStarted
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    /// Ensure entities are sorted by ID for deterministic iteration
    pub fn normalize_order(&mut self) {
        self.objects.sort_by_key(|e| e.id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_not_started() {
        let state = GameState::new(GameConfig::default(), 120);
        assert_eq!(state.phase, GamePhase::NotStarted);
        assert!(!state.game_started());
        assert!(!state.is_playing());
        assert_eq!(state.lives, 3);
        assert_eq!(state.level, 1);
        assert_eq!(state.high_score, 120);
    }

    #[test]
    fn test_begin_run_preserves_high_score() {
        let mut state = GameState::new(GameConfig::default(), 300);
        state.score = 80;
        state.combo = 4;
        state.lives = 1;
        state.phase = GamePhase::GameOver;
        state.begin_run(1000.0);
        assert!(state.is_playing());
        assert_eq!(state.score, 0);
        assert_eq!(state.combo, 0);
        assert_eq!(state.lives, 3);
        assert_eq!(state.high_score, 300);
        assert_eq!(state.last_spawn_at, 1000.0);
    }

    #[test]
    fn test_basket_eases_and_clamps() {
        let config = GameConfig::default();
        let mut basket = Basket::new(&config);
        basket.pos.x = 0.0;
        basket.target_x = 100.0;
        basket.ease_toward_target(config.field_width);
        assert!((basket.pos.x - 20.0).abs() < 1e-5);

        basket.target_x = 10_000.0;
        for _ in 0..100 {
            basket.ease_toward_target(config.field_width);
        }
        assert_eq!(basket.pos.x, config.field_width - basket.size.x);

        basket.target_x = -500.0;
        for _ in 0..100 {
            basket.ease_toward_target(config.field_width);
        }
        assert_eq!(basket.pos.x, 0.0);
    }

    #[test]
    fn test_entity_ids_increase() {
        let mut state = GameState::new(GameConfig::default(), 0);
        let a = state.next_entity_id();
        let b = state.next_entity_id();
        assert!(b > a);
    }
}
