//! Game configuration
//!
//! Play-field geometry, lives and power-up durations. Loaded from JSON by the
//! host; every field falls back to its default when missing.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::sim::PowerUpKind;

/// Tunable game parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    // === Play-field ===
    /// Play-field width in px
    pub field_width: f32,
    /// Play-field height in px
    pub field_height: f32,

    // === Player ===
    /// Lives at the start of a run (also the cap for Heart pickups)
    pub max_lives: u8,
    pub basket_width: f32,
    pub basket_height: f32,
    /// Gap between the basket bottom and the play-field floor
    pub basket_floor_gap: f32,

    // === Entities ===
    /// Edge length of a falling entity's square bounding box
    pub entity_size: f32,

    // === Power-up durations (ms) ===
    pub shield_ms: f64,
    pub magnet_ms: f64,
    pub double_ms: f64,
    pub slow_mo_ms: f64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            field_width: 480.0,
            field_height: 640.0,

            max_lives: 3,
            basket_width: 90.0,
            basket_height: 24.0,
            basket_floor_gap: 40.0,

            entity_size: 40.0,

            shield_ms: 5000.0,
            magnet_ms: 6000.0,
            double_ms: 8000.0,
            slow_mo_ms: 5000.0,
        }
    }
}

impl GameConfig {
    /// Duration of a timed power-up, `None` for instant ones
    pub fn duration_ms(&self, kind: PowerUpKind) -> Option<f64> {
        match kind {
            PowerUpKind::Shield => Some(self.shield_ms),
            PowerUpKind::Magnet => Some(self.magnet_ms),
            PowerUpKind::Double => Some(self.double_ms),
            PowerUpKind::SlowMo => Some(self.slow_mo_ms),
            PowerUpKind::Heart | PowerUpKind::Clear => None,
        }
    }

    /// Basket top edge
    pub fn basket_y(&self) -> f32 {
        self.field_height - self.basket_height - self.basket_floor_gap
    }

    /// Reject values the simulation cannot run with
    pub fn validate(&self) -> Result<()> {
        if !(self.field_width > 0.0 && self.field_height > 0.0) {
            return Err(invalid("play-field must have positive size"));
        }
        if !(self.basket_width > 0.0 && self.basket_height > 0.0) {
            return Err(invalid("basket must have positive size"));
        }
        if self.basket_width > self.field_width {
            return Err(invalid("basket is wider than the play-field"));
        }
        if !(self.entity_size > 0.0) || self.entity_size > self.field_width {
            return Err(invalid("entity size out of range"));
        }
        if self.max_lives == 0 {
            return Err(invalid("max_lives must be at least 1"));
        }
        let durations = [
            self.shield_ms,
            self.magnet_ms,
            self.double_ms,
            self.slow_mo_ms,
        ];
        if durations.iter().any(|d| !(*d > 0.0)) {
            return Err(invalid("power-up durations must be positive"));
        }
        Ok(())
    }

    /// Parse and validate a JSON config
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from a JSON file (native only)
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Load from a JSON file, falling back to defaults on any failure
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_or_default(path: impl AsRef<std::path::Path>) -> Self {
        let path = path.as_ref();
        match Self::load(path) {
            Ok(config) => {
                log::info!("Loaded config from {}", path.display());
                config
            }
            Err(e) => {
                log::warn!("Using default config ({}): {}", path.display(), e);
                Self::default()
            }
        }
    }
}

fn invalid(reason: &str) -> Error {
    Error::InvalidConfig(reason.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert!(GameConfig::default().validate().is_ok());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let json = r#"{ "field_width": 320, "max_lives": 5 }"#;
        let config = GameConfig::from_json(json).unwrap();
        assert_eq!(config.field_width, 320.0);
        assert_eq!(config.max_lives, 5);
        assert_eq!(config.field_height, GameConfig::default().field_height);
    }

    #[test]
    fn test_rejects_wide_basket() {
        let err = GameConfig::from_json(r#"{ "field_width": 50 }"#).unwrap_err();
        assert!(matches!(err, Error::InvalidConfig(_)));
    }

    #[test]
    fn test_rejects_zero_lives() {
        let err = GameConfig::from_json(r#"{ "max_lives": 0 }"#).unwrap_err();
        assert!(matches!(err, Error::InvalidConfig(_)));
    }

    #[test]
    fn test_rejects_malformed_json() {
        let err = GameConfig::from_json("{ nope").unwrap_err();
        assert!(matches!(err, Error::Json(_)));
    }

    #[test]
    fn test_durations() {
        let config = GameConfig::default();
        assert_eq!(config.duration_ms(PowerUpKind::Shield), Some(5000.0));
        assert_eq!(config.duration_ms(PowerUpKind::Heart), None);
        assert_eq!(config.duration_ms(PowerUpKind::Clear), None);
    }

    #[test]
    fn test_load_missing_file_falls_back() {
        let config = GameConfig::load_or_default("/definitely/not/here.json");
        assert_eq!(config, GameConfig::default());
    }
}
