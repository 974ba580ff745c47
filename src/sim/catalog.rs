//! Item catalogs for spawned entities

use super::state::PowerUpKind;

/// A catalog entry: glyph shown by the renderer and its score value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ItemDef {
    pub visual: &'static str,
    pub score_value: i32,
}

/// Items worth catching
pub const GOOD_ITEMS: &[ItemDef] = &[
    ItemDef {
        visual: "🍎",
        score_value: 10,
    },
    ItemDef {
        visual: "🍊",
        score_value: 10,
    },
    ItemDef {
        visual: "🍇",
        score_value: 15,
    },
    ItemDef {
        visual: "🍓",
        score_value: 15,
    },
    ItemDef {
        visual: "🍒",
        score_value: 20,
    },
    ItemDef {
        visual: "⭐",
        score_value: 25,
    },
    ItemDef {
        visual: "💎",
        score_value: 50,
    },
];

/// Items to avoid (negative values)
pub const BAD_ITEMS: &[ItemDef] = &[
    ItemDef {
        visual: "💣",
        score_value: -30,
    },
    ItemDef {
        visual: "🦠",
        score_value: -20,
    },
    ItemDef {
        visual: "☠️",
        score_value: -50,
    },
    ItemDef {
        visual: "🌶️",
        score_value: -15,
    },
];

/// Every power-up a PowerUp entity can carry
pub const POWER_UPS: &[PowerUpKind] = &[
    PowerUpKind::Heart,
    PowerUpKind::Shield,
    PowerUpKind::Magnet,
    PowerUpKind::Double,
    PowerUpKind::SlowMo,
    PowerUpKind::Clear,
];

impl PowerUpKind {
    pub fn visual(&self) -> &'static str {
        match self {
            PowerUpKind::Heart => "❤️",
            PowerUpKind::Shield => "🛡️",
            PowerUpKind::Magnet => "🧲",
            PowerUpKind::Double => "✖️2",
            PowerUpKind::SlowMo => "⏳",
            PowerUpKind::Clear => "🧹",
        }
    }

    /// Heart and Clear act on pickup and never enter the active list
    pub fn is_instant(&self) -> bool {
        matches!(self, PowerUpKind::Heart | PowerUpKind::Clear)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_signs() {
        assert!(GOOD_ITEMS.iter().all(|i| i.score_value > 0));
        assert!(BAD_ITEMS.iter().all(|i| i.score_value < 0));
    }

    #[test]
    fn test_instant_kinds() {
        let instant: Vec<_> = POWER_UPS.iter().filter(|k| k.is_instant()).collect();
        assert_eq!(instant, vec![&PowerUpKind::Heart, &PowerUpKind::Clear]);
    }
}
