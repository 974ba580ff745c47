//! Presentation signals derived from state
//!
//! Flash effects are read off the snapshot each tick instead of being driven
//! by wall-clock timers. The renderer decides how long to show them.

use serde::{Deserialize, Serialize};

use super::state::{CatchKind, GameState};
use crate::consts::COMBO_FLASH_THRESHOLD;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Signals {
    /// A Good catch on this tick pushed the combo to the flash threshold or beyond
    pub combo_flash: bool,
    /// Kind of catch made on this tick, if any
    pub flash: Option<CatchKind>,
    /// Ticks since the last Good/Bad catch
    pub ticks_since_catch: Option<u64>,
}

impl Signals {
    pub fn derive(state: &GameState) -> Self {
        let ticks_since_catch = state
            .last_catch_tick
            .map(|t| state.tick_index.saturating_sub(t));
        let this_tick = ticks_since_catch == Some(0);
        let flash = if this_tick { state.last_catch } else { None };
        Self {
            combo_flash: flash == Some(CatchKind::Good) && state.combo >= COMBO_FLASH_THRESHOLD,
            flash,
            ticks_since_catch,
        }
    }
}
