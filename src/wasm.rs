//! Browser bindings
//!
//! Exposes a session to the host page. The page drives `frame()` from its
//! animation loop and renders from the JSON snapshot.

use wasm_bindgen::prelude::*;

use crate::highscores::LocalStorageStore;
use crate::session::{Clock, Session};
use crate::settings::GameConfig;
use crate::sim::SeededRng;

/// `performance.now()`, falling back to `Date.now()`
struct PerformanceClock;

impl Clock for PerformanceClock {
    fn now_ms(&self) -> f64 {
        web_sys::window()
            .and_then(|w| w.performance())
            .map(|p| p.now())
            .unwrap_or_else(js_sys::Date::now)
    }
}

fn to_js(e: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&e.to_string())
}

#[wasm_bindgen(start)]
pub fn wasm_start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
}

/// A catcher game bound to the page's LocalStorage
#[wasm_bindgen]
pub struct CatcherGame {
    session: Session<PerformanceClock, LocalStorageStore, SeededRng>,
}

#[wasm_bindgen]
impl CatcherGame {
    /// Create a game from an optional JSON config
    #[wasm_bindgen(constructor)]
    pub fn new(config_json: Option<String>) -> Result<CatcherGame, JsValue> {
        let config = match config_json {
            Some(json) => GameConfig::from_json(&json).map_err(to_js)?,
            None => GameConfig::default(),
        };
        let seed = (js_sys::Math::random() * u32::MAX as f64) as u64 ^ js_sys::Date::now() as u64;
        log::info!("Catcher seed {}", seed);
        let rng = SeededRng::new(seed);
        Ok(Self {
            session: Session::new(config, PerformanceClock, LocalStorageStore, rng),
        })
    }

    pub fn start(&mut self) {
        self.session.start();
    }

    pub fn pause(&mut self) {
        self.session.pause();
    }

    pub fn resume(&mut self) {
        self.session.resume();
    }

    pub fn restart(&mut self) {
        self.session.restart();
    }

    pub fn complete(&mut self) {
        self.session.complete();
    }

    #[wasm_bindgen(js_name = setBasketTarget)]
    pub fn set_basket_target(&mut self, x: f32) {
        self.session.set_basket_target(x);
    }

    /// Run one step; returns this frame's events as JSON
    pub fn frame(&mut self) -> Result<String, JsValue> {
        let events = self.session.frame();
        serde_json::to_string(&events).map_err(to_js)
    }

    /// Current state as JSON
    pub fn snapshot(&self) -> Result<String, JsValue> {
        serde_json::to_string(self.session.snapshot()).map_err(to_js)
    }

    /// Flash indicators for the current state as JSON
    pub fn signals(&self) -> Result<String, JsValue> {
        serde_json::to_string(&self.session.signals()).map_err(to_js)
    }
}
