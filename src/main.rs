//! Catcher headless demo
//!
//! Runs an autopilot session at a simulated 60 Hz and logs how it went.
//!
//! Usage: `catcher [seed] [frames] [config.json] [high_score.json]`

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use catcher::highscores::JsonFileStore;
    use catcher::sim::{EntityKind, GameEvent, GameState, SeededRng};
    use catcher::{GameConfig, ManualClock, Session};

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let seed = args.first().and_then(|s| s.parse().ok()).unwrap_or(12345u64);
    let frames = args.get(1).and_then(|s| s.parse().ok()).unwrap_or(60 * 60u32);
    let config = args
        .get(2)
        .map(|path| GameConfig::load_or_default(path))
        .unwrap_or_default();
    let store_path = args
        .get(3)
        .cloned()
        .unwrap_or_else(|| "catcher_high_score.json".to_string());

    log::info!("Catcher demo starting (seed {}, {} frames)", seed, frames);

    /// Steer under the lowest falling Good item or power-up
    fn autopilot(state: &GameState) -> Option<f32> {
        state
            .objects
            .iter()
            .filter(|e| e.kind != EntityKind::Bad)
            .max_by(|a, b| a.pos.y.total_cmp(&b.pos.y))
            .map(|e| e.center().x - state.basket.size.x / 2.0)
    }

    let clock = ManualClock::new(0.0);
    let mut session = Session::new(
        config,
        clock.clone(),
        JsonFileStore::new(store_path),
        SeededRng::new(seed),
    );
    session.start();

    let mut caught = 0u32;
    let mut missed = 0u32;
    for _ in 0..frames {
        clock.advance(1000.0 / 60.0);
        if let Some(x) = autopilot(session.snapshot()) {
            session.set_basket_target(x);
        }
        for event in session.frame() {
            match event {
                GameEvent::Caught { .. } => caught += 1,
                GameEvent::Missed { kind, .. } if kind == EntityKind::Good => missed += 1,
                GameEvent::NewHighScore(score) if score % 100 < 25 => {
                    log::info!("High score {}", score);
                }
                _ => {}
            }
        }
        if session.snapshot().is_game_over() {
            break;
        }
    }

    let state = session.snapshot();
    log::info!(
        "Done: score={} level={} lives={} max_combo={} caught={} missed_good={} play_time={:.1}s",
        state.score,
        state.level,
        state.lives,
        state.max_combo,
        caught,
        missed,
        state.play_time
    );
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point lives in `catcher::wasm`, this is just to satisfy the compiler
}
