//! Breakout entry point
//!
//! Headless native runner: loads settings, plays the game on autopilot for a
//! while and logs what happens.
//!
//! Usage: `breakout [settings.json] [seconds] [seed]`

use std::path::PathBuf;

use breakout::Settings;
use breakout::audio::{AudioManager, LogBackend};
use breakout::hud::Hud;
use breakout::sim::{Game, GameEvent, TickInput};

/// Simulated frame length (60 fps host)
const FRAME_DT: f32 = 1.0 / 60.0;
const DEFAULT_SECONDS: f32 = 60.0;

fn main() {
    env_logger::init();
    log::info!("Breakout (native) starting...");

    let mut args = std::env::args().skip(1);
    let settings_path = args.next().map(PathBuf::from);
    let seconds = args
        .next()
        .and_then(|s| s.parse::<f32>().ok())
        .unwrap_or(DEFAULT_SECONDS);
    let seed = args
        .next()
        .and_then(|s| s.parse::<u64>().ok())
        .unwrap_or_else(|| {
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .map(|d| d.as_secs())
                .unwrap_or(0)
        });

    let settings = Settings::load_or_default(settings_path.as_deref());
    let mut game = match Game::new(settings, seed) {
        Ok(game) => game,
        Err(err) => {
            log::error!("Invalid settings: {err}; using defaults");
            match Game::new(Settings::default(), seed) {
                Ok(game) => game,
                Err(err) => {
                    log::error!("Default settings rejected: {err}");
                    std::process::exit(1);
                }
            }
        }
    };
    let mut audio = AudioManager::from_settings(game.settings(), Box::new(LogBackend));
    log::info!("Seed {seed}, running {seconds:.1}s");

    let input = TickInput {
        autopilot: true,
        ..Default::default()
    };
    let frames = (seconds / FRAME_DT).ceil() as u64;
    for _ in 0..frames {
        game.update(&input, FRAME_DT);

        let events = game.drain_events();
        audio.handle_events(&events);
        for event in &events {
            match event {
                GameEvent::LoadScene(scene) => log::info!("Scene {scene} loaded"),
                GameEvent::LifeLost { lives } => log::info!("Life lost, {lives} left"),
                GameEvent::Sound(_) => {}
                other => log::debug!("{other:?}"),
            }
        }
    }

    let hud = Hud::from_game(&game);
    println!(
        "scene {} | score {} | lives {}",
        game.scene_id(),
        hud.score,
        hud.lives
    );
}
