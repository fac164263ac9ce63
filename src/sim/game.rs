//! Game director
//!
//! Owns the settings, the run's progress and the active scene. Scene-load
//! requests coming out of a tick are applied before the tick returns; every
//! event is still handed on to the host.

use super::layout;
use super::progress::GameProgress;
use super::state::{Brick, GameEvent, LevelState};
use super::tick::{TickInput, tick_level};
use super::title::TitleScreen;
use crate::consts::*;
use crate::error::ConfigError;
use crate::settings::Settings;

/// Longest frame the fixed-step loop will try to catch up on
const MAX_FRAME_DT: f32 = 0.1;

/// The active scene
#[derive(Debug, Clone)]
pub enum Scene {
    Title(TitleScreen),
    Level(Box<LevelState>),
}

#[derive(Debug, Clone)]
pub struct Game {
    settings: Settings,
    progress: GameProgress,
    scene: Scene,
    /// Bricks per scene id, built once from the layouts
    templates: Vec<Vec<Brick>>,
    seed: u64,
    /// Scene loads so far, mixed into each level seed
    loads: u64,
    /// Leftover frame time for the fixed-step loop
    accumulator: f32,
    events: Vec<GameEvent>,
}

impl Game {
    pub fn new(settings: Settings, seed: u64) -> Result<Self, ConfigError> {
        settings.validate()?;
        let templates = settings
            .layouts
            .iter()
            .enumerate()
            .map(|(scene, rows)| layout::build_bricks(scene, rows))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            progress: GameProgress::new(settings.starting_lives),
            scene: Scene::Title(TitleScreen::new(&settings)),
            settings,
            templates,
            seed,
            loads: 0,
            accumulator: 0.0,
            events: Vec::new(),
        })
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn progress(&self) -> &GameProgress {
        &self.progress
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn scene_id(&self) -> usize {
        match &self.scene {
            Scene::Title(_) => TITLE_SCENE,
            Scene::Level(level) => level.level,
        }
    }

    pub fn level(&self) -> Option<&LevelState> {
        match &self.scene {
            Scene::Level(level) => Some(&**level),
            Scene::Title(_) => None,
        }
    }

    /// Mutable access to the running level (debug tools, tests)
    pub fn level_mut(&mut self) -> Option<&mut LevelState> {
        match &mut self.scene {
            Scene::Level(level) => Some(&mut **level),
            Scene::Title(_) => None,
        }
    }

    /// Replace the active scene. Unknown ids fall back to the title.
    pub fn load_scene(&mut self, id: usize) {
        self.loads += 1;

        let Some(bricks) = self.templates.get(id).filter(|_| id != TITLE_SCENE) else {
            if id != TITLE_SCENE {
                log::warn!("Unknown scene {id}, loading title");
            }
            log::info!("Loading title");
            self.scene = Scene::Title(TitleScreen::new(&self.settings));
            return;
        };

        // A new run starts only after the last one ended in game over;
        // looping past the final level keeps score and lives
        if matches!(self.scene, Scene::Title(_)) && self.progress.is_out_of_lives() {
            self.progress = GameProgress::new(self.settings.starting_lives);
        }

        let seed = self
            .seed
            .wrapping_add(self.loads.wrapping_mul(0x9E37_79B9_7F4A_7C15));
        log::info!("Loading level {id} ({} bricks)", bricks.len());
        let level = LevelState::new(id, bricks.clone(), &self.settings, seed);
        self.scene = Scene::Level(Box::new(level));
    }

    /// Advance the active scene by one fixed timestep
    pub fn tick(&mut self, input: &TickInput, dt: f32) {
        let events = match &mut self.scene {
            Scene::Title(title) => {
                title.tick(&self.settings, input, dt);
                title.drain_events()
            }
            Scene::Level(level) => {
                tick_level(level, &mut self.progress, &self.settings, input, dt);
                level.drain_events()
            }
        };

        let load = events.iter().rev().find_map(|e| match e {
            GameEvent::LoadScene(id) => Some(*id),
            _ => None,
        });
        self.events.extend(events);
        if let Some(id) = load {
            self.load_scene(id);
        }
    }

    /// Run as many fixed steps as `frame_dt` covers. Returns the steps taken.
    pub fn update(&mut self, input: &TickInput, frame_dt: f32) -> u32 {
        self.accumulator += frame_dt.min(MAX_FRAME_DT);

        let mut input = input.clone();
        let mut steps = 0;
        while self.accumulator >= SIM_DT && steps < MAX_SUBSTEPS {
            self.tick(&input, SIM_DT);
            self.accumulator -= SIM_DT;
            steps += 1;

            // Key presses are one-shot
            input.any_key = false;
        }
        steps
    }

    /// Take the events produced since the last drain
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}
