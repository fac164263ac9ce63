//! Game settings and tuning
//!
//! Every tunable the core reads lives here. Settings load from a JSON file;
//! missing fields fall back to the defaults below.

use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::ConfigError;
use crate::sim::catalog::BrickCatalog;
use crate::sim::layout;
use crate::sim::level::LevelTable;

/// Game settings/tuning
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Lives at the start of a run
    pub starting_lives: u32,

    // === Ball ===
    /// Launch impulse magnitude
    pub force: f32,
    /// Seconds before the ball launches (level start and after a lost life)
    pub launch_delay: f32,
    /// Horizontal distance from paddle center beyond which an edge hit bounces back
    pub hit_offset: f32,
    /// Speed-up impulse magnitude
    pub force_inc: f32,
    /// Paddle hits between speed-ups
    pub speedup_every: u32,
    /// Vertical component of the launch direction before normalization
    pub launch_dir_y: f32,
    /// Where the ball respawns
    pub spawn_point: Vec2,
    pub ball_radius: f32,

    // === Paddle ===
    /// Horizontal speed (units per second)
    pub paddle_speed: f32,
    pub paddle_min_x: f32,
    pub paddle_max_x: f32,
    pub paddle_y: f32,
    pub paddle_width: f32,
    pub paddle_height: f32,

    // === Timings (seconds) ===
    pub level_complete_delay: f32,
    /// Game-over fade from black to white before returning to the title
    pub game_over_duration: f32,
    /// Title paddle shrink animation
    pub title_anim_duration: f32,
    /// One black-to-white cycle of the title prompt
    pub title_blink_duration: f32,

    // === Audio ===
    /// Master volume (0.0 - 1.0)
    pub master_volume: f32,
    /// Sound effects volume (0.0 - 1.0)
    pub sfx_volume: f32,
    pub muted: bool,

    // === Levels ===
    pub catalog: BrickCatalog,
    /// Destructible bricks per scene id
    pub levels: LevelTable,
    /// Brick layout per scene id
    pub layouts: Vec<Vec<String>>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            starting_lives: 3,

            force: 5.0,
            launch_delay: 1.0,
            hit_offset: 0.3,
            force_inc: 0.5,
            speedup_every: SPEEDUP_EVERY,
            launch_dir_y: -1.0,
            spawn_point: Vec2::ZERO,
            ball_radius: BALL_RADIUS,

            paddle_speed: 6.0,
            paddle_min_x: PADDLE_MIN_X,
            paddle_max_x: PADDLE_MAX_X,
            paddle_y: PADDLE_Y,
            paddle_width: PADDLE_WIDTH,
            paddle_height: PADDLE_HEIGHT,

            level_complete_delay: 3.0,
            game_over_duration: 3.0,
            title_anim_duration: 1.0,
            title_blink_duration: 1.0,

            master_volume: 0.8,
            sfx_volume: 1.0,
            muted: false,

            catalog: BrickCatalog::default(),
            levels: LevelTable::default(),
            layouts: layout::default_layouts(),
        }
    }
}

impl Settings {
    /// Parse and validate settings from a JSON string
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load and validate settings from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Load settings, falling back to defaults on any error
    pub fn load_or_default(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            log::info!("Using default settings");
            return Self::default();
        };
        match Self::load(path) {
            Ok(settings) => settings,
            Err(err) => {
                log::warn!("{err}; using default settings");
                Self::default()
            }
        }
    }

    /// Check bounds, durations and that every layout agrees with the level table
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.paddle_min_x >= self.paddle_max_x {
            return Err(ConfigError::PaddleBounds {
                min_x: self.paddle_min_x,
                max_x: self.paddle_max_x,
            });
        }

        let positive = [
            ("force", self.force),
            ("paddle_speed", self.paddle_speed),
            ("paddle_width", self.paddle_width),
            ("ball_radius", self.ball_radius),
            ("game_over_duration", self.game_over_duration),
            ("title_anim_duration", self.title_anim_duration),
            ("title_blink_duration", self.title_blink_duration),
            ("speedup_every", self.speedup_every as f32),
        ];
        for (field, value) in positive {
            if value <= 0.0 || value.is_nan() {
                return Err(ConfigError::NonPositive { field, value });
            }
        }

        let scenes = self.levels.scene_count();
        if scenes == 0 {
            return Err(ConfigError::EmptyLevelTable);
        }
        if self.layouts.len() != scenes {
            return Err(ConfigError::LayoutCountMismatch {
                layouts: self.layouts.len(),
                scenes,
            });
        }
        for (scene, (table, rows)) in self.levels.iter().zip(&self.layouts).enumerate() {
            let layout = layout::destructible_count(scene, rows)?;
            if scene != TITLE_SCENE && layout != table {
                return Err(ConfigError::BrickCountMismatch {
                    scene,
                    table,
                    layout,
                });
            }
        }
        Ok(())
    }
}
