//! HUD text
//!
//! Read-only view of the game for whatever draws the interface. Built fresh
//! each frame.

use glam::Vec3;
use serde::Serialize;

use crate::sim::{Game, LevelPhase, Scene};

pub const GAME_OVER_TEXT: &str = "GAME OVER";
pub const PROMPT_TEXT: &str = "PRESS ANY KEY";

/// A line of text and its current color
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HudText {
    pub text: String,
    pub color: Vec3,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Hud {
    /// Score, zero-padded to three digits
    pub score: String,
    pub lives: String,
    /// Shown while a level is in its game-over phase
    pub game_over: Option<HudText>,
    /// Blinking title prompt
    pub prompt: Option<HudText>,
}

impl Hud {
    pub fn from_game(game: &Game) -> Self {
        let progress = game.progress();
        let mut hud = Self {
            score: format!("{:03}", progress.score()),
            lives: progress.lives().to_string(),
            game_over: None,
            prompt: None,
        };

        match game.scene() {
            Scene::Title(title) => {
                if title.message_visible {
                    hud.prompt = Some(HudText {
                        text: PROMPT_TEXT.to_string(),
                        color: title.prompt.color(),
                    });
                }
            }
            Scene::Level(level) => {
                if level.phase == LevelPhase::GameOver {
                    hud.game_over = level.game_over.as_ref().map(|fade| HudText {
                        text: GAME_OVER_TEXT.to_string(),
                        color: fade.color(),
                    });
                }
            }
        }
        hud
    }
}
