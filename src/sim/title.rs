//! Title screen
//!
//! Blinks the start prompt until a key is pressed, then shrinks the paddle
//! away and asks for the first level.

use super::fade::ColorFade;
use super::state::GameEvent;
use super::tick::TickInput;
use crate::audio::SoundEffect;
use crate::consts::*;
use crate::lerp;
use crate::settings::Settings;

/// Paddle shrink animation started by the first key press
#[derive(Debug, Clone)]
struct Shrink {
    from: f32,
    elapsed: f32,
    duration: f32,
}

#[derive(Debug, Clone)]
pub struct TitleScreen {
    /// "Press any key" color cycle
    pub prompt: ColorFade,
    pub message_visible: bool,
    pub ball_visible: bool,
    pub paddle_scale: f32,
    started: bool,
    shrink: Option<Shrink>,
    events: Vec<GameEvent>,
}

impl TitleScreen {
    pub fn new(settings: &Settings) -> Self {
        Self {
            prompt: ColorFade::blink(settings.title_blink_duration),
            message_visible: true,
            ball_visible: true,
            paddle_scale: 1.0,
            started: false,
            shrink: None,
            events: Vec::new(),
        }
    }

    pub fn is_started(&self) -> bool {
        self.started
    }

    pub fn tick(&mut self, settings: &Settings, input: &TickInput, dt: f32) {
        if self.message_visible {
            self.prompt.advance(dt);
        }

        if let Some(shrink) = &mut self.shrink {
            shrink.elapsed += dt;
            let t = shrink.elapsed / shrink.duration;
            self.paddle_scale = lerp(shrink.from, 0.0, t);
            if t >= 1.0 {
                self.shrink = None;
                log::debug!("title animation done");
                self.events.push(GameEvent::LoadScene(FIRST_LEVEL_SCENE));
            }
        }

        // Only the first key press counts
        if (input.any_key || input.autopilot) && !self.started {
            self.started = true;
            self.ball_visible = false;
            self.message_visible = false;
            self.events.push(GameEvent::Sound(SoundEffect::Start));
            self.shrink = Some(Shrink {
                from: self.paddle_scale,
                elapsed: 0.0,
                duration: settings.title_anim_duration,
            });
        }
    }

    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}
