//! Time-based color interpolation (game-over indicator, title prompt)

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::lerp_color;

pub const BLACK: Vec3 = Vec3::ZERO;
pub const WHITE: Vec3 = Vec3::ONE;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColorFade {
    pub from: Vec3,
    pub to: Vec3,
    pub duration: f32,
    pub elapsed: f32,
    /// Restart from `from` after reaching `to`
    pub looping: bool,
}

impl ColorFade {
    /// One-shot black-to-white fade
    pub fn black_to_white(duration: f32) -> Self {
        Self {
            from: BLACK,
            to: WHITE,
            duration,
            elapsed: 0.0,
            looping: false,
        }
    }

    /// Black-to-white fade that starts over every `duration` seconds
    pub fn blink(duration: f32) -> Self {
        Self {
            looping: true,
            ..Self::black_to_white(duration)
        }
    }

    /// Advance by `dt`. Returns true once a one-shot fade has finished.
    pub fn advance(&mut self, dt: f32) -> bool {
        self.elapsed += dt;
        if self.elapsed < self.duration {
            return false;
        }
        if self.looping {
            self.elapsed %= self.duration;
            false
        } else {
            self.elapsed = self.duration;
            true
        }
    }

    pub fn progress(&self) -> f32 {
        if self.duration <= 0.0 {
            1.0
        } else {
            (self.elapsed / self.duration).clamp(0.0, 1.0)
        }
    }

    pub fn color(&self) -> Vec3 {
        lerp_color(self.from, self.to, self.progress())
    }

    pub fn is_finished(&self) -> bool {
        !self.looping && self.elapsed >= self.duration
    }
}
