//! Breakout - ball collision and level progression core
//!
//! Core modules:
//! - `sim`: Deterministic simulation (contacts, resolver, levels, timers)
//! - `settings`: Data-driven tuning, brick catalog and level layouts
//! - `audio`: Fire-and-forget sound requests
//! - `hud`: Read-only score/lives presentation

pub mod audio;
pub mod error;
pub mod hud;
pub mod settings;
pub mod sim;

pub use error::ConfigError;
pub use settings::Settings;

use glam::Vec3;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (120 Hz)
    pub const SIM_DT: f32 = 1.0 / 120.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Scene index of the title screen
    pub const TITLE_SCENE: usize = 0;
    /// Scene index loaded when a run starts
    pub const FIRST_LEVEL_SCENE: usize = 1;

    /// Paddle horizontal limits
    pub const PADDLE_MIN_X: f32 = -3.1;
    pub const PADDLE_MAX_X: f32 = 3.1;
    pub const PADDLE_Y: f32 = -4.2;
    pub const PADDLE_WIDTH: f32 = 1.6;
    pub const PADDLE_HEIGHT: f32 = 0.2;
    /// Width factor applied while the paddle is halved
    pub const PADDLE_HALVED_SCALE: f32 = 0.5;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 0.1;

    /// Brick grid defaults
    pub const BRICK_WIDTH: f32 = 0.8;
    pub const BRICK_HEIGHT: f32 = 0.3;
    pub const BRICK_GAP: f32 = 0.1;

    /// Arena bounds (inner faces of the walls)
    pub const ARENA_HALF_WIDTH: f32 = 4.0;
    pub const ARENA_TOP: f32 = 5.0;
    pub const ARENA_BOTTOM: f32 = -5.2;
    pub const WALL_THICKNESS: f32 = 0.5;

    /// Paddle hits between speed-up impulses
    pub const SPEEDUP_EVERY: u32 = 4;
}

/// Linear interpolation between two colors, `t` clamped to [0, 1]
#[inline]
pub fn lerp_color(from: Vec3, to: Vec3, t: f32) -> Vec3 {
    from.lerp(to, t.clamp(0.0, 1.0))
}

/// Linear interpolation between two scalars, `t` clamped to [0, 1]
#[inline]
pub fn lerp(from: f32, to: f32, t: f32) -> f32 {
    from + (to - from) * t.clamp(0.0, 1.0)
}
