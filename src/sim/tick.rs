//! Fixed timestep level tick
//!
//! Order per tick: paddle motion, contact feed step, contact dispatch,
//! game-over fade, then due timers.

use super::progress::GameProgress;
use super::state::{Deferred, GameEvent, LevelState};
use crate::settings::Settings;

/// Input commands for a single tick (deterministic)
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Horizontal paddle axis in [-1, 1]
    pub axis: f32,
    /// Any key pressed this tick (title screen)
    pub any_key: bool,
    /// Demo mode - paddle follows the ball and the title starts itself
    pub autopilot: bool,
}

/// Dead zone for the autopilot so the paddle doesn't jitter under the ball
const AUTOPILOT_DEAD_ZONE: f32 = 0.05;

/// Axis that steers the paddle under the ball
pub fn autopilot_axis(level: &LevelState) -> f32 {
    if !level.ball.visible {
        return 0.0;
    }
    let diff = level.ball.pos.x - level.paddle.x;
    if diff.abs() < AUTOPILOT_DEAD_ZONE {
        0.0
    } else {
        diff.signum()
    }
}

/// Advance one level by a fixed timestep
pub fn tick_level(
    level: &mut LevelState,
    progress: &mut GameProgress,
    settings: &Settings,
    input: &TickInput,
    dt: f32,
) {
    let axis = if input.autopilot {
        autopilot_axis(level)
    } else {
        input.axis
    };
    level.paddle.drive(
        axis,
        settings.paddle_speed,
        dt,
        settings.paddle_min_x,
        settings.paddle_max_x,
    );

    let contacts = level
        .feed
        .step(&mut level.ball, &level.paddle, &level.bricks, dt);
    for contact in &contacts {
        level.dispatch(progress, settings, contact);
    }

    if let Some(fade) = &mut level.game_over {
        fade.advance(dt);
    }

    for action in level.timers.advance(dt) {
        match action {
            Deferred::Respawn => level.respawn(settings),
            Deferred::LoadScene(scene) => level.emit(GameEvent::LoadScene(scene)),
        }
    }
}
