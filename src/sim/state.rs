//! Level state and core simulation types

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::catalog::BrickKind;
use super::fade::ColorFade;
use super::physics::ContactFeed;
use super::timer::{TimerId, TimerQueue};
use crate::audio::SoundEffect;
use crate::consts::*;
use crate::settings::Settings;

/// Current phase of a level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LevelPhase {
    /// Waiting for the scheduled launch
    Serving,
    /// Ball in play
    Playing,
    /// All bricks destroyed, waiting to advance
    Cleared,
    /// Out of lives, game-over fade running
    GameOver,
}

/// The ball
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    /// Paddle contacts this level
    pub hit_count: u32,
    /// Bricks destroyed this level
    pub brick_count: u32,
    /// Paddle is currently at half width
    pub paddle_halved: bool,
    /// Hidden balls take part in no contacts
    pub visible: bool,
}

impl Ball {
    pub fn new(pos: Vec2, radius: f32) -> Self {
        Self {
            pos,
            vel: Vec2::ZERO,
            radius,
            hit_count: 0,
            brick_count: 0,
            paddle_halved: false,
            visible: true,
        }
    }

    /// Unit-mass impulse
    pub fn apply_impulse(&mut self, impulse: Vec2) {
        self.vel += impulse;
    }

    pub fn speed(&self) -> f32 {
        self.vel.length()
    }
}

/// The player's paddle
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paddle {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    /// Horizontal scale (1.0 full, 0.5 halved, shrinks to 0 on the title)
    pub scale_x: f32,
}

impl Paddle {
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            x: 0.0,
            y: settings.paddle_y,
            width: settings.paddle_width,
            height: settings.paddle_height,
            scale_x: 1.0,
        }
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    /// Current collider size
    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width * self.scale_x, self.height)
    }

    /// Move by `axis * speed * dt`, but only if the result stays in `[min_x, max_x]`
    pub fn drive(&mut self, axis: f32, speed: f32, dt: f32, min_x: f32, max_x: f32) {
        let axis = axis.clamp(-1.0, 1.0);
        if axis == 0.0 {
            return;
        }
        let next = self.x + axis * speed * dt;
        if (min_x..=max_x).contains(&next) {
            self.x = next;
        }
    }

    pub fn set_halved(&mut self, halved: bool) {
        self.scale_x = if halved { PADDLE_HALVED_SCALE } else { 1.0 };
    }
}

/// A brick
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Brick {
    pub id: u32,
    pub kind: BrickKind,
    pub center: Vec2,
    pub size: Vec2,
}

/// Something the core reports to its collaborators
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Fire-and-forget sound request
    Sound(SoundEffect),
    BrickDestroyed { id: u32, kind: BrickKind, points: u32 },
    SpeedUp { hit_count: u32 },
    PaddleHalved(bool),
    LifeLost { lives: u32 },
    LevelComplete { level: usize },
    GameOver { score: u32 },
    /// Scene-load request
    LoadScene(usize),
}

/// Deferred level actions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Deferred {
    Respawn,
    LoadScene(usize),
}

/// Everything that lives for the duration of one level scene
#[derive(Debug, Clone)]
pub struct LevelState {
    /// Scene id of this level
    pub level: usize,
    pub phase: LevelPhase,
    pub ball: Ball,
    pub paddle: Paddle,
    pub bricks: Vec<Brick>,
    pub feed: ContactFeed,
    pub timers: TimerQueue<Deferred>,
    /// Game-over indicator fade (only in `GameOver`)
    pub game_over: Option<ColorFade>,
    pub(crate) respawn_timer: Option<TimerId>,
    pub(crate) rng: Pcg32,
    pub(crate) events: Vec<GameEvent>,
}

impl LevelState {
    /// Set up a level and schedule the first launch
    pub fn new(level: usize, bricks: Vec<Brick>, settings: &Settings, seed: u64) -> Self {
        let mut state = Self {
            level,
            phase: LevelPhase::Serving,
            ball: Ball::new(settings.spawn_point, settings.ball_radius),
            paddle: Paddle::from_settings(settings),
            bricks,
            feed: ContactFeed::default(),
            timers: TimerQueue::new(),
            game_over: None,
            respawn_timer: None,
            rng: Pcg32::seed_from_u64(seed),
            events: Vec::new(),
        };
        state.schedule_respawn(settings.launch_delay);
        state
    }

    pub(crate) fn emit(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    pub(crate) fn play(&mut self, effect: SoundEffect) {
        self.emit(GameEvent::Sound(effect));
    }

    /// Take the events produced since the last drain
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    pub(crate) fn schedule_respawn(&mut self, delay: f32) {
        self.respawn_timer = Some(self.timers.schedule(delay, Deferred::Respawn));
    }

    pub(crate) fn cancel_respawn(&mut self) {
        if let Some(id) = self.respawn_timer.take() {
            self.timers.cancel(id);
        }
    }

    pub fn is_respawn_pending(&self) -> bool {
        self.respawn_timer
            .is_some_and(|id| self.timers.is_pending(id))
    }

    pub fn brick(&self, id: u32) -> Option<&Brick> {
        self.bricks.iter().find(|b| b.id == id)
    }

    /// Destructible bricks still standing
    pub fn remaining_bricks(&self) -> usize {
        self.bricks.iter().filter(|b| b.kind.is_destructible()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paddle_drive_respects_bounds() {
        let mut paddle = Paddle::from_settings(&Settings::default());
        paddle.x = 3.0;

        // 3.0 + 6.0 * 0.1 = 3.6 would leave the bounds: no move
        paddle.drive(1.0, 6.0, 0.1, -3.1, 3.1);
        assert_eq!(paddle.x, 3.0);

        paddle.drive(-1.0, 6.0, 0.1, -3.1, 3.1);
        assert!((paddle.x - 2.4).abs() < 1e-5);

        paddle.drive(0.0, 6.0, 0.1, -3.1, 3.1);
        assert!((paddle.x - 2.4).abs() < 1e-5);
    }

    #[test]
    fn test_paddle_halving_scale() {
        let mut paddle = Paddle::from_settings(&Settings::default());
        let full = paddle.size().x;
        paddle.set_halved(true);
        assert!((paddle.size().x - full * 0.5).abs() < 1e-6);
        paddle.set_halved(false);
        assert_eq!(paddle.size().x, full);
    }

    #[test]
    fn test_new_level_schedules_launch() {
        let settings = Settings::default();
        let state = LevelState::new(1, Vec::new(), &settings, 7);
        assert_eq!(state.phase, LevelPhase::Serving);
        assert!(state.is_respawn_pending());
        assert_eq!(state.ball.vel, Vec2::ZERO);
    }
}
