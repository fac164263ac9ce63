//! Ball collision resolution
//!
//! Turns contacts into score, lives, paddle and velocity changes, and decides
//! when a level is cleared or the run is over. Unknown or irrelevant
//! categories fall through to a no-op.

use glam::Vec2;
use rand::Rng;

use super::catalog::{BrickKind, Category};
use super::fade::ColorFade;
use super::physics::{Contact, PhysicsEvent};
use super::progress::GameProgress;
use super::state::{Deferred, GameEvent, LevelPhase, LevelState};
use crate::audio::SoundEffect;
use crate::consts::*;
use crate::settings::Settings;

impl LevelState {
    /// Route a contact-feed event to the matching handler
    pub fn dispatch(&mut self, progress: &mut GameProgress, settings: &Settings, event: &PhysicsEvent) {
        match event {
            PhysicsEvent::Collision(contact) => self.on_solid_collision(progress, settings, contact),
            PhysicsEvent::Overlap(contact) => self.on_trigger_overlap(progress, settings, contact),
        }
    }

    pub fn on_solid_collision(
        &mut self,
        progress: &mut GameProgress,
        settings: &Settings,
        contact: &Contact,
    ) {
        log::debug!("collision {:?} at {:?}", contact.category, contact.point);
        match contact.category {
            Category::Brick(BrickKind::Rock) => self.play(SoundEffect::WallHit),
            // Pass-through bricks only react to overlap
            Category::Brick(BrickKind::PassThrough) => {}
            Category::Brick(_) => self.destroy_brick(progress, settings, contact),
            Category::Paddle => self.hit_paddle(settings, contact),
            Category::TopWall => {
                self.play(SoundEffect::WallHit);
                if !self.ball.paddle_halved {
                    self.halve_paddle(true);
                }
            }
            Category::SideWall => self.play(SoundEffect::WallHit),
            Category::BottomWall | Category::Untagged => {}
        }
    }

    pub fn on_trigger_overlap(
        &mut self,
        progress: &mut GameProgress,
        settings: &Settings,
        contact: &Contact,
    ) {
        log::debug!("overlap {:?} at {:?}", contact.category, contact.point);
        match contact.category {
            Category::BottomWall => self.lose_life(progress, settings),
            Category::Brick(BrickKind::PassThrough) => {
                self.destroy_brick(progress, settings, contact)
            }
            _ => {}
        }
    }

    /// Put the ball back at the spawn point and launch it left or right
    pub fn respawn(&mut self, settings: &Settings) {
        self.cancel_respawn();

        self.ball.pos = settings.spawn_point;
        self.ball.vel = Vec2::ZERO;
        self.ball.visible = true;

        let dir_x = if self.rng.random_bool(0.5) { -1.0 } else { 1.0 };
        let dir = Vec2::new(dir_x, settings.launch_dir_y).normalize_or_zero();
        self.ball.apply_impulse(dir * settings.force);

        self.phase = LevelPhase::Playing;
        log::debug!("ball launched with velocity {:?}", self.ball.vel);
    }

    /// Halve (or restore) the paddle width
    pub fn halve_paddle(&mut self, halve: bool) {
        self.ball.paddle_halved = halve;
        self.paddle.set_halved(halve);
        self.emit(GameEvent::PaddleHalved(halve));
    }

    fn hit_paddle(&mut self, settings: &Settings, contact: &Contact) {
        self.play(SoundEffect::PaddleHit);

        self.ball.hit_count += 1;
        if self.ball.hit_count % settings.speedup_every.max(1) == 0 {
            let dir = self.ball.vel.normalize_or_zero();
            self.ball.apply_impulse(dir * settings.force_inc);
            log::debug!("hit count {} -> speed {:.2}", self.ball.hit_count, self.ball.speed());
            self.emit(GameEvent::SpeedUp {
                hit_count: self.ball.hit_count,
            });
        }

        // Hits near the far edge send the ball back the way it came
        let paddle_x = contact.other_center.x;
        let vx = self.ball.vel.x;
        if (vx < 0.0 && contact.point.x > paddle_x + settings.hit_offset)
            || (vx > 0.0 && contact.point.x < paddle_x - settings.hit_offset)
        {
            self.ball.vel.x = -vx;
        }
    }

    fn destroy_brick(&mut self, progress: &mut GameProgress, settings: &Settings, contact: &Contact) {
        let Some(idx) = contact
            .brick
            .and_then(|id| self.bricks.iter().position(|b| b.id == id))
        else {
            return;
        };
        let brick = self.bricks.remove(idx);

        self.play(SoundEffect::BrickBreak);
        let points = settings.catalog.points(brick.kind);
        progress.add_score(points);
        self.ball.brick_count += 1;
        self.emit(GameEvent::BrickDestroyed {
            id: brick.id,
            kind: brick.kind,
            points,
        });

        self.check_level_complete(settings);
    }

    fn check_level_complete(&mut self, settings: &Settings) {
        if !matches!(self.phase, LevelPhase::Playing | LevelPhase::Serving) {
            return;
        }
        if !settings.levels.is_complete(self.level, self.ball.brick_count) {
            return;
        }

        self.cancel_respawn();
        self.ball.vel = Vec2::ZERO;
        self.ball.visible = false;
        self.phase = LevelPhase::Cleared;

        let next = settings.levels.next(self.level);
        self.timers
            .schedule(settings.level_complete_delay, Deferred::LoadScene(next));

        log::info!("Level {} complete, next scene {}", self.level, next);
        self.play(SoundEffect::LevelComplete);
        self.emit(GameEvent::LevelComplete { level: self.level });
    }

    fn lose_life(&mut self, progress: &mut GameProgress, settings: &Settings) {
        if self.phase != LevelPhase::Playing {
            return;
        }

        self.play(SoundEffect::LifeLost);
        progress.add_lives(-1);
        self.emit(GameEvent::LifeLost {
            lives: progress.lives(),
        });

        if self.ball.paddle_halved {
            self.halve_paddle(false);
        }

        if progress.is_out_of_lives() {
            self.enter_game_over(progress, settings);
        } else {
            self.phase = LevelPhase::Serving;
            self.schedule_respawn(settings.launch_delay);
        }
    }

    fn enter_game_over(&mut self, progress: &GameProgress, settings: &Settings) {
        self.cancel_respawn();
        self.ball.vel = Vec2::ZERO;
        self.ball.visible = false;
        self.phase = LevelPhase::GameOver;
        self.game_over = Some(ColorFade::black_to_white(settings.game_over_duration));

        self.timers
            .schedule(settings.game_over_duration, Deferred::LoadScene(TITLE_SCENE));

        log::info!("Game over with score {}", progress.score());
        self.play(SoundEffect::GameOver);
        self.emit(GameEvent::GameOver {
            score: progress.score(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::layout;
    use crate::sim::state::Brick;
    use proptest::prelude::*;

    fn level_with(bricks: Vec<Brick>, settings: &Settings) -> LevelState {
        let mut level = LevelState::new(1, bricks, settings, 42);
        level.respawn(settings);
        level
    }

    fn red_row(count: u32) -> Vec<Brick> {
        (1..=count)
            .map(|id| Brick {
                id,
                kind: BrickKind::Red,
                center: Vec2::new(0.0, 3.0),
                size: Vec2::new(0.8, 0.3),
            })
            .collect()
    }

    fn brick_contact(id: u32, kind: BrickKind) -> Contact {
        Contact {
            category: Category::Brick(kind),
            point: Vec2::new(0.0, 2.85),
            brick: Some(id),
            other_center: Vec2::new(0.0, 3.0),
        }
    }

    fn paddle_contact(level: &LevelState, x: f32) -> Contact {
        Contact {
            category: Category::Paddle,
            point: Vec2::new(x, level.paddle.y + level.paddle.height / 2.0),
            brick: None,
            other_center: level.paddle.center(),
        }
    }

    fn wall(category: Category) -> Contact {
        Contact {
            category,
            point: Vec2::ZERO,
            brick: None,
            other_center: Vec2::ZERO,
        }
    }

    #[test]
    fn test_31_red_bricks_then_level_complete() {
        let settings = Settings::default();
        let mut progress = GameProgress::new(3);
        let mut level = level_with(red_row(32), &settings);

        for id in 1..=31 {
            level.on_solid_collision(&mut progress, &settings, &brick_contact(id, BrickKind::Red));
        }
        assert_eq!(progress.score(), 775);
        assert_eq!(level.ball.brick_count, 31);
        assert_eq!(level.phase, LevelPhase::Playing);
        assert!(level.timers.is_empty());

        level.on_solid_collision(&mut progress, &settings, &brick_contact(32, BrickKind::Red));
        assert_eq!(progress.score(), 800);
        assert_eq!(level.phase, LevelPhase::Cleared);
        assert!(!level.ball.visible);
        assert_eq!(level.ball.vel, Vec2::ZERO);

        // Advance happens after the delay, to scene 2
        assert!(level.timers.advance(2.9).is_empty());
        assert_eq!(level.timers.advance(0.2), vec![Deferred::LoadScene(2)]);
    }

    #[test]
    fn test_last_level_loops_to_title() {
        let settings = Settings::default();
        let mut progress = GameProgress::new(3);
        let mut level = LevelState::new(2, red_row(32), &settings, 1);
        level.respawn(&settings);

        for id in 1..=32 {
            level.on_solid_collision(&mut progress, &settings, &brick_contact(id, BrickKind::Red));
        }
        assert_eq!(level.phase, LevelPhase::Cleared);
        assert_eq!(level.timers.advance(3.0), vec![Deferred::LoadScene(0)]);
    }

    #[test]
    fn test_level_complete_fires_once() {
        let settings = Settings::default();
        let mut progress = GameProgress::new(3);
        let mut bricks = red_row(33);
        bricks[32].kind = BrickKind::Yellow;
        let mut level = level_with(bricks, &settings);

        for id in 1..=33 {
            level.on_solid_collision(&mut progress, &settings, &brick_contact(id, BrickKind::Red));
        }
        let completions = level
            .drain_events()
            .into_iter()
            .filter(|e| matches!(e, GameEvent::LevelComplete { .. }))
            .count();
        assert_eq!(completions, 1);
        assert_eq!(level.timers.len(), 1);
    }

    #[test]
    fn test_same_brick_counts_once() {
        let settings = Settings::default();
        let mut progress = GameProgress::new(3);
        let mut level = level_with(red_row(2), &settings);

        let contact = brick_contact(1, BrickKind::Red);
        level.on_solid_collision(&mut progress, &settings, &contact);
        level.on_solid_collision(&mut progress, &settings, &contact);
        assert_eq!(level.ball.brick_count, 1);
        assert_eq!(progress.score(), 25);
    }

    #[test]
    fn test_pass_through_brick_on_overlap() {
        let settings = Settings::default();
        let mut progress = GameProgress::new(3);
        let mut bricks = red_row(2);
        bricks[1].kind = BrickKind::PassThrough;
        let mut level = level_with(bricks, &settings);

        // Solid contact with a pass-through brick does nothing
        level.on_solid_collision(&mut progress, &settings, &brick_contact(2, BrickKind::PassThrough));
        assert_eq!(level.ball.brick_count, 0);

        level.on_trigger_overlap(&mut progress, &settings, &brick_contact(2, BrickKind::PassThrough));
        assert_eq!(level.ball.brick_count, 1);
        assert_eq!(progress.score(), settings.catalog.points(BrickKind::PassThrough));
        assert!(level.brick(2).is_none());
    }

    #[test]
    fn test_rock_only_plays_sound() {
        let settings = Settings::default();
        let mut progress = GameProgress::new(3);
        let mut bricks = red_row(1);
        bricks[0].kind = BrickKind::Rock;
        let mut level = level_with(bricks, &settings);
        level.drain_events();

        level.on_solid_collision(&mut progress, &settings, &brick_contact(1, BrickKind::Rock));
        assert_eq!(progress.score(), 0);
        assert_eq!(level.ball.brick_count, 0);
        assert!(level.brick(1).is_some());
        assert_eq!(level.drain_events(), vec![GameEvent::Sound(SoundEffect::WallHit)]);
    }

    #[test]
    fn test_paddle_halving_cycle() {
        let settings = Settings::default();
        let mut progress = GameProgress::new(3);
        let mut level = level_with(Vec::new(), &settings);
        let full = level.paddle.size().x;

        level.on_solid_collision(&mut progress, &settings, &wall(Category::TopWall));
        assert!(level.ball.paddle_halved);
        assert!((level.paddle.size().x - full * 0.5).abs() < 1e-6);

        // Second top-wall hit while halved is a no-op
        level.on_solid_collision(&mut progress, &settings, &wall(Category::TopWall));
        assert!((level.paddle.size().x - full * 0.5).abs() < 1e-6);

        // Side walls never halve
        level.halve_paddle(false);
        level.on_solid_collision(&mut progress, &settings, &wall(Category::SideWall));
        assert!(!level.ball.paddle_halved);

        level.on_solid_collision(&mut progress, &settings, &wall(Category::TopWall));
        level.on_trigger_overlap(&mut progress, &settings, &wall(Category::BottomWall));
        assert!(!level.ball.paddle_halved);
        assert_eq!(level.paddle.size().x, full);
    }

    #[test]
    fn test_speed_up_every_fourth_hit() {
        let settings = Settings::default();
        let mut progress = GameProgress::new(3);
        let mut level = level_with(Vec::new(), &settings);
        level.ball.vel = Vec2::new(0.0, 5.0);
        let center = level.paddle.x;

        for hit in 1..=8u32 {
            let before = level.ball.speed();
            let contact = paddle_contact(&level, center);
            level.on_solid_collision(&mut progress, &settings, &contact);
            let after = level.ball.speed();
            if hit % 4 == 0 {
                assert!((after - before - settings.force_inc).abs() < 1e-4, "hit {hit}");
            } else {
                assert!((after - before).abs() < 1e-6, "hit {hit}");
            }
        }
        assert_eq!(level.ball.hit_count, 8);
        // Speed-up keeps the direction
        assert_eq!(level.ball.vel.x, 0.0);
        assert!(level.ball.vel.y > 0.0);
    }

    #[test]
    fn test_life_lost_with_lives_left() {
        let settings = Settings::default();
        let mut progress = GameProgress::new(3);
        let mut level = level_with(Vec::new(), &settings);
        level.halve_paddle(true);

        level.on_trigger_overlap(&mut progress, &settings, &wall(Category::BottomWall));
        assert_eq!(progress.lives(), 2);
        assert!(!level.ball.paddle_halved);
        assert_eq!(level.phase, LevelPhase::Serving);
        assert!(level.is_respawn_pending());

        // A second overlap before the respawn does not cost another life
        level.on_trigger_overlap(&mut progress, &settings, &wall(Category::BottomWall));
        assert_eq!(progress.lives(), 2);

        assert_eq!(level.timers.advance(settings.launch_delay), vec![Deferred::Respawn]);
    }

    #[test]
    fn test_last_life_is_game_over() {
        let settings = Settings::default();
        let mut progress = GameProgress::new(1);
        let mut level = level_with(Vec::new(), &settings);

        level.on_trigger_overlap(&mut progress, &settings, &wall(Category::BottomWall));
        assert_eq!(progress.lives(), 0);
        assert_eq!(level.phase, LevelPhase::GameOver);
        assert!(!level.is_respawn_pending());
        assert!(level.game_over.is_some());
        assert!(level.drain_events().contains(&GameEvent::GameOver { score: 0 }));

        let due = level.timers.advance(settings.game_over_duration);
        assert_eq!(due, vec![Deferred::LoadScene(TITLE_SCENE)]);
    }

    #[test]
    fn test_respawn_launch() {
        let settings = Settings::default();
        let mut level = LevelState::new(1, Vec::new(), &settings, 3);
        level.ball.pos = Vec2::new(2.0, -6.0);

        level.respawn(&settings);
        assert_eq!(level.ball.pos, settings.spawn_point);
        assert!((level.ball.speed() - settings.force).abs() < 1e-4);
        assert!((level.ball.vel.x.abs() - level.ball.vel.y.abs()).abs() < 1e-4);
        assert!(level.ball.vel.y < 0.0);
        assert_eq!(level.phase, LevelPhase::Playing);
    }

    #[test]
    fn test_respawn_direction_varies() {
        let settings = Settings::default();
        let mut level = LevelState::new(1, Vec::new(), &settings, 11);
        let mut lefts = 0;
        for _ in 0..64 {
            level.respawn(&settings);
            if level.ball.vel.x < 0.0 {
                lefts += 1;
            }
        }
        assert!(lefts > 0 && lefts < 64);
    }

    #[test]
    fn test_untagged_is_ignored() {
        let settings = Settings::default();
        let mut progress = GameProgress::new(3);
        let mut level = level_with(layout::build_bricks(1, &settings.layouts[1]).unwrap(), &settings);
        level.drain_events();
        let vel = level.ball.vel;

        level.on_solid_collision(&mut progress, &settings, &wall(Category::Untagged));
        level.on_trigger_overlap(&mut progress, &settings, &wall(Category::Untagged));
        assert_eq!(level.ball.vel, vel);
        assert_eq!(progress, GameProgress::new(3));
        assert!(level.drain_events().is_empty());
    }

    proptest! {
        #[test]
        fn prop_score_increases_by_catalog_points(kind_idx in 0usize..5) {
            let settings = Settings::default();
            let kind = BrickKind::ALL[kind_idx];
            let mut progress = GameProgress::new(3);
            let mut bricks = red_row(2);
            bricks[0].kind = kind;
            let mut level = level_with(bricks, &settings);

            let contact = brick_contact(1, kind);
            if kind.is_trigger() {
                level.on_trigger_overlap(&mut progress, &settings, &contact);
            } else {
                level.on_solid_collision(&mut progress, &settings, &contact);
            }
            prop_assert_eq!(progress.score(), settings.catalog.points(kind));
            prop_assert_eq!(level.ball.brick_count, 1);
        }

        #[test]
        fn prop_paddle_flip_rule(
            vx in prop_oneof![-8.0f32..-0.01, 0.01f32..8.0],
            offset in -0.8f32..0.8,
        ) {
            let settings = Settings::default();
            let mut progress = GameProgress::new(3);
            let mut level = level_with(Vec::new(), &settings);
            level.ball.vel = Vec2::new(vx, 4.0);
            // Stay clear of the speed-up hit
            level.ball.hit_count = 0;

            let center = level.paddle.x;
            let contact = paddle_contact(&level, center + offset);
            level.on_solid_collision(&mut progress, &settings, &contact);

            let far_edge = (vx < 0.0 && contact.point.x > center + settings.hit_offset)
                || (vx > 0.0 && contact.point.x < center - settings.hit_offset);
            if far_edge {
                prop_assert_eq!(level.ball.vel.x, -vx);
            } else {
                prop_assert_eq!(level.ball.vel.x, vx);
            }
        }
    }
}
