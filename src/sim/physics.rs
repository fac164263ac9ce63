//! Contact feed
//!
//! Stands in for the 2D physics collaborator: moves the ball, bounces it off
//! solid bodies and reports collision and overlap events. Solid hits are
//! reported when the ball moves into a surface; triggers are reported once
//! on entry and again only after the ball has left them.

use glam::Vec2;

use super::catalog::Category;
use super::collision::{Aabb, ball_box_collision, reflect_velocity};
use super::state::{Ball, Brick, Paddle};
use crate::consts::*;

/// Maximum ball substeps per physics step
const MAX_CONTACT_SUBSTEPS: usize = 20;
/// Extra separation after push-out so the next substep starts clear
const CONTACT_SKIN: f32 = 1e-3;

/// Identity of a body in the arena
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BodyId {
    LeftWall,
    RightWall,
    TopWall,
    BottomZone,
    Paddle,
    Brick(u32),
}

/// A contact as delivered to the resolver
#[derive(Debug, Clone, PartialEq)]
pub struct Contact {
    pub category: Category,
    /// Contact point on the other body's surface
    pub point: Vec2,
    /// Brick id when the other body is a brick
    pub brick: Option<u32>,
    /// Position of the other body
    pub other_center: Vec2,
}

#[derive(Debug, Clone, PartialEq)]
pub enum PhysicsEvent {
    /// Solid contact
    Collision(Contact),
    /// Trigger entry
    Overlap(Contact),
}

#[derive(Debug, Clone)]
struct Body {
    id: BodyId,
    category: Category,
    rect: Aabb,
    trigger: bool,
}

/// Arena walls plus trigger bookkeeping
#[derive(Debug, Clone)]
pub struct ContactFeed {
    walls: Vec<Body>,
    overlapping: Vec<BodyId>,
}

impl Default for ContactFeed {
    fn default() -> Self {
        Self::new(ARENA_HALF_WIDTH, ARENA_TOP, ARENA_BOTTOM, WALL_THICKNESS)
    }
}

impl ContactFeed {
    pub fn new(half_width: f32, top: f32, bottom: f32, thickness: f32) -> Self {
        let height = top - bottom;
        let mid_y = (top + bottom) / 2.0;
        let side = Vec2::new(thickness, height + 2.0 * thickness);
        let span = Vec2::new(2.0 * (half_width + thickness), thickness);

        let walls = vec![
            Body {
                id: BodyId::LeftWall,
                category: Category::SideWall,
                rect: Aabb::new(Vec2::new(-half_width - thickness / 2.0, mid_y), side),
                trigger: false,
            },
            Body {
                id: BodyId::RightWall,
                category: Category::SideWall,
                rect: Aabb::new(Vec2::new(half_width + thickness / 2.0, mid_y), side),
                trigger: false,
            },
            Body {
                id: BodyId::TopWall,
                category: Category::TopWall,
                rect: Aabb::new(Vec2::new(0.0, top + thickness / 2.0), span),
                trigger: false,
            },
            Body {
                id: BodyId::BottomZone,
                category: Category::BottomWall,
                rect: Aabb::new(Vec2::new(0.0, bottom - thickness / 2.0), span),
                trigger: true,
            },
        ];

        Self {
            walls,
            overlapping: Vec::new(),
        }
    }

    /// Triggers the ball is currently inside
    pub fn overlapping(&self) -> &[BodyId] {
        &self.overlapping
    }

    fn bodies(&self, paddle: &Paddle, bricks: &[Brick]) -> Vec<Body> {
        let mut bodies = self.walls.clone();
        bodies.push(Body {
            id: BodyId::Paddle,
            category: Category::Paddle,
            rect: Aabb::new(paddle.center(), paddle.size()),
            trigger: false,
        });
        bodies.extend(bricks.iter().map(|brick| Body {
            id: BodyId::Brick(brick.id),
            category: Category::Brick(brick.kind),
            rect: Aabb::new(brick.center, brick.size),
            trigger: brick.kind.is_trigger(),
        }));
        bodies
    }

    /// Advance the ball by `dt` and collect contact events in the order they happened
    pub fn step(
        &mut self,
        ball: &mut Ball,
        paddle: &Paddle,
        bricks: &[Brick],
        dt: f32,
    ) -> Vec<PhysicsEvent> {
        let mut events = Vec::new();
        if !ball.visible {
            return events;
        }

        let bodies = self.bodies(paddle, bricks);
        // Forget triggers that no longer exist (destroyed bricks)
        self.overlapping.retain(|id| bodies.iter().any(|b| b.id == *id));

        let move_dist = ball.vel.length() * dt;
        let step_size = ball.radius * 0.5;
        let num_steps = ((move_dist / step_size).ceil() as usize).clamp(1, MAX_CONTACT_SUBSTEPS);
        let step_dt = dt / num_steps as f32;

        // Bricks hit this step are gone once the resolver sees the event
        let mut struck: Vec<BodyId> = Vec::new();

        for _step in 0..num_steps {
            ball.pos += ball.vel * step_dt;

            for body in bodies.iter().filter(|b| !b.trigger) {
                if matches!(body.id, BodyId::Brick(_)) && struck.contains(&body.id) {
                    continue;
                }
                let result = ball_box_collision(ball.pos, ball.radius, &body.rect);
                if !result.hit {
                    continue;
                }

                let moving_toward = ball.vel.dot(result.normal) < 0.0;
                if moving_toward {
                    ball.vel = reflect_velocity(ball.vel, result.normal);
                }
                ball.pos += result.normal * (result.penetration + CONTACT_SKIN);

                if moving_toward {
                    struck.push(body.id);
                    events.push(PhysicsEvent::Collision(contact(body, result.point)));
                }
                break; // One solid contact per substep
            }

            for body in bodies.iter().filter(|b| b.trigger) {
                let result = ball_box_collision(ball.pos, ball.radius, &body.rect);
                let was_inside = self.overlapping.contains(&body.id);
                if result.hit && !was_inside {
                    self.overlapping.push(body.id);
                    events.push(PhysicsEvent::Overlap(contact(body, result.point)));
                } else if !result.hit && was_inside {
                    self.overlapping.retain(|id| *id != body.id);
                }
            }
        }

        events
    }
}

fn contact(body: &Body, point: Vec2) -> Contact {
    Contact {
        category: body.category,
        point,
        brick: match body.id {
            BodyId::Brick(id) => Some(id),
            _ => None,
        },
        other_center: body.rect.center,
    }
}
