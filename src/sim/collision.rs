//! Collision detection and response for axis-aligned boxes
//!
//! Every body in the arena (walls, paddle, bricks) is a box; the ball is a
//! circle. Detection returns the contact point on the box surface and the
//! normal pointing from the box toward the ball, for reflection.

use glam::Vec2;

/// Axis-aligned box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub center: Vec2,
    pub half: Vec2,
}

impl Aabb {
    pub fn new(center: Vec2, size: Vec2) -> Self {
        Self {
            center,
            half: size / 2.0,
        }
    }

    pub fn min(&self) -> Vec2 {
        self.center - self.half
    }

    pub fn max(&self) -> Vec2 {
        self.center + self.half
    }
}

/// Circle-vs-box contact
#[derive(Debug, Clone)]
pub struct CollisionResult {
    pub hit: bool,
    /// Collision point on the box surface (if hit)
    pub point: Vec2,
    /// Surface normal at collision (pointing toward ball center, for reflection)
    pub normal: Vec2,
    /// Penetration depth (for position correction)
    pub penetration: f32,
}

impl CollisionResult {
    pub fn miss() -> Self {
        Self {
            hit: false,
            point: Vec2::ZERO,
            normal: Vec2::ZERO,
            penetration: 0.0,
        }
    }
}

/// Check collision between a ball and a box
pub fn ball_box_collision(ball_pos: Vec2, ball_radius: f32, rect: &Aabb) -> CollisionResult {
    let (min, max) = (rect.min(), rect.max());
    let closest = ball_pos.clamp(min, max);
    let delta = ball_pos - closest;
    let dist_sq = delta.length_squared();

    if dist_sq > ball_radius * ball_radius {
        return CollisionResult::miss();
    }

    if dist_sq > 1e-12 {
        let dist = dist_sq.sqrt();
        return CollisionResult {
            hit: true,
            point: closest,
            normal: delta / dist,
            penetration: ball_radius - dist,
        };
    }

    // Center inside the box (tunneling): leave through the nearest face
    let to_left = ball_pos.x - min.x;
    let to_right = max.x - ball_pos.x;
    let to_bottom = ball_pos.y - min.y;
    let to_top = max.y - ball_pos.y;
    let nearest = to_left.min(to_right).min(to_bottom).min(to_top);

    let (normal, point) = if nearest == to_top {
        (Vec2::Y, Vec2::new(ball_pos.x, max.y))
    } else if nearest == to_bottom {
        (Vec2::NEG_Y, Vec2::new(ball_pos.x, min.y))
    } else if nearest == to_left {
        (Vec2::NEG_X, Vec2::new(min.x, ball_pos.y))
    } else {
        (Vec2::X, Vec2::new(max.x, ball_pos.y))
    };

    CollisionResult {
        hit: true,
        point,
        normal,
        penetration: nearest + ball_radius,
    }
}

/// `v - 2(v·n)n`
#[inline]
pub fn reflect_velocity(velocity: Vec2, normal: Vec2) -> Vec2 {
    velocity - 2.0 * velocity.dot(normal) * normal
}
