use glam::Vec2;

use crate::api::types::{Direction, SurfaceId};
use crate::components::rect::Rect;

/// Kinematic state of one physics-driven actor.
///
/// `speed` and `accel` hold the horizontal component in `x` and the vertical
/// component in `y`. Units are game distance per game-time unit (and per
/// game-time unit squared); see [`crate::core::time`].
#[derive(Debug, Clone, PartialEq)]
pub struct KinematicBody {
    /// Bounding box in world space.
    pub rect: Rect,
    /// Facing direction.
    pub direction: Direction,
    pub speed: Vec2,
    pub accel: Vec2,
    /// A left/right command is being held.
    pub moving_x: bool,
    /// A jump is in progress (raised by the jump command, cleared on settling).
    pub jumping: bool,
    /// Surface currently supporting the body. A back-reference into the
    /// world's surfaces; the body never owns it.
    pub ground: Option<SurfaceId>,
}

impl KinematicBody {
    /// A body at `rect`, facing right, at rest and airborne.
    pub fn new(rect: Rect) -> Self {
        Self {
            rect,
            direction: Direction::Right,
            speed: Vec2::ZERO,
            accel: Vec2::ZERO,
            moving_x: false,
            jumping: false,
            ground: None,
        }
    }

    pub fn with_direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    pub fn with_speed(mut self, speed: Vec2) -> Self {
        self.speed = speed;
        self
    }

    pub fn with_accel(mut self, accel: Vec2) -> Self {
        self.accel = accel;
        self
    }

    #[inline]
    pub fn is_grounded(&self) -> bool {
        self.ground.is_some()
    }

    /// No speed, no acceleration and no pending jump.
    pub fn is_at_rest(&self) -> bool {
        self.speed == Vec2::ZERO && self.accel == Vec2::ZERO && !self.jumping
    }
}
