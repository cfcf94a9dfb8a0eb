//! Per-tick integration of acceleration into speed and speed into position.
//!
//! Order within one tick:
//! 1. the ground tracker drops a support that no longer holds,
//! 2. grounded bodies with nothing acting on them stop here,
//! 3. horizontal speed, then vertical acceleration and speed,
//! 4. the left world boundary clamp,
//! 5. translation by `speed * game_time`.

use glam::Vec2;

use crate::api::config::PhysicsConfig;
use crate::api::types::Direction;
use crate::components::body::KinematicBody;
use crate::components::rect::Rect;

impl KinematicBody {
    /// Advance the body by one frame of `game_time`.
    ///
    /// `support` is the box of the surface the body references as its
    /// ground, or `None` when that surface no longer exists.
    pub fn tick(&mut self, game_time: f32, support: Option<&Rect>, config: &PhysicsConfig) {
        if self.is_grounded() {
            self.track_support(support, config.ground_inflate);
            if self.is_grounded() && self.is_at_rest() {
                return;
            }
        }
        // Paused frame.
        if game_time == 0.0 {
            return;
        }
        self.integrate(game_time, config);
    }

    fn integrate(&mut self, game_time: f32, config: &PhysicsConfig) {
        let incoming_x = self.speed.x;
        self.integrate_horizontal(game_time, config);
        self.integrate_vertical(game_time, config);
        let offset = self.clamp_to_boundary(incoming_x, game_time, config);

        let delta = self.speed * game_time;
        self.rect.translate(Vec2::new(delta.x + offset, delta.y));
        log::trace!(
            "speed: ({}, {}), accel: ({}, {})",
            self.speed.x,
            self.speed.y,
            self.accel.x,
            self.accel.y
        );
    }

    fn integrate_horizontal(&mut self, game_time: f32, config: &PhysicsConfig) {
        if self.moving_x {
            self.accel.x -= config.deceleration;
        }

        let max = config.x_max_speed;
        let speed = if -max < self.speed.x && self.speed.x < max {
            match self.direction {
                Direction::Right => (self.accel.x * game_time + self.speed.x).min(max),
                Direction::Left => (self.accel.x * game_time - self.speed.x).max(-max),
            }
        } else {
            // At the cap: air displacement drag against the facing.
            self.speed.x - self.direction.sign() * config.air_displacement
        };
        self.speed.x = speed.clamp(-max, max);
    }

    fn integrate_vertical(&mut self, game_time: f32, config: &PhysicsConfig) {
        let easing = config.jump_easing * game_time;

        if self.accel.y < 0.0 {
            // Still rising: ease the impulse out.
            self.accel.y += easing;
            self.ground = None;
        } else if self.ground.is_none() {
            self.accel.y = config.gravity * game_time;
        } else {
            self.accel.y = 0.0;
            // A grounded jumper settles here, so the jump easing below only
            // ever runs while airborne.
            if self.jumping {
                log::debug!("jump settled at {:?}", self.rect.pos());
                self.jumping = false;
            }
        }

        if self.jumping {
            if self.accel.y < 0.0 && self.speed.y > -config.y_max_speed {
                self.speed.y += self.accel.y * game_time;
            } else {
                self.accel.y += easing;
            }
        }

        if self.ground.is_some() {
            self.speed.y = 0.0;
        } else if self.speed.y < config.y_max_speed {
            self.speed.y += self.accel.y * game_time;
        } else {
            // Speed is capped; the excess bleeds into the acceleration.
            self.accel.y += easing;
        }

        if 0.0 < self.accel.y && self.accel.y < 2.0 {
            log::trace!("vertical accel on turn-around: {}", self.accel.y);
        }
    }

    /// Stop horizontal motion at the left world edge. Returns the positional
    /// correction to apply this tick.
    ///
    /// A body past the edge, pressing against it, or about to cross it this
    /// tick ends up at `world_left + boundary_offset` with no horizontal motion.
    fn clamp_to_boundary(&mut self, incoming_x: f32, game_time: f32, config: &PhysicsConfig) -> f32 {
        let left = self.rect.left();
        let edge = config.world_left;
        let pressing = left <= edge && incoming_x < 0.0;
        let crossing = left + self.speed.x * game_time < edge;
        if left < edge || pressing || crossing {
            log::debug!("left boundary hit at x={left}");
            self.speed.x = 0.0;
            self.accel.x = 0.0;
            edge - left + config.boundary_offset
        } else {
            0.0
        }
    }
}
