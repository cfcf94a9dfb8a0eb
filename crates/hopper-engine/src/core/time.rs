//! Time normalization: raw frame delta-time → dimensionless game time.
//!
//! Every speed and acceleration update is scaled by the game time of the
//! current frame, which decouples simulated motion from the render rate.

use serde::{Deserialize, Serialize};

use crate::api::config::PhysicsConfig;
use crate::api::error::PhysicsError;

/// How a frame's delta-time maps to game time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeScaling {
    /// `1 / dt / game_speed`. Slower frames yield a smaller multiplier,
    /// which caps the extra distance simulated during frame-rate drops.
    #[default]
    Inverse,
    /// `dt / game_speed`. Game time grows with real elapsed time.
    Proportional,
}

/// Game time for one frame. A zero delta-time is a paused frame and yields
/// zero; so does a delta small enough to overflow the inverse policy.
pub fn game_time(dt: f32, game_speed: f32, scaling: TimeScaling) -> f32 {
    if dt == 0.0 {
        return 0.0;
    }
    let t = match scaling {
        TimeScaling::Inverse => 1.0 / dt / game_speed,
        TimeScaling::Proportional => dt / game_speed,
    };
    if t.is_finite() {
        t
    } else {
        log::warn!("game time overflowed for dt={dt}, treating frame as paused");
        0.0
    }
}

/// Frame clock: validates delta-times and counts frames.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GameClock {
    game_speed: f32,
    scaling: TimeScaling,
    frames: u64,
}

impl GameClock {
    pub fn new(game_speed: f32, scaling: TimeScaling) -> Self {
        Self {
            game_speed,
            scaling,
            frames: 0,
        }
    }

    pub fn from_config(config: &PhysicsConfig) -> Self {
        Self::new(config.game_speed, config.time_scaling)
    }

    /// Normalize one frame's delta-time. Negative or non-finite values are
    /// rejected without advancing the clock.
    pub fn advance(&mut self, dt: f32) -> Result<f32, PhysicsError> {
        if !dt.is_finite() || dt < 0.0 {
            return Err(PhysicsError::InvalidDeltaTime { dt });
        }
        self.frames += 1;
        Ok(game_time(dt, self.game_speed, self.scaling))
    }

    /// Number of frames accepted so far.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn scaling(&self) -> TimeScaling {
        self.scaling
    }
}
