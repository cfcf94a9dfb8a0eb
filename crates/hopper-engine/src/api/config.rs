use serde::{Deserialize, Serialize};

use crate::api::error::ConfigError;
use crate::core::time::TimeScaling;

/// Tunable constants of the kinematic simulation.
/// Every field has a default, so a JSON override only needs the fields it changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicsConfig {
    /// Simulated seconds per frame at the reference frame rate.
    pub game_speed: f32,
    /// Downward acceleration applied to airborne entities.
    pub gravity: f32,
    /// Horizontal acceleration set by a left/right command.
    pub x_acceleration: f32,
    /// Vertical acceleration set by an up/down command.
    pub y_acceleration: f32,
    /// Upward acceleration set by a jump command.
    pub jump_acceleration: f32,
    /// Horizontal speed cap (both directions).
    pub x_max_speed: f32,
    /// Vertical speed cap.
    pub y_max_speed: f32,
    /// Drag subtracted (against facing) when horizontal speed sits at the cap.
    pub air_displacement: f32,
    /// Per game-time-unit easing of a negative vertical acceleration toward zero.
    pub jump_easing: f32,
    /// Positional correction applied when an entity hits the left world edge.
    pub boundary_offset: f32,
    /// Inflation of the ground box when checking whether it still supports an entity.
    pub ground_inflate: f32,
    /// Horizontal deceleration while a left/right command is held. Zero keeps
    /// the acceleration exactly as the input set it.
    pub deceleration: f32,
    /// X coordinate of the left world boundary.
    pub world_left: f32,
    /// How raw frame delta-time maps to game time.
    pub time_scaling: TimeScaling,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            game_speed: 0.033,
            gravity: 10.0,
            x_acceleration: 10.0,
            y_acceleration: 5.0,
            jump_acceleration: 10.0,
            x_max_speed: 60.0,
            y_max_speed: 40.0,
            air_displacement: 30.0,
            jump_easing: 1.0,
            boundary_offset: 1.0,
            ground_inflate: 1.0,
            deceleration: 0.0,
            world_left: 0.0,
            time_scaling: TimeScaling::Inverse,
        }
    }
}

impl PhysicsConfig {
    /// Parse a config from a JSON string and validate it.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check every constant is usable by the integrator.
    pub fn validate(&self) -> Result<(), ConfigError> {
        positive("game_speed", self.game_speed)?;
        positive("x_max_speed", self.x_max_speed)?;
        positive("y_max_speed", self.y_max_speed)?;
        non_negative("x_acceleration", self.x_acceleration)?;
        non_negative("y_acceleration", self.y_acceleration)?;
        non_negative("jump_acceleration", self.jump_acceleration)?;
        non_negative("air_displacement", self.air_displacement)?;
        non_negative("jump_easing", self.jump_easing)?;
        non_negative("boundary_offset", self.boundary_offset)?;
        non_negative("ground_inflate", self.ground_inflate)?;
        finite("gravity", self.gravity)?;
        finite("deceleration", self.deceleration)?;
        finite("world_left", self.world_left)?;
        Ok(())
    }
}

fn finite(name: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::InvalidConstant { name, value, reason: "must be finite" })
    }
}

fn positive(name: &'static str, value: f32) -> Result<(), ConfigError> {
    finite(name, value)?;
    if value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::InvalidConstant { name, value, reason: "must be greater than zero" })
    }
}

fn non_negative(name: &'static str, value: f32) -> Result<(), ConfigError> {
    finite(name, value)?;
    if value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::InvalidConstant { name, value, reason: "must not be negative" })
    }
}

/// Configuration for a level, provided by the level itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LevelConfig {
    /// Human-readable level name (used in log lines).
    pub name: String,
    /// World width in game units.
    pub world_width: f32,
    /// World height in game units.
    pub world_height: f32,
    /// Maximum number of body snapshots published per frame (default: 256).
    pub max_snapshots: usize,
    /// Physics constants for every entity in the level.
    pub physics: PhysicsConfig,
}

impl Default for LevelConfig {
    fn default() -> Self {
        Self {
            name: String::from("untitled"),
            world_width: 800.0,
            world_height: 600.0,
            max_snapshots: 256,
            physics: PhysicsConfig::default(),
        }
    }
}

impl LevelConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        positive("world_width", config.world_width)?;
        positive("world_height", config.world_height)?;
        config.physics.validate()?;
        Ok(config)
    }
}
