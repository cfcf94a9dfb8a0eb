use thiserror::Error;

use crate::api::types::EntityId;

/// Errors raised while building entities, surfaces or configuration.
/// These abort the offending construction; nothing half-built is kept.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("size must have exactly 2 components, got {len}")]
    SizeArity { len: usize },

    #[error("invalid extent {width}x{height}: width and height must be finite and non-negative")]
    InvalidExtent { width: f32, height: f32 },

    #[error("invalid position ({x}, {y}): coordinates must be finite")]
    InvalidPosition { x: f32, y: f32 },

    #[error("invalid physics constant `{name}` = {value}: {reason}")]
    InvalidConstant {
        name: &'static str,
        value: f32,
        reason: &'static str,
    },

    #[error("unknown movement command `{0}`")]
    UnknownCommand(String),

    #[error("malformed config JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors raised by a simulation step. All of them are recoverable:
/// the caller can skip the frame and keep its loop running.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PhysicsError {
    #[error("invalid frame delta-time {dt}: must be finite and non-negative")]
    InvalidDeltaTime { dt: f32 },

    #[error("no entity with id {0:?}")]
    UnknownEntity(EntityId),
}
