use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::api::error::ConfigError;

/// Unique identifier for an entity in the world.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EntityId(pub u32);

/// Unique identifier for a static surface (ground, building block) in the world.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SurfaceId(pub u32);

/// Facing direction of an entity. Only two values exist, so the
/// "never zero" rule on the signed indicator holds by construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Left,
    #[default]
    Right,
}

impl Direction {
    /// Signed unit indicator: `+1.0` for right, `-1.0` for left.
    #[inline]
    pub fn sign(self) -> f32 {
        match self {
            Direction::Left => -1.0,
            Direction::Right => 1.0,
        }
    }

    pub fn reversed(self) -> Self {
        match self {
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }
}

/// A discrete movement command, as named by the input layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MoveCommand {
    Left,
    Right,
    Up,
    Down,
    Jump,
}

impl MoveCommand {
    pub const ALL: [MoveCommand; 5] = [
        MoveCommand::Left,
        MoveCommand::Right,
        MoveCommand::Up,
        MoveCommand::Down,
        MoveCommand::Jump,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            MoveCommand::Left => "left",
            MoveCommand::Right => "right",
            MoveCommand::Up => "up",
            MoveCommand::Down => "down",
            MoveCommand::Jump => "jump",
        }
    }
}

impl fmt::Display for MoveCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MoveCommand {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MoveCommand::ALL
            .into_iter()
            .find(|cmd| cmd.as_str() == s)
            .ok_or_else(|| ConfigError::UnknownCommand(s.to_owned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn direction_sign_is_unit() {
        assert_eq!(Direction::Right.sign(), 1.0);
        assert_eq!(Direction::Left.sign(), -1.0);
        assert_eq!(Direction::default(), Direction::Right);
        assert_eq!(Direction::Left.reversed(), Direction::Right);
    }

    #[test]
    fn commands_parse_by_name() {
        for cmd in MoveCommand::ALL {
            assert_eq!(cmd.to_string().parse::<MoveCommand>().unwrap(), cmd);
        }
        assert_eq!("jump".parse::<MoveCommand>().unwrap(), MoveCommand::Jump);
    }

    #[test]
    fn unknown_command_is_rejected() {
        let err = "sideways".parse::<MoveCommand>().unwrap_err();
        assert!(matches!(err, ConfigError::UnknownCommand(ref name) if name == "sideways"));
        assert!("Left".parse::<MoveCommand>().is_err());
    }
}
