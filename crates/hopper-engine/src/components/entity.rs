use std::fmt;

use glam::Vec2;

use crate::api::error::ConfigError;
use crate::api::types::EntityId;
use crate::components::behavior::Behavior;
use crate::components::body::KinematicBody;
use crate::components::rect::Rect;
use crate::components::sprite::SpriteComponent;

/// Player hitbox size used when a level does not give one.
pub const PLAYER_SIZE: [f32; 2] = [47.0, 30.0];

/// What drives an entity's movement commands.
pub enum EntityKind {
    /// Driven by the input queue.
    Player,
    /// Driven by its own decision hook.
    Monster(Box<dyn Behavior>),
}

impl fmt::Debug for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntityKind::Player => f.write_str("Player"),
            EntityKind::Monster(_) => f.write_str("Monster"),
        }
    }
}

/// Fat Entity: kinematic body plus the little bookkeeping around it.
#[derive(Debug)]
pub struct Entity {
    /// Unique identifier, allocated by the world.
    pub id: EntityId,
    /// String tag for finding entities by name.
    pub tag: String,
    /// Whether this entity is active (inactive entities are skipped).
    pub active: bool,
    pub body: KinematicBody,
    pub sprite: SpriteComponent,
    pub kind: EntityKind,
}

impl Entity {
    /// Create a player-driven entity occupying `rect`.
    pub fn new(id: EntityId, rect: Rect) -> Self {
        Self {
            id,
            tag: String::new(),
            active: true,
            body: KinematicBody::new(rect),
            sprite: SpriteComponent::default(),
            kind: EntityKind::Player,
        }
    }

    /// The player entity, tagged `"player"`.
    pub fn player(id: EntityId, pos: Vec2, size: &[f32]) -> Result<Self, ConfigError> {
        let rect = Rect::from_pos_size(pos, size)?;
        Ok(Self::new(id, rect)
            .with_tag("player")
            .with_sprite(SpriteComponent::new("player")))
    }

    /// A monster driven by `behavior`, tagged `"monster"`.
    pub fn monster(
        id: EntityId,
        pos: Vec2,
        size: &[f32],
        behavior: impl Behavior + 'static,
    ) -> Result<Self, ConfigError> {
        let rect = Rect::from_pos_size(pos, size)?;
        Ok(Self::new(id, rect)
            .with_tag("monster")
            .with_sprite(SpriteComponent::new("monster"))
            .with_kind(EntityKind::Monster(Box::new(behavior))))
    }

    // -- Builder pattern --

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = tag.into();
        self
    }

    pub fn with_sprite(mut self, sprite: SpriteComponent) -> Self {
        self.sprite = sprite;
        self
    }

    pub fn with_kind(mut self, kind: EntityKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn is_player(&self) -> bool {
        matches!(self.kind, EntityKind::Player)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::behavior::Idle;

    #[test]
    fn player_is_tagged_and_at_rest() {
        let p = Entity::player(EntityId(1), Vec2::new(50.0, 50.0), &PLAYER_SIZE).unwrap();
        assert_eq!(p.tag, "player");
        assert!(p.is_player());
        assert!(p.body.is_at_rest());
        assert_eq!(p.body.rect, Rect::new(50.0, 50.0, 47.0, 30.0));
    }

    #[test]
    fn monster_carries_behavior() {
        let m = Entity::monster(EntityId(2), Vec2::ZERO, &[20.0, 20.0], Idle).unwrap();
        assert!(!m.is_player());
        assert_eq!(format!("{:?}", m.kind), "Monster");
    }

    #[test]
    fn malformed_size_aborts_creation() {
        let err = Entity::player(EntityId(3), Vec2::ZERO, &[47.0, 30.0, 1.0]).unwrap_err();
        assert!(matches!(err, ConfigError::SizeArity { len: 3 }));
    }
}
