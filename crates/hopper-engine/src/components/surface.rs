use glam::Vec2;

use crate::api::error::ConfigError;
use crate::api::types::SurfaceId;
use crate::components::rect::Rect;

/// A static surface entities can stand on.
#[derive(Debug, Clone, PartialEq)]
pub struct Ground {
    pub id: SurfaceId,
    /// Resource name the renderer draws this surface with.
    pub resource: String,
    pub rect: Rect,
}

impl Ground {
    pub fn new(
        id: SurfaceId,
        resource: impl Into<String>,
        pos: Vec2,
        size: &[f32],
    ) -> Result<Self, ConfigError> {
        Ok(Self {
            id,
            resource: resource.into(),
            rect: Rect::from_pos_size(pos, size)?,
        })
    }

    /// Y coordinate of the top edge, where entities get snapped to.
    #[inline]
    pub fn floor_y(&self) -> f32 {
        self.rect.top()
    }
}

/// A solid obstacle. Side-aware collision response is not handled yet;
/// touching one is only reported.
#[derive(Debug, Clone, PartialEq)]
pub struct BuildingBlock {
    pub id: SurfaceId,
    pub resource: String,
    pub rect: Rect,
}

impl BuildingBlock {
    pub fn new(
        id: SurfaceId,
        resource: impl Into<String>,
        pos: Vec2,
        size: &[f32],
    ) -> Result<Self, ConfigError> {
        Ok(Self {
            id,
            resource: resource.into(),
            rect: Rect::from_pos_size(pos, size)?,
        })
    }
}

/// Everything an entity can collide with. New partner kinds are added
/// as variants; callers dispatch with `match`.
#[derive(Debug, Clone, PartialEq)]
pub enum Surface {
    Ground(Ground),
    BuildingBlock(BuildingBlock),
}

impl Surface {
    pub fn id(&self) -> SurfaceId {
        match self {
            Surface::Ground(g) => g.id,
            Surface::BuildingBlock(b) => b.id,
        }
    }

    pub fn rect(&self) -> &Rect {
        match self {
            Surface::Ground(g) => &g.rect,
            Surface::BuildingBlock(b) => &b.rect,
        }
    }

    pub fn resource(&self) -> &str {
        match self {
            Surface::Ground(g) => &g.resource,
            Surface::BuildingBlock(b) => &b.resource,
        }
    }

    pub fn as_ground(&self) -> Option<&Ground> {
        match self {
            Surface::Ground(g) => Some(g),
            Surface::BuildingBlock(_) => None,
        }
    }
}

impl From<Ground> for Surface {
    fn from(ground: Ground) -> Self {
        Surface::Ground(ground)
    }
}

impl From<BuildingBlock> for Surface {
    fn from(block: BuildingBlock) -> Self {
        Surface::BuildingBlock(block)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn floor_is_top_edge() {
        let g = Ground::new(SurfaceId(1), "forest_ground", Vec2::new(0.0, 300.0), &[1600.0, 300.0])
            .unwrap();
        assert_eq!(g.floor_y(), 300.0);
        let s = Surface::from(g);
        assert_eq!(s.id(), SurfaceId(1));
        assert!(s.as_ground().is_some());
        assert_eq!(s.resource(), "forest_ground");
    }

    #[test]
    fn block_is_not_ground() {
        let b = BuildingBlock::new(SurfaceId(2), "crate", Vec2::ZERO, &[32.0, 32.0]).unwrap();
        assert!(Surface::from(b).as_ground().is_none());
    }

    #[test]
    fn malformed_size_fails_construction() {
        let err = Ground::new(SurfaceId(3), "ground", Vec2::ZERO, &[10.0]).unwrap_err();
        assert!(matches!(err, ConfigError::SizeArity { len: 1 }));
    }
}
