//! Ground tracking: acquiring, keeping and losing a supporting surface.

use glam::Vec2;

use crate::components::body::KinematicBody;
use crate::components::rect::Rect;
use crate::components::surface::{Ground, Surface};

/// How far a grounded body's bottom edge sinks into its floor.
/// Keeps the body overlapping the surface so support is not lost by rounding.
pub const FLOOR_OVERLAP: f32 = 1.0;

impl KinematicBody {
    /// Ground the body on `ground` and stop vertical movement.
    ///
    /// Landing from the air also clears both accelerations. The bottom edge is
    /// always re-snapped onto the floor.
    pub fn set_ground(&mut self, ground: &Ground) {
        if self.ground.is_none() {
            log::debug!("body landed on surface {:?}", ground.id);
            self.accel = Vec2::ZERO;
        }
        self.ground = Some(ground.id);
        self.speed.y = 0.0;
        self.rect.set_bottom(ground.floor_y() + FLOOR_OVERLAP);
    }

    /// Collision callback. Dispatches on the kind of surface touched.
    ///
    /// A body moving up never lands: a jump that has not yet cleared the
    /// floor keeps rising.
    pub fn on_collision(&mut self, other: &Surface) {
        match other {
            Surface::Ground(_) if self.speed.y < 0.0 => {}
            Surface::Ground(ground) => self.set_ground(ground),
            Surface::BuildingBlock(block) => {
                // TODO: resolve by the side the block was touched from.
                log::warn!(
                    "building block {:?} touched at {:?}, side-aware response not handled",
                    block.id,
                    self.rect.pos()
                );
            }
        }
    }

    /// Drop the ground reference if its surface is gone or no longer overlaps
    /// the body. `support` is the current box of the referenced surface.
    pub fn track_support(&mut self, support: Option<&Rect>, inflate: f32) {
        let Some(id) = self.ground else {
            return;
        };
        let supported = support
            .map(|floor| self.rect.intersects(&floor.inflate(inflate, inflate)))
            .unwrap_or(false);
        if !supported {
            log::debug!("body lost support of surface {id:?}");
            self.ground = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::types::SurfaceId;
    use crate::components::surface::BuildingBlock;

    fn floor() -> Ground {
        Ground::new(SurfaceId(7), "ground", Vec2::new(0.0, 300.0), &[800.0, 300.0]).unwrap()
    }

    #[test]
    fn landing_snaps_and_clears_accel() {
        let ground = floor();
        let mut body = KinematicBody::new(Rect::new(50.0, 250.0, 47.0, 30.0))
            .with_accel(Vec2::new(10.0, 4.0))
            .with_speed(Vec2::new(3.0, 12.0));
        body.set_ground(&ground);
        assert_eq!(body.ground, Some(SurfaceId(7)));
        assert_eq!(body.accel, Vec2::ZERO);
        assert_eq!(body.speed, Vec2::new(3.0, 0.0));
        assert_eq!(body.rect.bottom(), 301.0);
    }

    #[test]
    fn regrounding_keeps_horizontal_accel() {
        let ground = floor();
        let mut body = KinematicBody::new(Rect::new(50.0, 271.0, 47.0, 30.0));
        body.set_ground(&ground);
        body.accel.x = 10.0;
        body.set_ground(&ground);
        assert_eq!(body.accel.x, 10.0);
    }

    #[test]
    fn building_block_causes_no_correction() {
        let block = BuildingBlock::new(SurfaceId(9), "block", Vec2::ZERO, &[32.0, 32.0]).unwrap();
        let mut body = KinematicBody::new(Rect::new(10.0, 10.0, 47.0, 30.0));
        let before = body.clone();
        body.on_collision(&Surface::BuildingBlock(block));
        assert_eq!(body, before);
    }

    #[test]
    fn rising_body_passes_through_ground() {
        let ground = floor();
        let mut body = KinematicBody::new(Rect::new(50.0, 270.5, 47.0, 30.0))
            .with_speed(Vec2::new(0.0, -1.2))
            .with_accel(Vec2::new(0.0, -9.0));
        body.on_collision(&Surface::Ground(ground));
        assert!(!body.is_grounded());
        assert_eq!(body.accel.y, -9.0);
        assert_eq!(body.rect.y, 270.5);
    }

    #[test]
    fn body_at_rest_lands_on_contact() {
        let ground = floor();
        let mut body = KinematicBody::new(Rect::new(50.0, 275.0, 47.0, 30.0));
        body.on_collision(&Surface::Ground(ground));
        assert!(body.is_grounded());
        assert_eq!(body.rect.bottom(), 301.0);
    }

    #[test]
    fn support_is_kept_while_overlapping() {
        let ground = floor();
        let mut body = KinematicBody::new(Rect::new(50.0, 0.0, 47.0, 30.0));
        body.set_ground(&ground);
        body.track_support(Some(&ground.rect), 1.0);
        assert!(body.is_grounded());
    }

    #[test]
    fn support_is_lost_when_walking_off() {
        let ground = floor();
        let mut body = KinematicBody::new(Rect::new(50.0, 0.0, 47.0, 30.0));
        body.set_ground(&ground);
        body.rect.x = 900.0;
        body.track_support(Some(&ground.rect), 1.0);
        assert!(!body.is_grounded());
    }

    #[test]
    fn support_is_lost_when_surface_is_gone() {
        let ground = floor();
        let mut body = KinematicBody::new(Rect::new(50.0, 0.0, 47.0, 30.0));
        body.set_ground(&ground);
        body.track_support(None, 1.0);
        assert_eq!(body.ground, None);
    }
}
