use bytemuck::{Pod, Zeroable};

use crate::components::entity::Entity;
use crate::components::rect::Rect;

/// Per-entity body state published to renderers and level logic.
/// Must match the host protocol: 12 floats = 48 bytes stride.
///
/// Booleans are encoded as `0.0`/`1.0`, the direction as `-1.0`/`1.0`.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct BodySnapshot {
    /// Entity ID (as f32).
    pub id: f32,
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
    /// Facing: `1.0` right, `-1.0` left.
    pub direction: f32,
    /// `1.0` while supported by a ground surface.
    pub grounded: f32,
    /// `1.0` while a jump is in progress.
    pub jumping: f32,
    pub vx: f32,
    pub vy: f32,
    pub ax: f32,
    pub ay: f32,
}

impl BodySnapshot {
    pub const FLOATS: usize = 12;
    pub const STRIDE_BYTES: usize = Self::FLOATS * 4;

    pub fn of(entity: &Entity) -> Self {
        let body = &entity.body;
        Self {
            id: entity.id.0 as f32,
            x: body.rect.x,
            y: body.rect.y,
            w: body.rect.w,
            h: body.rect.h,
            direction: body.direction.sign(),
            grounded: flag(body.is_grounded()),
            jumping: flag(body.jumping),
            vx: body.speed.x,
            vy: body.speed.y,
            ax: body.accel.x,
            ay: body.accel.y,
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.w, self.h)
    }

    pub fn is_grounded(&self) -> bool {
        self.grounded != 0.0
    }
}

fn flag(value: bool) -> f32 {
    if value {
        1.0
    } else {
        0.0
    }
}

/// Buffer of body snapshots rebuilt once per frame.
pub struct SnapshotBuffer {
    pub snapshots: Vec<BodySnapshot>,
    capacity: usize,
}

impl SnapshotBuffer {
    pub fn new() -> Self {
        Self::with_capacity(256)
    }

    /// Create a buffer that holds at most `capacity` snapshots.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            snapshots: Vec::with_capacity(capacity),
            capacity,
        }
    }

    pub fn clear(&mut self) {
        self.snapshots.clear();
    }

    /// Push a snapshot. Returns `false` (and drops it) when the buffer is full.
    pub fn push(&mut self, snapshot: BodySnapshot) -> bool {
        if self.snapshots.len() >= self.capacity {
            return false;
        }
        self.snapshots.push(snapshot);
        true
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn snapshot_count(&self) -> u32 {
        self.snapshots.len() as u32
    }

    /// Snapshot data viewed as a flat float slice.
    pub fn as_floats(&self) -> &[f32] {
        bytemuck::cast_slice(&self.snapshots)
    }

    /// Raw pointer to snapshot data for shared-memory reads.
    pub fn snapshots_ptr(&self) -> *const f32 {
        self.snapshots.as_ptr() as *const f32
    }
}

impl Default for SnapshotBuffer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::types::EntityId;
    use glam::Vec2;

    #[test]
    fn snapshot_is_12_floats() {
        assert_eq!(std::mem::size_of::<BodySnapshot>(), 48);
        assert_eq!(BodySnapshot::FLOATS, 12);
    }

    #[test]
    fn snapshot_encodes_flags_and_direction() {
        let mut e = Entity::new(EntityId(4), Rect::new(1.0, 2.0, 3.0, 4.0));
        e.body.jumping = true;
        e.body.speed = Vec2::new(-2.0, 5.0);
        e.body.direction = crate::api::types::Direction::Left;
        let s = BodySnapshot::of(&e);
        assert_eq!(s.id, 4.0);
        assert_eq!(s.direction, -1.0);
        assert_eq!(s.jumping, 1.0);
        assert!(!s.is_grounded());
        assert_eq!(s.rect(), Rect::new(1.0, 2.0, 3.0, 4.0));
        assert_eq!((s.vx, s.vy), (-2.0, 5.0));
    }

    #[test]
    fn buffer_respects_capacity() {
        let mut buf = SnapshotBuffer::with_capacity(2);
        assert!(buf.push(BodySnapshot::default()));
        assert!(buf.push(BodySnapshot::default()));
        assert!(!buf.push(BodySnapshot::default()));
        assert_eq!(buf.snapshot_count(), 2);
        assert_eq!(buf.as_floats().len(), 2 * BodySnapshot::FLOATS);
    }
}
