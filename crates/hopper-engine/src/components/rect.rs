use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::api::error::ConfigError;

/// Axis-aligned bounding box. Origin is the top-left corner,
/// x grows rightward and y grows downward.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    /// Build a rect from a position and a `[width, height]` size.
    /// Anything but exactly two finite, non-negative extents is rejected.
    pub fn from_pos_size(pos: Vec2, size: &[f32]) -> Result<Self, ConfigError> {
        if !pos.is_finite() {
            return Err(ConfigError::InvalidPosition { x: pos.x, y: pos.y });
        }
        let &[w, h] = size else {
            return Err(ConfigError::SizeArity { len: size.len() });
        };
        if !(w.is_finite() && h.is_finite()) || w < 0.0 || h < 0.0 {
            return Err(ConfigError::InvalidExtent { width: w, height: h });
        }
        Ok(Self::new(pos.x, pos.y, w, h))
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }

    pub fn pos(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    pub fn size(&self) -> Vec2 {
        Vec2::new(self.w, self.h)
    }

    /// Move the rect vertically so its bottom edge sits at `y`.
    pub fn set_bottom(&mut self, y: f32) {
        self.y = y - self.h;
    }

    /// A copy grown by `dw`/`dh` in total, keeping the same centre.
    pub fn inflate(&self, dw: f32, dh: f32) -> Self {
        Self::new(self.x - dw / 2.0, self.y - dh / 2.0, self.w + dw, self.h + dh)
    }

    /// Strict overlap test: rects that only share an edge do not intersect.
    pub fn intersects(&self, other: &Rect) -> bool {
        self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }

    pub fn translate(&mut self, delta: Vec2) {
        self.x += delta.x;
        self.y += delta.y;
    }
}
