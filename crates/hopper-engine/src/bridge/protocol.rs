/// Shared float-buffer layout.
/// Must stay in sync with the host's reader.
///
/// Layout (all values in f32 / 4 bytes):
/// ```text
/// [Header: 8 floats]
/// [Snapshots: max_snapshots × 12 floats]
/// ```
///
/// Capacities are written into the header every frame.
/// The host reads them from the header to compute offsets dynamically.

use crate::api::config::LevelConfig;
use crate::renderer::snapshot::{BodySnapshot, SnapshotBuffer};

/// Number of floats in the header section.
pub const HEADER_FLOATS: usize = 8;

/// Header field indices.
pub const HEADER_PROTOCOL_VERSION: usize = 0;
pub const HEADER_FRAME_COUNTER: usize = 1;
pub const HEADER_MAX_SNAPSHOTS: usize = 2;
pub const HEADER_SNAPSHOT_COUNT: usize = 3;
pub const HEADER_WORLD_WIDTH: usize = 4;
pub const HEADER_WORLD_HEIGHT: usize = 5;
pub const HEADER_PLAYER_ID: usize = 6;
pub const HEADER_RESERVED: usize = 7;

/// Protocol version written into the header.
pub const PROTOCOL_VERSION: f32 = 1.0;

/// Floats per body snapshot (fixed wire format).
pub const SNAPSHOT_FLOATS: usize = BodySnapshot::FLOATS;

/// Runtime-computed buffer layout.
#[derive(Debug, Clone, PartialEq)]
pub struct ProtocolLayout {
    /// Maximum body snapshots.
    pub max_snapshots: usize,
    /// Size of the snapshot section in floats.
    pub snapshot_data_floats: usize,
    /// Offset (in floats) where snapshot data begins.
    pub snapshot_data_offset: usize,
    /// Total buffer size in floats.
    pub buffer_total_floats: usize,
    /// Total buffer size in bytes.
    pub buffer_total_bytes: usize,
}

/// Per-frame values written into the header.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameHeader {
    pub frame: u64,
    pub world_width: f32,
    pub world_height: f32,
    /// Player entity ID, or `-1.0` when the level has none.
    pub player_id: f32,
}

impl ProtocolLayout {
    /// Compute layout from a raw capacity.
    pub fn new(max_snapshots: usize) -> Self {
        let snapshot_data_floats = max_snapshots * SNAPSHOT_FLOATS;
        let snapshot_data_offset = HEADER_FLOATS;
        let buffer_total_floats = snapshot_data_offset + snapshot_data_floats;

        Self {
            max_snapshots,
            snapshot_data_floats,
            snapshot_data_offset,
            buffer_total_floats,
            buffer_total_bytes: buffer_total_floats * 4,
        }
    }

    /// Compute layout from a LevelConfig.
    pub fn from_config(config: &LevelConfig) -> Self {
        Self::new(config.max_snapshots)
    }

    /// Write header and snapshots into `out`, resizing it to the full layout.
    /// Snapshots beyond `max_snapshots` are not written.
    pub fn pack(&self, header: &FrameHeader, snapshots: &SnapshotBuffer, out: &mut Vec<f32>) {
        out.clear();
        out.resize(self.buffer_total_floats, 0.0);

        let count = snapshots.snapshots.len().min(self.max_snapshots);
        out[HEADER_PROTOCOL_VERSION] = PROTOCOL_VERSION;
        out[HEADER_FRAME_COUNTER] = header.frame as f32;
        out[HEADER_MAX_SNAPSHOTS] = self.max_snapshots as f32;
        out[HEADER_SNAPSHOT_COUNT] = count as f32;
        out[HEADER_WORLD_WIDTH] = header.world_width;
        out[HEADER_WORLD_HEIGHT] = header.world_height;
        out[HEADER_PLAYER_ID] = header.player_id;
        out[HEADER_RESERVED] = 0.0;

        let floats = &snapshots.as_floats()[..count * SNAPSHOT_FLOATS];
        let start = self.snapshot_data_offset;
        out[start..start + floats.len()].copy_from_slice(floats);
    }
}
