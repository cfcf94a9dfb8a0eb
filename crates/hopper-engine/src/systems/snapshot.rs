use crate::components::entity::Entity;
use crate::renderer::snapshot::{BodySnapshot, SnapshotBuffer};

/// Rebuild the snapshot buffer from a set of entities.
/// Inactive entities are skipped; entities past the buffer capacity are dropped
/// with a warning.
pub fn build_snapshot_buffer<'a>(
    entities: impl Iterator<Item = &'a Entity>,
    buffer: &mut SnapshotBuffer,
) {
    buffer.clear();

    let mut dropped = 0usize;
    for entity in entities.filter(|e| e.active) {
        if !buffer.push(BodySnapshot::of(entity)) {
            dropped += 1;
        }
    }

    if dropped > 0 {
        log::warn!(
            "snapshot buffer full ({}), dropped {} entities",
            buffer.capacity(),
            dropped
        );
    }
}
