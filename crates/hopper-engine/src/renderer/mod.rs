pub mod snapshot;

pub use snapshot::{BodySnapshot, SnapshotBuffer};
