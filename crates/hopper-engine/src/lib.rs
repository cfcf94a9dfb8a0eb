pub mod api;
pub mod core;
pub mod components;
pub mod systems;
pub mod renderer;
pub mod bridge;
pub mod input;

// Re-export key types at crate root for convenience
pub use api::config::{LevelConfig, PhysicsConfig};
pub use api::error::{ConfigError, PhysicsError};
pub use api::level::{load_level, Level};
pub use api::types::{Direction, EntityId, MoveCommand, SurfaceId};
pub use components::behavior::{Behavior, Idle};
pub use components::body::KinematicBody;
pub use components::entity::{Entity, EntityKind, PLAYER_SIZE};
pub use components::rect::Rect;
pub use components::sprite::SpriteComponent;
pub use components::surface::{BuildingBlock, Ground, Surface};
pub use core::time::{game_time, GameClock, TimeScaling};
pub use core::world::World;
pub use input::queue::{InputEvent, InputQueue};
pub use renderer::snapshot::{BodySnapshot, SnapshotBuffer};
pub use bridge::protocol::{FrameHeader, ProtocolLayout};
pub use systems::contacts::resolve_contacts;
pub use systems::snapshot::build_snapshot_buffer;
