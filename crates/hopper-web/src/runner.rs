use hopper_engine::{
    load_level, Level, LevelConfig, PhysicsConfig,
    EntityId, InputEvent, InputQueue, World,
    FrameHeader, ProtocolLayout, SnapshotBuffer,
    resolve_contacts, build_snapshot_buffer,
};

/// Generic level runner that wires up the simulation loop.
///
/// Each concrete level (e.g., `forest`) creates a `thread_local!` LevelRunner
/// and exports free functions via `#[wasm_bindgen]`, because wasm-bindgen
/// cannot export generic structs directly.
pub struct LevelRunner<L: Level> {
    level: L,
    world: World,
    config: LevelConfig,
    input: InputQueue,
    snapshots: SnapshotBuffer,
    layout: ProtocolLayout,
    /// Header + snapshots, laid out for a single host read.
    shared: Vec<f32>,
    player: Option<EntityId>,
    initialized: bool,
}

impl<L: Level> LevelRunner<L> {
    pub fn new(level: L) -> Self {
        let config = level.config();
        let layout = ProtocolLayout::from_config(&config);
        let snapshots = SnapshotBuffer::with_capacity(config.max_snapshots);

        Self {
            level,
            world: World::default(),
            input: InputQueue::new(),
            snapshots,
            shared: Vec::with_capacity(layout.buffer_total_floats),
            layout,
            config,
            player: None,
            initialized: false,
        }
    }

    /// Build the level. Call once after construction.
    /// A level that fails to build leaves the runner idle.
    pub fn init(&mut self) {
        match load_level(&mut self.level) {
            Ok((world, config)) => {
                self.layout = ProtocolLayout::from_config(&config);
                self.snapshots = SnapshotBuffer::with_capacity(config.max_snapshots);
                self.player = world.player_id();
                self.world = world;
                self.config = config;
                self.initialized = true;
                self.publish();
            }
            Err(e) => log::warn!("failed to load level: {e}"),
        }
    }

    /// Push an input event into the queue. Events reach the player on the
    /// next tick.
    pub fn push_input(&mut self, event: InputEvent) {
        self.input.push(event);
    }

    /// Run one frame: route input, integrate, resolve contacts, publish.
    pub fn tick(&mut self, dt: f32) {
        if !self.initialized {
            return;
        }

        let events = self.input.drain();
        if let Some(player) = self.player {
            for event in events {
                if let Err(e) = self.world.apply(player, event) {
                    log::warn!("dropped input {event:?}: {e}");
                }
            }
        }

        if let Err(e) = self.world.tick(dt) {
            log::warn!("frame skipped: {e}");
            return;
        }
        self.level.update(&mut self.world);
        resolve_contacts(&mut self.world);
        self.publish();
    }

    /// Replace the physics constants from a JSON document.
    /// Invalid documents are logged and ignored.
    pub fn load_config(&mut self, json: &str) {
        match PhysicsConfig::from_json(json) {
            Ok(physics) => {
                self.config.physics = physics.clone();
                self.world.set_config(physics);
                log::info!("physics config reloaded");
            }
            Err(e) => log::warn!("rejected physics config: {e}"),
        }
    }

    fn publish(&mut self) {
        build_snapshot_buffer(self.world.iter(), &mut self.snapshots);
        let header = FrameHeader {
            frame: self.world.frames(),
            world_width: self.config.world_width,
            world_height: self.config.world_height,
            player_id: self.player.map_or(-1.0, |id| id.0 as f32),
        };
        self.layout.pack(&header, &self.snapshots, &mut self.shared);
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    // ---- Pointer accessors for shared-memory reads ----

    pub fn snapshots_ptr(&self) -> *const f32 {
        self.snapshots.snapshots_ptr()
    }

    pub fn snapshot_count(&self) -> u32 {
        self.snapshots.snapshot_count()
    }

    pub fn buffer_ptr(&self) -> *const f32 {
        self.shared.as_ptr()
    }

    pub fn world_width(&self) -> f32 {
        self.config.world_width
    }

    pub fn world_height(&self) -> f32 {
        self.config.world_height
    }

    pub fn frames(&self) -> f64 {
        self.world.frames() as f64
    }

    // ---- Capacity accessors ----

    pub fn max_snapshots(&self) -> u32 {
        self.layout.max_snapshots as u32
    }

    pub fn buffer_total_floats(&self) -> u32 {
        self.layout.buffer_total_floats as u32
    }
}
