use crate::api::config::PhysicsConfig;
use crate::api::error::PhysicsError;
use crate::api::types::{EntityId, SurfaceId};
use crate::components::entity::{Entity, EntityKind};
use crate::components::surface::Surface;
use crate::core::time::GameClock;
use crate::input::queue::InputEvent;
use crate::renderer::snapshot::BodySnapshot;

/// Arena owning every entity and static surface of a level.
///
/// Entities and surfaces live in flat Vecs, looked up by ID.
/// Designed for small-to-medium counts (hundreds, not millions).
pub struct World {
    entities: Vec<Entity>,
    surfaces: Vec<Surface>,
    config: PhysicsConfig,
    clock: GameClock,
    width: f32,
    height: f32,
    next_entity: u32,
    next_surface: u32,
    /// Scratch buffer for monster decisions, reused every tick.
    decisions: Vec<InputEvent>,
}

impl World {
    pub fn new(config: PhysicsConfig) -> Self {
        Self {
            entities: Vec::with_capacity(64),
            surfaces: Vec::with_capacity(64),
            clock: GameClock::from_config(&config),
            config,
            width: 800.0,
            height: 600.0,
            next_entity: 1,
            next_surface: 1,
            decisions: Vec::new(),
        }
    }

    /// Set the world size in game units.
    pub fn with_bounds(mut self, width: f32, height: f32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn config(&self) -> &PhysicsConfig {
        &self.config
    }

    /// Replace the physics constants. The frame count is kept.
    pub fn set_config(&mut self, config: PhysicsConfig) {
        let frames = self.clock.frames();
        self.clock = GameClock::from_config(&config);
        if frames > 0 {
            log::info!("physics config replaced after {frames} frames");
        }
        self.config = config;
    }

    /// Number of frames ticked so far.
    pub fn frames(&self) -> u64 {
        self.clock.frames()
    }

    // -- ID allocation --

    /// Generate the next unique entity ID.
    pub fn next_entity_id(&mut self) -> EntityId {
        let id = EntityId(self.next_entity);
        self.next_entity += 1;
        id
    }

    /// Generate the next unique surface ID.
    pub fn next_surface_id(&mut self) -> SurfaceId {
        let id = SurfaceId(self.next_surface);
        self.next_surface += 1;
        id
    }

    // -- Entities --

    /// Add an entity to the world.
    pub fn spawn(&mut self, entity: Entity) -> EntityId {
        let id = entity.id;
        log::debug!("spawned {:?} '{}' at {:?}", id, entity.tag, entity.body.rect);
        self.entities.push(entity);
        id
    }

    /// Remove an entity by ID. Returns the removed entity if found.
    pub fn despawn(&mut self, id: EntityId) -> Option<Entity> {
        let idx = self.entities.iter().position(|e| e.id == id)?;
        log::debug!("despawned {id:?}");
        Some(self.entities.swap_remove(idx))
    }

    pub fn get(&self, id: EntityId) -> Option<&Entity> {
        self.entities.iter().find(|e| e.id == id)
    }

    pub fn get_mut(&mut self, id: EntityId) -> Option<&mut Entity> {
        self.entities.iter_mut().find(|e| e.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Entity> {
        self.entities.iter()
    }

    /// Find the first entity with the given tag.
    pub fn find_by_tag(&self, tag: &str) -> Option<&Entity> {
        self.entities.iter().find(|e| e.tag == tag)
    }

    /// ID of the first player-driven entity.
    pub fn player_id(&self) -> Option<EntityId> {
        self.entities.iter().find(|e| e.is_player()).map(|e| e.id)
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    // -- Surfaces --

    pub fn add_surface(&mut self, surface: impl Into<Surface>) -> SurfaceId {
        let surface = surface.into();
        let id = surface.id();
        self.surfaces.push(surface);
        id
    }

    /// Remove a surface. Entities standing on it lose support on their next tick.
    pub fn remove_surface(&mut self, id: SurfaceId) -> Option<Surface> {
        let idx = self.surfaces.iter().position(|s| s.id() == id)?;
        Some(self.surfaces.swap_remove(idx))
    }

    pub fn surface(&self, id: SurfaceId) -> Option<&Surface> {
        self.surfaces.iter().find(|s| s.id() == id)
    }

    pub fn surfaces(&self) -> impl Iterator<Item = &Surface> {
        self.surfaces.iter()
    }

    /// Entities mutably alongside read-only surfaces, for contact passes.
    pub(crate) fn split_mut(&mut self) -> (&mut [Entity], &[Surface]) {
        (&mut self.entities, &self.surfaces)
    }

    // -- Simulation --

    /// Route an input event to one entity.
    pub fn apply(&mut self, id: EntityId, event: InputEvent) -> Result<(), PhysicsError> {
        let config = &self.config;
        let entity = self
            .entities
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or(PhysicsError::UnknownEntity(id))?;
        entity.apply_input(event, config);
        Ok(())
    }

    /// Advance every active entity by one frame of `dt` seconds.
    ///
    /// Each entity is integrated first, then monsters take their decision.
    /// An invalid `dt` is rejected before anything moves.
    pub fn tick(&mut self, dt: f32) -> Result<(), PhysicsError> {
        let game_time = self.clock.advance(dt)?;
        let Self {
            entities,
            surfaces,
            config,
            decisions,
            ..
        } = self;

        for entity in entities.iter_mut().filter(|e| e.active) {
            let support = entity
                .body
                .ground
                .and_then(|id| surfaces.iter().find(|s| s.id() == id))
                .map(|s| *s.rect());
            entity.body.tick(game_time, support.as_ref(), config);

            if let EntityKind::Monster(behavior) = &mut entity.kind {
                behavior.make_decision(&entity.body, decisions);
            }
            for event in decisions.drain(..) {
                entity.apply_input(event, config);
            }
        }
        Ok(())
    }

    /// Read-only snapshot of one entity's body.
    pub fn snapshot(&self, id: EntityId) -> Option<BodySnapshot> {
        self.get(id).map(BodySnapshot::of)
    }
}

impl Default for World {
    fn default() -> Self {
        Self::new(PhysicsConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::types::MoveCommand;
    use crate::components::behavior::{Behavior, Idle};
    use crate::components::body::KinematicBody;
    use crate::components::entity::PLAYER_SIZE;
    use crate::components::surface::Ground;
    use crate::core::time::TimeScaling;
    use glam::Vec2;

    fn proportional() -> PhysicsConfig {
        PhysicsConfig {
            time_scaling: TimeScaling::Proportional,
            ..PhysicsConfig::default()
        }
    }

    #[test]
    fn ids_are_sequential_and_owned_by_the_world() {
        let mut a = World::default();
        let mut b = World::default();
        assert_eq!(a.next_entity_id(), EntityId(1));
        assert_eq!(a.next_entity_id(), EntityId(2));
        assert_eq!(b.next_entity_id(), EntityId(1));
        assert_eq!(a.next_surface_id(), SurfaceId(1));
    }

    #[test]
    fn spawn_get_despawn() {
        let mut world = World::default();
        let id = world.next_entity_id();
        world.spawn(Entity::player(id, Vec2::new(10.0, 20.0), &PLAYER_SIZE).unwrap());
        assert_eq!(world.len(), 1);
        assert_eq!(world.player_id(), Some(id));
        assert_eq!(world.get(id).unwrap().body.rect.pos(), Vec2::new(10.0, 20.0));
        assert!(world.find_by_tag("player").is_some());
        assert!(world.despawn(id).is_some());
        assert!(world.is_empty());
        assert!(world.despawn(id).is_none());
    }

    #[test]
    fn apply_to_unknown_entity_fails() {
        let mut world = World::default();
        let err = world
            .apply(EntityId(99), InputEvent::Move(MoveCommand::Left))
            .unwrap_err();
        assert_eq!(err, PhysicsError::UnknownEntity(EntityId(99)));
    }

    #[test]
    fn invalid_dt_leaves_world_untouched() {
        let mut world = World::new(proportional());
        let id = world.next_entity_id();
        world.spawn(Entity::player(id, Vec2::new(50.0, 50.0), &PLAYER_SIZE).unwrap());
        assert!(world.tick(-1.0).is_err());
        assert_eq!(world.frames(), 0);
        assert_eq!(world.get(id).unwrap().body.rect.y, 50.0);
        assert!(world.tick(0.016).is_ok());
        assert!(world.get(id).unwrap().body.rect.y > 50.0);
    }

    #[test]
    fn removing_the_ground_drops_support() {
        let mut world = World::new(proportional());
        let gid = world.next_surface_id();
        let ground = Ground::new(gid, "ground", Vec2::new(0.0, 300.0), &[800.0, 300.0]).unwrap();
        let id = world.next_entity_id();
        let mut player = Entity::player(id, Vec2::new(50.0, 0.0), &PLAYER_SIZE).unwrap();
        player.body.set_ground(&ground);
        world.add_surface(ground);
        world.spawn(player);

        world.tick(0.016).unwrap();
        assert!(world.get(id).unwrap().body.is_grounded());

        world.remove_surface(gid);
        world.tick(0.016).unwrap();
        let body = &world.get(id).unwrap().body;
        assert_eq!(body.ground, None);
        assert!(body.accel.y > 0.0);
        assert!(body.speed.y > 0.0);
    }

    #[test]
    fn inactive_entities_are_skipped() {
        let mut world = World::new(proportional());
        let id = world.next_entity_id();
        let mut e = Entity::player(id, Vec2::new(50.0, 50.0), &PLAYER_SIZE).unwrap();
        e.active = false;
        world.spawn(e);
        world.tick(0.016).unwrap();
        assert_eq!(world.get(id).unwrap().body.rect.y, 50.0);
    }

    struct Walker;

    impl Behavior for Walker {
        fn make_decision(&mut self, body: &KinematicBody, out: &mut Vec<InputEvent>) {
            if !body.moving_x {
                out.push(InputEvent::Move(MoveCommand::Left));
            }
        }
    }

    #[test]
    fn monsters_act_on_their_decisions() {
        let mut world = World::new(proportional());
        let walker = world.next_entity_id();
        let idle = world.next_entity_id();
        world.spawn(Entity::monster(walker, Vec2::new(200.0, 0.0), &[20.0, 20.0], Walker).unwrap());
        world.spawn(Entity::monster(idle, Vec2::new(300.0, 0.0), &[20.0, 20.0], Idle).unwrap());
        world.tick(0.016).unwrap();

        let w = &world.get(walker).unwrap().body;
        assert!(w.moving_x);
        assert!(w.accel.x < 0.0);
        let i = &world.get(idle).unwrap().body;
        assert!(!i.moving_x);
        assert_eq!(i.accel.x, 0.0);
    }

    #[test]
    fn snapshot_reflects_body() {
        let mut world = World::default();
        let id = world.next_entity_id();
        world.spawn(Entity::player(id, Vec2::new(5.0, 6.0), &PLAYER_SIZE).unwrap());
        let snap = world.snapshot(id).unwrap();
        assert_eq!(snap.x, 5.0);
        assert_eq!(snap.direction, 1.0);
        assert!(world.snapshot(EntityId(42)).is_none());
    }
}
