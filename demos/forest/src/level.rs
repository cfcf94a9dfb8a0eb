use hopper_engine::*;
use glam::Vec2;

const CAMERA_W: f32 = 800.0;
const CAMERA_H: f32 = 600.0;
const WORLD_W: f32 = CAMERA_W * 2.0;
const WORLD_H: f32 = CAMERA_H;

const PLAYER_SPAWN: Vec2 = Vec2::new(50.0, 50.0);
const MONSTER_SPAWN: Vec2 = Vec2::new(400.0, 50.0);
const MONSTER_SIZE: [f32; 2] = [40.0, 32.0];

/// One long forest floor, twice the camera wide, with the player and an
/// idle test monster dropped onto it.
pub struct ForestLevel {
    player: Option<EntityId>,
}

impl ForestLevel {
    pub fn new() -> Self {
        Self { player: None }
    }
}

impl Level for ForestLevel {
    fn config(&self) -> LevelConfig {
        LevelConfig {
            name: String::from("forest"),
            world_width: WORLD_W,
            world_height: WORLD_H,
            physics: PhysicsConfig {
                time_scaling: TimeScaling::Proportional,
                ..PhysicsConfig::default()
            },
            ..LevelConfig::default()
        }
    }

    fn build(&mut self, world: &mut World) -> Result<(), ConfigError> {
        let gid = world.next_surface_id();
        world.add_surface(Ground::new(
            gid,
            "forest_ground_p0",
            Vec2::new(0.0, WORLD_H / 2.0),
            &[WORLD_W, WORLD_H / 2.0],
        )?);

        let id = world.next_entity_id();
        world.spawn(Entity::player(id, PLAYER_SPAWN, &PLAYER_SIZE)?);
        self.player = Some(id);

        let id = world.next_entity_id();
        world.spawn(Entity::monster(id, MONSTER_SPAWN, &MONSTER_SIZE, Idle)?);
        Ok(())
    }

    fn update(&mut self, world: &mut World) {
        // Walking past the right end drops the player out of the world.
        let Some(player) = self.player.and_then(|id| world.get_mut(id)) else {
            return;
        };
        if player.body.rect.top() > WORLD_H {
            log::info!("player fell out of the forest, respawning");
            player.body = KinematicBody::new(Rect::new(
                PLAYER_SPAWN.x,
                PLAYER_SPAWN.y,
                PLAYER_SIZE[0],
                PLAYER_SIZE[1],
            ));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn step(level: &mut ForestLevel, world: &mut World, frames: usize) {
        for _ in 0..frames {
            world.tick(0.016).unwrap();
            level.update(world);
            resolve_contacts(world);
        }
    }

    #[test]
    fn forest_builds_player_monster_and_ground() {
        let mut level = ForestLevel::new();
        let (world, config) = load_level(&mut level).unwrap();
        assert_eq!(config.world_width, 1600.0);
        assert_eq!(world.len(), 2);
        assert_eq!(world.surfaces().count(), 1);
        assert_eq!(world.player_id(), level.player);
    }

    #[test]
    fn player_drops_onto_the_floor() {
        let mut level = ForestLevel::new();
        let (mut world, _) = load_level(&mut level).unwrap();
        let id = world.player_id().unwrap();
        step(&mut level, &mut world, 200);
        let body = &world.get(id).unwrap().body;
        assert!(body.is_grounded());
        assert_eq!(body.rect.bottom(), WORLD_H / 2.0 + 1.0);
        assert_eq!(body.rect.x, PLAYER_SPAWN.x);
    }

    #[test]
    fn idle_monster_lands_and_stays_put() {
        let mut level = ForestLevel::new();
        let (mut world, _) = load_level(&mut level).unwrap();
        let monster = world.find_by_tag("monster").unwrap().id;
        step(&mut level, &mut world, 200);
        let body = &world.get(monster).unwrap().body;
        assert!(body.is_grounded());
        assert!(body.is_at_rest());
        assert_eq!(body.rect.x, MONSTER_SPAWN.x);
    }

    #[test]
    fn fallen_player_respawns() {
        let mut level = ForestLevel::new();
        let (mut world, _) = load_level(&mut level).unwrap();
        let id = world.player_id().unwrap();
        world.get_mut(id).unwrap().body.rect.y = WORLD_H + 10.0;
        level.update(&mut world);
        assert_eq!(world.get(id).unwrap().body.rect.pos(), PLAYER_SPAWN);
    }
}
