use crate::api::config::LevelConfig;
use crate::api::error::ConfigError;
use crate::core::world::World;

/// The contract every level must fulfill.
pub trait Level {
    /// Return level configuration. Called once before build.
    fn config(&self) -> LevelConfig {
        LevelConfig::default()
    }

    /// Spawn the player, monsters and surfaces into a fresh world.
    fn build(&mut self, world: &mut World) -> Result<(), ConfigError>;

    /// Per-frame level logic, run after the world has ticked.
    fn update(&mut self, _world: &mut World) {}
}

/// Create the world for `level` and let it populate it.
pub fn load_level(level: &mut impl Level) -> Result<(World, LevelConfig), ConfigError> {
    let config = level.config();
    config.physics.validate()?;
    let mut world = World::new(config.physics.clone())
        .with_bounds(config.world_width, config.world_height);
    level.build(&mut world)?;
    log::info!(
        "level '{}' loaded: {} entities, {} surfaces",
        config.name,
        world.len(),
        world.surfaces().count()
    );
    Ok((world, config))
}
