pub mod ground;
pub mod integrator;
pub mod time;
pub mod world;
