pub mod queue;
pub mod reactor;
