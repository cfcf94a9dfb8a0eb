pub mod config;
pub mod error;
pub mod level;
pub mod types;
