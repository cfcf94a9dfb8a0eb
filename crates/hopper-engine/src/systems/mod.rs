pub mod contacts;
pub mod snapshot;
