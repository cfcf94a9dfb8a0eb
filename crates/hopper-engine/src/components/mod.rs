pub mod behavior;
pub mod body;
pub mod entity;
pub mod rect;
pub mod sprite;
pub mod surface;
