//! Deterministic Pong simulation: one pointer-driven paddle against a
//! scripted opponent on a pixel-space court.

pub mod components;
pub mod config;
pub mod court;
pub mod geometry;
pub mod params;
pub mod resources;
pub mod systems;

pub use components::*;
pub use config::*;
pub use court::*;
pub use geometry::*;
pub use params::*;
pub use resources::*;
