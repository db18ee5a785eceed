pub mod camera;
pub mod components;
pub mod config;
pub mod culling;
pub mod game;
pub mod orbs;
pub mod physics;
pub mod platform;
pub mod session;
pub mod system_order;
pub mod units;

// Curated re-exports
pub use components::{Orb, OrbRadius};
pub use config::GameConfig;
pub use game::GamePlugin;
