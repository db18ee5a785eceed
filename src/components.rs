use bevy::prelude::*;

use crate::units;

/// Marker for a live falling orb.
#[derive(Component)]
pub struct Orb;

/// Orb radius in pixels, fixed at spawn.
#[derive(Component, Debug, Deref, DerefMut, Copy, Clone)]
pub struct OrbRadius(pub f32);

impl OrbRadius {
    /// Radius as the physics engine sees it (metres).
    pub fn world_units(&self) -> f32 {
        units::px_to_world(self.0)
    }
}
