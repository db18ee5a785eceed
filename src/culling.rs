use bevy::prelude::*;

use crate::components::{Orb, OrbRadius};
use crate::config::GameConfig;
use crate::system_order::PostPhysicsAdjustSet;

pub struct CullPlugin;

impl Plugin for CullPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, despawn_offscreen_orbs.in_set(PostPhysicsAdjustSet));
    }
}

/// Removes orbs once they sit entirely past either horizontal window edge or
/// entirely below the bottom edge. Removal goes through `Commands`, so the
/// pass visits every remaining orb exactly once.
pub fn despawn_offscreen_orbs(
    mut commands: Commands,
    cfg: Res<GameConfig>,
    orbs: Query<(Entity, &Transform, &OrbRadius), With<Orb>>,
) {
    let half_w = cfg.window.width * 0.5;
    let half_h = cfg.window.height * 0.5;
    for (entity, transform, radius) in &orbs {
        let p = transform.translation.truncate();
        let r = radius.0;
        if p.x - r > half_w || p.x + r < -half_w || p.y + r < -half_h {
            debug!(x = p.x, y = p.y, r, "orb left the window; despawning");
            commands.entity(entity).despawn();
        }
    }
}
