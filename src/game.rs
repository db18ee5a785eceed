use bevy::prelude::*;

use crate::camera::CameraPlugin;
use crate::components::Orb;
use crate::culling::CullPlugin;
use crate::orbs::OrbSpawnPlugin;
use crate::physics::PhysicsSetupPlugin;
use crate::platform::PlatformPlugin;
use crate::session::SessionPlugin;
use crate::system_order::{PostPhysicsAdjustSet, PrePhysicsSet};

pub struct GamePlugin;

impl Plugin for GamePlugin {
    fn build(&self, app: &mut App) {
        app.configure_sets(
            Update,
            (PrePhysicsSet, PostPhysicsAdjustSet.after(PrePhysicsSet)),
        )
        .add_plugins((
            CameraPlugin,
            PhysicsSetupPlugin,
            PlatformPlugin,
            OrbSpawnPlugin,
            CullPlugin,
            SessionPlugin,
        ))
        .add_systems(Update, log_orb_count);
    }
}

fn log_orb_count(time: Res<Time>, mut timer: Local<f32>, q_orbs: Query<&Orb>) {
    *timer += time.delta_secs();
    if *timer > 1.0 {
        *timer = 0.0;
        info!("orbs={}", q_orbs.iter().count());
    }
}
