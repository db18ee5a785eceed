use bevy::prelude::*;
use bevy_rapier2d::prelude::*;

use crate::config::GameConfig;
use crate::units::{self, PIXELS_PER_METER};

/// Simulated seconds per physics step, independent of real frame duration.
pub const TIME_STEP: f32 = 1.0 / 60.0;
/// Solver substeps per physics step.
pub const SUBSTEPS: usize = 4;

pub struct PhysicsSetupPlugin; // our wrapper to configure Rapier

impl Plugin for PhysicsSetupPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(RapierPhysicsPlugin::<NoUserData>::pixels_per_meter(
            PIXELS_PER_METER,
        ))
        .insert_resource(TimestepMode::Fixed {
            dt: TIME_STEP,
            substeps: SUBSTEPS,
        })
        // PostStartup: the Rapier context entity exists by then.
        .add_systems(PostStartup, configure_gravity);
    }
}

fn configure_gravity(mut q_cfg: Query<&mut RapierConfiguration>, cfg: Res<GameConfig>) {
    if let Ok(mut rapier) = q_cfg.single_mut() {
        // Config value is in world units; Rapier runs in scene pixels here.
        rapier.gravity = Vect::new(0.0, units::world_to_px(cfg.gravity.y));
    }
}
