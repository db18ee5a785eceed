use bevy::prelude::*;
use bevy_rapier2d::prelude::*;
use rand::Rng;

use crate::components::{Orb, OrbRadius};
use crate::config::{GameConfig, SpawnRange};
use crate::system_order::PrePhysicsSet;

const ORB_COLOR: Color = Color::srgb(0.90, 0.16, 0.22);

pub struct OrbSpawnPlugin;

impl Plugin for OrbSpawnPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SpawnThrottle>()
            .add_systems(Update, spawn_orbs_while_held.in_set(PrePhysicsSet));
    }
}

/// Frame counter gating the spawn cadence while the button is held.
///
/// The counter persists while the button is up, so releasing and re-pressing
/// resumes the cadence mid-window rather than restarting it.
#[derive(Resource, Default, Debug)]
pub struct SpawnThrottle {
    skipped: u32,
}

impl SpawnThrottle {
    /// Advances the throttle by one held frame. Returns true when the cadence
    /// allows a spawn this frame (after `skip_frames` skipped ones).
    pub fn tick(&mut self, skip_frames: u32) -> bool {
        if self.skipped < skip_frames {
            self.skipped += 1;
            false
        } else {
            self.skipped = 0;
            true
        }
    }
}

/// Shared unit-circle mesh, scaled per orb to its diameter.
#[derive(Resource, Deref)]
pub struct OrbMesh(pub Handle<Mesh>);

#[derive(Resource, Deref)]
pub struct OrbMaterial(pub Handle<ColorMaterial>);

pub fn spawn_orbs_while_held(
    mut commands: Commands,
    buttons: Res<ButtonInput<MouseButton>>,
    mut throttle: ResMut<SpawnThrottle>,
    cfg: Res<GameConfig>,
    windows: Query<&Window>,
    cameras: Query<(&Camera, &GlobalTransform)>,
    orb_mesh: Option<Res<OrbMesh>>,
    orb_material: Option<Res<OrbMaterial>>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
) {
    if !buttons.pressed(MouseButton::Left) {
        return;
    }

    // Resolve the spawn position before ticking the throttle: a held frame
    // with the cursor outside the window must not consume a spawn slot.
    let Ok(window) = windows.single() else { return };
    let Some(cursor) = window.cursor_position() else { return };
    let Ok((camera, cam_transform)) = cameras.single() else { return };
    let Ok(center) = camera.viewport_to_world_2d(cam_transform, cursor) else { return };

    if !throttle.tick(cfg.spawn.skip_frames) {
        return;
    }

    let mesh = if let Some(mesh) = orb_mesh {
        mesh.0.clone()
    } else {
        let handle = meshes.add(Mesh::from(Circle { radius: 0.5 }));
        commands.insert_resource(OrbMesh(handle.clone()));
        handle
    };
    let material = if let Some(material) = orb_material {
        material.0.clone()
    } else {
        let handle = materials.add(ORB_COLOR);
        commands.insert_resource(OrbMaterial(handle.clone()));
        handle
    };

    let radius = sample_radius(&cfg.spawn.radius_range);
    spawn_orb(&mut commands, center, radius, mesh, material);
}

/// Uniform radius from the inclusive configured range. A collapsed range
/// (min == max) means a fixed radius; an inverted range falls back to `min`
/// rather than panicking in the sampler (`validate()` already warns on it).
fn sample_radius(range: &SpawnRange<f32>) -> f32 {
    if range.min < range.max {
        rand::thread_rng().gen_range(range.min..=range.max)
    } else {
        range.min
    }
}

/// Spawns one fully-formed orb: dynamic body at rest, ball collider, and a
/// child entity carrying the scaled circle visual.
pub fn spawn_orb(
    commands: &mut Commands,
    center: Vec2,
    radius: f32,
    mesh: Handle<Mesh>,
    material: Handle<ColorMaterial>,
) -> Entity {
    commands
        .spawn((
            Transform::from_translation(center.extend(0.0)),
            GlobalTransform::default(),
            Visibility::default(),
            RigidBody::Dynamic,
            Collider::ball(radius),
            Velocity::zero(),
            Orb,
            OrbRadius(radius),
        ))
        .with_children(|parent| {
            parent.spawn((
                Mesh2d(mesh),
                MeshMaterial2d(material),
                Transform::from_scale(Vec3::splat(radius * 2.0)),
            ));
        })
        .id()
}
