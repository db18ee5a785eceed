use bevy::prelude::*;
use bevy_rapier2d::prelude::*;

use crate::config::GameConfig;
use crate::system_order::PostPhysicsAdjustSet;

/// Control points in window space (origin top-left, y down). The two ends
/// are pushed past the window edges: polyline colliders have no collision
/// response at isolated end vertices.
const CONTROL_POINTS: [Vec2; 7] = [
    Vec2::new(-10.0, 470.0),
    Vec2::new(0.0, 450.0),
    Vec2::new(160.0, 390.0),
    Vec2::new(320.0, 405.0),
    Vec2::new(480.0, 340.0),
    Vec2::new(640.0, 450.0),
    Vec2::new(650.0, 470.0),
];

const PLATFORM_COLOR: Color = Color::srgb(0.0, 0.0, 1.0);
const LINE_WIDTH: f32 = 2.0;

/// Static terrain: an open chain of line segments across the lower window.
#[derive(Component, Debug, Clone, PartialEq)]
pub struct Platform {
    pub verts: [Vec2; 7],
}

pub struct PlatformPlugin;

impl Plugin for PlatformPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, (configure_line_width, spawn_platform))
            .add_systems(Update, draw_platform.in_set(PostPhysicsAdjustSet));
    }
}

/// Maps a window-space point (origin top-left, y down) to scene space
/// (origin at the window centre, y up).
pub fn window_to_scene(p: Vec2, width: f32, height: f32) -> Vec2 {
    Vec2::new(p.x - width * 0.5, height * 0.5 - p.y)
}

pub fn spawn_platform(mut commands: Commands, cfg: Res<GameConfig>) {
    let (w, h) = (cfg.window.width, cfg.window.height);
    let verts = CONTROL_POINTS.map(|p| window_to_scene(p, w, h));
    commands.spawn((
        Platform { verts },
        Transform::default(),
        GlobalTransform::default(),
        RigidBody::Fixed,
        Collider::polyline(verts.to_vec(), None),
        Friction::coefficient(cfg.platform.friction),
        Restitution::coefficient(cfg.platform.restitution),
        Name::new("Platform"),
    ));
}

fn configure_line_width(mut store: ResMut<GizmoConfigStore>) {
    let (config, _) = store.config_mut::<DefaultGizmoConfigGroup>();
    config.line.width = LINE_WIDTH;
}

fn draw_platform(q: Query<&Platform>, mut gizmos: Gizmos) {
    for platform in &q {
        for pair in platform.verts.windows(2) {
            gizmos.line_2d(pair[0], pair[1], PLATFORM_COLOR);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn headless_app() -> App {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins)
            .insert_resource(GameConfig::default())
            .add_systems(Startup, spawn_platform);
        app
    }

    #[test]
    fn platform_spawns_with_collider_and_materials() {
        let mut app = headless_app();
        app.update();
        let world = app.world_mut();
        let mut q = world.query::<(&Platform, &RigidBody, &Collider, &Friction, &Restitution)>();
        let (platform, body, _collider, friction, restitution) = q.single(world).expect("one platform");
        assert_eq!(*body, RigidBody::Fixed);
        assert_eq!(friction.coefficient, 0.2);
        assert_eq!(restitution.coefficient, 0.4);
        assert_eq!(platform.verts.len(), 7);
    }

    #[test]
    fn bookend_vertices_sit_off_screen() {
        let mut app = headless_app();
        app.update();
        let world = app.world_mut();
        let mut q = world.query::<&Platform>();
        let platform = q.single(world).unwrap();
        let half_w = GameConfig::default().window.width * 0.5;
        assert!(platform.verts[0].x < -half_w);
        assert!(platform.verts[6].x > half_w);
        for pair in platform.verts[1..6].windows(2) {
            assert!(pair[0].x < pair[1].x, "interior vertices ordered left to right");
        }
    }

    #[test]
    fn platform_is_immutable_across_updates() {
        let mut app = headless_app();
        app.update();
        let snapshot = {
            let world = app.world_mut();
            let mut q = world.query::<(&Platform, &Transform)>();
            let (p, t) = q.single(world).unwrap();
            (p.clone(), *t)
        };
        for _ in 0..30 {
            app.update();
        }
        let world = app.world_mut();
        let mut q = world.query::<(&Platform, &Transform)>();
        let (p, t) = q.single(world).unwrap();
        assert_eq!(*p, snapshot.0);
        assert_eq!(*t, snapshot.1);
    }

    #[test]
    fn window_to_scene_maps_corners() {
        let (w, h) = (640.0, 480.0);
        assert_eq!(window_to_scene(Vec2::ZERO, w, h), Vec2::new(-320.0, 240.0));
        assert_eq!(window_to_scene(Vec2::new(640.0, 480.0), w, h), Vec2::new(320.0, -240.0));
        assert_eq!(window_to_scene(Vec2::new(320.0, 240.0), w, h), Vec2::ZERO);
    }
}
