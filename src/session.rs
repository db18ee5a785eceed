//! Session lifecycle: Escape closes the window, and an optional timer exits
//! the app after `window.autoClose` seconds (0.0 = disabled). Useful for
//! smoke-running the demo in scripts.

use bevy::prelude::*;

use crate::config::GameConfig;

#[derive(Resource, Deref, DerefMut)]
struct AutoCloseTimer(Timer);

pub struct SessionPlugin;

impl Plugin for SessionPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, setup_auto_close)
            .add_systems(Update, (check_auto_close, exit_on_escape));
    }
}

pub fn setup_auto_close(mut commands: Commands, cfg: Res<GameConfig>) {
    let secs = cfg.window.auto_close;
    if secs > 0.0 {
        info!(seconds = secs, "auto-close: will exit after {secs} seconds");
        commands.insert_resource(AutoCloseTimer(Timer::from_seconds(secs, TimerMode::Once)));
    }
}

pub fn check_auto_close(
    time: Res<Time>,
    mut timer: Option<ResMut<AutoCloseTimer>>,
    mut exit: EventWriter<AppExit>,
) {
    if let Some(t) = timer.as_mut() {
        t.tick(time.delta());
        if t.finished() {
            info!("auto-close: timer finished, requesting app exit");
            exit.write(AppExit::Success);
        }
    }
}

pub fn exit_on_escape(keys: Res<ButtonInput<KeyCode>>, mut exit: EventWriter<AppExit>) {
    if keys.just_pressed(KeyCode::Escape) {
        exit.write(AppExit::Success);
    }
}
