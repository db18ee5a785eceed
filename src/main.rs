use std::path::PathBuf;

use anyhow::{Context, Result};
use bevy::prelude::*;
use bevy_rapier2d::prelude::RapierDebugRenderPlugin;
use clap::Parser;

use orb_drop::{GameConfig, GamePlugin};

const DEFAULT_CONFIG_PATH: &str = "assets/config/orb_drop.ron";

#[derive(Parser, Debug)]
#[command(author, version, about = "Spawn falling orbs with the mouse onto a polyline platform", long_about = None)]
struct Args {
    /// Path to a RON config file (defaults to assets/config/orb_drop.ron,
    /// falling back to built-in defaults when missing).
    #[arg(long)]
    config: Option<PathBuf>,
    /// Exit automatically after this many seconds (overrides the config).
    #[arg(long)]
    auto_close: Option<f32>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let mut cfg = match &args.config {
        Some(path) => GameConfig::load_from_file(path)
            .map_err(anyhow::Error::msg)
            .with_context(|| format!("load config {}", path.display()))?,
        None => {
            let (cfg, err) = GameConfig::load_or_default(DEFAULT_CONFIG_PATH);
            if let Some(e) = err {
                eprintln!("config: {e}; using defaults");
            }
            cfg
        }
    };
    if let Some(secs) = args.auto_close {
        cfg.window.auto_close = secs;
    }
    let warnings = cfg.validate();

    let mut app = App::new();
    app.insert_resource(ClearColor(Color::BLACK))
        .add_plugins(
            DefaultPlugins.set(WindowPlugin {
                primary_window: Some(Window {
                    title: cfg.window.title.clone(),
                    resolution: (cfg.window.width, cfg.window.height).into(),
                    resizable: false,
                    ..default()
                }),
                ..default()
            }),
        );
    for w in warnings {
        warn!("config: {w}");
    }
    if cfg.rapier_debug {
        app.add_plugins(RapierDebugRenderPlugin::default());
    }
    app.insert_resource(cfg).add_plugins(GamePlugin).run();
    Ok(())
}
