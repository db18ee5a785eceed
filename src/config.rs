use bevy::prelude::*;
use serde::Deserialize;
use std::{fs, path::Path};

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct WindowConfig {
    pub width: f32,
    pub height: f32,
    pub title: String,
    /// Automatically close the app after this many seconds. 0.0 (or omitted) = run indefinitely.
    #[serde(rename = "autoClose")]
    pub auto_close: f32,
}
impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 640.0,
            height: 480.0,
            title: "Orb Drop".into(),
            auto_close: 0.0,
        }
    }
}

/// Gravity in world units (metres per second squared), y up.
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct GravityConfig {
    pub y: f32,
}
impl Default for GravityConfig {
    fn default() -> Self {
        Self { y: -10.0 }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct SpawnRange<T> {
    pub min: T,
    pub max: T,
}
impl<T: Default> Default for SpawnRange<T> {
    fn default() -> Self {
        Self {
            min: Default::default(),
            max: Default::default(),
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct SpawnConfig {
    /// Sampled orb radius in pixels.
    pub radius_range: SpawnRange<f32>,
    /// Held frames skipped between spawns (2 -> one orb per 3 held frames).
    pub skip_frames: u32,
}
impl Default for SpawnConfig {
    fn default() -> Self {
        Self {
            radius_range: SpawnRange { min: 5.0, max: 25.0 },
            skip_frames: 2,
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct PlatformConfig {
    pub friction: f32,
    pub restitution: f32,
}
impl Default for PlatformConfig {
    fn default() -> Self {
        Self {
            friction: 0.2,
            restitution: 0.4,
        }
    }
}

#[derive(Debug, Deserialize, Resource, Clone, PartialEq)]
#[serde(default)]
pub struct GameConfig {
    pub window: WindowConfig,
    pub gravity: GravityConfig,
    pub spawn: SpawnConfig,
    pub platform: PlatformConfig,
    pub rapier_debug: bool,
}
impl Default for GameConfig {
    fn default() -> Self {
        Self {
            window: Default::default(),
            gravity: Default::default(),
            spawn: Default::default(),
            platform: Default::default(),
            rapier_debug: false,
        }
    }
}

impl GameConfig {
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, String> {
        let data = fs::read_to_string(&path).map_err(|e| format!("read config: {e}"))?;
        ron::from_str(&data).map_err(|e| format!("parse RON: {e}"))
    }

    pub fn load_or_default(path: impl AsRef<Path>) -> (Self, Option<String>) {
        match Self::load_from_file(&path) {
            Ok(cfg) => (cfg, None),
            Err(e) => (Self::default(), Some(e)),
        }
    }

    /// Validate the configuration returning a list of human-readable warning strings.
    /// These represent suspicious / potentially unintended values but are not hard errors.
    /// Call at startup and log each warning with `warn!`.
    pub fn validate(&self) -> Vec<String> {
        let mut w = Vec::new();
        if self.window.width <= 0.0 || self.window.height <= 0.0 {
            w.push("window dimensions must be > 0".into());
        }
        if self.window.auto_close < 0.0 {
            w.push(format!(
                "window.autoClose {} negative -> treated as disabled (should be >= 0)",
                self.window.auto_close
            ));
        }
        if self.gravity.y.abs() < 1e-4 {
            w.push("gravity.y magnitude near zero; orbs will float".into());
        }
        if self.gravity.y > 0.0 {
            w.push(format!(
                "gravity.y is positive ({}); y-up world, downward gravity is negative",
                self.gravity.y
            ));
        }
        if self.gravity.y < -50.0 {
            w.push(format!(
                "gravity.y very large magnitude ({}); integration instability possible",
                self.gravity.y
            ));
        }
        let r = &self.spawn.radius_range;
        if r.min <= 0.0 {
            w.push("spawn.radius_range.min must be > 0".into());
        }
        if r.min > r.max {
            w.push(format!(
                "spawn.radius_range min ({}) greater than max ({})",
                r.min, r.max
            ));
        }
        if r.max > self.window.height * 0.5 {
            w.push(format!(
                "spawn.radius_range.max {} larger than half the window height",
                r.max
            ));
        }
        if self.spawn.skip_frames > 300 {
            w.push(format!(
                "spawn.skip_frames {} very high; orbs spawn less than once per 5 s of held input",
                self.spawn.skip_frames
            ));
        }
        if self.platform.friction < 0.0 {
            w.push("platform.friction negative".into());
        }
        if !(0.0..=1.5).contains(&self.platform.restitution) {
            w.push(format!(
                "platform.restitution {} outside recommended 0..1.5",
                self.platform.restitution
            ));
        }
        w
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn parse_sample_config() {
        let sample = r#"(
            window: (width: 640.0, height: 480.0, title: "Test", autoClose: 1.5),
            gravity: (y: -9.8),
            spawn: (
                radius_range: (min: 5.0, max: 25.0),
                skip_frames: 2,
            ),
            platform: (friction: 0.2, restitution: 0.4),
            rapier_debug: false,
        )"#;
        let mut file = tempfile::NamedTempFile::new().expect("tmp file");
        file.write_all(sample.as_bytes()).unwrap();
        let cfg = GameConfig::load_from_file(file.path()).expect("parse config");
        assert_eq!(cfg.window.width, 640.0);
        assert!((cfg.window.auto_close - 1.5).abs() < 1e-6);
        assert_eq!(cfg.gravity.y, -9.8);
        assert_eq!(cfg.spawn.skip_frames, 2);
        assert_eq!(cfg.platform.restitution, 0.4);
        assert!(
            cfg.validate().is_empty(),
            "expected no validation warnings for sample config"
        );
    }

    #[test]
    fn partial_config_fills_defaults() {
        let sample = r"(gravity: (y: -12.0))";
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(sample.as_bytes()).unwrap();
        let cfg = GameConfig::load_from_file(file.path()).expect("parse config");
        assert_eq!(cfg.gravity.y, -12.0);
        assert_eq!(cfg.window.width, WindowConfig::default().width);
        assert_eq!(cfg.spawn.radius_range.max, 25.0);
    }

    #[test]
    fn validate_detects_warnings() {
        let bad = GameConfig {
            window: WindowConfig {
                width: -100.0,
                height: 0.0,
                title: "Bad".into(),
                auto_close: -1.0,
            },
            gravity: GravityConfig { y: 0.0 },
            spawn: SpawnConfig {
                radius_range: SpawnRange { min: 0.0, max: -5.0 },
                skip_frames: 1000,
            },
            platform: PlatformConfig {
                friction: -0.5,
                restitution: 2.0,
            },
            rapier_debug: false,
        };
        let warnings = bad.validate();
        let joined = warnings.join(" | ");
        assert!(joined.contains("window dimensions must be > 0"));
        assert!(joined.contains("window.autoClose"));
        assert!(joined.contains("gravity.y magnitude near zero"));
        assert!(joined.contains("spawn.radius_range.min must be > 0"));
        assert!(joined.contains("spawn.radius_range min"));
        assert!(joined.contains("spawn.skip_frames"));
        assert!(joined.contains("platform.friction negative"));
        assert!(joined.contains("platform.restitution"));
    }

    #[test]
    fn load_or_default_missing_file() {
        let (cfg, err) = GameConfig::load_or_default("this/file/does/not/exist.ron");
        assert!(err.is_some());
        assert_eq!(cfg.window.width, WindowConfig::default().width);
    }
}
