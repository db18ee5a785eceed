//! Conversions between physics world units (metres) and screen pixels.
//!
//! Rapier simulates in metres; everything the player sees (window, cursor,
//! platform control points) is in pixels. The Rapier plugin is installed with
//! the same scale factor, so these helpers exist for the few places that
//! convert explicitly: gravity configuration and world-unit accessors.

use bevy::prelude::*;

pub const PIXELS_PER_METER: f32 = 100.0;

pub fn world_to_px(n: f32) -> f32 {
    n * PIXELS_PER_METER
}

pub fn px_to_world(n: f32) -> f32 {
    n / PIXELS_PER_METER
}

pub fn world_to_px_vec(v: Vec2) -> Vec2 {
    v * PIXELS_PER_METER
}

pub fn px_to_world_vec(v: Vec2) -> Vec2 {
    v / PIXELS_PER_METER
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roughly(a: f32, b: f32) -> bool {
        let scale = a.abs().max(b.abs()).max(1.0);
        (a - b).abs() <= scale * 1e-4
    }

    #[test]
    fn scalar_round_trip() {
        for x in [0.0f32, 1.0, -1.0, 0.003, 640.0, -480.0, 12345.678] {
            assert!(roughly(px_to_world(world_to_px(x)), x), "round trip failed for {x}");
            assert!(roughly(world_to_px(px_to_world(x)), x), "inverse round trip failed for {x}");
        }
    }

    #[test]
    fn vec_round_trip() {
        let v = Vec2::new(-321.5, 77.25);
        let back = px_to_world_vec(world_to_px_vec(v));
        assert!(roughly(back.x, v.x) && roughly(back.y, v.y));
    }

    #[test]
    fn scale_factor_applied() {
        assert_eq!(world_to_px(1.0), PIXELS_PER_METER);
        assert_eq!(px_to_world(PIXELS_PER_METER), 1.0);
        assert_eq!(world_to_px_vec(Vec2::splat(2.0)), Vec2::splat(2.0 * PIXELS_PER_METER));
    }
}
