//! Rippling-wave pattern: a floor grid displaced by a traveling radial wave.
use glam::Vec3;

use crate::error::Result;
use crate::layout::settings::LayoutSettings;
use crate::pattern::{animation_time, slot_count, PatternGenerator, SlotTransforms};

/// Resting height of the sheet above the floor.
const BASE_HEIGHT: f32 = 2.0;
/// Spatial frequency of the primary ripple, radians per world unit.
const RIPPLE_FREQ: f32 = 0.55;
/// Amplitude of the primary ripple.
const RIPPLE_AMP: f32 = 1.2;
/// Phase speed of the primary ripple.
const RIPPLE_SPEED: f32 = 1.6;
/// Rate and amplitude of the slower secondary drift.
const DRIFT_SPEED: f32 = 0.25;
const DRIFT_AMP: f32 = 0.6;

/// Arranges slots on a square grid over the floor and displaces each slot's
/// height by a sinusoidal ripple traveling outward from the center, plus a
/// slower vertical drift that grows with distance from the center.
#[derive(Debug, Clone, Copy, Default)]
pub struct WavePattern;

impl PatternGenerator for WavePattern {
    fn generate(&mut self, settings: &LayoutSettings, time: f32) -> Result<SlotTransforms> {
        let n = slot_count(settings);
        if n == 0 {
            return Ok(SlotTransforms::default());
        }

        settings.validate()?;
        let floor = settings.floor_size;

        let side = (n as f32).sqrt().ceil().max(1.0) as usize;
        let cell = floor / side as f32;
        let half_side = (side - 1) as f32 * 0.5;
        let max_radius = floor * 0.5 * std::f32::consts::SQRT_2;

        let t = animation_time(settings, time);

        let mut out = SlotTransforms::with_capacity(n);
        for i in 0..n {
            let col = i % side;
            let row = i / side;

            let x = (col as f32 - half_side) * cell;
            let z = (row as f32 - half_side) * cell;
            let radius = (x * x + z * z).sqrt();

            let ripple_phase = radius * RIPPLE_FREQ - t * RIPPLE_SPEED;
            let ripple = ripple_phase.sin() * RIPPLE_AMP;
            let drift = (t * DRIFT_SPEED - radius * 0.4).sin() * DRIFT_AMP * (radius / max_radius);
            let y = BASE_HEIGHT + ripple + drift;

            let rotation = if settings.rotation_enabled && radius > f32::EPSILON {
                // Tilt with the local slope of the ripple, leaning radially.
                let tilt = ripple_phase.cos() * 0.25;
                Vec3::new(tilt * (z / radius), 0.0, -tilt * (x / radius))
            } else {
                Vec3::ZERO
            };

            out.positions.push(Vec3::new(x, y, z).into());
            out.rotations.push(rotation.into());
        }

        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wave_settings() -> LayoutSettings {
        LayoutSettings::default()
            .with_capacity(25)
            .with_floor_size(30.0)
            .with_animation_enabled(true)
    }

    #[test]
    fn grid_is_square_and_centered() {
        let settings = wave_settings().with_animation_enabled(false);
        let mut pattern = WavePattern;
        let out = pattern.generate(&settings, 0.0).unwrap();
        assert_eq!(out.len(), 25);

        let min_x = out.positions.iter().map(|p| p.x).fold(f32::INFINITY, f32::min);
        let max_x = out.positions.iter().map(|p| p.x).fold(f32::NEG_INFINITY, f32::max);
        let min_z = out.positions.iter().map(|p| p.z).fold(f32::INFINITY, f32::min);
        let max_z = out.positions.iter().map(|p| p.z).fold(f32::NEG_INFINITY, f32::max);
        assert!((min_x + max_x).abs() < 1e-4);
        assert!((min_z + max_z).abs() < 1e-4);
    }

    #[test]
    fn heights_stay_within_ripple_bounds() {
        let settings = wave_settings();
        let mut pattern = WavePattern;
        for step in 0..60 {
            let out = pattern.generate(&settings, step as f32 * 0.23).unwrap();
            for p in &out.positions {
                assert!(p.y >= BASE_HEIGHT - RIPPLE_AMP - DRIFT_AMP - 1e-4);
                assert!(p.y <= BASE_HEIGHT + RIPPLE_AMP + DRIFT_AMP + 1e-4);
            }
        }
    }

    #[test]
    fn ripple_travels_over_time() {
        let settings = wave_settings();
        let mut pattern = WavePattern;
        let a = pattern.generate(&settings, 0.0).unwrap();
        let b = pattern.generate(&settings, 1.0).unwrap();
        assert_ne!(a.positions, b.positions);
        // XZ placement is fixed; only heights ripple.
        for (pa, pb) in a.positions.iter().zip(b.positions.iter()) {
            assert_eq!(pa.x.to_bits(), pb.x.to_bits());
            assert_eq!(pa.z.to_bits(), pb.z.to_bits());
        }
    }

    #[test]
    fn equal_radius_slots_share_heights() {
        let settings = wave_settings().with_animation_enabled(false);
        let mut pattern = WavePattern;
        let out = pattern.generate(&settings, 0.0).unwrap();
        // Corner slots of a 5x5 grid sit at the same radius.
        let corners = [0usize, 4, 20, 24];
        let y0 = out.positions[corners[0]].y;
        for &c in &corners[1..] {
            assert!((out.positions[c].y - y0).abs() < 1e-4);
        }
    }

    #[test]
    fn generation_is_deterministic() {
        let settings = wave_settings().with_rotation_enabled(true);
        let mut pattern = WavePattern;
        let a = pattern.generate(&settings, 7.77).unwrap();
        let b = pattern.generate(&settings, 7.77).unwrap();
        assert_eq!(a, b);
    }
}
