//! Rectangular photo-wall pattern.
use glam::Vec3;

use crate::error::Result;
use crate::layout::settings::LayoutSettings;
use crate::pattern::{animation_time, slot_count, PatternGenerator, SlotTransforms};

/// Horizontal step factor at zero spacing. Below 1.0, neighboring photos
/// overlap edge to edge for the solid-wall look.
const MIN_STEP_X: f32 = 0.85;
/// Vertical step factor at zero spacing. Barely below 1.0 so rows overlap
/// just enough to close gaps.
const MIN_STEP_Y: f32 = 0.98;
/// Per-slot depth offset. Overlapping photos must not share a Z plane.
const Z_SEPARATION: f32 = 0.01;

const SWAY_RATE: f32 = 0.9;
const COLUMN_PHASE: f32 = 0.6;
const ROW_PHASE: f32 = 0.9;

/// Arranges slots into a wall of `columns = ceil(sqrt(n * aspect_ratio))` by
/// `rows = ceil(n / columns)`, centered on the origin in X and Y. When
/// animation is enabled, each column sways vertically (clamped so no photo
/// dips below its resting height) and each row drifts slightly in depth.
#[derive(Debug, Clone, Copy, Default)]
pub struct GridPattern;

impl PatternGenerator for GridPattern {
    fn generate(&mut self, settings: &LayoutSettings, time: f32) -> Result<SlotTransforms> {
        let n = slot_count(settings);
        if n == 0 {
            return Ok(SlotTransforms::default());
        }

        settings.validate()?;
        let size = settings.photo_size;
        let aspect = settings.aspect_ratio;
        let spacing = settings.spacing;

        let columns = ((n as f32 * aspect).sqrt().ceil() as usize).max(1);
        let rows = n.div_ceil(columns);

        let step_x = size * (MIN_STEP_X + spacing);
        let step_y = size * (MIN_STEP_Y + spacing);

        let half_cols = (columns - 1) as f32 * 0.5;
        let half_rows = (rows - 1) as f32 * 0.5;

        let t = animation_time(settings, time);
        let sway_amp = size * 0.1;

        let mut out = SlotTransforms::with_capacity(n);
        for i in 0..n {
            let col = i % columns;
            let row = i / columns;

            let x = (col as f32 - half_cols) * step_x;
            let base_y = (half_rows - row as f32) * step_y;
            let mut y = base_y;
            let mut z = -(i as f32) * Z_SEPARATION;

            if settings.animation_enabled {
                // Vertical sway never drops below the resting height.
                let sway = (t * SWAY_RATE + col as f32 * COLUMN_PHASE).sin() * sway_amp;
                y += sway.max(0.0);
                z += (t * SWAY_RATE * 0.7 + row as f32 * ROW_PHASE).cos() * sway_amp * 0.5;
            }

            let rotation = if settings.rotation_enabled {
                Vec3::new(
                    (t * 0.8 + i as f32 * 0.37).sin() * 0.04,
                    0.0,
                    (t * 0.6 + i as f32 * 0.53).cos() * 0.04,
                )
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
    use crate::pattern::MAX_SLOTS;

    fn wall_settings() -> LayoutSettings {
        LayoutSettings::default()
            .with_capacity(9)
            .with_photo_size(2.0)
            .with_spacing(0.0)
            .with_aspect_ratio(1.0)
            .with_animation_enabled(false)
    }

    #[test]
    fn nine_slots_form_a_centered_three_by_three_wall() {
        let mut pattern = GridPattern;
        let out = pattern.generate(&wall_settings(), 0.0).unwrap();
        assert_eq!(out.len(), 9);

        let xs: Vec<f32> = out.positions.iter().map(|p| p.x).collect();
        let ys: Vec<f32> = out.positions.iter().map(|p| p.y).collect();

        let distinct_x: std::collections::HashSet<u32> =
            xs.iter().map(|x| x.to_bits()).collect();
        assert_eq!(distinct_x.len(), 3);

        let min_x = xs.iter().copied().fold(f32::INFINITY, f32::min);
        let max_x = xs.iter().copied().fold(f32::NEG_INFINITY, f32::max);
        let min_y = ys.iter().copied().fold(f32::INFINITY, f32::min);
        let max_y = ys.iter().copied().fold(f32::NEG_INFINITY, f32::max);
        assert!((min_x + max_x).abs() < 1e-4);
        assert!((min_y + max_y).abs() < 1e-4);
    }

    #[test]
    fn zero_spacing_overlaps_horizontally() {
        let mut pattern = GridPattern;
        let out = pattern.generate(&wall_settings(), 0.0).unwrap();
        let xs: Vec<f32> = out.positions.iter().map(|p| p.x).collect();
        let step = (xs[1] - xs[0]).abs();
        assert!(step < 2.0, "step {step} should be below the photo size");
    }

    #[test]
    fn generation_is_deterministic() {
        let settings = wall_settings()
            .with_animation_enabled(true)
            .with_rotation_enabled(true);
        let mut pattern = GridPattern;
        let a = pattern.generate(&settings, 4.2).unwrap();
        let b = pattern.generate(&settings, 4.2).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn sway_never_dips_below_resting_height() {
        let animated = wall_settings().with_animation_enabled(true);
        let still = wall_settings();
        let mut pattern = GridPattern;
        let baseline = pattern.generate(&still, 0.0).unwrap();
        for step in 0..50 {
            let t = step as f32 * 0.31;
            let out = pattern.generate(&animated, t).unwrap();
            for (moved, rest) in out.positions.iter().zip(baseline.positions.iter()) {
                assert!(moved.y >= rest.y - 1e-4);
            }
        }
    }

    #[test]
    fn slot_count_is_clamped() {
        let mut settings = wall_settings();
        settings.capacity = 10_000;
        let mut pattern = GridPattern;
        let out = pattern.generate(&settings, 0.0).unwrap();
        assert_eq!(out.len(), MAX_SLOTS);
    }

    #[test]
    fn hostile_settings_error_instead_of_emitting_nan() {
        let mut settings = wall_settings();
        settings.photo_size = f32::NAN;
        let mut pattern = GridPattern;
        assert!(pattern.generate(&settings, 0.0).is_err());

        let mut settings = wall_settings();
        settings.aspect_ratio = 0.0;
        assert!(pattern.generate(&settings, 0.0).is_err());
    }
}
