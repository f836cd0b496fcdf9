//! Vortex-spiral pattern: a rotating funnel of photos.
use std::f32::consts::TAU;

use glam::Vec3;

use crate::error::Result;
use crate::layout::settings::LayoutSettings;
use crate::pattern::{animation_time, hash01, slot_count, PatternGenerator, SlotTransforms};

/// Height of the funnel mouth above the floor.
const BASE_HEIGHT: f32 = 0.5;
/// Exponent applied to the per-slot height hash. Values above 1 pull the
/// distribution toward the bottom of the funnel.
const HEIGHT_BIAS: f32 = 2.1;
/// Fraction of slots flung onto wider orbital paths.
const ORBITAL_FRACTION: f32 = 0.2;
/// Radial boost applied to orbital slots.
const ORBITAL_BOOST: f32 = 1.6;
/// Base angular speed of the vortex, radians per (scaled) second.
const ROTATION_RATE: f32 = 0.9;

const HEIGHT_SALT: f32 = 7.531;
const ORBITAL_SALT: f32 = 41.113;
const ANGLE_SALT: f32 = 2.399;

/// Models a funnel vortex. Each slot's height is a power-biased hash of its
/// index (denser toward the bottom); the radius at that height interpolates
/// from a narrow base to the wide funnel top. Roughly one slot in five is
/// "orbital": pushed farther out on an elliptical, oscillating path. The
/// whole funnel rotates, slower at the bottom than at the top, with mild
/// turbulence layered on.
#[derive(Debug, Clone, Copy, Default)]
pub struct SpiralPattern;

impl PatternGenerator for SpiralPattern {
    fn generate(&mut self, settings: &LayoutSettings, time: f32) -> Result<SlotTransforms> {
        let n = slot_count(settings);
        if n == 0 {
            return Ok(SlotTransforms::default());
        }

        settings.validate()?;
        let wall = settings.wall_height;
        let floor = settings.floor_size;
        let size = settings.photo_size;

        let base_radius = (size * 1.5).max(1.0);
        let top_radius = (floor * 0.5).max(base_radius + 1.0);
        let t = animation_time(settings, time);

        let mut out = SlotTransforms::with_capacity(n);
        for i in 0..n {
            let fi = i as f32;
            let height01 = hash01(i, HEIGHT_SALT).powf(HEIGHT_BIAS);
            let mut y = BASE_HEIGHT + height01 * wall;

            // Funnel wall: narrow at the bottom, wide at the top.
            let mut radius = base_radius + (top_radius - base_radius) * height01;

            // Bottom rotates slower than the top.
            let rate = 0.35 + 0.65 * height01;
            let angle = hash01(i, ANGLE_SALT) * TAU + t * ROTATION_RATE * rate;

            let orbital = hash01(i, ORBITAL_SALT) < ORBITAL_FRACTION;
            let (x, z) = if orbital {
                radius *= ORBITAL_BOOST;
                let rx = radius * (1.15 + 0.2 * (t * 0.45 + fi * 0.61).sin());
                let rz = radius * (0.85 + 0.2 * (t * 0.38 + fi * 0.83).cos());
                y += (t * 0.7 + fi * 1.9).sin() * 0.4;
                (angle.cos() * rx, angle.sin() * rz)
            } else {
                let turbulent = radius + (t * 1.7 + fi * 2.3).sin() * 0.25;
                y += (t * 1.3 + fi * 3.7).sin() * 0.2;
                (angle.cos() * turbulent, angle.sin() * turbulent)
            };

            let rotation = if settings.rotation_enabled {
                // Tangent-facing, with fixed per-slot tilts.
                Vec3::new(
                    (fi * 1.3).sin() * 0.3,
                    angle + std::f32::consts::FRAC_PI_2,
                    (fi * 0.9).cos() * 0.2,
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
