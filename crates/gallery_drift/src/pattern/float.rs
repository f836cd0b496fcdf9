//! Rising-float pattern: photos drift up from the floor and wrap around.
use glam::{Vec2, Vec3};

use crate::error::Result;
use crate::layout::settings::LayoutSettings;
use crate::pattern::{animation_time, frac, hash01, slot_count, PatternGenerator, SlotTransforms};

/// Height at which every slot starts its rise.
const START_HEIGHT: f32 = 0.5;
/// Vertical rise speed in world units per (scaled) second.
const RISE_RATE: f32 = 0.4;
/// Fraction of a floor cell that per-slot jitter may cover.
const JITTER_SPAN: f32 = 0.8;

const JITTER_SALT_X: f32 = 12.9898;
const JITTER_SALT_Z: f32 = 78.233;
const PHASE_SALT: f32 = 3.177;

/// Cached time-independent floor placement, keyed by the inputs that shape it.
#[derive(Debug, Clone)]
struct FloorCache {
    floor_size: u32,
    slots: usize,
    cell: f32,
    base: Vec<Vec2>,
}

/// Distributes slots over a jittered floor grid and floats each one upward,
/// wrapping from `wall_height` back to the start height. Per-slot phase
/// offsets stagger the rise so slots never move in lockstep.
///
/// The jittered floor placement depends only on `(floor_size, slot count)`,
/// so it is memoized and rebuilt only when that key changes.
#[derive(Debug, Clone, Default)]
pub struct FloatPattern {
    cache: Option<FloorCache>,
}

impl FloatPattern {
    pub fn new() -> Self {
        Self::default()
    }

    fn ensure_floor_cache(&mut self, floor_size: f32, slots: usize) {
        let key = floor_size.to_bits();
        let stale = match &self.cache {
            Some(cache) => cache.floor_size != key || cache.slots != slots,
            None => true,
        };
        if stale {
            let side = (slots as f32).sqrt().ceil().max(1.0) as usize;
            let cell = floor_size / side as f32;
            let half = floor_size * 0.5;

            let mut base = Vec::with_capacity(slots);
            for i in 0..slots {
                let col = i % side;
                let row = i / side;
                let jitter_x = (hash01(i, JITTER_SALT_X) - 0.5) * cell * JITTER_SPAN;
                let jitter_z = (hash01(i, JITTER_SALT_Z) - 0.5) * cell * JITTER_SPAN;
                base.push(Vec2::new(
                    (col as f32 + 0.5) * cell - half + jitter_x,
                    (row as f32 + 0.5) * cell - half + jitter_z,
                ));
            }
            self.cache = Some(FloorCache {
                floor_size: key,
                slots,
                cell,
                base,
            });
        }
    }
}

impl PatternGenerator for FloatPattern {
    fn generate(&mut self, settings: &LayoutSettings, time: f32) -> Result<SlotTransforms> {
        let n = slot_count(settings);
        if n == 0 {
            return Ok(SlotTransforms::default());
        }

        settings.validate()?;
        let floor = settings.floor_size;
        let wall = settings.wall_height;

        let top = wall.max(START_HEIGHT + 1.0);
        let cycle = top - START_HEIGHT;
        let t = animation_time(settings, time);

        self.ensure_floor_cache(floor, n);
        let cache = self.cache.as_ref().expect("cache populated above");
        let cell = cache.cell;

        let mut out = SlotTransforms::with_capacity(n);
        for (i, anchor) in cache.base.iter().enumerate() {
            let phase = hash01(i, PHASE_SALT);
            let progress = if settings.animation_enabled {
                frac(t * RISE_RATE / cycle + phase)
            } else {
                phase
            };
            let mut y = START_HEIGHT + progress * cycle;

            let mut x = anchor.x;
            let mut z = anchor.y;
            if settings.animation_enabled {
                y += (t * 1.8 + i as f32 * 0.7).sin() * 0.08;
                x += (t * 0.35 + i as f32 * 1.31).sin() * cell * 0.25;
                z += (t * 0.28 + i as f32 * 2.09).cos() * cell * 0.25;
            }

            let rotation = if settings.rotation_enabled {
                // Face the scene center, with a slow wobble around it.
                let yaw = (-x).atan2(-z) + (t * 0.9 + i as f32 * 1.7).sin() * 0.08;
                let pitch = (t * 0.5 + i as f32 * 2.3).sin() * 0.05;
                Vec3::new(pitch, yaw, 0.0)
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

    fn float_settings() -> LayoutSettings {
        LayoutSettings::default()
            .with_capacity(30)
            .with_floor_size(40.0)
            .with_wall_height(16.0)
            .with_animation_enabled(true)
    }

    #[test]
    fn static_heights_ignore_time_when_animation_is_off() {
        let settings = float_settings().with_animation_enabled(false);
        let mut pattern = FloatPattern::new();
        let early = pattern.generate(&settings, 0.0).unwrap();
        let late = pattern.generate(&settings, 99.5).unwrap();
        assert_eq!(early, late);
    }

    #[test]
    fn heights_stay_inside_the_rise_cycle() {
        let settings = float_settings();
        let mut pattern = FloatPattern::new();
        for step in 0..80 {
            let out = pattern.generate(&settings, step as f32 * 0.47).unwrap();
            for p in &out.positions {
                assert!(p.y >= START_HEIGHT - 0.1);
                assert!(p.y <= 16.0 + 0.1);
            }
        }
    }

    #[test]
    fn rise_phases_are_staggered() {
        let settings = float_settings();
        let mut pattern = FloatPattern::new();
        let out = pattern.generate(&settings, 1.0).unwrap();
        let distinct: std::collections::HashSet<u32> =
            out.positions.iter().map(|p| p.y.to_bits()).collect();
        assert!(distinct.len() > out.len() / 2);
    }

    #[test]
    fn floor_cache_rebuilds_on_floor_size_change() {
        let mut pattern = FloatPattern::new();
        let narrow = float_settings().with_floor_size(20.0).with_animation_enabled(false);
        let wide = float_settings().with_floor_size(60.0).with_animation_enabled(false);

        let a = pattern.generate(&narrow, 0.0).unwrap();
        let b = pattern.generate(&wide, 0.0).unwrap();
        assert_ne!(a, b);

        // Returning to the first key reproduces the original placement.
        let c = pattern.generate(&narrow, 0.0).unwrap();
        assert_eq!(a, c);
    }

    #[test]
    fn floor_cache_rebuilds_on_capacity_change() {
        let mut pattern = FloatPattern::new();
        let small = float_settings().with_capacity(10).with_animation_enabled(false);
        let large = float_settings().with_capacity(40).with_animation_enabled(false);

        let a = pattern.generate(&small, 0.0).unwrap();
        let b = pattern.generate(&large, 0.0).unwrap();
        assert_eq!(a.len(), 10);
        assert_eq!(b.len(), 40);
        // The shared first slots move because the grid side length changed.
        assert_ne!(a.positions[0], b.positions[0]);
    }

    #[test]
    fn jitter_keeps_slots_near_the_floor_extent() {
        let settings = float_settings().with_animation_enabled(false);
        let mut pattern = FloatPattern::new();
        let out = pattern.generate(&settings, 0.0).unwrap();
        for p in &out.positions {
            assert!(p.x.abs() <= 40.0 * 0.5 + 4.0);
            assert!(p.z.abs() <= 40.0 * 0.5 + 4.0);
        }
    }

    #[test]
    fn degenerate_floor_errors() {
        let mut settings = float_settings();
        settings.floor_size = -3.0;
        let mut pattern = FloatPattern::new();
        assert!(pattern.generate(&settings, 0.0).is_err());
    }
}
