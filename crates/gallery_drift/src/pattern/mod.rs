//! Procedural motion patterns that place layout slots in 3D space.
//!
//! This module defines the trait and concrete patterns used by the layout
//! controller to compute per-slot positions and rotations for a given
//! animation time. Every pattern is a deterministic function of its settings
//! and the time value: per-slot variation comes from trigonometric hashes of
//! the slot index, never from a random-number generator, so re-generating at
//! the same time always reproduces the same layout.
use std::str::FromStr;

use mint::Vector3;

use crate::error::{Error, Result};
use crate::layout::settings::LayoutSettings;

pub mod float;
pub mod grid;
pub mod spiral;
pub mod wave;

pub use float::FloatPattern;
pub use grid::GridPattern;
pub use spiral::SpiralPattern;
pub use wave::WavePattern;

/// Hard cap on the number of slots any pattern will compute, regardless of
/// the configured capacity. Bounds the worst-case per-frame cost.
pub const MAX_SLOTS: usize = 500;

/// Per-slot transforms produced by a pattern for one animation time.
///
/// Rotations are Euler angles in radians (pitch, yaw, roll). Both vectors
/// have one entry per slot, in slot order.
#[non_exhaustive]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SlotTransforms {
    pub positions: Vec<Vector3<f32>>,
    pub rotations: Vec<Vector3<f32>>,
}

impl SlotTransforms {
    pub fn with_capacity(slots: usize) -> Self {
        Self {
            positions: Vec::with_capacity(slots),
            rotations: Vec::with_capacity(slots),
        }
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}

/// Trait for slot placement patterns.
///
/// `generate` must be deterministic: identical `(settings, time)` inputs
/// yield identical transforms. The receiver is mutable only so that patterns
/// may keep an explicit memo of time-independent intermediate data (see
/// [`FloatPattern`]); no pattern carries state that influences the output
/// beyond that memoization.
pub trait PatternGenerator: Send + Sync {
    fn generate(&mut self, settings: &LayoutSettings, time: f32) -> Result<SlotTransforms>;
}

/// Names the four built-in patterns.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum PatternKind {
    #[default]
    Grid,
    Float,
    Wave,
    Spiral,
}

impl PatternKind {
    /// Parse a pattern name, falling back to [`PatternKind::Grid`] for
    /// anything unrecognized. Unknown names are logged, not surfaced.
    pub fn from_name(name: &str) -> Self {
        match name.parse() {
            Ok(kind) => kind,
            Err(_) => {
                tracing::warn!("Unknown pattern name '{name}'; falling back to grid.");
                PatternKind::Grid
            }
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            PatternKind::Grid => "grid",
            PatternKind::Float => "float",
            PatternKind::Wave => "wave",
            PatternKind::Spiral => "spiral",
        }
    }
}

impl FromStr for PatternKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "grid" => Ok(PatternKind::Grid),
            "float" => Ok(PatternKind::Float),
            "wave" => Ok(PatternKind::Wave),
            "spiral" => Ok(PatternKind::Spiral),
            _ => Err(Error::UnknownPattern { name: s.to_owned() }),
        }
    }
}

/// Number of slots a pattern actually computes for the given settings.
#[inline]
pub(crate) fn slot_count(settings: &LayoutSettings) -> usize {
    settings.capacity.min(MAX_SLOTS)
}

/// Effective animation time: zero whenever animation is disabled, so every
/// pattern freezes into a deterministic static layout.
#[inline]
pub(crate) fn animation_time(settings: &LayoutSettings, time: f32) -> f32 {
    if settings.animation_enabled && time.is_finite() {
        time * settings.animation_speed
    } else {
        0.0
    }
}

/// Fractional part, mapped into [0, 1).
#[inline]
pub(crate) fn frac(x: f32) -> f32 {
    x - x.floor()
}

/// Deterministic per-slot pseudo-random value in [0, 1).
///
/// The classic trigonometric hash. Stable for a given index, so layouts do
/// not reshuffle between frames or pattern switches.
#[inline]
pub(crate) fn hash01(index: usize, salt: f32) -> f32 {
    let x = (index as f32 + 1.0) * salt;
    frac(x.sin() * 43_758.547)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_name_falls_back_to_grid() {
        assert_eq!(PatternKind::from_name("spiral"), PatternKind::Spiral);
        assert_eq!(PatternKind::from_name("SPIRAL"), PatternKind::Spiral);
        assert_eq!(PatternKind::from_name("tornado"), PatternKind::Grid);
        assert_eq!(PatternKind::from_name(""), PatternKind::Grid);
    }

    #[test]
    fn from_str_rejects_unknown_names() {
        assert!("wave".parse::<PatternKind>().is_ok());
        assert!("  float ".parse::<PatternKind>().is_ok());
        assert!("blizzard".parse::<PatternKind>().is_err());
    }

    #[test]
    fn hash01_is_deterministic_and_in_range() {
        for index in 0..1_000 {
            let a = hash01(index, 12.9898);
            let b = hash01(index, 12.9898);
            assert_eq!(a, b);
            assert!((0.0..1.0).contains(&a), "hash01({index}) = {a}");
        }
    }

    #[test]
    fn hash01_varies_across_indices() {
        let distinct: std::collections::HashSet<u32> =
            (0..100).map(|i| hash01(i, 78.233).to_bits()).collect();
        assert!(distinct.len() > 90);
    }

    #[test]
    fn animation_time_is_zero_when_disabled() {
        let settings = LayoutSettings::default()
            .with_animation_enabled(false)
            .with_animation_speed(2.0);
        assert_eq!(animation_time(&settings, 123.0), 0.0);

        let settings = settings.with_animation_enabled(true);
        assert_eq!(animation_time(&settings, 2.0), 4.0);
        assert_eq!(animation_time(&settings, f32::NAN), 0.0);
    }
}
