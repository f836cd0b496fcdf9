//! Layout settings supplied by the host on every tick.
use crate::error::{Error, Result};
use crate::pattern::{PatternKind, MAX_SLOTS};

pub const DEFAULT_CAPACITY: usize = 50;
pub const DEFAULT_PHOTO_SIZE: f32 = 3.0;
pub const DEFAULT_SPACING: f32 = 0.25;
pub const DEFAULT_ANIMATION_SPEED: f32 = 1.0;
pub const DEFAULT_ASPECT_RATIO: f32 = 1.6;
pub const DEFAULT_FLOOR_SIZE: f32 = 60.0;
pub const DEFAULT_WALL_HEIGHT: f32 = 18.0;

/// Configuration for the layout engine.
///
/// Settings arrive from the host each tick; the controller never keeps a
/// copy across frames, so edits take effect on the next tick. Fields a host
/// leaves out of a serialized settings object fall back to the defaults.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct LayoutSettings {
    /// Motion pattern to lay slots out with.
    pub pattern: PatternKind,
    /// Number of slots, hard-capped at [`MAX_SLOTS`].
    pub capacity: usize,
    /// Edge length of a displayed photo in world units.
    pub photo_size: f32,
    /// Extra gap between photos as a fraction of `photo_size`.
    pub spacing: f32,
    /// Whether patterns animate over time.
    pub animation_enabled: bool,
    /// Time multiplier applied to the animation clock.
    pub animation_speed: f32,
    /// Width-to-height bias of the grid wall.
    pub aspect_ratio: f32,
    /// Edge length of the floor area used by float/wave/spiral.
    pub floor_size: f32,
    /// Height of the wall / rise cycle / funnel.
    pub wall_height: f32,
    /// Whether patterns emit per-slot rotations.
    pub rotation_enabled: bool,
}

impl Default for LayoutSettings {
    fn default() -> Self {
        Self {
            pattern: PatternKind::Grid,
            capacity: DEFAULT_CAPACITY,
            photo_size: DEFAULT_PHOTO_SIZE,
            spacing: DEFAULT_SPACING,
            animation_enabled: true,
            animation_speed: DEFAULT_ANIMATION_SPEED,
            aspect_ratio: DEFAULT_ASPECT_RATIO,
            floor_size: DEFAULT_FLOOR_SIZE,
            wall_height: DEFAULT_WALL_HEIGHT,
            rotation_enabled: true,
        }
    }
}

impl LayoutSettings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_pattern(mut self, pattern: PatternKind) -> Self {
        self.pattern = pattern;
        self
    }

    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    pub fn with_photo_size(mut self, photo_size: f32) -> Self {
        self.photo_size = photo_size;
        self
    }

    pub fn with_spacing(mut self, spacing: f32) -> Self {
        self.spacing = spacing;
        self
    }

    pub fn with_animation_enabled(mut self, enabled: bool) -> Self {
        self.animation_enabled = enabled;
        self
    }

    pub fn with_animation_speed(mut self, speed: f32) -> Self {
        self.animation_speed = speed;
        self
    }

    pub fn with_aspect_ratio(mut self, aspect_ratio: f32) -> Self {
        self.aspect_ratio = aspect_ratio;
        self
    }

    pub fn with_floor_size(mut self, floor_size: f32) -> Self {
        self.floor_size = floor_size;
        self
    }

    pub fn with_wall_height(mut self, wall_height: f32) -> Self {
        self.wall_height = wall_height;
        self
    }

    pub fn with_rotation_enabled(mut self, enabled: bool) -> Self {
        self.rotation_enabled = enabled;
        self
    }

    /// Validates the settings, returning an error if invalid.
    pub fn validate(&self) -> Result<()> {
        if !self.photo_size.is_finite() || self.photo_size <= 0.0 {
            return Err(Error::InvalidSettings("photo_size must be > 0".into()));
        }
        if !self.spacing.is_finite() || self.spacing < 0.0 {
            return Err(Error::InvalidSettings("spacing must be >= 0".into()));
        }
        if !self.animation_speed.is_finite() || self.animation_speed < 0.0 {
            return Err(Error::InvalidSettings("animation_speed must be >= 0".into()));
        }
        if !self.aspect_ratio.is_finite() || self.aspect_ratio <= 0.0 {
            return Err(Error::InvalidSettings("aspect_ratio must be > 0".into()));
        }
        if !self.floor_size.is_finite() || self.floor_size <= 0.0 {
            return Err(Error::InvalidSettings("floor_size must be > 0".into()));
        }
        if !self.wall_height.is_finite() || self.wall_height <= 0.0 {
            return Err(Error::InvalidSettings("wall_height must be > 0".into()));
        }

        Ok(())
    }

    /// Returns a copy with every out-of-range or non-finite value replaced by
    /// its default and the capacity clamped to [`MAX_SLOTS`]. The controller
    /// runs on sanitized settings so a hostile host value degrades a frame
    /// instead of stalling the animation loop.
    pub fn sanitized(&self) -> Self {
        let mut out = self.clone();
        out.capacity = out.capacity.min(MAX_SLOTS);
        if !out.photo_size.is_finite() || out.photo_size <= 0.0 {
            out.photo_size = DEFAULT_PHOTO_SIZE;
        }
        if !out.spacing.is_finite() || out.spacing < 0.0 {
            out.spacing = DEFAULT_SPACING;
        }
        if !out.animation_speed.is_finite() || out.animation_speed < 0.0 {
            out.animation_speed = DEFAULT_ANIMATION_SPEED;
        }
        if !out.aspect_ratio.is_finite() || out.aspect_ratio <= 0.0 {
            out.aspect_ratio = DEFAULT_ASPECT_RATIO;
        }
        if !out.floor_size.is_finite() || out.floor_size <= 0.0 {
            out.floor_size = DEFAULT_FLOOR_SIZE;
        }
        if !out.wall_height.is_finite() || out.wall_height <= 0.0 {
            out.wall_height = DEFAULT_WALL_HEIGHT;
        }
        out
    }
}
