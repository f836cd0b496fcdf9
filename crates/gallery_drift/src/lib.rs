#![forbid(unsafe_code)]
//! gallery_drift: animated 3D slot layout for live photo walls.
//!
//! Modules:
//! - slots: stable photo-to-slot assignment that survives churn
//! - pattern: procedural motion patterns (grid wall, float, wave, spiral)
//! - layout: settings, per-frame layout state, events, and the tick controller
//!
//! For examples and docs, see README and docs.rs.
pub mod error;
pub mod layout;
pub mod pattern;
pub mod slots;

/// Convenient re-exports for common types. Import with `use gallery_drift::prelude::*;`.
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::layout::controller::LayoutController;
    pub use crate::layout::events::{EventSink, FnSink, LayoutEvent, LayoutEventKind, VecSink};
    pub use crate::layout::settings::LayoutSettings;
    pub use crate::layout::state::{LayoutState, SlotRecord};
    pub use crate::layout::{Photo, PhotoId};
    pub use crate::pattern::{
        FloatPattern, GridPattern, PatternGenerator, PatternKind, SlotTransforms, SpiralPattern,
        WavePattern, MAX_SLOTS,
    };
    pub use crate::slots::{Assignment, SlotManager};
}
