//! Per-frame layout controller.
//!
//! The controller ties the pieces together: it sanitizes the incoming photo
//! set, keeps the slot manager in sync with the configured capacity, asks the
//! active pattern for transforms at the current animation time, and merges
//! assignment and transforms into the [`LayoutState`] handed to the renderer.
//! A tick never fails and never panics; anything that goes wrong inside a
//! pattern degrades that one frame to a plain grid.
use std::collections::HashSet;

use glam::Vec3;
use tracing::{debug, info, warn};

use crate::layout::events::{EventSink, LayoutEvent, LayoutEventKind};
use crate::layout::settings::LayoutSettings;
use crate::layout::state::{LayoutState, SlotRecord};
use crate::layout::{Photo, PhotoId};
use crate::pattern::{
    FloatPattern, GridPattern, PatternGenerator, PatternKind, SlotTransforms, SpiralPattern,
    WavePattern, MAX_SLOTS,
};
use crate::slots::SlotManager;

/// Grid step of the degraded fallback layout.
const FALLBACK_STEP: f32 = 1.2;

/// Orchestrates slot assignment and pattern generation once per rendered
/// frame. Owns the session's [`SlotManager`] and one instance of each
/// pattern; settings and photos are supplied by the host on every tick.
pub struct LayoutController {
    slots: SlotManager,
    grid: GridPattern,
    float: FloatPattern,
    wave: WavePattern,
    spiral: SpiralPattern,
}

impl LayoutController {
    pub fn new(settings: &LayoutSettings) -> Self {
        Self::with_capacity(settings.capacity)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: SlotManager::new(capacity),
            grid: GridPattern,
            float: FloatPattern::new(),
            wave: WavePattern,
            spiral: SpiralPattern,
        }
    }

    pub fn capacity(&self) -> usize {
        self.slots.capacity()
    }

    /// Computes the layout for one frame.
    ///
    /// `time` is the host's monotonically non-decreasing animation clock in
    /// seconds. The returned state has exactly `capacity` records, ordered
    /// by slot.
    pub fn tick(&mut self, photos: &[Photo], settings: &LayoutSettings, time: f32) -> LayoutState {
        self.tick_with_events(photos, settings, time, &mut ())
    }

    /// Like [`tick`](Self::tick), forwarding diagnostics to an event sink.
    pub fn tick_with_events(
        &mut self,
        photos: &[Photo],
        settings: &LayoutSettings,
        time: f32,
        sink: &mut dyn EventSink,
    ) -> LayoutState {
        let ids = sanitize_photos(photos);

        let requested_capacity = settings.capacity.min(MAX_SLOTS);
        if requested_capacity != self.slots.capacity() {
            let previous = self.slots.capacity();
            let evicted = self.slots.configure(requested_capacity);
            info!(
                "Capacity changed {} -> {} ({} photos evicted).",
                previous, requested_capacity, evicted
            );
            if sink.wants(LayoutEventKind::CapacityConfigured) {
                sink.send(LayoutEvent::CapacityConfigured {
                    previous,
                    capacity: requested_capacity,
                    evicted,
                });
            }
        }
        let capacity = self.slots.capacity();

        if sink.wants(LayoutEventKind::TickStarted) {
            sink.send(LayoutEvent::TickStarted {
                photo_count: ids.len(),
                capacity,
                time,
            });
        }

        let assignment = self.slots.reconcile(&ids);
        let unassigned = ids.len().saturating_sub(assignment.len());
        if unassigned > 0 {
            debug!("{unassigned} photos waiting for a free slot.");
            if sink.wants(LayoutEventKind::PhotosUnassigned) {
                sink.send(LayoutEvent::PhotosUnassigned {
                    unassigned,
                    capacity,
                });
            }
        }

        let requested = settings.pattern;
        let (transforms, pattern) = match self.generate(settings, time) {
            Ok(out) if out.len() == capacity => (out, requested),
            Ok(out) => {
                warn!(
                    "Pattern '{}' produced {} transforms for {} slots; using fallback grid.",
                    requested.name(),
                    out.len(),
                    capacity
                );
                if sink.wants(LayoutEventKind::PatternFellBack) {
                    sink.send(LayoutEvent::PatternFellBack {
                        requested,
                        reason: format!("transform count {} != capacity {}", out.len(), capacity),
                    });
                }
                (fallback_transforms(capacity), PatternKind::Grid)
            }
            Err(e) => {
                warn!(
                    "Pattern '{}' failed ({e}); using fallback grid for this frame.",
                    requested.name()
                );
                if sink.wants(LayoutEventKind::PatternFellBack) {
                    sink.send(LayoutEvent::PatternFellBack {
                        requested,
                        reason: e.to_string(),
                    });
                }
                (fallback_transforms(capacity), PatternKind::Grid)
            }
        };

        let occupants = assignment.occupants(capacity);
        let mut records = Vec::with_capacity(capacity);
        // Built in ascending slot order, which is the delivery order.
        for slot in 0..capacity {
            let position = transforms
                .positions
                .get(slot)
                .copied()
                .map(Vec3::from)
                .unwrap_or(Vec3::ZERO);
            let rotation = transforms
                .rotations
                .get(slot)
                .copied()
                .map(Vec3::from)
                .unwrap_or(Vec3::ZERO);
            records.push(SlotRecord {
                slot,
                occupant: occupants[slot].cloned(),
                position,
                rotation,
            });
        }

        if sink.wants(LayoutEventKind::TickFinished) {
            sink.send(LayoutEvent::TickFinished {
                occupied: assignment.len(),
                placeholders: capacity - assignment.len(),
                pattern,
            });
        }

        LayoutState {
            records,
            time,
            pattern,
        }
    }

    fn generate(
        &mut self,
        settings: &LayoutSettings,
        time: f32,
    ) -> crate::error::Result<SlotTransforms> {
        match settings.pattern {
            PatternKind::Grid => self.grid.generate(settings, time),
            PatternKind::Float => self.float.generate(settings, time),
            PatternKind::Wave => self.wave.generate(settings, time),
            PatternKind::Spiral => self.spiral.generate(settings, time),
        }
    }
}

impl Default for LayoutController {
    fn default() -> Self {
        Self::new(&LayoutSettings::default())
    }
}

/// Drops photos without a usable id, collapses duplicates, and orders the
/// set by `(created_at, id)` so that newly arriving photos claim free slots
/// in a deterministic order no matter how the store delivered them. Photos
/// without a timestamp sort last.
pub(crate) fn sanitize_photos(photos: &[Photo]) -> Vec<PhotoId> {
    let mut ordered: Vec<&Photo> = photos.iter().filter(|p| !p.id.trim().is_empty()).collect();
    ordered.sort_by(|a, b| {
        let ka = a.created_at.unwrap_or(f64::INFINITY);
        let kb = b.created_at.unwrap_or(f64::INFINITY);
        ka.total_cmp(&kb).then_with(|| a.id.cmp(&b.id))
    });

    let mut seen = HashSet::new();
    ordered
        .into_iter()
        .filter(|p| seen.insert(p.id.as_str()))
        .map(|p| p.id.clone())
        .collect()
}

/// Last-resort layout: a plain grid computed from the slot count alone, with
/// no dependence on settings or pattern state, so it cannot itself fail.
pub(crate) fn fallback_transforms(capacity: usize) -> SlotTransforms {
    let n = capacity.min(MAX_SLOTS);
    let columns = ((n as f32).sqrt().ceil() as usize).max(1);
    let half = (columns - 1) as f32 * 0.5;

    let mut out = SlotTransforms::with_capacity(n);
    for i in 0..n {
        let col = i % columns;
        let row = i / columns;
        out.positions.push(
            Vec3::new(
                (col as f32 - half) * FALLBACK_STEP,
                row as f32 * FALLBACK_STEP + 1.0,
                0.0,
            )
            .into(),
        );
        out.rotations.push(Vec3::ZERO.into());
    }
    out
}
