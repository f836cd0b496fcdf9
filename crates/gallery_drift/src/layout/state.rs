//! Per-frame layout output consumed by the rendering layer.
use std::borrow::Cow;

use glam::Vec3;

use crate::layout::PhotoId;
use crate::pattern::PatternKind;

/// One slot's transform for the current frame, occupied or placeholder.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq)]
pub struct SlotRecord {
    /// Slot index in `[0, capacity)`.
    pub slot: usize,
    /// Occupying photo, or `None` for a placeholder.
    pub occupant: Option<PhotoId>,
    /// World position.
    pub position: Vec3,
    /// Euler rotation in radians (pitch, yaw, roll).
    pub rotation: Vec3,
}

impl SlotRecord {
    pub fn is_placeholder(&self) -> bool {
        self.occupant.is_none()
    }

    /// Stable identifier for renderer-side instance tracking: the photo id
    /// when occupied, otherwise a synthetic `placeholder-<slot>` id that
    /// stays the same for a given slot across frames.
    pub fn identifier(&self) -> Cow<'_, str> {
        match &self.occupant {
            Some(id) => Cow::Borrowed(id.as_str()),
            None => Cow::Owned(format!("placeholder-{}", self.slot)),
        }
    }
}

/// The full layout for one animation time: one record per slot, ordered by
/// slot index. Rebuilt from scratch every tick; renderers interpolate toward
/// it rather than mutating it.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutState {
    /// Per-slot records in ascending slot order.
    pub records: Vec<SlotRecord>,
    /// Animation time this layout was computed for.
    pub time: f32,
    /// Pattern that actually produced the transforms. Differs from the
    /// requested pattern when the controller fell back to the plain grid.
    pub pattern: PatternKind,
}

impl LayoutState {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, slot: usize) -> Option<&SlotRecord> {
        self.records.get(slot)
    }

    /// Records currently showing a photo.
    pub fn occupied(&self) -> impl Iterator<Item = &SlotRecord> {
        self.records.iter().filter(|r| r.occupant.is_some())
    }

    /// Records rendering as placeholders.
    pub fn placeholders(&self) -> impl Iterator<Item = &SlotRecord> {
        self.records.iter().filter(|r| r.occupant.is_none())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(slot: usize, occupant: Option<&str>) -> SlotRecord {
        SlotRecord {
            slot,
            occupant: occupant.map(str::to_owned),
            position: Vec3::ZERO,
            rotation: Vec3::ZERO,
        }
    }

    #[test]
    fn identifier_is_stable_for_placeholders() {
        let r = record(7, None);
        assert!(r.is_placeholder());
        assert_eq!(r.identifier(), "placeholder-7");
    }

    #[test]
    fn identifier_uses_the_occupant_id() {
        let r = record(0, Some("photo-abc"));
        assert_eq!(r.identifier(), "photo-abc");
    }

    #[test]
    fn occupied_and_placeholder_views_partition_records() {
        let state = LayoutState {
            records: vec![record(0, Some("a")), record(1, None), record(2, Some("b"))],
            time: 0.0,
            pattern: PatternKind::Grid,
        };
        assert_eq!(state.occupied().count(), 2);
        assert_eq!(state.placeholders().count(), 1);
        assert_eq!(state.len(), 3);
    }
}
