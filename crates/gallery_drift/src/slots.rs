//! Stable photo-to-slot assignment.
//!
//! This module owns the session-lifetime mapping from photo identifiers to
//! numbered layout slots. The mapping is injective (one photo per slot),
//! bounded by the configured capacity, and stable: adding or removing other
//! photos never moves a photo that already holds a slot. Newly arriving
//! photos take free slots in ascending order, which keeps assignment
//! reproducible for a given input sequence.
use std::collections::{HashMap, HashSet};

use tracing::debug;

use crate::layout::PhotoId;
use crate::pattern::MAX_SLOTS;

/// Immutable snapshot of the photo-to-slot mapping, as returned by
/// [`SlotManager::reconcile`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Assignment {
    slots: HashMap<PhotoId, usize>,
}

impl Assignment {
    pub fn slot_of(&self, id: &str) -> Option<usize> {
        self.slots.get(id).copied()
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&PhotoId, usize)> {
        self.slots.iter().map(|(id, slot)| (id, *slot))
    }

    /// Slot-indexed view: `occupants(capacity)[s]` is the photo holding slot
    /// `s`, if any. Assigned slots at or beyond `capacity` are ignored.
    pub fn occupants(&self, capacity: usize) -> Vec<Option<&PhotoId>> {
        let mut by_slot = vec![None; capacity];
        for (id, slot) in &self.slots {
            if *slot < capacity {
                by_slot[*slot] = Some(id);
            }
        }
        by_slot
    }
}

/// Maintains the assignment of photos to a fixed pool of numbered slots.
///
/// The manager performs no I/O and cannot fail; callers are expected to hand
/// it sanitized, de-duplicated photo identifiers.
#[derive(Debug, Clone)]
pub struct SlotManager {
    capacity: usize,
    assigned: HashMap<PhotoId, usize>,
}

impl SlotManager {
    /// Creates a manager with the given capacity, clamped to [`MAX_SLOTS`].
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity: capacity.min(MAX_SLOTS),
            assigned: HashMap::new(),
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn assigned_len(&self) -> usize {
        self.assigned.len()
    }

    pub fn slot_of(&self, id: &str) -> Option<usize> {
        self.assigned.get(id).copied()
    }

    /// Changes the slot capacity. A no-op when unchanged. Shrinking evicts
    /// every photo whose slot no longer fits; their slots return to the free
    /// pool. Returns the number of evicted photos.
    pub fn configure(&mut self, capacity: usize) -> usize {
        let capacity = capacity.min(MAX_SLOTS);
        if capacity == self.capacity {
            return 0;
        }

        let before = self.assigned.len();
        self.assigned.retain(|_, slot| *slot < capacity);
        let evicted = before - self.assigned.len();
        if evicted > 0 {
            debug!(
                "Capacity change {} -> {} evicted {} photos.",
                self.capacity, capacity, evicted
            );
        }
        self.capacity = capacity;
        evicted
    }

    /// Reconciles the assignment against the current photo set.
    ///
    /// Departed photos release their slots, then photos without a slot take
    /// the lowest free slots in input order while any remain. Photos beyond
    /// capacity are silently left unassigned; a later `reconcile` picks them
    /// up once slots free. Duplicate identifiers are tolerated and treated
    /// as one photo.
    pub fn reconcile(&mut self, photos: &[PhotoId]) -> Assignment {
        let current: HashSet<&str> = photos.iter().map(String::as_str).collect();
        self.assigned.retain(|id, _| current.contains(id.as_str()));

        let occupied: HashSet<usize> = self.assigned.values().copied().collect();
        let mut free = (0..self.capacity).filter(|slot| !occupied.contains(slot));

        for id in photos {
            if self.assigned.contains_key(id) {
                continue;
            }
            let Some(slot) = free.next() else {
                break;
            };
            self.assigned.insert(id.clone(), slot);
        }

        self.snapshot()
    }

    fn snapshot(&self) -> Assignment {
        Assignment {
            slots: self.assigned.clone(),
        }
    }
}
