//! Event types and sinks for observing layout ticks.
//!
//! This module defines [`LayoutEvent`] and a set of sinks to collect or
//! forward events while executing
//! [`crate::layout::controller::LayoutController::tick_with_events`].
use crate::pattern::PatternKind;

/// Describes events emitted during a layout tick.
#[non_exhaustive]
#[derive(Debug, Clone)]
pub enum LayoutEvent {
    /// Emitted at the start of every tick.
    TickStarted {
        /// Photos in the sanitized input set.
        photo_count: usize,
        /// Effective slot capacity.
        capacity: usize,
        /// Animation time for this tick.
        time: f32,
    },

    /// Emitted when a settings edit changed the slot capacity.
    CapacityConfigured {
        /// Capacity before the change.
        previous: usize,
        /// Capacity after the change.
        capacity: usize,
        /// Photos whose slots no longer fit and were released.
        evicted: usize,
    },

    /// Emitted when the photo set exceeds capacity and some photos wait.
    PhotosUnassigned {
        /// Photos currently without a slot.
        unassigned: usize,
        /// Effective slot capacity.
        capacity: usize,
    },

    /// Emitted when the requested pattern failed and the plain grid was
    /// substituted for this frame.
    PatternFellBack {
        /// Pattern the settings asked for.
        requested: PatternKind,
        /// Human-readable failure description.
        reason: String,
    },

    /// Emitted after the layout for the tick was assembled.
    TickFinished {
        /// Slots showing a photo.
        occupied: usize,
        /// Slots rendering as placeholders.
        placeholders: usize,
        /// Pattern that actually produced the transforms.
        pattern: PatternKind,
    },
}

/// Discriminant for [`LayoutEvent`], used by [`EventSink::wants`] filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LayoutEventKind {
    TickStarted,
    CapacityConfigured,
    PhotosUnassigned,
    PatternFellBack,
    TickFinished,
}

impl LayoutEvent {
    pub fn kind(&self) -> LayoutEventKind {
        match self {
            LayoutEvent::TickStarted { .. } => LayoutEventKind::TickStarted,
            LayoutEvent::CapacityConfigured { .. } => LayoutEventKind::CapacityConfigured,
            LayoutEvent::PhotosUnassigned { .. } => LayoutEventKind::PhotosUnassigned,
            LayoutEvent::PatternFellBack { .. } => LayoutEventKind::PatternFellBack,
            LayoutEvent::TickFinished { .. } => LayoutEventKind::TickFinished,
        }
    }
}

/// A generic event sink that accepts [`LayoutEvent`]s.
///
/// `wants` lets the controller skip building event payloads nobody will
/// read; sinks that override it should return `true` only for the kinds
/// they handle.
pub trait EventSink {
    fn wants(&self, _kind: LayoutEventKind) -> bool {
        true
    }

    fn send(&mut self, event: LayoutEvent);
}

/// A no-op event sink.
impl EventSink for () {
    #[inline]
    fn wants(&self, _kind: LayoutEventKind) -> bool {
        false
    }

    #[inline]
    fn send(&mut self, _event: LayoutEvent) {}
}

/// An event sink that forwards to a user-provided closure.
pub struct FnSink<F>
where
    F: FnMut(LayoutEvent),
{
    f: F,
}

impl<F> FnSink<F>
where
    F: FnMut(LayoutEvent),
{
    pub fn new(f: F) -> Self {
        Self { f }
    }
}

impl<F> EventSink for FnSink<F>
where
    F: FnMut(LayoutEvent),
{
    #[inline]
    fn send(&mut self, event: LayoutEvent) {
        (self.f)(event);
    }
}

/// An event sink that collects all events in a `Vec`.
#[derive(Default)]
pub struct VecSink {
    events: Vec<LayoutEvent>,
}

impl VecSink {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    pub fn into_inner(self) -> Vec<LayoutEvent> {
        self.events
    }

    pub fn as_slice(&self) -> &[LayoutEvent] {
        &self.events
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

impl EventSink for VecSink {
    #[inline]
    fn send(&mut self, event: LayoutEvent) {
        self.events.push(event);
    }
}
