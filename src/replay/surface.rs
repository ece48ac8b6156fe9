//! A [`Surface`] that records listener registrations.
//!
//! The replay runner consults it to decide whether a scripted event would
//! reach the engine at all, the way a page only delivers events to handlers
//! that are registered.

use crate::app::{ListenerKind, Surface};
use std::cell::{Cell, RefCell};
use std::collections::BTreeMap;

/// A headless page: counts listener registrations per kind, remembers
/// whether the container was detached, and holds a resizable viewport.
#[derive(Debug)]
pub struct RecordingSurface {
    active: RefCell<BTreeMap<ListenerKind, usize>>,
    registrations: Cell<usize>,
    detached: Cell<bool>,
    viewport_height: Cell<f64>,
}

impl RecordingSurface {
    /// Creates a surface with no listeners and a viewport of
    /// `viewport_height` client pixels.
    #[must_use]
    pub const fn new(viewport_height: f64) -> Self {
        Self {
            active: RefCell::new(BTreeMap::new()),
            registrations: Cell::new(0),
            detached: Cell::new(false),
            viewport_height: Cell::new(viewport_height),
        }
    }

    /// Whether at least one listener of `kind` is registered.
    #[must_use]
    pub fn is_listening(&self, kind: ListenerKind) -> bool {
        self.active.borrow().get(&kind).is_some_and(|count| *count > 0)
    }

    /// Currently registered listener kinds, in a stable order.
    #[must_use]
    pub fn active_listeners(&self) -> Vec<ListenerKind> {
        self.active
            .borrow()
            .iter()
            .filter(|(_, count)| **count > 0)
            .map(|(kind, _)| *kind)
            .collect()
    }

    /// Total `add_listener` calls seen so far.
    #[must_use]
    pub fn registrations(&self) -> usize {
        self.registrations.get()
    }

    /// Whether the engine detached its container.
    #[must_use]
    pub fn is_detached(&self) -> bool {
        self.detached.get()
    }

    /// Resizes the viewport. The engine sees the new height on its next
    /// pointer-move.
    pub fn set_viewport_height(&self, height: f64) {
        tracing::debug!(height, "viewport resized");
        self.viewport_height.set(height);
    }
}

impl Default for RecordingSurface {
    fn default() -> Self {
        Self::new(crate::app::NULL_SURFACE_VIEWPORT_HEIGHT)
    }
}

impl Surface for RecordingSurface {
    fn add_listener(&self, kind: ListenerKind) {
        *self.active.borrow_mut().entry(kind).or_insert(0) += 1;
        self.registrations.set(self.registrations.get() + 1);
    }

    fn remove_listener(&self, kind: ListenerKind) {
        let mut active = self.active.borrow_mut();
        match active.get_mut(&kind) {
            Some(count) if *count > 0 => *count -= 1,
            _ => tracing::warn!(?kind, "removing a listener that was never added"),
        }
    }

    fn detach_container(&self) {
        self.detached.set(true);
    }

    fn viewport_height(&self) -> f64 {
        self.viewport_height.get()
    }
}
