//! Listener registration on the host's input surface.
//!
//! The engine receives pointer events only while the matching listener is
//! registered with the host: the container pointer-down listener for the
//! engine's whole lifetime, the page-level move/up listeners for the lifetime
//! of one drag session. Registrations are held as [`ListenerLease`] values
//! that unregister on drop, so commit, cancel, `destroy` and dropping the
//! engine all release exactly what was registered.
//!
//! The surface also reports the current viewport height, which the engine
//! reads on every pointer-move for bottom-edge autoscroll.

use std::fmt;
use std::rc::Rc;

/// A listener the engine registers with its host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ListenerKind {
    /// Pointer-down on the list container. Live from construction to destroy.
    ContainerPointerDown,
    /// Page-level pointer-move. Live only while dragging.
    PagePointerMove,
    /// Page-level pointer-up. Live only while dragging.
    PagePointerUp,
}

/// Listener kinds held by a drag session.
pub(crate) const DRAG_LISTENERS: &[ListenerKind] =
    &[ListenerKind::PagePointerMove, ListenerKind::PagePointerUp];

/// Listener kinds held by the engine itself.
pub(crate) const CONTAINER_LISTENERS: &[ListenerKind] = &[ListenerKind::ContainerPointerDown];

/// The host side of the engine: where listeners live and where the list
/// container is attached.
///
/// Methods take `&self`; hosts are single-threaded and use interior
/// mutability to record registrations.
pub trait Surface {
    /// Starts delivering events of `kind` to the engine.
    fn add_listener(&self, kind: ListenerKind);

    /// Stops delivering events of `kind` to the engine.
    fn remove_listener(&self, kind: ListenerKind);

    /// Removes the list container from its visual parent.
    fn detach_container(&self);

    /// Current viewport height in client pixels.
    ///
    /// Queried on every pointer-move while dragging, never cached.
    fn viewport_height(&self) -> f64;
}

/// A set of listener registrations released on drop.
pub struct ListenerLease {
    surface: Rc<dyn Surface>,
    kinds: &'static [ListenerKind],
}

impl ListenerLease {
    /// Registers every kind in `kinds` with `surface`.
    pub(crate) fn acquire(surface: &Rc<dyn Surface>, kinds: &'static [ListenerKind]) -> Self {
        for &kind in kinds {
            surface.add_listener(kind);
        }
        tracing::trace!(?kinds, "listeners registered");
        Self {
            surface: Rc::clone(surface),
            kinds,
        }
    }

    #[must_use]
    pub const fn kinds(&self) -> &'static [ListenerKind] {
        self.kinds
    }
}

impl Drop for ListenerLease {
    fn drop(&mut self) {
        for &kind in self.kinds.iter().rev() {
            self.surface.remove_listener(kind);
        }
        tracing::trace!(kinds = ?self.kinds, "listeners released");
    }
}

impl fmt::Debug for ListenerLease {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ListenerLease")
            .field("kinds", &self.kinds)
            .finish_non_exhaustive()
    }
}
