//! The reorder engine's state: the ordered sequence and the drag session.
//!
//! [`SortableList`] is the single owner of both. The event handler drives
//! its transitions through the crate-private `begin_drag` / `drag_to` /
//! `commit_drag` / `cancel_drag` methods; callers mutate the sequence only
//! through [`add_item`](SortableList::add_item),
//! [`remove_item`](SortableList::remove_item) and committed drags.
//!
//! # Example
//!
//! ```rust
//! use std::rc::Rc;
//! use sortable_list::app::{NullSurface, SortableList};
//! use sortable_list::ui::ListItem;
//!
//! let a = Rc::new(ListItem::new("a", "Alpha", 40.0));
//! let b = Rc::new(ListItem::new("b", "Beta", 40.0));
//!
//! let mut list = SortableList::new(vec![a.clone(), b.clone()], Rc::new(NullSurface));
//! list.remove_item(&a);
//! assert_eq!(list.items().len(), 1);
//! assert!(Rc::ptr_eq(&list.items()[0], &b));
//! ```

use super::autoscroll;
use super::modes::DragMode;
use super::placement;
use super::session::{DragOverrides, DragSession};
use super::surface::{ListenerKind, ListenerLease, Surface, CONTAINER_LISTENERS};
use crate::domain::{Item, Point};
use crate::ui::viewmodel::RenderSlot;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::rc::Rc;

/// Tunables of the reorder engine.
///
/// Deserialized from the `[engine]` table of the crate configuration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Distance in pixels from a viewport edge that triggers autoscroll.
    pub autoscroll_margin: f64,

    /// Pixels scrolled per qualifying pointer-move.
    pub autoscroll_step: f64,

    /// Whether [`Event::PointerCancel`](super::Event::PointerCancel) aborts an
    /// active drag. Off by default: a drag then only ends on pointer-up.
    pub cancel_on_lost_capture: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            autoscroll_margin: autoscroll::DEFAULT_MARGIN,
            autoscroll_step: autoscroll::DEFAULT_STEP,
            cancel_on_lost_capture: false,
        }
    }
}

/// One position in the rendered sequence.
#[derive(Debug)]
pub(crate) enum Slot<I> {
    Item(Rc<I>),
    /// Same-size marker for the dragged item's prospective position.
    Placeholder,
}

impl<I> Slot<I> {
    pub(crate) const fn item(&self) -> Option<&Rc<I>> {
        match self {
            Self::Item(item) => Some(item),
            Self::Placeholder => None,
        }
    }
}

/// Viewport height reported by [`NullSurface`].
pub const NULL_SURFACE_VIEWPORT_HEIGHT: f64 = 800.0;

/// A surface that ignores every call, for hosts with nothing to register.
///
/// Reports a fixed [`NULL_SURFACE_VIEWPORT_HEIGHT`] viewport, so both
/// autoscroll edges work out of the box.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSurface;

impl Surface for NullSurface {
    fn add_listener(&self, _kind: ListenerKind) {}

    fn remove_listener(&self, _kind: ListenerKind) {}

    fn detach_container(&self) {}

    fn viewport_height(&self) -> f64 {
        NULL_SURFACE_VIEWPORT_HEIGHT
    }
}

/// A drag-and-drop reorderable list of caller-owned items.
pub struct SortableList<I> {
    slots: Vec<Slot<I>>,
    session: Option<DragSession<I>>,
    surface: Rc<dyn Surface>,
    container_listener: Option<ListenerLease>,
    config: EngineConfig,
    destroyed: bool,
}

impl<I: Item> SortableList<I> {
    /// Creates an engine over `items` with the default configuration.
    ///
    /// Registers the container pointer-down listener with `surface`. An
    /// empty `items` is valid.
    #[must_use]
    pub fn new(items: Vec<Rc<I>>, surface: Rc<dyn Surface>) -> Self {
        Self::with_config(items, surface, EngineConfig::default())
    }

    #[must_use]
    pub fn with_config(items: Vec<Rc<I>>, surface: Rc<dyn Surface>, config: EngineConfig) -> Self {
        let container_listener = ListenerLease::acquire(&surface, CONTAINER_LISTENERS);
        let mut list = Self {
            slots: Vec::with_capacity(items.len()),
            session: None,
            surface,
            container_listener: Some(container_listener),
            config,
            destroyed: false,
        };
        for item in items {
            list.add_item(item);
        }
        tracing::debug!(items = list.slots.len(), "sortable list created");
        list
    }

    /// Appends `item` to the end of the sequence.
    ///
    /// An item already in the list is moved to the end rather than
    /// duplicated. Re-adding the item being dragged is ignored.
    pub fn add_item(&mut self, item: Rc<I>) {
        if self.session.as_ref().is_some_and(|s| s.holds(&item)) {
            tracing::warn!("ignoring add of the item being dragged");
            return;
        }
        if let Some(index) = self.position_of(&item) {
            tracing::debug!(from = index, "re-added item moves to the end");
            self.remove_at(index);
        }
        self.slots.push(Slot::Item(item));
    }

    /// Removes `item` immediately.
    ///
    /// Returns `false` when the item is not in the list, or when it is the
    /// item being dragged: removing a dragged item is a caller error and is
    /// refused.
    pub fn remove_item(&mut self, item: &Rc<I>) -> bool {
        if self.session.as_ref().is_some_and(|s| s.holds(item)) {
            tracing::warn!("refusing to remove the item being dragged");
            return false;
        }
        match self.position_of(item) {
            Some(index) => {
                self.remove_at(index);
                true
            }
            None => false,
        }
    }

    /// The current order, as rendered.
    ///
    /// During a drag the dragged item floats above its siblings and is
    /// reported last; the placeholder is never reported.
    #[must_use]
    pub fn items(&self) -> Vec<Rc<I>> {
        self.slots
            .iter()
            .filter_map(Slot::item)
            .chain(self.session.as_ref().map(|s| &s.item))
            .cloned()
            .collect()
    }

    /// Topmost item whose rectangle contains `point`, with its slot index.
    pub(crate) fn item_at(&self, point: Point) -> Option<(usize, Rc<I>)> {
        self.slots
            .iter()
            .enumerate()
            .rev()
            .find_map(|(index, slot)| {
                slot.item()
                    .filter(|item| item.bounding_rect().contains(point))
                    .map(|item| (index, Rc::clone(item)))
            })
    }

    /// Starts dragging the item at `index`, grabbed at `pointer`.
    pub(crate) fn begin_drag(&mut self, index: usize, pointer: Point) -> bool {
        if self.session.is_some() {
            return false;
        }
        let Some(Slot::Item(item)) = self.slots.get(index) else {
            return false;
        };
        let rect = item.bounding_rect();
        let item = Rc::clone(item);
        self.slots[index] = Slot::Placeholder;
        self.session = Some(DragSession::begin(item, index, pointer, rect, &self.surface));
        true
    }

    /// Follows the pointer: moves the floating item and re-places the
    /// placeholder. Returns whether the placeholder moved.
    pub(crate) fn drag_to(&mut self, pointer: Point) -> bool {
        let Some(session) = self.session.as_mut() else {
            return false;
        };
        session.track(pointer);

        let Some(target) = placement::target_slot(&self.slots, pointer.y) else {
            return false;
        };
        match placement::move_placeholder(&mut self.slots, session.placeholder_index, target) {
            Some(index) => {
                tracing::trace!(from = session.placeholder_index, to = index, "placeholder moved");
                session.placeholder_index = index;
                true
            }
            None => false,
        }
    }

    /// Autoscroll for a pointer-move at client `y`, if any.
    ///
    /// The viewport height is read from the surface on each call.
    pub(crate) fn autoscroll_for(&self, y: f64) -> Option<f64> {
        autoscroll::scroll_delta(
            y,
            self.surface.viewport_height(),
            self.config.autoscroll_margin,
            self.config.autoscroll_step,
        )
    }

    /// Puts the dragged item into the placeholder's slot and ends the
    /// session. Returns `(start_index, final_index)`.
    pub(crate) fn commit_drag(&mut self) -> Option<(usize, usize)> {
        let session = self.session.take()?;
        let (from, to) = (session.start_index, session.placeholder_index);
        self.slots[to] = Slot::Item(session.finish());
        Some((from, to))
    }

    /// Drops the placeholder and returns the dragged item to its start
    /// index. Returns that index.
    pub(crate) fn cancel_drag(&mut self) -> Option<usize> {
        let session = self.session.take()?;
        self.slots.remove(session.placeholder_index);
        let index = session.start_index.min(self.slots.len());
        self.slots.insert(index, Slot::Item(session.finish()));
        Some(index)
    }

    fn position_of(&self, item: &Rc<I>) -> Option<usize> {
        self.slots
            .iter()
            .position(|slot| slot.item().is_some_and(|candidate| Rc::ptr_eq(candidate, item)))
    }

    pub(crate) fn remove_at(&mut self, index: usize) {
        self.slots.remove(index);
        if let Some(session) = self.session.as_mut() {
            if index < session.placeholder_index {
                session.placeholder_index -= 1;
            }
            if index < session.start_index {
                session.start_index -= 1;
            }
        }
    }
}

impl<I> SortableList<I> {
    /// Releases every listener and detaches the container from the host.
    ///
    /// Ends a drag left in progress without committing it. Safe to call more
    /// than once; events delivered afterwards are ignored.
    pub fn destroy(&mut self) {
        if self.destroyed {
            return;
        }
        if self.session.take().is_some() {
            tracing::debug!("destroyed with a drag in progress");
        }
        self.container_listener = None;
        self.surface.detach_container();
        self.destroyed = true;
        tracing::debug!("sortable list destroyed");
    }

    #[must_use]
    pub const fn is_destroyed(&self) -> bool {
        self.destroyed
    }

    #[must_use]
    pub const fn mode(&self) -> DragMode {
        if self.session.is_some() {
            DragMode::Dragging
        } else {
            DragMode::Idle
        }
    }

    #[must_use]
    pub fn is_dragging(&self, item: &Rc<I>) -> bool {
        self.session.as_ref().is_some_and(|s| s.holds(item))
    }

    /// Size/position overrides applied to `item`; only the dragged item has
    /// any.
    #[must_use]
    pub fn overrides_for(&self, item: &Rc<I>) -> Option<DragOverrides> {
        self.session
            .as_ref()
            .filter(|s| s.holds(item))
            .map(|s| s.overrides)
    }

    /// Slot index of the placeholder while dragging.
    #[must_use]
    pub fn placeholder_index(&self) -> Option<usize> {
        self.session.as_ref().map(|s| s.placeholder_index)
    }

    /// The render order: slots top to bottom, then the floating item.
    #[must_use]
    pub fn render_order(&self) -> Vec<RenderSlot<'_, I>> {
        let mut rendered: Vec<RenderSlot<'_, I>> = self
            .slots
            .iter()
            .map(|slot| match (slot, self.session.as_ref()) {
                (Slot::Item(item), _) => RenderSlot::Item(item),
                (Slot::Placeholder, Some(session)) => RenderSlot::Placeholder {
                    size: session.overrides.size(),
                },
                (Slot::Placeholder, None) => RenderSlot::Placeholder {
                    size: crate::domain::Size::default(),
                },
            })
            .collect();

        if let Some(session) = self.session.as_ref() {
            rendered.push(RenderSlot::Floating {
                item: &session.item,
                overrides: session.overrides,
            });
        }
        rendered
    }

    /// Number of items, including one being dragged.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.iter().filter(|slot| slot.item().is_some()).count()
            + usize::from(self.session.is_some())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[must_use]
    pub const fn config(&self) -> &EngineConfig {
        &self.config
    }
}

impl<I> fmt::Debug for SortableList<I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SortableList")
            .field("slots", &self.slots.len())
            .field("mode", &self.mode())
            .field("config", &self.config)
            .field("destroyed", &self.destroyed)
            .finish_non_exhaustive()
    }
}
