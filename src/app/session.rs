//! The drag session: everything that exists only while an item is dragged.

use super::surface::{ListenerLease, Surface, DRAG_LISTENERS};
use crate::domain::{Point, Rect, Size};
use std::rc::Rc;

/// Presentation overrides applied to the dragged item.
///
/// The item's size is frozen at grab time so it does not reflow while
/// detached, and its top-left corner follows the pointer. The value lives
/// inside the session and is gone once the drag resolves.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize)]
pub struct DragOverrides {
    /// Width frozen at grab time, so the floating item keeps its size.
    pub width: f64,
    /// Height frozen at grab time.
    pub height: f64,
    /// Pointer x minus the grab offset.
    pub left: f64,
    /// Pointer y minus the grab offset.
    pub top: f64,
}

impl DragOverrides {
    /// Frozen size of the floating item; also the placeholder's size.
    #[must_use]
    pub const fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Where the floating item is drawn, in client coordinates.
    #[must_use]
    pub const fn rect(&self) -> Rect {
        Rect::new(self.left, self.top, self.width, self.height)
    }
}

/// An active drag.
///
/// Owns the page-level move/up listener registrations through its lease;
/// dropping the session in any way releases them.
#[derive(Debug)]
pub(crate) struct DragSession<I> {
    pub(crate) item: Rc<I>,
    /// Index of the item in the sequence when the drag began.
    pub(crate) start_index: usize,
    /// Pointer position relative to the item's top-left corner at grab time.
    pub(crate) pointer_offset: Point,
    /// Slot currently occupied by the placeholder.
    pub(crate) placeholder_index: usize,
    pub(crate) overrides: DragOverrides,
    _listeners: ListenerLease,
}

impl<I> DragSession<I> {
    /// Starts a session for `item`, grabbed at `pointer` while occupying
    /// `rect`. The placeholder initially takes the item's own slot.
    pub(crate) fn begin(
        item: Rc<I>,
        start_index: usize,
        pointer: Point,
        rect: Rect,
        surface: &Rc<dyn Surface>,
    ) -> Self {
        let pointer_offset = pointer.offset_from(rect.origin());
        let mut session = Self {
            item,
            start_index,
            pointer_offset,
            placeholder_index: start_index,
            overrides: DragOverrides {
                width: rect.width,
                height: rect.height,
                left: rect.x,
                top: rect.y,
            },
            _listeners: ListenerLease::acquire(surface, DRAG_LISTENERS),
        };
        session.track(pointer);
        session
    }

    /// Moves the floating item so the grab point stays under the pointer.
    pub(crate) fn track(&mut self, pointer: Point) {
        self.overrides.left = pointer.x - self.pointer_offset.x;
        self.overrides.top = pointer.y - self.pointer_offset.y;
    }

    pub(crate) fn holds(&self, item: &Rc<I>) -> bool {
        Rc::ptr_eq(&self.item, item)
    }

    /// Ends the session, releasing its listeners, and hands the item back.
    pub(crate) fn finish(self) -> Rc<I> {
        let Self { item, .. } = self;
        item
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overrides_rect_uses_frozen_size_at_pointer_position() {
        let overrides = DragOverrides {
            width: 300.0,
            height: 50.0,
            left: 12.0,
            top: 65.0,
        };

        assert_eq!(overrides.size(), Size::new(300.0, 50.0));
        assert_eq!(overrides.rect(), Rect::new(12.0, 65.0, 300.0, 50.0));
    }
}
