//! Render-order view model.
//!
//! [`SortableList::render_order`](crate::app::SortableList::render_order)
//! describes what a host should draw, top to bottom, without the host having
//! to know about drag sessions. Layout and text rendering both consume it.

use crate::app::DragOverrides;
use crate::domain::Size;
use std::rc::Rc;

/// One entry of the render order.
#[derive(Debug)]
pub enum RenderSlot<'a, I> {
    /// An item in normal flow.
    Item(&'a Rc<I>),
    /// The placeholder: empty, in flow, sized like the dragged item.
    Placeholder { size: Size },
    /// The dragged item, out of flow and drawn above everything else.
    Floating {
        item: &'a Rc<I>,
        overrides: DragOverrides,
    },
}

impl<I> Clone for RenderSlot<'_, I> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<I> Copy for RenderSlot<'_, I> {}
