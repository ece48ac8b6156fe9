//! Vertical stack layout: the reference host's stand-in for browser reflow.
//!
//! Rows in flow are stacked top to bottom from the layout origin, shifted up
//! by the current scroll offset. The placeholder takes up its frozen height.
//! The floating row is placed at its override rectangle, which is already in
//! client coordinates and so ignores scrolling.

use super::item::ListItem;
use super::viewmodel::RenderSlot;
use crate::app::SortableList;
use crate::domain::{Point, Rect};
use std::cell::Cell;

/// Places [`ListItem`]s for a [`SortableList`].
#[derive(Debug)]
pub struct StackLayout {
    origin: Point,
    width: f64,
    scroll_y: Cell<f64>,
}

impl StackLayout {
    /// A layout `width` pixels wide anchored at the viewport's top-left.
    #[must_use]
    pub const fn new(width: f64) -> Self {
        Self::at(Point::new(0.0, 0.0), width)
    }

    #[must_use]
    pub const fn at(origin: Point, width: f64) -> Self {
        Self {
            origin,
            width,
            scroll_y: Cell::new(0.0),
        }
    }

    #[must_use]
    pub fn scroll_y(&self) -> f64 {
        self.scroll_y.get()
    }

    /// Scrolls by `dy`, clamped to `[0, content_height - viewport_height]`.
    /// Returns the scroll distance actually applied.
    pub fn scroll_by(&self, dy: f64, content_height: f64, viewport_height: f64) -> f64 {
        let max = (self.origin.y + content_height - viewport_height).max(0.0);
        let before = self.scroll_y.get();
        let after = (before + dy).clamp(0.0, max);
        self.scroll_y.set(after);
        after - before
    }

    /// Height of everything in flow (rows plus placeholder).
    #[must_use]
    pub fn content_height(&self, list: &SortableList<ListItem>) -> f64 {
        list.render_order()
            .iter()
            .map(|slot| match slot {
                RenderSlot::Item(item) => item.natural_height(),
                RenderSlot::Placeholder { size } => size.height,
                RenderSlot::Floating { .. } => 0.0,
            })
            .sum()
    }

    /// Assigns every row of `list` its current rectangle.
    pub fn reflow(&self, list: &SortableList<ListItem>) {
        let mut y = self.origin.y - self.scroll_y.get();
        for slot in list.render_order() {
            match slot {
                RenderSlot::Item(item) => {
                    let height = item.natural_height();
                    item.place(Rect::new(self.origin.x, y, self.width, height));
                    y += height;
                }
                RenderSlot::Placeholder { size } => y += size.height,
                RenderSlot::Floating { item, overrides } => item.place(overrides.rect()),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::NullSurface;
    use crate::domain::Item;
    use std::rc::Rc;

    fn three_rows() -> (Vec<Rc<ListItem>>, SortableList<ListItem>) {
        let rows: Vec<_> = ["a", "b", "c"]
            .iter()
            .map(|id| Rc::new(ListItem::new(*id, *id, 50.0)))
            .collect();
        let list = SortableList::new(rows.clone(), Rc::new(NullSurface));
        (rows, list)
    }

    #[test]
    fn stacks_rows_from_origin() {
        let (rows, list) = three_rows();
        let layout = StackLayout::at(Point::new(10.0, 5.0), 200.0);
        layout.reflow(&list);

        assert_eq!(rows[0].bounding_rect(), Rect::new(10.0, 5.0, 200.0, 50.0));
        assert_eq!(rows[2].bounding_rect(), Rect::new(10.0, 105.0, 200.0, 50.0));
        assert!((layout.content_height(&list) - 150.0).abs() < f64::EPSILON);
    }

    #[test]
    fn scrolling_shifts_rows_up_and_clamps() {
        let (rows, list) = three_rows();
        let layout = StackLayout::new(200.0);

        assert!((layout.scroll_by(-10.0, 150.0, 100.0)).abs() < f64::EPSILON);
        assert!((layout.scroll_by(80.0, 150.0, 100.0) - 50.0).abs() < f64::EPSILON);
        layout.reflow(&list);

        assert!((rows[1].bounding_rect().y - 0.0).abs() < f64::EPSILON);
    }
}
