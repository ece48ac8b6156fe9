//! A concrete list row used by the reference host.
//!
//! Each row has a natural height and a rectangle assigned by the host's
//! layout. Its grab handle is a strip on the left edge, its delete handle a
//! strip on the right edge.

use crate::domain::{HitRegion, Item, Point, Rect};
use std::cell::Cell;

/// Width of the grab strip on the row's left edge.
pub const GRAB_HANDLE_WIDTH: f64 = 24.0;

/// Width of the delete strip on the row's right edge.
pub const DELETE_HANDLE_WIDTH: f64 = 24.0;

/// A labelled row with grab and delete handles.
#[derive(Debug)]
pub struct ListItem {
    id: String,
    label: String,
    height: f64,
    rect: Cell<Rect>,
}

impl ListItem {
    /// Creates a row. It has no on-screen rectangle until a layout places it.
    #[must_use]
    pub fn new(id: impl Into<String>, label: impl Into<String>, height: f64) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            height,
            rect: Cell::new(Rect::default()),
        }
    }

    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Height in normal flow.
    #[must_use]
    pub const fn natural_height(&self) -> f64 {
        self.height
    }

    /// Assigns the row's on-screen rectangle. Called by the layout.
    pub fn place(&self, rect: Rect) {
        self.rect.set(rect);
    }
}

impl Item for ListItem {
    fn bounding_rect(&self) -> Rect {
        self.rect.get()
    }

    fn hit_test(&self, point: Point) -> HitRegion {
        let rect = self.rect.get();
        if !rect.contains(point) {
            HitRegion::None
        } else if point.x < rect.left() + GRAB_HANDLE_WIDTH {
            HitRegion::Grab
        } else if point.x >= rect.right() - DELETE_HANDLE_WIDTH {
            HitRegion::Delete
        } else {
            HitRegion::None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn placed() -> ListItem {
        let item = ListItem::new("a", "Alpha", 40.0);
        item.place(Rect::new(10.0, 100.0, 300.0, 40.0));
        item
    }

    #[test]
    fn handles_sit_on_the_edges() {
        let item = placed();
        assert_eq!(item.hit_test(Point::new(12.0, 110.0)), HitRegion::Grab);
        assert_eq!(item.hit_test(Point::new(300.0, 110.0)), HitRegion::Delete);
        assert_eq!(item.hit_test(Point::new(150.0, 110.0)), HitRegion::None);
    }

    #[test]
    fn outside_the_row_is_nothing() {
        let item = placed();
        assert_eq!(item.hit_test(Point::new(12.0, 90.0)), HitRegion::None);
    }

    #[test]
    fn unplaced_row_has_empty_rect() {
        let item = ListItem::new("b", "Beta", 40.0);
        assert_eq!(item.bounding_rect(), Rect::default());
        assert!((item.natural_height() - 40.0).abs() < f64::EPSILON);
    }
}
