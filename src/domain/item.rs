//! The capability interface between the engine and caller-owned items.
//!
//! The engine never inspects item content. Everything it needs from an item
//! goes through [`Item`]: where the item currently sits on screen, and which
//! affordance (if any) lies under a given point.

use super::geometry::{Point, Rect};

/// Which affordance of an item a point falls on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitRegion {
    /// The drag handle. A pointer-down here starts a drag.
    Grab,
    /// The delete handle. A pointer-down here removes the item immediately.
    Delete,
    /// Anywhere else on the item. Not actionable.
    None,
}

/// An opaque, caller-supplied list entry.
///
/// Identity is the `Rc` allocation handed to the engine, so two items with
/// identical content are still distinct entries.
///
/// Implementations must report geometry consistent with the host's current
/// layout: the engine reads `bounding_rect` on every pointer event while
/// dragging.
///
/// # Example
///
/// ```
/// use sortable_list::domain::{HitRegion, Item, Point, Rect};
///
/// struct Row(Rect);
///
/// impl Item for Row {
///     fn bounding_rect(&self) -> Rect {
///         self.0
///     }
///
///     fn hit_test(&self, point: Point) -> HitRegion {
///         if point.x < self.0.x + 20.0 { HitRegion::Grab } else { HitRegion::None }
///     }
/// }
///
/// let row = Row(Rect::new(0.0, 0.0, 200.0, 40.0));
/// assert_eq!(row.hit_test(Point::new(5.0, 10.0)), HitRegion::Grab);
/// ```
pub trait Item {
    /// The item's current on-screen rectangle in client coordinates.
    fn bounding_rect(&self) -> Rect;

    /// Classifies `point`, which the engine only passes when it lies inside
    /// [`bounding_rect`](Item::bounding_rect).
    fn hit_test(&self, point: Point) -> HitRegion;
}
