//! Placeholder placement for a vertical list.
//!
//! Runs on every pointer-move while dragging. Given the pointer's client `y`
//! it picks the slot the placeholder should occupy among the siblings still
//! in flow (the dragged item is detached and takes no part).

use super::state::Slot;
use crate::domain::Item;

/// Computes the slot the placeholder should move to, if any.
///
/// - above the first sibling item's top edge: slot `0`
/// - below the last sibling item's bottom edge: slot `slots.len()`
/// - inside a sibling item: its index when `y` is in the upper half,
///   index + 1 when in the lower half
///
/// Returns `None` when `y` falls in no sibling (for example exactly on a
/// shared edge, or over the placeholder itself) or when there are no sibling
/// items at all.
pub(crate) fn target_slot<I: Item>(slots: &[Slot<I>], y: f64) -> Option<usize> {
    let first = slots.iter().find_map(Slot::item)?;
    if y < first.bounding_rect().top() {
        return Some(0);
    }

    let last = slots.iter().rev().find_map(Slot::item)?;
    if y > last.bounding_rect().bottom() {
        return Some(slots.len());
    }

    slots
        .iter()
        .enumerate()
        .filter_map(|(index, slot)| slot.item().map(|item| (index, item.bounding_rect())))
        .find(|(_, rect)| rect.spans_y_strictly(y))
        .map(|(index, rect)| if y < rect.mid_y() { index } else { index + 1 })
}

/// Moves the placeholder from `current` so that it sits before whatever
/// occupies `target` (or at the end when `target == slots.len()`).
///
/// Returns the placeholder's new index, or `None` when it is already there:
/// both `target == current` and `target == current + 1` name the
/// placeholder's present position.
pub(crate) fn move_placeholder<I>(
    slots: &mut Vec<Slot<I>>,
    current: usize,
    target: usize,
) -> Option<usize> {
    if target == current || target == current + 1 {
        return None;
    }

    let placeholder = slots.remove(current);
    let destination = if target > current { target - 1 } else { target };
    slots.insert(destination, placeholder);
    Some(destination)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{HitRegion, Point, Rect};
    use std::rc::Rc;

    struct Fixed(Rect);

    impl Item for Fixed {
        fn bounding_rect(&self) -> Rect {
            self.0
        }

        fn hit_test(&self, _point: Point) -> HitRegion {
            HitRegion::None
        }
    }

    fn row(top: f64) -> Slot<Fixed> {
        Slot::Item(Rc::new(Fixed(Rect::new(0.0, top, 200.0, 50.0))))
    }

    /// Placeholder at 0..50 (the dragged item's old place), B at 50..100,
    /// C at 100..150.
    fn dragging_first_of_three() -> Vec<Slot<Fixed>> {
        vec![Slot::Placeholder, row(50.0), row(100.0)]
    }

    #[test]
    fn above_first_sibling_targets_start() {
        let slots = dragging_first_of_three();
        assert_eq!(target_slot(&slots, 10.0), Some(0));
    }

    #[test]
    fn below_last_sibling_targets_end() {
        let slots = dragging_first_of_three();
        assert_eq!(target_slot(&slots, 151.0), Some(3));
    }

    #[test]
    fn upper_half_targets_sibling_index() {
        let slots = dragging_first_of_three();
        assert_eq!(target_slot(&slots, 120.0), Some(2));
    }

    #[test]
    fn lower_half_targets_after_sibling() {
        let slots = dragging_first_of_three();
        assert_eq!(target_slot(&slots, 130.0), Some(3));
        assert_eq!(target_slot(&slots, 80.0), Some(2));
    }

    #[test]
    fn shared_edge_hits_nothing() {
        let slots = dragging_first_of_three();
        assert_eq!(target_slot(&slots, 100.0), None);
    }

    #[test]
    fn lone_placeholder_has_no_target() {
        let slots: Vec<Slot<Fixed>> = vec![Slot::Placeholder];
        assert_eq!(target_slot(&slots, 10.0), None);
    }

    #[test]
    fn move_forward_accounts_for_removed_slot() {
        let mut slots = dragging_first_of_three();
        assert_eq!(move_placeholder(&mut slots, 0, 2), Some(1));
        assert!(matches!(slots[1], Slot::Placeholder));
    }

    #[test]
    fn move_to_end_and_back_to_start() {
        let mut slots = dragging_first_of_three();
        assert_eq!(move_placeholder(&mut slots, 0, 3), Some(2));
        assert!(matches!(slots[2], Slot::Placeholder));
        assert_eq!(move_placeholder(&mut slots, 2, 0), Some(0));
        assert!(matches!(slots[0], Slot::Placeholder));
    }

    #[test]
    fn current_position_is_not_a_move() {
        let mut slots = dragging_first_of_three();
        assert_eq!(move_placeholder(&mut slots, 0, 0), None);
        assert_eq!(move_placeholder(&mut slots, 0, 1), None);
    }
}
