//! Pointer event dispatch and drag state transitions.
//!
//! The host feeds every pointer event it receives through [`handle_event`],
//! in delivery order. Each call is synchronous: it mutates the list, then
//! returns whether the host should reflow/re-render together with the
//! [`Action`]s the event produced.
//!
//! # Event Types
//!
//! - **Container**: `PointerDown` (grab, delete or ignored)
//! - **Page**: `PointerMove`, `PointerUp`, `PointerCancel` (only meaningful
//!   while dragging)
//!
//! Viewport size is not an event: autoscroll asks the
//! [`Surface`](super::Surface) for the current height on every move.
//!
//! # Example
//!
//! ```rust
//! use std::rc::Rc;
//! use sortable_list::app::{handle_event, Action, Event, NullSurface, SortableList};
//! use sortable_list::domain::Point;
//! use sortable_list::ui::{ListItem, StackLayout};
//!
//! let items: Vec<_> = ["a", "b", "c"]
//!     .iter()
//!     .map(|id| Rc::new(ListItem::new(*id, id.to_uppercase(), 50.0)))
//!     .collect();
//! let mut list = SortableList::new(items.clone(), Rc::new(NullSurface));
//! let layout = StackLayout::new(300.0);
//! layout.reflow(&list);
//!
//! // Grab "a" by its handle, drop it into the upper half of "c".
//! let (_, actions) = handle_event(&mut list, &Event::PointerDown(Point::new(5.0, 10.0)));
//! assert_eq!(actions, vec![Action::SuppressDefault, Action::DragStarted { index: 0 }]);
//! layout.reflow(&list);
//! handle_event(&mut list, &Event::PointerMove(Point::new(5.0, 120.0)));
//! handle_event(&mut list, &Event::PointerUp(Point::new(5.0, 120.0)));
//!
//! let order: Vec<_> = list.items().iter().map(|item| item.id().to_string()).collect();
//! assert_eq!(order, ["b", "a", "c"]);
//! ```

use super::{Action, SortableList};
use crate::domain::{HitRegion, Item, Point};

/// Input delivered by the host.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Event {
    /// Pointer pressed inside the list container.
    PointerDown(Point),
    /// Pointer moved anywhere on the page.
    PointerMove(Point),
    /// Pointer released anywhere on the page.
    PointerUp(Point),
    /// The page lost pointer capture (blur, hidden tab, lost capture).
    ///
    /// Honored only when `EngineConfig::cancel_on_lost_capture` is set.
    PointerCancel,
}

/// Processes one event and returns `(needs_reflow, actions)`.
///
/// Events after [`SortableList::destroy`] are ignored. Page-level events are
/// ignored unless a drag is active, since their listeners are only
/// registered for the lifetime of a drag session.
pub fn handle_event<I: Item>(list: &mut SortableList<I>, event: &Event) -> (bool, Vec<Action>) {
    let _span = tracing::debug_span!("handle_event", event = ?event).entered();

    if list.is_destroyed() {
        tracing::trace!("list destroyed, event ignored");
        return (false, vec![]);
    }

    match *event {
        Event::PointerDown(point) => pointer_down(list, point),
        Event::PointerMove(point) => {
            if !list.mode().is_dragging() {
                return (false, vec![]);
            }

            let placeholder_moved = list.drag_to(point);
            if placeholder_moved {
                tracing::debug!(
                    placeholder = ?list.placeholder_index(),
                    "placeholder repositioned"
                );
            }

            let mut actions = vec![];
            if let Some(dy) = list.autoscroll_for(point.y) {
                tracing::trace!(dy, y = point.y, "pointer near viewport edge");
                actions.push(Action::ScrollBy { dy });
            }
            (true, actions)
        }
        Event::PointerUp(_) => list.commit_drag().map_or_else(
            || (false, vec![]),
            |(from, to)| {
                tracing::debug!(from, to, "drag committed");
                (true, vec![Action::Committed { from, to }])
            },
        ),
        Event::PointerCancel => {
            if !list.mode().is_dragging() {
                return (false, vec![]);
            }
            if !list.config().cancel_on_lost_capture {
                tracing::warn!("pointer capture lost mid-drag; drag stays active until pointer-up");
                return (false, vec![]);
            }
            list.cancel_drag().map_or_else(
                || (false, vec![]),
                |index| {
                    tracing::debug!(index, "drag cancelled");
                    (true, vec![Action::Cancelled { index }])
                },
            )
        }
    }
}

fn pointer_down<I: Item>(list: &mut SortableList<I>, point: Point) -> (bool, Vec<Action>) {
    if list.mode().is_dragging() {
        tracing::debug!("drag already active, pointer-down ignored");
        return (false, vec![]);
    }

    let Some((index, item)) = list.item_at(point) else {
        return (false, vec![]);
    };

    match item.hit_test(point) {
        HitRegion::Delete => {
            tracing::debug!(index, "delete handle pressed");
            list.remove_at(index);
            (true, vec![Action::SuppressDefault, Action::Removed { index }])
        }
        HitRegion::Grab => {
            if !list.begin_drag(index, point) {
                return (false, vec![]);
            }
            tracing::debug!(index, x = point.x, y = point.y, "drag started");
            (true, vec![Action::SuppressDefault, Action::DragStarted { index }])
        }
        HitRegion::None => (false, vec![]),
    }
}
