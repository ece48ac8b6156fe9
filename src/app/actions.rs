//! Actions describing what an event did, for the host to act on.
//!
//! [`handle_event`](super::handle_event) returns a `Vec<Action>` for every
//! event. Some actions ask the host to do something it owns (suppress the
//! platform's default gesture, scroll the viewport); the rest report
//! structural changes so the host can re-render. They are return values of a
//! single call, not a subscription: callers that need the order read
//! [`SortableList::items`](super::SortableList::items).

use serde::Serialize;

/// Host side effects and change reports produced by one event.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Action {
    /// Suppress the platform's default drag/selection behavior for the
    /// pointer-down that produced this action.
    SuppressDefault,

    /// Scroll the viewport vertically by `dy` pixels (negative is up).
    ///
    /// Emitted at most once per pointer-move while dragging.
    ScrollBy {
        /// Scroll distance in client pixels.
        dy: f64,
    },

    /// A drag started on the item at `index`.
    DragStarted {
        /// Index of the grabbed item in the sequence.
        index: usize,
    },

    /// A drag was committed: the item that was at `from` is now at `to`.
    Committed {
        /// Index at drag start.
        from: usize,
        /// Index after commit.
        to: usize,
    },

    /// A drag was cancelled after lost pointer capture; the item went back
    /// to `index`.
    Cancelled {
        /// Index the item was restored to.
        index: usize,
    },

    /// The item at `index` was removed through its delete handle.
    Removed {
        /// Index the item occupied before removal.
        index: usize,
    },
}
