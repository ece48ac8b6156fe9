//! Edge autoscroll while dragging.
//!
//! Evaluated once per pointer-move, so scroll speed is bounded by how often
//! the host delivers move events. There is no independent timer.

/// Default distance from a viewport edge that triggers scrolling.
pub const DEFAULT_MARGIN: f64 = 20.0;

/// Default scroll distance per qualifying move event.
pub const DEFAULT_STEP: f64 = 10.0;

/// Returns the vertical scroll to apply for a pointer at client `y`.
///
/// # Parameters
///
/// - `viewport_height`: the host's current viewport height
/// - `margin`: distance from either edge that triggers scrolling
/// - `step`: pixels to scroll per qualifying move
///
/// # Returns
///
/// `Some(-step)` near the top edge, `Some(step)` near the bottom edge,
/// `None` otherwise. The top edge wins when both apply.
#[must_use]
pub fn scroll_delta(y: f64, viewport_height: f64, margin: f64, step: f64) -> Option<f64> {
    if y < margin {
        Some(-step)
    } else if y > viewport_height - margin {
        Some(step)
    } else {
        None
    }
}
