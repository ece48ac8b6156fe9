//! Drag state machine phases.
//!
//! ```text
//!            grab pointer-down               pointer-up (commit)
//!   Idle ───────────────────────▶ Dragging ───────────────────────▶ Idle
//!                                   │  ▲       pointer-cancel (opt-in)
//!                                   └──┘ pointer-move
//! ```
//!
//! At most one drag is active per engine; grab pointer-downs while
//! `Dragging` are ignored.

use serde::Serialize;

/// Current phase of an engine's drag state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DragMode {
    /// No drag in progress. Pointer-downs on grab/delete handles are live.
    #[default]
    Idle,
    /// One item is detached and follows the pointer; a placeholder holds its
    /// prospective slot.
    Dragging,
}

impl DragMode {
    #[must_use]
    pub const fn is_dragging(self) -> bool {
        matches!(self, Self::Dragging)
    }
}
