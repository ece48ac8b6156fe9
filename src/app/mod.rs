//! The reorder engine: ordered sequence, drag state machine, placement and
//! autoscroll.
//!
//! # Architecture
//!
//! ```text
//! Host pointer events → Event → handle_event → SortableList mutations → Actions → Host
//!                                   ↑                                      │
//!                                   └──── Surface listener registrations ◀─┘
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effects and change reports returned to the host
//! - [`autoscroll`]: Edge autoscroll rule
//! - [`handler`]: Event dispatch and state transitions
//! - [`modes`]: `Idle` / `Dragging` phases
//! - `placement`: Placeholder slot algorithm
//! - [`session`]: Drag session and `DragOverrides`
//! - [`state`]: [`SortableList`] and [`EngineConfig`]
//! - [`surface`]: Host listener registration and RAII leases

pub mod actions;
pub mod autoscroll;
pub mod handler;
pub mod modes;
mod placement;
pub mod session;
pub mod state;
pub mod surface;

pub use actions::Action;
pub use handler::{handle_event, Event};
pub use modes::DragMode;
pub use session::DragOverrides;
pub use state::{EngineConfig, NullSurface, SortableList, NULL_SURFACE_VIEWPORT_HEIGHT};
pub use surface::{ListenerKind, ListenerLease, Surface};
