//! Domain layer: geometry, the item capability trait and error types.
//!
//! Nothing in here knows about drag sessions, hosts or rendering; the engine
//! in [`crate::app`] is built on top of these types.
//!
//! - [`error`]: Error types and result aliases
//! - [`geometry`]: `Point`, `Size`, `Rect` in client coordinates
//! - [`item`]: The [`Item`] capability trait and [`HitRegion`]

pub mod error;
pub mod geometry;
pub mod item;

pub use error::{Result, SortableError};
pub use geometry::{Point, Rect, Size};
pub use item::{HitRegion, Item};
