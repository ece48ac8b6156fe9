//! Headless replay of scripted pointer sessions.
//!
//! A [`Script`] lists the initial items and a sequence of host events.
//! [`Runner`] plays the host for a [`SortableList`](crate::app::SortableList)
//! of [`ListItem`](crate::ui::ListItem)s and reports the order after every
//! step.

pub mod runner;
pub mod script;
pub mod surface;

pub use runner::{ReplayReport, Runner, StepRecord};
pub use script::{Script, ScriptEvent, ScriptItem};
pub use surface::RecordingSurface;
