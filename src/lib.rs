//! Sortable list: a drag-and-drop list reordering engine.
//!
//! The engine owns the order of a sequence of caller-provided items and
//! reorders it in response to pointer events: grab an item by its handle,
//! drag it over its siblings while a same-size placeholder marks where it
//! will land, release to commit. Pressing an item's delete handle removes it
//! immediately. Dragging near a viewport edge asks the host to scroll.

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  CLI (main.rs): replay a scripted pointer session   │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Engine (app/)                                      │  ← State machine
//! │  - Event handling: Event → Vec<Action>              │
//! │  - Drag session, placeholder placement, autoscroll  │
//! │  - Listener leases on the host Surface              │
//! └─────────────────────────────────────────────────────┘
//!         │                                     │
//! ┌───────────────────────┐         ┌───────────────────────┐
//! │ Reference host (ui/)  │         │ Replay (replay/)      │
//! │ - ListItem, layout    │         │ - TOML scripts        │
//! │ - Text rendering      │         │ - Recording surface   │
//! │ - Theming             │         │ - Step reports        │
//! └───────────────────────┘         └───────────────────────┘
//!         │                                     │
//! ┌─────────────────────────────────────────────────────┐
//! │  Domain (domain/) and platform paths                │
//! │  - Geometry, the Item trait, error types            │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Observability (observability/)                     │  ← Optional export
//! │  - stderr logs, JSON lines span file                │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`app`]: The reorder engine and its event/action model
//! - [`domain`]: Geometry, the [`Item`] capability trait, errors
//! - [`infrastructure`]: Data directory and `~` expansion
//! - [`observability`]: Tracing subscriber setup and span export
//! - [`replay`]: Scripted sessions against the reference host
//! - [`ui`]: Reference host: [`ListItem`], [`StackLayout`], text rendering
//!
//! # Configuration
//!
//! ```toml
//! theme = "catppuccin-latte"
//! trace_level = "debug"
//! trace_file = "~/traces/sortable.jsonl"
//!
//! [engine]
//! autoscroll_margin = 20.0
//! autoscroll_step = 10.0
//! cancel_on_lost_capture = true
//! ```
//!
//! # Example
//!
//! ```rust
//! use std::rc::Rc;
//! use sortable_list::{
//!     handle_event, Event, ListItem, NullSurface, Point, SortableList, StackLayout,
//! };
//!
//! let items = vec![
//!     Rc::new(ListItem::new("a", "Alpha", 40.0)),
//!     Rc::new(ListItem::new("b", "Beta", 40.0)),
//! ];
//! let mut list = SortableList::new(items, Rc::new(NullSurface));
//! let layout = StackLayout::new(240.0);
//! layout.reflow(&list);
//!
//! // The delete strip sits at the right edge of every row.
//! handle_event(&mut list, &Event::PointerDown(Point::new(230.0, 10.0)));
//! assert_eq!(list.items()[0].id(), "b");
//! ```

pub mod app;
pub mod domain;
pub mod infrastructure;
pub mod observability;
pub mod replay;
pub mod ui;

pub use app::{
    handle_event, Action, DragMode, EngineConfig, Event, NullSurface, SortableList, Surface,
};
pub use domain::{HitRegion, Item, Point, Rect, Result, Size, SortableError};
pub use ui::{ListItem, StackLayout, Theme};

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Crate configuration, usually read from a TOML file.
///
/// Every field is optional; a missing `[engine]` table means the default
/// engine tunables.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Engine tunables.
    pub engine: EngineConfig,

    /// Built-in theme name: `catppuccin-mocha` or `catppuccin-latte`.
    /// Ignored if `theme_file` is set.
    pub theme: Option<String>,

    /// Path to a TOML theme file. Takes precedence over `theme`.
    pub theme_file: Option<String>,

    /// Log filter directive, e.g. `"debug"` or `"sortable_list=trace"`.
    /// `RUST_LOG` wins when set. Default: `"info"`.
    pub trace_level: Option<String>,

    /// Where finished spans are written as JSON lines. `~` is expanded.
    pub trace_file: Option<String>,
}

impl Config {
    /// Parses a TOML document.
    ///
    /// # Errors
    ///
    /// [`SortableError::Config`] when the document is not valid TOML or a
    /// field has the wrong type.
    ///
    /// # Example
    ///
    /// ```rust
    /// use sortable_list::Config;
    ///
    /// let config = Config::from_toml_str("[engine]\ncancel_on_lost_capture = true\n")?;
    /// assert!(config.engine.cancel_on_lost_capture);
    /// assert!((config.engine.autoscroll_margin - 20.0).abs() < f64::EPSILON);
    /// # Ok::<(), sortable_list::SortableError>(())
    /// ```
    pub fn from_toml_str(source: &str) -> Result<Self> {
        toml::from_str(source).map_err(|e| SortableError::Config(e.to_string()))
    }

    /// Reads and parses a configuration file.
    ///
    /// # Errors
    ///
    /// [`SortableError::Io`] when the file cannot be read, otherwise as
    /// [`from_toml_str`](Self::from_toml_str).
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let source = fs::read_to_string(path)?;
        Self::from_toml_str(&source)
    }

    /// The configured trace file with `~` expanded.
    #[must_use]
    pub fn trace_path(&self) -> Option<PathBuf> {
        self.trace_file.as_deref().map(infrastructure::expand_tilde)
    }

    /// Resolves the theme: `theme_file`, then `theme`, then the default.
    ///
    /// # Errors
    ///
    /// [`SortableError::Io`] or [`SortableError::Theme`] for an unreadable
    /// theme file, [`SortableError::Theme`] for an unknown built-in name.
    pub fn load_theme(&self) -> Result<Theme> {
        if let Some(file) = &self.theme_file {
            return Theme::from_file(infrastructure::expand_tilde(file));
        }
        match &self.theme {
            Some(name) => Theme::from_name(name)
                .ok_or_else(|| SortableError::Theme(format!("unknown theme '{name}'"))),
            None => Ok(Theme::default()),
        }
    }
}
