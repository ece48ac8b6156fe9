//! Replay scripts: a list of items and a sequence of host events, in TOML.
//!
//! ```toml
//! viewport_height = 600.0
//! list_width = 320.0
//!
//! [[items]]
//! id = "a"
//! label = "Alpha"
//! height = 50.0
//!
//! [[events]]
//! kind = "down"
//! x = 5.0
//! y = 10.0
//!
//! [[events]]
//! kind = "move"
//! x = 5.0
//! y = 120.0
//!
//! [[events]]
//! kind = "up"
//! x = 5.0
//! y = 120.0
//! ```

use crate::domain::{Result, SortableError};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

const DEFAULT_VIEWPORT_HEIGHT: f64 = 600.0;
const DEFAULT_LIST_WIDTH: f64 = 320.0;
const DEFAULT_ITEM_HEIGHT: f64 = 40.0;

const fn default_viewport_height() -> f64 {
    DEFAULT_VIEWPORT_HEIGHT
}

const fn default_list_width() -> f64 {
    DEFAULT_LIST_WIDTH
}

const fn default_item_height() -> f64 {
    DEFAULT_ITEM_HEIGHT
}

/// A parsed replay script.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Script {
    #[serde(default = "default_viewport_height")]
    pub viewport_height: f64,
    #[serde(default = "default_list_width")]
    pub list_width: f64,
    #[serde(default)]
    pub items: Vec<ScriptItem>,
    #[serde(default)]
    pub events: Vec<ScriptEvent>,
}

/// An item the list starts with, or one added by an `add` event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScriptItem {
    pub id: String,
    /// Display label; the id when omitted.
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default = "default_item_height")]
    pub height: f64,
}

impl ScriptItem {
    #[must_use]
    pub fn label(&self) -> &str {
        self.label.as_deref().unwrap_or(&self.id)
    }
}

/// One scripted host event. Coordinates are client pixels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ScriptEvent {
    Down { x: f64, y: f64 },
    Move { x: f64, y: f64 },
    Up { x: f64, y: f64 },
    /// Lost pointer capture.
    Cancel,
    Add(ScriptItem),
    Remove { id: String },
    Resize { height: f64 },
    Destroy,
}

impl Script {
    /// Parses and validates a script.
    ///
    /// # Errors
    ///
    /// [`SortableError::Script`] for TOML errors, duplicate initial item ids,
    /// non-positive item heights or a non-positive viewport.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let script: Self =
            toml::from_str(source).map_err(|e| SortableError::Script(e.to_string()))?;
        script.validate()?;
        Ok(script)
    }

    /// Reads and parses a script file.
    ///
    /// # Errors
    ///
    /// [`SortableError::Io`] when the file cannot be read, otherwise as
    /// [`from_toml_str`](Self::from_toml_str).
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let source = fs::read_to_string(path)?;
        Self::from_toml_str(&source)
    }

    fn validate(&self) -> Result<()> {
        if self.viewport_height <= 0.0 {
            return Err(SortableError::Script(format!(
                "viewport_height must be positive, got {}",
                self.viewport_height
            )));
        }

        let mut seen = HashSet::new();
        for item in &self.items {
            if !seen.insert(item.id.as_str()) {
                return Err(SortableError::Script(format!("duplicate item id '{}'", item.id)));
            }
        }

        let added = self.events.iter().filter_map(|event| match event {
            ScriptEvent::Add(item) => Some(item),
            _ => None,
        });
        for item in self.items.iter().chain(added) {
            if item.height <= 0.0 {
                return Err(SortableError::Script(format!(
                    "item '{}' must have a positive height",
                    item.id
                )));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_items_and_tagged_events() {
        let script = Script::from_toml_str(
            r#"
            [[items]]
            id = "a"
            label = "Alpha"

            [[items]]
            id = "b"
            height = 60.0

            [[events]]
            kind = "down"
            x = 1.0
            y = 2.0

            [[events]]
            kind = "remove"
            id = "b"

            [[events]]
            kind = "cancel"
            "#,
        )
        .unwrap();

        assert!((script.viewport_height - DEFAULT_VIEWPORT_HEIGHT).abs() < f64::EPSILON);
        assert_eq!(script.items[0].label(), "Alpha");
        assert_eq!(script.items[1].label(), "b");
        assert!((script.items[0].height - DEFAULT_ITEM_HEIGHT).abs() < f64::EPSILON);
        assert_eq!(
            script.events,
            vec![
                ScriptEvent::Down { x: 1.0, y: 2.0 },
                ScriptEvent::Remove { id: "b".to_string() },
                ScriptEvent::Cancel,
            ]
        );
    }

    #[test]
    fn rejects_duplicate_ids() {
        let err = Script::from_toml_str(
            r#"
            [[items]]
            id = "a"
            [[items]]
            id = "a"
            "#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("duplicate item id 'a'"));
    }

    #[test]
    fn rejects_unknown_event_kind() {
        let err = Script::from_toml_str(
            r#"
            [[events]]
            kind = "teleport"
            "#,
        )
        .unwrap_err();
        assert!(matches!(err, SortableError::Script(_)));
    }

    #[test]
    fn rejects_zero_height_added_item() {
        let err = Script::from_toml_str(
            r#"
            [[events]]
            kind = "add"
            id = "z"
            height = 0.0
            "#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("'z'"));
    }
}
