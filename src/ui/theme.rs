//! Color themes for the text renderer.
//!
//! Themes are TOML documents with a `name` and a `[colors]` table of hex
//! strings. Two are built in; any other can be loaded from a file.
//!
//! ```toml
//! name = "my-theme"
//!
//! [colors]
//! text = "#cdd6f4"
//! text_dim = "#6c7086"
//! handle = "#cba6f7"
//! delete = "#f38ba8"
//! placeholder = "#45475a"
//! dragging_fg = "#1e1e2e"
//! dragging_bg = "#cba6f7"
//! empty_state_fg = "#7f849c"
//! ```

use crate::domain::{Result, SortableError};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// A named palette.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Theme {
    pub name: String,
    pub colors: ThemeColors,
}

/// Hex colors for each rendered element.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ThemeColors {
    /// Row labels.
    pub text: String,
    /// Step headers between rendered frames.
    pub text_dim: String,
    /// Grab handle glyph.
    pub handle: String,
    /// Delete handle glyph.
    pub delete: String,
    /// Placeholder row.
    pub placeholder: String,
    /// Dragged row foreground.
    pub dragging_fg: String,
    /// Dragged row background.
    pub dragging_bg: String,
    /// "No items" message.
    pub empty_state_fg: String,
}

impl Theme {
    /// Loads a built-in theme: `catppuccin-mocha` or `catppuccin-latte`.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let toml_str = match name {
            "catppuccin-mocha" => include_str!("../../themes/catppuccin-mocha.toml"),
            "catppuccin-latte" => include_str!("../../themes/catppuccin-latte.toml"),
            _ => return None,
        };

        toml::from_str(toml_str).ok()
    }

    /// Loads a theme from a TOML file.
    ///
    /// # Errors
    ///
    /// [`SortableError::Io`] when the file cannot be read,
    /// [`SortableError::Theme`] when its contents do not parse.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        toml::from_str(&contents).map_err(|e| SortableError::Theme(e.to_string()))
    }

    fn hex_to_rgb(hex: &str) -> (u8, u8, u8) {
        let hex = hex.trim().trim_start_matches('#');
        if hex.len() != 6 || !hex.is_ascii() {
            return (255, 255, 255);
        }

        let channel =
            |range: std::ops::Range<usize>| u8::from_str_radix(&hex[range], 16).unwrap_or(255);
        (channel(0..2), channel(2..4), channel(4..6))
    }

    /// ANSI 24-bit foreground escape for `hex`; white when `hex` is malformed.
    #[must_use]
    pub fn fg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[38;2;{r};{g};{b}m")
    }

    /// ANSI 24-bit background escape for `hex`.
    #[must_use]
    pub fn bg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[48;2;{r};{g};{b}m")
    }

    /// ANSI bold escape, used for the floating row.
    #[must_use]
    pub const fn bold() -> &'static str {
        "\u{001b}[1m"
    }

    /// ANSI faint escape, used for step headers.
    #[must_use]
    pub const fn dim() -> &'static str {
        "\u{001b}[2m"
    }

    /// ANSI escape clearing every color and weight set before it.
    ///
    /// # Returns
    ///
    /// A static escape sequence; push it after each painted span.
    #[must_use]
    pub const fn reset() -> &'static str {
        "\u{001b}[0m"
    }
}

impl Default for Theme {
    /// Catppuccin Mocha.
    ///
    /// # Panics
    ///
    /// Panics if the bundled theme file fails to parse.
    fn default() -> Self {
        Self::from_name("catppuccin-mocha")
            .expect("Built-in catppuccin-mocha theme should always parse")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn built_in_themes_parse() {
        assert_eq!(Theme::default().name, "catppuccin-mocha");
        assert_eq!(
            Theme::from_name("catppuccin-latte").map(|t| t.name),
            Some("catppuccin-latte".to_string())
        );
        assert!(Theme::from_name("solarized").is_none());
    }

    #[test]
    fn hex_conversion() {
        assert_eq!(Theme::fg("#cdd6f4"), "\u{1b}[38;2;205;214;244m");
        assert_eq!(Theme::bg("010203"), "\u{1b}[48;2;1;2;3m");
        assert_eq!(Theme::fg("oops"), "\u{1b}[38;2;255;255;255m");
    }

    #[test]
    fn style_escapes_are_plain_sgr_codes() {
        assert_eq!(Theme::bold(), "\u{1b}[1m");
        assert_eq!(Theme::dim(), "\u{1b}[2m");
        assert_eq!(Theme::reset(), "\u{1b}[0m");
    }

    #[test]
    fn from_file_reports_parse_errors() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "name = \"broken\"").unwrap();

        let err = Theme::from_file(file.path()).unwrap_err();
        assert!(matches!(err, SortableError::Theme(_)));
    }

    #[test]
    fn from_file_loads_custom_theme() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(include_bytes!("../../themes/catppuccin-latte.toml")).unwrap();

        let theme = Theme::from_file(file.path()).unwrap();
        assert_eq!(theme.colors.delete, "#d20f39");
    }
}
