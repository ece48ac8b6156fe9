//! Error types for the sortable list crate.
//!
//! The reorder engine itself never fails: every engine operation works on
//! trusted, caller-provided structures and refuses precondition violations
//! instead of reporting them. [`SortableError`] covers the surrounding
//! layers: loading configuration and themes, parsing replay scripts and
//! resolving the item ids they reference.

use thiserror::Error;

/// The main error type for sortable list operations outside the engine core.
///
/// # Examples
///
/// ```
/// use sortable_list::SortableError;
///
/// fn validate_margin(margin: f64) -> Result<(), SortableError> {
///     if margin < 0.0 {
///         return Err(SortableError::Config("autoscroll margin must be >= 0".to_string()));
///     }
///     Ok(())
/// }
///
/// assert!(validate_margin(-1.0).is_err());
/// ```
#[derive(Debug, Error)]
pub enum SortableError {
    /// Filesystem or I/O operation failed.
    ///
    /// Wraps errors from standard library I/O operations such as reading a
    /// config file or opening the trace file.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration is invalid or could not be parsed.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Theme parsing failed.
    #[error("Theme error: {0}")]
    Theme(String),

    /// A replay script could not be parsed or is structurally invalid.
    ///
    /// The string names the offending field or the TOML parser's message.
    #[error("Script error: {0}")]
    Script(String),

    /// A replay event referenced an item id that the runner does not know.
    #[error("Unknown item: {0}")]
    UnknownItem(String),

    /// A replay report could not be encoded as JSON.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// A specialized `Result` type for sortable list operations.
pub type Result<T> = std::result::Result<T, SortableError>;
