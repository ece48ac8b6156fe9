//! Filesystem locations.

use std::path::PathBuf;

const APP_DIR: &str = "sortable-list";
const TRACE_FILE: &str = "trace.jsonl";

/// Per-user data directory, e.g. `~/.local/share/sortable-list` on Linux.
///
/// Falls back to the working directory when the platform has none.
#[must_use]
pub fn data_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR)
}

/// Where span export goes when no `trace_file` is configured.
#[must_use]
pub fn default_trace_path() -> PathBuf {
    data_dir().join(TRACE_FILE)
}

/// Expands a leading `~` to the home directory.
///
/// Paths without one, and every path on a platform without a home
/// directory, are returned unchanged.
///
/// # Examples
///
/// ```
/// use sortable_list::infrastructure::expand_tilde;
///
/// assert_eq!(expand_tilde("/absolute/path"), std::path::PathBuf::from("/absolute/path"));
/// assert_eq!(expand_tilde("relative"), std::path::PathBuf::from("relative"));
/// ```
#[must_use]
pub fn expand_tilde(path: &str) -> PathBuf {
    let home = dirs::home_dir();
    match (path, home) {
        ("~", Some(home)) => home,
        (_, Some(home)) if path.starts_with("~/") => home.join(&path[2..]),
        _ => PathBuf::from(path),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_trace_path_is_under_data_dir() {
        let path = default_trace_path();
        assert!(path.starts_with(data_dir()));
        assert!(path.ends_with("sortable-list/trace.jsonl"));
    }

    #[test]
    fn tilde_expands_to_home() {
        if let Some(home) = dirs::home_dir() {
            assert_eq!(expand_tilde("~"), home);
            assert_eq!(expand_tilde("~/traces/a.jsonl"), home.join("traces/a.jsonl"));
        }
        assert_eq!(expand_tilde("~user/x"), PathBuf::from("~user/x"));
    }
}
