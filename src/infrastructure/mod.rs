//! Platform paths: the data directory and `~` expansion.

pub mod paths;

pub use paths::{data_dir, default_trace_path, expand_tilde};
