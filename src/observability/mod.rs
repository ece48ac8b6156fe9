//! Tracing setup: console logging plus optional span export to a file.
//!
//! ```text
//! tracing macros ─┬─▶ fmt layer ─────────────────────────────▶ stderr
//!                 └─▶ tracing-opentelemetry ─▶ JsonLinesExporter ─▶ trace.jsonl
//! ```
//!
//! The filter comes from `RUST_LOG` when set, then `Config::trace_level`,
//! then `"info"`. Span export is only wired up when a trace file is
//! configured; each finished span becomes one JSON object per line, and the
//! file is rotated into numbered backups once it grows past a size limit.

mod exporter;
mod init;
mod rotating_file;

pub use exporter::JsonLinesExporter;
pub use init::{init_tracing, tracer_provider};
pub use rotating_file::RotatingFile;
