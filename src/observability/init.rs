//! Subscriber setup.

use super::exporter::JsonLinesExporter;
use super::rotating_file::RotatingFile;
use crate::Config;
use opentelemetry::trace::TracerProvider as _;
use opentelemetry::KeyValue;
use opentelemetry_sdk::resource::Resource;
use opentelemetry_sdk::trace::TracerProvider;
use std::path::{Path, PathBuf};
use tracing_opentelemetry::OpenTelemetryLayer;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const SERVICE_NAME: &str = "sortable-list";
const DEFAULT_LEVEL: &str = "info";

/// Builds a tracer provider that exports every finished span to `path`.
#[must_use]
pub fn tracer_provider(path: PathBuf) -> TracerProvider {
    let resource = Resource::new(vec![
        KeyValue::new("service.name", SERVICE_NAME),
        KeyValue::new("service.version", env!("CARGO_PKG_VERSION")),
    ]);
    let exporter = JsonLinesExporter::new(SERVICE_NAME, RotatingFile::new(path));

    TracerProvider::builder()
        .with_config(opentelemetry_sdk::trace::Config::default().with_resource(resource))
        .with_simple_exporter(exporter)
        .build()
}

/// Installs the global subscriber.
///
/// Logs go to stderr. Spans are additionally exported to `trace_file` when
/// one is given. Only the first call in a process takes effect.
///
/// # Example
///
/// ```rust
/// use sortable_list::observability::init_tracing;
/// use sortable_list::Config;
///
/// let config = Config {
///     trace_level: Some("debug".to_string()),
///     ..Default::default()
/// };
/// init_tracing(&config, None);
/// tracing::debug!("tracing is now active");
/// ```
pub fn init_tracing(config: &Config, trace_file: Option<&Path>) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(config.trace_level.as_deref().unwrap_or(DEFAULT_LEVEL))
    });

    let otel_layer = trace_file.map(|path| {
        let provider = tracer_provider(path.to_path_buf());
        OpenTelemetryLayer::new(provider.tracer(SERVICE_NAME))
    });

    let subscriber = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .with(otel_layer);

    if subscriber.try_init().is_ok() {
        if let Some(path) = trace_file {
            tracing::debug!(path = %path.display(), "exporting spans");
        }
    }
}
