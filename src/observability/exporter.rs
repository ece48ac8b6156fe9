//! A `SpanExporter` that writes one JSON object per finished span.
//!
//! Each line looks like:
//!
//! ```json
//! {"service":"sortable-list","trace_id":"…","span_id":"…","parent_span_id":null,
//!  "name":"handle_event","start_unix_nanos":1700000000000000000,"duration_micros":42,
//!  "fields":{"event":"PointerMove(..)"},"events":[{"name":"drag committed","offset_micros":12,"fields":{"from":0,"to":1}}]}
//! ```

use super::rotating_file::RotatingFile;
use futures_util::future::BoxFuture;
use opentelemetry::trace::{SpanId, TraceError};
use opentelemetry::{KeyValue, Value};
use opentelemetry_sdk::export::trace::{ExportResult, SpanData, SpanExporter};
use serde_json::{json, Map, Value as JsonValue};
use std::time::{Duration, SystemTime, UNIX_EPOCH};

#[derive(Debug)]
pub struct JsonLinesExporter {
    service: String,
    file: RotatingFile,
    shut_down: bool,
}

impl JsonLinesExporter {
    #[must_use]
    pub fn new(service: impl Into<String>, file: RotatingFile) -> Self {
        Self {
            service: service.into(),
            file,
            shut_down: false,
        }
    }

    fn record(&self, span: &SpanData) -> JsonValue {
        let parent = (span.parent_span_id != SpanId::INVALID)
            .then(|| format!("{:016x}", span.parent_span_id));
        let events: Vec<JsonValue> = span
            .events
            .iter()
            .map(|event| {
                json!({
                    "name": event.name,
                    "offset_micros": micros_between(span.start_time, event.timestamp),
                    "fields": fields(&event.attributes),
                })
            })
            .collect();

        json!({
            "service": self.service,
            "trace_id": format!("{:032x}", span.span_context.trace_id()),
            "span_id": format!("{:016x}", span.span_context.span_id()),
            "parent_span_id": parent,
            "name": span.name,
            "start_unix_nanos": span
                .start_time
                .duration_since(UNIX_EPOCH)
                .unwrap_or(Duration::ZERO)
                .as_nanos()
                .to_string(),
            "duration_micros": micros_between(span.start_time, span.end_time),
            "fields": fields(&span.attributes),
            "events": events,
        })
    }
}

impl SpanExporter for JsonLinesExporter {
    fn export(&mut self, batch: Vec<SpanData>) -> BoxFuture<'static, ExportResult> {
        if self.shut_down {
            return Box::pin(std::future::ready(Err(TraceError::from(
                "trace exporter already shut down",
            ))));
        }

        let result = batch
            .iter()
            .try_for_each(|span| self.file.write_line(&self.record(span).to_string()))
            .map_err(|e| TraceError::from(e.to_string()));
        Box::pin(std::future::ready(result))
    }

    fn shutdown(&mut self) {
        self.shut_down = true;
    }
}

fn micros_between(start: SystemTime, end: SystemTime) -> u64 {
    let micros = end.duration_since(start).unwrap_or(Duration::ZERO).as_micros();
    u64::try_from(micros).unwrap_or(u64::MAX)
}

fn fields(attributes: &[KeyValue]) -> JsonValue {
    let map: Map<String, JsonValue> = attributes
        .iter()
        .map(|kv| (kv.key.as_str().to_string(), field_value(&kv.value)))
        .collect();
    JsonValue::Object(map)
}

fn field_value(value: &Value) -> JsonValue {
    match value {
        Value::Bool(b) => json!(b),
        Value::I64(i) => json!(i),
        Value::F64(f) => json!(f),
        other => json!(other.to_string()),
    }
}
