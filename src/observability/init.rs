//! Subscriber setup: `tracing` → `tracing-opentelemetry` → file exporter.

use super::tracer::{self, SERVICE_NAME};
use crate::infrastructure::paths;
use crate::Config;
use opentelemetry::trace::TracerProvider as _;
use opentelemetry::KeyValue;
use opentelemetry_sdk::resource::Resource;
use tracing_opentelemetry::OpenTelemetryLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Trace file name inside the data directory.
pub const TRACE_FILE: &str = "devcheat-otlp.json";

/// Installs the global subscriber.
///
/// The filter comes from `config.trace_level` (an `EnvFilter` directive such
/// as `debug` or `devcheat::filter=trace`); an unparsable directive falls
/// back to `info`. Spans are written to `<data dir>/devcheat-otlp.json`.
///
/// Tracing is optional: if the data directory cannot be created nothing is
/// installed, and calls after the first successful one are no-ops.
pub fn init_tracing(config: &Config) {
    let data_dir = paths::get_data_dir();
    if std::fs::create_dir_all(&data_dir).is_err() {
        return;
    }

    let filter = EnvFilter::try_new(&config.trace_level).unwrap_or_else(|_| EnvFilter::new("info"));

    let resource = Resource::new(vec![
        KeyValue::new("service.name", SERVICE_NAME),
        KeyValue::new("service.version", env!("CARGO_PKG_VERSION")),
    ]);
    let provider = tracer::create_tracer_provider(data_dir.join(TRACE_FILE), resource);
    let otel_layer = OpenTelemetryLayer::new(provider.tracer(SERVICE_NAME));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(otel_layer)
        .try_init();
}
