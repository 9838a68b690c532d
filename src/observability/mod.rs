//! OpenTelemetry tracing with file-based span export.
//!
//! ```text
//! tracing spans → tracing-opentelemetry → opentelemetry_sdk → FileSpanExporter → devcheat-otlp.json
//! ```
//!
//! The plugin and its worker both call [`init_tracing`]; spans cross the
//! thread boundary through [`TraceContext`](crate::worker::TraceContext).
//! The trace file rotates at 10 MB and keeps three numbered backups.
//!
//! # Modules
//!
//! - [`init`]: Subscriber setup
//! - [`tracer`]: Tracer provider with the file exporter
//! - [`span_formatter`]: OTLP JSON encoding
//! - [`file_writer`]: Rotating line writer

mod file_writer;
mod init;
mod span_formatter;
mod tracer;

pub use init::{init_tracing, TRACE_FILE};
