//! Worker thread message types for cross-thread communication.
//!
//! Requests and responses travel between the plugin and its worker as JSON
//! strings. Each request can carry the caller's trace context so worker spans
//! join the plugin's trace.

use crate::domain::ThemeMode;
use serde::{Deserialize, Serialize};

/// Trace and parent span ids of the sending span, hex encoded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraceContext {
    /// OpenTelemetry trace ID (32 hex digits).
    pub trace_id: String,

    /// Span to parent worker spans under (16 hex digits).
    pub parent_span_id: String,
}

impl TraceContext {
    /// Captures the OpenTelemetry ids of the current tracing span.
    ///
    /// Returns `None` when there is no valid span context, e.g. before
    /// tracing is initialized or inside tests.
    #[must_use]
    pub fn from_current() -> Option<Self> {
        use opentelemetry::trace::TraceContextExt;
        use tracing_opentelemetry::OpenTelemetrySpanExt;

        let otel_context = tracing::Span::current().context();
        let span_ref = otel_context.span();
        let span_context = span_ref.span_context();

        if !span_context.is_valid() {
            return None;
        }

        Some(Self {
            trace_id: format!("{:032x}", span_context.trace_id()),
            parent_span_id: format!("{:016x}", span_context.span_id()),
        })
    }
}

/// Generates `WorkerMessage` constructors that attach the current trace
/// context.
macro_rules! worker_message_builders {
    (
        $(
            $builder_name:ident($variant:ident { $($field:ident: $ty:ty),* $(,)? })
        ),* $(,)?
    ) => {
        impl WorkerMessage {
            $(
                #[doc = concat!("Create a ", stringify!($variant), " message with current trace context")]
                #[must_use]
                pub fn $builder_name($($field: $ty),*) -> Self {
                    Self::$variant {
                        $($field,)*
                        trace_context: TraceContext::from_current(),
                    }
                }
            )*
        }
    };
}

worker_message_builders! {
    load_preferences(LoadPreferences {}),
    save_theme_mode(SaveThemeMode { mode: ThemeMode }),
    export_sheet(ExportSheet { directory: String, file_name: String, markdown: String }),
}

/// Requests from the plugin thread to the worker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum WorkerMessage {
    /// Read the persisted theme mode.
    LoadPreferences {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        trace_context: Option<TraceContext>,
    },

    /// Persist a new theme mode.
    SaveThemeMode {
        mode: ThemeMode,

        #[serde(default, skip_serializing_if = "Option::is_none")]
        trace_context: Option<TraceContext>,
    },

    /// Write a rendered Markdown document to `directory/file_name`.
    ExportSheet {
        /// Sandbox path of the target directory (`~` already expanded).
        directory: String,
        file_name: String,
        markdown: String,

        #[serde(default, skip_serializing_if = "Option::is_none")]
        trace_context: Option<TraceContext>,
    },
}

impl WorkerMessage {
    /// Trace context carried by any variant.
    #[must_use]
    pub const fn trace_context(&self) -> Option<&TraceContext> {
        match self {
            Self::LoadPreferences { trace_context }
            | Self::SaveThemeMode { trace_context, .. }
            | Self::ExportSheet { trace_context, .. } => trace_context.as_ref(),
        }
    }
}

/// Replies from the worker to the plugin thread.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum WorkerResponse {
    /// Persisted theme mode, `None` when nothing was saved yet.
    PreferencesLoaded { mode: Option<ThemeMode> },

    ThemeModeSaved { mode: ThemeMode },

    /// Export finished; `path` is the sandbox path written.
    SheetExported { path: String },

    /// The request failed. The message is shown in the status line.
    Error { message: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builders_skip_missing_trace_context() {
        let message = WorkerMessage::save_theme_mode(ThemeMode::Light);
        assert!(message.trace_context().is_none());

        let json = serde_json::to_string(&message).unwrap();
        assert_eq!(json, r#"{"SaveThemeMode":{"mode":"light"}}"#);
    }

    #[test]
    fn messages_without_trace_context_deserialize() {
        let message: WorkerMessage = serde_json::from_str(r#"{"LoadPreferences":{}}"#).unwrap();
        assert_eq!(message, WorkerMessage::LoadPreferences { trace_context: None });
    }

    #[test]
    fn response_round_trips_through_json() {
        let response = WorkerResponse::SheetExported { path: "/host/git-cheatsheet.md".into() };
        let json = serde_json::to_string(&response).unwrap();
        assert_eq!(serde_json::from_str::<WorkerResponse>(&json).unwrap(), response);
    }
}
