//! Worker thread implementation.
//!
//! The worker owns all file I/O: the preferences file and Markdown exports.
//! Storage is opened lazily on the first message so a read-only home
//! directory only breaks the features that need it.

use crate::domain::error::{DevCheatError, Result};
use crate::domain::ThemeMode;
use crate::infrastructure::paths;
use crate::storage::backend::Storage;
use crate::storage::JsonStorage;
use crate::worker::{WorkerMessage, WorkerResponse};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use zellij_tile::prelude::{PluginMessage, ZellijWorker};
use zellij_tile::shim::post_message_to_plugin;

/// File name of the preferences document inside the data directory.
pub const PREFERENCES_FILE: &str = "preferences.json";

/// Worker thread state.
#[derive(Serialize, Deserialize, Default)]
pub struct DevCheatWorker {
    /// Preference storage, opened on first use.
    #[serde(skip)]
    storage: Option<Box<dyn Storage>>,
}

impl DevCheatWorker {
    /// Creates a worker over an already opened backend.
    #[must_use]
    pub fn with_storage(storage: Box<dyn Storage>) -> Self {
        Self { storage: Some(storage) }
    }

    /// Opens `preferences.json` in `data_dir`.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage file cannot be created or parsed.
    pub fn open(data_dir: &Path) -> Result<Self> {
        let storage = JsonStorage::new(data_dir.join(PREFERENCES_FILE))?;
        Ok(Self::with_storage(Box::new(storage)))
    }

    fn get_storage(&mut self) -> Result<&mut Box<dyn Storage>> {
        self.storage
            .as_mut()
            .ok_or_else(|| DevCheatError::Worker("Storage not initialized".to_string()))
    }

    /// Maps a fallible operation to a response with consistent logging.
    fn handle_result<T, F>(operation: &str, result: Result<T>, on_success: F) -> WorkerResponse
    where
        F: FnOnce(T) -> WorkerResponse,
    {
        match result {
            Ok(value) => {
                tracing::debug!(operation, "worker operation successful");
                on_success(value)
            }
            Err(e) => {
                tracing::warn!(operation, error = %e, "worker operation failed");
                WorkerResponse::Error {
                    message: format!("{operation}: {e}"),
                }
            }
        }
    }

    fn handle_load_preferences(&mut self) -> WorkerResponse {
        Self::handle_result(
            "load preferences",
            self.get_storage().and_then(|storage| storage.theme_mode()),
            |mode| WorkerResponse::PreferencesLoaded { mode },
        )
    }

    fn handle_save_theme_mode(&mut self, mode: ThemeMode) -> WorkerResponse {
        let timestamp = chrono::Utc::now().timestamp();

        Self::handle_result(
            "save theme mode",
            self.get_storage()
                .and_then(|storage| storage.set_theme_mode(mode, timestamp)),
            |()| WorkerResponse::ThemeModeSaved { mode },
        )
    }

    fn handle_export_sheet(directory: &str, file_name: &str, markdown: &str) -> WorkerResponse {
        Self::handle_result(
            "export sheet",
            write_export(Path::new(directory), file_name, markdown),
            |path| WorkerResponse::SheetExported {
                path: path.to_string_lossy().into_owned(),
            },
        )
    }

    /// Rebuilds the caller's OpenTelemetry context so worker spans become its
    /// children. The returned guard must stay alive while handling.
    fn attach_parent_trace_context(message: &WorkerMessage) -> Option<opentelemetry::ContextGuard> {
        use opentelemetry::trace::{SpanContext, SpanId, TraceContextExt, TraceFlags, TraceId, TraceState};

        let trace_context = message.trace_context()?;
        let trace_id = TraceId::from_hex(&trace_context.trace_id).ok()?;
        let span_id = SpanId::from_hex(&trace_context.parent_span_id).ok()?;

        let span_context = SpanContext::new(
            trace_id,
            span_id,
            TraceFlags::SAMPLED,
            true,
            TraceState::default(),
        );

        Some(
            opentelemetry::Context::current()
                .with_remote_span_context(span_context)
                .attach(),
        )
    }

    /// Processes one request.
    pub fn handle_message(&mut self, message: WorkerMessage) -> WorkerResponse {
        let _context_guard = Self::attach_parent_trace_context(&message);
        let _span = tracing::debug_span!("worker_handle_message", message_type = ?message).entered();

        match message {
            WorkerMessage::LoadPreferences { .. } => self.handle_load_preferences(),
            WorkerMessage::SaveThemeMode { mode, .. } => self.handle_save_theme_mode(mode),
            WorkerMessage::ExportSheet {
                directory,
                file_name,
                markdown,
                ..
            } => Self::handle_export_sheet(&directory, &file_name, &markdown),
        }
    }
}

/// Writes `markdown` to `directory/file_name` atomically, replacing any
/// previous export of the same sheet.
///
/// # Errors
///
/// Returns [`DevCheatError::Export`] for an unusable file name and
/// [`DevCheatError::Io`] if the directory cannot be created or written.
pub fn write_export(directory: &Path, file_name: &str, markdown: &str) -> Result<PathBuf> {
    if file_name.is_empty() || file_name.contains(['/', '\\']) || file_name.starts_with('.') {
        return Err(DevCheatError::Export(format!("invalid export file name `{file_name}`")));
    }

    std::fs::create_dir_all(directory)?;

    let path = directory.join(file_name);
    let tmp_path = path.with_extension("md.tmp");
    std::fs::write(&tmp_path, markdown)?;
    std::fs::rename(&tmp_path, &path)?;

    tracing::info!(path = ?path, bytes = markdown.len(), "sheet exported");
    Ok(path)
}

static WORKER_TRACING_INITIALIZED: AtomicBool = AtomicBool::new(false);

fn post_response(name: String, response: &WorkerResponse) {
    match serde_json::to_string(response) {
        Ok(payload) => post_message_to_plugin(PluginMessage {
            name,
            payload,
            worker_name: None,
        }),
        Err(e) => tracing::error!(error = %e, "failed to serialize worker response"),
    }
}

impl ZellijWorker<'_> for DevCheatWorker {
    /// Zellij entry point: decodes the JSON request, handles it and posts the
    /// JSON reply back under the same message name.
    fn on_message(&mut self, message: String, payload: String) {
        if !WORKER_TRACING_INITIALIZED.swap(true, Ordering::Relaxed) {
            crate::observability::init_tracing(&crate::Config::default());
        }

        if self.storage.is_none() {
            match Self::open(&paths::get_data_dir()) {
                Ok(worker) => self.storage = worker.storage,
                Err(e) => {
                    // Exports still work without storage.
                    tracing::warn!(error = %e, "failed to initialize storage");
                }
            }
        }

        let worker_message: WorkerMessage = match serde_json::from_str(&payload) {
            Ok(msg) => msg,
            Err(e) => {
                tracing::error!(error = %e, "failed to deserialize worker message");
                post_response(
                    message,
                    &WorkerResponse::Error {
                        message: format!("malformed worker request: {e}"),
                    },
                );
                return;
            }
        };

        let response = self.handle_message(worker_message);
        post_response(message, &response);
    }
}
