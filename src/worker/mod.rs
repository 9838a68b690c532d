//! Background worker for file I/O.
//!
//! Preference reads/writes and Markdown export writes run on Zellij's worker
//! thread so the plugin's render loop never touches the filesystem.
//!
//! - `messages`: Request/response protocol types with trace context propagation
//! - `handler`: Worker implementation and message processing logic

pub mod handler;
pub mod messages;

pub use handler::{write_export, DevCheatWorker};
pub use messages::{TraceContext, WorkerMessage, WorkerResponse};
