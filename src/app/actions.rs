//! Side effects requested by the event handler.
//!
//! The handler returns a `Vec<Action>` after each event; the plugin runtime
//! executes them in order. Everything that touches the host (closing the pane,
//! disk I/O through the worker) goes through here, so the handler itself stays
//! testable without Zellij.

use crate::worker::WorkerMessage;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Hides the floating plugin pane.
    CloseFocus,

    /// Posts a message to the background worker (preferences, exports).
    PostToWorker(WorkerMessage),
}
