//! Markdown export of the active sheet.
//!
//! Rendering is pure and happens on the plugin thread; the worker only writes
//! the finished document to disk.

mod markdown;

pub use markdown::{file_name, render_markdown};
