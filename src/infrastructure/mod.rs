//! Infrastructure layer for the Zellij plugin sandbox.
//!
//! Only path handling lives here; file I/O itself happens in the worker and
//! storage layers.

pub mod paths;

pub use paths::{expand_tilde, get_data_dir, strip_host_prefix, HOST_ROOT};
