//! Application layer coordinating navigation, events and actions.
//!
//! Sits between the plugin runtime (main.rs) and the catalog, filter and
//! worker layers:
//!
//! ```text
//! User Input → Events → Event Handler → NavigationState → compute_view → View
//!                           ↑                                            ↓
//!                           └──── Worker Responses       UIViewModel ←───┘
//! ```
//!
//! # Modules
//!
//! - [`navigation`]: The navigation state machine (active sheet, query, sidebar)
//! - [`view`]: Projection of navigation state onto the catalog
//! - [`state`]: Application state and view model computation
//! - [`handler`]: Event processing
//! - [`actions`]: Side effects emitted by the handler
//! - [`modes`]: Input mode types

pub mod actions;
pub mod handler;
pub mod modes;
pub mod navigation;
pub mod state;
pub mod view;

pub use actions::Action;
pub use handler::{handle_event, Event};
pub use modes::{InputMode, SearchFocus};
pub use navigation::NavigationState;
pub use state::AppState;
pub use view::{compute_view, View};
