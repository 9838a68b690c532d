//! User interface rendering layer with component-based architecture.
//!
//! Transforms view models into ANSI-styled output through composable
//! rendering components.
//!
//! ```text
//! AppState → compute_viewmodel → UIViewModel → render → ANSI Output
//! ```
//!
//! # Modules
//!
//! - [`viewmodel`]: View model types representing renderable UI state
//! - [`renderer`]: Top-level rendering coordinator
//! - [`components`]: Composable UI component renderers
//! - [`helpers`]: Highlighting and truncation
//! - [`icons`]: Icon reference to glyph lookup
//! - [`theme`]: Color scheme definitions and ANSI escape sequence generation

pub mod components;
pub mod helpers;
pub mod icons;
pub mod renderer;
pub mod theme;
pub mod viewmodel;

pub use icons::resolve_icon;
pub use renderer::render;
pub use theme::Theme;
pub use viewmodel::{
    ContentRow, EmptyState, FooterInfo, HeaderInfo, SearchBarInfo, SheetRow, SidebarEntry, SidebarInfo,
    SnippetRow, UIViewModel,
};
