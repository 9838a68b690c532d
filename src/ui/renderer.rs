//! Top-level rendering coordinator.
//!
//! Rendering is a two-step process:
//!
//! 1. **View Model Computation**: `AppState` → [`UIViewModel`]
//! 2. **Component Rendering**: the view model is drawn by [`components`]

use crate::app::AppState;
use crate::ui::components;
use crate::ui::viewmodel::UIViewModel;
use crate::ui::theme::Theme;

/// Renders the plugin UI to stdout.
///
/// Prints ANSI-styled output positioned with absolute cursor moves. Does not
/// clear the screen; Zellij hands every render a fresh pane.
pub fn render(state: &AppState, rows: usize, cols: usize) {
    let viewmodel = state.compute_viewmodel(rows, cols);

    render_viewmodel(&viewmodel, state.theme(), rows, cols);
}

fn render_viewmodel(vm: &UIViewModel, theme: &Theme, rows: usize, cols: usize) {
    let _span = tracing::trace_span!("render", rows, cols, rows_drawn = vm.rows.len()).entered();
    components::render_layout(vm, theme, cols, rows);
}
