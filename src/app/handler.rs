//! Event handling and state transition logic.
//!
//! Translates user input and worker responses into state changes and
//! [`Action`]s:
//!
//! 1. Events arrive from the plugin runtime or the worker
//! 2. [`handle_event`] pattern-matches the event
//! 3. State changes go through `AppState` and its `NavigationState`
//! 4. Actions are collected and returned for execution
//!
//! The returned `bool` tells the runtime whether a re-render is needed.

use super::modes::{InputMode, SearchFocus};
use crate::app::{Action, AppState};
use crate::domain::error::Result;
use crate::infrastructure::strip_host_prefix;
use crate::worker::{WorkerMessage, WorkerResponse};

/// Events triggered by user input or worker responses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Moves the active cursor down (wraps to top).
    KeyDown,
    /// Moves the active cursor up (wraps to bottom).
    KeyUp,
    /// Closes the floating pane and hides the plugin UI.
    CloseFocus,
    /// Enter: open the entry under the cursor.
    Select,
    /// Enters search mode with typing focus, keeping the current query.
    SearchMode,
    /// Moves focus from the query to the results.
    FocusResults,
    /// Clears the query and leaves search mode.
    ExitSearch,
    /// Appends a character to the sidebar filter while the sidebar is open,
    /// to the query while typing a search.
    Char(char),
    /// Removes the last character from whichever text `Char` edits.
    Backspace,
    /// Returns to the dashboard.
    GoHome,
    ToggleSidebar,
    CloseSidebar,
    /// Flips dark/light and persists the choice.
    ToggleTheme,
    /// Writes the active sheet to the export directory.
    Export,

    /// Wraps a response from the background worker.
    WorkerResponse(WorkerResponse),
}

/// Processes an event, mutates application state, and returns whether to
/// re-render plus the actions to execute.
///
/// # Errors
///
/// Currently infallible; the `Result` keeps the runtime's error path in place
/// for handlers that need it.
///
/// # Example
///
/// ```
/// use devcheat::app::{handle_event, AppState, Event};
/// use devcheat::catalog::builtin_catalog;
/// use devcheat::ui::Theme;
///
/// let mut state = AppState::new(builtin_catalog()?, Theme::default(), Theme::default());
/// let (should_render, actions) = handle_event(&mut state, &Event::Select)?;
/// assert!(should_render);
/// assert!(actions.is_empty());
/// assert_eq!(state.nav.active_sheet_id(), Some("html"));
/// # Ok::<(), devcheat::DevCheatError>(())
/// ```
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = ?event).entered();

    match event {
        Event::KeyDown => {
            state.move_selection_down();
            Ok((true, vec![]))
        }
        Event::KeyUp => {
            state.move_selection_up();
            Ok((true, vec![]))
        }
        Event::CloseFocus => Ok((false, vec![Action::CloseFocus])),
        Event::Select => {
            if state.nav.is_sidebar_open() {
                state.activate_sidebar_entry();
                return Ok((true, vec![]));
            }

            let Some(id) = state.selected_sheet_id() else {
                tracing::debug!("nothing to open");
                if state.input_mode.is_typing() {
                    state.input_mode = InputMode::Search(SearchFocus::Navigating);
                    return Ok((true, vec![]));
                }
                return Ok((false, vec![]));
            };

            state.open_sheet(id);
            Ok((true, vec![]))
        }
        Event::SearchMode => {
            tracing::debug!("entering search mode");
            state.nav.close_sidebar();
            state.input_mode = InputMode::Search(SearchFocus::Typing);
            Ok((true, vec![]))
        }
        Event::FocusResults => {
            if state.nav.query().is_empty() {
                state.input_mode = InputMode::Normal;
            } else {
                state.input_mode = InputMode::Search(SearchFocus::Navigating);
            }
            Ok((true, vec![]))
        }
        Event::ExitSearch => {
            tracing::debug!(query = %state.nav.query(), "exiting search mode");
            state.input_mode = InputMode::Normal;
            state.set_query("");
            Ok((true, vec![]))
        }
        Event::Char(c) => {
            if state.nav.is_sidebar_open() {
                let mut filter = state.sidebar_filter.clone();
                filter.push(*c);
                tracing::trace!(filter = %filter, "sidebar filter updated");
                state.set_sidebar_filter(filter);
                return Ok((true, vec![]));
            }
            if !state.input_mode.is_typing() {
                return Ok((false, vec![]));
            }

            let mut query = state.nav.query().to_string();
            query.push(*c);
            tracing::trace!(query = %query, char = %c, "search query updated");
            state.set_query(query);

            Ok((true, vec![]))
        }
        Event::Backspace => {
            if state.nav.is_sidebar_open() {
                let mut filter = state.sidebar_filter.clone();
                if filter.pop().is_none() {
                    return Ok((false, vec![]));
                }
                state.set_sidebar_filter(filter);
                return Ok((true, vec![]));
            }
            if !state.input_mode.is_typing() {
                return Ok((false, vec![]));
            }

            let mut query = state.nav.query().to_string();
            if query.pop().is_none() {
                return Ok((false, vec![]));
            }
            state.set_query(query);

            Ok((true, vec![]))
        }
        Event::GoHome => {
            if state.nav.is_home() && state.nav.query().is_empty() {
                return Ok((false, vec![]));
            }
            state.go_home();
            Ok((true, vec![]))
        }
        Event::ToggleSidebar => {
            state.toggle_sidebar();
            Ok((true, vec![]))
        }
        Event::CloseSidebar => {
            if !state.nav.is_sidebar_open() {
                return Ok((false, vec![]));
            }
            state.nav.close_sidebar();
            Ok((true, vec![]))
        }
        Event::ToggleTheme => {
            let mode = state.toggle_theme_mode();
            tracing::debug!(mode = %mode, "theme mode toggled");
            Ok((true, vec![Action::PostToWorker(WorkerMessage::save_theme_mode(mode))]))
        }
        Event::Export => state.export_request().map_or_else(
            || {
                tracing::debug!("no active sheet to export");
                Ok((false, vec![]))
            },
            |message| {
                state.status = Some("Exporting…".to_string());
                Ok((true, vec![Action::PostToWorker(message)]))
            },
        ),
        Event::WorkerResponse(response) => match response {
            WorkerResponse::PreferencesLoaded { mode } => match mode {
                Some(mode) if *mode != state.theme_mode => {
                    tracing::debug!(mode = %mode, "restoring saved theme mode");
                    state.theme_mode = *mode;
                    Ok((true, vec![]))
                }
                _ => Ok((false, vec![])),
            },
            WorkerResponse::ThemeModeSaved { mode } => {
                tracing::debug!(mode = %mode, "theme mode persisted");
                Ok((false, vec![]))
            }
            WorkerResponse::SheetExported { path } => {
                tracing::info!(path = %path, "sheet exported");
                state.status = Some(format!("Exported to {}", strip_host_prefix(path)));
                Ok((true, vec![]))
            }
            WorkerResponse::Error { message } => {
                tracing::error!("Worker error: {}", message);
                state.status = Some(format!("Error: {message}"));
                Ok((true, vec![]))
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::builtin_catalog;
    use crate::domain::ThemeMode;
    use crate::ui::Theme;

    fn state() -> AppState {
        AppState::new(builtin_catalog().unwrap(), Theme::default(), Theme::default())
    }

    fn send(state: &mut AppState, events: &[Event]) {
        for event in events {
            handle_event(state, event).unwrap();
        }
    }

    fn type_query(state: &mut AppState, text: &str) {
        for c in text.chars() {
            handle_event(state, &Event::Char(c)).unwrap();
        }
    }

    #[test]
    fn each_keystroke_narrows_results() {
        let mut state = state();
        send(&mut state, &[Event::SearchMode]);

        type_query(&mut state, "s");
        let after_s = state.selectable_count();
        type_query(&mut state, "cript");
        assert_eq!(state.nav.query(), "script");
        assert!(state.selectable_count() <= after_s);
        assert_eq!(state.selectable_count(), 5);
    }

    #[test]
    fn chars_are_ignored_outside_typing() {
        let mut state = state();
        let (render, _) = handle_event(&mut state, &Event::Char('x')).unwrap();
        assert!(!render);
        assert_eq!(state.nav.query(), "");
    }

    #[test]
    fn escape_clears_query_and_leaves_search() {
        let mut state = state();
        send(&mut state, &[Event::SearchMode]);
        type_query(&mut state, "git");
        send(&mut state, &[Event::ExitSearch]);

        assert_eq!(state.input_mode, InputMode::Normal);
        assert_eq!(state.nav.query(), "");
        assert_eq!(state.selectable_count(), 18);
    }

    #[test]
    fn reentering_search_keeps_query() {
        let mut state = state();
        send(&mut state, &[Event::SearchMode]);
        type_query(&mut state, "sq");
        send(&mut state, &[Event::FocusResults, Event::SearchMode]);

        assert!(state.input_mode.is_typing());
        assert_eq!(state.nav.query(), "sq");
    }

    #[test]
    fn backspace_on_empty_query_is_noop() {
        let mut state = state();
        send(&mut state, &[Event::SearchMode]);
        let (render, _) = handle_event(&mut state, &Event::Backspace).unwrap();
        assert!(!render);

        type_query(&mut state, "ab");
        send(&mut state, &[Event::Backspace]);
        assert_eq!(state.nav.query(), "a");
    }

    #[test]
    fn selecting_from_search_results_opens_sheet_with_clean_query() {
        let mut state = state();
        send(&mut state, &[Event::SearchMode]);
        type_query(&mut state, "docker");
        send(&mut state, &[Event::FocusResults, Event::Select]);

        assert_eq!(state.nav.active_sheet_id(), Some("docker"));
        assert_eq!(state.nav.query(), "");
        assert_eq!(state.input_mode, InputMode::Normal);
    }

    #[test]
    fn select_with_no_results_moves_focus_off_query() {
        let mut state = state();
        send(&mut state, &[Event::SearchMode]);
        type_query(&mut state, "zzz");
        send(&mut state, &[Event::Select]);

        assert_eq!(state.input_mode, InputMode::Search(SearchFocus::Navigating));
        assert!(state.nav.is_home());
    }

    #[test]
    fn select_on_sheet_view_does_nothing() {
        let mut state = state();
        state.open_sheet("git");
        let (render, actions) = handle_event(&mut state, &Event::Select).unwrap();
        assert!(!render);
        assert!(actions.is_empty());
        assert_eq!(state.nav.active_sheet_id(), Some("git"));
    }

    #[test]
    fn go_home_from_sheet_clears_query() {
        let mut state = state();
        state.open_sheet("css");
        state.set_query("clamp");
        send(&mut state, &[Event::GoHome]);

        assert!(state.nav.is_home());
        assert_eq!(state.nav.query(), "");
    }

    #[test]
    fn sidebar_enter_opens_sheet_and_closes() {
        let mut state = state();
        send(&mut state, &[Event::ToggleSidebar, Event::KeyDown, Event::Select]);

        assert_eq!(state.nav.active_sheet_id(), Some("html"));
        assert!(!state.nav.is_sidebar_open());
    }

    #[test]
    fn typing_in_sidebar_filters_sheet_names() {
        let mut state = state();
        send(&mut state, &[Event::ToggleSidebar]);
        type_query(&mut state, "ja");

        assert_eq!(state.sidebar_filter, "ja");
        assert_eq!(state.nav.query(), "");
        assert_eq!(
            state.sidebar_targets(),
            [None, Some("js".to_string()), Some("java".to_string())]
        );

        send(&mut state, &[Event::KeyDown, Event::KeyDown, Event::Select]);
        assert_eq!(state.nav.active_sheet_id(), Some("java"));
        assert!(!state.nav.is_sidebar_open());
    }

    #[test]
    fn sidebar_backspace_widens_filter() {
        let mut state = state();
        send(&mut state, &[Event::ToggleSidebar]);
        type_query(&mut state, "javas");
        let narrow = state.sidebar_targets().len();

        send(&mut state, &[Event::Backspace]);
        assert_eq!(state.sidebar_filter, "java");
        assert!(state.sidebar_targets().len() > narrow);

        send(&mut state, &[Event::Backspace, Event::Backspace, Event::Backspace, Event::Backspace]);
        let (render, _) = handle_event(&mut state, &Event::Backspace).unwrap();
        assert!(!render);
        assert_eq!(state.sidebar_targets().len(), state.catalog().len() + 1);
    }

    #[test]
    fn sidebar_filter_survives_search_on_content() {
        let mut state = state();
        send(&mut state, &[Event::ToggleSidebar]);
        type_query(&mut state, "py");
        send(&mut state, &[Event::CloseSidebar, Event::SearchMode]);
        type_query(&mut state, "git");

        assert_eq!(state.nav.query(), "git");
        assert_eq!(state.sidebar_filter, "py");
    }

    #[test]
    fn close_sidebar_is_idempotent() {
        let mut state = state();
        let (render, _) = handle_event(&mut state, &Event::CloseSidebar).unwrap();
        assert!(!render);

        send(&mut state, &[Event::ToggleSidebar]);
        let (render, _) = handle_event(&mut state, &Event::CloseSidebar).unwrap();
        assert!(render);
        assert!(!state.nav.is_sidebar_open());
    }

    #[test]
    fn toggle_theme_posts_save() {
        let mut state = state();
        let (_, actions) = handle_event(&mut state, &Event::ToggleTheme).unwrap();
        assert_eq!(state.theme_mode, ThemeMode::Light);
        assert!(matches!(
            actions.as_slice(),
            [Action::PostToWorker(WorkerMessage::SaveThemeMode { mode: ThemeMode::Light, .. })]
        ));
    }

    #[test]
    fn export_without_active_sheet_is_noop() {
        let mut state = state();
        let (render, actions) = handle_event(&mut state, &Event::Export).unwrap();
        assert!(!render);
        assert!(actions.is_empty());
    }

    #[test]
    fn export_posts_markdown_of_active_sheet() {
        let mut state = state();
        state.export_dir = "/host/Downloads".to_string();
        state.open_sheet("git");

        let (_, actions) = handle_event(&mut state, &Event::Export).unwrap();
        let [Action::PostToWorker(WorkerMessage::ExportSheet { file_name, .. })] = actions.as_slice() else {
            panic!("expected one export request, got {actions:?}");
        };
        assert_eq!(file_name, "git-cheatsheet.md");
    }

    #[test]
    fn worker_responses_update_status_and_mode() {
        let mut state = state();
        send(
            &mut state,
            &[Event::WorkerResponse(WorkerResponse::PreferencesLoaded {
                mode: Some(ThemeMode::Light),
            })],
        );
        assert_eq!(state.theme_mode, ThemeMode::Light);

        send(
            &mut state,
            &[Event::WorkerResponse(WorkerResponse::SheetExported {
                path: "/host/Downloads/git-cheatsheet.md".to_string(),
            })],
        );
        assert_eq!(state.status.as_deref(), Some("Exported to ~/Downloads/git-cheatsheet.md"));

        send(
            &mut state,
            &[Event::WorkerResponse(WorkerResponse::Error {
                message: "disk full".to_string(),
            })],
        );
        assert_eq!(state.status.as_deref(), Some("Error: disk full"));
    }

    #[test]
    fn missing_preferences_keep_current_mode() {
        let mut state = state();
        let (render, _) = handle_event(
            &mut state,
            &Event::WorkerResponse(WorkerResponse::PreferencesLoaded { mode: None }),
        )
        .unwrap();
        assert!(!render);
        assert_eq!(state.theme_mode, ThemeMode::Dark);
    }
}
