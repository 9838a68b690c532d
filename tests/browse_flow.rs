//! End-to-end flows through the public API: keyboard events in, view models
//! and worker requests out, with the worker answering from a temp directory.

use devcheat::app::View;
use devcheat::storage::JsonStorage;
use devcheat::ui::ContentRow;
use devcheat::worker::{DevCheatWorker, WorkerMessage, WorkerResponse};
use devcheat::{handle_event, initialize, Action, AppState, Config, Event, ThemeMode};

fn send(state: &mut AppState, event: Event) -> Vec<Action> {
    handle_event(state, &event).unwrap().1
}

fn type_query(state: &mut AppState, text: &str) {
    for c in text.chars() {
        send(state, Event::Char(c));
    }
}

fn visible_snippets(state: &AppState) -> Vec<String> {
    state
        .compute_viewmodel(80, 120)
        .rows
        .into_iter()
        .filter_map(|row| match row {
            ContentRow::SnippetEntry(snippet) => Some(snippet.title),
            _ => None,
        })
        .collect()
}

#[test]
fn search_open_filter_and_return_home() {
    let mut state = initialize(&Config::default());

    send(&mut state, Event::SearchMode);
    type_query(&mut state, "css");
    let View::Home { groups } = state.view() else {
        panic!("expected home view");
    };
    let names: Vec<&str> = groups.iter().flat_map(|g| g.sheets.iter().map(|s| s.name.as_str())).collect();
    assert_eq!(names, ["CSS3", "Tailwind CSS"]);

    send(&mut state, Event::FocusResults);
    send(&mut state, Event::Select);
    assert_eq!(state.nav.active_sheet_id(), Some("css"));
    assert_eq!(state.nav.query(), "");

    send(&mut state, Event::SearchMode);
    type_query(&mut state, "clamp");
    assert_eq!(visible_snippets(&state), ["Clamp()"]);

    send(&mut state, Event::ExitSearch);
    assert!(visible_snippets(&state).len() > 1);

    send(&mut state, Event::GoHome);
    assert!(state.nav.is_home());
    assert_eq!(state.selectable_count(), state.catalog().len());
}

#[test]
fn sidebar_jump_between_sheets() {
    let mut state = initialize(&Config::default());
    send(&mut state, Event::Select);
    assert_eq!(state.nav.active_sheet_id(), Some("html"));

    send(&mut state, Event::ToggleSidebar);
    let targets = state.sidebar_targets();
    let docker = targets.iter().position(|t| t.as_deref() == Some("docker")).unwrap();
    while state.sidebar_index != docker {
        send(&mut state, Event::KeyDown);
    }
    send(&mut state, Event::Select);

    assert_eq!(state.nav.active_sheet_id(), Some("docker"));
    assert!(!state.nav.is_sidebar_open());
    assert_eq!(state.compute_viewmodel(24, 80).header.title, "[]  Docker");
}

#[test]
fn export_round_trip_through_worker() {
    let dir = tempfile::tempdir().unwrap();
    let export_dir = dir.path().join("exports");
    let storage = JsonStorage::new(dir.path().join("preferences.json")).unwrap();
    let mut worker = DevCheatWorker::with_storage(Box::new(storage));

    let mut state = initialize(&Config {
        export_dir: export_dir.to_string_lossy().into_owned(),
        ..Config::default()
    });
    type_query(&mut state, "ignored outside search");
    send(&mut state, Event::Select);
    send(&mut state, Event::KeyDown);

    let actions = send(&mut state, Event::Export);
    let [Action::PostToWorker(message)] = actions.as_slice() else {
        panic!("expected one worker request, got {actions:?}");
    };

    let response = worker.handle_message(message.clone());
    let WorkerResponse::SheetExported { path } = &response else {
        panic!("expected export, got {response:?}");
    };
    let written = std::fs::read_to_string(path).unwrap();
    assert!(written.starts_with("## "));
    assert!(path.ends_with("html-cheatsheet.md"));

    send(&mut state, Event::WorkerResponse(response));
    assert!(state.status.as_deref().is_some_and(|s| s.starts_with("Exported to ")));
}

#[test]
fn theme_mode_survives_restart() {
    let dir = tempfile::tempdir().unwrap();
    let prefs = dir.path().join("preferences.json");

    {
        let mut worker = DevCheatWorker::with_storage(Box::new(JsonStorage::new(prefs.clone()).unwrap()));
        let mut state = initialize(&Config::default());
        let actions = send(&mut state, Event::ToggleTheme);
        for action in actions {
            if let Action::PostToWorker(message) = action {
                assert_eq!(
                    worker.handle_message(message),
                    WorkerResponse::ThemeModeSaved { mode: ThemeMode::Light }
                );
            }
        }
    }

    let mut worker = DevCheatWorker::with_storage(Box::new(JsonStorage::new(prefs).unwrap()));
    let mut state = initialize(&Config::default());
    assert_eq!(state.theme_mode, ThemeMode::Dark);

    let response = worker.handle_message(WorkerMessage::load_preferences());
    send(&mut state, Event::WorkerResponse(response));
    assert_eq!(state.theme_mode, ThemeMode::Light);
    assert_eq!(state.theme().name, "catppuccin-latte");
}
