//! Zellij plugin wrapper and entry point.
//!
//! Thin integration layer between the DevCheat library and the Zellij plugin
//! system: it maps Zellij events to library events, runs the resulting
//! actions, and registers the background worker.
//!
//! ```text
//! ┌─────────────────────────┐
//! │   Zellij Main Thread    │
//! │  ┌──────────────────┐   │
//! │  │  State (plugin)  │   │  ← UI state, event handling
//! │  └──────────────────┘   │
//! │          │ IPC          │
//! │          ▼              │
//! │  ┌──────────────────┐   │
//! │  │  DevCheatWorker  │   │  ← Preferences, export writes
//! │  └──────────────────┘   │
//! └─────────────────────────┘
//! ```
//!
//! # Keybindings
//!
//! Global: `Ctrl+n` / `Ctrl+p` move down / up.
//!
//! Normal mode:
//! - `j`/`Down`, `k`/`Up`: move
//! - `Enter`: open the selected sheet
//! - `/`: search
//! - `h`/`Left`/`Esc`: back to the dashboard
//! - `Tab`/`b`: toggle the sidebar
//! - `t`: toggle dark/light
//! - `e`: export the open sheet as Markdown
//! - `q`: close
//!
//! Search mode, typing: characters edit the query, `Backspace` deletes,
//! `Enter` focuses results, `Esc` clears the query and leaves search.
//!
//! Search mode, navigating: `j`/`k` move, `Enter` opens, `/` edits the query,
//! `Esc` clears and leaves.
//!
//! Sidebar: characters edit its name filter, `Backspace` deletes, `Down`/`Up`
//! move, `Enter` opens, `Tab`/`Esc` close.

#![allow(clippy::multiple_crate_versions)]

#[cfg(target_family = "wasm")]
use zellij_tile::prelude::*;

#[cfg(target_family = "wasm")]
register_plugin!(plugin::State);
#[cfg(target_family = "wasm")]
register_worker!(devcheat::worker::DevCheatWorker, devcheat_worker, DEVCHEAT_WORKER);

#[cfg(target_family = "wasm")]
mod plugin {
    use std::collections::BTreeMap;
    use zellij_tile::prelude::*;
    use zellij_tile::shim::post_message_to;

    use devcheat::worker::{WorkerMessage, WorkerResponse};
    use devcheat::{handle_event, Action, AppState, Config, Event, InputMode, SearchFocus};

    /// Plugin state wrapper around the library's `AppState`.
    pub struct State {
        app: AppState,

        /// Worker thread identifier for IPC messaging.
        worker_name: String,
    }

    impl Default for State {
        fn default() -> Self {
            Self {
                app: devcheat::initialize(&Config::default()),
                worker_name: "devcheat".to_string(),
            }
        }
    }

    impl ZellijPlugin for State {
        /// Parses configuration, builds the state, requests permissions and
        /// subscribes to events. Saved preferences are requested once
        /// permissions are granted.
        fn load(&mut self, configuration: BTreeMap<String, String>) {
            let config = Config::from_zellij(&configuration);
            devcheat::observability::init_tracing(&config);

            let _guard = tracing::debug_span!("plugin_load").entered();

            tracing::debug!(config = ?config, "parsed configuration");
            self.app = devcheat::initialize(&config);

            request_permission(&[
                PermissionType::ChangeApplicationState,
                PermissionType::FullHdAccess,
            ]);

            subscribe(&[
                EventType::Key,
                EventType::CustomMessage,
                EventType::PermissionRequestResult,
            ]);

            tracing::debug!("plugin load complete - waiting for permissions");
        }

        fn update(&mut self, event: zellij_tile::prelude::Event) -> bool {
            let event_name = Self::get_event_name(&event);
            let span = tracing::debug_span!("plugin_update_event", event_type = %event_name);
            let _guard = span.entered();

            let our_event = match event {
                zellij_tile::prelude::Event::Key(ref key) => match self.map_key_event(key) {
                    Some(event) => event,
                    None => return false,
                },
                zellij_tile::prelude::Event::CustomMessage(message, payload) => {
                    match self.map_custom_message_event(&message, &payload) {
                        Some(event) => event,
                        None => return false,
                    }
                }
                zellij_tile::prelude::Event::PermissionRequestResult(permissions) => {
                    self.handle_permission_result(permissions);
                    return false;
                }
                _ => return false,
            };

            match handle_event(&mut self.app, &our_event) {
                Ok((should_render, actions)) => {
                    tracing::debug!(action_count = actions.len(), should_render, "event handled");
                    for action in &actions {
                        self.execute_action(action);
                    }
                    should_render
                }
                Err(e) => {
                    tracing::warn!(error = %e, "error handling event");
                    false
                }
            }
        }

        fn render(&mut self, rows: usize, cols: usize) {
            devcheat::ui::render(&self.app, rows, cols);
        }
    }

    impl State {
        fn get_event_name(event: &zellij_tile::prelude::Event) -> String {
            match event {
                zellij_tile::prelude::Event::Key(key) => format!("Key({:?})", key.bare_key),
                zellij_tile::prelude::Event::CustomMessage(msg, _) => format!("CustomMessage({msg})"),
                zellij_tile::prelude::Event::PermissionRequestResult(..) => {
                    "PermissionRequestResult".to_string()
                }
                _ => "Other".to_string(),
            }
        }

        /// Maps keyboard events to application events, per input mode.
        fn map_key_event(&self, key: &KeyWithModifier) -> Option<Event> {
            tracing::trace!(bare_key = ?key.bare_key, "key event");

            if key.bare_key == BareKey::Char('n') && key.has_modifiers(&[KeyModifier::Ctrl]) {
                return Some(Event::KeyDown);
            }
            if key.bare_key == BareKey::Char('p') && key.has_modifiers(&[KeyModifier::Ctrl]) {
                return Some(Event::KeyUp);
            }

            if self.app.nav.is_sidebar_open() {
                return Some(match key.bare_key {
                    BareKey::Down => Event::KeyDown,
                    BareKey::Up => Event::KeyUp,
                    BareKey::Enter => Event::Select,
                    BareKey::Tab | BareKey::Esc => Event::CloseSidebar,
                    BareKey::Backspace => Event::Backspace,
                    BareKey::Char(c) => Event::Char(c),
                    _ => return None,
                });
            }

            Some(match self.app.input_mode {
                InputMode::Search(SearchFocus::Typing) => match key.bare_key {
                    BareKey::Down => Event::KeyDown,
                    BareKey::Up => Event::KeyUp,
                    BareKey::Esc => Event::ExitSearch,
                    BareKey::Enter => Event::FocusResults,
                    BareKey::Backspace => Event::Backspace,
                    BareKey::Char(c) => Event::Char(c),
                    _ => return None,
                },
                InputMode::Search(SearchFocus::Navigating) => match key.bare_key {
                    BareKey::Down | BareKey::Char('j') => Event::KeyDown,
                    BareKey::Up | BareKey::Char('k') => Event::KeyUp,
                    BareKey::Esc => Event::ExitSearch,
                    BareKey::Enter => Event::Select,
                    BareKey::Char('/') | BareKey::Backspace => Event::SearchMode,
                    BareKey::Char('q') => Event::CloseFocus,
                    _ => return None,
                },
                InputMode::Normal => match key.bare_key {
                    BareKey::Down | BareKey::Char('j') => Event::KeyDown,
                    BareKey::Up | BareKey::Char('k') => Event::KeyUp,
                    BareKey::Enter => Event::Select,
                    BareKey::Char('/') => Event::SearchMode,
                    BareKey::Left | BareKey::Esc | BareKey::Char('h') => Event::GoHome,
                    BareKey::Tab | BareKey::Char('b') => Event::ToggleSidebar,
                    BareKey::Char('t') => Event::ToggleTheme,
                    BareKey::Char('e') => Event::Export,
                    BareKey::Char('q') => Event::CloseFocus,
                    _ => return None,
                },
            })
        }

        fn handle_permission_result(&self, permissions: PermissionStatus) {
            match permissions {
                PermissionStatus::Granted => {
                    tracing::debug!("permissions granted - loading preferences");
                    self.post_worker_message(&WorkerMessage::load_preferences());
                }
                PermissionStatus::Denied => {
                    tracing::warn!("permissions denied - theme mode and export unavailable");
                }
            }
        }

        fn map_custom_message_event(&self, message: &str, payload: &str) -> Option<Event> {
            if message != self.worker_name {
                tracing::debug!(message_name = %message, "ignoring custom message with unknown name");
                return None;
            }

            match serde_json::from_str::<WorkerResponse>(payload) {
                Ok(response) => {
                    tracing::debug!(response = ?response, "worker response received");
                    Some(Event::WorkerResponse(response))
                }
                Err(e) => {
                    tracing::warn!(error = %e, "failed to deserialize worker response");
                    None
                }
            }
        }

        /// Serializes `message` as JSON and posts it to the worker.
        fn post_worker_message(&self, message: &WorkerMessage) {
            match serde_json::to_string(message) {
                Ok(payload) => {
                    tracing::debug!(payload_len = payload.len(), "posting message to worker");
                    post_message_to(PluginMessage {
                        worker_name: Some(self.worker_name.clone()),
                        name: self.worker_name.clone(),
                        payload,
                    });
                }
                Err(e) => {
                    tracing::warn!(error = %e, "failed to serialize worker message");
                }
            }
        }

        #[tracing::instrument(level = "debug", skip(self))]
        fn execute_action(&self, action: &Action) {
            match action {
                Action::CloseFocus => hide_self(),
                Action::PostToWorker(message) => self.post_worker_message(message),
            }
        }
    }
}

#[cfg(not(target_family = "wasm"))]
fn main() {
    eprintln!("devcheat is a Zellij plugin; build it with `--target wasm32-wasip1` and load the .wasm in Zellij");
}
