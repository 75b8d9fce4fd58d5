//! Main update function - handles state transitions (TEA pattern)

use skydeck_core::prelude::*;
use skydeck_core::{NewsCategory, TimeRange};

use super::{keys, UpdateAction, UpdateResult};
use crate::message::Message;
use crate::state::AppState;

/// Process a message and update state
/// Returns an optional follow-up message and an optional action
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::Key(key) => match keys::handle_key(state, key) {
            Some(msg) => UpdateResult::message(msg),
            None => UpdateResult::none(),
        },

        Message::Tick => {
            state.tick();
            UpdateResult::none()
        }

        Message::Quit => {
            info!("Quit requested");
            state.request_quit();
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Shell
        // ─────────────────────────────────────────────────────────
        Message::ToggleSidebar => {
            state.shell.toggle_sidebar();
            UpdateResult::none()
        }

        Message::ToggleTheme => {
            let theme = state.shell.toggle_theme(&mut state.prefs);
            info!("Theme toggled to {}", theme);
            UpdateResult::none()
        }

        Message::SetTheme(theme) => {
            state.shell.set_theme(theme, &mut state.prefs);
            UpdateResult::none()
        }

        Message::Navigate(page) => {
            if page == state.page && !state.board.mounted().is_empty() {
                return UpdateResult::none();
            }
            debug!("Navigating {:?} -> {:?}", state.page, page);
            state.page = page;

            let ended = state.board.unmount_all();
            if ended.is_empty() {
                UpdateResult::message(Message::MountPage)
            } else {
                UpdateResult::action_then(
                    UpdateAction::CancelFetches { mounts: ended },
                    Message::MountPage,
                )
            }
        }

        // ─────────────────────────────────────────────────────────
        // Widget Lifecycle
        // ─────────────────────────────────────────────────────────
        Message::MountPage => {
            let mounts: Vec<_> = state
                .page
                .widgets()
                .iter()
                .map(|kind| state.board.mount(*kind))
                .collect();
            debug!("Mounted {} widget(s) for {:?}", mounts.len(), state.page);
            UpdateResult::action(UpdateAction::FetchWidgets { mounts })
        }

        Message::WidgetLoaded { mount, result } => {
            let failed = result.is_err();
            if state.board.apply(mount, result) {
                debug!(
                    "{} is now {:?}{}",
                    mount,
                    state.board.phase(mount.kind),
                    if failed { " (provider unavailable)" } else { "" }
                );
            }
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Widget Selections
        // ─────────────────────────────────────────────────────────
        Message::SetActiveCategory(category) => set_category(state, category),

        Message::NextCategory => {
            let category = state.board.news_category().next();
            set_category(state, category)
        }

        Message::PrevCategory => {
            let category = state.board.news_category().prev();
            set_category(state, category)
        }

        Message::SetTimeRange(range) => set_range(state, range),

        Message::NextTimeRange => {
            let range = state.board.time_range().next();
            set_range(state, range)
        }

        Message::PrevTimeRange => {
            let range = state.board.time_range().prev();
            set_range(state, range)
        }
    }
}

fn set_category(state: &mut AppState, category: NewsCategory) -> UpdateResult {
    if state.board.set_active_category(category) {
        trace!("News category set to {}", category);
    }
    UpdateResult::none()
}

fn set_range(state: &mut AppState, range: TimeRange) -> UpdateResult {
    if state.board.set_time_range(range) {
        trace!("Finance range set to {}", range);
    }
    UpdateResult::none()
}
