//! Application state (Model in TEA pattern)

use skydeck_core::{AppPhase, Page, Theme};

use crate::board::WidgetBoard;
use crate::config::{IconMode, Settings};
use crate::preferences::PreferenceStore;
use crate::shell::ShellState;

/// Complete application state (the Model in TEA)
#[derive(Debug)]
pub struct AppState {
    /// Current application phase
    pub phase: AppPhase,

    /// Sidebar and theme
    pub shell: ShellState,

    /// Persisted theme preference
    pub prefs: PreferenceStore,

    /// Page shown in the content area
    pub page: Page,

    /// Widget lifecycles and selections
    pub board: WidgetBoard,

    /// Loaded settings
    pub settings: Settings,

    /// Animation frame counter for skeleton shimmer
    pub animation_frame: u64,
}

impl AppState {
    /// Build the initial state. The theme is resolved here, before the
    /// first frame.
    pub fn new(settings: Settings, prefs: PreferenceStore) -> Self {
        let shell = ShellState::init(settings.ui.sidebar_expanded, &prefs);
        Self {
            phase: AppPhase::Running,
            shell,
            prefs,
            page: Page::default(),
            board: WidgetBoard::new(),
            settings,
            animation_frame: 0,
        }
    }

    /// Defaults with a process-local preference store
    pub fn in_memory(system: Option<Theme>) -> Self {
        Self::new(Settings::default(), PreferenceStore::in_memory(system))
    }

    pub fn theme(&self) -> Theme {
        self.shell.theme
    }

    pub fn icons(&self) -> IconMode {
        self.settings.ui.icons
    }

    pub fn tick(&mut self) {
        self.animation_frame = self.animation_frame.wrapping_add(1);
    }

    pub fn request_quit(&mut self) {
        self.phase = AppPhase::Quitting;
    }

    /// Check if the app should quit
    pub fn should_quit(&self) -> bool {
        self.phase == AppPhase::Quitting
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use skydeck_core::Phase;

    #[test]
    fn test_new_state_resolves_theme_and_sidebar() {
        let mut settings = Settings::default();
        settings.ui.sidebar_expanded = false;
        let state = AppState::new(settings, PreferenceStore::in_memory(Some(Theme::Dark)));

        assert_eq!(state.theme(), Theme::Dark);
        assert!(!state.shell.sidebar_expanded);
        assert_eq!(state.page, Page::Dashboard);
        assert_eq!(state.board.phases(), [Phase::Idle; 4]);
    }

    #[test]
    fn test_quit() {
        let mut state = AppState::in_memory(None);
        assert!(!state.should_quit());
        state.request_quit();
        assert!(state.should_quit());
    }
}
