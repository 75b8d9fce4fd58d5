//! Shell chrome state: sidebar and theme

use skydeck_core::prelude::*;
use skydeck_core::Theme;

use crate::preferences::PreferenceStore;

/// Sidebar and theme. The theme mirrors the preference store after every
/// toggle; the sidebar flag is never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShellState {
    pub sidebar_expanded: bool,
    pub theme: Theme,
}

impl ShellState {
    /// Resolve the theme up front so the first frame is already styled.
    pub fn init(sidebar_expanded: bool, prefs: &PreferenceStore) -> Self {
        let theme = prefs.get();
        info!("Shell initialized: theme={}, sidebar_expanded={}", theme, sidebar_expanded);
        Self {
            sidebar_expanded,
            theme,
        }
    }

    pub fn toggle_sidebar(&mut self) {
        self.sidebar_expanded = !self.sidebar_expanded;
    }

    /// Flip the theme and write it through. Returns the new theme.
    pub fn toggle_theme(&mut self, prefs: &mut PreferenceStore) -> Theme {
        self.set_theme(self.theme.toggled(), prefs)
    }

    pub fn set_theme(&mut self, theme: Theme, prefs: &mut PreferenceStore) -> Theme {
        self.theme = theme;
        prefs.set(theme);
        debug!("Theme set to {}", theme);
        theme
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::preferences::{FixedColorScheme, MemoryPreferenceBackend};

    fn prefs_with(backend: &MemoryPreferenceBackend, system: Option<Theme>) -> PreferenceStore {
        PreferenceStore::open(Box::new(backend.clone()), Box::new(FixedColorScheme(system)))
    }

    #[test]
    fn test_init_reads_preference() {
        let backend = MemoryPreferenceBackend::new();
        let prefs = prefs_with(&backend, Some(Theme::Dark));
        let shell = ShellState::init(true, &prefs);
        assert_eq!(shell.theme, Theme::Dark);
        assert!(shell.sidebar_expanded);
    }

    #[test]
    fn test_double_theme_toggle_restores_and_persists_last() {
        let backend = MemoryPreferenceBackend::new();
        let mut prefs = prefs_with(&backend, None);
        let mut shell = ShellState::init(true, &prefs);

        shell.toggle_theme(&mut prefs);
        shell.toggle_theme(&mut prefs);

        assert_eq!(shell.theme, Theme::Light);
        assert_eq!(prefs.get(), Theme::Light);
        assert_eq!(backend.stored(), Some(Theme::Light));
    }

    #[test]
    fn test_theme_mirrors_preference_after_toggle() {
        let backend = MemoryPreferenceBackend::new();
        let mut prefs = prefs_with(&backend, None);
        let mut shell = ShellState::init(false, &prefs);

        let theme = shell.toggle_theme(&mut prefs);
        assert_eq!(theme, Theme::Dark);
        assert_eq!(shell.theme, prefs.get());
    }

    #[test]
    fn test_sidebar_toggle_is_independent_of_theme() {
        let backend = MemoryPreferenceBackend::new();
        let prefs = prefs_with(&backend, Some(Theme::Dark));
        let mut shell = ShellState::init(true, &prefs);

        shell.toggle_sidebar();
        assert!(!shell.sidebar_expanded);
        assert_eq!(shell.theme, Theme::Dark);

        shell.toggle_sidebar();
        assert!(shell.sidebar_expanded);
        assert_eq!(shell.theme, Theme::Dark);
        assert_eq!(backend.writes(), 0);
    }

    #[test]
    fn test_theme_toggle_leaves_sidebar_alone() {
        let backend = MemoryPreferenceBackend::new();
        let mut prefs = prefs_with(&backend, None);
        let mut shell = ShellState::init(false, &prefs);

        shell.toggle_theme(&mut prefs);
        assert!(!shell.sidebar_expanded);
    }
}
