//! # Shell & Widget Domain Types
//!
//! Shared vocabulary between `skydeck-app` (state machines, providers) and
//! `skydeck-tui` (rendering):
//! - [`Theme`] - the global light/dark visual mode
//! - [`WidgetKind`] - one of the four independently loading panels
//! - [`Phase`] / [`WidgetState`] - a widget's data lifecycle
//! - [`Page`] - the sidebar navigation targets

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

// ── Theme ────────────────────────────────────────────────────────────────────

/// Global visual mode persisted under the `theme` preference key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// The other mode.
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Persisted string form (`"light"` or `"dark"`).
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(format!("unknown theme '{other}'")),
        }
    }
}

// ── AppPhase ─────────────────────────────────────────────────────────────────

/// Application lifecycle phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppPhase {
    #[default]
    Running,
    Quitting,
}

// ── WidgetKind ───────────────────────────────────────────────────────────────

/// One of the dashboard's independently loading panels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum WidgetKind {
    Weather,
    Finance,
    News,
    Activity,
}

impl WidgetKind {
    pub const ALL: [WidgetKind; 4] = [
        WidgetKind::Weather,
        WidgetKind::Finance,
        WidgetKind::News,
        WidgetKind::Activity,
    ];

    /// Card title
    pub fn title(self) -> &'static str {
        match self {
            WidgetKind::Weather => "Weather",
            WidgetKind::Finance => "Stock Market",
            WidgetKind::News => "Latest News",
            WidgetKind::Activity => "User Activity",
        }
    }

    /// Noun used in the unavailability notice
    pub fn domain(self) -> &'static str {
        match self {
            WidgetKind::Weather => "weather",
            WidgetKind::Finance => "stock",
            WidgetKind::News => "news",
            WidgetKind::Activity => "activity",
        }
    }
}

impl fmt::Display for WidgetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            WidgetKind::Weather => "weather",
            WidgetKind::Finance => "finance",
            WidgetKind::News => "news",
            WidgetKind::Activity => "activity",
        };
        f.write_str(name)
    }
}

// ── Page ─────────────────────────────────────────────────────────────────────

/// Sidebar navigation targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Page {
    #[default]
    Dashboard,
    Finance,
    Weather,
    News,
}

impl Page {
    pub const ALL: [Page; 4] = [Page::Dashboard, Page::Finance, Page::Weather, Page::News];

    pub fn label(self) -> &'static str {
        match self {
            Page::Dashboard => "Dashboard",
            Page::Finance => "Finance",
            Page::Weather => "Weather",
            Page::News => "News",
        }
    }

    /// Widgets mounted while this page is shown, in layout order
    pub fn widgets(self) -> &'static [WidgetKind] {
        match self {
            Page::Dashboard => &WidgetKind::ALL,
            Page::Finance => &[WidgetKind::Finance],
            Page::Weather => &[WidgetKind::Weather],
            Page::News => &[WidgetKind::News],
        }
    }

    /// Page bound to a number key (`1`-`4`)
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub fn index(self) -> usize {
        Self::ALL.iter().position(|p| *p == self).unwrap_or(0)
    }
}

// ── Phase / WidgetState ──────────────────────────────────────────────────────

/// Lifecycle state of a widget's data request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Loading,
    Ready,
    Failed,
}

impl Phase {
    /// `Ready` and `Failed` end a mount's lifecycle.
    pub fn is_terminal(self) -> bool {
        matches!(self, Phase::Ready | Phase::Failed)
    }

    /// Skeleton placeholders are drawn in these phases.
    pub fn shows_placeholder(self) -> bool {
        matches!(self, Phase::Idle | Phase::Loading)
    }
}

/// Generic unavailability descriptor. Provider detail is not carried.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ErrorInfo {
    _unavailable: (),
}

impl ErrorInfo {
    pub fn unavailable() -> Self {
        Self { _unavailable: () }
    }
}

impl fmt::Display for ErrorInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("data unavailable")
    }
}

#[derive(Debug, Clone, PartialEq)]
enum Slot<T> {
    Idle,
    Loading,
    Ready(T),
    Failed(ErrorInfo),
}

/// Per-widget lifecycle: `Idle -> Loading -> Ready | Failed`.
///
/// Data is present only while `Ready` and the error only while `Failed`;
/// the private slot makes any other combination unrepresentable.
#[derive(Debug, Clone, PartialEq)]
pub struct WidgetState<T> {
    slot: Slot<T>,
}

impl<T> Default for WidgetState<T> {
    fn default() -> Self {
        Self { slot: Slot::Idle }
    }
}

impl<T> WidgetState<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> Phase {
        match self.slot {
            Slot::Idle => Phase::Idle,
            Slot::Loading => Phase::Loading,
            Slot::Ready(_) => Phase::Ready,
            Slot::Failed(_) => Phase::Failed,
        }
    }

    pub fn data(&self) -> Option<&T> {
        match &self.slot {
            Slot::Ready(data) => Some(data),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&ErrorInfo> {
        match &self.slot {
            Slot::Failed(err) => Some(err),
            _ => None,
        }
    }

    pub fn is_ready(&self) -> bool {
        matches!(self.slot, Slot::Ready(_))
    }

    /// `Idle -> Loading`. Returns `false` (and changes nothing) from any
    /// other phase.
    #[must_use]
    pub fn begin_loading(&mut self) -> bool {
        if matches!(self.slot, Slot::Idle) {
            self.slot = Slot::Loading;
            true
        } else {
            false
        }
    }

    /// `Loading -> Ready | Failed`. A completion outside `Loading` is ignored.
    #[must_use]
    pub fn complete(&mut self, outcome: Result<T, ErrorInfo>) -> bool {
        if !matches!(self.slot, Slot::Loading) {
            return false;
        }
        self.slot = match outcome {
            Ok(data) => Slot::Ready(data),
            Err(err) => Slot::Failed(err),
        };
        true
    }

    /// Back to `Idle`, dropping any data or error.
    pub fn reset(&mut self) {
        self.slot = Slot::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_toggle_round_trips() {
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Light.toggled().toggled(), Theme::Light);
    }

    #[test]
    fn test_theme_parsing() {
        assert_eq!("dark".parse::<Theme>(), Ok(Theme::Dark));
        assert_eq!(" Light ".parse::<Theme>(), Ok(Theme::Light));
        assert!("sepia".parse::<Theme>().is_err());
        assert_eq!(Theme::Dark.to_string(), "dark");
    }

    #[test]
    fn test_page_widgets() {
        assert_eq!(Page::Dashboard.widgets().len(), 4);
        assert_eq!(Page::News.widgets(), &[WidgetKind::News]);
        assert_eq!(Page::from_index(1), Some(Page::Finance));
        assert_eq!(Page::from_index(4), None);
        assert_eq!(Page::Weather.index(), 2);
    }

    #[test]
    fn test_widget_state_success_sequence() {
        let mut state: WidgetState<u32> = WidgetState::new();
        let mut seen = vec![state.phase()];

        assert!(state.begin_loading());
        seen.push(state.phase());
        assert!(state.complete(Ok(7)));
        seen.push(state.phase());

        assert_eq!(seen, vec![Phase::Idle, Phase::Loading, Phase::Ready]);
        assert_eq!(state.data(), Some(&7));
        assert!(state.error().is_none());
    }

    #[test]
    fn test_widget_state_failure_has_no_data() {
        let mut state: WidgetState<u32> = WidgetState::new();
        assert!(state.begin_loading());
        assert!(state.complete(Err(ErrorInfo::unavailable())));

        assert_eq!(state.phase(), Phase::Failed);
        assert!(state.data().is_none());
        assert_eq!(state.error(), Some(&ErrorInfo::unavailable()));
    }

    #[test]
    fn test_widget_state_cannot_skip_loading() {
        let mut state: WidgetState<u32> = WidgetState::new();
        assert!(!state.complete(Ok(1)));
        assert_eq!(state.phase(), Phase::Idle);
    }

    #[test]
    fn test_widget_state_single_completion() {
        let mut state: WidgetState<u32> = WidgetState::new();
        assert!(state.begin_loading());
        assert!(state.complete(Ok(1)));
        assert!(!state.complete(Ok(2)));
        assert!(!state.begin_loading());
        assert_eq!(state.data(), Some(&1));
    }

    #[test]
    fn test_widget_state_reset_restarts_from_idle() {
        let mut state: WidgetState<u32> = WidgetState::new();
        assert!(state.begin_loading());
        assert!(state.complete(Err(ErrorInfo::unavailable())));
        state.reset();
        assert_eq!(state.phase(), Phase::Idle);
        assert!(state.error().is_none());
        assert!(state.begin_loading());
    }
}
