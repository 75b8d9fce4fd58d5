//! Message types for the application (TEA pattern)

use skydeck_core::{ErrorInfo, NewsCategory, Page, Theme, TimeRange, WidgetData};

use crate::input_key::InputKey;
use crate::widget::MountId;

/// All possible messages/actions in the application
#[derive(Debug, Clone)]
pub enum Message {
    /// Keyboard event from terminal
    Key(InputKey),

    /// Tick event for periodic updates (spinner animation)
    Tick,

    /// Quit (q, Esc, Ctrl+C, signal handler)
    Quit,

    // ─────────────────────────────────────────────────────────
    // Shell
    // ─────────────────────────────────────────────────────────
    /// Collapse/expand the sidebar
    ToggleSidebar,

    /// Flip light/dark and persist the choice
    ToggleTheme,

    /// Apply an explicit theme (e.g. `--theme` on the command line)
    SetTheme(Theme),

    /// Switch page; every widget is remounted
    Navigate(Page),

    // ─────────────────────────────────────────────────────────
    // Widget Lifecycle
    // ─────────────────────────────────────────────────────────
    /// Mount the widgets of the current page
    MountPage,

    /// A fetch issued for `mount` finished
    WidgetLoaded {
        mount: MountId,
        result: Result<WidgetData, ErrorInfo>,
    },

    // ─────────────────────────────────────────────────────────
    // Widget Selections
    // ─────────────────────────────────────────────────────────
    SetActiveCategory(NewsCategory),

    NextCategory,

    PrevCategory,

    SetTimeRange(TimeRange),

    NextTimeRange,

    PrevTimeRange,
}
