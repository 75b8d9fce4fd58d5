//! Domain events emitted by the Engine for external consumers
//!
//! Events are broadcast after each message processing cycle via
//! `Engine::subscribe()`, so subscribers see a consistent view of state changes.

use skydeck_core::{AppPhase, Page, Phase, Theme, WidgetKind};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineEvent {
    // ─────────────────────────────────────────────────────────
    // Shell
    // ─────────────────────────────────────────────────────────
    /// The effective theme changed
    ThemeChanged { theme: Theme },

    /// The sidebar was expanded or collapsed
    SidebarToggled { expanded: bool },

    /// The content area switched pages
    PageChanged { from: Page, to: Page },

    // ─────────────────────────────────────────────────────────
    // Widgets
    // ─────────────────────────────────────────────────────────
    /// A widget moved through its lifecycle
    WidgetPhaseChanged {
        kind: WidgetKind,
        old_phase: Phase,
        new_phase: Phase,
    },

    // ─────────────────────────────────────────────────────────
    // Application
    // ─────────────────────────────────────────────────────────
    /// The application phase changed
    PhaseChanged {
        old_phase: AppPhase,
        new_phase: AppPhase,
    },

    /// Engine is shutting down
    Shutdown,
}

impl EngineEvent {
    /// Stable label for logging and filtering
    pub fn event_type(&self) -> &'static str {
        match self {
            Self::ThemeChanged { .. } => "theme_changed",
            Self::SidebarToggled { .. } => "sidebar_toggled",
            Self::PageChanged { .. } => "page_changed",
            Self::WidgetPhaseChanged { .. } => "widget_phase_changed",
            Self::PhaseChanged { .. } => "phase_changed",
            Self::Shutdown => "shutdown",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_engine_event_type_labels() {
        assert_eq!(EngineEvent::Shutdown.event_type(), "shutdown");
        assert_eq!(
            EngineEvent::ThemeChanged { theme: Theme::Dark }.event_type(),
            "theme_changed"
        );
        assert_eq!(
            EngineEvent::WidgetPhaseChanged {
                kind: WidgetKind::News,
                old_phase: Phase::Loading,
                new_phase: Phase::Ready,
            }
            .event_type(),
            "widget_phase_changed"
        );
    }
}
