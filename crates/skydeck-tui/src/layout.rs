//! Screen layout definitions for the TUI
//!
//! Sidebar on the left, header across the top of the content column, page
//! body below it.

use ratatui::layout::{Constraint, Layout, Rect};

pub const SIDEBAR_EXPANDED_WIDTH: u16 = 22;
pub const SIDEBAR_COLLAPSED_WIDTH: u16 = 5;
pub const HEADER_HEIGHT: u16 = 3;
pub const KPI_HEIGHT: u16 = 4;

/// Screen areas for the main layout
#[derive(Debug, Clone, Copy)]
pub struct ScreenAreas {
    pub sidebar: Rect,
    pub header: Rect,
    pub content: Rect,
}

/// Dashboard page areas: KPI row over a two-by-two card grid
#[derive(Debug, Clone, Copy)]
pub struct DashboardAreas {
    pub kpis: Rect,
    pub weather: Rect,
    pub finance: Rect,
    pub news: Rect,
    pub activity: Rect,
}

pub fn sidebar_width(expanded: bool) -> u16 {
    if expanded {
        SIDEBAR_EXPANDED_WIDTH
    } else {
        SIDEBAR_COLLAPSED_WIDTH
    }
}

/// Split the screen around a sidebar of the given state
pub fn create(area: Rect, sidebar_expanded: bool) -> ScreenAreas {
    let [sidebar, main] = Layout::horizontal([
        Constraint::Length(sidebar_width(sidebar_expanded)),
        Constraint::Min(0),
    ])
    .areas(area);

    let [header, content] =
        Layout::vertical([Constraint::Length(HEADER_HEIGHT), Constraint::Min(0)]).areas(main);

    ScreenAreas {
        sidebar,
        header,
        content,
    }
}

pub fn dashboard(content: Rect) -> DashboardAreas {
    let [kpis, top, bottom] = Layout::vertical([
        Constraint::Length(KPI_HEIGHT),
        Constraint::Percentage(50),
        Constraint::Percentage(50),
    ])
    .areas(content);

    // 3:7 / 4:7 columns
    let columns = [Constraint::Ratio(3, 7), Constraint::Ratio(4, 7)];
    let [weather, finance] = Layout::horizontal(columns).areas(top);
    let [news, activity] = Layout::horizontal(columns).areas(bottom);

    DashboardAreas {
        kpis,
        weather,
        finance,
        news,
        activity,
    }
}
