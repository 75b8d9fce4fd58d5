//! Header bar
//!
//! Page title with its subtitle on the left; theme indicator, keybinding
//! hints and the widget status strip on the right.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Widget},
};

use skydeck_core::{Page, Phase, Theme, WidgetKind};

use crate::theme::{icons::IconSet, styles, Palette};

pub struct MainHeader<'a> {
    page: Page,
    theme: Theme,
    sidebar_expanded: bool,
    phases: [Phase; 4],
    palette: &'a Palette,
    icons: IconSet,
}

impl<'a> MainHeader<'a> {
    pub fn new(page: Page, theme: Theme, palette: &'a Palette, icons: IconSet) -> Self {
        Self {
            page,
            theme,
            sidebar_expanded: true,
            phases: [Phase::Idle; 4],
            palette,
            icons,
        }
    }

    pub fn sidebar_expanded(mut self, expanded: bool) -> Self {
        self.sidebar_expanded = expanded;
        self
    }

    /// Phases in `WidgetKind::ALL` order
    pub fn phases(mut self, phases: [Phase; 4]) -> Self {
        self.phases = phases;
        self
    }

    pub fn title(page: Page) -> &'static str {
        match page {
            Page::Dashboard => "Dashboard Overview",
            Page::Finance => "Finance",
            Page::Weather => "Weather",
            Page::News => "News",
        }
    }

    pub fn subtitle(page: Page) -> &'static str {
        match page {
            Page::Dashboard => "Welcome to your analytics dashboard",
            Page::Finance => "Market performance at a glance",
            Page::Weather => "Current conditions and forecast",
            Page::News => "Headlines by category",
        }
    }

    fn hints_line(&self) -> Line<'static> {
        let p = self.palette;
        let sidebar_hint = if self.sidebar_expanded {
            "collapse"
        } else {
            "expand"
        };
        let theme_label = match self.theme {
            Theme::Light => "Light",
            Theme::Dark => "Dark",
        };

        Line::from(vec![
            Span::styled(self.icons.theme(self.theme), styles::accent(p)),
            Span::styled(format!(" {theme_label}"), styles::text_primary(p)),
            Span::styled("   b", styles::keybinding(p)),
            Span::styled(format!(" {sidebar_hint}"), styles::text_muted(p)),
            Span::styled("  t", styles::keybinding(p)),
            Span::styled(" theme", styles::text_muted(p)),
            Span::styled("  q", styles::keybinding(p)),
            Span::styled(" quit ", styles::text_muted(p)),
        ])
    }

    /// Status dot per widget hosted on the current page
    fn status_line(&self) -> Line<'static> {
        let p = self.palette;
        let mut spans = Vec::new();
        for (kind, phase) in WidgetKind::ALL.iter().zip(self.phases) {
            if !self.page.widgets().contains(kind) {
                continue;
            }
            let (icon, _label, style) = styles::phase_indicator(phase, p);
            spans.push(Span::styled(icon, style));
            spans.push(Span::styled(format!(" {}  ", kind), styles::text_muted(p)));
        }
        Line::from(spans)
    }
}

impl Widget for MainHeader<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let p = self.palette;
        let block = Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Style::default().fg(p.border))
            .style(Style::default().bg(p.background));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let title = Line::from(vec![
            Span::raw(" "),
            Span::styled(Self::title(self.page), styles::heading(p)),
        ]);
        let hints = self.hints_line();
        let fits = title.width() + hints.width() < inner.width as usize;
        let row = Rect::new(inner.x, inner.y, inner.width, 1);
        title.render(row, buf);
        if fits {
            hints.right_aligned().render(row, buf);
        }

        if inner.height >= 2 {
            let row = Rect::new(inner.x, inner.y + 1, inner.width, 1);
            let subtitle = Line::from(vec![
                Span::raw(" "),
                Span::styled(Self::subtitle(self.page), styles::text_muted(p)),
            ]);
            let status = self.status_line();
            let fits = subtitle.width() + status.width() < inner.width as usize;
            subtitle.render(row, buf);
            if fits {
                status.right_aligned().render(row, buf);
            }
        }
    }
}
