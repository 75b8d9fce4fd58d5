//! Overview KPI tiles at the top of the dashboard

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::theme::{styles, Palette};

/// One headline number with its comparison note
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Kpi {
    pub label: &'static str,
    pub value: &'static str,
    pub delta: &'static str,
    pub up: bool,
}

pub const OVERVIEW: [Kpi; 4] = [
    Kpi {
        label: "Total Users",
        value: "12,345",
        delta: "+12% from last month",
        up: true,
    },
    Kpi {
        label: "Active Sessions",
        value: "723",
        delta: "+5% from yesterday",
        up: true,
    },
    Kpi {
        label: "Conversion Rate",
        value: "3.2%",
        delta: "+0.5% from last week",
        up: true,
    },
    Kpi {
        label: "Average Time",
        value: "7m 32s",
        delta: "-2% from last week",
        up: false,
    },
];

pub struct KpiRow<'a> {
    palette: &'a Palette,
}

impl<'a> KpiRow<'a> {
    pub fn new(palette: &'a Palette) -> Self {
        Self { palette }
    }
}

impl Widget for KpiRow<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let p = self.palette;
        let tiles = Layout::horizontal([Constraint::Ratio(1, 4); 4]).split(area);

        for (kpi, tile) in OVERVIEW.iter().zip(tiles.iter()) {
            let block = styles::card_block(p, false).title(Line::from(Span::styled(
                format!(" {} ", kpi.label),
                styles::text_muted(p),
            )));
            let inner = block.inner(*tile);
            block.render(*tile, buf);

            Paragraph::new(vec![
                Line::from(Span::styled(kpi.value, styles::heading(p))),
                Line::from(Span::styled(kpi.delta, styles::trend(p, kpi.up))),
            ])
            .render(
                Rect::new(inner.x + 1, inner.y, inner.width.saturating_sub(1), inner.height),
                buf,
            );
        }
    }
}
