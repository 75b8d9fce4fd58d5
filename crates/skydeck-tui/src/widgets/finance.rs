//! Stock market card: quote, range selector, price chart and stats

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::Style,
    symbols,
    text::{Line, Span},
    widgets::{Axis, Chart, Dataset, GraphType, Paragraph, Widget},
};

use skydeck_core::{FinancePayload, Phase, TimeRange, WidgetKind, WidgetState};

use super::card::{self, Skeleton, Unavailable};
use crate::theme::{icons::IconSet, styles, Palette};

pub struct FinanceCard<'a> {
    state: &'a WidgetState<FinancePayload>,
    range: TimeRange,
    palette: &'a Palette,
    icons: IconSet,
    frame: u64,
}

impl<'a> FinanceCard<'a> {
    pub fn new(
        state: &'a WidgetState<FinancePayload>,
        range: TimeRange,
        palette: &'a Palette,
        icons: IconSet,
        frame: u64,
    ) -> Self {
        Self {
            state,
            range,
            palette,
            icons,
            frame,
        }
    }

    /// `1D 1W 1M 1Y` with the active range highlighted
    fn range_selector(&self) -> Line<'static> {
        let mut spans = Vec::with_capacity(TimeRange::ALL.len() * 2);
        for range in TimeRange::ALL {
            let style = if range == self.range {
                styles::selected(self.palette)
            } else {
                styles::text_muted(self.palette)
            };
            spans.push(Span::styled(format!(" {} ", range.label()), style));
        }
        spans.push(Span::raw(" "));
        Line::from(spans)
    }

    fn quote_lines(&self, quote: &FinancePayload) -> Vec<Line<'static>> {
        let p = self.palette;
        let up = quote.is_positive();
        let sign = if quote.change >= 0.0 { "+" } else { "" };

        vec![
            Line::from(vec![
                Span::styled(quote.symbol.clone(), styles::heading(p)),
                Span::raw("  "),
                Span::styled(quote.name.clone(), styles::text_secondary(p)),
            ]),
            Line::from(vec![
                Span::styled(format!("${:.2}", quote.current_price), styles::heading(p)),
                Span::raw("  "),
                Span::styled(self.icons.trend(up), styles::trend(p, up)),
                Span::styled(
                    format!(
                        " {sign}{:.2} ({sign}{:.2}%)",
                        quote.change, quote.change_percentage
                    ),
                    styles::trend(p, up),
                ),
            ]),
        ]
    }

    fn stats_line(&self, quote: &FinancePayload) -> Line<'static> {
        let p = self.palette;
        let mut spans = Vec::new();
        for (label, value) in [
            ("Market Cap", quote.market_cap.clone()),
            ("Volume", format_volume(quote.volume)),
            ("High", format!("{:.2}", quote.high)),
            ("Low", format!("{:.2}", quote.low)),
        ] {
            spans.push(Span::styled(format!("{label} "), styles::text_muted(p)));
            spans.push(Span::styled(format!("{value}   "), styles::text_primary(p)));
        }
        Line::from(spans)
    }

    fn render_chart(&self, quote: &FinancePayload, area: Rect, buf: &mut Buffer) {
        let Some((low, high)) = quote.price_bounds() else {
            return;
        };
        if area.height < 2 {
            return;
        }
        let p = self.palette;
        let points: Vec<(f64, f64)> = quote
            .historical_data
            .iter()
            .enumerate()
            .map(|(i, point)| (i as f64, point.price))
            .collect();
        let pad = ((high - low) * 0.1).max(0.5);
        let last = points.len().saturating_sub(1).max(1) as f64;

        let dataset = Dataset::default()
            .marker(symbols::Marker::Braille)
            .graph_type(GraphType::Line)
            .style(styles::trend(p, quote.is_positive()))
            .data(&points);

        let labels: Vec<Line> = match (quote.historical_data.first(), quote.historical_data.last())
        {
            (Some(first), Some(last)) if quote.historical_data.len() > 1 => vec![
                Line::from(first.date.clone()),
                Line::from(last.date.clone()),
            ],
            _ => Vec::new(),
        };

        Chart::new(vec![dataset])
            .style(Style::default().bg(p.surface))
            .x_axis(
                Axis::default()
                    .bounds([0.0, last])
                    .labels(labels)
                    .style(styles::text_muted(p)),
            )
            .y_axis(
                Axis::default()
                    .bounds([low - pad, high + pad])
                    .labels(vec![
                        Line::from(format!("{:.0}", low)),
                        Line::from(format!("{:.0}", high)),
                    ])
                    .style(styles::text_muted(p)),
            )
            .render(area, buf);
    }
}

impl Widget for FinanceCard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let kind = WidgetKind::Finance;
        let trailing = (self.state.phase() == Phase::Ready).then(|| self.range_selector());
        let inner = card::render_frame(
            area,
            buf,
            self.palette,
            self.icons.finance(),
            kind.title(),
            trailing,
        );
        if inner.height == 0 || inner.width == 0 {
            return;
        }

        match (self.state.phase(), self.state.data()) {
            (Phase::Ready, Some(quote)) => {
                let [quote_area, _, chart_area, stats_area] = Layout::vertical([
                    Constraint::Length(2),
                    Constraint::Length(1),
                    Constraint::Min(0),
                    Constraint::Length(1),
                ])
                .areas(inner);

                Paragraph::new(self.quote_lines(quote)).render(quote_area, buf);
                self.render_chart(quote, chart_area, buf);
                Paragraph::new(self.stats_line(quote)).render(stats_area, buf);
            }
            (Phase::Failed, _) => {
                Unavailable::new(self.palette, self.icons, kind).render(inner, buf);
            }
            _ => Skeleton::new(self.palette, kind, self.frame).render(inner, buf),
        }
    }
}

/// Compact share volume: `54.3M`, `812.0K`
pub fn format_volume(volume: u64) -> String {
    match volume {
        v if v >= 1_000_000_000 => format!("{:.1}B", v as f64 / 1e9),
        v if v >= 1_000_000 => format!("{:.1}M", v as f64 / 1e6),
        v if v >= 1_000 => format!("{:.1}K", v as f64 / 1e3),
        v => v.to_string(),
    }
}
