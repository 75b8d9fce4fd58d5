//! User activity card: users over the day as a line chart

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::Style,
    symbols,
    text::{Line, Span},
    widgets::{Axis, Chart, Dataset, GraphType, Paragraph, Widget},
};

use skydeck_core::{ActivityPayload, Phase, WidgetKind, WidgetState};

use super::card::{self, Skeleton, Unavailable};
use crate::theme::{icons::IconSet, styles, Palette};

pub struct ActivityCard<'a> {
    state: &'a WidgetState<ActivityPayload>,
    palette: &'a Palette,
    icons: IconSet,
    frame: u64,
}

impl<'a> ActivityCard<'a> {
    pub fn new(
        state: &'a WidgetState<ActivityPayload>,
        palette: &'a Palette,
        icons: IconSet,
        frame: u64,
    ) -> Self {
        Self {
            state,
            palette,
            icons,
            frame,
        }
    }

    fn summary(&self, activity: &ActivityPayload) -> Line<'static> {
        let p = self.palette;
        match activity.peak() {
            Some(peak) => Line::from(vec![
                Span::styled(self.icons.users(), styles::accent(p)),
                Span::styled(" Peak ", styles::text_muted(p)),
                Span::styled(format!("{} users", peak.users), styles::heading(p)),
                Span::styled(format!(" at {}", peak.time), styles::text_muted(p)),
            ]),
            None => Line::default(),
        }
    }

    fn render_chart(&self, activity: &ActivityPayload, area: Rect, buf: &mut Buffer) {
        if activity.points.is_empty() || area.height < 2 {
            return;
        }
        let p = self.palette;
        let points: Vec<(f64, f64)> = activity
            .points
            .iter()
            .enumerate()
            .map(|(i, point)| (i as f64, point.users as f64))
            .collect();
        let peak = activity.peak().map(|pt| pt.users).unwrap_or(0) as f64;
        let top = (peak * 1.1).max(1.0);
        let last = points.len().saturating_sub(1).max(1) as f64;

        let mut x_labels = Vec::new();
        if let (Some(first), Some(end)) = (activity.points.first(), activity.points.last()) {
            x_labels.push(Line::from(first.time.clone()));
            if activity.points.len() > 2 {
                x_labels.push(Line::from(activity.points[activity.points.len() / 2].time.clone()));
            }
            if activity.points.len() > 1 {
                x_labels.push(Line::from(end.time.clone()));
            }
        }

        let dataset = Dataset::default()
            .marker(symbols::Marker::Braille)
            .graph_type(GraphType::Line)
            .style(styles::accent(p))
            .data(&points);

        Chart::new(vec![dataset])
            .style(Style::default().bg(p.surface))
            .x_axis(
                Axis::default()
                    .bounds([0.0, last])
                    .labels(x_labels)
                    .style(styles::text_muted(p)),
            )
            .y_axis(
                Axis::default()
                    .bounds([0.0, top])
                    .labels(vec![Line::from("0"), Line::from(format!("{:.0}", peak))])
                    .style(styles::text_muted(p)),
            )
            .render(area, buf);
    }
}

impl Widget for ActivityCard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let kind = WidgetKind::Activity;
        let inner = card::render_frame(
            area,
            buf,
            self.palette,
            self.icons.activity(),
            kind.title(),
            None,
        );
        if inner.height == 0 || inner.width == 0 {
            return;
        }

        match (self.state.phase(), self.state.data()) {
            (Phase::Ready, Some(activity)) => {
                let [summary, chart] =
                    Layout::vertical([Constraint::Length(2), Constraint::Min(0)]).areas(inner);
                Paragraph::new(self.summary(activity)).render(summary, buf);
                self.render_chart(activity, chart, buf);
            }
            (Phase::Failed, _) => {
                Unavailable::new(self.palette, self.icons, kind).render(inner, buf);
            }
            _ => Skeleton::new(self.palette, kind, self.frame).render(inner, buf),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;
    use skydeck_app::config::IconMode;
    use skydeck_app::provider::mock::sample_activity;
    use skydeck_core::ErrorInfo;

    fn icons() -> IconSet {
        IconSet::new(IconMode::Unicode)
    }

    #[test]
    fn test_ready_shows_peak_and_axis() {
        let mut state = WidgetState::new();
        assert!(state.begin_loading());
        assert!(state.complete(Ok(sample_activity())));

        let mut term = TestTerminal::with_size(60, 14);
        term.render_widget(ActivityCard::new(&state, &Palette::DARK, icons(), 0), term.area());

        assert!(term.buffer_contains("User Activity"));
        assert!(term.buffer_contains("Peak 780 users at 15:00"));
        assert!(term.buffer_contains("00:00"));
        assert!(term.buffer_contains("21:00"));
    }

    #[test]
    fn test_failed_shows_notice() {
        let mut state = WidgetState::<ActivityPayload>::new();
        assert!(state.begin_loading());
        assert!(state.complete(Err(ErrorInfo::unavailable())));

        let mut term = TestTerminal::with_size(60, 14);
        term.render_widget(ActivityCard::new(&state, &Palette::DARK, icons(), 0), term.area());

        assert!(term.buffer_contains("Unable to load activity data."));
        assert!(!term.buffer_contains("Peak"));
    }
}
