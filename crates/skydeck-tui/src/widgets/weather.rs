//! Weather card: current conditions and the forecast strip

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use skydeck_core::{Condition, Phase, WeatherPayload, WidgetKind, WidgetState};

use super::card::{self, Skeleton, Unavailable};
use crate::theme::{icons::IconSet, styles, Palette};

pub struct WeatherCard<'a> {
    state: &'a WidgetState<WeatherPayload>,
    palette: &'a Palette,
    icons: IconSet,
    frame: u64,
}

impl<'a> WeatherCard<'a> {
    pub fn new(
        state: &'a WidgetState<WeatherPayload>,
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

    fn current_lines(&self, weather: &WeatherPayload) -> Vec<Line<'static>> {
        let p = self.palette;
        let condition = Condition::classify(&weather.condition);

        vec![
            Line::from(Span::styled(weather.location.clone(), styles::text_secondary(p))),
            Line::from(vec![
                Span::styled(
                    format!("{:.0}°F", weather.temperature),
                    styles::heading(p).add_modifier(Modifier::BOLD),
                ),
                Span::raw("  "),
                Span::styled(self.icons.condition(condition), styles::accent(p)),
                Span::raw(" "),
                Span::styled(weather.condition.clone(), styles::text_primary(p)),
            ]),
            Line::from(vec![
                Span::styled(self.icons.wind(), styles::text_muted(p)),
                Span::styled(
                    format!(" Wind {:.0} mph", weather.wind_speed),
                    styles::text_secondary(p),
                ),
                Span::raw("   "),
                Span::styled(self.icons.humidity(), styles::text_muted(p)),
                Span::styled(
                    format!(" Humidity {:.0}%", weather.humidity),
                    styles::text_secondary(p),
                ),
            ]),
        ]
    }

    fn render_forecast(&self, weather: &WeatherPayload, area: Rect, buf: &mut Buffer) {
        if weather.forecast.is_empty() || area.height == 0 {
            return;
        }
        let p = self.palette;
        let columns = Layout::horizontal(
            weather
                .forecast
                .iter()
                .map(|_| Constraint::Ratio(1, weather.forecast.len() as u32)),
        )
        .split(area);

        for (day, column) in weather.forecast.iter().zip(columns.iter()) {
            let icon = self.icons.condition(Condition::classify(&day.condition));
            Paragraph::new(vec![
                Line::from(Span::styled(day.date.clone(), styles::text_muted(p))),
                Line::from(Span::styled(icon, styles::accent(p))),
                Line::from(Span::styled(
                    format!("{:.0}°", day.temperature),
                    styles::text_primary(p),
                )),
            ])
            .centered()
            .render(*column, buf);
        }
    }
}

impl Widget for WeatherCard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let kind = WidgetKind::Weather;
        let inner = card::render_frame(
            area,
            buf,
            self.palette,
            self.icons.weather(),
            kind.title(),
            None,
        );
        if inner.height == 0 || inner.width == 0 {
            return;
        }

        match (self.state.phase(), self.state.data()) {
            (Phase::Ready, Some(weather)) => {
                let [current, _, forecast] = Layout::vertical([
                    Constraint::Length(3),
                    Constraint::Length(1),
                    Constraint::Min(0),
                ])
                .areas(inner);

                Paragraph::new(self.current_lines(weather)).render(current, buf);
                self.render_forecast(weather, forecast, buf);
            }
            (Phase::Failed, _) => {
                Unavailable::new(self.palette, self.icons, kind).render(inner, buf);
            }
            _ => Skeleton::new(self.palette, kind, self.frame).render(inner, buf),
        }
    }
}
