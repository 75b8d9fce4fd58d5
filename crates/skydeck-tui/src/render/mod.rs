//! Main render/view function (View in TEA pattern)

#[cfg(test)]
mod tests;

use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::Frame;

use skydeck_app::state::AppState;
use skydeck_core::{Page, WidgetKind};

use super::{layout, widgets};
use crate::theme::{icons::IconSet, Palette};

/// Render the complete UI (View function in TEA)
///
/// Pure: reads the state, never changes it. The palette is picked from the
/// shell theme on every frame.
pub fn view(frame: &mut Frame, state: &AppState) {
    let area = frame.area();
    let palette = Palette::for_theme(state.theme());
    let icons = IconSet::new(state.icons());

    frame.render_widget(
        Block::default().style(Style::default().bg(palette.background)),
        area,
    );

    let areas = layout::create(area, state.shell.sidebar_expanded);

    frame.render_widget(
        widgets::Sidebar::new(state.page, state.shell.sidebar_expanded, palette, icons),
        areas.sidebar,
    );
    frame.render_widget(
        widgets::MainHeader::new(state.page, state.theme(), palette, icons)
            .sidebar_expanded(state.shell.sidebar_expanded)
            .phases(state.board.phases()),
        areas.header,
    );

    match state.page {
        Page::Dashboard => {
            let grid = layout::dashboard(areas.content);
            frame.render_widget(widgets::KpiRow::new(palette), grid.kpis);
            render_card(frame, state, WidgetKind::Weather, grid.weather, palette, icons);
            render_card(frame, state, WidgetKind::Finance, grid.finance, palette, icons);
            render_card(frame, state, WidgetKind::News, grid.news, palette, icons);
            render_card(frame, state, WidgetKind::Activity, grid.activity, palette, icons);
        }
        page => {
            for kind in page.widgets() {
                render_card(frame, state, *kind, areas.content, palette, icons);
            }
        }
    }
}

fn render_card(
    frame: &mut Frame,
    state: &AppState,
    kind: WidgetKind,
    area: Rect,
    palette: &Palette,
    icons: IconSet,
) {
    let board = &state.board;
    let tick = state.animation_frame;

    match kind {
        WidgetKind::Weather => frame.render_widget(
            widgets::WeatherCard::new(board.weather.state(), palette, icons, tick),
            area,
        ),
        WidgetKind::Finance => frame.render_widget(
            widgets::FinanceCard::new(
                board.finance.state(),
                board.time_range(),
                palette,
                icons,
                tick,
            ),
            area,
        ),
        WidgetKind::News => frame.render_widget(
            widgets::NewsCard::new(
                board.news.state().phase(),
                board.news_view(),
                board.news_category(),
                palette,
                icons,
                tick,
            ),
            area,
        ),
        WidgetKind::Activity => frame.render_widget(
            widgets::ActivityCard::new(board.activity.state(), palette, icons, tick),
            area,
        ),
    }
}
