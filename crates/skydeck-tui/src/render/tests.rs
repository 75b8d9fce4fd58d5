//! Full-screen rendering tests for `view()`

use super::*;
use crate::test_utils::{create_test_state, TestTerminal};
use skydeck_app::handler::{update, UpdateAction};
use skydeck_app::message::Message;
use skydeck_app::provider::mock::{sample_activity, sample_finance, sample_news, sample_weather};
use skydeck_app::widget::MountId;
use skydeck_core::{ErrorInfo, NewsCategory, Theme, WidgetData};

const WIDTH: u16 = 140;
const HEIGHT: u16 = 48;

fn mount(state: &mut AppState) -> Vec<MountId> {
    match update(state, Message::MountPage).action {
        Some(UpdateAction::FetchWidgets { mounts }) => mounts,
        other => panic!("expected FetchWidgets, got {:?}", other),
    }
}

fn payload(kind: WidgetKind) -> WidgetData {
    match kind {
        WidgetKind::Weather => WidgetData::Weather(sample_weather()),
        WidgetKind::Finance => WidgetData::Finance(sample_finance()),
        WidgetKind::News => WidgetData::News(sample_news()),
        WidgetKind::Activity => WidgetData::Activity(sample_activity()),
    }
}

fn load_all(state: &mut AppState, mounts: &[MountId]) {
    for mount in mounts {
        update(
            state,
            Message::WidgetLoaded {
                mount: *mount,
                result: Ok(payload(mount.kind)),
            },
        );
    }
}

fn draw(state: &AppState) -> TestTerminal {
    let mut term = TestTerminal::with_size(WIDTH, HEIGHT);
    term.draw_with(|frame| view(frame, state));
    term
}

#[test]
fn test_dashboard_loading_shows_chrome_without_data() {
    let mut state = create_test_state();
    mount(&mut state);
    let term = draw(&state);

    assert!(term.buffer_contains("Analytics"));
    assert!(term.buffer_contains("Dashboard Overview"));
    assert!(term.buffer_contains("Total Users"));
    for kind in WidgetKind::ALL {
        assert!(term.buffer_contains(kind.title()), "missing {}", kind.title());
    }
    assert!(!term.buffer_contains("San Francisco"));
    assert!(!term.buffer_contains("AAPL"));
    assert!(!term.buffer_contains("Unable to load"));
}

#[test]
fn test_dashboard_ready_shows_every_widget() {
    let mut state = create_test_state();
    let mounts = mount(&mut state);
    load_all(&mut state, &mounts);
    let term = draw(&state);

    assert!(term.buffer_contains("San Francisco, CA"));
    assert!(term.buffer_contains("AAPL"));
    assert!(term.buffer_contains("Chipmakers race"));
    assert!(term.buffer_contains("Peak 780 users"));
}

#[test]
fn test_failed_widget_is_isolated() {
    let mut state = create_test_state();
    let mounts = mount(&mut state);
    for mount in &mounts {
        let result = if mount.kind == WidgetKind::Finance {
            Err(ErrorInfo::unavailable())
        } else {
            Ok(payload(mount.kind))
        };
        update(&mut state, Message::WidgetLoaded { mount: *mount, result });
    }
    let term = draw(&state);

    assert!(term.buffer_contains("Unable to load stock data."));
    assert!(term.buffer_contains("San Francisco, CA"));
    assert!(term.buffer_contains("Peak 780 users"));
}

#[test]
fn test_theme_switch_restyles_whole_screen() {
    let mut state = create_test_state();
    mount(&mut state);
    assert_eq!(state.theme(), Theme::Light);

    let light = draw(&state);
    assert_eq!(light.buffer()[(WIDTH - 1, 1)].bg, Palette::LIGHT.background);

    update(&mut state, Message::ToggleTheme);
    let dark = draw(&state);
    assert_eq!(dark.buffer()[(WIDTH - 1, 1)].bg, Palette::DARK.background);
    assert_eq!(dark.buffer()[(0, HEIGHT - 1)].bg, Palette::DARK.sidebar);
}

#[test]
fn test_collapsed_sidebar_hides_labels() {
    let mut state = create_test_state();
    update(&mut state, Message::ToggleSidebar);
    let term = draw(&state);

    assert!(!term.buffer_contains("Analytics"));
    assert!(term.buffer_contains("b expand"));
}

#[test]
fn test_news_page_hosts_single_card() {
    let mut state = create_test_state();
    update(&mut state, Message::Navigate(skydeck_core::Page::News));
    let mounts = mount(&mut state);
    assert_eq!(mounts.len(), 1);
    load_all(&mut state, &mounts);

    update(&mut state, Message::SetActiveCategory(NewsCategory::Sports));
    let term = draw(&state);

    assert!(term.buffer_contains("Latest News"));
    assert!(term.buffer_contains("Underdogs clinch"));
    assert!(!term.buffer_contains("Stock Market"));
    assert!(!term.buffer_contains("Total Users"));
}

#[test]
fn test_news_card_draws_board_filter_result() {
    let mut state = create_test_state();
    update(&mut state, Message::Navigate(skydeck_core::Page::News));
    let mounts = mount(&mut state);

    let mut news = sample_news();
    news.articles.retain(|a| a.category == "Technology");
    update(
        &mut state,
        Message::WidgetLoaded {
            mount: mounts[0],
            result: Ok(WidgetData::News(news)),
        },
    );
    update(&mut state, Message::SetActiveCategory(NewsCategory::Health));
    assert!(state.board.news_view().unwrap().is_empty());

    let term = draw(&state);
    assert!(term.buffer_contains("No Health articles right now."));
    assert!(!term.buffer_contains("Chipmakers race"));
}

#[test]
fn test_tiny_terminal_does_not_panic() {
    let mut state = create_test_state();
    let mounts = mount(&mut state);
    load_all(&mut state, &mounts);

    let mut term = TestTerminal::with_size(20, 6);
    term.draw_with(|frame| view(frame, &state));
}
