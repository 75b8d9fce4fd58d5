//! The four dashboard widgets and their local selections

use skydeck_core::prelude::*;
use skydeck_core::{
    news_view, ActivityPayload, ErrorInfo, FinancePayload, NewsCategory, NewsPayload, NewsView,
    Phase, TimeRange, WeatherPayload, WidgetData, WidgetKind,
};

use crate::widget::{MountId, WidgetHost};

#[derive(Debug, Clone)]
pub struct WidgetBoard {
    pub weather: WidgetHost<WeatherPayload>,
    pub finance: WidgetHost<FinancePayload>,
    pub news: WidgetHost<NewsPayload>,
    pub activity: WidgetHost<ActivityPayload>,

    /// News category filter, reset on every news mount
    news_category: NewsCategory,

    /// Finance range label, reset on every finance mount
    time_range: TimeRange,
}

impl Default for WidgetBoard {
    fn default() -> Self {
        Self::new()
    }
}

impl WidgetBoard {
    pub fn new() -> Self {
        Self {
            weather: WidgetHost::new(WidgetKind::Weather),
            finance: WidgetHost::new(WidgetKind::Finance),
            news: WidgetHost::new(WidgetKind::News),
            activity: WidgetHost::new(WidgetKind::Activity),
            news_category: NewsCategory::default(),
            time_range: TimeRange::default(),
        }
    }

    // ─────────────────────────────────────────────────────────
    // Lifecycle
    // ─────────────────────────────────────────────────────────

    /// Mount a widget; its filter state starts over.
    pub fn mount(&mut self, kind: WidgetKind) -> MountId {
        match kind {
            WidgetKind::Weather => self.weather.mount(),
            WidgetKind::Finance => {
                self.time_range = TimeRange::default();
                self.finance.mount()
            }
            WidgetKind::News => {
                self.news_category = NewsCategory::default();
                self.news.mount()
            }
            WidgetKind::Activity => self.activity.mount(),
        }
    }

    pub fn unmount(&mut self, kind: WidgetKind) -> Option<MountId> {
        match kind {
            WidgetKind::Weather => self.weather.unmount(),
            WidgetKind::Finance => self.finance.unmount(),
            WidgetKind::News => self.news.unmount(),
            WidgetKind::Activity => self.activity.unmount(),
        }
    }

    /// Unmount every mounted widget, returning the ended mounts.
    pub fn unmount_all(&mut self) -> Vec<MountId> {
        WidgetKind::ALL
            .iter()
            .filter_map(|kind| self.unmount(*kind))
            .collect()
    }

    /// Route a fetch outcome to its widget.
    ///
    /// Payloads of the wrong kind or without usable content collapse to
    /// `Failed`. Returns whether the widget's state changed.
    pub fn apply(
        &mut self,
        mount: MountId,
        outcome: std::result::Result<WidgetData, ErrorInfo>,
    ) -> bool {
        let outcome = outcome.and_then(|data| {
            if data.kind() != mount.kind {
                warn!("{} received a {} payload", mount, data.kind());
                Err(ErrorInfo::unavailable())
            } else if !data.is_usable() {
                debug!("{} received an empty payload", mount);
                Err(ErrorInfo::unavailable())
            } else {
                Ok(data)
            }
        });

        match mount.kind {
            WidgetKind::Weather => self.weather.complete(
                mount,
                outcome.and_then(|d| match d {
                    WidgetData::Weather(p) => Ok(p),
                    _ => Err(ErrorInfo::unavailable()),
                }),
            ),
            WidgetKind::Finance => self.finance.complete(
                mount,
                outcome.and_then(|d| match d {
                    WidgetData::Finance(p) => Ok(p),
                    _ => Err(ErrorInfo::unavailable()),
                }),
            ),
            WidgetKind::News => self.news.complete(
                mount,
                outcome.and_then(|d| match d {
                    WidgetData::News(p) => Ok(p),
                    _ => Err(ErrorInfo::unavailable()),
                }),
            ),
            WidgetKind::Activity => self.activity.complete(
                mount,
                outcome.and_then(|d| match d {
                    WidgetData::Activity(p) => Ok(p),
                    _ => Err(ErrorInfo::unavailable()),
                }),
            ),
        }
    }

    pub fn phase(&self, kind: WidgetKind) -> Phase {
        match kind {
            WidgetKind::Weather => self.weather.phase(),
            WidgetKind::Finance => self.finance.phase(),
            WidgetKind::News => self.news.phase(),
            WidgetKind::Activity => self.activity.phase(),
        }
    }

    pub fn mount_id(&self, kind: WidgetKind) -> Option<MountId> {
        match kind {
            WidgetKind::Weather => self.weather.mount_id(),
            WidgetKind::Finance => self.finance.mount_id(),
            WidgetKind::News => self.news.mount_id(),
            WidgetKind::Activity => self.activity.mount_id(),
        }
    }

    pub fn mounted(&self) -> Vec<WidgetKind> {
        WidgetKind::ALL
            .into_iter()
            .filter(|kind| self.mount_id(*kind).is_some())
            .collect()
    }

    /// One phase per widget, in `WidgetKind::ALL` order
    pub fn phases(&self) -> [Phase; 4] {
        WidgetKind::ALL.map(|kind| self.phase(kind))
    }

    // ─────────────────────────────────────────────────────────
    // Selections
    // ─────────────────────────────────────────────────────────

    pub fn news_category(&self) -> NewsCategory {
        self.news_category
    }

    pub fn time_range(&self) -> TimeRange {
        self.time_range
    }

    /// Change the news filter. No-op unless the news widget is `Ready`.
    pub fn set_active_category(&mut self, category: NewsCategory) -> bool {
        if !self.news.state().is_ready() {
            trace!("Ignoring category {} while news is {:?}", category, self.news.phase());
            return false;
        }
        self.news_category = category;
        true
    }

    /// Change the finance range label. No-op unless finance is `Ready`.
    pub fn set_time_range(&mut self, range: TimeRange) -> bool {
        if !self.finance.state().is_ready() {
            trace!("Ignoring range {} while finance is {:?}", range, self.finance.phase());
            return false;
        }
        self.time_range = range;
        true
    }

    /// Filtered news for display. `None` unless the news widget is `Ready`.
    pub fn news_view(&self) -> Option<NewsView<'_>> {
        self.news
            .state()
            .data()
            .map(|payload| news_view(&payload.articles, self.news_category))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use skydeck_core::{ActivityPoint, NewsArticle};

    fn article(id: &str, category: &str) -> NewsArticle {
        NewsArticle {
            id: id.into(),
            title: format!("Headline {id}"),
            source: "Wire".into(),
            date: "2026-02-11".into(),
            summary: String::new(),
            url: String::new(),
            image_url: String::new(),
            category: category.into(),
        }
    }

    fn news(categories: &[&str]) -> WidgetData {
        WidgetData::News(NewsPayload {
            articles: categories
                .iter()
                .enumerate()
                .map(|(i, c)| article(&(i + 1).to_string(), c))
                .collect(),
        })
    }

    fn activity() -> WidgetData {
        WidgetData::Activity(ActivityPayload {
            points: vec![ActivityPoint {
                time: "00:00".into(),
                users: 210,
            }],
        })
    }

    #[test]
    fn test_widgets_complete_independently() {
        let mut board = WidgetBoard::new();
        let news_id = board.mount(WidgetKind::News);
        let activity_id = board.mount(WidgetKind::Activity);

        assert!(board.apply(activity_id, Err(ErrorInfo::unavailable())));
        assert_eq!(board.phase(WidgetKind::Activity), Phase::Failed);
        assert_eq!(board.phase(WidgetKind::News), Phase::Loading);

        assert!(board.apply(news_id, Ok(news(&["Health"]))));
        assert_eq!(board.phase(WidgetKind::News), Phase::Ready);
        assert_eq!(board.phase(WidgetKind::Activity), Phase::Failed);
    }

    #[test]
    fn test_empty_payload_fails() {
        let mut board = WidgetBoard::new();
        let id = board.mount(WidgetKind::News);
        assert!(board.apply(id, Ok(news(&[]))));
        assert_eq!(board.phase(WidgetKind::News), Phase::Failed);
        assert!(board.news.state().data().is_none());
    }

    #[test]
    fn test_mismatched_payload_fails() {
        let mut board = WidgetBoard::new();
        let id = board.mount(WidgetKind::News);
        assert!(board.apply(id, Ok(activity())));
        assert_eq!(board.phase(WidgetKind::News), Phase::Failed);
    }

    #[test]
    fn test_filters_are_noop_until_ready() {
        let mut board = WidgetBoard::new();
        assert!(!board.set_active_category(NewsCategory::Sports));
        assert!(!board.set_time_range(TimeRange::OneYear));

        board.mount(WidgetKind::News);
        assert!(!board.set_active_category(NewsCategory::Sports));
        assert_eq!(board.news_category(), NewsCategory::All);
        assert!(board.news_view().is_none());
    }

    #[test]
    fn test_category_filter_over_ready_news() {
        let mut board = WidgetBoard::new();
        let id = board.mount(WidgetKind::News);
        board.apply(
            id,
            Ok(news(&["Technology", "Business", "Technology", "Health", "Sports"])),
        );

        let all = board.news_view().unwrap();
        assert_eq!(all.len(), 4);

        assert!(board.set_active_category(NewsCategory::Technology));
        match board.news_view().unwrap() {
            NewsView::Items(items) => {
                let ids: Vec<_> = items.iter().map(|a| a.id.as_str()).collect();
                assert_eq!(ids, vec!["1", "3"]);
            }
            other => panic!("expected items, got {:?}", other),
        }
        assert_eq!(board.phase(WidgetKind::News), Phase::Ready);
    }

    #[test]
    fn test_filters_reset_on_remount() {
        let mut board = WidgetBoard::new();
        let id = board.mount(WidgetKind::News);
        board.apply(id, Ok(news(&["Sports"])));
        board.set_active_category(NewsCategory::Business);
        assert!(board.news_view().unwrap().is_empty());

        board.unmount(WidgetKind::News);
        board.mount(WidgetKind::News);
        assert_eq!(board.news_category(), NewsCategory::All);
    }

    #[test]
    fn test_unmount_all_returns_ended_mounts() {
        let mut board = WidgetBoard::new();
        board.mount(WidgetKind::Weather);
        board.mount(WidgetKind::Finance);

        let ended = board.unmount_all();
        assert_eq!(ended.len(), 2);
        assert!(board.mounted().is_empty());
        assert_eq!(board.phases(), [Phase::Idle; 4]);
    }
}
