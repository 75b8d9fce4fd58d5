//! Widget-local selections layered over already-fetched payloads.

use std::fmt;

use crate::payload::NewsArticle;

/// Most articles the news card shows at once
pub const NEWS_DISPLAY_LIMIT: usize = 4;

// ── NewsCategory ─────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum NewsCategory {
    #[default]
    All,
    Technology,
    Business,
    Health,
    Sports,
}

impl NewsCategory {
    pub const ALL: [NewsCategory; 5] = [
        NewsCategory::All,
        NewsCategory::Technology,
        NewsCategory::Business,
        NewsCategory::Health,
        NewsCategory::Sports,
    ];

    pub fn label(self) -> &'static str {
        match self {
            NewsCategory::All => "All",
            NewsCategory::Technology => "Technology",
            NewsCategory::Business => "Business",
            NewsCategory::Health => "Health",
            NewsCategory::Sports => "Sports",
        }
    }

    /// `All` matches everything; otherwise the article's category label must
    /// match exactly.
    pub fn matches(self, article: &NewsArticle) -> bool {
        match self {
            NewsCategory::All => true,
            other => article.category == other.label(),
        }
    }

    pub fn next(self) -> Self {
        cycle(&Self::ALL, self, 1)
    }

    pub fn prev(self) -> Self {
        cycle(&Self::ALL, self, Self::ALL.len() - 1)
    }
}

impl fmt::Display for NewsCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ── TimeRange ────────────────────────────────────────────────────────────────

/// Finance range selector. Only the label changes; the series is fixed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TimeRange {
    OneDay,
    #[default]
    OneWeek,
    OneMonth,
    OneYear,
}

impl TimeRange {
    pub const ALL: [TimeRange; 4] = [
        TimeRange::OneDay,
        TimeRange::OneWeek,
        TimeRange::OneMonth,
        TimeRange::OneYear,
    ];

    pub fn label(self) -> &'static str {
        match self {
            TimeRange::OneDay => "1D",
            TimeRange::OneWeek => "1W",
            TimeRange::OneMonth => "1M",
            TimeRange::OneYear => "1Y",
        }
    }

    pub fn next(self) -> Self {
        cycle(&Self::ALL, self, 1)
    }

    pub fn prev(self) -> Self {
        cycle(&Self::ALL, self, Self::ALL.len() - 1)
    }
}

impl fmt::Display for TimeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

fn cycle<T: Copy + PartialEq>(all: &[T], current: T, step: usize) -> T {
    let idx = all.iter().position(|c| *c == current).unwrap_or(0);
    all[(idx + step) % all.len()]
}

// ── NewsView ─────────────────────────────────────────────────────────────────

/// What the news card shows for the active category.
#[derive(Debug, Clone, PartialEq)]
pub enum NewsView<'a> {
    Items(Vec<&'a NewsArticle>),
    /// No article matches; rendered as an explicit notice.
    Empty { category: NewsCategory },
}

impl<'a> NewsView<'a> {
    pub fn len(&self) -> usize {
        match self {
            NewsView::Items(items) => items.len(),
            NewsView::Empty { .. } => 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, NewsView::Empty { .. })
    }
}

/// Matching articles in provider order, truncated to `limit`.
pub fn filter_articles(
    articles: &[NewsArticle],
    category: NewsCategory,
    limit: usize,
) -> Vec<&NewsArticle> {
    articles
        .iter()
        .filter(|a| category.matches(a))
        .take(limit)
        .collect()
}

/// [`filter_articles`] with the display limit, mapped to a view.
pub fn news_view(articles: &[NewsArticle], category: NewsCategory) -> NewsView<'_> {
    let items = filter_articles(articles, category, NEWS_DISPLAY_LIMIT);
    if items.is_empty() {
        NewsView::Empty { category }
    } else {
        NewsView::Items(items)
    }
}
