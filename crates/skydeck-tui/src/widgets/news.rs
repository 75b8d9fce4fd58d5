//! Latest news card: category bar and the filtered article list

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use skydeck_core::{NewsCategory, NewsView, Phase, WidgetKind};

use super::card::{self, Skeleton, Unavailable};
use crate::theme::{icons::IconSet, styles, Palette};

/// Renders the filtered view produced by `WidgetBoard::news_view`
pub struct NewsCard<'a> {
    phase: Phase,
    view: Option<NewsView<'a>>,
    category: NewsCategory,
    palette: &'a Palette,
    icons: IconSet,
    frame: u64,
}

impl<'a> NewsCard<'a> {
    pub fn new(
        phase: Phase,
        view: Option<NewsView<'a>>,
        category: NewsCategory,
        palette: &'a Palette,
        icons: IconSet,
        frame: u64,
    ) -> Self {
        Self {
            phase,
            view,
            category,
            palette,
            icons,
            frame,
        }
    }

    fn category_bar(&self) -> Line<'static> {
        let spans: Vec<Span> = NewsCategory::ALL
            .iter()
            .map(|category| {
                let style = if *category == self.category {
                    styles::selected(self.palette)
                } else {
                    styles::text_secondary(self.palette)
                };
                Span::styled(format!(" {} ", category.label()), style)
            })
            .collect();
        Line::from(spans)
    }

    fn article_lines(&self, view: &NewsView<'_>, width: usize) -> Vec<Line<'static>> {
        let p = self.palette;
        match view {
            NewsView::Items(articles) => {
                let mut lines = Vec::with_capacity(articles.len() * 3);
                for (i, article) in articles.iter().enumerate() {
                    if i > 0 {
                        lines.push(Line::default());
                    }
                    lines.push(Line::from(Span::styled(
                        truncate(&article.title, width),
                        styles::text_primary(p),
                    )));
                    lines.push(Line::from(Span::styled(
                        truncate(&article.byline(), width),
                        styles::text_muted(p),
                    )));
                }
                lines
            }
            NewsView::Empty { category } => vec![
                Line::default(),
                Line::from(Span::styled(empty_message(*category), styles::text_muted(p)))
                    .centered(),
            ],
        }
    }
}

impl Widget for NewsCard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let kind = WidgetKind::News;
        let inner = card::render_frame(
            area,
            buf,
            self.palette,
            self.icons.news(),
            kind.title(),
            None,
        );
        if inner.height == 0 || inner.width == 0 {
            return;
        }

        match (self.phase, &self.view) {
            (Phase::Ready, Some(view)) => {
                let [bar, _, list] = Layout::vertical([
                    Constraint::Length(1),
                    Constraint::Length(1),
                    Constraint::Min(0),
                ])
                .areas(inner);

                Paragraph::new(self.category_bar()).render(bar, buf);

                let lines = self.article_lines(view, list.width.saturating_sub(1) as usize);
                Paragraph::new(lines).render(
                    Rect::new(list.x + 1, list.y, list.width.saturating_sub(1), list.height),
                    buf,
                );
            }
            (Phase::Failed, _) => {
                Unavailable::new(self.palette, self.icons, kind).render(inner, buf);
            }
            _ => Skeleton::new(self.palette, kind, self.frame).render(inner, buf),
        }
    }
}

pub fn empty_message(category: NewsCategory) -> String {
    format!("No {} articles right now.", category.label())
}

/// Cut `text` to `max` display columns, ending with `…` when shortened
pub fn truncate(text: &str, max: usize) -> String {
    if text.width() <= max {
        return text.to_string();
    }
    if max <= 1 {
        return "…".to_string();
    }

    let mut out = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > max - 1 {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    out
}
