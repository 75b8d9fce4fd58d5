//! Collapsible navigation sidebar
//!
//! Expanded: brand, labelled page entries with their number keys, and the
//! user footer. Collapsed: icons only.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use skydeck_core::Page;

use crate::theme::{icons::IconSet, styles, Palette};

pub struct Sidebar<'a> {
    active: Page,
    expanded: bool,
    palette: &'a Palette,
    icons: IconSet,
}

impl<'a> Sidebar<'a> {
    pub fn new(active: Page, expanded: bool, palette: &'a Palette, icons: IconSet) -> Self {
        Self {
            active,
            expanded,
            palette,
            icons,
        }
    }

    fn brand_line(&self) -> Line<'static> {
        let p = self.palette;
        if self.expanded {
            Line::from(vec![
                Span::styled(" Analytics", styles::accent_bold(p)),
                Span::raw("   "),
                Span::styled(self.icons.collapse(), styles::text_muted(p)),
            ])
        } else {
            Line::from(Span::styled(self.icons.expand(), styles::text_muted(p))).centered()
        }
    }

    fn nav_line(&self, page: Page, width: u16) -> Line<'static> {
        let p = self.palette;
        let active = page == self.active;
        let base = if active {
            styles::selected(p)
        } else {
            styles::text_secondary(p)
        };

        let text = if self.expanded {
            let label = format!(" {}  {}", self.icons.page(page), page.label());
            let key = format!("{} ", page.index() + 1);
            let pad = (width as usize).saturating_sub(label.chars().count() + key.len());
            format!("{label}{}{key}", " ".repeat(pad))
        } else {
            format!(" {} ", self.icons.page(page))
        };

        let line = Line::from(Span::styled(text, base));
        if self.expanded {
            line
        } else {
            line.centered()
        }
    }

    fn footer_lines(&self) -> Vec<Line<'static>> {
        let p = self.palette;
        let avatar = Span::styled(" U ", styles::selected(p));
        if self.expanded {
            vec![
                Line::from(vec![
                    Span::raw(" "),
                    avatar,
                    Span::styled(" User", styles::text_primary(p)),
                ]),
                Line::from(Span::styled("     user@example.com", styles::text_muted(p))),
            ]
        } else {
            vec![Line::from(avatar).centered()]
        }
    }
}

impl Widget for Sidebar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let p = self.palette;
        let block = Block::default()
            .borders(Borders::RIGHT)
            .border_style(Style::default().fg(p.border))
            .style(Style::default().bg(p.sidebar));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height < 2 || inner.width == 0 {
            return;
        }

        let mut lines = vec![self.brand_line(), Line::default()];
        for page in Page::ALL {
            lines.push(self.nav_line(page, inner.width));
            lines.push(Line::default());
        }
        Paragraph::new(lines).render(inner, buf);

        let footer = self.footer_lines();
        let footer_height = footer.len() as u16;
        let nav_height = 2 + 2 * Page::ALL.len() as u16;
        if inner.height > nav_height + footer_height {
            let y = inner.bottom() - footer_height;
            Paragraph::new(footer).render(Rect::new(inner.x, y, inner.width, footer_height), buf);
        }
    }
}
