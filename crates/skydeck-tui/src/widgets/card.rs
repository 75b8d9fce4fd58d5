//! Card chrome shared by every dashboard widget
//!
//! A card is a rounded block with an icon and title. Its body depends on the
//! widget phase: skeleton bars while `Idle`/`Loading`, an unavailable notice
//! when `Failed`, the widget's own content when `Ready`.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

use skydeck_core::WidgetKind;

use crate::theme::{icons::IconSet, styles, Palette};

/// Render the card frame and return the inner body area.
pub fn render_frame(
    area: Rect,
    buf: &mut Buffer,
    palette: &Palette,
    icon: &str,
    title: &str,
    trailing: Option<Line<'_>>,
) -> Rect {
    let mut block = styles::card_block(palette, false).title(Line::from(vec![
        Span::raw(" "),
        Span::styled(icon.to_string(), styles::accent(palette)),
        Span::raw(" "),
        Span::styled(title.to_string(), styles::heading(palette)),
        Span::raw(" "),
    ]));
    if let Some(trailing) = trailing {
        block = block.title(trailing.right_aligned());
    }

    let inner = block.inner(area);
    block.render(area, buf);
    inner
}

/// Shape of the placeholder bars, one entry per row as a percentage of the
/// body width. `0` leaves a blank row.
#[derive(Debug, Clone, Copy)]
pub struct SkeletonShape(&'static [u16]);

impl SkeletonShape {
    pub fn for_widget(kind: WidgetKind) -> Self {
        match kind {
            // location, temperature, stats, gap, forecast
            WidgetKind::Weather => Self(&[40, 0, 30, 0, 60, 0, 100, 100]),
            // symbol, price, change, gap, chart
            WidgetKind::Finance => Self(&[25, 45, 0, 35, 0, 100, 100, 100, 100]),
            // category bar, then title/byline pairs
            WidgetKind::News => Self(&[70, 0, 90, 50, 0, 85, 45, 0, 80, 40]),
            // chart only
            WidgetKind::Activity => Self(&[30, 0, 100, 100, 100, 100, 100]),
        }
    }

    pub fn rows(&self) -> &'static [u16] {
        self.0
    }
}

/// Animated placeholder shaped like the ready layout
pub struct Skeleton<'a> {
    palette: &'a Palette,
    shape: SkeletonShape,
    frame: u64,
}

impl<'a> Skeleton<'a> {
    pub fn new(palette: &'a Palette, kind: WidgetKind, frame: u64) -> Self {
        Self {
            palette,
            shape: SkeletonShape::for_widget(kind),
            frame,
        }
    }

    /// Row that currently carries the shimmer highlight
    fn lit_row(&self) -> usize {
        let rows = self.shape.rows().len().max(1);
        ((self.frame / 3) as usize) % rows
    }
}

impl Widget for Skeleton<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width < 2 || area.height == 0 {
            return;
        }
        let usable = area.width - 2;
        let lit = self.lit_row();

        for (i, percent) in self.shape.rows().iter().enumerate() {
            let y = area.y + i as u16;
            if y >= area.bottom() {
                break;
            }
            if *percent == 0 {
                continue;
            }
            let width = ((usable as u32 * *percent as u32) / 100).max(1) as u16;
            let bar = Rect::new(area.x + 1, y, width, 1);
            buf.set_style(bar, styles::skeleton(self.palette, i == lit));
        }
    }
}

/// Explicit failure notice that replaces the card body
pub struct Unavailable<'a> {
    palette: &'a Palette,
    icons: IconSet,
    kind: WidgetKind,
}

impl<'a> Unavailable<'a> {
    pub fn new(palette: &'a Palette, icons: IconSet, kind: WidgetKind) -> Self {
        Self {
            palette,
            icons,
            kind,
        }
    }

    pub fn message(kind: WidgetKind) -> String {
        format!("Unable to load {} data.", kind.domain())
    }
}

impl Widget for Unavailable<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 {
            return;
        }
        let top_pad = area.height.saturating_sub(1) / 2;
        let body = Rect::new(area.x, area.y + top_pad, area.width, area.height - top_pad);

        Paragraph::new(Line::from(vec![
            Span::styled(self.icons.alert(), styles::negative(self.palette)),
            Span::raw(" "),
            Span::styled(Self::message(self.kind), styles::negative(self.palette)),
        ]))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .render(body, buf);
    }
}
