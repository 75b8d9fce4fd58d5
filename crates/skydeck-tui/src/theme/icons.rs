//! Icon set for the TUI.
//!
//! Provides `IconSet` which resolves icons at runtime based on `IconMode`.
//! - `IconMode::Unicode` - safe characters that work in all terminals
//! - `IconMode::NerdFonts` - rich Nerd Font glyphs (requires Nerd Font installed)

use skydeck_app::config::IconMode;
use skydeck_core::{Condition, Page, Theme, WidgetKind};

#[derive(Debug, Clone, Copy)]
pub struct IconSet {
    mode: IconMode,
}

impl IconSet {
    pub fn new(mode: IconMode) -> Self {
        Self { mode }
    }

    // --- Navigation ---

    pub fn dashboard(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f0e4}", // nf-fa-dashboard
            IconMode::Unicode => "\u{25a6}",   // ▦
        }
    }

    pub fn finance(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f201}", // nf-fa-line_chart
            IconMode::Unicode => "$",
        }
    }

    pub fn weather(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f0c2}", // nf-fa-cloud
            IconMode::Unicode => "\u{2601}",   // ☁
        }
    }

    pub fn news(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f1ea}", // nf-fa-newspaper_o
            IconMode::Unicode => "\u{2261}",   // ≡
        }
    }

    pub fn activity(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f0f1}", // nf-fa-heartbeat
            IconMode::Unicode => "~",
        }
    }

    pub fn page(&self, page: Page) -> &'static str {
        match page {
            Page::Dashboard => self.dashboard(),
            Page::Finance => self.finance(),
            Page::Weather => self.weather(),
            Page::News => self.news(),
        }
    }

    pub fn widget(&self, kind: WidgetKind) -> &'static str {
        match kind {
            WidgetKind::Weather => self.weather(),
            WidgetKind::Finance => self.finance(),
            WidgetKind::News => self.news(),
            WidgetKind::Activity => self.activity(),
        }
    }

    pub fn collapse(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f053}", // nf-fa-chevron_left
            IconMode::Unicode => "\u{00ab}",   // «
        }
    }

    pub fn expand(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f054}", // nf-fa-chevron_right
            IconMode::Unicode => "\u{00bb}",   // »
        }
    }

    // --- Theme ---

    pub fn theme(&self, theme: Theme) -> &'static str {
        match (self.mode, theme) {
            (IconMode::NerdFonts, Theme::Light) => "\u{f185}", // nf-fa-sun_o
            (IconMode::NerdFonts, Theme::Dark) => "\u{f186}",  // nf-fa-moon_o
            (IconMode::Unicode, Theme::Light) => "\u{2600}",   // ☀
            (IconMode::Unicode, Theme::Dark) => "\u{263e}",    // ☾
        }
    }

    // --- Weather ---

    pub fn condition(&self, condition: Condition) -> &'static str {
        match (self.mode, condition) {
            (IconMode::NerdFonts, Condition::Sunny) => "\u{f185}", // nf-fa-sun_o
            (IconMode::NerdFonts, Condition::Cloudy) => "\u{f0c2}", // nf-fa-cloud
            (IconMode::NerdFonts, Condition::Rainy) => "\u{f0e9}", // nf-fa-umbrella
            (IconMode::Unicode, Condition::Sunny) => "\u{2600}",   // ☀
            (IconMode::Unicode, Condition::Cloudy) => "\u{2601}",  // ☁
            (IconMode::Unicode, Condition::Rainy) => "\u{2602}",   // ☂
        }
    }

    pub fn wind(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{e34b}", // nf-weather-strong_wind
            IconMode::Unicode => "\u{2248}",   // ≈
        }
    }

    pub fn humidity(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{e373}", // nf-weather-humidity
            IconMode::Unicode => "%",
        }
    }

    // --- Status ---

    pub fn trend(&self, up: bool) -> &'static str {
        match (self.mode, up) {
            (IconMode::NerdFonts, true) => "\u{f062}", // nf-fa-arrow_up
            (IconMode::NerdFonts, false) => "\u{f063}", // nf-fa-arrow_down
            (IconMode::Unicode, true) => "\u{25b2}",   // ▲
            (IconMode::Unicode, false) => "\u{25bc}",  // ▼
        }
    }

    pub fn users(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f0c0}", // nf-fa-users
            IconMode::Unicode => "\u{25c9}",   // ◉
        }
    }

    pub fn alert(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f071}", // nf-fa-warning
            IconMode::Unicode => "\u{26a0}",   // ⚠
        }
    }
}
