//! Configuration types for Skydeck
//!
//! Defines:
//! - `Settings` - Global application settings (`config.toml`)
//! - Related sub-types and enums

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use skydeck_core::Theme;

/// Application settings (`<config_dir>/skydeck/config.toml`)
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub ui: UiSettings,

    #[serde(default)]
    pub appearance: AppearanceSettings,

    #[serde(default)]
    pub provider: ProviderSettings,
}

/// Layout settings
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct UiSettings {
    /// Sidebar state at startup. Toggles are not written back.
    #[serde(default = "default_true")]
    pub sidebar_expanded: bool,

    /// Icon mode: "unicode" or "nerd_fonts" (default)
    #[serde(default)]
    pub icons: IconMode,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            sidebar_expanded: true,
            icons: IconMode::default(),
        }
    }
}

/// Icon rendering mode for the TUI.
///
/// Controls whether to use Nerd Font glyphs (requires a patched font)
/// or safe Unicode characters (works in all terminals).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IconMode {
    /// Safe Unicode characters that work in all terminals
    Unicode,
    /// Nerd Font glyphs, requires a Nerd Font installed in the terminal (default)
    #[default]
    NerdFonts,
}

impl std::fmt::Display for IconMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IconMode::Unicode => write!(f, "unicode"),
            IconMode::NerdFonts => write!(f, "nerd_fonts"),
        }
    }
}

/// Theme resolution settings
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct AppearanceSettings {
    /// Where the system color-scheme signal comes from
    #[serde(default)]
    pub system_scheme: SystemScheme,
}

/// Source of the "system preferred color scheme" signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SystemScheme {
    /// Read the terminal's `COLORFGBG` hint
    #[default]
    Auto,
    Light,
    Dark,
}

impl SystemScheme {
    /// Forced theme, if any
    pub fn forced(self) -> Option<Theme> {
        match self {
            SystemScheme::Auto => None,
            SystemScheme::Light => Some(Theme::Light),
            SystemScheme::Dark => Some(Theme::Dark),
        }
    }
}

/// Data provider settings
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ProviderSettings {
    #[serde(default)]
    pub kind: ProviderKind,

    /// Simulated latency for the mock provider
    #[serde(default = "default_latency_ms")]
    pub latency_ms: u64,

    /// Upper bound of random extra latency per request
    #[serde(default)]
    pub jitter_ms: u64,

    /// Directory holding `weather.json`, `finance.json`, `news.json`, `activity.json`
    #[serde(default)]
    pub fixtures_dir: Option<PathBuf>,
}

impl Default for ProviderSettings {
    fn default() -> Self {
        Self {
            kind: ProviderKind::default(),
            latency_ms: default_latency_ms(),
            jitter_ms: 0,
            fixtures_dir: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderKind {
    #[default]
    Mock,
    Fixtures,
}

fn default_true() -> bool {
    true
}

fn default_latency_ms() -> u64 {
    1000
}
