//! Color palettes for the light and dark themes.

use ratatui::style::Color;
use skydeck_core::Theme;

/// One full set of colors. Every widget reads its colors from the palette
/// of the current frame, so a theme switch restyles everything at once.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    // --- Background layers ---
    pub background: Color,
    pub surface: Color,
    pub sidebar: Color,

    // --- Borders ---
    pub border: Color,
    pub border_active: Color,

    // --- Accent ---
    pub accent: Color,
    pub contrast_fg: Color,

    // --- Text ---
    pub text_primary: Color,
    pub text_secondary: Color,
    pub text_muted: Color,

    // --- Status ---
    pub positive: Color,
    pub negative: Color,
    pub warning: Color,

    // --- Loading placeholders ---
    pub skeleton: Color,
    pub skeleton_shimmer: Color,
}

impl Palette {
    pub const LIGHT: Palette = Palette {
        background: Color::Rgb(249, 250, 251),
        surface: Color::Rgb(255, 255, 255),
        sidebar: Color::Rgb(255, 255, 255),
        border: Color::Rgb(229, 231, 235),
        border_active: Color::Rgb(37, 99, 235),
        accent: Color::Rgb(37, 99, 235),
        contrast_fg: Color::Rgb(255, 255, 255),
        text_primary: Color::Rgb(17, 24, 39),
        text_secondary: Color::Rgb(75, 85, 99),
        text_muted: Color::Rgb(156, 163, 175),
        positive: Color::Rgb(22, 163, 74),
        negative: Color::Rgb(220, 38, 38),
        warning: Color::Rgb(202, 138, 4),
        skeleton: Color::Rgb(229, 231, 235),
        skeleton_shimmer: Color::Rgb(209, 213, 219),
    };

    pub const DARK: Palette = Palette {
        background: Color::Rgb(17, 24, 39),
        surface: Color::Rgb(31, 41, 55),
        sidebar: Color::Rgb(31, 41, 55),
        border: Color::Rgb(55, 65, 81),
        border_active: Color::Rgb(96, 165, 250),
        accent: Color::Rgb(96, 165, 250),
        contrast_fg: Color::Rgb(17, 24, 39),
        text_primary: Color::Rgb(243, 244, 246),
        text_secondary: Color::Rgb(209, 213, 219),
        text_muted: Color::Rgb(107, 114, 128),
        positive: Color::Rgb(74, 222, 128),
        negative: Color::Rgb(248, 113, 113),
        warning: Color::Rgb(250, 204, 21),
        skeleton: Color::Rgb(55, 65, 81),
        skeleton_shimmer: Color::Rgb(75, 85, 99),
    };

    pub fn for_theme(theme: Theme) -> &'static Palette {
        match theme {
            Theme::Light => &Self::LIGHT,
            Theme::Dark => &Self::DARK,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_for_theme_selects_palette() {
        assert_eq!(Palette::for_theme(Theme::Light), &Palette::LIGHT);
        assert_eq!(Palette::for_theme(Theme::Dark), &Palette::DARK);
    }

    #[test]
    fn test_palettes_differ_where_it_matters() {
        assert_ne!(Palette::LIGHT.background, Palette::DARK.background);
        assert_ne!(Palette::LIGHT.text_primary, Palette::DARK.text_primary);
        assert_ne!(Palette::LIGHT.surface, Palette::DARK.surface);
    }

    #[test]
    fn test_skeleton_shimmer_is_distinct() {
        for palette in [Palette::LIGHT, Palette::DARK] {
            assert_ne!(palette.skeleton, palette.skeleton_shimmer);
            assert_ne!(palette.skeleton, palette.surface);
        }
    }
}
