//! Semantic style builders.
//!
//! Every builder takes the frame's [`Palette`] so light and dark share one
//! set of rules.

use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders};
use skydeck_core::Phase;

use super::palette::Palette;

// --- Text styles ---
pub fn text_primary(p: &Palette) -> Style {
    Style::default().fg(p.text_primary)
}

pub fn text_secondary(p: &Palette) -> Style {
    Style::default().fg(p.text_secondary)
}

pub fn text_muted(p: &Palette) -> Style {
    Style::default().fg(p.text_muted)
}

pub fn heading(p: &Palette) -> Style {
    Style::default()
        .fg(p.text_primary)
        .add_modifier(Modifier::BOLD)
}

// --- Accent styles ---
pub fn accent(p: &Palette) -> Style {
    Style::default().fg(p.accent)
}

pub fn accent_bold(p: &Palette) -> Style {
    Style::default().fg(p.accent).add_modifier(Modifier::BOLD)
}

/// Keybinding hint in the header
pub fn keybinding(p: &Palette) -> Style {
    Style::default().fg(p.warning)
}

// --- Status styles ---
pub fn positive(p: &Palette) -> Style {
    Style::default().fg(p.positive)
}

pub fn negative(p: &Palette) -> Style {
    Style::default().fg(p.negative)
}

pub fn trend(p: &Palette, up: bool) -> Style {
    if up {
        positive(p)
    } else {
        negative(p)
    }
}

// --- Selection styles ---

/// Active sidebar entry, selected news category
pub fn selected(p: &Palette) -> Style {
    Style::default()
        .fg(p.contrast_fg)
        .bg(p.accent)
        .add_modifier(Modifier::BOLD)
}

// --- Placeholders ---
pub fn skeleton(p: &Palette, lit: bool) -> Style {
    Style::default().bg(if lit { p.skeleton_shimmer } else { p.skeleton })
}

// --- Block builders ---
pub fn card_block(p: &Palette, focused: bool) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(if focused {
            p.border_active
        } else {
            p.border
        }))
        .style(Style::default().bg(p.surface))
}

// --- Phase indicator mapping ---

/// Phase indicator for the header's widget status strip.
///
/// Returns `(icon_char, label, Style)` for the given widget phase.
pub fn phase_indicator(phase: Phase, p: &Palette) -> (&'static str, &'static str, Style) {
    match phase {
        Phase::Idle => ("○", "Idle", text_muted(p)),
        Phase::Loading => (
            "↻",
            "Loading",
            Style::default().fg(p.warning).add_modifier(Modifier::BOLD),
        ),
        Phase::Ready => ("●", "Ready", positive(p)),
        Phase::Failed => ("✗", "Failed", negative(p)),
    }
}
