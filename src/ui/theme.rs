use ratatui::style::Color;

use crate::config::{ThemeOverrides, parse_color};

// Palette defaults: steel-blue accent, sky-blue selection.
pub const ACCENT: Color = Color::Rgb(0x6a, 0x9e, 0xba);
pub const SELECTED: Color = Color::Rgb(0x8c, 0xd0, 0xf5);
pub const DISABLED: Color = Color::DarkGray;
pub const WEEKEND: Color = Color::Gray;
pub const TEXT: Color = Color::White;
pub const TEXT_ON_ACCENT: Color = Color::Black;
pub const BORDER: Color = Color::White;
pub const CLEARED: Color = Color::DarkGray;

// Glyphs
pub const GLYPH_PREV: &str = "‹";
pub const GLYPH_NEXT: &str = "›";
pub const OK_LABEL: &str = " OK ";

/// Placeholder shown when a field has been cleared.
pub const EMPTY_MONTH: &str = "---";
pub const EMPTY_YEAR: &str = "----";
pub const EMPTY_TIME: &str = "--";

/// Resolved style table for one picker instance. Defaults mirror the
/// constants above; config overrides replace individual entries.
#[derive(Clone, Copy, Debug)]
pub struct Theme {
    pub accent: Color,
    pub selected: Color,
    pub disabled: Color,
    pub weekend: Color,
    pub text: Color,
    pub text_on_accent: Color,
    pub border: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            accent: ACCENT,
            selected: SELECTED,
            disabled: DISABLED,
            weekend: WEEKEND,
            text: TEXT,
            text_on_accent: TEXT_ON_ACCENT,
            border: BORDER,
        }
    }
}

impl Theme {
    #[must_use]
    pub fn from_overrides(overrides: &ThemeOverrides) -> Self {
        let mut theme = Self::default();
        if let Some(color) = overrides.accent.as_deref().and_then(parse_color) {
            theme.accent = color;
        }
        if let Some(color) = overrides.selected.as_deref().and_then(parse_color) {
            theme.selected = color;
        }
        if let Some(color) = overrides.disabled.as_deref().and_then(parse_color) {
            theme.disabled = color;
        }
        if let Some(color) = overrides.weekend.as_deref().and_then(parse_color) {
            theme.weekend = color;
        }
        theme
    }
}
