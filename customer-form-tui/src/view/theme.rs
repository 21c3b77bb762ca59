//! Colour themes and shared styles
//!
//! The active theme is a process-wide atomic so render functions can call
//! `colors()` without threading the config through every component.

use std::sync::atomic::{AtomicU8, Ordering};

use ratatui::style::{Color, Modifier, Style};
use serde::{Deserialize, Serialize};

static ACTIVE: AtomicU8 = AtomicU8::new(Theme::Dark as u8);

/// Colour theme, saved in the config file
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[repr(u8)]
pub enum Theme {
    #[default]
    Dark = 0,
    Light = 1,
}

impl Theme {
    /// The other theme
    #[must_use]
    pub fn next(self) -> Theme {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    fn palette(self) -> &'static ThemeColors {
        match self {
            Theme::Dark => &DARK,
            Theme::Light => &LIGHT,
        }
    }
}

/// Make `theme` the one `colors()` returns
pub fn set_theme(theme: Theme) {
    ACTIVE.store(theme as u8, Ordering::Relaxed);
}

/// Palette of the active theme
pub fn colors() -> &'static ThemeColors {
    let theme = if ACTIVE.load(Ordering::Relaxed) == Theme::Light as u8 {
        Theme::Light
    } else {
        Theme::Dark
    };
    theme.palette()
}

/// Theme palette
#[derive(Debug, Clone, Copy)]
pub struct ThemeColors {
    pub bg: Color,
    pub fg: Color,
    pub border: Color,
    pub border_focused: Color,
    /// Title bar, status bar and section headings
    pub highlight: Color,
    pub selected_bg: Color,
    pub selected_fg: Color,
    /// Submit button
    pub success: Color,
    /// Record being edited
    pub warning: Color,
    /// Inline validation error, required-field marker
    pub error: Color,
    /// Placeholders, captions, labels
    pub muted: Color,
}

const DARK: ThemeColors = ThemeColors {
    bg: Color::Rgb(24, 26, 31),
    fg: Color::Rgb(220, 223, 228),
    border: Color::Rgb(70, 74, 84),
    border_focused: Color::Rgb(97, 175, 239),
    highlight: Color::Rgb(40, 90, 150),
    selected_bg: Color::Rgb(50, 70, 100),
    selected_fg: Color::White,
    success: Color::Rgb(152, 195, 121),
    warning: Color::Rgb(229, 192, 123),
    error: Color::Rgb(224, 108, 117),
    muted: Color::Rgb(125, 130, 140),
};

const LIGHT: ThemeColors = ThemeColors {
    bg: Color::Rgb(248, 248, 246),
    fg: Color::Rgb(40, 44, 52),
    border: Color::Rgb(200, 202, 206),
    border_focused: Color::Rgb(30, 110, 200),
    highlight: Color::Rgb(30, 110, 200),
    selected_bg: Color::Rgb(210, 228, 250),
    selected_fg: Color::Black,
    success: Color::Rgb(40, 130, 60),
    warning: Color::Rgb(160, 110, 0),
    error: Color::Rgb(200, 40, 50),
    muted: Color::Rgb(120, 124, 130),
};

/// Styles shared by several components
pub struct Styles;

impl Styles {
    pub fn border(focused: bool) -> Style {
        let c = colors();
        Style::default().fg(if focused { c.border_focused } else { c.border })
    }

    /// Selected table row or focused button
    pub fn selected() -> Style {
        let c = colors();
        Style::default()
            .bg(c.selected_bg)
            .fg(c.selected_fg)
            .add_modifier(Modifier::BOLD)
    }

    pub fn title() -> Style {
        Style::default().fg(colors().fg).add_modifier(Modifier::BOLD)
    }

    /// Title bar and status bar
    pub fn statusbar() -> Style {
        let c = colors();
        Style::default().bg(c.highlight).fg(c.selected_fg)
    }

    pub fn hint_key() -> Style {
        Style::default()
            .fg(colors().warning)
            .add_modifier(Modifier::BOLD)
    }

    pub fn hint_desc() -> Style {
        Style::default().fg(colors().selected_fg)
    }
}
