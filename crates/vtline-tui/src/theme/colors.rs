//! Catppuccin color palettes for the timeline.

use ratatui::style::Color;
use vtline_engine::ThemeName;

/// Theme color palette.
#[derive(Debug, Clone)]
pub struct Theme {
    // Background
    pub base: Color,

    // Foregrounds
    pub text: Color,
    pub subtext: Color,
    pub muted: Color,

    // Accent
    pub primary: Color,

    // Semantic
    pub error: Color,

    // Axis
    pub axis: Color,
    pub tick_dot: Color,

    // Borders
    pub border: Color,
    pub border_focused: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::mocha()
    }
}

impl Theme {
    /// Palette for a configured theme name.
    pub fn from_name(name: ThemeName) -> Self {
        match name {
            ThemeName::Mocha => Self::mocha(),
            ThemeName::Latte => Self::latte(),
            ThemeName::HighContrast => Self::high_contrast(),
        }
    }

    /// Catppuccin Mocha theme (default dark theme).
    pub fn mocha() -> Self {
        Self {
            base: Color::Rgb(30, 30, 46),    // #1e1e2e

            text: Color::Rgb(205, 214, 244),    // #cdd6f4
            subtext: Color::Rgb(166, 173, 200), // #a6adc8
            muted: Color::Rgb(108, 112, 134),   // #6c7086

            primary: Color::Rgb(180, 190, 254),   // #b4befe (lavender)

            error: Color::Rgb(243, 139, 168), // #f38ba8 (red)

            axis: Color::Rgb(88, 91, 112),       // #585b70
            tick_dot: Color::Rgb(250, 179, 135), // #fab387 (peach)

            border: Color::Rgb(69, 71, 90),            // #45475a
            border_focused: Color::Rgb(180, 190, 254), // #b4befe
        }
    }

    /// Catppuccin Latte theme (light theme).
    pub fn latte() -> Self {
        Self {
            base: Color::Rgb(239, 241, 245),    // #eff1f5

            text: Color::Rgb(76, 79, 105),    // #4c4f69
            subtext: Color::Rgb(92, 95, 119), // #5c5f77
            muted: Color::Rgb(140, 143, 161), // #8c8fa1

            primary: Color::Rgb(114, 135, 253),  // #7287fd (lavender)

            error: Color::Rgb(210, 15, 57), // #d20f39 (red)

            axis: Color::Rgb(172, 176, 190),   // #acb0be
            tick_dot: Color::Rgb(254, 100, 11), // #fe640b (peach)

            border: Color::Rgb(188, 192, 204),         // #bcc0cc
            border_focused: Color::Rgb(114, 135, 253), // #7287fd
        }
    }

    /// High contrast theme for accessibility.
    pub fn high_contrast() -> Self {
        Self {
            base: Color::Black,

            text: Color::White,
            subtext: Color::Rgb(200, 200, 200),
            muted: Color::Rgb(150, 150, 150),

            primary: Color::Cyan,

            error: Color::Red,

            axis: Color::White,
            tick_dot: Color::Yellow,

            border: Color::White,
            border_focused: Color::Cyan,
        }
    }
}
