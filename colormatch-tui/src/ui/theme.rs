//! Light and dark palettes

use libcolormatch::{Rgb, Theme};
use ratatui::style::Color;

/// Colors used for screen chrome (everything except game tiles)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: Color,
    pub text: Color,
    pub button: Color,
    pub button_text: Color,
    pub tile_border: Color,
    pub accent: Color,
    pub hint: Color,
}

impl Palette {
    pub fn for_theme(theme: Theme, colors_enabled: bool) -> Self {
        if !colors_enabled {
            return Self::monochrome();
        }
        match theme {
            Theme::Light => Self {
                background: Color::Rgb(0xf4, 0xf4, 0xf4),
                text: Color::Rgb(0x33, 0x33, 0x33),
                button: Color::Rgb(0x4c, 0xaf, 0x50),
                button_text: Color::Rgb(0xff, 0xff, 0xff),
                tile_border: Color::Rgb(0x92, 0x9a, 0xab),
                accent: Color::Rgb(0x49, 0x56, 0x64),
                hint: Color::Rgb(0x5c, 0x63, 0x6e),
            },
            Theme::Dark => Self {
                background: Color::Rgb(0x02, 0x15, 0x26),
                text: Color::Rgb(0xff, 0xff, 0xff),
                button: Color::Rgb(0xf4, 0xce, 0x14),
                button_text: Color::Rgb(0x00, 0x00, 0x00),
                tile_border: Color::Rgb(0xff, 0xff, 0xff),
                accent: Color::Rgb(0xf4, 0xce, 0x14),
                hint: Color::Rgb(0xff, 0xfa, 0xe7),
            },
        }
    }

    fn monochrome() -> Self {
        Self {
            background: Color::Reset,
            text: Color::Reset,
            button: Color::Reset,
            button_text: Color::Reset,
            tile_border: Color::Reset,
            accent: Color::Reset,
            hint: Color::Reset,
        }
    }

    pub fn correct(&self) -> Color {
        if self.text == Color::Reset {
            Color::Reset
        } else {
            Color::Green
        }
    }

    pub fn incorrect(&self) -> Color {
        if self.text == Color::Reset {
            Color::Reset
        } else {
            Color::Red
        }
    }
}

/// Terminal color for a game color
pub fn tile_color(color: Rgb) -> Color {
    Color::Rgb(color.r, color.g, color.b)
}

/// Readable text color on top of `color`
pub fn label_color(color: Rgb) -> Color {
    if color.is_light() {
        Color::Black
    } else {
        Color::White
    }
}

/// Glyph for the theme toggle
pub fn theme_icon(theme: Theme) -> &'static str {
    match theme {
        Theme::Light => "☀",
        Theme::Dark => "☾",
    }
}
