//! Color palette - Monochrome grayscale theme

use crate::color::Rgb;
use ratatui::style::Color;

/// Monochrome grayscale palette
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub fg_primary: Color,
    pub fg_secondary: Color,
    pub accent: Color,
    pub accent_alt: Color,
    pub border: Color,
    pub success: Color,
    pub error: Color,
}

impl Palette {
    /// Monochrome palette - pure black, white, and grays
    pub const MONO: Self = Self {
        fg_primary: Color::Rgb(255, 255, 255),   // #ffffff white
        fg_secondary: Color::Rgb(136, 136, 136), // #888888 medium gray
        accent: Color::Rgb(255, 255, 255),       // #ffffff white (accent = white)
        accent_alt: Color::Rgb(200, 200, 200),   // #c8c8c8 light gray
        border: Color::Rgb(64, 64, 64),          // #404040 dark gray
        success: Color::Rgb(255, 255, 255),      // #ffffff white
        error: Color::Rgb(255, 255, 255),        // #ffffff white (errors still visible via icon)
    };
}

impl Default for Palette {
    fn default() -> Self {
        Self::MONO
    }
}

impl From<Rgb> for Color {
    fn from(rgb: Rgb) -> Self {
        Color::Rgb(rgb.r, rgb.g, rgb.b)
    }
}

/// Readable text color on top of a swatch
pub fn text_on(rgb: Rgb) -> Color {
    if rgb.is_light() {
        Color::Rgb(0, 0, 0)
    } else {
        Color::Rgb(255, 255, 255)
    }
}
