//! Hex color values
//!
//! A color is written as `#rrggbb`. Parsing accepts either case, display is
//! always lowercase with every channel padded to two digits.

use std::fmt;
use std::str::FromStr;

pub mod palette;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ColorError {
    #[error("unknown color: {0}")]
    NotFound(String),

    #[error("invalid color code {0:?} (expected #rrggbb)")]
    InvalidColor(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const WHITE: Self = Self::new(0xff, 0xff, 0xff);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `#rrggbb` (hex digits in either case).
    pub fn parse(code: &str) -> Result<Self, ColorError> {
        let invalid = || ColorError::InvalidColor(code.to_string());

        let digits = code.strip_prefix('#').ok_or_else(invalid)?;
        let mut channels = [0u8; 3];
        hex::decode_to_slice(digits, &mut channels).map_err(|_| invalid())?;

        let [r, g, b] = channels;
        Ok(Self::new(r, g, b))
    }

    pub fn channels(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// Whether dark text reads better than light text on top of this color.
    pub fn is_light(self) -> bool {
        let [r, g, b] = self.channels().map(u32::from);
        (299 * r + 587 * g + 114 * b) / 1000 >= 128
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", hex::encode(self.channels()))
    }
}

impl FromStr for Rgb {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
