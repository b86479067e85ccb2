//! Fixed table of named colors
//!
//! Each entry ties a short symbol (`b1`..`b7`) to a hex code and a display
//! label. The table never changes at runtime; `validate` is run once at
//! startup so a broken entry stops the process before any UI is shown.

use super::{ColorError, Rgb};
use std::collections::HashSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorEntry {
    pub symbol: &'static str,
    pub hex_code: &'static str,
    pub label: &'static str,
    pub rgb: Rgb,
}

impl ColorEntry {
    const fn new(symbol: &'static str, hex_code: &'static str, label: &'static str, rgb: Rgb) -> Self {
        Self {
            symbol,
            hex_code,
            label,
            rgb,
        }
    }
}

const ENTRIES: [ColorEntry; 7] = [
    ColorEntry::new("b1", "#ff0000", "красный", Rgb::new(0xff, 0x00, 0x00)),
    ColorEntry::new("b2", "#ff7d00", "оранжевый", Rgb::new(0xff, 0x7d, 0x00)),
    ColorEntry::new("b3", "#ffff00", "желтый", Rgb::new(0xff, 0xff, 0x00)),
    ColorEntry::new("b4", "#00ff00", "зеленый", Rgb::new(0x00, 0xff, 0x00)),
    ColorEntry::new("b5", "#007dff", "голубой", Rgb::new(0x00, 0x7d, 0xff)),
    ColorEntry::new("b6", "#0000ff", "синий", Rgb::new(0x00, 0x00, 0xff)),
    ColorEntry::new("b7", "#7d00ff", "фиолетовый", Rgb::new(0x7d, 0x00, 0xff)),
];

/// All entries in display order.
pub fn entries() -> &'static [ColorEntry] {
    &ENTRIES
}

pub fn resolve_entry(symbol: &str) -> Result<&'static ColorEntry, ColorError> {
    ENTRIES
        .iter()
        .find(|e| e.symbol == symbol)
        .ok_or_else(|| ColorError::NotFound(symbol.to_string()))
}

pub fn resolve_hex(symbol: &str) -> Result<&'static str, ColorError> {
    resolve_entry(symbol).map(|e| e.hex_code)
}

/// Label for a hex code; the code is matched case-insensitively.
pub fn resolve_label(hex_code: &str) -> Result<&'static str, ColorError> {
    ENTRIES
        .iter()
        .find(|e| e.hex_code.eq_ignore_ascii_case(hex_code))
        .map(|e| e.label)
        .ok_or_else(|| ColorError::NotFound(hex_code.to_string()))
}

/// Label for a parsed color, if it is one of the table colors.
pub fn label_for(rgb: Rgb) -> Option<&'static str> {
    ENTRIES.iter().find(|e| e.rgb == rgb).map(|e| e.label)
}

/// Check the table: every code is canonical and matches its channels,
/// symbols and codes are unique.
pub fn validate() -> Result<(), ColorError> {
    check(&ENTRIES)
}

fn check(entries: &[ColorEntry]) -> Result<(), ColorError> {
    let mut symbols = HashSet::new();
    let mut codes = HashSet::new();

    for entry in entries {
        let parsed = Rgb::parse(entry.hex_code)?;
        if parsed != entry.rgb || parsed.to_string() != entry.hex_code {
            return Err(ColorError::InvalidColor(entry.hex_code.to_string()));
        }
        if !symbols.insert(entry.symbol) {
            return Err(ColorError::InvalidColor(format!("duplicate symbol {}", entry.symbol)));
        }
        if !codes.insert(entry.hex_code) {
            return Err(ColorError::InvalidColor(format!("duplicate code {}", entry.hex_code)));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_is_valid() {
        assert_eq!(validate(), Ok(()));
        assert_eq!(entries().len(), 7);
    }

    #[test]
    fn test_resolve_hex() {
        assert_eq!(resolve_hex("b1"), Ok("#ff0000"));
        assert_eq!(resolve_hex("b7"), Ok("#7d00ff"));
        assert_eq!(
            resolve_hex("unknown"),
            Err(ColorError::NotFound("unknown".to_string()))
        );
    }

    #[test]
    fn test_resolve_label() {
        assert_eq!(resolve_label("#ff0000"), Ok("красный"));
        assert_eq!(resolve_label("#007DFF"), Ok("голубой"));
        assert!(matches!(resolve_label("#123456"), Err(ColorError::NotFound(_))));
    }

    #[test]
    fn test_every_symbol_round_trips_to_a_label() {
        for entry in entries() {
            let code = resolve_hex(entry.symbol).unwrap();
            assert_eq!(resolve_label(code), Ok(entry.label));
            assert_eq!(label_for(entry.rgb), Some(entry.label));
        }
        assert_eq!(label_for(Rgb::new(1, 2, 3)), None);
    }

    #[test]
    fn test_check_rejects_bad_tables() {
        let red = ENTRIES[0];

        let mismatched = [ColorEntry::new("x", "#ff0000", "x", Rgb::new(0, 0, 0))];
        assert!(check(&mismatched).is_err());

        let uppercase = [ColorEntry::new("x", "#FF0000", "x", red.rgb)];
        assert!(check(&uppercase).is_err());

        let dup_symbol = [red, ColorEntry { hex_code: "#000000", rgb: Rgb::new(0, 0, 0), ..red }];
        assert!(check(&dup_symbol).is_err());

        let dup_code = [red, ColorEntry { symbol: "b9", ..red }];
        assert!(check(&dup_code).is_err());
    }
}
