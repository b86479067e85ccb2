//! Nerd Font icons for TUI display
//! Requires a Nerd Font to be installed (https://www.nerdfonts.com)

/// Icon set using Nerd Font glyphs
#[derive(Debug, Clone)]
pub struct Icons {
    pub palette: &'static str,
    pub mixer: &'static str,
    pub result: &'static str,
    pub reset: &'static str,
    pub help: &'static str,

    // Status
    pub success: &'static str,
    pub error: &'static str,

    // Selection
    pub selected: &'static str,
    pub unselected: &'static str,
    pub radio_on: &'static str,
    pub radio_off: &'static str,

    pub swatch: &'static str,
}

impl Icons {
    /// Nerd Font icon set
    pub const fn nerd() -> Self {
        Self {
            palette: "\u{f1fc}",        // nf-fa-paint_brush
            mixer: "\u{f0c3}",          // nf-fa-flask
            result: "\u{f53f}",         // nf-fa-palette
            reset: "\u{f0e2}",          // nf-fa-undo
            help: "\u{f059}",           // nf-fa-question_circle

            success: "\u{f00c}",        // nf-fa-check
            error: "\u{f00d}",          // nf-fa-times

            selected: "\u{f054}",       // nf-fa-chevron_right
            unselected: " ",
            radio_on: "\u{f192}",       // nf-fa-dot_circle_o
            radio_off: "\u{f10c}",      // nf-fa-circle_o

            swatch: "█",
        }
    }
}

impl Default for Icons {
    fn default() -> Self {
        Self::nerd()
    }
}
