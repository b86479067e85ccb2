use crate::color::palette;
use crate::mixer::Mixer;
use ratatui::layout::Rect;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Show the picked color's label and code.
    #[default]
    Basic,
    /// Add picked colors to the mixing session.
    Mixer,
}

impl Mode {
    pub fn toggle(self) -> Self {
        match self {
            Mode::Basic => Mode::Mixer,
            Mode::Mixer => Mode::Basic,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Mode::Basic => "Basic",
            Mode::Mixer => "Mixer",
        }
    }

    /// Name stored in the config file
    pub fn as_config_str(self) -> &'static str {
        match self {
            Mode::Basic => "basic",
            Mode::Mixer => "mixer",
        }
    }

    pub fn from_config_str(s: &str) -> Option<Self> {
        match s {
            "basic" => Some(Mode::Basic),
            "mixer" => Some(Mode::Mixer),
            _ => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Toast {
    pub message: String,
    pub kind: ToastKind,
    pub created_at: std::time::Instant,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

impl Toast {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: ToastKind::Success,
            created_at: std::time::Instant::now(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: ToastKind::Error,
            created_at: std::time::Instant::now(),
        }
    }

    pub fn is_expired(&self) -> bool {
        self.created_at.elapsed() > std::time::Duration::from_secs(3)
    }
}

/// Screen regions recorded by the last draw, used for mouse hit testing.
#[derive(Debug, Clone, Default)]
pub struct HitAreas {
    pub swatches: Vec<Rect>,
    pub modes: Vec<(Mode, Rect)>,
    pub reset: Option<Rect>,
}

impl HitAreas {
    pub fn swatch_at(&self, column: u16, row: u16) -> Option<usize> {
        self.swatches.iter().position(|r| contains(*r, column, row))
    }

    pub fn mode_at(&self, column: u16, row: u16) -> Option<Mode> {
        self.modes
            .iter()
            .find(|(_, r)| contains(*r, column, row))
            .map(|(mode, _)| *mode)
    }

    pub fn is_reset(&self, column: u16, row: u16) -> bool {
        self.reset.is_some_and(|r| contains(r, column, row))
    }
}

fn contains(r: Rect, column: u16, row: u16) -> bool {
    column >= r.x && column < r.x + r.width && row >= r.y && row < r.y + r.height
}

pub struct AppState {
    pub should_quit: bool,

    pub mode: Mode,
    /// Highlighted swatch
    pub cursor: usize,

    /// Label line above the code field
    pub label: String,
    /// Code field: the picked code in Basic mode, the mixed code in Mixer mode
    pub code: String,

    /// Present only while Mixer mode is active
    pub session: Option<Mixer>,

    pub show_help: bool,
    pub toast: Option<Toast>,
    pub hit_areas: HitAreas,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    pub fn new() -> Self {
        Self {
            should_quit: false,
            mode: Mode::Basic,
            cursor: 0,
            label: String::new(),
            code: String::new(),
            session: None,
            show_help: false,
            toast: None,
            hit_areas: HitAreas::default(),
        }
    }

    pub fn cursor_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn cursor_down(&mut self) {
        self.cursor = (self.cursor + 1).min(palette::entries().len().saturating_sub(1));
    }

    pub fn cursor_entry(&self) -> Option<&'static palette::ColorEntry> {
        palette::entries().get(self.cursor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_config_names() {
        for mode in [Mode::Basic, Mode::Mixer] {
            assert_eq!(Mode::from_config_str(mode.as_config_str()), Some(mode));
        }
        assert_eq!(Mode::from_config_str("nope"), None);
        assert_eq!(Mode::Basic.toggle(), Mode::Mixer);
        assert_eq!(Mode::Mixer.toggle(), Mode::Basic);
    }

    #[test]
    fn test_cursor_is_clamped() {
        let mut state = AppState::new();
        state.cursor_up();
        assert_eq!(state.cursor, 0);
        for _ in 0..20 {
            state.cursor_down();
        }
        assert_eq!(state.cursor, palette::entries().len() - 1);
        assert_eq!(state.cursor_entry().map(|e| e.symbol), Some("b7"));
    }

    #[test]
    fn test_hit_areas() {
        let areas = HitAreas {
            swatches: vec![Rect::new(0, 0, 10, 1), Rect::new(0, 1, 10, 1)],
            modes: vec![(Mode::Basic, Rect::new(0, 5, 5, 1)), (Mode::Mixer, Rect::new(6, 5, 5, 1))],
            reset: Some(Rect::new(20, 8, 8, 1)),
        };
        assert_eq!(areas.swatch_at(3, 1), Some(1));
        assert_eq!(areas.swatch_at(10, 0), None);
        assert_eq!(areas.mode_at(7, 5), Some(Mode::Mixer));
        assert_eq!(areas.mode_at(5, 5), None);
        assert!(areas.is_reset(27, 8));
        assert!(!areas.is_reset(28, 8));
    }
}
