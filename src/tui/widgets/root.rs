//! Root layout widget - orchestrates main layout structure

use crate::app::state::{AppState, Mode, ToastKind};
use crate::config::Config;
use crate::tui::theme::get_theme;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::{help, mixer_panel, picker, truncate_str};

const PICKER_WIDTH: u16 = 34;

/// Main layout structure:
/// ┌ hexmix ──────────┬──────────────────────────────────┐
/// │ label / code     │  Mixer mode: Mix list | Result    │
/// │ Basic  Mixer     │  Basic mode: hint                 │
/// │ swatches 1-7     │                                   │
/// ├──────────────────┴───────────────────────────────────┤
/// │ toast or key hints                                   │
/// └──────────────────────────────────────────────────────┘
pub fn render(frame: &mut Frame, cfg: &Config, state: &mut AppState) {
    let root = frame.area();

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(8),    // Picker + mixer
            Constraint::Length(1), // Status line
        ])
        .split(root);

    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(PICKER_WIDTH), Constraint::Min(20)])
        .split(rows[0]);

    picker::render(frame, state, cols[0]);

    match state.mode {
        Mode::Mixer => mixer_panel::render(frame, state, cols[1]),
        Mode::Basic => {
            state.hit_areas.reset = None;
            render_basic_hint(frame, cols[1]);
        }
    }

    render_status_line(frame, cfg, state, rows[1]);

    if state.show_help {
        help::render(frame, root);
    }
}

fn render_basic_hint(frame: &mut Frame, area: Rect) {
    let theme = get_theme();
    if area.height == 0 {
        return;
    }
    let middle = Rect::new(area.x, area.y + area.height / 2, area.width, 1);
    let hint = Paragraph::new(Line::from(Span::styled(
        "Tab opens the mixer",
        Style::default().fg(theme.palette.fg_secondary),
    )))
    .alignment(Alignment::Center);
    frame.render_widget(hint, middle);
}

/// Toast if one is active, otherwise the key hints for the current mode
fn render_status_line(frame: &mut Frame, cfg: &Config, state: &AppState, area: Rect) {
    let theme = get_theme();
    let icons = &theme.icons;
    let width = area.width as usize;

    if let Some(toast) = &state.toast
        && !toast.is_expired()
    {
        let (prefix, color) = match toast.kind {
            ToastKind::Success => (icons.success, theme.palette.success),
            ToastKind::Error => (icons.error, theme.palette.error),
        };
        let line = Line::from(vec![
            Span::styled(format!(" {} ", prefix), Style::default().fg(color)),
            Span::styled(
                truncate_str(&toast.message, width.saturating_sub(3)),
                Style::default().fg(color),
            ),
        ]);
        frame.render_widget(Paragraph::new(line), area);
        return;
    }

    if !cfg.ui.show_hints {
        return;
    }

    let hints = match state.mode {
        Mode::Basic => " 1-7: Show code  Tab: Mixer  Ctrl+c: Copy  ?: Help  q: Quit",
        Mode::Mixer => " 1-7: Add  Ctrl+z: Step back  r: Reset  Tab: Basic  Ctrl+c: Copy  ?: Help",
    };
    frame.render_widget(
        Paragraph::new(truncate_str(hints, width)).style(Style::default().fg(theme.palette.fg_secondary)),
        area,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::state::Toast;
    use crate::mixer::Mixer;
    use crate::tui::widgets::buffer_text;
    use ratatui::{backend::TestBackend, Terminal};

    fn draw(cfg: &Config, state: &mut AppState) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 20)).unwrap();
        terminal.draw(|f| render(f, cfg, state)).unwrap();
        buffer_text(terminal.backend().buffer())
    }

    #[test]
    fn test_basic_mode_shows_label_and_code() {
        let cfg = Config::default();
        let mut state = AppState::new();
        state.label = "красный".to_string();
        state.code = "#ff0000".to_string();

        let text = draw(&cfg, &mut state);
        assert!(text.contains("красный"));
        assert!(text.contains("#ff0000"));
        assert!(text.contains("Tab opens the mixer"));
        assert!(!text.contains("Result"));
        assert_eq!(state.hit_areas.swatches.len(), 7);
        assert_eq!(state.hit_areas.modes.len(), 2);
        assert!(state.hit_areas.reset.is_none());
    }

    #[test]
    fn test_mixer_mode_shows_list_and_result() {
        let cfg = Config::default();
        let mut state = AppState::new();
        state.mode = Mode::Mixer;
        let mut mixer = Mixer::new();
        mixer.add("#ff0000").unwrap();
        mixer.add("#0000ff").unwrap();
        state.code = mixer.mix().to_string();
        state.session = Some(mixer);

        let text = draw(&cfg, &mut state);
        assert!(text.contains("Mix"));
        assert!(text.contains("Result"));
        assert!(text.contains("синий"));
        assert!(text.contains("#7f007f"));
        assert!(text.contains("2 colors"));
        assert!(state.hit_areas.reset.is_some());
    }

    #[test]
    fn test_empty_mixer_renders_white() {
        let cfg = Config::default();
        let mut state = AppState::new();
        state.mode = Mode::Mixer;
        state.session = Some(Mixer::new());

        let text = draw(&cfg, &mut state);
        assert!(text.contains("#ffffff"));
        assert!(text.contains("empty"));
    }

    #[test]
    fn test_toast_replaces_hints() {
        let cfg = Config::default();
        let mut state = AppState::new();
        assert!(draw(&cfg, &mut state).contains("Ctrl+c: Copy"));

        state.toast = Some(Toast::success("Copied #ff0000"));
        let text = draw(&cfg, &mut state);
        assert!(text.contains("Copied #ff0000"));
        assert!(!text.contains("Ctrl+c: Copy"));
    }

    #[test]
    fn test_hints_can_be_hidden() {
        let mut cfg = Config::default();
        cfg.ui.show_hints = false;
        let mut state = AppState::new();
        assert!(!draw(&cfg, &mut state).contains("Ctrl+c: Copy"));
    }

    #[test]
    fn test_help_overlay() {
        let cfg = Config::default();
        let mut state = AppState::new();
        state.show_help = true;
        let text = draw(&cfg, &mut state);
        assert!(text.contains("Keybinds"));
        assert!(text.contains("Step back"));
    }
}
