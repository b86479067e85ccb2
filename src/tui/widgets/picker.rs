//! Picker panel: label, code field, mode toggle and the color swatches

use crate::app::state::{AppState, Mode};
use crate::color::palette;
use crate::tui::theme::{get_theme, palette::text_on, Theme};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// ┌ hexmix ──────────────────────┐
/// │           красный            │
/// │ ╭──────────────────────────╮ │
/// │ │         #ff0000          │ │
/// │ ╰──────────────────────────╯ │
/// │   ◉ Basic       ○ Mixer      │
/// │                              │
/// │ › 1  красный       #ff0000   │
/// │   2  оранжевый     #ff7d00   │
/// └──────────────────────────────┘
pub fn render(frame: &mut Frame, state: &mut AppState, area: Rect) {
    let theme = get_theme();
    let icons = &theme.icons;

    let block = Block::default()
        .borders(Borders::ALL)
        .border_set(theme.border_set())
        .border_style(Style::default().fg(theme.palette.border))
        .title(format!(" {} hexmix ", icons.palette))
        .title_style(Style::default().fg(theme.palette.accent));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Label
            Constraint::Length(3), // Code field
            Constraint::Length(1), // Mode toggle
            Constraint::Length(1), // Spacer
            Constraint::Min(1),    // Swatches
        ])
        .split(inner);

    let label = Paragraph::new(Line::from(Span::styled(
        state.label.as_str(),
        Style::default().fg(theme.palette.fg_secondary),
    )))
    .alignment(Alignment::Center);
    frame.render_widget(label, rows[0]);

    render_code_field(frame, state, &theme, rows[1]);
    render_mode_toggle(frame, state, &theme, rows[2]);
    render_swatches(frame, state, &theme, rows[4]);
}

fn render_code_field(frame: &mut Frame, state: &AppState, theme: &Theme, area: Rect) {
    let field = Block::default()
        .borders(Borders::ALL)
        .border_set(theme.border_set())
        .border_style(Style::default().fg(theme.palette.border));

    let code = Paragraph::new(Line::from(Span::styled(
        state.code.as_str(),
        Style::default()
            .fg(theme.palette.fg_primary)
            .add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center)
    .block(field);
    frame.render_widget(code, area);
}

fn render_mode_toggle(frame: &mut Frame, state: &mut AppState, theme: &Theme, area: Rect) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    state.hit_areas.modes.clear();
    for (mode, rect) in [Mode::Basic, Mode::Mixer].into_iter().zip(cols.iter()) {
        let active = state.mode == mode;
        let (icon, style) = if active {
            (
                theme.icons.radio_on,
                Style::default()
                    .fg(theme.palette.accent)
                    .add_modifier(Modifier::BOLD),
            )
        } else {
            (theme.icons.radio_off, Style::default().fg(theme.palette.fg_secondary))
        };

        let line = Line::from(Span::styled(format!("{} {}", icon, mode.label()), style));
        frame.render_widget(Paragraph::new(line).alignment(Alignment::Center), *rect);
        state.hit_areas.modes.push((mode, *rect));
    }
}

fn render_swatches(frame: &mut Frame, state: &mut AppState, theme: &Theme, area: Rect) {
    let icons = &theme.icons;
    state.hit_areas.swatches.clear();

    for (i, entry) in palette::entries().iter().enumerate() {
        let row = i as u16;
        if row >= area.height {
            break;
        }
        let rect = Rect::new(area.x, area.y + row, area.width, 1);
        let is_selected = i == state.cursor;

        let prefix = if is_selected { icons.selected } else { icons.unselected };
        let line = Line::from(vec![
            Span::styled(format!("{} ", prefix), Style::default().fg(theme.palette.accent)),
            Span::styled(
                format!("{} ", i + 1),
                Style::default().fg(theme.palette.fg_secondary),
            ),
            Span::styled(
                format!(" {:<12}", entry.label),
                Style::default()
                    .fg(text_on(entry.rgb))
                    .bg(Color::from(entry.rgb)),
            ),
            Span::styled(
                format!(" {}", entry.hex_code),
                if is_selected {
                    Style::default()
                        .fg(theme.palette.fg_primary)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(theme.palette.fg_secondary)
                },
            ),
        ]);

        frame.render_widget(Paragraph::new(line), rect);
        state.hit_areas.swatches.push(rect);
    }
}
