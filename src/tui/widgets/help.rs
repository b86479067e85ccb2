//! Help overlay showing keybindings

use crate::tui::theme::{get_theme, Theme};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// Render the help overlay centered in `area`
pub fn render(frame: &mut Frame, area: Rect) {
    let theme = get_theme();
    let icons = &theme.icons;

    let popup = centered_rect(area, 64, 18);
    frame.render_widget(Clear, popup);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_set(theme.border_set())
        .border_style(Style::default().fg(theme.palette.border))
        .title(format!(" {} Keybinds ", icons.help))
        .title_style(Style::default().fg(theme.palette.accent));

    let inner = block.inner(popup);
    frame.render_widget(block, popup);

    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(inner);

    let left_content = vec![
        section_header("Colors", &theme),
        keybind("1-7", "Pick color", &theme),
        keybind("j / Down", "Move down", &theme),
        keybind("k / Up", "Move up", &theme),
        keybind("g / G", "First / last", &theme),
        keybind("Enter", "Pick selected", &theme),
        keybind("Click", "Pick color", &theme),
        Line::default(),
        section_header("Mode", &theme),
        keybind("Tab / m", "Toggle mode", &theme),
        keybind("b", "Basic", &theme),
        keybind("x", "Mixer", &theme),
    ];

    let right_content = vec![
        section_header("Mixer", &theme),
        keybind("Ctrl+z / u", "Step back", &theme),
        keybind("Backspace", "Step back", &theme),
        keybind("r", "Reset mix", &theme),
        Line::default(),
        section_header("General", &theme),
        keybind("Ctrl+c / y", "Copy code", &theme),
        keybind("? / F1", "Toggle help", &theme),
        keybind("q / Esc", "Quit", &theme),
    ];

    frame.render_widget(Paragraph::new(left_content).wrap(Wrap { trim: false }), cols[0]);
    frame.render_widget(Paragraph::new(right_content).wrap(Wrap { trim: false }), cols[1]);
}

fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

fn section_header(title: &str, theme: &Theme) -> Line<'static> {
    Line::from(vec![Span::styled(
        format!("━━ {} ━━", title),
        Style::default()
            .fg(theme.palette.accent)
            .add_modifier(Modifier::BOLD),
    )])
}

fn keybind(key: &str, desc: &str, theme: &Theme) -> Line<'static> {
    Line::from(vec![
        Span::styled("  ", Style::default()),
        Span::styled(
            format!("{:12}", key),
            Style::default()
                .fg(theme.palette.accent_alt)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(desc.to_string(), Style::default().fg(theme.palette.fg_primary)),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_rect_fits() {
        let area = Rect::new(0, 0, 100, 40);
        assert_eq!(centered_rect(area, 64, 18), Rect::new(18, 11, 64, 18));

        let small = Rect::new(2, 1, 30, 10);
        assert_eq!(centered_rect(small, 64, 18), small);
    }
}
