//! Mixer panel - picked colors and the mixed result

use crate::app::state::AppState;
use crate::color::palette;
use crate::mixer::{Mixer, MixerPhase};
use crate::tui::theme::{get_theme, palette::text_on, Theme};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::truncate_str;

pub fn render(frame: &mut Frame, state: &mut AppState, area: Rect) {
    let theme = get_theme();

    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(area);

    let empty = Mixer::new();
    let mixer = state.session.as_ref().unwrap_or(&empty);

    render_mix_list(frame, mixer, &theme, cols[0]);
    render_result(frame, mixer, &theme, cols[1]);

    // Reset button sits on the bottom border of the list
    let reset = reset_button_area(cols[0]);
    let label = format!("[ {} Reset ]", theme.icons.reset);
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            label,
            Style::default().fg(theme.palette.accent_alt),
        )))
        .alignment(Alignment::Center),
        reset,
    );
    state.hit_areas.reset = Some(reset);
}

fn reset_button_area(list_area: Rect) -> Rect {
    let y = list_area.y + list_area.height.saturating_sub(1);
    Rect::new(list_area.x + 1, y, list_area.width.saturating_sub(2), 1)
}

fn render_mix_list(frame: &mut Frame, mixer: &Mixer, theme: &Theme, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_set(theme.border_set())
        .border_style(Style::default().fg(theme.palette.border))
        .title(format!(" {} Mix ", theme.icons.mixer))
        .title_style(Style::default().fg(theme.palette.accent));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if mixer.is_empty() {
        let hint = Paragraph::new(Line::from(Span::styled(
            "Pick colors with 1-7",
            Style::default().fg(theme.palette.fg_secondary),
        )));
        frame.render_widget(hint, inner);
        return;
    }

    // Keep the newest picks visible
    let visible = inner.height as usize;
    let skip = mixer.len().saturating_sub(visible);
    let last = mixer.len() - 1;
    let max_width = inner.width.saturating_sub(7) as usize;

    let lines: Vec<Line> = mixer
        .selections()
        .iter()
        .enumerate()
        .skip(skip)
        .map(|(i, rgb)| {
            let name = palette::label_for(*rgb)
                .map(str::to_string)
                .unwrap_or_else(|| rgb.to_string());
            let style = if i == last {
                Style::default()
                    .fg(theme.palette.fg_primary)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(theme.palette.fg_primary)
            };
            Line::from(vec![
                Span::styled(format!("{:>3}. ", i + 1), Style::default().fg(theme.palette.fg_secondary)),
                Span::styled(
                    format!("{0}{0} ", theme.icons.swatch),
                    Style::default().fg(Color::from(*rgb)),
                ),
                Span::styled(truncate_str(&name, max_width), style),
            ])
        })
        .collect();

    frame.render_widget(Paragraph::new(lines), inner);
}

fn render_result(frame: &mut Frame, mixer: &Mixer, theme: &Theme, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_set(theme.border_set())
        .border_style(Style::default().fg(theme.palette.border))
        .title(format!(" {} Result ", theme.icons.result))
        .title_style(Style::default().fg(theme.palette.accent));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([Constraint::Min(1), Constraint::Length(1)])
        .split(inner);

    let mixed = mixer.mix();
    let swatch = Block::default().style(Style::default().bg(Color::from(mixed)));
    frame.render_widget(swatch, rows[0]);

    let count = match (mixer.phase(), mixer.len()) {
        (MixerPhase::Empty, _) => "empty".to_string(),
        (MixerPhase::NonEmpty, 1) => "1 color".to_string(),
        (MixerPhase::NonEmpty, n) => format!("{n} colors"),
    };
    let caption = Line::from(vec![
        Span::styled(
            mixed.to_string(),
            Style::default()
                .fg(theme.palette.fg_primary)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(format!("  {count}"), Style::default().fg(theme.palette.fg_secondary)),
    ]);
    frame.render_widget(Paragraph::new(caption).alignment(Alignment::Center), rows[1]);

    // Put the code on the swatch as well when there is room
    if rows[0].height >= 3 {
        let center = Rect::new(rows[0].x, rows[0].y + rows[0].height / 2, rows[0].width, 1);
        let on_swatch = Paragraph::new(Line::from(Span::styled(
            mixed.to_string(),
            Style::default().fg(text_on(mixed)).bg(Color::from(mixed)),
        )))
        .alignment(Alignment::Center);
        frame.render_widget(on_swatch, center);
    }
}
