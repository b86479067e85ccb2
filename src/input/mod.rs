use crate::app::actions::Action;
use crate::app::events::{Event, InputEvent};
use crate::app::state::{AppState, Mode};
use crate::color::palette;
use crossterm::event::{
    self, Event as CtEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton,
    MouseEvent, MouseEventKind,
};
use tokio::sync::mpsc;

pub fn spawn_input_task(tx: mpsc::Sender<Event>, mouse_enabled: bool) {
    tokio::task::spawn_blocking(move || {
        while !tx.is_closed() {
            if !event::poll(std::time::Duration::from_millis(250)).unwrap_or(false) {
                continue;
            }
            let ev = match event::read() {
                Ok(CtEvent::Key(k)) if k.kind == KeyEventKind::Press => InputEvent::Key(k),
                Ok(CtEvent::Mouse(m)) if mouse_enabled => InputEvent::Mouse(m),
                Ok(CtEvent::Resize(_, _)) => InputEvent::Resize,
                Ok(_) => continue,
                Err(e) => {
                    tracing::warn!("terminal read failed: {e}");
                    continue;
                }
            };
            if tx.blocking_send(Event::Input(ev)).is_err() {
                break;
            }
        }
    });
}

pub fn map_input_to_action(state: &AppState, ev: InputEvent) -> Option<Action> {
    match ev {
        InputEvent::Resize => Some(Action::Resize),
        InputEvent::Mouse(m) => handle_mouse(state, m),
        InputEvent::Key(k) if state.show_help => handle_help_overlay(k),
        InputEvent::Key(k) => handle_key(state, k),
    }
}

fn handle_help_overlay(k: KeyEvent) -> Option<Action> {
    match k.code {
        KeyCode::Char('q') => Some(Action::Quit),
        // Any other key closes the overlay
        _ => Some(Action::ToggleHelp),
    }
}

fn handle_key(state: &AppState, k: KeyEvent) -> Option<Action> {
    let ctrl = k.modifiers.contains(KeyModifiers::CONTROL);

    match k.code {
        // Clipboard / undo, same chords as a desktop app
        KeyCode::Char('c') | KeyCode::Char('C') if ctrl => Some(Action::Copy),
        KeyCode::Char('z') | KeyCode::Char('Z') if ctrl => Some(Action::StepBack),

        // Quit
        KeyCode::Char('q') => Some(Action::Quit),
        KeyCode::Esc => Some(Action::Quit),

        // Swatches
        KeyCode::Char(c @ '1'..='9') => {
            let idx = c as usize - '1' as usize;
            palette::entries().get(idx).map(|e| Action::Pick(e.symbol))
        }
        KeyCode::Up | KeyCode::Char('k') => Some(Action::CursorUp),
        KeyCode::Down | KeyCode::Char('j') => Some(Action::CursorDown),
        KeyCode::Char('g') | KeyCode::Home => Some(Action::CursorTop),
        KeyCode::Char('G') | KeyCode::End => Some(Action::CursorBottom),
        KeyCode::Enter | KeyCode::Char(' ') => Some(Action::Activate),

        // Mode
        KeyCode::Tab | KeyCode::BackTab | KeyCode::Char('m') => Some(Action::ToggleMode),
        KeyCode::Char('b') => Some(Action::SetMode(Mode::Basic)),
        KeyCode::Char('x') => Some(Action::SetMode(Mode::Mixer)),

        // Mixer
        KeyCode::Char('u') | KeyCode::Backspace if state.mode == Mode::Mixer => {
            Some(Action::StepBack)
        }
        KeyCode::Char('r') if state.mode == Mode::Mixer => Some(Action::Reset),

        KeyCode::Char('y') => Some(Action::Copy),
        KeyCode::Char('?') | KeyCode::F(1) => Some(Action::ToggleHelp),

        _ => None,
    }
}

fn handle_mouse(state: &AppState, m: MouseEvent) -> Option<Action> {
    match m.kind {
        MouseEventKind::ScrollUp => Some(Action::CursorUp),
        MouseEventKind::ScrollDown => Some(Action::CursorDown),
        MouseEventKind::Down(MouseButton::Left) => {
            if state.show_help {
                return Some(Action::ToggleHelp);
            }
            let areas = &state.hit_areas;
            if let Some(idx) = areas.swatch_at(m.column, m.row) {
                return palette::entries().get(idx).map(|e| Action::Pick(e.symbol));
            }
            if let Some(mode) = areas.mode_at(m.column, m.row) {
                return Some(Action::SetMode(mode));
            }
            if areas.is_reset(m.column, m.row) {
                return Some(Action::Reset);
            }
            None
        }
        _ => None,
    }
}
