pub mod actions;
pub mod events;
pub mod state;

use crate::color::palette;
use crate::config::Config;
use crate::input;
use crate::mixer::Mixer;
use crate::tui::{self, TuiTerminal};
use actions::Action;
use events::Event;
use state::{AppState, Mode, Toast};
use tokio::sync::mpsc;

pub struct App {
    cfg: Config,
    config_path: std::path::PathBuf,
    state: AppState,
}

impl App {
    pub fn new(cfg: Config, config_path: std::path::PathBuf) -> Self {
        let mut app = Self {
            cfg,
            config_path,
            state: AppState::new(),
        };

        // Restore last mode if available
        let last_mode = app.cfg.ui.last_mode.as_deref().and_then(Mode::from_config_str);
        if let Some(mode) = last_mode {
            app.reduce(Action::SetMode(mode));
        }

        app
    }

    pub async fn run(&mut self, terminal: &mut TuiTerminal) -> anyhow::Result<()> {
        let (tx, mut rx) = mpsc::channel::<Event>(256);

        input::spawn_input_task(tx, self.cfg.input.mouse);

        // Only needed so an expired toast disappears without waiting for input.
        let mut toast_ticker = tokio::time::interval(std::time::Duration::from_millis(500));

        tui::draw(terminal, &self.cfg, &mut self.state)?;

        loop {
            tokio::select! {
                ev = rx.recv() => {
                    let Some(Event::Input(input_ev)) = ev else {
                        break;
                    };
                    if let Some(action) = input::map_input_to_action(&self.state, input_ev) {
                        self.handle_action(action);
                    }
                }
                _ = toast_ticker.tick() => {
                    if self.state.toast.is_none() {
                        continue;
                    }
                }
            }

            if self.state.should_quit {
                break;
            }

            tui::draw(terminal, &self.cfg, &mut self.state)?;
        }

        self.save_state_on_quit();

        Ok(())
    }

    fn save_state_on_quit(&mut self) {
        self.cfg.ui.last_mode = Some(self.state.mode.as_config_str().to_string());

        if let Err(e) = crate::config::save(&self.cfg, Some(&self.config_path)) {
            tracing::warn!("failed to save config: {e:#}");
        }
    }

    fn handle_action(&mut self, action: Action) {
        match action {
            Action::Copy => self.copy_code(),
            _ => self.reduce(action),
        }
    }

    fn copy_code(&mut self) {
        if self.state.code.is_empty() {
            self.state.toast = Some(Toast::error("Nothing to copy"));
            return;
        }
        if !self.cfg.clipboard.osc52 {
            self.state.toast = Some(Toast::error("Clipboard is disabled in config"));
            return;
        }

        match tui::clipboard::copy(&self.state.code) {
            Ok(()) => {
                tracing::info!(code = %self.state.code, "copied to clipboard");
                self.state.toast = Some(Toast::success(format!("Copied {}", self.state.code)));
            }
            Err(e) => {
                tracing::warn!("clipboard copy failed: {e:#}");
                self.state.toast = Some(Toast::error(format!("Copy failed: {e:#}")));
            }
        }
    }

    fn reduce(&mut self, action: Action) {
        match action {
            Action::Quit => self.state.should_quit = true,
            Action::SetMode(mode) => self.set_mode(mode),
            Action::ToggleMode => self.set_mode(self.state.mode.toggle()),
            Action::CursorUp => self.state.cursor_up(),
            Action::CursorDown => self.state.cursor_down(),
            Action::CursorTop => self.state.cursor = 0,
            Action::CursorBottom => {
                self.state.cursor = palette::entries().len().saturating_sub(1);
            }
            Action::Activate => {
                if let Some(entry) = self.state.cursor_entry() {
                    self.pick(entry.symbol);
                }
            }
            Action::Pick(symbol) => self.pick(symbol),
            Action::StepBack => self.step_back(),
            Action::Reset => self.reset_mix(),
            Action::ToggleHelp => self.state.show_help = !self.state.show_help,
            Action::Copy | Action::Resize => {}
        }
    }

    fn set_mode(&mut self, mode: Mode) {
        if mode == self.state.mode {
            return;
        }

        match mode {
            Mode::Mixer => {
                self.state.session = Some(Mixer::new());
                self.state.label.clear();
                self.state.code.clear();
                tracing::info!("mixer session started");
            }
            Mode::Basic => {
                if let Some(mixer) = self.state.session.take() {
                    tracing::info!(colors = mixer.len(), "mixer session ended");
                }
                self.state.code.clear();
            }
        }

        self.state.mode = mode;
    }

    /// What a swatch does depends on the mode.
    fn pick(&mut self, symbol: &str) {
        let entry = match palette::resolve_entry(symbol) {
            Ok(entry) => entry,
            Err(e) => {
                tracing::error!("{e}");
                self.state.toast = Some(Toast::error(e.to_string()));
                return;
            }
        };

        if let Some(idx) = palette::entries().iter().position(|e| e.symbol == entry.symbol) {
            self.state.cursor = idx;
        }

        match self.state.mode {
            Mode::Basic => {
                self.state.label = entry.label.to_string();
                self.state.code = entry.hex_code.to_string();
            }
            Mode::Mixer => {
                let Some(mixer) = self.state.session.as_mut() else {
                    return;
                };
                match mixer.add(entry.hex_code) {
                    Ok(added) => {
                        let mixed = mixer.mix();
                        tracing::debug!(%added, %mixed, count = mixer.len(), "color added");
                        self.state.code = mixed.to_string();
                    }
                    Err(e) => {
                        self.state.toast = Some(Toast::error(e.to_string()));
                    }
                }
            }
        }
    }

    fn step_back(&mut self) {
        if self.state.mode != Mode::Mixer {
            return;
        }
        let Some(mixer) = self.state.session.as_mut() else {
            return;
        };

        if let Some(removed) = mixer.step_back() {
            tracing::debug!(%removed, count = mixer.len(), "step back");
        }
        self.state.code = if mixer.is_empty() {
            String::new()
        } else {
            mixer.mix().to_string()
        };
    }

    fn reset_mix(&mut self) {
        let Some(mixer) = self.state.session.as_mut() else {
            return;
        };
        mixer.reset();
        self.state.code.clear();
        tracing::debug!("mix reset");
    }
}
