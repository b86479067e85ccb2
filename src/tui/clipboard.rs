//! System clipboard through the terminal (OSC 52)

use anyhow::Context;
use crossterm::{clipboard::CopyToClipboard, execute};

pub fn copy(text: &str) -> anyhow::Result<()> {
    let mut stdout = std::io::stdout();
    execute!(stdout, CopyToClipboard::to_clipboard_from(text)).context("write OSC 52 sequence")
}
