pub mod help;
pub mod mixer_panel;
pub mod picker;
pub mod root;

/// Shorten to `max_len` characters, ending with "..." when cut.
pub fn truncate_str(s: &str, max_len: usize) -> String {
    if max_len == 0 {
        return String::new();
    }
    let char_count: usize = s.chars().count();
    if char_count <= max_len {
        s.to_string()
    } else if max_len > 3 {
        let truncated: String = s.chars().take(max_len - 3).collect();
        format!("{}...", truncated)
    } else {
        s.chars().take(max_len).collect()
    }
}

#[cfg(test)]
pub(crate) fn buffer_text(buffer: &ratatui::buffer::Buffer) -> String {
    let width = buffer.area.width as usize;
    let mut out = String::new();
    for (i, cell) in buffer.content().iter().enumerate() {
        out.push_str(cell.symbol());
        if (i + 1) % width == 0 {
            out.push('\n');
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_str() {
        assert_eq!(truncate_str("фиолетовый", 20), "фиолетовый");
        assert_eq!(truncate_str("фиолетовый", 7), "фиол...");
        assert_eq!(truncate_str("abc", 2), "ab");
        assert_eq!(truncate_str("abc", 0), "");
    }
}
