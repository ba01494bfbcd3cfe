//! Text width and truncation utilities.
//!
//! Card titles are clipped to the card width in terminal cells, not bytes.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Get the visual width of a string in terminal cells.
pub fn visual_width(s: &str) -> usize {
    UnicodeWidthStr::width(s)
}

/// Truncate a string to fit within a maximum visual width.
///
/// Appends "..." when truncation occurs and there is room for it.
pub fn truncate_to_width(s: &str, max_width: usize) -> String {
    if visual_width(s) <= max_width {
        return s.to_string();
    }

    if max_width <= 3 {
        return take_width(s, max_width);
    }

    let mut result = take_width(s, max_width - 3);
    result.push_str("...");
    result
}

/// Longest prefix of `s` that fits in `max_width` cells.
fn take_width(s: &str, max_width: usize) -> String {
    let mut result = String::new();
    let mut width = 0;

    for ch in s.chars() {
        let ch_width = ch.width().unwrap_or(0);
        if width + ch_width > max_width {
            break;
        }
        result.push(ch);
        width += ch_width;
    }

    result
}
