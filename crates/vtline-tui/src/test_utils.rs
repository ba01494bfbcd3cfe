//! Test utilities for rendering widgets to text.

use chrono::NaiveDate;
use ratatui::{buffer::Buffer, layout::Rect, widgets::Widget};
use vtline_engine::TimelineEvent;

/// Two events two months apart: Launch (Jan 2024) then Beta (Mar 2024).
pub fn sample_events() -> Vec<TimelineEvent> {
    vec![
        TimelineEvent::new(
            "Launch",
            "Initial release",
            NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
        ),
        TimelineEvent::new(
            "Beta",
            "Public beta",
            NaiveDate::from_ymd_opt(2024, 3, 10).unwrap(),
        ),
    ]
}

/// Convert a buffer to a string representation for snapshot testing.
///
/// Trailing whitespace is trimmed from each line.
pub fn buffer_to_string(buffer: &Buffer) -> String {
    let area = buffer.area;
    let mut result = String::new();

    for y in area.y..area.y + area.height {
        for x in area.x..area.x + area.width {
            let cell = buffer.cell((x, y)).unwrap();
            result.push_str(cell.symbol());
        }
        while result.ends_with(' ') {
            result.pop();
        }
        result.push('\n');
    }

    if result.ends_with('\n') {
        result.pop();
    }

    result
}

/// Render a widget into a fresh buffer and return it as a string.
pub fn render_to_string<W: Widget>(widget: W, width: u16, height: u16) -> String {
    let area = Rect::new(0, 0, width, height);
    let mut buffer = Buffer::empty(area);
    widget.render(area, &mut buffer);
    buffer_to_string(&buffer)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_buffer_to_string() {
        let area = Rect::new(0, 0, 10, 3);
        let mut buffer = Buffer::empty(area);
        buffer.set_string(0, 0, "Hello", ratatui::style::Style::default());
        buffer.set_string(0, 1, "World", ratatui::style::Style::default());

        assert_eq!(buffer_to_string(&buffer), "Hello\nWorld\n");
    }
}
