/// Separator widget - renders a horizontal separator line

use ratatui::{buffer::Buffer, layout::Rect, style::Style};
use crate::config::DisplayConfig;

/// Renders a horizontal separator line across `area` at row `y`
///
/// Returns 1 if rendered, 0 if no space available
pub fn render_horizontal_separator(
    margin: u16,
    area: Rect,
    y: u16,
    buf: &mut Buffer,
    style: Style,
    config: &DisplayConfig,
) -> u16 {
    if y < area.y || y >= area.bottom() {
        return 0;
    }

    let width = area.width.saturating_sub(margin) as usize;
    let separator = config.box_chars.horizontal.repeat(width);

    buf.set_string(area.x + margin, y, &separator, style);
    1
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::testing::assert_buffer;
    use crate::tui::widgets::testing::*;

    #[test]
    fn test_horizontal_separator_basic() {
        let config = test_config();
        let mut buf = Buffer::empty(Rect::new(0, 0, 10, 1));

        let lines = render_horizontal_separator(0, Rect::new(0, 0, 10, 1), 0, &mut buf, Style::default(), &config);

        assert_eq!(lines, 1);
        assert_buffer(&buf, &["──────────"]);
    }

    #[test]
    fn test_horizontal_separator_with_margin() {
        let config = test_config_ascii();
        let mut buf = Buffer::empty(Rect::new(0, 0, 10, 1));

        render_horizontal_separator(4, Rect::new(0, 0, 10, 1), 0, &mut buf, Style::default(), &config);

        assert_buffer(&buf, &["    ------"]);
    }

    #[test]
    fn test_horizontal_separator_at_bottom() {
        let config = test_config();
        let mut buf = Buffer::empty(Rect::new(0, 0, 10, 5));

        let lines = render_horizontal_separator(0, Rect::new(0, 0, 10, 5), 5, &mut buf, Style::default(), &config);

        assert_eq!(lines, 0);
    }
}
