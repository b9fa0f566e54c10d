/// Select picker - renders the current option of a single-select list
///
/// Displays "▼ current_option" format.

use ratatui::{buffer::Buffer, style::Style};

use crate::article::OptionValue;
use crate::config::DisplayConfig;

/// Renders a select showing the current option
///
/// Returns the width consumed
pub fn render_select(
    selected: &OptionValue,
    x: u16,
    y: u16,
    max_width: u16,
    buf: &mut Buffer,
    style: Style,
    config: &DisplayConfig,
) -> u16 {
    let text = format!("{} {}", config.box_chars.dropdown, selected.title);
    let (end_x, _) = buf.set_stringn(x, y, &text, max_width as usize, style);
    end_x.saturating_sub(x)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::article::catalog::{FONT_COLORS, FONT_FAMILY_OPTIONS};
    use crate::tui::widgets::testing::*;
    use ratatui::layout::Rect;

    #[test]
    fn test_select_shows_current_option() {
        let mut buf = Buffer::empty(Rect::new(0, 0, 40, 1));

        let width = render_select(&FONT_FAMILY_OPTIONS[2], 0, 0, 40, &mut buf, Style::default(), &test_config());

        assert_eq!(width, 20); // "▼ Cormorant Garamond"
        assert_buffer_line(&buf, 0, "▼ Cormorant Garamond");
    }

    #[test]
    fn test_select_ascii() {
        let mut buf = Buffer::empty(Rect::new(0, 0, 40, 1));

        render_select(&FONT_COLORS[7], 0, 0, 40, &mut buf, Style::default(), &test_config_ascii());

        assert_buffer_line(&buf, 0, "v Light blue");
    }

    #[test]
    fn test_select_truncated_to_max_width() {
        let mut buf = Buffer::empty(Rect::new(0, 0, 40, 1));

        let width = render_select(&FONT_FAMILY_OPTIONS[2], 4, 0, 8, &mut buf, Style::default(), &test_config());

        assert_eq!(width, 8);
        assert_buffer_line(&buf, 0, "    ▼ Cormor");
    }
}
