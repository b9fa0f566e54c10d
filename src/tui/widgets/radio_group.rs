/// Radio group picker - renders every option inline with the current one marked
///
/// Displays "◉ 18px  ○ 25px  ○ 38px" format. Option spacing matches the
/// hit-test rects computed by the panel layout.

use ratatui::{buffer::Buffer, style::Style};
use unicode_width::UnicodeWidthStr;

use crate::article::OptionValue;
use crate::config::DisplayConfig;
use crate::tui::panel::layout::RADIO_GAP;

/// Renders a radio group
///
/// Returns the width consumed
#[allow(clippy::too_many_arguments)]
pub fn render_radio_group(
    options: &[OptionValue],
    selected: &OptionValue,
    x: u16,
    y: u16,
    max_width: u16,
    buf: &mut Buffer,
    style: Style,
    selected_style: Style,
    config: &DisplayConfig,
) -> u16 {
    let chars = &config.box_chars;
    let glyph_width = chars.radio_on.width().max(chars.radio_off.width());
    let limit = x.saturating_add(max_width);
    let mut cursor = x;

    for (i, option) in options.iter().enumerate() {
        if i > 0 {
            cursor = cursor.saturating_add(RADIO_GAP);
        }
        if cursor >= limit {
            break;
        }

        let is_selected = option == selected;
        let glyph = if is_selected { &chars.radio_on } else { &chars.radio_off };
        let text = format!("{:<width$} {}", glyph, option.title, width = glyph_width);
        let option_style = if is_selected { selected_style } else { style };
        let (end_x, _) = buf.set_stringn(cursor, y, &text, (limit - cursor) as usize, option_style);
        cursor = end_x;
    }

    cursor.saturating_sub(x)
}
