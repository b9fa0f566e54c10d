/// Frame widget - a bordered box whose interior is cleared
///
/// Used for the panel aside and the toggle button so they paint over the
/// article underneath.

use ratatui::{buffer::Buffer, layout::Rect, style::Style};

use crate::formatting::BoxChars;

/// Renders a rounded (or ASCII) border around `area` and blanks the interior
pub fn render_frame(area: Rect, buf: &mut Buffer, chars: &BoxChars, style: Style) {
    let area = area.intersection(buf.area);
    if area.width < 2 || area.height < 2 {
        return;
    }

    let inner_width = (area.width - 2) as usize;
    let top = format!("{}{}{}", chars.top_left, chars.horizontal.repeat(inner_width), chars.top_right);
    let middle = format!("{}{}{}", chars.vertical, " ".repeat(inner_width), chars.vertical);
    let bottom = format!(
        "{}{}{}",
        chars.bottom_left,
        chars.horizontal.repeat(inner_width),
        chars.bottom_right
    );

    buf.set_string(area.x, area.y, &top, style);
    for y in area.y + 1..area.bottom() - 1 {
        buf.set_string(area.x, y, &middle, style);
    }
    buf.set_string(area.x, area.bottom() - 1, &bottom, style);
}
