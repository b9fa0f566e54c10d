/// Button widget - a bracketed label such as "[ Apply ]"

use ratatui::{buffer::Buffer, layout::Rect, style::Style};

/// Renders a button label clipped to its rect
pub fn render_button(label: &str, rect: Rect, buf: &mut Buffer, style: Style) {
    if rect.is_empty() {
        return;
    }
    buf.set_stringn(rect.x, rect.y, label, rect.width as usize, style);
}
