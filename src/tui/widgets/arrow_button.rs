/// ArrowButton widget - the toggle that opens and closes the settings panel
///
/// A 5x3 framed button; the arrow points the way the panel will move.

use ratatui::{buffer::Buffer, layout::Rect, style::Style};

use super::frame::render_frame;
use super::RenderableWidget;
use crate::config::DisplayConfig;
use crate::tui::panel::layout::{TOGGLE_HEIGHT, TOGGLE_WIDTH};

#[derive(Debug, Clone, Copy)]
pub struct ArrowButton {
    pub is_open: bool,
}

impl ArrowButton {
    pub fn new(is_open: bool) -> Self {
        Self { is_open }
    }
}

impl RenderableWidget for ArrowButton {
    fn render(&self, area: Rect, buf: &mut Buffer, config: &DisplayConfig) {
        let style = Style::default().fg(config.selection_fg);
        render_frame(area, buf, &config.box_chars, style);

        if area.width < 3 || area.height < 3 {
            return;
        }
        let arrow = if self.is_open {
            &config.box_chars.arrow_open
        } else {
            &config.box_chars.arrow_closed
        };
        buf.set_string(area.x + area.width / 2, area.y + area.height / 2, arrow, style);
    }

    fn preferred_height(&self) -> Option<u16> {
        Some(TOGGLE_HEIGHT)
    }

    fn preferred_width(&self) -> Option<u16> {
        Some(TOGGLE_WIDTH)
    }
}
