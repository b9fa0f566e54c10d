/// StatusBar widget - displays status information and keyboard hints at the bottom of the screen
///
/// This widget renders a two-line status bar with:
/// - Top line: horizontal separator
/// - Bottom line: status message (or error) on the left, key hints and the
///   time settings were last applied on the right

use ratatui::{buffer::Buffer, layout::Rect, style::{Modifier, Style}};
use unicode_width::UnicodeWidthStr;
use crate::config::DisplayConfig;
use crate::tui::widgets::RenderableWidget;

/// A keyboard hint displayed in the status bar
#[derive(Debug, Clone)]
pub struct KeyHint {
    /// The keyboard key (e.g., "s", "ESC")
    pub key: String,
    /// The action description (e.g., "Settings")
    pub action: String,
}

impl KeyHint {
    pub fn new(key: impl Into<String>, action: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            action: action.into(),
        }
    }
}

/// Widget for displaying status information and keyboard hints
#[derive(Debug, Default)]
pub struct StatusBar {
    pub message: Option<String>,
    pub is_error: bool,
    /// Preformatted time of the last applied settings
    pub last_applied: Option<String>,
    pub hints: Vec<KeyHint>,
}

impl StatusBar {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_message(mut self, message: Option<String>, is_error: bool) -> Self {
        self.message = message;
        self.is_error = is_error;
        self
    }

    pub fn with_last_applied(mut self, last_applied: Option<String>) -> Self {
        self.last_applied = last_applied;
        self
    }

    pub fn with_hints(mut self, hints: Vec<KeyHint>) -> Self {
        self.hints = hints;
        self
    }

    fn build_right_text(&self) -> String {
        let hints = self
            .hints
            .iter()
            .map(|h| format!("{} {}", h.key, h.action))
            .collect::<Vec<_>>()
            .join("  ");
        let applied = self.last_applied.as_deref().unwrap_or("--:--:--");
        if hints.is_empty() {
            format!("{} ", applied)
        } else {
            format!("{}  {} ", hints, applied)
        }
    }
}

impl RenderableWidget for StatusBar {
    fn render(&self, area: Rect, buf: &mut Buffer, config: &DisplayConfig) {
        if area.width == 0 || area.height < 2 {
            return;
        }

        let separator = config.box_chars.horizontal.repeat(area.width as usize);
        buf.set_string(area.x, area.y, &separator, Style::default());

        let y = area.y + 1;
        let right_text = self.build_right_text();
        let right_width = right_text.width() as u16;
        let right_x = area.right().saturating_sub(right_width).max(area.x);

        if let Some(message) = &self.message {
            let style = if self.is_error {
                Style::default().fg(config.error_fg)
            } else {
                Style::default()
            };
            let available = right_x.saturating_sub(area.x + 1) as usize;
            buf.set_stringn(area.x + 1, y, message, available, style);
        }

        buf.set_stringn(
            right_x,
            y,
            &right_text,
            area.width as usize,
            Style::default().add_modifier(Modifier::DIM),
        );
    }

    fn preferred_height(&self) -> Option<u16> {
        Some(2) // Separator line + status line
    }
}
