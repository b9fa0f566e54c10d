/// Presentational values derived from a settings record
///
/// The browser host exposes the settings as CSS custom properties; the
/// terminal host turns the same record into ratatui styles.
use ratatui::style::{Color, Modifier, Style};

use super::catalog::Slot;
use super::settings::SettingsRecord;
use crate::config::parse_color;

/// Approximate width of one terminal column in CSS pixels
pub const PIXELS_PER_COLUMN: u16 = 14;

/// CSS custom properties for a record, in declaration order
pub fn custom_properties(record: &SettingsRecord) -> [(&'static str, &'static str); 5] {
    [
        ("--font-family", record.font_family.value),
        ("--font-size", record.font_size.value),
        ("--font-color", record.font_color.value),
        ("--container-width", record.content_width.value),
        ("--bg-color", record.background_color.value),
    ]
}

/// Render custom properties as a CSS declaration block body
pub fn format_custom_properties(record: &SettingsRecord) -> String {
    custom_properties(record)
        .iter()
        .map(|(name, value)| format!("{}: {};", name, value))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Terminal rendition of the article settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArticleStyle {
    pub fg: Color,
    pub bg: Color,
    pub modifier: Modifier,
    /// Blank rows inserted after every text row
    pub line_spacing: u16,
    /// Content width in terminal columns
    pub width: u16,
}

impl ArticleStyle {
    pub fn from_settings(record: &SettingsRecord) -> Self {
        Self {
            fg: parse_color(record.font_color.value).unwrap_or(Color::Reset),
            bg: parse_color(record.background_color.value).unwrap_or(Color::Reset),
            modifier: family_modifier(record.font_family.class_name),
            line_spacing: Slot::FontSize.position(&record.font_size).unwrap_or(0) as u16,
            width: pixels_to_columns(record.content_width.value),
        }
    }

    pub fn text_style(&self) -> Style {
        Style::default().fg(self.fg).bg(self.bg).add_modifier(self.modifier)
    }

    pub fn heading_style(&self) -> Style {
        self.text_style().add_modifier(Modifier::BOLD)
    }
}

fn family_modifier(class_name: &str) -> Modifier {
    match class_name {
        "cormorant-garamond" | "merriweather" => Modifier::ITALIC,
        "days-one" => Modifier::BOLD,
        _ => Modifier::empty(),
    }
}

/// Convert a CSS pixel length ("548px") to terminal columns
fn pixels_to_columns(value: &str) -> u16 {
    value
        .trim()
        .trim_end_matches("px")
        .parse::<u16>()
        .map(|px| (px / PIXELS_PER_COLUMN).max(1))
        .unwrap_or(u16::MAX)
}
