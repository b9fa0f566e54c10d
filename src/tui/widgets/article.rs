/// ArticleView widget - the preview article styled by the applied settings

use ratatui::{buffer::Buffer, layout::Rect, style::Style};
use unicode_width::UnicodeWidthStr;

use super::RenderableWidget;
use crate::article::text::{ARTICLE_PARAGRAPHS, ARTICLE_TITLE};
use crate::article::ArticleStyle;
use crate::config::DisplayConfig;

#[derive(Debug, Clone)]
pub struct ArticleView<'a> {
    pub style: ArticleStyle,
    pub title: &'a str,
    pub paragraphs: &'a [&'a str],
}

impl ArticleView<'static> {
    pub fn new(style: ArticleStyle) -> Self {
        Self {
            style,
            title: ARTICLE_TITLE,
            paragraphs: ARTICLE_PARAGRAPHS,
        }
    }
}

impl<'a> ArticleView<'a> {
    pub fn with_text(mut self, title: &'a str, paragraphs: &'a [&'a str]) -> Self {
        self.title = title;
        self.paragraphs = paragraphs;
        self
    }

    /// Column width actually used inside `area`, keeping a one-column margin
    fn column_width(&self, area: Rect) -> u16 {
        self.style.width.min(area.width.saturating_sub(2)).max(1)
    }
}

impl RenderableWidget for ArticleView<'_> {
    fn render(&self, area: Rect, buf: &mut Buffer, _config: &DisplayConfig) {
        if area.is_empty() {
            return;
        }
        buf.set_style(area, self.style.text_style());

        let width = self.column_width(area);
        let x = area.x + (area.width - width) / 2;
        let mut y = area.y + 1;

        let mut put = |line: &str, style: Style, y: &mut u16| -> bool {
            if *y >= area.bottom() {
                return false;
            }
            buf.set_stringn(x, *y, line, width as usize, style);
            *y += 1 + self.style.line_spacing;
            true
        };

        let heading = self.title.to_uppercase();
        for line in wrap_text(&heading, width as usize) {
            if !put(&line, self.style.heading_style(), &mut y) {
                return;
            }
        }

        for paragraph in self.paragraphs {
            y += 1;
            for line in wrap_text(paragraph, width as usize) {
                if !put(&line, self.style.text_style(), &mut y) {
                    return;
                }
            }
        }
    }
}

/// Greedy word wrap by display width; words longer than `width` are split
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        let mut word = word.to_string();
        while word.width() > width {
            if !current.is_empty() {
                lines.push(std::mem::take(&mut current));
            }
            let split = split_at_width(&word, width);
            let rest = word.split_off(split);
            lines.push(word);
            word = rest;
        }

        let needed = if current.is_empty() { word.width() } else { current.width() + 1 + word.width() };
        if needed > width {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(&word);
    }

    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

/// Byte offset of the longest prefix of `word` that fits in `width` columns
fn split_at_width(word: &str, width: usize) -> usize {
    let mut used = 0;
    for (offset, ch) in word.char_indices() {
        let ch_width = unicode_width::UnicodeWidthChar::width(ch).unwrap_or(0);
        if used + ch_width > width {
            return if offset == 0 { ch.len_utf8() } else { offset };
        }
        used += ch_width;
    }
    word.len()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::article::catalog::{CONTENT_WIDTH_OPTIONS, FONT_SIZE_OPTIONS};
    use crate::article::{Slot, DEFAULT_SETTINGS};
    use crate::tui::widgets::testing::*;
    use ratatui::style::Color;

    #[test]
    fn test_wrap_text_breaks_on_words() {
        assert_eq!(
            wrap_text("the quick brown fox jumps", 10),
            vec!["the quick", "brown fox", "jumps"]
        );
    }

    #[test]
    fn test_wrap_text_splits_long_words() {
        assert_eq!(wrap_text("abcdefghij xy", 4), vec!["abcd", "efgh", "ij", "xy"]);
    }

    #[test]
    fn test_wrap_text_empty() {
        assert!(wrap_text("   ", 10).is_empty());
    }

    #[test]
    fn test_article_fills_background_and_centers() {
        let style = ArticleStyle::from_settings(&DEFAULT_SETTINGS.with_slot(Slot::ContentWidth, CONTENT_WIDTH_OPTIONS[1]));
        let view = ArticleView::new(style).with_text("Title", &["one two"]);
        let buf = render_widget(&view, 60, 6);

        // Narrow is 39 columns, centered in 60
        assert_buffer_line(&buf, 1, "          TITLE");
        assert_buffer_line(&buf, 3, "          one two");
        assert_eq!(buf[(0, 5)].bg, Color::Rgb(255, 255, 255));
        assert_eq!(buf[(10, 3)].fg, Color::Rgb(0, 0, 0));
    }

    #[test]
    fn test_article_line_spacing_from_font_size() {
        let style = ArticleStyle::from_settings(&DEFAULT_SETTINGS.with_slot(Slot::FontSize, FONT_SIZE_OPTIONS[1]));
        let view = ArticleView::new(style).with_text("T", &["a b"]);
        let buf = render_widget(&view, 5, 8);

        // One blank row after each text row
        assert_buffer_line(&buf, 1, " T");
        assert_buffer_line(&buf, 2, "");
        assert_buffer_line(&buf, 4, " a b");
    }

    #[test]
    fn test_article_stops_at_bottom() {
        let view = ArticleView::new(ArticleStyle::from_settings(&DEFAULT_SETTINGS));
        let buf = render_widget(&view, 40, 3);

        assert_buffer_line(&buf, 1, " HUMAN SCALE");
    }
}
