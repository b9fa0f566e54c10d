use crate::config::DisplayConfig;

/// Box-drawing characters used by the terminal widgets
#[derive(Debug, Clone, PartialEq)]
pub struct BoxChars {
    pub horizontal: String,
    pub double_horizontal: String,
    pub vertical: String,
    pub top_left: String,
    pub top_right: String,
    pub bottom_left: String,
    pub bottom_right: String,
    pub selector: String,
    pub radio_on: String,
    pub radio_off: String,
    pub arrow_open: String,
    pub arrow_closed: String,
    pub dropdown: String,
}

impl BoxChars {
    pub fn unicode() -> Self {
        Self {
            horizontal: "─".to_string(),
            double_horizontal: "═".to_string(),
            vertical: "│".to_string(),
            top_left: "╭".to_string(),
            top_right: "╮".to_string(),
            bottom_left: "╰".to_string(),
            bottom_right: "╯".to_string(),
            selector: "►".to_string(),
            radio_on: "◉".to_string(),
            radio_off: "○".to_string(),
            arrow_open: "◀".to_string(),
            arrow_closed: "▶".to_string(),
            dropdown: "▼".to_string(),
        }
    }

    pub fn ascii() -> Self {
        Self {
            horizontal: "-".to_string(),
            double_horizontal: "=".to_string(),
            vertical: "|".to_string(),
            top_left: "+".to_string(),
            top_right: "+".to_string(),
            bottom_left: "+".to_string(),
            bottom_right: "+".to_string(),
            selector: ">".to_string(),
            radio_on: "(*)".to_string(),
            radio_off: "( )".to_string(),
            arrow_open: "<".to_string(),
            arrow_closed: ">".to_string(),
            dropdown: "v".to_string(),
        }
    }

    pub fn from_use_unicode(use_unicode: bool) -> Self {
        if use_unicode {
            Self::unicode()
        } else {
            Self::ascii()
        }
    }
}

impl Default for BoxChars {
    fn default() -> Self {
        Self::unicode()
    }
}

/// Format a header with text and underline
///
/// # Arguments
/// * `text` - The header text to display
/// * `double_line` - If true, uses double-line (═/=), otherwise single-line (─/-)
/// * `display` - Display configuration to determine unicode vs ASCII
pub fn format_header(text: &str, double_line: bool, display: &DisplayConfig) -> String {
    let separator_char = if double_line {
        &display.box_chars.double_horizontal
    } else {
        &display.box_chars.horizontal
    };
    format!("{}\n{}\n", text, separator_char.repeat(text.chars().count()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_header_single_line_unicode() {
        let display = DisplayConfig { use_unicode: true, ..Default::default() };
        let result = format_header("Font size", false, &display);
        assert_eq!(result, "Font size\n─────────\n");
    }

    #[test]
    fn test_format_header_double_line_ascii() {
        let display = DisplayConfig {
            use_unicode: false,
            box_chars: BoxChars::ascii(),
            ..Default::default()
        };
        let result = format_header("Font size", true, &display);
        assert_eq!(result, "Font size\n=========\n");
    }

    #[test]
    fn test_empty_header() {
        let display = DisplayConfig::default();
        assert_eq!(format_header("", false, &display), "\n\n");
    }

    #[test]
    fn test_from_use_unicode() {
        assert_eq!(BoxChars::from_use_unicode(true), BoxChars::unicode());
        assert_eq!(BoxChars::from_use_unicode(false), BoxChars::ascii());
    }
}
