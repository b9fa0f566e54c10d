use xdg::BaseDirectories;
use serde::Deserialize;
use std::fs;
use std::path::PathBuf;
use ratatui::style::Color;
use tracing::warn;

use crate::article::{SettingsRecord, Slot, DEFAULT_SETTINGS};
use crate::formatting::BoxChars;

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct Config {
    pub log_level: String,
    pub log_file: String,
    pub time_format: String,
    pub display: DisplayConfig,
    pub article: ArticleConfig,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct DisplayConfig {
    pub use_unicode: bool,
    #[serde(deserialize_with = "deserialize_color")]
    pub selection_fg: Color,
    #[serde(deserialize_with = "deserialize_color_optional")]
    pub unfocused_selection_fg: Option<Color>,
    #[serde(deserialize_with = "deserialize_color")]
    pub error_fg: Color,
    /// Width of the settings panel in columns, toggle button included
    pub panel_width: u16,
    /// Derived from `use_unicode` after loading
    #[serde(skip)]
    pub box_chars: BoxChars,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            log_level: "info".to_string(),
            log_file: "/dev/null".to_string(),
            time_format: "%H:%M:%S".to_string(),
            display: DisplayConfig::default(),
            article: ArticleConfig::default(),
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        DisplayConfig {
            use_unicode: true,
            selection_fg: Color::Rgb(255, 165, 0), // Orange
            unfocused_selection_fg: None,
            error_fg: Color::Red,
            panel_width: 44,
            box_chars: BoxChars::unicode(),
        }
    }
}

impl DisplayConfig {
    /// Get the unfocused selection color, calculating 50% darker if not explicitly set
    pub fn unfocused_selection_fg(&self) -> Color {
        self.unfocused_selection_fg.unwrap_or_else(|| darken_color(self.selection_fg, 0.5))
    }
}

/// Settings the article starts with, by slot; unset slots use the defaults
#[derive(Debug, Deserialize, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct ArticleConfig {
    pub font_family: Option<String>,
    pub font_size: Option<String>,
    pub font_color: Option<String>,
    pub background_color: Option<String>,
    pub content_width: Option<String>,
}

impl ArticleConfig {
    fn value_for(&self, slot: Slot) -> Option<&str> {
        let value = match slot {
            Slot::FontFamily => &self.font_family,
            Slot::FontSize => &self.font_size,
            Slot::FontColor => &self.font_color,
            Slot::BackgroundColor => &self.background_color,
            Slot::ContentWidth => &self.content_width,
        };
        value.as_deref()
    }

    /// Resolve configured values against the catalogs
    ///
    /// A value that is not a catalog member (by title or value) is logged and
    /// the slot keeps its default.
    pub fn initial_settings(&self) -> SettingsRecord {
        Slot::ALL.into_iter().fold(DEFAULT_SETTINGS, |record, slot| {
            let Some(value) = self.value_for(slot) else {
                return record;
            };
            match slot.find(value) {
                Some(option) => record.with_slot(slot, option),
                None => {
                    warn!("CONFIG: unknown {} '{}', using default", slot, value);
                    record
                }
            }
        })
    }
}

/// Darken a color by a given factor (0.0 = black, 1.0 = original)
fn darken_color(color: Color, factor: f32) -> Color {
    match color {
        Color::Rgb(r, g, b) => {
            let r = (r as f32 * factor) as u8;
            let g = (g as f32 * factor) as u8;
            let b = (b as f32 * factor) as u8;
            Color::Rgb(r, g, b)
        }
        other => other,
    }
}

/// Deserialize a color from a string (supports named colors, RGB hex, or RGB tuple)
fn deserialize_color<'de, D>(deserializer: D) -> Result<Color, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    parse_color(&s).ok_or_else(|| serde::de::Error::custom(format!("Invalid color: {}", s)))
}

/// Deserialize an optional color from a string
fn deserialize_color_optional<'de, D>(deserializer: D) -> Result<Option<Color>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s: Option<String> = Option::deserialize(deserializer)?;
    match s {
        Some(color_str) => {
            let color = parse_color(&color_str)
                .ok_or_else(|| serde::de::Error::custom(format!("Invalid color: {}", color_str)))?;
            Ok(Some(color))
        }
        None => Ok(None),
    }
}

/// Parse a color string into a ratatui Color
/// Supports:
/// - Named colors: "red", "blue", "cyan", "orange", etc.
/// - Hex colors: "#FF6600", "#f60"
/// - RGB tuples: "255,165,0"
pub fn parse_color(s: &str) -> Option<Color> {
    let s = s.trim().to_lowercase();

    match s.as_str() {
        "black" => return Some(Color::Black),
        "red" => return Some(Color::Red),
        "green" => return Some(Color::Green),
        "yellow" => return Some(Color::Yellow),
        "blue" => return Some(Color::Blue),
        "magenta" => return Some(Color::Magenta),
        "cyan" => return Some(Color::Cyan),
        "gray" | "grey" => return Some(Color::Gray),
        "darkgray" | "darkgrey" => return Some(Color::DarkGray),
        "white" => return Some(Color::White),
        "orange" => return Some(Color::Rgb(255, 165, 0)),
        _ => {}
    }

    if let Some(hex) = s.strip_prefix('#') {
        if !hex.is_ascii() {
            return None;
        }
        if hex.len() == 6 {
            let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
            let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
            let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
            return Some(Color::Rgb(r, g, b));
        } else if hex.len() == 3 {
            let r = u8::from_str_radix(&hex[0..1].repeat(2), 16).ok()?;
            let g = u8::from_str_radix(&hex[1..2].repeat(2), 16).ok()?;
            let b = u8::from_str_radix(&hex[2..3].repeat(2), 16).ok()?;
            return Some(Color::Rgb(r, g, b));
        }
    }

    if s.contains(',') {
        let parts: Vec<&str> = s.split(',').collect();
        if parts.len() == 3 {
            let r = parts[0].trim().parse::<u8>().ok()?;
            let g = parts[1].trim().parse::<u8>().ok()?;
            let b = parts[2].trim().parse::<u8>().ok()?;
            return Some(Color::Rgb(r, g, b));
        }
    }

    None
}

pub fn get_config_path() -> Option<PathBuf> {
    let pgm = env!("CARGO_PKG_NAME");
    let xdg_dirs = BaseDirectories::with_prefix(pgm);
    let config_home = xdg_dirs.get_config_home()?;
    Some(config_home.join("config.toml"))
}

/// Parse a config from TOML text, deriving fields that are not stored
pub fn from_toml_str(content: &str) -> Result<Config, toml::de::Error> {
    let mut config: Config = toml::from_str(content)?;
    config.display.box_chars = BoxChars::from_use_unicode(config.display.use_unicode);
    Ok(config)
}

/// Load the config file, falling back to defaults when it is missing or invalid
pub fn read() -> Config {
    let Some(config_path) = get_config_path().filter(|path| path.exists()) else {
        return Config::default();
    };

    let content = match fs::read_to_string(&config_path) {
        Ok(content) => content,
        Err(e) => {
            warn!("CONFIG: cannot read {}: {}", config_path.display(), e);
            return Config::default();
        }
    };

    from_toml_str(&content).unwrap_or_else(|e| {
        warn!("CONFIG: invalid {}: {}", config_path.display(), e);
        Config::default()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::article::catalog::{BACKGROUND_COLORS, FONT_SIZE_OPTIONS};

    #[test]
    fn test_parse_color_named() {
        assert_eq!(parse_color("red"), Some(Color::Red));
        assert_eq!(parse_color("orange"), Some(Color::Rgb(255, 165, 0)));
        assert_eq!(parse_color("white"), Some(Color::White));
    }

    #[test]
    fn test_parse_color_case_insensitive() {
        assert_eq!(parse_color("RED"), Some(Color::Red));
        assert_eq!(parse_color("ORANGE"), Some(Color::Rgb(255, 165, 0)));
    }

    #[test]
    fn test_parse_color_catalog_hex_values() {
        assert_eq!(parse_color("#FEAFE8"), Some(Color::Rgb(0xFE, 0xAF, 0xE8)));
        assert_eq!(parse_color("#6FC1FD"), Some(Color::Rgb(0x6F, 0xC1, 0xFD)));
        assert_eq!(parse_color("#000000"), Some(Color::Rgb(0, 0, 0)));
    }

    #[test]
    fn test_parse_color_hex_3_digit() {
        assert_eq!(parse_color("#F60"), Some(Color::Rgb(255, 102, 0)));
        assert_eq!(parse_color("#0f0"), Some(Color::Rgb(0, 255, 0)));
    }

    #[test]
    fn test_parse_color_rgb_tuple() {
        assert_eq!(parse_color("255,165,0"), Some(Color::Rgb(255, 165, 0)));
        assert_eq!(parse_color("255, 102, 0"), Some(Color::Rgb(255, 102, 0)));
    }

    #[test]
    fn test_parse_color_invalid() {
        assert_eq!(parse_color("invalid"), None);
        assert_eq!(parse_color("#ZZZ"), None);
        assert_eq!(parse_color("256,0,0"), None);
        assert_eq!(parse_color("#GGGGGG"), None);
    }

    #[test]
    fn test_unfocused_selection_defaults_to_darker() {
        let display = DisplayConfig::default();
        assert_eq!(display.unfocused_selection_fg(), Color::Rgb(127, 82, 0));
    }

    #[test]
    fn test_config_from_toml_display_section() {
        let toml_str = r##"
log_level = "debug"

[display]
use_unicode = false
selection_fg = "#00FFFF"
panel_width = 50
        "##;

        let config = from_toml_str(toml_str).unwrap();
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.log_file, "/dev/null");
        assert_eq!(config.display.selection_fg, Color::Rgb(0, 255, 255));
        assert_eq!(config.display.panel_width, 50);
        assert_eq!(config.display.box_chars, BoxChars::ascii());
    }

    #[test]
    fn test_config_from_toml_rejects_bad_color() {
        let toml_str = r#"
[display]
selection_fg = "not-a-color"
        "#;

        assert!(from_toml_str(toml_str).is_err());
    }

    #[test]
    fn test_config_from_empty_toml_is_default() {
        let config = from_toml_str("").unwrap();
        assert_eq!(config.time_format, "%H:%M:%S");
        assert!(config.display.use_unicode);
        assert_eq!(config.display.panel_width, 44);
    }

    #[test]
    fn test_article_section_seeds_initial_settings() {
        let toml_str = r##"
[article]
font_size = "25px"
background_color = "purple"
font_family = "Comic Sans"
        "##;

        let config = from_toml_str(toml_str).unwrap();
        let record = config.article.initial_settings();

        assert_eq!(record.font_size, FONT_SIZE_OPTIONS[1]);
        assert_eq!(record.background_color, BACKGROUND_COLORS[7]);
        // Unknown family keeps the default
        assert_eq!(record.font_family, DEFAULT_SETTINGS.font_family);
        assert_eq!(record.diff(&DEFAULT_SETTINGS), vec![Slot::FontSize, Slot::BackgroundColor]);
    }

    #[test]
    fn test_missing_article_section_is_default_record() {
        let config = from_toml_str("log_level = \"warn\"").unwrap();
        assert_eq!(config.article, ArticleConfig::default());
        assert_eq!(config.article.initial_settings(), DEFAULT_SETTINGS);
    }
}
