use anyhow::Result;

use super::record_with_overrides;
use crate::article::style::format_custom_properties;
use crate::article::SettingsRecord;

/// CSS rule setting the custom properties of `record` on `:root`
pub fn format_css(record: &SettingsRecord) -> String {
    let body = format_custom_properties(record)
        .lines()
        .map(|line| format!("  {}\n", line))
        .collect::<String>();
    format!(":root {{\n{}}}\n", body)
}

pub fn run(overrides: &[String]) -> Result<()> {
    let record = record_with_overrides(overrides)?;
    print!("{}", format_css(&record));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::article::catalog::BACKGROUND_COLORS;
    use crate::article::{Slot, DEFAULT_SETTINGS};

    #[test]
    fn test_format_css_default_record() {
        assert_eq!(
            format_css(&DEFAULT_SETTINGS),
            ":root {\n  --font-family: Open Sans;\n  --font-size: 18px;\n  --font-color: #000000;\n  --container-width: 1394px;\n  --bg-color: #FFFFFF;\n}\n"
        );
    }

    #[test]
    fn test_format_css_with_override() {
        let record = DEFAULT_SETTINGS.with_slot(Slot::BackgroundColor, BACKGROUND_COLORS[7]);
        assert!(format_css(&record).contains("  --bg-color: #5F00B5;\n"));
    }

    #[test]
    fn test_run_rejects_unknown_value() {
        assert!(run(&["bg-color=Teal".to_string()]).is_err());
    }
}
