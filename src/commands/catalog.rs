use crate::article::{PickerKind, Slot, DEFAULT_SETTINGS};
use crate::config::DisplayConfig;
use crate::formatting::format_header;

const TITLE: &str = "Article settings";

/// Every slot with its options; the default option is starred
pub fn format_catalog(display: &DisplayConfig) -> String {
    let mut output = format_header(TITLE, true, display);

    for slot in Slot::ALL.iter() {
        output.push('\n');
        let picker = match slot.picker() {
            PickerKind::Select => "select",
            PickerKind::RadioGroup => "radio",
        };
        output.push_str(&format_header(
            &format!("{} ({}, {})", slot.title(), slot.key(), picker),
            false,
            display,
        ));

        let default = DEFAULT_SETTINGS.get(*slot);
        for option in slot.catalog() {
            let marker = if *option == default { '*' } else { ' ' };
            output.push_str(&format!(" {} {:<20} {}\n", marker, option.title, option.value));
        }
    }
    output
}

pub fn run(display: &DisplayConfig) {
    print!("{}", format_catalog(display));
}
