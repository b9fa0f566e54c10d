/// Fixed option catalogs for the article settings
///
/// Every settings slot draws its value from one of these ordered lists.
/// The panel only ever offers catalog members, so membership is guaranteed
/// by construction rather than checked at runtime.
use std::fmt;
use std::hash::{Hash, Hasher};

/// A selectable catalog entry: a machine value (a CSS value) plus a label
#[derive(Debug, Clone, Copy, Eq)]
pub struct OptionValue {
    pub title: &'static str,
    pub value: &'static str,
    pub class_name: &'static str,
}

impl OptionValue {
    pub const fn new(title: &'static str, value: &'static str, class_name: &'static str) -> Self {
        Self { title, value, class_name }
    }
}

// Two entries are the same option when their machine values match
impl PartialEq for OptionValue {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl Hash for OptionValue {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl fmt::Display for OptionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.title)
    }
}

pub const FONT_FAMILY_OPTIONS: [OptionValue; 5] = [
    OptionValue::new("Open Sans", "Open Sans", "open-sans"),
    OptionValue::new("Ubuntu", "Ubuntu", "ubuntu"),
    OptionValue::new("Cormorant Garamond", "Cormorant Garamond", "cormorant-garamond"),
    OptionValue::new("Days One", "Days One", "days-one"),
    OptionValue::new("Merriweather", "Merriweather", "merriweather"),
];

pub const FONT_SIZE_OPTIONS: [OptionValue; 3] = [
    OptionValue::new("18px", "18px", "font-size-18"),
    OptionValue::new("25px", "25px", "font-size-25"),
    OptionValue::new("38px", "38px", "font-size-38"),
];

pub const FONT_COLORS: [OptionValue; 9] = [
    OptionValue::new("Black", "#000000", "font-black"),
    OptionValue::new("White", "#FFFFFF", "font-white"),
    OptionValue::new("Gray", "#C4C4C4", "font-gray"),
    OptionValue::new("Pink", "#FEAFE8", "font-pink"),
    OptionValue::new("Bright pink", "#FD24AF", "font-bright-pink"),
    OptionValue::new("Yellow", "#FFC802", "font-yellow"),
    OptionValue::new("Green", "#80D994", "font-green"),
    OptionValue::new("Light blue", "#6FC1FD", "font-light-blue"),
    OptionValue::new("Purple", "#5F00B5", "font-purple"),
];

pub const BACKGROUND_COLORS: [OptionValue; 9] = [
    OptionValue::new("White", "#FFFFFF", "bg-white"),
    OptionValue::new("Black", "#000000", "bg-black"),
    OptionValue::new("Gray", "#C4C4C4", "bg-gray"),
    OptionValue::new("Pink", "#FEAFE8", "bg-pink"),
    OptionValue::new("Yellow", "#FFC802", "bg-yellow"),
    OptionValue::new("Green", "#80D994", "bg-green"),
    OptionValue::new("Light blue", "#6FC1FD", "bg-light-blue"),
    OptionValue::new("Purple", "#5F00B5", "bg-purple"),
    OptionValue::new("Bright pink", "#FD24AF", "bg-bright-pink"),
];

pub const CONTENT_WIDTH_OPTIONS: [OptionValue; 2] = [
    OptionValue::new("Wide", "1394px", "width-wide"),
    OptionValue::new("Narrow", "548px", "width-narrow"),
];

/// How a slot is picked in the panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickerKind {
    /// Single-select list showing only the current option
    Select,
    /// All options laid out inline with the current one marked
    RadioGroup,
}

/// One of the five named settings slots
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    FontFamily,
    FontSize,
    FontColor,
    BackgroundColor,
    ContentWidth,
}

/// Slot lookup by kebab-case key, used by the command line
static SLOT_KEYS: phf::Map<&'static str, Slot> = phf::phf_map! {
    "font-family" => Slot::FontFamily,
    "font-size" => Slot::FontSize,
    "font-color" => Slot::FontColor,
    "background-color" => Slot::BackgroundColor,
    "bg-color" => Slot::BackgroundColor,
    "content-width" => Slot::ContentWidth,
    "container-width" => Slot::ContentWidth,
};

impl Slot {
    /// All slots in panel order
    pub const ALL: [Slot; 5] = [
        Slot::FontFamily,
        Slot::FontSize,
        Slot::FontColor,
        Slot::BackgroundColor,
        Slot::ContentWidth,
    ];

    pub fn catalog(&self) -> &'static [OptionValue] {
        match self {
            Slot::FontFamily => &FONT_FAMILY_OPTIONS,
            Slot::FontSize => &FONT_SIZE_OPTIONS,
            Slot::FontColor => &FONT_COLORS,
            Slot::BackgroundColor => &BACKGROUND_COLORS,
            Slot::ContentWidth => &CONTENT_WIDTH_OPTIONS,
        }
    }

    /// Title shown above the slot's picker
    pub fn title(&self) -> &'static str {
        match self {
            Slot::FontFamily => "Font family",
            Slot::FontSize => "Font size",
            Slot::FontColor => "Font color",
            Slot::BackgroundColor => "Background color",
            Slot::ContentWidth => "Content width",
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            Slot::FontFamily => "font-family",
            Slot::FontSize => "font-size",
            Slot::FontColor => "font-color",
            Slot::BackgroundColor => "background-color",
            Slot::ContentWidth => "content-width",
        }
    }

    pub fn picker(&self) -> PickerKind {
        match self {
            Slot::FontSize => PickerKind::RadioGroup,
            _ => PickerKind::Select,
        }
    }

    /// Resolve a slot from its key (case-insensitive, `_` accepted for `-`)
    pub fn from_key(key: &str) -> Option<Slot> {
        let normalized = key.trim().to_lowercase().replace('_', "-");
        SLOT_KEYS.get(normalized.as_str()).copied()
    }

    /// Position of `option` within this slot's catalog
    pub fn position(&self, option: &OptionValue) -> Option<usize> {
        self.catalog().iter().position(|o| o == option)
    }

    /// Find a catalog entry by machine value or title (case-insensitive)
    pub fn find(&self, needle: &str) -> Option<OptionValue> {
        let needle = needle.trim();
        self.catalog()
            .iter()
            .find(|o| o.value.eq_ignore_ascii_case(needle) || o.title.eq_ignore_ascii_case(needle))
            .copied()
    }

    /// Option `step` positions away from `current`, wrapping around the catalog
    ///
    /// An option that is not in the catalog is treated as sitting at index 0.
    pub fn cycle(&self, current: &OptionValue, step: isize) -> OptionValue {
        let catalog = self.catalog();
        let len = catalog.len() as isize;
        let index = self.position(current).unwrap_or(0) as isize;
        catalog[(index + step).rem_euclid(len) as usize]
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}
