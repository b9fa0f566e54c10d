pub mod catalog;
pub mod settings;
pub mod style;
pub mod text;

pub use catalog::{OptionValue, PickerKind, Slot};
pub use settings::{SettingsRecord, SettingsStore, DEFAULT_SETTINGS};
pub use style::{custom_properties, ArticleStyle};
