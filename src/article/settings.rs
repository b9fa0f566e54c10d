use super::catalog::{
    OptionValue, Slot, BACKGROUND_COLORS, CONTENT_WIDTH_OPTIONS, FONT_COLORS, FONT_FAMILY_OPTIONS,
    FONT_SIZE_OPTIONS,
};

/// The full set of article settings, one catalog option per slot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SettingsRecord {
    pub font_family: OptionValue,
    pub font_size: OptionValue,
    pub font_color: OptionValue,
    pub background_color: OptionValue,
    pub content_width: OptionValue,
}

/// Settings used at startup and as the reset target
pub const DEFAULT_SETTINGS: SettingsRecord = SettingsRecord {
    font_family: FONT_FAMILY_OPTIONS[0],
    font_size: FONT_SIZE_OPTIONS[0],
    font_color: FONT_COLORS[0],
    background_color: BACKGROUND_COLORS[0],
    content_width: CONTENT_WIDTH_OPTIONS[0],
};

impl Default for SettingsRecord {
    fn default() -> Self {
        DEFAULT_SETTINGS
    }
}

impl SettingsRecord {
    pub fn get(&self, slot: Slot) -> OptionValue {
        match slot {
            Slot::FontFamily => self.font_family,
            Slot::FontSize => self.font_size,
            Slot::FontColor => self.font_color,
            Slot::BackgroundColor => self.background_color,
            Slot::ContentWidth => self.content_width,
        }
    }

    /// Copy of this record with only `slot` replaced
    pub fn with_slot(self, slot: Slot, value: OptionValue) -> Self {
        match slot {
            Slot::FontFamily => Self { font_family: value, ..self },
            Slot::FontSize => Self { font_size: value, ..self },
            Slot::FontColor => Self { font_color: value, ..self },
            Slot::BackgroundColor => Self { background_color: value, ..self },
            Slot::ContentWidth => Self { content_width: value, ..self },
        }
    }

    /// Slots whose values differ from `other`
    pub fn diff(&self, other: &SettingsRecord) -> Vec<Slot> {
        Slot::ALL
            .into_iter()
            .filter(|slot| self.get(*slot) != other.get(*slot))
            .collect()
    }
}

/// Host-owned holder of the applied settings
///
/// The record is only ever replaced wholesale.
#[derive(Debug, Clone, Default)]
pub struct SettingsStore {
    current: SettingsRecord,
    revision: u64,
}

impl SettingsStore {
    pub fn new(initial: SettingsRecord) -> Self {
        Self { current: initial, revision: 0 }
    }

    pub fn current(&self) -> &SettingsRecord {
        &self.current
    }

    /// Number of updates applied since creation
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn update(&mut self, record: SettingsRecord) {
        self.current = record;
        self.revision += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings_values() {
        let record = SettingsRecord::default();
        assert_eq!(record.font_family.value, "Open Sans");
        assert_eq!(record.font_size.value, "18px");
        assert_eq!(record.font_color.value, "#000000");
        assert_eq!(record.background_color.value, "#FFFFFF");
        assert_eq!(record.content_width.value, "1394px");
    }

    #[test]
    fn test_default_settings_are_catalog_members() {
        for slot in Slot::ALL {
            assert!(slot.position(&DEFAULT_SETTINGS.get(slot)).is_some());
        }
    }

    #[test]
    fn test_with_slot_replaces_only_that_slot() {
        for slot in Slot::ALL {
            let replacement = slot.cycle(&DEFAULT_SETTINGS.get(slot), 1);
            let updated = DEFAULT_SETTINGS.with_slot(slot, replacement);

            assert_eq!(updated.get(slot), replacement);
            assert_eq!(updated.diff(&DEFAULT_SETTINGS), vec![slot]);
        }
    }

    #[test]
    fn test_store_update_replaces_record_and_bumps_revision() {
        let mut store = SettingsStore::new(DEFAULT_SETTINGS);
        assert_eq!(store.revision(), 0);

        let record = DEFAULT_SETTINGS.with_slot(Slot::FontSize, FONT_SIZE_OPTIONS[2]);
        store.update(record);

        assert_eq!(*store.current(), record);
        assert_eq!(store.revision(), 1);
    }
}
