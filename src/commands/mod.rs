pub mod catalog;
pub mod css;

use anyhow::{anyhow, Context, Result};

use crate::article::{OptionValue, SettingsRecord, Slot, DEFAULT_SETTINGS};

/// Parse a `slot=value` override
///
/// The slot is looked up by key, the value must be a member of the slot's
/// catalog (by title or machine value).
pub fn parse_override(arg: &str) -> Result<(Slot, OptionValue)> {
    let (key, value) = arg
        .split_once('=')
        .with_context(|| format!("Invalid override '{}'. Use SLOT=VALUE", arg))?;

    let slot = Slot::from_key(key).ok_or_else(|| {
        let known = Slot::ALL.iter().map(|s| s.key()).collect::<Vec<_>>().join(", ");
        anyhow!("Unknown slot '{}'. Known slots: {}", key.trim(), known)
    })?;

    let option = slot.find(value).ok_or_else(|| {
        let known = slot.catalog().iter().map(|o| o.title).collect::<Vec<_>>().join(", ");
        anyhow!("Unknown {} '{}'. Options: {}", slot.key(), value.trim(), known)
    })?;

    Ok((slot, option))
}

/// Default record with every override applied in order
pub fn record_with_overrides(overrides: &[String]) -> Result<SettingsRecord> {
    overrides.iter().try_fold(DEFAULT_SETTINGS, |record, arg| {
        let (slot, option) = parse_override(arg)?;
        Ok(record.with_slot(slot, option))
    })
}
