use chrono::{DateTime, Local};

use crate::article::{SettingsRecord, SettingsStore, DEFAULT_SETTINGS};
use crate::config::Config;

/// Root application state - single source of truth
///
/// All state changes happen through the reducer. The settings panel keeps its
/// own visibility and draft; only committed records live here.
#[derive(Debug, Clone, Default)]
pub struct AppState {
    /// Settings currently applied to the article
    pub store: SettingsStore,

    /// System state
    pub system: SystemState,
}

impl AppState {
    pub fn new(config: Config, initial: SettingsRecord) -> Self {
        Self {
            store: SettingsStore::new(initial),
            system: SystemState {
                config,
                ..SystemState::default()
            },
        }
    }

    pub fn settings(&self) -> &SettingsRecord {
        self.store.current()
    }
}

#[derive(Debug, Clone)]
pub struct SystemState {
    pub config: Config,
    pub status_message: Option<String>,
    pub status_is_error: bool,
    /// When settings were last applied
    pub last_applied: Option<DateTime<Local>>,
    pub terminal_size: (u16, u16),
}

impl Default for SystemState {
    fn default() -> Self {
        Self {
            config: Config::default(),
            status_message: None,
            status_is_error: false,
            last_applied: None,
            terminal_size: (80, 24),
        }
    }
}

impl SystemState {
    /// Applied time formatted with the configured `time_format`
    pub fn formatted_last_applied(&self) -> Option<String> {
        self.last_applied
            .map(|time| time.format(&self.config.time_format).to_string())
    }
}
