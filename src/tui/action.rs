use super::panel::PanelMsg;
use crate::article::SettingsRecord;

/// Global actions - like Redux actions
///
/// All state changes in the application happen through actions.
/// Actions are dispatched from:
/// - User input (key and mouse events)
/// - The settings panel's apply callback
/// - Effects returned by the reducer
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Forwarded to the settings panel
    Panel(PanelMsg),

    /// A complete record pushed by the panel on submit or reset
    ApplySettings(SettingsRecord),

    SetStatusMessage {
        message: String,
        is_error: bool,
    },
    UpdateTerminalSize(u16, u16),

    Quit,
}

/// Side effects produced by the reducer
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Effect {
    #[default]
    None,
    /// Dispatch another action after this one
    Action(Action),
}

impl Action {
    /// Whether this action should trigger a re-render
    pub fn should_render(&self) -> bool {
        !matches!(self, Self::Quit)
    }
}
