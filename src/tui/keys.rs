/// Keyboard event to action mapping
///
/// This module handles converting crossterm KeyEvents into Actions.
/// Escape is not mapped here: closing on Escape belongs to the panel's own
/// global key listener, which the runtime delivers before calling this.
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};
use tracing::trace;

use super::action::Action;
use super::panel::{PanelMsg, PanelState};

/// Handle global keys that work regardless of panel visibility
fn handle_global_keys(key_code: KeyCode) -> Option<Action> {
    match key_code {
        KeyCode::Char('q') | KeyCode::Char('Q') => Some(Action::Quit),
        KeyCode::Char('s') | KeyCode::Char('S') | KeyCode::F(2) => Some(Action::Panel(PanelMsg::Toggle)),
        _ => None,
    }
}

/// Keys that edit the form; only live while the panel is open
fn handle_panel_keys(key_code: KeyCode) -> Option<Action> {
    let msg = match key_code {
        KeyCode::Up | KeyCode::BackTab => PanelMsg::FocusPrevious,
        KeyCode::Down | KeyCode::Tab => PanelMsg::FocusNext,
        KeyCode::Left => PanelMsg::CycleFocused(-1),
        KeyCode::Right => PanelMsg::CycleFocused(1),
        KeyCode::Enter | KeyCode::Char(' ') => PanelMsg::ActivateFocused,
        _ => return None,
    };
    Some(Action::Panel(msg))
}

/// Convert a key event to an action
pub fn key_to_action(key: KeyEvent, panel: &PanelState) -> Option<Action> {
    if key.kind == KeyEventKind::Release {
        return None;
    }
    trace!("KEY: {:?} (panel open: {})", key.code, panel.is_open());

    if panel.is_open() {
        if let Some(action) = handle_panel_keys(key.code) {
            return Some(action);
        }
    }
    handle_global_keys(key.code)
}
