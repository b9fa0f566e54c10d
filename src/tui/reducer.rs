use chrono::Local;
use tracing::debug;

use super::action::{Action, Effect};
use super::state::AppState;

/// Pure state reducer - like Redux reducer
///
/// Takes current state and an action, returns new state and optional effect.
/// Panel messages are routed by the runtime and never reach this function
/// with any effect on `AppState`.
pub fn reduce(mut state: AppState, action: Action) -> (AppState, Effect) {
    match action {
        Action::ApplySettings(record) => {
            let changed = record.diff(state.store.current());
            debug!("SETTINGS: applying record, changed slots {:?}", changed);
            state.store.update(record);
            state.system.last_applied = Some(Local::now());

            let message = if changed.is_empty() {
                "Settings applied (no changes)".to_string()
            } else {
                let names = changed.iter().map(|slot| slot.title()).collect::<Vec<_>>();
                format!("Settings applied: {}", names.join(", "))
            };
            (
                state,
                Effect::Action(Action::SetStatusMessage {
                    message,
                    is_error: false,
                }),
            )
        }
        Action::SetStatusMessage { message, is_error } => {
            state.system.status_message = Some(message);
            state.system.status_is_error = is_error;
            (state, Effect::None)
        }
        Action::UpdateTerminalSize(width, height) => {
            state.system.terminal_size = (width, height);
            (state, Effect::None)
        }
        Action::Panel(_) | Action::Quit => (state, Effect::None),
    }
}
