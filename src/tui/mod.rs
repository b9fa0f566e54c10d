// Module declarations
pub mod widgets;
pub mod panel;

pub mod action;
pub mod events;
pub mod keys;
pub mod reducer;
pub mod runtime;
pub mod state;

#[cfg(test)]
pub mod testing;


pub use action::{Action, Effect};
pub use events::{GlobalEvents, ListenerKind, Subscription};
pub use keys::key_to_action;
pub use panel::{PanelMsg, SettingsPanel, Visibility};
pub use reducer::reduce;
pub use runtime::Runtime;
pub use state::AppState;

use std::io;
use std::time::Duration;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    Terminal,
};
use crate::article::SettingsRecord;
use crate::config::Config;

/// Main entry point for TUI mode
pub fn run(config: Config, initial: SettingsRecord) -> Result<(), io::Error> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut runtime = Runtime::new(AppState::new(config, initial));
    let size = terminal.size()?;
    runtime.dispatch(Action::UpdateTerminalSize(size.width, size.height));

    let result = event_loop(&mut terminal, &mut runtime);

    // Restore terminal even if the loop failed
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    runtime: &mut Runtime,
) -> Result<(), io::Error> {
    let mut needs_render = true;

    loop {
        let actions_processed = runtime.process_actions();
        if actions_processed > 0 {
            tracing::debug!("LOOP: Processed {} actions", actions_processed);
            needs_render = true;
        }

        if runtime.should_quit() {
            tracing::debug!("ACTION: Quitting application");
            return Ok(());
        }

        if needs_render {
            terminal.draw(|f| {
                let area = f.area();
                runtime.render(area, f.buffer_mut());
            })?;
            needs_render = false;
        }

        if event::poll(Duration::from_millis(100))? {
            needs_render = runtime.handle_event(event::read()?);
        }
    }
}
