use crossterm::event::{Event, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{buffer::Buffer, layout::Rect};
use tokio::sync::mpsc;
use tracing::{debug, trace};

use super::action::{Action, Effect};
use super::events::{GlobalEvents, ListenerKind};
use super::keys::key_to_action;
use super::panel::SettingsPanel;
use super::reducer::reduce;
use super::state::AppState;
use super::widgets::{ArticleView, KeyHint, RenderableWidget, StatusBar};
use crate::article::ArticleStyle;

/// Rows reserved at the bottom of the screen for the status bar
const STATUS_BAR_HEIGHT: u16 = 2;

/// Application runtime - owns state, the settings panel and input routing
///
/// The Runtime is responsible for:
/// - Managing the application state
/// - Owning the single settings panel and the global listener registry
/// - Dispatching actions through the reducer
/// - Routing terminal input to global listeners, then the panel, then the keymap
pub struct Runtime {
    /// Current application state
    state: AppState,

    panel: SettingsPanel,
    events: GlobalEvents,

    /// Actions queued by the panel's apply callback, which holds the sender
    action_rx: mpsc::UnboundedReceiver<Action>,

    should_quit: bool,
}

impl Runtime {
    /// Create a new runtime; the panel's draft starts from the store's record
    pub fn new(initial_state: AppState) -> Self {
        let (action_tx, action_rx) = mpsc::unbounded_channel();
        let events = GlobalEvents::new();

        let panel = SettingsPanel::new(
            initial_state.settings(),
            move |record| {
                if action_tx.send(Action::ApplySettings(record)).is_err() {
                    tracing::warn!("RUNTIME: action channel closed, dropping applied settings");
                }
            },
            &events,
        );

        Self {
            state: initial_state,
            panel,
            events,
            action_rx,
            should_quit: false,
        }
    }

    /// Get a reference to the current state
    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn panel(&self) -> &SettingsPanel {
        &self.panel
    }

    pub fn events(&self) -> &GlobalEvents {
        &self.events
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Dispatch an action to the panel or the reducer
    ///
    /// Uses mem::take to avoid cloning AppState.
    pub fn dispatch(&mut self, action: Action) {
        trace!("ACTION: Dispatching {:?}", action);

        let effect = match action {
            Action::Panel(msg) => {
                self.panel.update(msg);
                Effect::None
            }
            Action::Quit => {
                debug!("ACTION: Quit");
                self.should_quit = true;
                Effect::None
            }
            action => {
                let state = std::mem::take(&mut self.state);
                let (new_state, effect) = reduce(state, action);
                self.state = new_state;
                effect
            }
        };

        self.execute_effect(effect);
    }

    fn execute_effect(&mut self, effect: Effect) {
        match effect {
            Effect::None => {}
            Effect::Action(action) => self.dispatch(action),
        }
    }

    /// Process all pending actions in the queue
    ///
    /// Returns the number of actions processed
    pub fn process_actions(&mut self) -> usize {
        let mut count = 0;
        while let Ok(action) = self.action_rx.try_recv() {
            self.dispatch(action);
            count += 1;
        }
        count
    }

    /// Route one terminal event; returns true if anything may need a redraw
    pub fn handle_event(&mut self, event: Event) -> bool {
        let handled = match event {
            Event::Key(key) => self.handle_key(key),
            Event::Mouse(mouse) => self.handle_mouse(mouse),
            Event::Resize(width, height) => {
                self.dispatch(Action::UpdateTerminalSize(width, height));
                true
            }
            _ => false,
        };
        self.process_actions();
        handled
    }

    fn handle_key(&mut self, key: KeyEvent) -> bool {
        if self.has_global_listener(ListenerKind::KeyDown) && self.panel.on_global_key(key) {
            return true;
        }

        match key_to_action(key, self.panel.state()) {
            Some(action) => {
                let render = action.should_render();
                self.dispatch(action);
                render
            }
            None => false,
        }
    }

    fn handle_mouse(&mut self, mouse: MouseEvent) -> bool {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return false;
        }
        trace!("MOUSE: down at ({}, {})", mouse.column, mouse.row);

        let mut handled = false;
        if self.has_global_listener(ListenerKind::PointerDown) {
            handled = self.panel.on_global_pointer_down(mouse.column, mouse.row);
        }
        self.panel.handle_pointer_down(mouse.column, mouse.row) || handled
    }

    /// Whether the panel currently holds a global listener of `kind`
    fn has_global_listener(&self, kind: ListenerKind) -> bool {
        self.events.subscribers(kind).contains(&self.panel.owner())
    }

    /// Draw the article, the panel over it and the status bar
    pub fn render(&mut self, area: Rect, buf: &mut Buffer) {
        let status_height = STATUS_BAR_HEIGHT.min(area.height);
        let content = Rect::new(area.x, area.y, area.width, area.height - status_height);
        let status = Rect::new(area.x, content.bottom(), area.width, status_height);
        let display = &self.state.system.config.display;

        let style = ArticleStyle::from_settings(self.state.settings());
        ArticleView::new(style).render(content, buf, display);

        self.panel.render(content, buf, display);

        StatusBar::new()
            .with_message(
                self.state.system.status_message.clone(),
                self.state.system.status_is_error,
            )
            .with_last_applied(self.state.system.formatted_last_applied())
            .with_hints(self.key_hints())
            .render(status, buf, display);
    }

    fn key_hints(&self) -> Vec<KeyHint> {
        if self.panel.is_open() {
            vec![
                KeyHint::new("↑↓", "Focus"),
                KeyHint::new("←→", "Change"),
                KeyHint::new("ENTER", "Apply"),
                KeyHint::new("ESC", "Close"),
            ]
        } else {
            vec![KeyHint::new("s", "Settings"), KeyHint::new("q", "Quit")]
        }
    }
}
