//! Collapsible article settings panel
//!
//! The panel owns its visibility and a draft copy of the settings. Edits only
//! touch the draft; the host sees a change through `on_apply`, which is called
//! exactly once per submit and once per reset.
//!
//! While open, the panel holds one global pointer-down and one global key-down
//! subscription. They are acquired on entering `Open` and dropped on leaving it
//! or when the panel itself is dropped.

pub mod layout;
pub mod state;
mod view;

pub use layout::{Hit, PanelLayout};
pub use state::{FocusTarget, PanelState, Visibility};

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};
use ratatui::layout::Rect;
use tracing::{debug, trace};

use crate::article::{OptionValue, PickerKind, SettingsRecord, Slot, DEFAULT_SETTINGS};
use crate::formatting::BoxChars;
use super::events::{GlobalEvents, ListenerKind, OwnerId, Subscription};

/// Callback through which the panel pushes a complete record to the host
pub type ApplyCallback = Box<dyn FnMut(SettingsRecord)>;

/// Messages understood by the panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelMsg {
    Toggle,
    SetSlot(Slot, OptionValue),
    Submit,
    Reset,
    FocusNext,
    FocusPrevious,
    Focus(FocusTarget),
    /// Select the previous/next option of the focused picker
    CycleFocused(isize),
    /// Enter on the focused control
    ActivateFocused,
}

/// Global listeners held while the panel is open
#[derive(Debug)]
struct PanelListeners {
    _pointer: Subscription,
    _key: Subscription,
}

/// Where the panel was last laid out
#[derive(Debug, Clone)]
struct Mount {
    area: Rect,
    panel_width: u16,
    box_chars: BoxChars,
}

pub struct SettingsPanel {
    owner: OwnerId,
    events: GlobalEvents,
    state: PanelState,
    listeners: Option<PanelListeners>,
    mount: Option<Mount>,
    on_apply: ApplyCallback,
}

impl std::fmt::Debug for SettingsPanel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SettingsPanel")
            .field("owner", &self.owner)
            .field("state", &self.state)
            .field("listening", &self.listeners.is_some())
            .field("mounted", &self.mount.is_some())
            .finish()
    }
}

impl SettingsPanel {
    /// Create a closed panel whose draft starts as a copy of `current`
    pub fn new<F>(current: &SettingsRecord, on_apply: F, events: &GlobalEvents) -> Self
    where
        F: FnMut(SettingsRecord) + 'static,
    {
        let owner = events.register_owner();
        debug!("PANEL: created {:?}", owner);
        Self {
            owner,
            events: events.clone(),
            state: PanelState::new(current),
            listeners: None,
            mount: None,
            on_apply: Box::new(on_apply),
        }
    }

    pub fn owner(&self) -> OwnerId {
        self.owner
    }

    pub fn state(&self) -> &PanelState {
        &self.state
    }

    pub fn visibility(&self) -> Visibility {
        self.state.visibility
    }

    pub fn is_open(&self) -> bool {
        self.state.is_open()
    }

    pub fn draft(&self) -> &SettingsRecord {
        &self.state.draft
    }

    pub fn focus(&self) -> FocusTarget {
        self.state.focus
    }

    pub fn update(&mut self, msg: PanelMsg) {
        trace!("PANEL: {:?}", msg);
        match msg {
            PanelMsg::Toggle => self.toggle(),
            PanelMsg::SetSlot(slot, value) => self.set_slot(slot, value),
            PanelMsg::Submit => self.submit(),
            PanelMsg::Reset => self.reset(),
            PanelMsg::FocusNext => self.state.focus = self.state.focus.step(1),
            PanelMsg::FocusPrevious => self.state.focus = self.state.focus.step(-1),
            PanelMsg::Focus(target) => self.state.focus = target,
            PanelMsg::CycleFocused(step) => self.cycle_focused(step),
            PanelMsg::ActivateFocused => match self.state.focus {
                FocusTarget::Field(_) | FocusTarget::Apply => self.submit(),
                FocusTarget::Reset => self.reset(),
            },
        }
    }

    pub fn toggle(&mut self) {
        self.set_visibility(self.state.visibility.toggled());
    }

    /// Replace one slot of the draft; nothing is committed
    pub fn set_slot(&mut self, slot: Slot, value: OptionValue) {
        self.state.draft = self.state.draft.with_slot(slot, value);
        debug!("PANEL: draft {} = {}", slot, value.value);
    }

    /// Commit the draft and close
    pub fn submit(&mut self) {
        let draft = self.state.draft;
        debug!("PANEL: submit {:?}", draft.diff(&DEFAULT_SETTINGS));
        (self.on_apply)(draft);
        self.set_visibility(Visibility::Closed);
    }

    /// Reset draft and applied settings to the defaults; visibility is kept
    pub fn reset(&mut self) {
        debug!("PANEL: reset to defaults");
        self.state.draft = DEFAULT_SETTINGS;
        (self.on_apply)(DEFAULT_SETTINGS);
    }

    /// Global pointer-down listener; returns true if it closed the panel
    pub fn on_global_pointer_down(&mut self, column: u16, row: u16) -> bool {
        if !self.is_open() {
            return false;
        }
        let Some(layout) = self.layout() else {
            trace!("PANEL: pointer-down ignored, not mounted");
            return false;
        };
        if layout.contains(column, row) {
            return false;
        }
        debug!("PANEL: outside pointer-down at ({}, {}), closing", column, row);
        self.set_visibility(Visibility::Closed);
        true
    }

    /// Global key-down listener; returns true if it closed the panel
    pub fn on_global_key(&mut self, key: KeyEvent) -> bool {
        if !self.is_open() || key.kind == KeyEventKind::Release || key.code != KeyCode::Esc {
            return false;
        }
        debug!("PANEL: Escape pressed, closing");
        self.set_visibility(Visibility::Closed);
        true
    }

    /// Pointer-down on the panel's own controls; returns true if consumed
    pub fn handle_pointer_down(&mut self, column: u16, row: u16) -> bool {
        let Some(hit) = self.layout().and_then(|layout| layout.hit(column, row)) else {
            return false;
        };
        trace!("PANEL: pointer-down hit {:?}", hit);

        match hit {
            Hit::Toggle => self.toggle(),
            Hit::Reset => {
                self.state.focus = FocusTarget::Reset;
                self.reset();
            }
            Hit::Apply => {
                self.state.focus = FocusTarget::Apply;
                self.submit();
            }
            Hit::RadioOption(slot, index) => {
                self.state.focus = FocusTarget::Field(slot);
                if let Some(option) = slot.catalog().get(index) {
                    self.set_slot(slot, *option);
                }
            }
            Hit::Field(slot) => {
                self.state.focus = FocusTarget::Field(slot);
                if slot.picker() == PickerKind::Select {
                    self.cycle_focused(1);
                }
            }
            Hit::Inside => {}
        }
        true
    }

    /// Record where the panel is drawn; enables pointer handling
    pub fn mount(&mut self, area: Rect, panel_width: u16, box_chars: &BoxChars) {
        self.mount = Some(Mount {
            area,
            panel_width,
            box_chars: box_chars.clone(),
        });
    }

    pub fn unmount(&mut self) {
        self.mount = None;
    }

    pub fn is_mounted(&self) -> bool {
        self.mount.is_some()
    }

    /// Current geometry, if mounted
    pub fn layout(&self) -> Option<PanelLayout> {
        self.mount.as_ref().map(|mount| {
            PanelLayout::compute(mount.area, self.state.visibility, mount.panel_width, &mount.box_chars)
        })
    }

    fn cycle_focused(&mut self, step: isize) {
        match self.state.focus {
            FocusTarget::Field(slot) => {
                let next = slot.cycle(&self.state.draft.get(slot), step);
                self.set_slot(slot, next);
            }
            FocusTarget::Reset => self.state.focus = FocusTarget::Apply,
            FocusTarget::Apply => self.state.focus = FocusTarget::Reset,
        }
    }

    fn set_visibility(&mut self, visibility: Visibility) {
        if self.state.visibility == visibility {
            return;
        }
        self.state.visibility = visibility;
        debug!("PANEL: {:?}", visibility);

        match visibility {
            Visibility::Open => {
                if self.listeners.is_none() {
                    self.listeners = Some(PanelListeners {
                        _pointer: self.events.subscribe(ListenerKind::PointerDown, self.owner),
                        _key: self.events.subscribe(ListenerKind::KeyDown, self.owner),
                    });
                }
            }
            Visibility::Closed => {
                self.listeners = None;
            }
        }
    }
}

impl Drop for SettingsPanel {
    fn drop(&mut self) {
        if self.listeners.take().is_some() {
            debug!("PANEL: dropped while open, listeners released");
        }
    }
}
