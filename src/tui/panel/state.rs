use crate::article::{SettingsRecord, Slot};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Visibility {
    Open,
    #[default]
    Closed,
}

impl Visibility {
    pub fn toggled(self) -> Self {
        match self {
            Visibility::Open => Visibility::Closed,
            Visibility::Closed => Visibility::Open,
        }
    }
}

/// A focusable control inside the open panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusTarget {
    Field(Slot),
    Reset,
    Apply,
}

impl FocusTarget {
    /// Tab order: the five pickers, then Reset, then Apply
    pub const ORDER: [FocusTarget; 7] = [
        FocusTarget::Field(Slot::FontFamily),
        FocusTarget::Field(Slot::FontSize),
        FocusTarget::Field(Slot::FontColor),
        FocusTarget::Field(Slot::BackgroundColor),
        FocusTarget::Field(Slot::ContentWidth),
        FocusTarget::Reset,
        FocusTarget::Apply,
    ];

    fn index(&self) -> usize {
        Self::ORDER.iter().position(|t| t == self).unwrap_or(0)
    }

    /// Target `step` positions away in tab order, wrapping
    pub fn step(&self, step: isize) -> FocusTarget {
        let len = Self::ORDER.len() as isize;
        Self::ORDER[(self.index() as isize + step).rem_euclid(len) as usize]
    }
}

/// Per-instance panel state
#[derive(Debug, Clone)]
pub struct PanelState {
    pub visibility: Visibility,
    pub draft: SettingsRecord,
    pub focus: FocusTarget,
}

impl PanelState {
    pub fn new(current: &SettingsRecord) -> Self {
        Self {
            visibility: Visibility::Closed,
            draft: *current,
            focus: FocusTarget::Field(Slot::FontFamily),
        }
    }

    pub fn is_open(&self) -> bool {
        self.visibility == Visibility::Open
    }
}
