/// Screen geometry of the settings panel
///
/// Computed on every render and kept by the panel for hit testing. The root
/// region (toggle button plus the aside when open) is what the outside-click
/// check tests against.
use ratatui::layout::{Position, Rect};
use unicode_width::UnicodeWidthStr;

use super::state::Visibility;
use crate::article::{PickerKind, Slot};
use crate::formatting::BoxChars;

pub const TOGGLE_WIDTH: u16 = 5;
pub const TOGGLE_HEIGHT: u16 = 3;

pub const RESET_LABEL: &str = "[ Reset ]";
pub const APPLY_LABEL: &str = "[ Apply ]";

/// Columns reserved in front of each picker for the focus selector
pub const PICKER_INDENT: u16 = 2;

/// Columns between radio options
pub const RADIO_GAP: u16 = 2;

/// Smallest frame that still has an inner row inside its border
const MIN_ASIDE_HEIGHT: u16 = 3;
const MIN_ASIDE_WIDTH: u16 = 4;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldLayout {
    pub slot: Slot,
    pub title: Rect,
    pub picker: Rect,
    /// One rect per catalog option, radio groups only
    pub options: Vec<Rect>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AsideLayout {
    pub frame: Rect,
    pub heading: Rect,
    pub fields: Vec<FieldLayout>,
    pub separator: Rect,
    pub reset: Rect,
    pub apply: Rect,
}

/// What a pointer position lands on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hit {
    Toggle,
    Field(Slot),
    RadioOption(Slot, usize),
    Reset,
    Apply,
    /// Inside the aside but not on a control
    Inside,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelLayout {
    pub toggle: Rect,
    pub aside: Option<AsideLayout>,
}

impl PanelLayout {
    pub fn compute(area: Rect, visibility: Visibility, panel_width: u16, chars: &BoxChars) -> Self {
        match visibility {
            Visibility::Closed => Self {
                toggle: Rect::new(area.x, area.y, TOGGLE_WIDTH, TOGGLE_HEIGHT).intersection(area),
                aside: None,
            },
            Visibility::Open => {
                let width = panel_width.min(area.width.saturating_sub(TOGGLE_WIDTH));
                let frame = Rect::new(area.x, area.y, width, area.height);
                let fits = frame.height >= MIN_ASIDE_HEIGHT && frame.width >= MIN_ASIDE_WIDTH;
                Self {
                    toggle: Rect::new(area.x + width, area.y, TOGGLE_WIDTH, TOGGLE_HEIGHT)
                        .intersection(area),
                    aside: fits.then(|| AsideLayout::compute(frame, chars)),
                }
            }
        }
    }

    /// Whether a position falls inside the panel root region
    pub fn contains(&self, column: u16, row: u16) -> bool {
        let position = Position::new(column, row);
        self.toggle.contains(position)
            || self
                .aside
                .as_ref()
                .is_some_and(|aside| aside.frame.contains(position))
    }

    pub fn hit(&self, column: u16, row: u16) -> Option<Hit> {
        let position = Position::new(column, row);
        if self.toggle.contains(position) {
            return Some(Hit::Toggle);
        }

        let aside = self.aside.as_ref()?;
        if !aside.frame.contains(position) {
            return None;
        }
        if aside.reset.contains(position) {
            return Some(Hit::Reset);
        }
        if aside.apply.contains(position) {
            return Some(Hit::Apply);
        }
        for field in &aside.fields {
            if let Some(index) = field.options.iter().position(|r| r.contains(position)) {
                return Some(Hit::RadioOption(field.slot, index));
            }
            if field.picker.contains(position) {
                return Some(Hit::Field(field.slot));
            }
        }
        Some(Hit::Inside)
    }
}

impl AsideLayout {
    fn compute(frame: Rect, chars: &BoxChars) -> Self {
        // Border plus one column of horizontal padding
        let inner = Rect::new(
            frame.x.saturating_add(2),
            frame.y.saturating_add(1),
            frame.width.saturating_sub(4),
            frame.height.saturating_sub(2),
        );
        let row = |y: u16| Rect::new(inner.x, y, inner.width, 1).intersection(inner);

        let heading = row(inner.y);
        let mut y = inner.y + 2;
        let mut fields = Vec::with_capacity(Slot::ALL.len());
        let mut separator = Rect::default();

        for slot in Slot::ALL {
            let picker = row(y + 1);
            let options = match slot.picker() {
                PickerKind::RadioGroup => radio_option_rects(slot, picker, chars),
                PickerKind::Select => Vec::new(),
            };
            fields.push(FieldLayout { slot, title: row(y), picker, options });
            y += 3;

            if slot == Slot::FontColor {
                separator = row(y);
                y += 2;
            }
        }

        let reset_width = RESET_LABEL.width() as u16;
        let apply_width = APPLY_LABEL.width() as u16;
        let reset = Rect::new(inner.x, y, reset_width, 1).intersection(inner);
        let apply = Rect::new(inner.right().saturating_sub(apply_width), y, apply_width, 1)
            .intersection(inner);

        Self { frame, heading, fields, separator, reset, apply }
    }
}

fn radio_option_rects(slot: Slot, picker: Rect, chars: &BoxChars) -> Vec<Rect> {
    let glyph_width = chars.radio_on.width().max(chars.radio_off.width()) as u16;
    let mut x = picker.x + PICKER_INDENT;
    slot.catalog()
        .iter()
        .map(|option| {
            let width = glyph_width + 1 + option.title.width() as u16;
            let rect = Rect::new(x, picker.y, width, 1).intersection(picker);
            x = x.saturating_add(width + RADIO_GAP);
            rect
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn area() -> Rect {
        Rect::new(0, 0, 80, 24)
    }

    #[test]
    fn test_closed_layout_is_toggle_only() {
        let layout = PanelLayout::compute(area(), Visibility::Closed, 44, &BoxChars::unicode());
        assert_eq!(layout.toggle, Rect::new(0, 0, TOGGLE_WIDTH, TOGGLE_HEIGHT));
        assert!(layout.aside.is_none());
        assert!(layout.contains(2, 1));
        assert!(!layout.contains(10, 10));
    }

    #[test]
    fn test_open_layout_moves_toggle_to_panel_edge() {
        let layout = PanelLayout::compute(area(), Visibility::Open, 44, &BoxChars::unicode());
        assert_eq!(layout.toggle, Rect::new(44, 0, TOGGLE_WIDTH, TOGGLE_HEIGHT));

        let aside = layout.aside.as_ref().unwrap();
        assert_eq!(aside.frame, Rect::new(0, 0, 44, 24));
        assert_eq!(aside.fields.len(), 5);
        assert!(layout.contains(10, 10));
        assert!(layout.contains(46, 1));
        assert!(!layout.contains(60, 10));
    }

    #[test]
    fn test_open_layout_rows() {
        let layout = PanelLayout::compute(area(), Visibility::Open, 44, &BoxChars::unicode());
        let aside = layout.aside.unwrap();

        assert_eq!(aside.heading.y, 1);
        let picker_rows: Vec<u16> = aside.fields.iter().map(|f| f.picker.y).collect();
        // Separator sits between font color and background color
        assert_eq!(picker_rows, vec![4, 7, 10, 15, 18]);
        assert_eq!(aside.separator.y, 12);
        assert_eq!(aside.reset, Rect::new(2, 20, 9, 1));
        assert_eq!(aside.apply, Rect::new(33, 20, 9, 1));
    }

    #[test]
    fn test_radio_options_only_for_font_size() {
        let layout = PanelLayout::compute(area(), Visibility::Open, 44, &BoxChars::unicode());
        let aside = layout.aside.unwrap();
        for field in &aside.fields {
            if field.slot == Slot::FontSize {
                assert_eq!(field.options.len(), 3);
                // "◉ 18px" is 6 wide, two columns of gap
                assert_eq!(field.options[0], Rect::new(4, 7, 6, 1));
                assert_eq!(field.options[1], Rect::new(12, 7, 6, 1));
            } else {
                assert!(field.options.is_empty());
            }
        }
    }

    #[test]
    fn test_hit_targets() {
        let layout = PanelLayout::compute(area(), Visibility::Open, 44, &BoxChars::unicode());
        assert_eq!(layout.hit(45, 1), Some(Hit::Toggle));
        assert_eq!(layout.hit(5, 4), Some(Hit::Field(Slot::FontFamily)));
        assert_eq!(layout.hit(13, 7), Some(Hit::RadioOption(Slot::FontSize, 1)));
        assert_eq!(layout.hit(2, 7), Some(Hit::Field(Slot::FontSize)));
        assert_eq!(layout.hit(3, 20), Some(Hit::Reset));
        assert_eq!(layout.hit(40, 20), Some(Hit::Apply));
        assert_eq!(layout.hit(20, 22), Some(Hit::Inside));
        assert_eq!(layout.hit(70, 10), None);
    }

    #[test]
    fn test_panel_width_clamped_to_area() {
        let small = Rect::new(0, 0, 30, 24);
        let layout = PanelLayout::compute(small, Visibility::Open, 44, &BoxChars::unicode());
        assert_eq!(layout.aside.unwrap().frame.width, 25);
        assert_eq!(layout.toggle.x, 25);
    }

    #[test]
    fn test_open_layout_without_room_for_border_has_no_aside() {
        for height in 0..MIN_ASIDE_HEIGHT {
            let short = Rect::new(0, 0, 80, height);
            let layout = PanelLayout::compute(short, Visibility::Open, 44, &BoxChars::unicode());
            assert!(layout.aside.is_none(), "height {}", height);
            assert!(layout.toggle.height <= height);
        }
    }

    #[test]
    fn test_rows_past_the_frame_are_empty() {
        let short = Rect::new(0, 0, 80, 6);
        let layout = PanelLayout::compute(short, Visibility::Open, 44, &BoxChars::unicode());
        let aside = layout.aside.unwrap();

        assert!(!aside.heading.is_empty());
        let fields_past_bottom = aside.fields.iter().filter(|f| f.picker.y >= short.bottom());
        for field in fields_past_bottom {
            assert!(field.title.is_empty() || field.title.y < short.bottom());
            assert!(field.picker.is_empty());
            assert!(field.options.iter().all(|r| r.is_empty()));
        }
        assert!(aside.reset.is_empty());
        assert!(aside.apply.is_empty());
    }
}
